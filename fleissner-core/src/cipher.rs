// File:    cipher.rs
// Author:  apezoo
// Date:    2025-08-30
//
// Description: The forward and inverse turning-grille transforms, scattering text through four orientations of a stencil.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! This module contains the forward and inverse cipher transforms.

use rand::Rng;

use crate::grille::{Grille, Rotation};

/// A uniformly random ASCII lowercase letter, the padding alphabet.
fn filler<R: Rng>(rng: &mut R) -> char {
    char::from(b'a' + rng.random_range(0..26u8))
}

/// Encrypts `plaintext` through four turns of the stencil.
///
/// Spaces are stripped first. The text is consumed in [`Grille::capacity`]
/// sized chunks, each producing one ciphertext block of exactly that length;
/// blocks are joined with single spaces, the interchange format [`decode`]
/// reads back. Chunks shorter than the capacity are padded with uniformly
/// random lowercase letters, as are hole visits past the end of the text, so
/// encryption never fails on short input. Empty input produces a single
/// all-filler block.
///
/// The caller's grille keeps its orientation: the four turns happen on a
/// working copy. Output is deterministic for a given plaintext, grille, turn
/// direction and RNG state.
#[must_use]
pub fn encode<R: Rng>(grille: &Grille, plaintext: &str, rotation: Rotation, rng: &mut R) -> String {
    if grille.capacity() == 0 {
        return String::new();
    }
    let text: Vec<char> = plaintext.chars().filter(|&ch| ch != ' ').collect();
    if text.is_empty() {
        return encode_block(grille, &[], rotation, rng);
    }
    let blocks: Vec<String> = text
        .chunks(grille.capacity())
        .map(|chunk| encode_block(grille, chunk, rotation, rng))
        .collect();
    blocks.join(" ")
}

/// Runs one full four-turn pass over a single chunk of text.
fn encode_block<R: Rng>(grille: &Grille, chunk: &[char], rotation: Rotation, rng: &mut R) -> String {
    let size = grille.size();
    let mut grid: Vec<Vec<Option<char>>> = vec![vec![None; size]; size];
    let mut stencil = grille.clone();
    let mut text = chunk.iter().copied();
    for _ in 0..4 {
        for (row, cells) in grid.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                if stencil.is_hole(row, col) {
                    *cell = Some(text.next().unwrap_or_else(|| filler(rng)));
                }
            }
        }
        stencil = stencil.rotate(rotation);
    }
    grid.into_iter().flatten().flatten().collect()
}

/// Decrypts a space-separated sequence of ciphertext blocks.
///
/// Each block is laid row-major into a grid, skipping the reserved center
/// cell of odd sizes, then read back through four turns of the stencil in the
/// same order encryption used. Block outputs are concatenated in block order.
/// Padding characters inserted during encryption are not stripped; they are
/// indistinguishable from message text.
///
/// The caller's grille keeps its orientation.
#[must_use]
pub fn decode(grille: &Grille, ciphertext: &str, rotation: Rotation) -> String {
    ciphertext
        .split(' ')
        .filter(|block| !block.is_empty())
        .map(|block| decode_block(grille, block, rotation))
        .collect()
}

/// Reads one ciphertext block back through four turns of the stencil.
fn decode_block(grille: &Grille, block: &str, rotation: Rotation) -> String {
    let size = grille.size();
    let center = (size % 2 == 1).then_some((size / 2, size / 2));
    let mut grid: Vec<Vec<Option<char>>> = vec![vec![None; size]; size];
    let mut text = block.chars();
    for (row, cells) in grid.iter_mut().enumerate() {
        for (col, cell) in cells.iter_mut().enumerate() {
            if center == Some((row, col)) {
                continue;
            }
            *cell = text.next();
        }
    }
    let mut decoded = String::new();
    let mut stencil = grille.clone();
    for _ in 0..4 {
        for (row, cells) in grid.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                match cell {
                    Some(ch) if stencil.is_hole(row, col) => decoded.push(ch),
                    _ => {}
                }
            }
        }
        stencil = stencil.rotate(rotation);
    }
    decoded
}
