// File:    grille.rs
// Author:  apezoo
// Date:    2025-08-30
//
// Description: The turning-grille stencil: construction, validity checking, rotation, and the textual grid format.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! This module contains the stencil model used by the cipher.

use log::debug;
use rand::Rng;

use crate::error::GrilleError;

/// Direction of a 90° stencil turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Turn the stencil 90° clockwise.
    Clockwise,
    /// Turn the stencil 90° counter-clockwise.
    CounterClockwise,
}

/// A square stencil of punched holes for the turning-grille cipher.
///
/// `true` cells are holes, `false` cells are blocked. Cells are indexed
/// `[row][col]` with the origin at the top-left. Odd-size grilles reserve
/// their exact center cell: it is never a hole and the cipher never writes
/// a character to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grille {
    size: usize,
    cells: Vec<Vec<bool>>,
}

impl Grille {
    /// Creates an all-blocked stencil with the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`GrilleError::InvalidSize`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, GrilleError> {
        if size == 0 {
            return Err(GrilleError::InvalidSize { size });
        }
        Ok(Self {
            size,
            cells: vec![vec![false; size]; size],
        })
    }

    /// Side length of the stencil.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of characters one full four-turn cipher pass consumes.
    ///
    /// `size²` for even sizes; odd sizes reserve the center cell and hold one
    /// character less.
    #[must_use]
    pub fn capacity(&self) -> usize {
        if self.size % 2 == 0 {
            self.size * self.size
        } else {
            self.size * self.size - 1
        }
    }

    /// Whether the cell at `(row, col)` is a hole.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` lies outside the stencil.
    #[must_use]
    pub fn is_hole(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    /// Number of holes in the current orientation.
    #[must_use]
    pub fn hole_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&hole| hole).count()
    }

    /// The reserved center cell, present only for odd sizes.
    fn center(&self) -> Option<(usize, usize)> {
        (self.size % 2 == 1).then_some((self.size / 2, self.size / 2))
    }

    /// Checks the Fleissner validity of the current orientation.
    ///
    /// Every hole is folded onto the target `(row / 2, col / 2)`; the stencil
    /// is valid when no two holes fold onto the same target and the reserved
    /// center cell of an odd-size stencil is blocked. A valid stencil never
    /// deposits two characters on the same output cell within a single
    /// orientation of a cipher pass.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let folded_size = self.size.div_ceil(2);
        let mut folded = vec![vec![false; folded_size]; folded_size];
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &hole) in cells.iter().enumerate() {
                if !hole {
                    continue;
                }
                if self.center() == Some((row, col)) {
                    return false;
                }
                if folded[row / 2][col / 2] {
                    return false;
                }
                folded[row / 2][col / 2] = true;
            }
        }
        true
    }

    /// Replaces the hole pattern with a randomly generated valid one.
    ///
    /// Punches exactly one hole per folded target, chosen uniformly among the
    /// cells that fold onto it, skipping the reserved center cell of odd
    /// sizes. Rejection sampling over uniform matrices would also work, but
    /// its acceptance rate collapses as the stencil grows; the direct
    /// construction always terminates and always satisfies
    /// [`Self::is_valid`].
    pub fn generate_random<R: Rng>(&mut self, rng: &mut R) {
        for row in &mut self.cells {
            row.fill(false);
        }
        let folded_size = self.size.div_ceil(2);
        for folded_row in 0..folded_size {
            for folded_col in 0..folded_size {
                let mut members = Vec::with_capacity(4);
                for row in (folded_row * 2)..(folded_row * 2 + 2).min(self.size) {
                    for col in (folded_col * 2)..(folded_col * 2 + 2).min(self.size) {
                        if self.center() != Some((row, col)) {
                            members.push((row, col));
                        }
                    }
                }
                // Empty only for the size-1 stencil, whose sole cell is the
                // reserved center.
                if members.is_empty() {
                    continue;
                }
                let (row, col) = members[rng.random_range(0..members.len())];
                self.cells[row][col] = true;
            }
        }
        debug!(
            "generated random {size}x{size} grille with {holes} holes",
            size = self.size,
            holes = self.hole_count()
        );
    }

    /// Returns the stencil turned 90° in the given direction.
    ///
    /// Pure transform: the receiver keeps its orientation. Callers decide
    /// whether to replace their stored grille with the result.
    #[must_use]
    pub fn rotate(&self, rotation: Rotation) -> Self {
        let size = self.size;
        let mut rotated = vec![vec![false; size]; size];
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &hole) in cells.iter().enumerate() {
                let (new_row, new_col) = match rotation {
                    Rotation::Clockwise => (col, size - 1 - row),
                    Rotation::CounterClockwise => (size - 1 - col, row),
                };
                rotated[new_row][new_col] = hole;
            }
        }
        Self {
            size,
            cells: rotated,
        }
    }

    /// Toggles the hole at `(row, col)` together with its rotational images.
    ///
    /// Punching a hole clears the three cells this hole will cover in the
    /// other orientations, so one full turn never visits a cell twice through
    /// it. Clearing a hole clears only the cell itself. The reserved center
    /// cell of an odd-size stencil is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` lies outside the stencil.
    pub fn toggle_symmetric(&mut self, row: usize, col: usize) {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) lies outside a {size}x{size} grille",
            size = self.size
        );
        if self.center() == Some((row, col)) {
            return;
        }
        if self.cells[row][col] {
            self.cells[row][col] = false;
            return;
        }
        let last = self.size - 1;
        self.cells[col][last - row] = false;
        self.cells[last - row][last - col] = false;
        self.cells[last - col][row] = false;
        self.cells[row][col] = true;
    }

    /// Parses the textual grid format: newline-separated rows of `0`/`1`.
    ///
    /// There is no header; the size is inferred from the input, which must be
    /// square.
    ///
    /// # Errors
    ///
    /// Returns [`GrilleError::InvalidSize`] for empty input and
    /// [`GrilleError::MalformedGrid`] for ragged rows, non-square input, or
    /// characters other than `0` and `1`.
    pub fn load(text: &str) -> Result<Self, GrilleError> {
        let rows: Vec<&str> = text.lines().collect();
        if rows.is_empty() {
            return Err(GrilleError::InvalidSize { size: 0 });
        }
        let size = rows.len();
        let mut cells = Vec::with_capacity(size);
        for row in rows {
            let columns = row.chars().count();
            if columns != size {
                return Err(GrilleError::MalformedGrid {
                    reason: format!("expected {size} columns per row, got {columns}"),
                });
            }
            let mut parsed = Vec::with_capacity(size);
            for ch in row.chars() {
                match ch {
                    '0' => parsed.push(false),
                    '1' => parsed.push(true),
                    other => {
                        return Err(GrilleError::MalformedGrid {
                            reason: format!("invalid cell character {other:?}"),
                        });
                    }
                }
            }
            cells.push(parsed);
        }
        Ok(Self { size, cells })
    }

    /// Serializes the stencil into the textual grid format.
    ///
    /// Each row is a run of `0`/`1` characters terminated by a newline.
    /// Feeding the output back into [`Self::load`] reproduces the stencil
    /// exactly.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for row in &self.cells {
            out.extend(row.iter().map(|&hole| if hole { '1' } else { '0' }));
            out.push('\n');
        }
        out
    }
}
