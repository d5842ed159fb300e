//! Command-line interface for the Fleissner (turning-grille) transposition cipher.
//!
//! Provides subcommands to generate grille files and to encode and decode text
//! with them.

use clap::{Parser, Subcommand};
use fleissner_core::cipher;
use fleissner_core::grille::{Grille, Rotation};
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new random grille file
    Generate {
        /// Side length of the grille
        #[arg(short, long)]
        size: usize,

        /// The path to save the grille file
        #[arg(short, long)]
        output: String,

        /// Seed for reproducible generation
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt text with a grille file
    Encode {
        /// The path of the grille file
        #[arg(short, long)]
        grille: String,

        /// The text to encrypt
        #[arg(short, long)]
        text: String,

        /// Turn the stencil counter-clockwise
        #[arg(long)]
        counter_clockwise: bool,

        /// Seed for reproducible padding
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Decrypt ciphertext blocks with a grille file
    Decode {
        /// The path of the grille file
        #[arg(short, long)]
        grille: String,

        /// The ciphertext blocks to decrypt
        #[arg(short, long)]
        text: String,

        /// Turn the stencil counter-clockwise
        #[arg(long)]
        counter_clockwise: bool,
    },
}

fn load_grille(path: &str) -> Option<Grille> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read grille file '{path}': {e}");
            return None;
        }
    };
    match Grille::load(&text) {
        Ok(grille) => Some(grille),
        Err(e) => {
            error!("Failed to parse grille file '{path}': {e}");
            None
        }
    }
}

const fn rotation(counter_clockwise: bool) -> Rotation {
    if counter_clockwise {
        Rotation::CounterClockwise
    } else {
        Rotation::Clockwise
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { size, output, seed } => {
            let mut grille = match Grille::new(size) {
                Ok(grille) => grille,
                Err(e) => {
                    error!("Failed to create grille: {e}");
                    return ExitCode::FAILURE;
                }
            };
            match seed {
                Some(seed) => grille.generate_random(&mut StdRng::seed_from_u64(seed)),
                None => grille.generate_random(&mut rand::rng()),
            }
            if let Err(e) = fs::write(&output, grille.to_text()) {
                error!("Failed to write grille file '{output}': {e}");
                return ExitCode::FAILURE;
            }
            info!("Generated a {size}x{size} grille at '{output}'.");
            ExitCode::SUCCESS
        }
        Commands::Encode {
            grille,
            text,
            counter_clockwise,
            seed,
        } => {
            let Some(grille) = load_grille(&grille) else {
                return ExitCode::FAILURE;
            };
            let ciphertext = match seed {
                Some(seed) => cipher::encode(
                    &grille,
                    &text,
                    rotation(counter_clockwise),
                    &mut StdRng::seed_from_u64(seed),
                ),
                None => cipher::encode(&grille, &text, rotation(counter_clockwise), &mut rand::rng()),
            };
            println!("{ciphertext}");
            ExitCode::SUCCESS
        }
        Commands::Decode {
            grille,
            text,
            counter_clockwise,
        } => {
            let Some(grille) = load_grille(&grille) else {
                return ExitCode::FAILURE;
            };
            println!("{}", cipher::decode(&grille, &text, rotation(counter_clockwise)));
            ExitCode::SUCCESS
        }
    }
}
