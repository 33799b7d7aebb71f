//! waveforge CLI - renders the procedural sound-effect catalog to WAV files.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

mod commands;

/// waveforge - procedural sound-effect generator
#[derive(Parser)]
#[command(name = "waveforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every preset in the catalog
    List,

    /// Render one preset to a WAV file
    Generate {
        /// Preset name (see `list`)
        #[arg(short, long)]
        preset: String,

        /// Output directory
        #[arg(short, long, default_value = "generated_sounds")]
        out: String,

        /// Sample rate in Hz
        #[arg(long, default_value_t = 44100)]
        sample_rate: u32,

        /// Base seed for presets with noise layers
        #[arg(long, default_value_t = 42)]
        seed: u32,
    },

    /// Render the entire catalog
    GenerateAll {
        /// Output directory
        #[arg(short, long, default_value = "generated_sounds")]
        out: String,

        /// Sample rate in Hz
        #[arg(long, default_value_t = 44100)]
        sample_rate: u32,

        /// Base seed for presets with noise layers
        #[arg(long, default_value_t = 42)]
        seed: u32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List => commands::list(),
        Commands::Generate {
            preset,
            out,
            sample_rate,
            seed,
        } => commands::generate(&preset, &out, sample_rate, seed),
        Commands::GenerateAll {
            out,
            sample_rate,
            seed,
        } => commands::generate_all(&out, sample_rate, seed),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
