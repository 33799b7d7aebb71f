//! Command implementations for the waveforge binary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use colored::Colorize;

use waveforge_presets::Preset;
use waveforge_synth::SoundEngine;

/// Prints every catalog preset name, one per line.
pub fn list() -> Result<()> {
    for preset in Preset::all() {
        println!("{}", preset.name());
    }
    Ok(())
}

/// Renders a single preset to `<out_dir>/<name>.wav`.
pub fn generate(name: &str, out_dir: &str, sample_rate: u32, seed: u32) -> Result<()> {
    let preset = Preset::from_name(name)
        .ok_or_else(|| anyhow!("unknown preset: {name} (run `waveforge list` for names)"))?;
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {out_dir}"))?;

    let engine = SoundEngine::new(sample_rate);
    let path = render_to(&engine, preset, out_dir, seed)?;
    println!("{} {}", "✓".green(), path.display());
    Ok(())
}

/// Renders the whole catalog, one WAV per preset.
pub fn generate_all(out_dir: &str, sample_rate: u32, seed: u32) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {out_dir}"))?;

    let engine = SoundEngine::new(sample_rate);
    println!(
        "{} ({} presets, {} Hz, seed {})",
        "Generating sound catalog".cyan().bold(),
        Preset::all().len(),
        sample_rate,
        seed
    );

    for &preset in Preset::all() {
        let path = render_to(&engine, preset, out_dir, seed)?;
        println!("{} {}", "✓".green(), path.display());
    }

    println!(
        "{} {} files written to {}",
        "Done:".cyan().bold(),
        Preset::all().len(),
        out_dir
    );
    Ok(())
}

fn render_to(engine: &SoundEngine, preset: Preset, out_dir: &str, seed: u32) -> Result<PathBuf> {
    let audio = preset
        .render(engine, seed)
        .with_context(|| format!("rendering {}", preset.name()))?;
    let path = Path::new(out_dir).join(format!("{}.wav", preset.name()));
    engine
        .quantize(&audio)
        .write_to_file(&path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
