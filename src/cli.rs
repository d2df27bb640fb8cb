// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for preset table generation
//!
//! This module provides command-line functionality for:
//! - Generating the preset declaration blocks
//! - Validating the built-in tables

use preset_gen::presets::{aperture, iso, shutter};
use preset_gen::render;
use preset_gen::ShutterValue;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Generate the preset declaration blocks
///
/// Writes to stdout unless an output path is given. The ND filter table
/// is only included when requested.
pub fn generate(
    output: Option<PathBuf>,
    nd_filters: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let shutters = shutter::presets();
    debug!(entries = shutters.len(), "Built shutter preset table");

    match output {
        Some(path) => {
            let file = File::create(&path)?;
            let mut writer = BufWriter::new(file);
            render::write_tables(&mut writer, &shutters, nd_filters)?;
            writer.flush()?;
            info!(path = %path.display(), "Preset tables written");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            render::write_tables(&mut writer, &shutters, nd_filters)?;
        }
    }

    Ok(())
}

/// Validate the built-in preset tables
///
/// Checks that every table is strictly increasing, that sub-second
/// shutter labels round-trip to their denominators, and that the shutter
/// table has its expected entry count. Reports per-table results.
pub fn check() -> Result<(), Box<dyn std::error::Error>> {
    let shutters = shutter::presets();

    if shutters.len() != shutter::PRESET_COUNT {
        return Err(format!(
            "shutter table has {} entries, expected {}",
            shutters.len(),
            shutter::PRESET_COUNT
        )
        .into());
    }

    for pair in shutters.windows(2) {
        if pair[0].value.seconds() >= pair[1].value.seconds() {
            return Err(format!(
                "shutter table not strictly increasing at '{}'",
                pair[1].label
            )
            .into());
        }
    }

    for preset in &shutters {
        if let ShutterValue::Fraction(denominator) = preset.value {
            let expected = format!("1/{denominator}s");
            if preset.label != expected {
                return Err(format!(
                    "shutter label '{}' does not round-trip to denominator {}",
                    preset.label, denominator
                )
                .into());
            }
        }
    }
    println!(
        "shutter: {} entries, strictly increasing, labels round-trip",
        shutters.len()
    );

    for pair in aperture::VALUES.windows(2) {
        if pair[0] >= pair[1] {
            return Err(format!("aperture table not strictly increasing at {}", pair[1]).into());
        }
    }
    println!(
        "aperture: {} entries, strictly increasing",
        aperture::VALUES.len()
    );

    for pair in iso::VALUES.windows(2) {
        if pair[0] >= pair[1] {
            return Err(format!("iso table not strictly increasing at {}", pair[1]).into());
        }
    }
    println!("iso: {} entries, strictly increasing", iso::VALUES.len());

    Ok(())
}
