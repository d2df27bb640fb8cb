// SPDX-License-Identifier: MPL-2.0

//! Declaration block renderer
//!
//! Serializes the preset tables as JavaScript `export const` blocks for a
//! downstream build step to embed. Layout is fixed: one record per line
//! for labeled tables, a single comma-joined line for flat value lists.

use crate::presets::shutter::ShutterPreset;
use crate::presets::{aperture, iso, nd_filter};
use std::io::{self, Write};

/// Write the shutter preset block
///
/// Sub-second values are emitted as exact `1/<denominator>` expressions so
/// the embedding side can recover the denominator without float drift.
pub fn write_shutters(out: &mut impl Write, presets: &[ShutterPreset]) -> io::Result<()> {
    writeln!(out, "export const PRESET_SHUTTERS = [")?;
    for preset in presets {
        writeln!(
            out,
            "  {{ value: {}, label: '{}' }},",
            preset.value, preset.label
        )?;
    }
    writeln!(out, "];")
}

/// Write the aperture value block
pub fn write_apertures(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "export const PRESET_APERTURES = [")?;
    let literals: Vec<String> = aperture::VALUES.iter().map(|&v| aperture::literal(v)).collect();
    writeln!(out, "{}", literals.join(", "))?;
    writeln!(out, "];")
}

/// Write the ISO value block
pub fn write_isos(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "export const PRESET_ISOS = [")?;
    let literals: Vec<String> = iso::VALUES.iter().map(|v| v.to_string()).collect();
    writeln!(out, "{}", literals.join(", "))?;
    writeln!(out, "];")
}

/// Write the ND filter block
pub fn write_nd_filters(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "export const ND_FILTERS = [")?;
    for filter in &nd_filter::FILTERS {
        writeln!(
            out,
            "  {{ name: '{}', stops: {}, factor: {} }},",
            filter.name, filter.stops, filter.factor
        )?;
    }
    writeln!(out, "];")
}

/// Write all preset blocks in their fixed order: shutter, aperture, ISO,
/// and (only when requested) ND filters
pub fn write_tables(
    out: &mut impl Write,
    shutters: &[ShutterPreset],
    include_nd_filters: bool,
) -> io::Result<()> {
    write_shutters(out, shutters)?;
    write_apertures(out)?;
    write_isos(out)?;
    if include_nd_filters {
        write_nd_filters(out)?;
    }
    Ok(())
}
