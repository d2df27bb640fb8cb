// SPDX-License-Identifier: GPL-3.0-only

//! Shutter speed presets
//!
//! The table covers 1/64000s through 48h in four ranges: fast speeds
//! halving down toward the standard range, standard photographic stops,
//! slow whole seconds, and extended long-exposure durations.

use std::fmt;

/// Fast range starting denominator
const FAST_START_DENOMINATOR: u32 = 64000;

/// Fast range lower bound; 8000 itself belongs to the standard range
const FAST_LIMIT_DENOMINATOR: u32 = 8000;

/// Standard photographic stop denominators, fastest first
const STANDARD_DENOMINATORS: [u32; 14] = [
    8000, 4000, 2000, 1000, 500, 250, 125, 60, 30, 15, 8, 4, 2, 1,
];

/// Slow whole-second durations
const SLOW_SECONDS: [u32; 5] = [2, 4, 8, 15, 30];

/// Extended long-exposure durations in seconds, 1 minute through 48 hours
const EXTENDED_SECONDS: [u32; 13] = [
    60, 120, 240, 480, 900, 1800, 3600, 7200, 14400, 28800, 43200, 86400, 172800,
];

/// Total number of entries in the generated shutter table
pub const PRESET_COUNT: usize = 35;

/// Exact shutter duration
///
/// Sub-second speeds keep their integer denominator so the rendered source
/// expression (`1/8000`) and the rounded label stay exact; a pre-divided
/// float would drift on values like 1/64000.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutterValue {
    /// Fraction of a second: 1/denominator
    Fraction(u32),
    /// Whole number of seconds
    Whole(u32),
}

impl ShutterValue {
    /// Duration in seconds
    pub fn seconds(self) -> f64 {
        match self {
            ShutterValue::Fraction(denominator) => 1.0 / denominator as f64,
            ShutterValue::Whole(seconds) => seconds as f64,
        }
    }
}

impl fmt::Display for ShutterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutterValue::Fraction(denominator) => write!(f, "1/{denominator}"),
            ShutterValue::Whole(seconds) => write!(f, "{seconds}"),
        }
    }
}

/// A shutter speed preset: exact value plus display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShutterPreset {
    /// Exact duration
    pub value: ShutterValue,
    /// Human-readable rendering, e.g. "1/500s", "30s", "12h"
    pub label: String,
}

impl ShutterPreset {
    fn new(value: ShutterValue) -> Self {
        Self {
            label: label_for(value.seconds()),
            value,
        }
    }
}

/// Display label for a shutter duration in seconds
///
/// Sub-second durations render as `1/<denominator>s`, whole seconds as
/// `<n>s`, minutes as `<n>m`, hours as `<n>h`. Durations of two days or
/// more always render as the fixed string "2d 0h"; the 48h entry is the
/// only value in that range.
pub fn label_for(seconds: f64) -> String {
    if seconds >= 1.0 {
        if seconds >= 172_800.0 {
            "2d 0h".to_string()
        } else if seconds >= 3600.0 {
            format!("{}h", (seconds / 3600.0) as u32)
        } else if seconds >= 60.0 {
            format!("{}m", (seconds / 60.0) as u32)
        } else {
            format!("{}s", seconds as u32)
        }
    } else {
        format!("1/{}s", (1.0 / seconds).round() as u32)
    }
}

/// Build the full ordered shutter preset table
///
/// Concatenates the four ranges in order. Entries repeat the order of the
/// literal tables; no de-duplication is applied.
pub fn presets() -> Vec<ShutterPreset> {
    let mut presets = Vec::with_capacity(PRESET_COUNT);

    // Fast: halve from 1/64000 until the standard range takes over
    let mut denominator = FAST_START_DENOMINATOR;
    while denominator > FAST_LIMIT_DENOMINATOR {
        presets.push(ShutterPreset::new(ShutterValue::Fraction(denominator)));
        denominator /= 2;
    }

    // Standard stops; the 1s entry is a whole second, not 1/1
    for &denominator in &STANDARD_DENOMINATORS {
        if denominator == 1 {
            presets.push(ShutterPreset::new(ShutterValue::Whole(1)));
        } else {
            presets.push(ShutterPreset::new(ShutterValue::Fraction(denominator)));
        }
    }

    // Slow whole seconds
    for &seconds in &SLOW_SECONDS {
        presets.push(ShutterPreset::new(ShutterValue::Whole(seconds)));
    }

    // Extended long exposures
    for &seconds in &EXTENDED_SECONDS {
        presets.push(ShutterPreset::new(ShutterValue::Whole(seconds)));
    }

    presets
}
