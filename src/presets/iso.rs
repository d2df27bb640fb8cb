// SPDX-License-Identifier: GPL-3.0-only

//! ISO sensitivity presets

/// ISO preset values, ascending, ISO 1 through ISO 509600
pub const VALUES: [u32; 38] = [
    1, 3, 6, 12, 25, 50, 64, 80, 100, 125, 160, 200, 250, 320, 400, 500, 640, 800, 1000, 1250,
    1600, 2000, 2500, 3200, 4000, 5000, 6400, 8000, 10000, 12800, 16000, 20000, 25600, 51200,
    102400, 204800, 409600, 509600,
];
