// SPDX-License-Identifier: GPL-3.0-only

//! Exposure preset tables
//!
//! Fixed tables of shutter speeds, apertures, ISO sensitivities, and ND
//! filters exposed for selection in a camera UI. The shutter table is
//! assembled from four sub-ranges; aperture and ISO are flat literal lists.

pub mod aperture;
pub mod iso;
pub mod nd_filter;
pub mod shutter;
