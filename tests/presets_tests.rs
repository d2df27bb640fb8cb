// SPDX-License-Identifier: MPL-2.0

//! Integration tests for the preset tables

use preset_gen::presets::{aperture, iso, nd_filter, shutter};
use preset_gen::ShutterValue;

#[test]
fn test_table_lengths() {
    assert_eq!(shutter::presets().len(), 35);
    assert_eq!(aperture::VALUES.len(), 52);
    assert_eq!(iso::VALUES.len(), 38);
    assert_eq!(nd_filter::FILTERS.len(), 12);
}

#[test]
fn test_shutter_ranges_join_without_gap() {
    // The fast halving range stops above 8000; the standard range begins
    // with 8000 itself
    let presets = shutter::presets();
    assert_eq!(presets[2].value, ShutterValue::Fraction(16000));
    assert_eq!(presets[3].value, ShutterValue::Fraction(8000));
}

#[test]
fn test_shutter_labels_are_non_empty() {
    for preset in shutter::presets() {
        assert!(!preset.label.is_empty(), "{:?} has empty label", preset.value);
    }
}

#[test]
fn test_slow_seconds_follow_one_second() {
    let presets = shutter::presets();
    let one_second = presets
        .iter()
        .position(|p| p.value == ShutterValue::Whole(1))
        .unwrap();
    assert_eq!(presets[one_second + 1].value, ShutterValue::Whole(2));
    assert_eq!(presets[one_second + 1].label, "2s");
}
