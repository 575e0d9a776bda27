// Integration tests for timestamp formatting
//
// These tests verify the display (HH:MM:SS) and subtitle (HH:MM:SS,mmm)
// renderings of seconds offsets.

use murmur::timestamp::{format_display, format_subtitle};

#[test]
fn test_display_format_zero() {
    assert_eq!(format_display(0.0), "00:00:00");
}

#[test]
fn test_display_format_hours_minutes_seconds() {
    assert_eq!(format_display(3661.5), "01:01:01");
}

#[test]
fn test_display_format_truncates_fractions() {
    // Sub-second precision is dropped, not rounded.
    assert_eq!(format_display(59.999), "00:00:59");
    assert_eq!(format_display(0.9), "00:00:00");
}

#[test]
fn test_subtitle_format_zero() {
    assert_eq!(format_subtitle(0.0), "00:00:00,000");
}

#[test]
fn test_subtitle_format_milliseconds() {
    // Binary-exact inputs, no float surprises.
    assert_eq!(format_subtitle(0.5), "00:00:00,500");
    assert_eq!(format_subtitle(2.25), "00:00:02,250");
    assert_eq!(format_subtitle(3599.875), "00:59:59,875");
    assert_eq!(format_subtitle(3661.5), "01:01:01,500");
}

#[test]
fn test_subtitle_format_rounds_to_nearest_millisecond() {
    assert_eq!(format_subtitle(7322.001), "02:02:02,001");
    assert_eq!(format_subtitle(1.0004), "00:00:01,000");
    assert_eq!(format_subtitle(1.0006), "00:00:01,001");
}

#[test]
fn test_negative_values_clamp_to_zero() {
    assert_eq!(format_display(-3.0), "00:00:00");
    assert_eq!(format_subtitle(-0.5), "00:00:00,000");
}

#[test]
fn test_field_shapes() {
    for &seconds in &[0.0, 7.25, 61.0, 3599.0, 3600.0, 86399.5] {
        let display = format_display(seconds);
        assert_eq!(display.len(), 8, "display width for {}: {}", seconds, display);
        let bytes = display.as_bytes();
        assert_eq!(bytes[2], b':', "display separators for {}", seconds);
        assert_eq!(bytes[5], b':', "display separators for {}", seconds);

        let subtitle = format_subtitle(seconds);
        assert_eq!(subtitle.len(), 12, "subtitle width for {}: {}", seconds, subtitle);
        let bytes = subtitle.as_bytes();
        assert_eq!(bytes[2], b':', "subtitle separators for {}", seconds);
        assert_eq!(bytes[5], b':', "subtitle separators for {}", seconds);
        assert_eq!(bytes[8], b',', "subtitle millisecond separator for {}", seconds);
    }
}
