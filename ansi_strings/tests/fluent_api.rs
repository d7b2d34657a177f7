// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use r3bl_ansi_strings::{AnsiStringsError, FluentStyle, NamedColor, OutputDevice,
                        OutputDeviceExt, RESET, SegmentSequence, StyleAttributes,
                        StyledSegment, color_num_from_name,
                        style_flag::{Bold, Italic}};
use serial_test::serial;
use test_case::test_case;

#[test]
fn standalone_segment() {
    let mut segment = StyledSegment::new("TEST");
    segment.bold().white().underline().strikethrough().bg_red();
    assert_eq!(
        segment.to_string(),
        "\x1b[97m\x1b[41m\x1b[1m\x1b[4m\x1b[9mTEST\x1b[0m"
    );
}

#[test_case("black", "\x1b[30mtest\x1b[0m")]
#[test_case("dark_gray", "\x1b[90mtest\x1b[0m")]
#[test_case("white", "\x1b[97mtest\x1b[0m")]
fn named_color_lookup_then_render(name: &str, expected: &str) {
    let code = color_num_from_name(name).unwrap();
    let mut seq = SegmentSequence::new();
    seq.push_str("test").fg_code(code);
    assert_eq!(seq.render_all(), expected);
}

#[test]
fn unknown_color_name() {
    let error = color_num_from_name("chartreuse").unwrap_err();
    assert_eq!(error.to_string(), "unknown color name: chartreuse");
}

#[test]
fn precomposed_style_applied_to_many_segments() {
    let mut heading = StyleAttributes::default();
    heading.flags(Bold + Italic).fg(NamedColor::LightYellow);

    let mut seq = SegmentSequence::new();
    seq.push_str("one")
        .apply_style(heading)
        .push_str(" and ")
        .push_str("two")
        .apply_style(heading);

    let prefix = "\x1b[93m\x1b[1m\x1b[3m";
    assert_eq!(
        seq.render_all(),
        format!("{prefix}one{RESET} and {prefix}two{RESET}")
    );
}

#[test]
fn multi_line_text_reapplies_style_on_every_line() {
    let mut seq = SegmentSequence::new();
    seq.push_str("line 1\nline 2\r\nline 3").bg_ansi256(22);

    let prefix = "\x1b[48;5;22m";
    assert_eq!(
        seq.render_all(),
        format!("{prefix}line 1{RESET}\n{prefix}line 2{RESET}\r\n{prefix}line 3{RESET}")
    );
}

#[test]
fn out_of_range_arguments_are_rejected() {
    let mut seq = SegmentSequence::new();
    seq.push_str("x");
    assert!(matches!(
        seq.font(15),
        Err(AnsiStringsError::InvalidArgument { name: "font", .. })
    ));
    assert!(matches!(
        seq.move_to(0, 0),
        Err(AnsiStringsError::InvalidArgument { .. })
    ));
    assert_eq!(seq.len(), 1);
    assert_eq!(seq.render_all(), "x");
}

#[test]
fn reset_yields_the_raw_text() {
    let mut seq = SegmentSequence::new();
    seq.push_str("plain")
        .red()
        .bg_blue()
        .blink()
        .font(2)
        .unwrap()
        .reset_all();
    assert_eq!(seq.render_all(), StyledSegment::new("plain").to_string());
    assert_eq!(seq.render_all(), "plain");
}

#[serial]
#[test]
fn flush_plays_back_paced_sequence_in_order() {
    let (device, stdout_mock) = OutputDevice::new_mock();
    let mut seq = SegmentSequence::with_output_device(device);

    seq.clear_screen()
        .push_str("ready")
        .green()
        .pause(Duration::from_millis(25))
        .move_to(2, 3)
        .unwrap()
        .push_str("go")
        .pause(Duration::from_millis(25));

    let start = Instant::now();
    seq.flush().unwrap();
    let elapsed = start.elapsed();

    assert!(elapsed >= Duration::from_millis(50));
    assert_eq!(
        stdout_mock.get_copy_of_buffer_as_string(),
        "\x1b[2J\x1b[1;1H\x1b[32mready\x1b[0m\x1b[3;2Hgo"
    );
    assert_eq!(stdout_mock.get_copy_of_buffer_as_string_strip_ansi(), "readygo");
    assert!(seq.is_empty());
}
