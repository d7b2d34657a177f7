// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Plays back a tour of everything the builder can do. Run it w/:
//!
//! ```sh
//! cargo run --example demo -- --step 32 --pace-ms 100 --log-level debug 2>log.txt
//! ```

use std::time::Duration;

use clap::Parser;
use r3bl_ansi_strings::{FluentStyle, NamedColor, SegmentSequence, StyleAttributes,
                        StyledSegment, try_initialize_logging_global};
use strum::IntoEnumIterator;
use tracing_core::LevelFilter;

#[derive(Debug, Parser)]
#[command(about = "Tour of r3bl_ansi_strings: colors, emphasis, cursor moves, pacing")]
struct CliArgs {
    /// Distance between neighboring values of each channel in the RGB grids.
    #[arg(long, default_value_t = 32, value_parser = clap::value_parser!(u8).range(1..))]
    step: u8,

    /// Pause between the sections of the tour, in milliseconds.
    #[arg(long, default_value_t = 100)]
    pace_ms: u64,

    /// Log level for the events emitted by the library. Logs go to stderr.
    #[arg(long, default_value_t = LevelFilter::OFF)]
    log_level: LevelFilter,
}

fn main() -> miette::Result<()> {
    let cli_args = CliArgs::parse();
    try_initialize_logging_global(cli_args.log_level)?;

    let pace = Duration::from_millis(cli_args.pace_ms);

    // A standalone segment.
    {
        let mut segment = StyledSegment::new("TEST");
        segment.bold().white().underline().strikethrough().bg_red();
        println!("{segment}");
    }

    let mut seq = SegmentSequence::new();

    // Palette.
    {
        for color in NamedColor::iter() {
            seq.push_str(format!("{color} ")).fg(color);
        }
        seq.push_str("\n");
        for color in NamedColor::iter() {
            seq.push_str(format!("{color} ")).bg(color);
        }
        seq.push_str("\n").pause(pace).flush()?;
    }

    // Truecolor grids.
    {
        let channel = || (0..=u8::MAX).step_by(usize::from(cli_args.step));
        for red in channel() {
            for green in channel() {
                for blue in channel() {
                    seq.push_str("*").fg_rgb(red, green, blue);
                }
            }
        }
        seq.push_str("\n").pause(pace).flush()?;

        for red in channel() {
            for green in channel() {
                for blue in channel() {
                    seq.push_str(" ").bg_rgb(red, green, blue);
                }
            }
        }
        seq.push_str("\n").pause(pace).clear_screen().flush()?;
    }

    // 256 color palette.
    {
        for index in 1..=u8::MAX {
            seq.push_str(format!("({index:03})")).fg_ansi256(index);
        }
        for index in 1..=u8::MAX {
            seq.push_str(format!("({index:03})")).bg_ansi256(index);
        }
        seq.pause(pace).clear_screen().flush()?;
    }

    // Emphasis and fonts, drawn column by column w/ relative cursor moves.
    {
        let (width, height) = (24_u16, 10_u16);
        let mut count = 0_u16;
        for _ in 1..width {
            for _ in 1..height {
                seq.push_str(format!("{count:03}"));
                match count % 10 {
                    1 => seq.faint(),
                    2 => seq.italic(),
                    3 => seq.underline(),
                    4 => seq.blink(),
                    5 => seq.rapid_blink(),
                    6 => seq.inverted(),
                    7 => seq.conceal(),
                    8 => seq.strikethrough(),
                    _ => seq.bold(),
                };
                let font = u8::try_from(count % 14 + 1).unwrap_or(1);
                let color = u8::try_from(count % 256).unwrap_or(0);
                seq.font(font)?
                    .fg_ansi256(color)
                    .down(1)
                    .back(3)
                    .pause(Duration::from_millis(5));
                count += 1;
            }
            seq.forward(3).up(height).flush()?;
        }
        seq.move_to(1, 11)?
            .push_str("End\n")
            .pause(pace * 10)
            .flush()?;
    }

    // Precomposed styles, directives, and line breaks.
    {
        let mut style_1 = StyleAttributes::default();
        style_1.bold().underline().blue();

        let mut style_2 = StyleAttributes::default();
        style_2
            .faint()
            .strikethrough()
            .fg_rgb(200, 100, 50)
            .bg_rgb(50, 100, 200);

        seq.clear_screen()
            .push_str("1: Bold string and Down after this output")
            .bold()
            .down(1)
            .pause(pace * 10)
            .back(20)
            .push_str("2: back 20")
            .down(1)
            .push_str("3: Blue string and Down 10 after this output")
            .blue()
            .down(10)
            .push_str("4: Downed 10");
        for (index, (col, row)) in [(5, 9), (6, 10), (7, 11), (6, 12)].into_iter().enumerate()
        {
            seq.move_to(col, row)?
                .push_str(format!("{}: Pos {col}, {row}", index + 5));
        }
        seq.move_to(1, 13)?
            .push_str("9: Pos 1, 13\n")
            .push_str("10: Style1\n Test 1\n")
            .apply_style(style_1)
            .push_str("11: Style2\n Test 1\n")
            .apply_style(style_2)
            .push_str("12: Style1\n Test 2\n")
            .apply_style(style_1)
            .push_str("13: Style2\n Test 2\n")
            .apply_style(style_2);

        eprintln!("{}", seq.to_raw_string());
        seq.flush()?;
    }

    Ok(())
}
