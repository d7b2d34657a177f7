// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#CSI_(Control_Sequence_Introducer)_sequences>

use std::fmt::{Display, Formatter, Result};

use const_format::concatcp;

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";
/// Select Graphic Rendition final byte.
pub const SGR: &str = "m";
/// Cursor Position final byte.
pub const CUP: &str = "H";

pub const RESET: &str = concatcp!(CSI, "0", SGR);
pub const ERASE_ENTIRE_SCREEN: &str = concatcp!(CSI, "2J");
pub const CURSOR_HOME: &str = concatcp!(CSI, "1;1", CUP);
pub const CLEAR_SCREEN_AND_HOME: &str = concatcp!(ERASE_ENTIRE_SCREEN, CURSOR_HOME);

/// Offset between a foreground palette code and its background counterpart, and
/// between a font index and its SGR code.
pub const SGR_OFFSET: u16 = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Bold,
    Faint,
    Italic,
    Underline,
    SlowBlink,
    RapidBlink,
    Invert,
    Conceal,
    Strikethrough,
    /// Raw palette code, eg: `31` for red.
    ForegroundCode(u8),
    /// Written as the palette code + 10, eg: `41` for red.
    BackgroundCode(u8),
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
    ForegroundRGB(u8, u8, u8),
    BackgroundRGB(u8, u8, u8),
    /// Alternative font 1 to 14, written as the index + 10.
    Font(u8),
}

pub mod sgr_code_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset                    => write!(f, "{CSI}0{SGR}"),
                SgrCode::Bold                     => write!(f, "{CSI}1{SGR}"),
                SgrCode::Faint                    => write!(f, "{CSI}2{SGR}"),
                SgrCode::Italic                   => write!(f, "{CSI}3{SGR}"),
                SgrCode::Underline                => write!(f, "{CSI}4{SGR}"),
                SgrCode::SlowBlink                => write!(f, "{CSI}5{SGR}"),
                SgrCode::RapidBlink               => write!(f, "{CSI}6{SGR}"),
                SgrCode::Invert                   => write!(f, "{CSI}7{SGR}"),
                SgrCode::Conceal                  => write!(f, "{CSI}8{SGR}"),
                SgrCode::Strikethrough            => write!(f, "{CSI}9{SGR}"),
                SgrCode::ForegroundCode(code)     => write!(f, "{CSI}{code}{SGR}"),
                SgrCode::BackgroundCode(code)     => write!(f, "{CSI}{}{SGR}", u16::from(code) + SGR_OFFSET),
                SgrCode::ForegroundAnsi256(index) => write!(f, "{CSI}38;5;{index}{SGR}"),
                SgrCode::BackgroundAnsi256(index) => write!(f, "{CSI}48;5;{index}{SGR}"),
                SgrCode::ForegroundRGB(r, g, b)   => write!(f, "{CSI}38;2;{r};{g};{b}{SGR}"),
                SgrCode::BackgroundRGB(r, g, b)   => write!(f, "{CSI}48;2;{r};{g};{b}{SGR}"),
                SgrCode::Font(index)              => write!(f, "{CSI}{}{SGR}", u16::from(index) + SGR_OFFSET),
            }
        }
    }
}

/// Cursor movement and screen control sequences. These never carry text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CsiSequence {
    /// `ESC[{row};{col}H`, both 1 based.
    CursorPosition { row: u16, col: u16 },
    CursorUp(u16),
    CursorDown(u16),
    CursorForward(u16),
    CursorBack(u16),
    /// Erase the entire screen and move the cursor to the top left corner.
    ClearScreenAndHome,
}

mod csi_sequence_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Display for CsiSequence {
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                CsiSequence::CursorPosition { row, col } => write!(f, "{CSI}{row};{col}{CUP}"),
                CsiSequence::CursorUp(n)                 => write!(f, "{CSI}{n}A"),
                CsiSequence::CursorDown(n)               => write!(f, "{CSI}{n}B"),
                CsiSequence::CursorForward(n)            => write!(f, "{CSI}{n}C"),
                CsiSequence::CursorBack(n)               => write!(f, "{CSI}{n}D"),
                CsiSequence::ClearScreenAndHome          => f.write_str(CLEAR_SCREEN_AND_HOME),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::{CLEAR_SCREEN_AND_HOME, CsiSequence, RESET, SgrCode};

    #[test_case(SgrCode::Reset, "\x1b[0m")]
    #[test_case(SgrCode::Bold, "\x1b[1m")]
    #[test_case(SgrCode::Faint, "\x1b[2m")]
    #[test_case(SgrCode::Italic, "\x1b[3m")]
    #[test_case(SgrCode::Underline, "\x1b[4m")]
    #[test_case(SgrCode::SlowBlink, "\x1b[5m")]
    #[test_case(SgrCode::RapidBlink, "\x1b[6m")]
    #[test_case(SgrCode::Invert, "\x1b[7m")]
    #[test_case(SgrCode::Conceal, "\x1b[8m")]
    #[test_case(SgrCode::Strikethrough, "\x1b[9m")]
    fn emphasis(sgr_code: SgrCode, expected: &str) {
        assert_eq!(sgr_code.to_string(), expected);
    }

    #[test]
    fn reset_const_matches_sgr_reset() {
        assert_eq!(RESET, SgrCode::Reset.to_string());
    }

    #[test]
    fn fg_code() {
        assert_eq!(SgrCode::ForegroundCode(31).to_string(), "\x1b[31m");
    }

    #[test]
    fn bg_code_adds_ten() {
        assert_eq!(SgrCode::BackgroundCode(30).to_string(), "\x1b[40m");
        assert_eq!(SgrCode::BackgroundCode(97).to_string(), "\x1b[107m");
    }

    #[test]
    fn bg_code_does_not_overflow() {
        assert_eq!(SgrCode::BackgroundCode(255).to_string(), "\x1b[265m");
    }

    #[test]
    fn fg_color_ansi256() {
        assert_eq!(SgrCode::ForegroundAnsi256(150).to_string(), "\x1b[38;5;150m");
    }

    #[test]
    fn bg_color_ansi256() {
        assert_eq!(SgrCode::BackgroundAnsi256(150).to_string(), "\x1b[48;5;150m");
    }

    #[test]
    fn fg_color_rgb() {
        assert_eq!(
            SgrCode::ForegroundRGB(175, 215, 135).to_string(),
            "\x1b[38;2;175;215;135m"
        );
    }

    #[test]
    fn bg_color_rgb() {
        assert_eq!(
            SgrCode::BackgroundRGB(175, 215, 135).to_string(),
            "\x1b[48;2;175;215;135m"
        );
    }

    #[test_case(1, "\x1b[11m")]
    #[test_case(14, "\x1b[24m")]
    fn font(index: u8, expected: &str) {
        assert_eq!(SgrCode::Font(index).to_string(), expected);
    }

    #[test_case(CsiSequence::CursorUp(3), "\x1b[3A")]
    #[test_case(CsiSequence::CursorDown(1), "\x1b[1B")]
    #[test_case(CsiSequence::CursorForward(12), "\x1b[12C")]
    #[test_case(CsiSequence::CursorBack(20), "\x1b[20D")]
    fn cursor_move(sequence: CsiSequence, expected: &str) {
        assert_eq!(sequence.to_string(), expected);
    }

    #[test]
    fn cursor_position_is_row_then_col() {
        let sequence = CsiSequence::CursorPosition { row: 9, col: 5 };
        assert_eq!(sequence.to_string(), "\x1b[9;5H");
    }

    #[test]
    fn clear_screen_and_home() {
        assert_eq!(CLEAR_SCREEN_AND_HOME, "\x1b[2J\x1b[1;1H");
        assert_eq!(
            CsiSequence::ClearScreenAndHome.to_string(),
            CLEAR_SCREEN_AND_HOME
        );
    }
}
