// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>

use std::str::FromStr;

use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

use crate::{AnsiStringsError, SgrCode};

/// The 16 color palette. The names (via [`FromStr`] and [`std::fmt::Display`]) are lower
/// case w/ underscores, eg: `light_gray`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    LightGray,
    DarkGray,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    White,
}

impl NamedColor {
    /// Foreground SGR code. The background code is this + 10.
    #[rustfmt::skip]
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            NamedColor::Black        => 30,
            NamedColor::Red          => 31,
            NamedColor::Green        => 32,
            NamedColor::Yellow       => 33,
            NamedColor::Blue         => 34,
            NamedColor::Magenta      => 35,
            NamedColor::Cyan         => 36,
            NamedColor::LightGray    => 37,
            NamedColor::DarkGray     => 90,
            NamedColor::LightRed     => 91,
            NamedColor::LightGreen   => 92,
            NamedColor::LightYellow  => 93,
            NamedColor::LightBlue    => 94,
            NamedColor::LightMagenta => 95,
            NamedColor::LightCyan    => 96,
            NamedColor::White        => 97,
        }
    }
}

/// Look up the foreground code of a palette color by name.
///
/// # Errors
///
/// Returns [`AnsiStringsError::UnknownColorName`] if `name` is not one of the 16
/// [`NamedColor`] names. The lookup is exact (lower case w/ underscores).
pub fn color_num_from_name(name: &str) -> Result<u8, AnsiStringsError> {
    NamedColor::from_str(name).map(NamedColor::code).map_err(|_| {
        AnsiStringsError::UnknownColorName {
            name: name.to_string(),
        }
    })
}

/// An index into the 256 color (8-bit) palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnsiValue {
    pub index: u8,
}

impl AnsiValue {
    #[must_use]
    pub fn new(index: u8) -> Self { Self { index } }
}

impl From<u8> for AnsiValue {
    fn from(index: u8) -> Self { Self { index } }
}

impl TryFrom<i64> for AnsiValue {
    type Error = AnsiStringsError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(Self::new)
            .map_err(|_| AnsiStringsError::invalid_argument("index", value, "0..=255"))
    }
}

/// A truecolor (24-bit) color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbValue {
    #[must_use]
    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl TryFrom<(i64, i64, i64)> for RgbValue {
    type Error = AnsiStringsError;

    fn try_from((red, green, blue): (i64, i64, i64)) -> Result<Self, Self::Error> {
        let channel = |name: &'static str, value: i64| {
            u8::try_from(value)
                .map_err(|_| AnsiStringsError::invalid_argument(name, value, "0..=255"))
        };
        Ok(Self::from_u8(
            channel("red", red)?,
            channel("green", green)?,
            channel("blue", blue)?,
        ))
    }
}

/// One of the mutually exclusive ways to specify a foreground or background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpec {
    /// A color from the 16 color palette.
    Named(NamedColor),
    /// A raw palette code, eg: `31`. Used as is for foreground, + 10 for background.
    Code(u8),
    /// An index into the 256 color palette.
    Ansi256(AnsiValue),
    /// A truecolor value.
    Rgb(RgbValue),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKind {
    Foreground,
    Background,
}

impl ColorSpec {
    #[rustfmt::skip]
    #[must_use]
    pub fn as_sgr_code(self, color_kind: ColorKind) -> SgrCode {
        match (self, color_kind) {
            (ColorSpec::Named(named), ColorKind::Foreground) => SgrCode::ForegroundCode(named.code()),
            (ColorSpec::Named(named), ColorKind::Background) => SgrCode::BackgroundCode(named.code()),
            (ColorSpec::Code(code), ColorKind::Foreground)   => SgrCode::ForegroundCode(code),
            (ColorSpec::Code(code), ColorKind::Background)   => SgrCode::BackgroundCode(code),
            (ColorSpec::Ansi256(it), ColorKind::Foreground)  => SgrCode::ForegroundAnsi256(it.index),
            (ColorSpec::Ansi256(it), ColorKind::Background)  => SgrCode::BackgroundAnsi256(it.index),
            (ColorSpec::Rgb(it), ColorKind::Foreground)      => SgrCode::ForegroundRGB(it.red, it.green, it.blue),
            (ColorSpec::Rgb(it), ColorKind::Background)      => SgrCode::BackgroundRGB(it.red, it.green, it.blue),
        }
    }
}

impl From<NamedColor> for ColorSpec {
    fn from(named: NamedColor) -> Self { ColorSpec::Named(named) }
}

impl From<AnsiValue> for ColorSpec {
    fn from(value: AnsiValue) -> Self { ColorSpec::Ansi256(value) }
}

impl From<RgbValue> for ColorSpec {
    fn from(value: RgbValue) -> Self { ColorSpec::Rgb(value) }
}
