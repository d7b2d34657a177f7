// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use crate::{AnsiStringsError, ColorKind, ColorSpec, InlineString, SgrCode, StyleFlags};

/// The smallest pause that [`StyleAttributes::set_pace`] will store. Asking for no
/// delay (or a zero delay) still pauses for this long.
pub const MIN_PACE: Duration = Duration::from_millis(1);

/// An alternative font, `1..=14`. Rendered as SGR code `index + 10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontIndex(u8);

impl FontIndex {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 14;

    #[must_use]
    pub fn as_u8(self) -> u8 { self.0 }
}

impl TryFrom<u8> for FontIndex {
    type Error = AnsiStringsError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&index) {
            Ok(FontIndex(index))
        } else {
            Err(AnsiStringsError::invalid_argument("font", index, "1..=14"))
        }
    }
}

/// The complete set of visual attributes that can be applied to a piece of text. This
/// is a plain value: it is copied wholesale when a precomposed style is applied to a
/// segment (see [`crate::SegmentSequence::apply_style`]).
///
/// The `set_*` methods here are the primitives. The fluent API (`red()`, `bold()`,
/// `bg_rgb(..)`, etc) lives in [`crate::FluentStyle`], which is implemented for this
/// struct, [`crate::StyledSegment`], and [`crate::SegmentSequence`].
///
/// ```
/// use r3bl_ansi_strings::{FluentStyle, NamedColor, StyleAttributes};
///
/// let mut style = StyleAttributes::default();
/// style.bold().underline().blue();
/// assert_eq!(style.fg, Some(NamedColor::Blue.into()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleAttributes {
    pub fg: Option<ColorSpec>,
    pub bg: Option<ColorSpec>,
    pub flags: StyleFlags,
    pub font: Option<FontIndex>,
    /// Delay applied when the segment is played back. Not part of the style prefix.
    pub pace: Option<Duration>,
}

impl StyleAttributes {
    /// Replaces the whole foreground (any previous variant is discarded).
    pub fn set_fg(&mut self, color: Option<ColorSpec>) -> &mut Self {
        self.fg = color;
        self
    }

    /// Replaces the whole background (any previous variant is discarded).
    pub fn set_bg(&mut self, color: Option<ColorSpec>) -> &mut Self {
        self.bg = color;
        self
    }

    /// Turns on the given flags, leaving the others untouched.
    pub fn set_flags(&mut self, flags: impl Into<StyleFlags>) -> &mut Self {
        self.flags += flags.into();
        self
    }

    pub fn set_font(&mut self, font: FontIndex) -> &mut Self {
        self.font = Some(font);
        self
    }

    /// `None` or a zero duration is stored as [`MIN_PACE`].
    pub fn set_pace(&mut self, delay: Option<Duration>) -> &mut Self {
        let delay = match delay {
            Some(it) if !it.is_zero() => it,
            _ => MIN_PACE,
        };
        self.pace = Some(delay);
        self
    }

    pub fn reset(&mut self) { *self = Self::default(); }

    /// `true` if nothing would be rendered and there is no pacing.
    #[must_use]
    pub fn is_empty(&self) -> bool { *self == Self::default() }

    /// Writes the style prefix in a fixed order: foreground, background, bold, faint,
    /// italic, underline, blink, rapid blink, inverted, concealed, strikethrough, font.
    /// The order in which the attributes were set does not matter. Nothing is written
    /// for unset attributes, so an unstyled segment has an empty prefix.
    ///
    /// # Errors
    ///
    /// Only if `acc` fails to accept the write.
    pub fn write_prefix(&self, acc: &mut impl std::fmt::Write) -> std::fmt::Result {
        let StyleFlags {
            bold,
            faint,
            italic,
            underline,
            blink,
            rapid_blink,
            inverted,
            concealed,
            strikethrough,
        } = self.flags;

        if let Some(color) = self.fg {
            write!(acc, "{}", color.as_sgr_code(ColorKind::Foreground))?;
        }
        if let Some(color) = self.bg {
            write!(acc, "{}", color.as_sgr_code(ColorKind::Background))?;
        }

        let flag_codes = [
            (bold.is_some(), SgrCode::Bold),
            (faint.is_some(), SgrCode::Faint),
            (italic.is_some(), SgrCode::Italic),
            (underline.is_some(), SgrCode::Underline),
            (blink.is_some(), SgrCode::SlowBlink),
            (rapid_blink.is_some(), SgrCode::RapidBlink),
            (inverted.is_some(), SgrCode::Invert),
            (concealed.is_some(), SgrCode::Conceal),
            (strikethrough.is_some(), SgrCode::Strikethrough),
        ];
        for (_, sgr_code) in flag_codes.iter().filter(|(is_set, _)| *is_set) {
            write!(acc, "{sgr_code}")?;
        }

        if let Some(font) = self.font {
            write!(acc, "{}", SgrCode::Font(font.as_u8()))?;
        }

        Ok(())
    }

    /// The style prefix in an inline (stack allocated) buffer. See [`Self::write_prefix`].
    #[must_use]
    pub fn to_prefix(&self) -> InlineString {
        let mut acc = InlineString::new();
        match self.write_prefix(&mut acc) {
            Ok(()) => acc,
            Err(error) => {
                tracing::warn!(message = "could not build style prefix", ?error);
                InlineString::new()
            }
        }
    }
}
