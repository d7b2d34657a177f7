// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use crate::{AnsiStringsError, AnsiValue, ColorSpec, FontIndex, NamedColor, RgbValue,
            StyleAttributes, StyleFlags, style_flag};

/// Generates a foreground and a background setter for each palette color.
macro_rules! generate_named_color_methods {
    ($($fg_fn:ident, $bg_fn:ident => $color:ident;)*) => {
        $(
            #[doc = concat!("Sets the foreground to [`NamedColor::", stringify!($color), "`].")]
            fn $fg_fn(&mut self) -> &mut Self { self.fg(NamedColor::$color) }

            #[doc = concat!("Sets the background to [`NamedColor::", stringify!($color), "`].")]
            fn $bg_fn(&mut self) -> &mut Self { self.bg(NamedColor::$color) }
        )*
    };
}

/// Generates a setter for each emphasis flag.
macro_rules! generate_flag_methods {
    ($($flag_fn:ident => $flag:ident;)*) => {
        $(
            fn $flag_fn(&mut self) -> &mut Self {
                self.style_mut().set_flags(style_flag::$flag);
                self
            }
        )*
    };
}

/// The fluent, chainable styling API. Every method mutates the [`StyleAttributes`]
/// returned by [`FluentStyle::style_mut`] and hands back `self`, so calls chain:
///
/// ```
/// use r3bl_ansi_strings::{FluentStyle, StyledSegment};
///
/// let mut segment = StyledSegment::new("TEST");
/// segment.bold().white().underline().strikethrough().bg_red();
/// assert_eq!(
///     segment.to_string(),
///     "\x1b[97m\x1b[41m\x1b[1m\x1b[4m\x1b[9mTEST\x1b[0m"
/// );
/// ```
///
/// Implementors only provide [`FluentStyle::style_mut`]:
/// - [`StyleAttributes`] returns itself, for building precomposed styles.
/// - [`crate::StyledSegment`] returns its embedded style.
/// - [`crate::SegmentSequence`] returns the style of its current (most recently
///   appended) segment.
///
/// Setting any foreground variant replaces the previous one (same for background).
/// Flags can only be turned on. Use [`FluentStyle::reset_style`] to clear everything.
pub trait FluentStyle {
    fn style_mut(&mut self) -> &mut StyleAttributes;

    fn fg(&mut self, color: impl Into<ColorSpec>) -> &mut Self {
        self.style_mut().set_fg(Some(color.into()));
        self
    }

    fn bg(&mut self, color: impl Into<ColorSpec>) -> &mut Self {
        self.style_mut().set_bg(Some(color.into()));
        self
    }

    fn fg_named(&mut self, color: NamedColor) -> &mut Self { self.fg(color) }

    fn bg_named(&mut self, color: NamedColor) -> &mut Self { self.bg(color) }

    /// Raw palette code, eg: `31`.
    fn fg_code(&mut self, code: u8) -> &mut Self { self.fg(ColorSpec::Code(code)) }

    /// Raw palette code, eg: `31` (rendered as `41`).
    fn bg_code(&mut self, code: u8) -> &mut Self { self.bg(ColorSpec::Code(code)) }

    /// More info: <https://www.ditig.com/256-colors-cheat-sheet>
    fn fg_ansi256(&mut self, index: u8) -> &mut Self { self.fg(AnsiValue::new(index)) }

    /// More info: <https://www.ditig.com/256-colors-cheat-sheet>
    fn bg_ansi256(&mut self, index: u8) -> &mut Self { self.bg(AnsiValue::new(index)) }

    fn fg_rgb(&mut self, red: u8, green: u8, blue: u8) -> &mut Self {
        self.fg(RgbValue::from_u8(red, green, blue))
    }

    fn bg_rgb(&mut self, red: u8, green: u8, blue: u8) -> &mut Self {
        self.bg(RgbValue::from_u8(red, green, blue))
    }

    fn clear_fg(&mut self) -> &mut Self {
        self.style_mut().set_fg(None);
        self
    }

    fn clear_bg(&mut self) -> &mut Self {
        self.style_mut().set_bg(None);
        self
    }

    generate_named_color_methods! {
        black, bg_black => Black;
        red, bg_red => Red;
        green, bg_green => Green;
        yellow, bg_yellow => Yellow;
        blue, bg_blue => Blue;
        magenta, bg_magenta => Magenta;
        cyan, bg_cyan => Cyan;
        light_gray, bg_light_gray => LightGray;
        dark_gray, bg_dark_gray => DarkGray;
        light_red, bg_light_red => LightRed;
        light_green, bg_light_green => LightGreen;
        light_yellow, bg_light_yellow => LightYellow;
        light_blue, bg_light_blue => LightBlue;
        light_magenta, bg_light_magenta => LightMagenta;
        light_cyan, bg_light_cyan => LightCyan;
        white, bg_white => White;
    }

    generate_flag_methods! {
        bold => Bold;
        faint => Faint;
        italic => Italic;
        underline => Underline;
        blink => Blink;
        rapid_blink => RapidBlink;
        inverted => Inverted;
        conceal => Concealed;
        strikethrough => Strikethrough;
    }

    /// Turns on several flags at once, eg: `flags(Bold + Italic)`.
    fn flags(&mut self, flags: impl Into<StyleFlags>) -> &mut Self {
        self.style_mut().set_flags(flags);
        self
    }

    /// Selects alternative font `index`.
    ///
    /// # Errors
    ///
    /// Returns [`AnsiStringsError::InvalidArgument`] if `index` is not in `1..=14`. The
    /// style is left untouched in that case.
    fn font(&mut self, index: u8) -> Result<&mut Self, AnsiStringsError> {
        let font = FontIndex::try_from(index)?;
        self.style_mut().set_font(font);
        Ok(self)
    }

    /// Pause for `delay` when this is played back. `None` (or zero) pauses for
    /// [`crate::MIN_PACE`].
    fn pace(&mut self, delay: impl Into<Option<Duration>>) -> &mut Self {
        self.style_mut().set_pace(delay.into());
        self
    }

    fn reset_style(&mut self) -> &mut Self {
        self.style_mut().reset();
        self
    }
}

impl FluentStyle for StyleAttributes {
    fn style_mut(&mut self) -> &mut StyleAttributes { self }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn named_color_methods_set_fg_and_bg() {
        let mut style = StyleAttributes::default();
        style.light_cyan().bg_dark_gray();
        assert_eq!(style.fg, Some(ColorSpec::Named(NamedColor::LightCyan)));
        assert_eq!(style.bg, Some(ColorSpec::Named(NamedColor::DarkGray)));
    }

    #[test]
    fn last_fg_write_wins() {
        let mut style = StyleAttributes::default();
        style.red().fg_ansi256(125).fg_rgb(1, 2, 3);
        assert_eq!(style.fg, Some(ColorSpec::Rgb(RgbValue::from_u8(1, 2, 3))));

        style.fg_code(35);
        assert_eq!(style.fg, Some(ColorSpec::Code(35)));
    }

    #[test]
    fn clear_fg_and_bg() {
        let mut style = StyleAttributes::default();
        style.blue().bg_ansi256(3).clear_fg().clear_bg();
        assert!(style.is_empty());
    }

    #[test]
    fn faint_does_not_set_bold() {
        let mut style = StyleAttributes::default();
        style.faint();
        assert!(style.flags.faint.is_some());
        assert!(style.flags.bold.is_none());
    }

    #[test]
    fn invalid_font_is_rejected_and_leaves_style_untouched() {
        let mut style = StyleAttributes::default();
        assert!(style.font(0).is_err());
        assert!(style.font(15).is_err());
        assert!(style.is_empty());

        let result = style.font(14).map(|it| it.font);
        assert_eq!(result.unwrap(), FontIndex::try_from(14_u8).ok());
    }

    #[test]
    fn pace_accepts_duration_or_none() {
        let mut style = StyleAttributes::default();
        style.pace(Duration::from_millis(100));
        assert_eq!(style.pace, Some(Duration::from_millis(100)));
        style.pace(None);
        assert_eq!(style.pace, Some(crate::MIN_PACE));
    }
}
