// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Errors produced while building ANSI strings.
///
/// | Variant                | Cause                                              | Recoverable? |
/// | :--------------------- | :------------------------------------------------- | :----------- |
/// | [`InvalidArgument`]    | A numeric argument is outside its documented range | Caller bug   |
/// | [`UnknownColorName`]   | A palette name lookup missed                       | Yes          |
/// | [`NoCurrentSegment`]   | A segment was styled before any text was appended  | Caller bug   |
/// | [`Io`]                 | Writing to the output device failed                | Maybe        |
///
/// Rendering itself never fails, all validation happens when attributes are set.
///
/// [`InvalidArgument`]: Self::InvalidArgument
/// [`UnknownColorName`]: Self::UnknownColorName
/// [`NoCurrentSegment`]: Self::NoCurrentSegment
/// [`Io`]: Self::Io
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum AnsiStringsError {
    #[error("invalid argument `{name}`: {value} is not in {expected}")]
    #[diagnostic(
        code(r3bl_ansi_strings::invalid_argument),
        help("Validate the value before passing it in")
    )]
    InvalidArgument {
        name: &'static str,
        value: i64,
        expected: &'static str,
    },

    #[error("unknown color name: {name}")]
    #[diagnostic(
        code(r3bl_ansi_strings::unknown_color_name),
        help("Color names are lower case w/ underscores, eg: `light_gray`")
    )]
    UnknownColorName { name: String },

    #[error("no segment to mutate")]
    #[diagnostic(
        code(r3bl_ansi_strings::no_current_segment),
        help("Append text (or an empty string) to the sequence before styling it")
    )]
    NoCurrentSegment,

    #[error("could not write to the output device")]
    #[diagnostic(code(r3bl_ansi_strings::io))]
    Io(#[from] std::io::Error),
}

impl AnsiStringsError {
    pub(crate) fn invalid_argument(
        name: &'static str,
        value: impl Into<i64>,
        expected: &'static str,
    ) -> Self {
        let value = value.into();
        tracing::debug!(message = "invalid argument", name, value, expected);
        AnsiStringsError::InvalidArgument {
            name,
            value,
            expected,
        }
    }
}
