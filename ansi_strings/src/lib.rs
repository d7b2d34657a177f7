// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_ansi_strings
//!
//! A fluent builder for terminal output. You describe what you want (colors, emphasis,
//! cursor movement, screen clearing, timed pauses) and the crate renders it into a
//! single string of ANSI escape codes on demand.
//!
//! # The pieces
//!
//! 1. [`StyleAttributes`]: foreground, background, emphasis flags, font, and a pacing
//!    delay. A plain `Copy` value, so precomposed styles are cheap to pass around.
//! 2. [`StyledSegment`]: some text, its [`StyleAttributes`], and optionally a
//!    [`Directive`] (cursor move, absolute position, clear screen). It owns the
//!    rendering algorithm.
//! 3. [`SegmentSequence`]: an ordered list of segments that is built up and then
//!    flushed to an [`OutputDevice`] (stdout by default).
//!
//! The [`FluentStyle`] trait provides the chainable methods (`red()`, `bold()`,
//! `bg_rgb(..)`, `pace(..)`, etc) on all three.
//!
//! # Rendering rules
//!
//! - The style prefix is always written in the same order (foreground, background,
//!   bold, faint, italic, underline, blink, rapid blink, inverted, concealed,
//!   strikethrough, font), no matter which order the attributes were set in.
//! - A styled segment ends w/ a reset, so styles never leak into the next segment.
//! - Line breaks inside styled text are wrapped in a reset and the prefix is written
//!   again after them.
//! - Unstyled text is written as is, w/ no control codes at all.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use r3bl_ansi_strings::{FluentStyle, SegmentSequence};
//!
//! let mut seq = SegmentSequence::new();
//! seq.clear_screen()
//!     .push_str("Hello").bold().light_green()
//!     .pause(Duration::from_millis(10))
//!     .push_str(", world!\n").fg_rgb(200, 100, 50);
//!
//! assert_eq!(
//!     seq.render_all(),
//!     "\x1b[2J\x1b[1;1H\
//!      \x1b[92m\x1b[1mHello\x1b[0m\
//!      \x1b[38;2;200;100;50m, world!\x1b[0m\n\x1b[38;2;200;100;50m\x1b[0m"
//! );
//!
//! // Plays the sequence back to stdout (pausing where asked), then empties it.
//! seq.flush().unwrap();
//! assert!(seq.is_empty());
//! ```
//!
//! # Logging
//!
//! Events are emitted w/ [`tracing`]. Logging is disabled until you install a
//! subscriber, eg: w/ [`try_initialize_logging_global`].

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod ansi_escape_codes;
pub mod color;
pub mod error;
pub mod fluent_style;
pub mod log;
pub mod output_device;
pub mod segment_sequence;
pub mod style_attributes;
pub mod style_flags;
pub mod styled_segment;
pub mod test_fixtures;

// Re-export.
pub use ansi_escape_codes::*;
pub use color::*;
pub use error::*;
pub use fluent_style::*;
pub use log::*;
pub use output_device::*;
pub use segment_sequence::*;
pub use style_attributes::*;
pub use style_flags::*;
pub use styled_segment::*;
pub use test_fixtures::*;

// Type aliases.
pub use sizing::*;

pub mod sizing {
    use smallstr::SmallString;
    use smallvec::SmallVec;

    /// Enough to hold the style prefix w/ a couple of colors and a few flags w/out
    /// spilling to the heap.
    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 64;
    pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

    /// Most sequences are a handful of segments.
    pub const DEFAULT_SEGMENT_STORAGE_SIZE: usize = 8;
    pub type InlineVec<T> = SmallVec<[T; DEFAULT_SEGMENT_STORAGE_SIZE]>;
}
