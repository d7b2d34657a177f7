// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{CsiSequence, FluentStyle, RESET, StyleAttributes};

/// Which way a relative cursor move goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorDirection {
    Up,
    Down,
    Forward,
    Back,
}

/// A segment is either a styled text carrier or one of these pure control directives.
/// When a directive is set, the segment's text and style are ignored by rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// Erase the screen and move the cursor home.
    ClearScreen,
    /// Move the cursor to an absolute position, both 1 based.
    Position { col: u16, row: u16 },
    /// Move the cursor `count` cells in `direction`.
    Move {
        direction: CursorDirection,
        count: u16,
    },
}

impl Directive {
    /// A position w/ a 0 column or row, or a move of 0 cells, has nothing to render.
    /// Such a segment is rendered as if it had no directive.
    #[must_use]
    pub fn is_active(self) -> bool {
        match self {
            Directive::ClearScreen => true,
            Directive::Position { col, row } => col != 0 && row != 0,
            Directive::Move { count, .. } => count != 0,
        }
    }

    #[must_use]
    pub fn as_csi_sequence(self) -> CsiSequence {
        match self {
            Directive::ClearScreen => CsiSequence::ClearScreenAndHome,
            Directive::Position { col, row } => CsiSequence::CursorPosition { row, col },
            Directive::Move { direction, count } => match direction {
                CursorDirection::Up => CsiSequence::CursorUp(count),
                CursorDirection::Down => CsiSequence::CursorDown(count),
                CursorDirection::Forward => CsiSequence::CursorForward(count),
                CursorDirection::Back => CsiSequence::CursorBack(count),
            },
        }
    }
}

/// Whether rendering is allowed to block for a segment's pacing delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pacing {
    /// Live playback. A paced segment sleeps and emits nothing.
    Honor,
    /// Batch rendering. Never sleeps.
    #[default]
    Suppress,
}

/// One unit of output: literal text, the [`StyleAttributes`] to render it with, and at
/// most one [`Directive`].
///
/// The [`Display`] implementation renders w/ [`Pacing::Suppress`], so formatting a
/// segment never blocks. Use [`StyledSegment::render`] for live playback.
///
/// ```
/// use r3bl_ansi_strings::{FluentStyle, StyledSegment};
///
/// let mut segment = StyledSegment::new("a\nb");
/// segment.red();
/// assert_eq!(segment.to_string(), "\x1b[31ma\x1b[0m\n\x1b[31mb\x1b[0m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledSegment {
    pub text: String,
    pub style: StyleAttributes,
    pub directive: Option<Directive>,
}

impl StyledSegment {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// A segment w/ no text that only carries `directive`.
    #[must_use]
    pub fn new_directive(directive: Directive) -> Self {
        Self {
            directive: Some(directive),
            ..Default::default()
        }
    }

    pub fn set_directive(&mut self, directive: Directive) -> &mut Self {
        self.directive = Some(directive);
        self
    }

    /// The directive, if it has anything to render. See [`Directive::is_active`].
    #[must_use]
    pub fn active_directive(&self) -> Option<Directive> {
        self.directive.filter(|it| it.is_active())
    }

    /// Renders this segment. The first matching rule wins:
    /// 1. An active directive renders as its control sequence, w/out text.
    /// 2. A non zero pacing delay w/ [`Pacing::Honor`] blocks the calling thread for the
    ///    delay and renders nothing.
    /// 3. Otherwise the text is rendered w/ its style (see [`Display`]).
    #[must_use]
    pub fn render(&self, pacing: Pacing) -> String {
        if let (Pacing::Honor, None, Some(delay)) =
            (pacing, self.active_directive(), self.style.pace)
            && !delay.is_zero()
        {
            tracing::trace!(message = "pacing", delay = ?delay);
            std::thread::sleep(delay);
            return String::new();
        }
        self.to_string()
    }

    /// The rendered string in escaped (`{:?}`) form, handy for inspecting the escape
    /// codes.
    #[must_use]
    pub fn to_raw_string(&self) -> String { format!("{:?}", self.to_string()) }
}

impl FluentStyle for StyledSegment {
    fn style_mut(&mut self) -> &mut StyleAttributes { &mut self.style }

    /// Drops the style and the directive, keeping only the text.
    fn reset_style(&mut self) -> &mut Self {
        self.style.reset();
        self.directive = None;
        self
    }
}

impl From<&str> for StyledSegment {
    fn from(text: &str) -> Self { Self::new(text) }
}

impl From<String> for StyledSegment {
    fn from(text: String) -> Self { Self::new(text) }
}

fn is_line_break(ch: char) -> bool { matches!(ch, '\r' | '\n') }

/// Writes `text`, replacing every run of line break characters w/ `RESET + run +
/// prefix`. This closes the style before each break and opens it again after, so the
/// terminal doesn't carry stale formatting across lines.
fn write_text_reapplying_prefix(
    text: &str,
    prefix: &str,
    acc: &mut impl std::fmt::Write,
) -> Result {
    let mut rest = text;
    while let Some(run_start) = rest.find(is_line_break) {
        let (before, from_run) = rest.split_at(run_start);
        let run_len = from_run
            .find(|ch: char| !is_line_break(ch))
            .unwrap_or(from_run.len());
        let (run, after) = from_run.split_at(run_len);

        acc.write_str(before)?;
        acc.write_str(RESET)?;
        acc.write_str(run)?;
        acc.write_str(prefix)?;

        rest = after;
    }
    acc.write_str(rest)
}

impl Display for StyledSegment {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if let Some(directive) = self.active_directive() {
            return write!(f, "{}", directive.as_csi_sequence());
        }

        let prefix = self.style.to_prefix();

        // An unstyled segment has no control overhead.
        if prefix.is_empty() {
            return f.write_str(&self.text);
        }

        f.write_str(&prefix)?;
        write_text_reapplying_prefix(&self.text, &prefix, f)?;
        f.write_str(RESET)
    }
}
