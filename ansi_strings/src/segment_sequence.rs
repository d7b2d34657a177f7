// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Display, Formatter},
          time::Duration};

use crate::{AnsiStringsError, CursorDirection, Directive, FluentStyle, InlineVec,
            LockedOutputDevice, OutputDevice, Pacing, StyleAttributes, StyledSegment,
            lock_output_device_as_mut};

const MISUSE_NO_SEGMENT: &str =
    "misuse: no segment to mutate, append text before styling a sequence";

/// An ordered list of [`StyledSegment`]s that is built up and then written out in one
/// go. There is a cursor at the most recently appended ("current") segment.
///
/// There are two ways to style what you append:
/// 1. [`SegmentSequence::append`] returns a handle to the new segment, so you style the
///    segment you just created.
/// 2. [`SegmentSequence::push_str`] returns the sequence, and the [`FluentStyle`]
///    methods on the sequence mutate the current segment.
///
/// ```
/// use r3bl_ansi_strings::{FluentStyle, OutputDevice, OutputDeviceExt, SegmentSequence};
///
/// let (device, stdout_mock) = OutputDevice::new_mock();
/// let mut seq = SegmentSequence::with_output_device(device);
///
/// seq.append("error").red().bold();
/// seq.push_str(": ").push_str("file not found").italic();
/// seq.flush().unwrap();
///
/// assert!(seq.is_empty());
/// assert_eq!(
///     stdout_mock.get_copy_of_buffer_as_string(),
///     "\x1b[31m\x1b[1merror\x1b[0m: \x1b[3mfile not found\x1b[0m"
/// );
/// ```
///
/// A sequence is single writer. The borrow checker enforces this, since every mutation
/// takes `&mut self`.
pub struct SegmentSequence {
    segments: InlineVec<StyledSegment>,
    cursor: Option<usize>,
    output_device: OutputDevice,
}

impl Debug for SegmentSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentSequence")
            .field("segments", &self.segments)
            .field("cursor", &self.cursor)
            .field("is_mock", &self.output_device.is_mock)
            .finish()
    }
}

impl Default for SegmentSequence {
    fn default() -> Self { Self::new() }
}

impl SegmentSequence {
    /// An empty sequence that flushes to stdout.
    #[must_use]
    pub fn new() -> Self { Self::with_output_device(OutputDevice::new_stdout()) }

    #[must_use]
    pub fn with_output_device(output_device: OutputDevice) -> Self {
        Self {
            segments: InlineVec::new(),
            cursor: None,
            output_device,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.segments.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.segments.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, StyledSegment> { self.segments.iter() }
}

/// Building.
impl SegmentSequence {
    /// Appends a new unstyled segment, moves the cursor to it, and returns a handle to
    /// it.
    pub fn append(&mut self, text: impl Into<String>) -> &mut StyledSegment {
        self.segments.push(StyledSegment::new(text));
        let index = self.segments.len() - 1;
        self.cursor = Some(index);
        &mut self.segments[index]
    }

    /// Same as [`Self::append`] but returns the sequence, so the [`FluentStyle`] methods
    /// on it apply to the new segment.
    pub fn push_str(&mut self, text: impl Into<String>) -> &mut Self {
        self.append(text);
        self
    }

    /// # Errors
    ///
    /// Returns [`AnsiStringsError::NoCurrentSegment`] if nothing has been appended since
    /// the sequence was created or flushed.
    pub fn current(&self) -> Result<&StyledSegment, AnsiStringsError> {
        self.cursor
            .and_then(|index| self.segments.get(index))
            .ok_or(AnsiStringsError::NoCurrentSegment)
    }

    /// # Errors
    ///
    /// Returns [`AnsiStringsError::NoCurrentSegment`] if nothing has been appended since
    /// the sequence was created or flushed.
    pub fn current_mut(&mut self) -> Result<&mut StyledSegment, AnsiStringsError> {
        self.cursor
            .and_then(|index| self.segments.get_mut(index))
            .ok_or(AnsiStringsError::NoCurrentSegment)
    }

    /// Overwrites the whole style of the current segment w/ a precomposed `style`.
    ///
    /// # Panics
    ///
    /// If the sequence is empty.
    pub fn apply_style(&mut self, style: StyleAttributes) -> &mut Self {
        *self.style_mut() = style;
        self
    }

    /// Drops the style and directive of the current segment, keeping its text.
    ///
    /// # Errors
    ///
    /// Returns [`AnsiStringsError::NoCurrentSegment`] if the sequence is empty. Use
    /// [`FluentStyle::reset_style`] for the chainable form, which panics instead.
    pub fn reset_current(&mut self) -> Result<&mut Self, AnsiStringsError> {
        self.current_mut()?.reset_style();
        Ok(self)
    }

    /// Drops the style and directive of every segment, keeping their text.
    pub fn reset_all(&mut self) -> &mut Self {
        for segment in &mut self.segments {
            segment.reset_style();
        }
        self
    }

    fn push_directive(&mut self, directive: Directive) -> &mut Self {
        self.append("").set_directive(directive);
        self
    }

    /// Appends a segment that moves the cursor `count` cells. A `count` of 0 moves one
    /// cell.
    pub fn move_cursor(&mut self, direction: CursorDirection, count: u16) -> &mut Self {
        self.push_directive(Directive::Move {
            direction,
            count: count.max(1),
        })
    }

    pub fn up(&mut self, count: u16) -> &mut Self {
        self.move_cursor(CursorDirection::Up, count)
    }

    pub fn down(&mut self, count: u16) -> &mut Self {
        self.move_cursor(CursorDirection::Down, count)
    }

    pub fn forward(&mut self, count: u16) -> &mut Self {
        self.move_cursor(CursorDirection::Forward, count)
    }

    pub fn back(&mut self, count: u16) -> &mut Self {
        self.move_cursor(CursorDirection::Back, count)
    }

    /// Appends a segment that moves the cursor to (`col`, `row`), both 1 based.
    ///
    /// # Errors
    ///
    /// Returns [`AnsiStringsError::InvalidArgument`] if either is 0. Nothing is appended
    /// in that case.
    pub fn move_to(&mut self, col: u16, row: u16) -> Result<&mut Self, AnsiStringsError> {
        if col < 1 {
            return Err(AnsiStringsError::invalid_argument("col", col, "1..=65535"));
        }
        if row < 1 {
            return Err(AnsiStringsError::invalid_argument("row", row, "1..=65535"));
        }
        Ok(self.push_directive(Directive::Position { col, row }))
    }

    pub fn clear_screen(&mut self) -> &mut Self {
        self.push_directive(Directive::ClearScreen)
    }

    /// Appends an empty segment that only pauses playback. `None` pauses for
    /// [`crate::MIN_PACE`].
    pub fn pause(&mut self, delay: impl Into<Option<Duration>>) -> &mut Self {
        self.append("").pace(delay);
        self
    }
}

/// Output.
impl SegmentSequence {
    /// Renders every segment in order, w/out pausing.
    #[must_use]
    pub fn render_all(&self) -> String { self.to_string() }

    /// The rendered string in escaped (`{:?}`) form.
    #[must_use]
    pub fn to_raw_string(&self) -> String { format!("{:?}", self.render_all()) }

    /// Plays the sequence back to the output device, then empties it. Segments are
    /// rendered w/ [`Pacing::Honor`] in order, so paced segments block the calling
    /// thread. Each rendered segment is written and flushed right away so the pauses
    /// are visible.
    ///
    /// # Errors
    ///
    /// Returns [`AnsiStringsError::Io`] if the output device can't be written to. The
    /// sequence is left untouched in that case.
    pub fn flush(&mut self) -> miette::Result<&mut Self> {
        let mut bytes_written = 0;

        // Start a new block scope so the lock is released before clearing.
        {
            let out: LockedOutputDevice<'_> =
                lock_output_device_as_mut!(self.output_device);
            for segment in &self.segments {
                let rendered = segment.render(Pacing::Honor);
                if rendered.is_empty() {
                    continue;
                }
                out.write_all(rendered.as_bytes())
                    .map_err(AnsiStringsError::from)?;
                out.flush().map_err(AnsiStringsError::from)?;
                bytes_written += rendered.len();
            }
        }

        tracing::debug!(
            message = "flushed segment sequence",
            segment_count = self.segments.len(),
            bytes_written
        );

        self.segments.clear();
        self.cursor = None;
        Ok(self)
    }
}

impl FluentStyle for SegmentSequence {
    /// The style of the current segment.
    ///
    /// # Panics
    ///
    /// If the sequence is empty. Use [`SegmentSequence::current_mut`] for a fallible
    /// version.
    fn style_mut(&mut self) -> &mut StyleAttributes {
        match self.current_mut() {
            Ok(segment) => &mut segment.style,
            Err(_) => panic!("{MISUSE_NO_SEGMENT}"),
        }
    }

    /// Same as [`SegmentSequence::reset_current`], but panics if the sequence is empty.
    ///
    /// # Panics
    ///
    /// If the sequence is empty.
    fn reset_style(&mut self) -> &mut Self {
        match self.current_mut() {
            Ok(segment) => {
                segment.reset_style();
            }
            Err(_) => panic!("{MISUSE_NO_SEGMENT}"),
        }
        self
    }
}

impl Display for SegmentSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a SegmentSequence {
    type Item = &'a StyledSegment;
    type IntoIter = std::slice::Iter<'a, StyledSegment>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}
