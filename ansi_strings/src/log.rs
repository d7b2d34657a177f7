// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging is **DISABLED** by **default**. The library only emits [`tracing`] events
//! (at `debug` and `trace` level); nothing is printed unless a subscriber is installed,
//! eg: w/ [`try_initialize_logging_global`].
//!
//! Log output goes to `stderr` by default, so it never interleaves w/ the escape coded
//! output that [`crate::SegmentSequence::flush`] writes to `stdout`.

use miette::IntoDiagnostic;
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use crate::StdoutMock;

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Where log lines are displayed.
#[derive(Clone, Debug, Default)]
pub enum DisplayPreference {
    Stdout,
    #[default]
    Stderr,
    /// Capture log lines in memory, eg: to assert on them in tests.
    Capture(StdoutMock),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TracingScope {
    /// Global default subscriber, which once set, can't be unset or changed. This is
    /// what apps want.
    #[default]
    Global,
    /// Thread local subscriber, which is reset when the returned guard is dropped. This
    /// is what tests want.
    ThreadLocal,
}

#[derive(Clone, Debug)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub display_preference: DisplayPreference,
    pub scope: TracingScope,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::OFF,
            display_preference: DisplayPreference::default(),
            scope: TracingScope::default(),
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn new(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            ..Default::default()
        }
    }

    /// Installs a subscriber w/ this configuration.
    ///
    /// # Return
    ///
    /// 1. [`TracingScope::ThreadLocal`] returns a [`dispatcher::DefaultGuard`]. Drop it
    ///    to restore the previous subscriber for this thread.
    /// 2. [`TracingScope::Global`] returns [`None`].
    ///
    /// # Errors
    ///
    /// If a global subscriber has already been installed.
    pub fn install(self) -> miette::Result<Option<dispatcher::DefaultGuard>> {
        let layer: Box<DynLayer<Registry>> =
            create_display_layer(self.level_filter, self.display_preference);
        match self.scope {
            TracingScope::Global => {
                tracing_subscriber::registry()
                    .with(layer)
                    .try_init()
                    .into_diagnostic()?;
                Ok(None)
            }
            TracingScope::ThreadLocal => {
                let guard = tracing_subscriber::registry().with(layer).set_default();
                Ok(Some(guard))
            }
        }
    }
}

/// This erases the concrete type of the writer, and returns a boxed layer.
pub fn create_display_layer<S>(
    level_filter: LevelFilter,
    display_preference: DisplayPreference,
) -> Box<DynLayer<S>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    match display_preference {
        DisplayPreference::Stdout => Box::new(
            create_fmt!()
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            create_fmt!()
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
        DisplayPreference::Capture(stdout_mock) => {
            let tracing_writer = move || stdout_mock.clone();
            Box::new(
                create_fmt!()
                    .with_ansi(false)
                    .with_writer(tracing_writer)
                    .with_filter(level_filter),
            )
        }
    }
}

/// Installs a global subscriber that writes to `stderr` at `level_filter`. Passing
/// [`LevelFilter::OFF`] does nothing, and logging stays disabled.
///
/// # Errors
///
/// If a global subscriber has already been installed.
pub fn try_initialize_logging_global(level_filter: LevelFilter) -> miette::Result<()> {
    // Early return if the level filter is off.
    if matches!(level_filter, LevelFilter::OFF) {
        return Ok(());
    }

    TracingConfig::new(level_filter).install()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::{FluentStyle, OutputDevice, OutputDeviceExt, SegmentSequence};

    fn capture_config(level_filter: LevelFilter) -> (TracingConfig, StdoutMock) {
        let stdout_mock = StdoutMock::new();
        let config = TracingConfig {
            level_filter,
            display_preference: DisplayPreference::Capture(stdout_mock.clone()),
            scope: TracingScope::ThreadLocal,
        };
        (config, stdout_mock)
    }

    #[test]
    fn off_is_a_no_op() {
        try_initialize_logging_global(LevelFilter::OFF).unwrap();
    }

    #[serial]
    #[test]
    fn flush_logs_a_debug_event() {
        let (config, log_mock) = capture_config(LevelFilter::DEBUG);
        let _guard = config.install().unwrap();

        let (device, _stdout_mock) = OutputDevice::new_mock();
        let mut seq = SegmentSequence::with_output_device(device);
        seq.push_str("abc").bold();
        seq.flush().unwrap();

        let logs = log_mock.get_copy_of_buffer_as_string();
        assert!(logs.contains("flushed segment sequence"), "{logs}");
        assert!(logs.contains("segment_count=1"), "{logs}");
        assert!(logs.contains("bytes_written=11"), "{logs}");
    }

    #[serial]
    #[test]
    fn level_filter_is_honored() {
        let (config, log_mock) = capture_config(LevelFilter::INFO);
        let _guard = config.install().unwrap();

        let (device, _stdout_mock) = OutputDevice::new_mock();
        SegmentSequence::with_output_device(device)
            .push_str("abc")
            .flush()
            .unwrap();

        assert_eq!(log_mock.get_copy_of_buffer_as_string(), "");
    }
}
