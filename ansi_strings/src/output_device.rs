// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc, MutexGuard, PoisonError};

pub type StdMutex<T> = std::sync::Mutex<T>;
pub type SendRawTerminal = dyn std::io::Write + Send;
pub type SafeRawTerminal = Arc<StdMutex<SendRawTerminal>>;
pub type LockedOutputDevice<'a> = &'a mut dyn std::io::Write;

/// Macro to simplify locking and getting a mutable reference to the output device.
/// Don't call this again in the same scope, it will deadlock! Use it in a separate
/// block scope.
///
/// ```
/// use r3bl_ansi_strings::{lock_output_device_as_mut, LockedOutputDevice, OutputDevice};
///
/// let device = OutputDevice::new_stdout();
/// {
///     let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
///     let _ = mut_ref.write_all(b"Hello, world!\n");
/// } // The lock is released here.
/// ```
#[macro_export]
macro_rules! lock_output_device_as_mut {
    ($device:expr) => {
        &mut *$device.lock()
    };
}

/// The sink that [`crate::SegmentSequence::flush`] writes to.
/// - It is safe to clone, clones share the same underlying writer.
/// - To write to it, see [`Self::lock()`] or the [`lock_output_device_as_mut`] macro.
#[derive(Clone)]
#[allow(missing_debug_implementations)]
pub struct OutputDevice {
    pub resource: SafeRawTerminal,
    pub is_mock: bool,
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stdout())),
            is_mock: false,
        }
    }

    #[must_use]
    pub fn new_stderr() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stderr())),
            is_mock: false,
        }
    }

    /// Wraps any writer, eg: a file or an in memory buffer.
    pub fn new_from_writer(writer: impl std::io::Write + Send + 'static) -> Self {
        Self {
            resource: Arc::new(StdMutex::new(writer)),
            is_mock: false,
        }
    }

    /// Locks the output device for writing.
    ///
    /// ```
    /// use r3bl_ansi_strings::{LockedOutputDevice, OutputDevice};
    ///
    /// let device = OutputDevice::new_stdout();
    /// let mut_ref: LockedOutputDevice<'_> = &mut *device.lock();
    /// let _ = mut_ref.write_all(b"Hello, world!\n");
    /// ```
    ///
    /// A poisoned lock (a writer panicked while holding it) is recovered, since the
    /// only state behind it is the writer itself.
    pub fn lock(&self) -> MutexGuard<'_, SendRawTerminal> {
        self.resource.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{OutputDeviceExt, StdoutMock};

    #[test]
    fn stdout_output_device_is_not_mock() {
        let device = OutputDevice::new_stdout();
        let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
        drop(mut_ref.flush());
        assert!(!device.is_mock);
    }

    #[test]
    fn clones_share_the_writer() {
        let (device, stdout_mock) = OutputDevice::new_mock();
        let clone = device.clone();
        {
            let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(clone);
            mut_ref.write_all(b"hello").unwrap();
        }
        assert!(device.is_mock);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "hello");
    }

    #[test]
    fn new_from_writer() {
        let stdout_mock = StdoutMock::new();
        let device = OutputDevice::new_from_writer(stdout_mock.clone());
        device.lock().write_all(b"abc").unwrap();
        assert!(!device.is_mock);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "abc");
    }
}
