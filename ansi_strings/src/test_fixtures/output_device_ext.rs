// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use super::StdoutMock;
use crate::{OutputDevice, StdMutex};

pub trait OutputDeviceExt {
    /// Returns an [`OutputDevice`] that writes into a [`StdoutMock`], along w/ a clone
    /// of that mock so the written bytes can be inspected.
    fn new_mock() -> (OutputDevice, StdoutMock);
}

impl OutputDeviceExt for OutputDevice {
    fn new_mock() -> (OutputDevice, StdoutMock) {
        let stdout_mock = StdoutMock::default();
        let this = OutputDevice {
            resource: Arc::new(StdMutex::new(stdout_mock.clone())),
            is_mock: true,
        };
        (this, stdout_mock)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn mock_device_writes_to_returned_mock() {
        let (device, stdout_mock) = OutputDevice::new_mock();
        device.lock().write_all(b"\x1b[1mbold\x1b[0m").unwrap();
        assert!(device.is_mock);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string_strip_ansi(), "bold");
    }
}
