// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::io;

use formfactor::{Classification, FormFactorError};

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "sysfs denied");
    let error: FormFactorError = io_error.into();

    match error {
        FormFactorError::Io(_) => {} // Expected
        _ => panic!("Expected Io error, got different error type"),
    }
}

#[test]
fn test_battery_unavailable_display() {
    let error = FormFactorError::BatteryUnavailable("read rejected".to_string());
    assert_eq!(error.to_string(), "Battery status unavailable: read rejected");
}

#[test]
fn test_invalid_input_display() {
    let error = FormFactorError::InvalidInput("bad label".to_string());
    assert_eq!(error.to_string(), "Invalid input: bad label");
}

#[test]
fn test_logging_error_display() {
    let error = FormFactorError::Logging("already set".to_string());
    assert_eq!(error.to_string(), "Logging error: already set");
}

#[test]
fn test_parse_unknown_label_is_invalid_input() {
    let error = "tablet".parse::<Classification>().unwrap_err();
    match error {
        FormFactorError::InvalidInput(message) => assert!(message.contains("tablet")),
        other => panic!("Expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FormFactorError>();
}
