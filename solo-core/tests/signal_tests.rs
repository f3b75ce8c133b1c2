// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use solo_core::{Signal, SoloError};

#[test]
fn test_value_accessors() {
    let signal = Signal::Value(42);

    assert!(signal.is_value());
    assert!(!signal.is_error());
    assert_eq!(signal.ok(), Some(42));
}

#[test]
fn test_error_accessors() {
    let signal: Signal<i32> = Signal::Error(SoloError::NoElements);

    assert!(signal.is_error());
    assert!(!signal.is_value());
    assert!(matches!(signal.err(), Some(SoloError::NoElements)));
}

#[test]
fn test_map_transforms_value_and_keeps_error() {
    let value = Signal::Value(21).map(|x| x * 2);
    assert_eq!(value, Signal::Value(42));

    let error: Signal<i32> = Signal::Error(SoloError::MoreThanOneElement);
    let mapped = error.map(|x| x * 2);
    assert!(matches!(mapped, Signal::Error(SoloError::MoreThanOneElement)));
}

#[test]
fn test_errors_never_compare_equal() {
    let a: Signal<i32> = Signal::Error(SoloError::NoElements);
    let b: Signal<i32> = Signal::Error(SoloError::NoElements);

    assert_ne!(a, b);
    assert_ne!(a, Signal::Value(1));
}

#[test]
fn test_result_round_trip() {
    let ok: Signal<i32> = Ok(7).into();
    assert_eq!(ok, Signal::Value(7));

    let result: solo_core::Result<i32> = Signal::Value(7).into();
    assert_eq!(result.unwrap(), 7);

    let err: solo_core::Result<i32> = Signal::<i32>::Error(SoloError::NoElements).into();
    assert!(matches!(err, Err(SoloError::NoElements)));
}

#[test]
#[should_panic(expected = "called `Signal::unwrap()` on an `Error` value")]
fn test_unwrap_panics_on_error() {
    let signal: Signal<i32> = Signal::Error(SoloError::NoElements);
    let _ = signal.unwrap();
}
