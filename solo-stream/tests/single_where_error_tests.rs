// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use solo_core::{Signal, SoloError};
use solo_stream::SingleExt;
use solo_test_utils::{assert_stream_ended, test_channel, unwrap_stream};

#[derive(Debug, thiserror::Error)]
#[error("refusing to inspect {0}")]
struct Picky(i32);

#[tokio::test]
async fn test_predicate_error_is_forwarded_unchanged() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();
    let mut result = Box::pin(stream.single_where(|x| {
        if *x == 13 {
            Err(SoloError::user_error(Picky(*x)))
        } else {
            Ok(*x > 5)
        }
    }));

    // Act
    tx.send(13)?;

    // Assert: the exact user error surfaces, unwrapped
    match unwrap_stream(&mut result, 100).await {
        Signal::Error(SoloError::UserError(source)) => {
            assert_eq!(source.to_string(), "refusing to inspect 13");
        }
        other => panic!("expected the predicate's own error, got {other:?}"),
    }
    assert_stream_ended(&mut result, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_predicate_error_stops_further_evaluation() -> anyhow::Result<()> {
    // Arrange
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_in_predicate = calls.clone();

    let (tx, stream) = test_channel::<i32>();
    let mut result = Box::pin(stream.single_where(move |x| {
        calls_in_predicate.fetch_add(1, Ordering::SeqCst);
        if *x == 13 {
            Err(SoloError::user_error(Picky(*x)))
        } else {
            Ok(true)
        }
    }));

    // Act: the failing element is followed by more elements
    tx.send(13)?;
    tx.send(1)?;
    tx.send(2)?;

    // Assert
    assert!(matches!(
        unwrap_stream(&mut result, 100).await,
        Signal::Error(SoloError::UserError(_))
    ));
    assert_stream_ended(&mut result, 100).await;

    // Only the failing element ever reached the predicate
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    Ok(())
}

#[tokio::test]
async fn test_raising_element_is_not_recorded_as_candidate() -> anyhow::Result<()> {
    // Arrange: a qualifying candidate exists before the failing element; if
    // the failing element were recorded, this would be a "more than one"
    // violation instead of the predicate's failure
    let (tx, stream) = test_channel::<i32>();
    let mut result = Box::pin(stream.single_where(|x| {
        if *x == 13 {
            Err(SoloError::user_error(Picky(*x)))
        } else {
            Ok(true)
        }
    }));

    // Act
    tx.send(7)?;
    tx.send(13)?;

    // Assert
    assert!(matches!(
        unwrap_stream(&mut result, 100).await,
        Signal::Error(SoloError::UserError(_))
    ));
    assert_stream_ended(&mut result, 100).await;

    Ok(())
}

