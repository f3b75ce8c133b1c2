// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use solo_core::{Signal, SoloError, Subject, SubjectError};

#[tokio::test]
async fn test_subscribers_receive_sent_values() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32>::new();
    let mut first = subject.subscribe()?;
    let mut second = subject.subscribe()?;

    // Act
    subject.next(1)?;
    subject.next(2)?;

    // Assert
    assert_eq!(first.next().await, Some(Signal::Value(1)));
    assert_eq!(first.next().await, Some(Signal::Value(2)));
    assert_eq!(second.next().await, Some(Signal::Value(1)));
    assert_eq!(second.next().await, Some(Signal::Value(2)));

    Ok(())
}

#[tokio::test]
async fn test_late_subscriber_misses_earlier_values() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32>::new();
    subject.next(1)?;

    // Act
    let mut late = subject.subscribe()?;
    subject.next(2)?;
    subject.close();

    // Assert
    assert_eq!(late.next().await, Some(Signal::Value(2)));
    assert_eq!(late.next().await, None);

    Ok(())
}

#[tokio::test]
async fn test_close_completes_streams_and_rejects_operations() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32>::new();
    let mut stream = subject.subscribe()?;

    // Act
    subject.close();
    subject.close(); // Idempotent

    // Assert
    assert_eq!(stream.next().await, None);
    assert!(subject.is_closed());
    assert_eq!(subject.next(1), Err(SubjectError::Closed));
    assert!(subject.subscribe().is_err());

    Ok(())
}

#[tokio::test]
async fn test_error_broadcasts_and_closes() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32>::new();
    let mut stream = subject.subscribe()?;

    // Act
    subject.error(SoloError::stream_error("source failed"))?;

    // Assert
    assert!(matches!(
        stream.next().await,
        Some(Signal::Error(SoloError::StreamProcessingError { .. }))
    ));
    assert_eq!(stream.next().await, None);
    assert!(subject.is_closed());

    Ok(())
}

#[tokio::test]
async fn test_dropped_subscribers_are_pruned_on_send() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32>::new();
    let first = subject.subscribe()?;
    let _second = subject.subscribe()?;
    assert_eq!(subject.subscriber_count(), 2);

    // Act
    drop(first);
    subject.next(1)?;

    // Assert
    assert_eq!(subject.subscriber_count(), 1);

    Ok(())
}

#[tokio::test]
async fn test_clones_share_state() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32>::new();
    let clone = subject.clone();
    let mut stream = subject.subscribe()?;

    // Act
    clone.next(5)?;
    clone.close();

    // Assert
    assert_eq!(stream.next().await, Some(Signal::Value(5)));
    assert!(subject.is_closed());

    Ok(())
}
