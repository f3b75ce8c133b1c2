// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use solo_core::{Signal, SoloError};
use solo_test_utils::{
    assert_no_element_emitted, assert_stream_ended, test_channel, test_channel_with_errors,
    unwrap_stream, unwrap_value,
};

#[tokio::test]
async fn test_unwrap_stream_returns_sent_value() -> anyhow::Result<()> {
    let (tx, mut stream) = test_channel::<i32>();

    tx.send(42)?;

    assert_eq!(unwrap_value(unwrap_stream(&mut stream, 100).await), 42);
    Ok(())
}

#[tokio::test]
async fn test_error_channel_carries_explicit_errors() -> anyhow::Result<()> {
    let (tx, mut stream) = test_channel_with_errors::<i32>();

    tx.send(Signal::Error(SoloError::stream_error("boom")))?;

    assert!(matches!(
        unwrap_stream(&mut stream, 100).await,
        Signal::Error(SoloError::StreamProcessingError { .. })
    ));
    Ok(())
}

#[tokio::test]
async fn test_stream_end_detection() {
    let (tx, mut stream) = test_channel::<i32>();

    drop(tx);

    assert_stream_ended(&mut stream, 100).await;
}

#[tokio::test]
async fn test_silence_detection() {
    let (_tx, mut stream) = test_channel::<i32>();

    assert_no_element_emitted(&mut stream, 50).await;
}
