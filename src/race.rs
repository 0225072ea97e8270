use std::future::Future;
use std::time::{Duration, Instant};

use async_io::Timer;
use futures_lite::future;
use log::trace;

use crate::{RaceError, Result};

/// Runs `operation` and races it against `deadline`.
///
/// Returns the operation's value, its own error as
/// [`RaceError::OperationFailed`], or [`RaceError::TimedOut`] if the deadline
/// elapses first. The operation is polled before the deadline is checked, so
/// an operation that resolves on the same poll as the expiring deadline still
/// wins. A zero deadline grants the operation a single poll.
///
/// When the deadline wins, the operation future is dropped before this
/// function returns; it cannot keep running in the background.
pub async fn race<T, E, F>(deadline: Duration, operation: F) -> Result<T, E>
where
    F: Future<Output = std::result::Result<T, E>>,
{
    match Instant::now().checked_add(deadline) {
        Some(expiry) => race_at(expiry, operation).await,
        // Expiry is beyond representable time, the deadline can never fire.
        None => operation.await.map_err(RaceError::OperationFailed),
    }
}

/// Like [`race`], but against an absolute expiry instant.
///
/// An expiry at or before the current instant behaves like a zero deadline.
pub async fn race_at<T, E, F>(expiry: Instant, operation: F) -> Result<T, E>
where
    F: Future<Output = std::result::Result<T, E>>,
{
    future::or(
        async { operation.await.map_err(RaceError::OperationFailed) },
        async {
            Timer::at(expiry).await;
            trace!("deadline reached with operation still pending");
            Err(RaceError::TimedOut)
        },
    )
    .await
}
