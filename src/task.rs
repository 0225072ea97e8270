use std::future::Future;
use std::time::Duration;

use async_executor::Executor;
use async_io::Timer;
use futures_lite::future;
use log::trace;

use crate::{RaceError, Result};

/// Spawns `operation` on `ex` and races the task against `deadline`.
///
/// Unlike [`race`](crate::race()), the operation runs as its own executor task,
/// so it makes progress whenever the executor does, independently of this
/// future being polled. When the deadline wins, the task is cancelled and its
/// teardown awaited before this returns; the caller never leaves work running
/// behind.
pub async fn race_spawned<'ex, T, E, F>(
    ex: &Executor<'ex>,
    deadline: Duration,
    operation: F,
) -> Result<T, E>
where
    F: Future<Output = std::result::Result<T, E>> + Send + 'ex,
    T: Send + 'ex,
    E: Send + 'ex,
{
    let mut task = ex.spawn(operation);

    let finished = future::or(
        async { Some((&mut task).await) },
        async {
            Timer::after(deadline).await;
            None
        },
    )
    .await;

    match finished {
        Some(outcome) => outcome.map_err(RaceError::OperationFailed),
        None => {
            trace!("deadline elapsed, cancelling task (deadline: {:?})", deadline);
            task.cancel().await;
            Err(RaceError::TimedOut)
        }
    }
}
