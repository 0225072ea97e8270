use std::time::Duration;

use anyhow::Result;
use async_deadline::{race, race_spawned, RaceError};
use async_executor::Executor;
use async_io::Timer;
use futures_lite::future;

fn main() -> Result<()> {
    fern::Dispatch::new()
        .level(log::LevelFilter::Trace)
        .chain(std::io::stdout())
        .apply()?;

    let ex = Executor::new();

    future::block_on(ex.run(async {
        // Finishes well inside the deadline.
        let fast = race(Duration::from_secs(2), async {
            Timer::after(Duration::from_millis(100)).await;
            Ok::<_, std::io::Error>("fast reply")
        })
        .await;
        println!("fast: {:?}", fast);

        // Blows through the deadline; the operation is dropped.
        let slow = race(Duration::from_millis(200), async {
            Timer::after(Duration::from_secs(3)).await;
            Ok::<_, std::io::Error>("slow reply")
        })
        .await;
        match slow {
            Err(RaceError::TimedOut) => println!("slow: timed out"),
            other => println!("slow: {:?}", other),
        }

        // Same overrun as a spawned task: cancelled and reclaimed.
        let spawned = race_spawned(&ex, Duration::from_millis(200), async {
            Timer::after(Duration::from_secs(3)).await;
            Ok::<_, std::io::Error>("spawned reply")
        })
        .await;
        println!("spawned: {:?}", spawned);
    }));

    Ok(())
}
