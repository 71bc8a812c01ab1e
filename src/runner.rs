//! Runs searches once, or over and over in daemon mode.
//!
//! A [`RunLoop`] moves through a small set of states:
//!
//! ```text
//! Idle -> Running -> (Sleeping -> Running)* -> Terminated
//! ```
//!
//! Without daemon mode it runs a single [`Cycle`] and stops. In daemon mode
//! it sleeps for [`REFRESH_INTERVAL`] after every cycle and then runs
//! another, until it is cancelled. Cancellation is observed at the top of
//! every iteration and raced against both the running cycle and the sleep,
//! so an interrupt stops the loop as soon as it arrives.

use crate::error::Error;
use chrono::{Local, TimeDelta};
use log::{debug, info};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time;

/// How long daemon mode waits between searches.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// One pass of searching and printing.
pub trait Cycle {
    /// Runs the pass. An error ends the loop.
    fn run(&mut self) -> impl Future<Output = Result<(), Error>>;
}

/// Creates a linked pair: a [`Canceller`] that requests a stop, and a
/// [`Cancellation`] token that observes it.
pub fn cancellation() -> (Canceller, Cancellation) {
    let (tx, rx) = watch::channel(false);
    (Canceller { tx }, Cancellation { rx })
}

/// Requests that a [`RunLoop`] stop.
#[derive(Debug)]
pub struct Canceller {
    tx: watch::Sender<bool>,
}

impl Canceller {
    /// Requests a stop. Calling this more than once has no further effect.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

/// Observes whether a stop has been requested.
#[derive(Clone, Debug)]
pub struct Cancellation {
    rx: watch::Receiver<bool>,
}

impl Cancellation {
    /// True if a stop has been requested.
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once a stop has been requested.
    ///
    /// If the [`Canceller`] is dropped without cancelling, no stop can ever
    /// be requested and this never resolves.
    pub async fn cancelled(&mut self) {
        if self.rx.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

/// Drives [`Cycle`]s until done.
#[derive(Debug)]
pub struct RunLoop {
    daemon: bool,
    interval: Duration,
}

impl RunLoop {
    /// Creates a loop that runs once, or forever if `daemon` is true.
    pub fn new(daemon: bool) -> Self {
        Self {
            daemon,
            interval: REFRESH_INTERVAL,
        }
    }

    /// Changes how long the loop sleeps between cycles.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Runs `cycle` until the loop terminates and returns the number of
    /// cycles that ran to completion.
    ///
    /// A cancelled loop terminates successfully. An error from a cycle
    /// terminates the loop with that error, even in daemon mode.
    pub async fn run<C: Cycle>(
        &self,
        cycle: &mut C,
        mut cancellation: Cancellation,
    ) -> Result<usize, Error> {
        let mut completed = 0;

        loop {
            if cancellation.is_cancelled() {
                break;
            }

            debug!("running cycle {}", completed + 1);
            tokio::select! {
                _ = cancellation.cancelled() => {
                    info!("interrupted while searching");
                    break;
                }
                result = cycle.run() => {
                    result?;
                    completed += 1;
                }
            }

            if !self.daemon {
                break;
            }

            let next = Local::now() + TimeDelta::seconds(self.interval.as_secs() as i64);
            info!("next refresh at {}", next.format("%H:%M:%S"));
            tokio::select! {
                _ = cancellation.cancelled() => {
                    info!("interrupted while sleeping");
                    break;
                }
                _ = time::sleep(self.interval) => {}
            }
        }

        Ok(completed)
    }
}
