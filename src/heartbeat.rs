//! The heartbeat loop: a counter, a log line, and a 10-second sleep.
//!
//! This is the entire bot. Each iteration increments the counter, logs one
//! info line with the counter and current wall-clock time, then sleeps for
//! the fixed interval. A clean interrupt logs a stop line and returns `Ok`;
//! any other fault is logged by the caller and propagated - there is no
//! retry.

use std::future::Future;
use std::io;
use std::time::Duration;

use crate::clock;
use crate::error::HeartbeatError;

/// Heartbeat state: the loop counter and the fixed beat interval.
///
/// The counter starts at 0 and is incremented before each log line, so the
/// first logged value is 1. It only exists for display in log output and is
/// discarded on process exit.
pub struct Heartbeat {
    counter: u64,
    interval: Duration,
}

impl Heartbeat {
    pub fn new(interval: Duration) -> Self {
        Self {
            counter: 0,
            interval,
        }
    }

    /// Number of beats emitted so far.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Emit one heartbeat: increment the counter and log it with the current
    /// wall-clock timestamp.
    pub fn beat(&mut self) -> u64 {
        self.counter += 1;
        tracing::info!(
            counter = self.counter,
            time = %clock::now_iso8601(),
            "Bot is alive!"
        );
        self.counter
    }

    /// Run the heartbeat loop until `shutdown` resolves.
    ///
    /// Beats immediately, then once per interval. A shutdown that resolves
    /// `Ok` is a user-initiated interrupt: logged and returned as success.
    /// A shutdown that resolves `Err` (signal handler failure) is returned
    /// as a fatal error.
    pub async fn run<F>(&mut self, shutdown: F) -> Result<(), HeartbeatError>
    where
        F: Future<Output = io::Result<()>>,
    {
        tokio::pin!(shutdown);

        loop {
            self.beat();

            tokio::select! {
                res = &mut shutdown => {
                    return match res {
                        Ok(()) => {
                            tracing::info!("Bot stopped by user");
                            Ok(())
                        }
                        Err(e) => Err(HeartbeatError::Signal(e)),
                    };
                }
                _ = tokio::time::sleep(self.interval) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_one() {
        let mut hb = Heartbeat::new(Duration::from_secs(10));
        assert_eq!(hb.counter(), 0);
        assert_eq!(hb.beat(), 1);
        assert_eq!(hb.beat(), 2);
        assert_eq!(hb.counter(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn beats_once_per_interval_until_shutdown() {
        let mut hb = Heartbeat::new(Duration::from_secs(10));

        // Interrupt arrives mid-sleep, 35s in: beats at t=0, 10, 20, 30
        let shutdown = async {
            tokio::time::sleep(Duration::from_secs(35)).await;
            Ok(())
        };

        hb.run(shutdown).await.expect("clean interrupt should be Ok");
        assert_eq!(hb.counter(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn signal_failure_is_fatal_after_first_beat() {
        let mut hb = Heartbeat::new(Duration::from_secs(10));

        let shutdown = async { Err(io::Error::other("no signal handler")) };

        let err = hb.run(shutdown).await.expect_err("fault should propagate");
        assert!(matches!(err, HeartbeatError::Signal(_)));
        assert_eq!(hb.counter(), 1);
    }
}
