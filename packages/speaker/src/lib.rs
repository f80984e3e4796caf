#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! The producer side of the monologue demo.
//!
//! A [`Speaker`] runs as a background tokio task and says an endless stream
//! of labeled, numbered messages over a rendezvous channel, pausing a random
//! amount of time between messages. Left alone it never stops talking;
//! shutdown is driven by a [`CancellationToken`] from the listening side.
//!
//! # Example
//!
//! ```rust,no_run
//! use monologue_speaker::{CancellationToken, Speaker, channel};
//!
//! # async fn example() {
//! let (tx, rx) = channel::rendezvous();
//! let token = CancellationToken::new();
//! let join = Speaker::new("boring!").start(tx, token.clone());
//!
//! for _ in 0..5 {
//!     println!("You say: {:?}", rx.recv_async().await.unwrap());
//! }
//!
//! token.cancel();
//! join.await.unwrap().unwrap();
//! # }
//! ```

pub mod channel;
pub mod rng;

use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinHandle;
pub use tokio_util::sync::CancellationToken;

use crate::{channel::Sender, rng::Rng};

/// Default upper bound for the random pause between messages.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to send")]
    Send,
}

impl<T> From<channel::SendError<T>> for Error {
    fn from(_value: channel::SendError<T>) -> Self {
        Self::Send
    }
}

/// A speaker that drones on forever.
///
/// Each message is the speaker's label followed by a space and a counter
/// that starts at 0 and grows without bound. The counter is part of the
/// message content only; the speaker keeps no other state.
pub struct Speaker {
    label: String,
    rng: Rng,
    max_delay: Duration,
}

impl Speaker {
    /// Creates a speaker that prefixes every message with `label`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            rng: Rng::new(),
            max_delay: DEFAULT_MAX_DELAY,
        }
    }

    /// Seeds the delay randomness so the pause sequence is deterministic.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Rng::from_seed(seed);
        self
    }

    /// Sets the upper bound for the random pause between messages.
    #[must_use]
    pub const fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Starts the speaker on a background task.
    ///
    /// The task hands each message over `tx` (suspending until the listener
    /// takes it), sleeps a random duration in `[0, max_delay)`, and repeats.
    /// It exits cleanly with `Ok(())` once `token` is cancelled; there is no
    /// other termination condition.
    pub fn start(
        self,
        tx: Sender<String>,
        token: CancellationToken,
    ) -> JoinHandle<Result<(), Error>> {
        tokio::spawn(async move { self.talk(&tx, &token).await })
    }

    /// Starts the speaker with no way to stop or join it.
    ///
    /// The spawned task is intentionally leaked; it keeps talking until the
    /// receiver is dropped or the process exits. [`Speaker::start`] is the
    /// right choice anywhere shutdown matters.
    pub fn start_detached(self, tx: Sender<String>) {
        drop(tokio::spawn(async move {
            let token = CancellationToken::new();
            if let Err(e) = self.talk(&tx, &token).await {
                log::debug!("Detached speaker stopped: {e:?}");
            }
        }));
    }

    async fn talk(self, tx: &Sender<String>, token: &CancellationToken) -> Result<(), Error> {
        log::debug!("Speaker started: label={}", self.label);

        for n in 0u64.. {
            let message = format!("{} {n}", self.label);

            tokio::select! {
                () = token.cancelled() => {
                    log::debug!("Speaker was cancelled");
                    break;
                }
                resp = tx.send_async(message) => resp?,
            }

            log::trace!("Said message {n}");

            tokio::select! {
                () = token.cancelled() => {
                    log::debug!("Speaker was cancelled");
                    break;
                }
                () = tokio::time::sleep(self.rng.duration_in(self.max_delay)) => {}
            }
        }

        log::debug!("Speaker stopped: label={}", self.label);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fast_speaker(label: &str) -> Speaker {
        Speaker::new(label)
            .with_seed(0)
            .with_max_delay(Duration::from_millis(1))
    }

    #[test_log::test(tokio::test(flavor = "multi_thread"))]
    async fn messages_carry_the_label_and_an_increasing_counter() {
        let (tx, rx) = channel::rendezvous();
        let token = CancellationToken::new();
        let join = fast_speaker("boring!").start(tx, token.clone());

        let mut messages = Vec::new();
        for _ in 0..5 {
            messages.push(rx.recv_async().await.unwrap());
        }

        token.cancel();
        join.await.unwrap().unwrap();

        assert_eq!(
            messages,
            vec![
                "boring! 0",
                "boring! 1",
                "boring! 2",
                "boring! 3",
                "boring! 4",
            ]
        );
    }

    #[test_log::test(tokio::test(flavor = "multi_thread"))]
    async fn cancellation_stops_the_speaker() {
        let (tx, rx) = channel::rendezvous();
        let token = CancellationToken::new();
        let join = fast_speaker("boring!").start(tx, token.clone());

        assert_eq!(rx.recv_async().await.unwrap(), "boring! 0");

        token.cancel();
        join.await.unwrap().unwrap();

        // The task is gone, so its sender is too.
        assert_eq!(rx.recv_async().await, Err(channel::RecvError::Disconnected));
    }

    #[test_log::test(tokio::test(flavor = "multi_thread"))]
    async fn a_dropped_listener_surfaces_as_a_send_error() {
        let (tx, rx) = channel::rendezvous();
        let token = CancellationToken::new();
        let join = fast_speaker("boring!").start(tx, token);

        assert_eq!(rx.recv_async().await.unwrap(), "boring! 0");
        drop(rx);

        assert!(matches!(join.await.unwrap(), Err(Error::Send)));
    }

    #[test_log::test(tokio::test(flavor = "multi_thread"))]
    async fn the_delay_never_reorders_messages() {
        let (tx, rx) = channel::rendezvous();
        let token = CancellationToken::new();
        let join = Speaker::new("hi")
            .with_seed(1234)
            .with_max_delay(Duration::from_millis(3))
            .start(tx, token.clone());

        for n in 0u64..20 {
            assert_eq!(rx.recv_async().await.unwrap(), format!("hi {n}"));
        }

        token.cancel();
        join.await.unwrap().unwrap();
    }
}
