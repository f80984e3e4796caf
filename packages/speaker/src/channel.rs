//! Rendezvous channel for handing messages from the speaker to a listener.
//!
//! This wraps a zero-capacity flume channel: a send completes only once a
//! receive is in progress, so the producer and consumer meet at every
//! message. With a single sender and a single receiver, messages arrive in
//! exactly the order they were sent.

// Re-export error types
pub use flume::{RecvError, SendError, TryRecvError, TrySendError};

/// Sending end of a rendezvous channel.
pub struct Sender<T> {
    inner: flume::Sender<T>,
}

/// Receiving end of a rendezvous channel.
///
/// Only one receiver should consume from the channel; values are handed
/// over in FIFO order.
pub struct Receiver<T> {
    inner: flume::Receiver<T>,
}

/// Creates a rendezvous channel.
///
/// The channel has no internal buffer. A send blocks (or suspends, for the
/// async variants) until the matching receive occurs.
#[must_use]
pub fn rendezvous<T>() -> (Sender<T>, Receiver<T>) {
    let (tx, rx) = flume::bounded(0);
    (Sender { inner: tx }, Receiver { inner: rx })
}

impl<T> Sender<T> {
    /// Send a value, blocking until a receiver takes it.
    ///
    /// # Errors
    ///
    /// * Returns `SendError` if the receiver has been dropped
    pub fn send(&self, value: T) -> Result<(), SendError<T>> {
        self.inner.send(value)
    }

    /// Send a value asynchronously, suspending until a receiver takes it.
    ///
    /// # Errors
    ///
    /// * Returns `SendError` if the receiver has been dropped
    pub async fn send_async(&self, value: T) -> Result<(), SendError<T>> {
        self.inner.send_async(value).await
    }

    /// Try to hand a value over without waiting.
    ///
    /// On a rendezvous channel this only succeeds if a receive is already
    /// in progress.
    ///
    /// # Errors
    ///
    /// * Returns `TrySendError::Full` if no receive is in progress
    /// * Returns `TrySendError::Disconnected` if the receiver has been dropped
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.inner.try_send(value)
    }
}

impl<T> Receiver<T> {
    /// Receive a value, blocking until one is handed over.
    ///
    /// # Errors
    ///
    /// * Returns `RecvError::Disconnected` if the sender has been dropped
    pub fn recv(&self) -> Result<T, RecvError> {
        self.inner.recv()
    }

    /// Receive a value asynchronously, suspending until one is handed over.
    ///
    /// # Errors
    ///
    /// * Returns `RecvError::Disconnected` if the sender has been dropped
    pub async fn recv_async(&self) -> Result<T, RecvError> {
        self.inner.recv_async().await
    }

    /// Try to receive a value without waiting.
    ///
    /// # Errors
    ///
    /// * Returns `TryRecvError::Empty` if no send is in progress
    /// * Returns `TryRecvError::Disconnected` if the sender has been dropped
    pub fn try_recv(&self) -> Result<T, TryRecvError> {
        self.inner.try_recv()
    }
}
