#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Fire-and-forget example for `monologue_speaker`.
//!
//! This variant starts the speaker with [`Speaker::start_detached`] and never
//! stops it: the task is intentionally abandoned when the process exits after
//! the fifth message. Anywhere shutdown matters, prefer [`Speaker::start`]
//! with a cancellation token as the `monologue` binary does.

use monologue_speaker::{Speaker, channel};

#[tokio::main]
async fn main() -> Result<(), channel::RecvError> {
    pretty_env_logger::init();

    let (tx, rx) = channel::rendezvous();
    Speaker::new("boring!").start_detached(tx);

    for _ in 0..5 {
        println!("You say: {:?}", rx.recv_async().await?);
    }
    println!("You are boring, I'm leaving");

    // The speaker is still mid-monologue; process exit abandons it.
    Ok(())
}
