#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Listener command-line tool for the monologue demo.
//!
//! Starts a speaker on a background task, listens to a fixed number of
//! messages over a rendezvous channel, prints each one, says goodbye, and
//! shuts the speaker down before exiting.
//!
//! # Usage
//!
//! ```text
//! monologue [--label <LABEL>] [--count <COUNT>] [--seed <SEED>] [--max-delay-ms <MS>]
//! ```
//!
//! With no arguments the output is:
//!
//! ```text
//! You say: "boring! 0"
//! You say: "boring! 1"
//! You say: "boring! 2"
//! You say: "boring! 3"
//! You say: "boring! 4"
//! You are boring, I'm leaving
//! ```

use std::time::Duration;

use clap::Parser;
use monologue_speaker::{CancellationToken, Speaker, channel};

/// Command-line arguments for the monologue listener.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Label the speaker prefixes to every message.
    #[arg(short, long, default_value = "boring!")]
    label: String,

    /// Number of messages to listen to before leaving.
    #[arg(short, long, default_value_t = 5)]
    count: u64,

    /// Seed for the speaker's delay randomness.
    ///
    /// If not specified, the delays are seeded from entropy.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Upper bound, in milliseconds, for the random pause between messages.
    #[arg(long, default_value_t = 1000)]
    max_delay_ms: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let args = Args::parse();

    let (tx, rx) = channel::rendezvous();
    let token = CancellationToken::new();

    let mut speaker =
        Speaker::new(args.label).with_max_delay(Duration::from_millis(args.max_delay_ms));
    if let Some(seed) = args.seed {
        speaker = speaker.with_seed(seed);
    }

    let join = speaker.start(tx, token.clone());

    for _ in 0..args.count {
        let message = rx.recv_async().await?;
        println!("You say: {message:?}");
    }
    println!("You are boring, I'm leaving");

    log::debug!("Shutting the speaker down");
    token.cancel();
    join.await??;

    Ok(())
}
