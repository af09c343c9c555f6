use anyhow::{Context, Result};
use std::io;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time;

#[cfg(test)]
mod tests;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Answered(String),
    TimedOut,
}

/// Waits for whichever comes first: the answer handed over by an input activity, or
/// `limit` elapsing. An answer that is ready when the timer fires wins.
///
/// Whatever loses is dropped. A pending timer is cancelled along with its sleep; a
/// pending input activity keeps running but its sender now has nobody to deliver to.
pub async fn race(
    answer: oneshot::Receiver<io::Result<String>>,
    limit: Duration,
) -> Result<Outcome> {
    tokio::select! {
        biased;
        answer = answer => {
            let answer = answer
                .context("Input activity ended without handing over an answer")?
                .context("Could not read answer")?;
            Ok(Outcome::Answered(answer))
        }
        () = time::sleep(limit) => Ok(Outcome::TimedOut),
    }
}
