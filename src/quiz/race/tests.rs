use super::*;
use std::time::Duration;
use tokio::sync::oneshot;

#[tokio::test(start_paused = true)]
async fn answer_before_limit_wins() {
    let (sender, receiver) = oneshot::channel();
    sender.send(Ok("4".to_owned())).unwrap();
    let outcome = race(receiver, Duration::from_secs(3)).await.unwrap();
    assert_eq!(outcome, Outcome::Answered("4".to_owned()));
}

#[tokio::test(start_paused = true)]
async fn silence_times_out() {
    let (_sender, receiver) = oneshot::channel::<io::Result<String>>();
    let outcome = race(receiver, Duration::from_secs(1)).await.unwrap();
    assert_eq!(outcome, Outcome::TimedOut);
}

#[tokio::test(start_paused = true)]
async fn times_out_after_limit() {
    let (sender, receiver) = oneshot::channel();
    let start = time::Instant::now();
    tokio::spawn(async move {
        time::sleep(Duration::from_secs(5)).await;
        sender.send(Ok("too late".to_owned())).ok();
    });
    let outcome = race(receiver, Duration::from_secs(2)).await.unwrap();
    assert_eq!(outcome, Outcome::TimedOut);
    assert!(start.elapsed() >= Duration::from_secs(2));
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[tokio::test(start_paused = true)]
async fn late_answer_within_limit_wins() {
    let (sender, receiver) = oneshot::channel();
    tokio::spawn(async move {
        time::sleep(Duration::from_millis(1500)).await;
        sender.send(Ok("6".to_owned())).ok();
    });
    let outcome = race(receiver, Duration::from_secs(2)).await.unwrap();
    assert_eq!(outcome, Outcome::Answered("6".to_owned()));
}

#[tokio::test(start_paused = true)]
async fn answer_ready_at_expiry_wins() {
    let (sender, receiver) = oneshot::channel();
    sender.send(Ok("tie".to_owned())).unwrap();
    let outcome = race(receiver, Duration::from_secs(0)).await.unwrap();
    assert_eq!(outcome, Outcome::Answered("tie".to_owned()));
}

#[tokio::test(start_paused = true)]
async fn abandoned_input_is_an_error() {
    let (sender, receiver) = oneshot::channel::<io::Result<String>>();
    drop(sender);
    assert!(race(receiver, Duration::from_secs(1)).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn read_failure_is_an_error() {
    let (sender, receiver) = oneshot::channel();
    sender
        .send(Err(io::Error::new(io::ErrorKind::InvalidData, "not utf-8")))
        .unwrap();
    assert!(race(receiver, Duration::from_secs(1)).await.is_err());
}
