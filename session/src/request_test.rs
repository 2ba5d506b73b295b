use futures::executor::block_on;
use futures::future::{pending, ready};

use super::*;

#[test]
fn single_request_completes() {
    let latest = LatestOnly::new();
    let out = block_on(latest.begin(ready(3)));
    assert_eq!(out, Ok(3));
}

#[test]
fn newer_request_aborts_older_one() {
    let latest = LatestOnly::new();
    let first = latest.begin(pending::<&str>());
    let second = latest.begin(ready("seoul"));

    assert_eq!(block_on(first), Err(Aborted));
    assert_eq!(block_on(second), Ok("seoul"));
}

#[test]
fn cancel_aborts_in_flight_request() {
    let latest = LatestOnly::new();
    let req = latest.begin(pending::<()>());
    assert!(latest.in_flight());

    latest.cancel();

    assert!(!latest.in_flight());
    assert_eq!(block_on(req), Err(Aborted));
}

#[test]
fn dropping_owner_aborts_in_flight_request() {
    let latest = LatestOnly::new();
    let req = latest.begin(pending::<()>());
    drop(latest);
    assert_eq!(block_on(req), Err(Aborted));
}

#[test]
fn cancel_without_request_is_noop() {
    let latest = LatestOnly::new();
    latest.cancel();
    assert!(!latest.in_flight());
}
