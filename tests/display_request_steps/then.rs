//! Then steps for display request BDD scenarios.

use super::world::DisplayWorld;
use eyre::{WrapErr, ensure, eyre};
use rstest_bdd_macros::then;

#[then("the active request count is {count:u32}")]
fn active_count(world: &DisplayWorld, count: u32) -> Result<(), eyre::Report> {
    let status = world
        .coordinator
        .status()
        .wrap_err("read display request status")?;
    ensure!(
        status.active_requests == count,
        "expected {count} active requests, found {}",
        status.active_requests
    );
    ensure!(
        status.is_active() == (count > 0),
        "activation time disagrees with the request count"
    );
    Ok(())
}

#[then("the keep-awake backend was enabled {count:usize} time")]
fn enabled_once(world: &DisplayWorld, count: usize) -> Result<(), eyre::Report> {
    check_enables(world, count)
}

#[then("the keep-awake backend was enabled {count:usize} times")]
fn enabled_many(world: &DisplayWorld, count: usize) -> Result<(), eyre::Report> {
    check_enables(world, count)
}

#[then("the keep-awake backend was disabled {count:usize} time")]
fn disabled_once(world: &DisplayWorld, count: usize) -> Result<(), eyre::Report> {
    check_disables(world, count)
}

#[then("the keep-awake backend was disabled {count:usize} times")]
fn disabled_many(world: &DisplayWorld, count: usize) -> Result<(), eyre::Report> {
    check_disables(world, count)
}

#[then(r#"the last display error is classified as "{kind}""#)]
fn last_error_kind(world: &DisplayWorld, kind: String) -> Result<(), eyre::Report> {
    let err = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre!("expected a display request error"))?;
    ensure!(
        err.kind().to_string() == kind,
        "expected error kind {kind}, got {} ({err})",
        err.kind()
    );
    Ok(())
}

fn check_enables(world: &DisplayWorld, count: usize) -> Result<(), eyre::Report> {
    let calls = world.keep_awake.enable_calls();
    ensure!(calls == count, "expected {count} enable calls, found {calls}");
    Ok(())
}

fn check_disables(world: &DisplayWorld, count: usize) -> Result<(), eyre::Report> {
    let calls = world.keep_awake.disable_calls();
    ensure!(calls == count, "expected {count} disable calls, found {calls}");
    Ok(())
}
