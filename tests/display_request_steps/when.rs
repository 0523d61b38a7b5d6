//! When steps for display request BDD scenarios.

use super::world::DisplayWorld;
use rstest_bdd_macros::when;

#[when("token {position:usize} requests the display {times:usize} time")]
fn request_once(
    world: &mut DisplayWorld,
    position: usize,
    times: usize,
) -> Result<(), eyre::Report> {
    request_repeatedly(world, position, times)
}

#[when("token {position:usize} requests the display {times:usize} times")]
fn request_many(
    world: &mut DisplayWorld,
    position: usize,
    times: usize,
) -> Result<(), eyre::Report> {
    request_repeatedly(world, position, times)
}

#[when("token {position:usize} releases the display {times:usize} time")]
fn release_once(
    world: &mut DisplayWorld,
    position: usize,
    times: usize,
) -> Result<(), eyre::Report> {
    release_repeatedly(world, position, times)
}

#[when("token {position:usize} releases the display {times:usize} times")]
fn release_many(
    world: &mut DisplayWorld,
    position: usize,
    times: usize,
) -> Result<(), eyre::Report> {
    release_repeatedly(world, position, times)
}

#[when("token {position:usize} is dropped")]
fn drop_token(world: &mut DisplayWorld, position: usize) -> Result<(), eyre::Report> {
    let slot = position
        .checked_sub(1)
        .and_then(|index| world.tokens.get_mut(index))
        .ok_or_else(|| eyre::eyre!("no display request token {position}"))?;
    drop(slot.take());
    Ok(())
}

fn request_repeatedly(
    world: &mut DisplayWorld,
    position: usize,
    times: usize,
) -> Result<(), eyre::Report> {
    for _ in 0..times {
        if let Err(err) = world.token(position)?.request_active() {
            world.last_error = Some(err);
        }
    }
    Ok(())
}

fn release_repeatedly(
    world: &mut DisplayWorld,
    position: usize,
    times: usize,
) -> Result<(), eyre::Report> {
    for _ in 0..times {
        if let Err(err) = world.token(position)?.request_release() {
            world.last_error = Some(err);
        }
    }
    Ok(())
}
