//! When steps for SMS compose BDD scenarios.

use super::world::{ChatWorld, run_async};
use eyre::eyre;
use rstest_bdd_macros::when;

#[when("the message is composed")]
fn compose_message(world: &mut ChatWorld) -> Result<(), eyre::Report> {
    let message = world
        .message
        .as_ref()
        .ok_or_else(|| eyre!("no message in scenario world"))?;
    let manager = world.manager();
    let result = run_async(manager.show_compose_sms(message));
    world.result = Some(result);
    Ok(())
}
