//! Given steps for display request BDD scenarios.

use super::world::DisplayWorld;
use rstest_bdd_macros::given;
use std::sync::Arc;
use winrt_shim::display::services::DisplayRequest;

#[given("a display coordinator with an in-memory keep-awake backend")]
fn coordinator_with_backend(world: &mut DisplayWorld) {
    world.keep_awake.set_fail_enable(false);
}

#[given("a display coordinator without a keep-awake backend")]
fn coordinator_without_backend(world: &mut DisplayWorld) {
    world.remove_backend();
}

#[given("the keep-awake backend refuses to enable")]
fn backend_refuses_enable(world: &mut DisplayWorld) {
    world.keep_awake.set_fail_enable(true);
}

#[given("{count:usize} display request token")]
fn one_token(world: &mut DisplayWorld, count: usize) {
    create_tokens(world, count);
}

#[given("{count:usize} display request tokens")]
fn several_tokens(world: &mut DisplayWorld, count: usize) {
    create_tokens(world, count);
}

fn create_tokens(world: &mut DisplayWorld, count: usize) {
    for _ in 0..count {
        let token = DisplayRequest::with_coordinator(Arc::clone(&world.coordinator));
        world.tokens.push(Some(token));
    }
}
