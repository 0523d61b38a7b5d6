//! Given steps for SMS compose BDD scenarios.

use super::world::ChatWorld;
use rstest_bdd_macros::given;
use std::sync::Arc;
use winrt_shim::chat::{
    adapters::memory::InMemorySmsComposer, domain::ChatMessage, ports::SmsComposer,
};

#[given("the {which} SMS composer is installed")]
fn composer_installed(world: &mut ChatWorld, which: String) -> Result<(), eyre::Report> {
    install(world, &which)
}

#[given("the {which} SMS composer is installed without requiring recipients")]
fn composer_installed_without_recipients(
    world: &mut ChatWorld,
    which: String,
) -> Result<(), eyre::Report> {
    let relaxed = world.composer(&which)?.clone().with_optional_recipients();
    match which.as_str() {
        "primary" => world.primary = relaxed,
        _ => world.fallback = relaxed,
    }
    install(world, &which)
}

#[given("the {which} SMS composer is installed but unavailable at dispatch")]
fn composer_unavailable(world: &mut ChatWorld, which: String) -> Result<(), eyre::Report> {
    world.composer(&which)?.set_unavailable_on_dispatch(true);
    install(world, &which)
}

#[given("no SMS composer is installed")]
fn no_composer(world: &mut ChatWorld) {
    world.installed.clear();
}

#[given(r#"a message "{body}" for recipients "{recipients}""#)]
fn message_with_recipients(world: &mut ChatWorld, body: String, recipients: String) {
    let message = ChatMessage::new(body).with_recipients(recipients.split(','));
    world.message = Some(message);
}

#[given(r#"a message "{body}" with no recipients"#)]
fn message_without_recipients(world: &mut ChatWorld, body: String) {
    world.message = Some(ChatMessage::new(body));
}

fn install(world: &mut ChatWorld, which: &str) -> Result<(), eyre::Report> {
    let composer: InMemorySmsComposer = world.composer(which)?.clone();
    world
        .installed
        .push(Arc::new(composer) as Arc<dyn SmsComposer>);
    Ok(())
}
