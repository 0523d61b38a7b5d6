//! Then steps for SMS compose BDD scenarios.

use super::world::ChatWorld;
use eyre::{WrapErr, ensure, eyre};
use rstest_bdd_macros::then;
use winrt_shim::chat::domain::ComposeSmsRequest;

#[then(r#"the {which} composer received recipients "{recipients}""#)]
fn received_recipients(
    world: &ChatWorld,
    which: String,
    recipients: String,
) -> Result<(), eyre::Report> {
    let request = only_request(world, &which)?;
    ensure!(
        request.recipients() == recipients,
        "expected recipients '{recipients}', got '{}'",
        request.recipients()
    );
    Ok(())
}

#[then(r#"the {which} composer received body "{body}""#)]
fn received_body(world: &ChatWorld, which: String, body: String) -> Result<(), eyre::Report> {
    let request = only_request(world, &which)?;
    ensure!(
        request.body() == body,
        "expected body '{body}', got '{}'",
        request.body()
    );
    Ok(())
}

#[then("the {which} composer received an empty recipient list")]
fn received_empty_recipients(world: &ChatWorld, which: String) -> Result<(), eyre::Report> {
    let request = only_request(world, &which)?;
    ensure!(
        request.recipients().is_empty(),
        "expected no recipients, got '{}'",
        request.recipients()
    );
    Ok(())
}

#[then("the {which} composer received no requests")]
fn received_nothing(world: &ChatWorld, which: String) -> Result<(), eyre::Report> {
    let composed = world
        .composer(&which)?
        .composed()
        .wrap_err("read composed requests")?;
    ensure!(composed.is_empty(), "expected no requests, got {composed:?}");
    Ok(())
}

#[then(r#"the compose error is classified as "{kind}""#)]
fn compose_error_kind(world: &ChatWorld, kind: String) -> Result<(), eyre::Report> {
    let err = match world.result.as_ref() {
        Some(Err(err)) => err,
        Some(Ok(())) => return Err(eyre!("expected compose to fail")),
        None => return Err(eyre!("message was never composed")),
    };
    ensure!(
        err.kind().to_string() == kind,
        "expected error kind {kind}, got {} ({err})",
        err.kind()
    );
    Ok(())
}

fn only_request(world: &ChatWorld, which: &str) -> Result<ComposeSmsRequest, eyre::Report> {
    match world.result.as_ref() {
        Some(Ok(())) => {}
        Some(Err(err)) => return Err(eyre!("compose failed: {err}")),
        None => return Err(eyre!("message was never composed")),
    }
    let composed = world
        .composer(which)?
        .composed()
        .wrap_err("read composed requests")?;
    match composed.as_slice() {
        [request] => Ok(request.clone()),
        other => Err(eyre!("expected exactly one request, got {other:?}")),
    }
}
