//! In-memory integration tests for capability wiring.

use super::helpers::{Host, bare_host, host};
use rstest::rstest;
use winrt_shim::{
    CapabilityErrorKind, SystemServices,
    chat::domain::ChatMessage,
    platform::domain::{BackendResolution, Capability},
};

#[rstest]
fn report_names_every_in_memory_backend(host: Host) {
    let report = host.services.report();

    assert_eq!(report.entries().len(), 5);
    assert_eq!(
        report.resolution(Capability::Radio).backend(),
        Some("in-memory-radio")
    );
    assert_eq!(
        report.resolution(Capability::ChatMessaging).backend(),
        Some("memory-sms")
    );
    assert!(
        report
            .entries()
            .iter()
            .all(|entry| entry.resolution.is_resolved())
    );
}

#[rstest]
fn bare_host_reports_every_capability_unavailable(bare_host: SystemServices) {
    let report = bare_host.report();

    assert_eq!(report.entries().len(), 5);
    for entry in report.entries() {
        assert_eq!(
            entry.resolution,
            BackendResolution::Unavailable,
            "{} should be unavailable",
            entry.capability
        );
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn bare_host_reports_platform_not_supported(bare_host: SystemServices) {
    let compose = bare_host
        .chat()
        .show_compose_sms(&ChatMessage::new("hi").with_recipient("555"))
        .await
        .expect_err("compose needs a composer");
    assert_eq!(compose.kind(), CapabilityErrorKind::PlatformNotSupported);

    let vibrate = bare_host
        .vibration()
        .vibrate(100)
        .await
        .expect_err("vibration needs a motor");
    assert_eq!(vibrate.kind(), CapabilityErrorKind::PlatformNotSupported);

    let network = bare_host
        .network()
        .get_connection_profiles()
        .await
        .expect_err("profiles need a backend");
    assert_eq!(network.kind(), CapabilityErrorKind::PlatformNotSupported);

    let display = bare_host
        .display_request()
        .request_active()
        .expect_err("display requests need a backend");
    assert_eq!(display.kind(), CapabilityErrorKind::PlatformNotSupported);

    let radios = bare_host
        .radios()
        .get_radios()
        .await
        .expect("missing radio backend is an empty catalogue");
    assert!(radios.is_empty());
}

#[rstest]
fn invalid_vibration_is_rejected_before_the_platform_check(bare_host: SystemServices) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime should build");

    let err = runtime
        .block_on(bare_host.vibration().vibrate(5001))
        .expect_err("5001 ms exceeds the maximum");
    assert_eq!(err.kind(), CapabilityErrorKind::InvalidArgument);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn vibration_accepts_the_inclusive_bounds(host: Host) {
    host.services
        .vibration()
        .vibrate(0)
        .await
        .expect("zero duration is valid");
    host.services
        .vibration()
        .vibrate(5000)
        .await
        .expect("5000 ms is valid");

    let history: Vec<u64> = host
        .motor
        .history()
        .iter()
        .map(|duration| u64::from(duration.as_millis()))
        .collect();
    assert_eq!(history, vec![0, 5000]);
}

#[rstest]
fn display_tokens_share_the_host_coordinator(host: Host) {
    let first = host.services.display_request();
    let second = host.services.display_request();

    first.request_active().expect("first request");
    second.request_active().expect("second request");
    first.request_release().expect("first release");

    let status = host.services.display().status().expect("status");
    assert_eq!(status.active_requests, 1);
    assert_eq!(host.keep_awake.enable_calls(), 1);
    assert_eq!(host.keep_awake.disable_calls(), 0);

    drop(second);
    assert_eq!(host.keep_awake.disable_calls(), 1);
    assert!(!host.keep_awake.is_held());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn compose_reaches_the_wired_composer(host: Host) {
    let message = ChatMessage::new("on my way").with_recipients(["+15550100", "+15550101"]);

    host.services
        .chat()
        .show_compose_sms(&message)
        .await
        .expect("compose should be delegated");

    let composed = host.composer.composed().expect("read composed");
    let [request] = composed.as_slice() else {
        panic!("expected one compose request, got {composed:?}");
    };
    assert_eq!(request.recipients(), "+15550100;+15550101");
    assert_eq!(request.body(), "on my way");
}
