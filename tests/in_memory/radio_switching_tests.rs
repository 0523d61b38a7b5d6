//! In-memory integration tests for radio enumeration and switching.

use super::helpers::{Host, host, seed_radios};
use rstest::rstest;
use winrt_shim::radio::domain::{RadioAccessStatus, RadioId, RadioKind, RadioState};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn catalogue_lists_only_bluetooth_radios(host: Host) {
    seed_radios(&host.radios);

    let radios = host.services.radios().get_radios().await.expect("list radios");

    let ids: Vec<&str> = radios.iter().map(|radio| radio.id().as_str()).collect();
    assert_eq!(ids, vec!["hci0", "hci1", "hci2"]);
    assert!(radios.iter().all(|radio| radio.kind() == RadioKind::Bluetooth));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn switching_a_radio_is_visible_on_the_next_read(host: Host) {
    seed_radios(&host.radios);
    let radio = host
        .services
        .radios()
        .from_id("hci1")
        .await
        .expect("lookup")
        .expect("hci1 is a Bluetooth radio");

    assert_eq!(radio.state().await, RadioState::Off);
    let status = radio.set_state(RadioState::On).await.expect("switch on");

    assert_eq!(status, RadioAccessStatus::Allowed);
    assert_eq!(radio.state().await, RadioState::On);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn hardware_disabled_radio_is_denied(host: Host) {
    seed_radios(&host.radios);
    let radio = host
        .services
        .radios()
        .from_id("hci2")
        .await
        .expect("lookup")
        .expect("hci2 is a Bluetooth radio");

    let status = radio.set_state(RadioState::On).await.expect("switch attempt");

    assert_eq!(status, RadioAccessStatus::DeniedBySystem);
    assert_eq!(radio.state().await, RadioState::Disabled);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn write_only_radio_reports_unknown_state(host: Host) {
    seed_radios(&host.radios);
    host.radios
        .make_write_only(RadioId::new("hci0").expect("valid id"))
        .expect("mark write-only");
    let radio = host
        .services
        .radios()
        .from_id("hci0")
        .await
        .expect("lookup")
        .expect("hci0 is a Bluetooth radio");

    let status = radio.set_state(RadioState::Off).await.expect("switch off");

    assert_eq!(status, RadioAccessStatus::Unspecified);
    assert_eq!(radio.state().await, RadioState::Unknown);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn wifi_radio_is_not_found_by_id(host: Host) {
    seed_radios(&host.radios);

    let radio = host.services.radios().from_id("phy0").await.expect("lookup");

    assert!(radio.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn access_answer_comes_from_the_backend(host: Host) {
    host.radios
        .set_access_status(RadioAccessStatus::DeniedByUser)
        .expect("set access status");

    let status = host.services.radios().request_access().await;

    assert_eq!(status, RadioAccessStatus::DeniedByUser);
}
