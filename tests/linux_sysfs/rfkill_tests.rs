//! rfkill backend tests over a fake sysfs tree.

use super::helpers::{FakeTree, add_rfkill, tree};
use rstest::rstest;
use std::sync::Arc;
use winrt_shim::platform::ports::CapabilityBackend;
use winrt_shim::radio::{
    adapters::rfkill::RfkillRadioBackend,
    domain::{RadioAccessStatus, RadioKind, RadioState},
    ports::RadioBackend,
    services::RadioCatalog,
};

fn catalog(tree: &FakeTree) -> RadioCatalog {
    let backend: Arc<dyn RadioBackend> = Arc::new(RfkillRadioBackend::new(tree.root()));
    RadioCatalog::new(Some(backend))
}

#[rstest]
fn backend_is_available_only_with_an_rfkill_class(tree: FakeTree) {
    let backend = RfkillRadioBackend::new(tree.root());
    assert!(!backend.is_available());

    tree.mkdir("class/rfkill");
    assert!(backend.is_available());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn enumerates_bluetooth_entries_only(tree: FakeTree) {
    add_rfkill(&tree, "rfkill0", "wlan", "phy0", 0, 0);
    add_rfkill(&tree, "rfkill1", "bluetooth", "hci0", 0, 0);
    add_rfkill(&tree, "rfkill2", "bluetooth", "hci1", 0, 1);

    let radios = catalog(&tree).get_radios().await.expect("list radios");

    let names: Vec<&str> = radios.iter().map(|radio| radio.name()).collect();
    assert_eq!(names, vec!["hci0", "hci1"]);
    assert!(radios.iter().all(|radio| radio.kind() == RadioKind::Bluetooth));
}

#[rstest]
#[case(0, 0, RadioState::On)]
#[case(0, 1, RadioState::Off)]
#[case(1, 0, RadioState::Disabled)]
#[tokio::test(flavor = "multi_thread")]
async fn reads_state_from_block_flags(
    tree: FakeTree,
    #[case] hard: u8,
    #[case] soft: u8,
    #[case] expected: RadioState,
) {
    add_rfkill(&tree, "rfkill0", "bluetooth", "hci0", hard, soft);
    let radio = catalog(&tree)
        .from_id("rfkill0")
        .await
        .expect("lookup")
        .expect("rfkill0 is Bluetooth");

    assert_eq!(radio.state().await, expected);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn legacy_state_attribute_is_honoured(tree: FakeTree) {
    tree.write("class/rfkill/rfkill0/type", "bluetooth\n");
    tree.write("class/rfkill/rfkill0/name", "hci0\n");
    tree.write("class/rfkill/rfkill0/state", "1\n");
    let radio = catalog(&tree)
        .from_id("rfkill0")
        .await
        .expect("lookup")
        .expect("rfkill0 is Bluetooth");

    assert_eq!(radio.state().await, RadioState::On);
}

#[rstest]
#[case(RadioState::On, "0")]
#[case(RadioState::Off, "1")]
#[tokio::test(flavor = "multi_thread")]
async fn switching_writes_the_soft_block(
    tree: FakeTree,
    #[case] requested: RadioState,
    #[case] written: &str,
) {
    add_rfkill(&tree, "rfkill0", "bluetooth", "hci0", 0, 1);
    let radio = catalog(&tree)
        .from_id("rfkill0")
        .await
        .expect("lookup")
        .expect("rfkill0 is Bluetooth");

    let status = radio.set_state(requested).await.expect("switch radio");

    assert_eq!(status, RadioAccessStatus::Allowed);
    assert_eq!(tree.read("class/rfkill/rfkill0/soft").trim(), written);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn hard_block_denies_switching(tree: FakeTree) {
    add_rfkill(&tree, "rfkill0", "bluetooth", "hci0", 1, 1);
    let radio = catalog(&tree)
        .from_id("rfkill0")
        .await
        .expect("lookup")
        .expect("rfkill0 is Bluetooth");

    let status = radio.set_state(RadioState::On).await.expect("switch attempt");

    assert_eq!(status, RadioAccessStatus::DeniedBySystem);
    assert_eq!(tree.read("class/rfkill/rfkill0/soft"), "1\n");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removed_radio_reads_as_unknown(tree: FakeTree) {
    add_rfkill(&tree, "rfkill0", "bluetooth", "hci0", 0, 0);
    let radio = catalog(&tree)
        .from_id("rfkill0")
        .await
        .expect("lookup")
        .expect("rfkill0 is Bluetooth");

    std::fs::remove_dir_all(tree.root().join("class/rfkill/rfkill0")).expect("unplug radio");

    assert_eq!(radio.state().await, RadioState::Unknown);
}
