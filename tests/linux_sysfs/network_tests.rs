//! sysfs network backend tests over fake sysfs and procfs trees.

use super::helpers::{FakeTree, tree};
use rstest::rstest;
use std::sync::Arc;
use winrt_shim::network::{
    adapters::sysfs::SysfsNetworkBackend,
    domain::{NetworkAdapterKind, NetworkConnectivityLevel},
    ports::NetworkStatusBackend,
    services::NetworkInformation,
};

const ROUTE_HEADER: &str =
    "Iface\tDestination\tGateway\tFlags\tRefCnt\tUse\tMetric\tMask\tMTU\tWindow\tIRTT\n";

fn add_interface(sysfs: &FakeTree, name: &str, hardware_type: u32, operstate: &str) {
    sysfs.write(&format!("class/net/{name}/type"), &format!("{hardware_type}\n"));
    sysfs.write(&format!("class/net/{name}/operstate"), &format!("{operstate}\n"));
}

fn information(sysfs: &FakeTree, procfs: &FakeTree) -> NetworkInformation {
    let backend: Arc<dyn NetworkStatusBackend> =
        Arc::new(SysfsNetworkBackend::new(sysfs.root(), procfs.root()));
    NetworkInformation::new(Some(backend))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn classifies_interfaces_and_skips_loopback(
    #[from(tree)] sysfs: FakeTree,
    #[from(tree)] procfs: FakeTree,
) {
    add_interface(&sysfs, "lo", 772, "unknown");
    add_interface(&sysfs, "eth0", 1, "up");
    add_interface(&sysfs, "wlan0", 1, "up");
    sysfs.mkdir("class/net/wlan0/wireless");
    add_interface(&sysfs, "wwan0", 519, "down");
    procfs.write(
        "net/route",
        &format!("{ROUTE_HEADER}wlan0\t00000000\t0100A8C0\t0003\t0\t0\t600\t00000000\t0\t0\t0\n"),
    );

    let profiles = information(&sysfs, &procfs)
        .get_connection_profiles()
        .await
        .expect("list profiles");

    let summary: Vec<(&str, NetworkAdapterKind, NetworkConnectivityLevel)> = profiles
        .iter()
        .map(|profile| (profile.name(), profile.adapter_kind(), profile.connectivity()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (
                "eth0",
                NetworkAdapterKind::Ethernet,
                NetworkConnectivityLevel::LocalAccess
            ),
            (
                "wlan0",
                NetworkAdapterKind::Wlan,
                NetworkConnectivityLevel::InternetAccess
            ),
            (
                "wwan0",
                NetworkAdapterKind::Wwan,
                NetworkConnectivityLevel::None
            ),
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn routed_interface_is_the_internet_profile(
    #[from(tree)] sysfs: FakeTree,
    #[from(tree)] procfs: FakeTree,
) {
    add_interface(&sysfs, "eth0", 1, "up");
    add_interface(&sysfs, "eth1", 1, "up");
    procfs.write(
        "net/route",
        &format!("{ROUTE_HEADER}eth1\t00000000\t0100A8C0\t0003\t0\t0\t100\t00000000\t0\t0\t0\n"),
    );

    let best = information(&sysfs, &procfs)
        .get_internet_connection_profile()
        .await
        .expect("query")
        .expect("eth1 has a default route");

    assert_eq!(best.name(), "eth1");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_route_table_means_local_access_only(
    #[from(tree)] sysfs: FakeTree,
    #[from(tree)] procfs: FakeTree,
) {
    add_interface(&sysfs, "eth0", 1, "unknown");
    sysfs.write("class/net/eth0/carrier", "1\n");

    let profiles = information(&sysfs, &procfs)
        .get_connection_profiles()
        .await
        .expect("list profiles");

    let [profile] = profiles.as_slice() else {
        panic!("expected one profile, got {profiles:?}");
    };
    assert_eq!(profile.connectivity(), NetworkConnectivityLevel::LocalAccess);
}
