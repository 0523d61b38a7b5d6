//! In-memory integration tests for network information.

use super::helpers::{Host, host};
use rstest::rstest;
use winrt_shim::network::domain::{
    ConnectionProfile, NetworkAdapterKind, NetworkConnectivityLevel,
};

fn profile(
    name: &str,
    kind: NetworkAdapterKind,
    level: NetworkConnectivityLevel,
) -> ConnectionProfile {
    ConnectionProfile::new(name, kind, level).expect("valid profile")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn internet_profile_prefers_internet_access(host: Host) {
    host.network
        .set_profiles(vec![
            profile("eth0", NetworkAdapterKind::Ethernet, NetworkConnectivityLevel::LocalAccess),
            profile("wlan0", NetworkAdapterKind::Wlan, NetworkConnectivityLevel::InternetAccess),
            profile("wwan0", NetworkAdapterKind::Wwan, NetworkConnectivityLevel::InternetAccess),
        ])
        .expect("set profiles");

    let best = host
        .services
        .network()
        .get_internet_connection_profile()
        .await
        .expect("query")
        .expect("a connected profile exists");

    assert_eq!(best.name(), "wlan0");
    assert!(best.has_internet());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn disconnected_host_has_no_internet_profile(host: Host) {
    host.network
        .set_profiles(vec![profile(
            "eth0",
            NetworkAdapterKind::Ethernet,
            NetworkConnectivityLevel::None,
        )])
        .expect("set profiles");

    let network = host.services.network();
    let profiles = network.get_connection_profiles().await.expect("list");
    let best = network
        .get_internet_connection_profile()
        .await
        .expect("query");

    assert_eq!(profiles.len(), 1);
    assert!(best.is_none());
}
