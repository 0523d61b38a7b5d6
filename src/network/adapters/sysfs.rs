//! Linux network status from sysfs and procfs.
//!
//! Interfaces come from `class/net` under sysfs. Each one is classified by
//! its `wireless` directory, `uevent` device type and ARP hardware `type`.
//! Connectivity is derived from `operstate`/`carrier` and from whether
//! `net/route` under procfs holds a default route through the interface.
//! Captive portals are not detected, so
//! [`NetworkConnectivityLevel::ConstrainedInternetAccess`] is never reported.

use crate::config::ShimConfig;
use crate::network::{
    domain::{ConnectionProfile, NetworkAdapterKind, NetworkConnectivityLevel},
    ports::{NetworkBackendError, NetworkBackendResult, NetworkStatusBackend},
};
use crate::platform::ports::CapabilityBackend;
use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::collections::HashSet;
use std::io;
use tracing::debug;

const NET_CLASS_DIR: &str = "class/net";
const ROUTE_TABLE: &str = "net/route";
const DEFAULT_DESTINATION: &str = "00000000";
const DEFAULT_MASK: &str = "00000000";
const RTF_UP: u32 = 0x1;

const ARPHRD_ETHER: u32 = 1;
const ARPHRD_PPP: u32 = 512;
const ARPHRD_RAWIP: u32 = 519;
const ARPHRD_LOOPBACK: u32 = 772;

/// Network backend over Linux sysfs and procfs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysfsNetworkBackend {
    sysfs_root: Utf8PathBuf,
    procfs_root: Utf8PathBuf,
}

impl SysfsNetworkBackend {
    /// Creates a backend over explicit mount points.
    #[must_use]
    pub fn new(sysfs_root: impl Into<Utf8PathBuf>, procfs_root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            sysfs_root: sysfs_root.into(),
            procfs_root: procfs_root.into(),
        }
    }

    /// Creates a backend from host configuration.
    #[must_use]
    pub fn from_config(config: &ShimConfig) -> Self {
        Self::new(config.sysfs_root.clone(), config.procfs_root.clone())
    }
}

impl CapabilityBackend for SysfsNetworkBackend {
    fn backend_name(&self) -> &'static str {
        "linux-sysfs-net"
    }

    fn is_available(&self) -> bool {
        Dir::open_ambient_dir(&self.sysfs_root, ambient_authority())
            .is_ok_and(|dir| dir.is_dir(NET_CLASS_DIR))
    }
}

#[async_trait]
impl NetworkStatusBackend for SysfsNetworkBackend {
    async fn list_profiles(&self) -> NetworkBackendResult<Vec<ConnectionProfile>> {
        let sysfs_root = self.sysfs_root.clone();
        let procfs_root = self.procfs_root.clone();
        tokio::task::spawn_blocking(move || read_profiles(&sysfs_root, &procfs_root))
            .await
            .map_err(NetworkBackendError::runtime)?
            .map_err(NetworkBackendError::runtime)
    }
}

fn read_profiles(
    sysfs_root: &Utf8Path,
    procfs_root: &Utf8Path,
) -> io::Result<Vec<ConnectionProfile>> {
    let sysfs = Dir::open_ambient_dir(sysfs_root, ambient_authority())?;
    let routed = read_default_routes(procfs_root);

    let mut names = Vec::new();
    for entry_result in sysfs.read_dir(NET_CLASS_DIR)? {
        names.push(entry_result?.file_name()?);
    }
    names.sort();

    let mut profiles = Vec::new();
    for name in names {
        let base = Utf8Path::new(NET_CLASS_DIR).join(&name);
        let hardware_type = read_trimmed(&sysfs, &base.join("type"))
            .and_then(|raw| raw.parse::<u32>().ok());
        if hardware_type == Some(ARPHRD_LOOPBACK) {
            continue;
        }
        let adapter_kind = classify(&sysfs, &base, hardware_type);
        let connectivity = match (link_is_up(&sysfs, &base), routed.contains(&name)) {
            (false, _) => NetworkConnectivityLevel::None,
            (true, true) => NetworkConnectivityLevel::InternetAccess,
            (true, false) => NetworkConnectivityLevel::LocalAccess,
        };
        match ConnectionProfile::new(name.as_str(), adapter_kind, connectivity) {
            Ok(profile) => profiles.push(profile),
            Err(err) => debug!(interface = %name, error = %err, "skipping interface"),
        }
    }
    Ok(profiles)
}

fn classify(sysfs: &Dir, base: &Utf8Path, hardware_type: Option<u32>) -> NetworkAdapterKind {
    if sysfs.is_dir(base.join("wireless")) || sysfs.exists(base.join("phy80211")) {
        return NetworkAdapterKind::Wlan;
    }
    let devtype = read_trimmed(sysfs, &base.join("uevent")).and_then(|uevent| {
        uevent
            .lines()
            .find_map(|line| line.strip_prefix("DEVTYPE=").map(str::to_owned))
    });
    match (devtype.as_deref(), hardware_type) {
        (Some("wwan"), _) | (_, Some(ARPHRD_PPP | ARPHRD_RAWIP)) => NetworkAdapterKind::Wwan,
        (Some("wlan"), _) => NetworkAdapterKind::Wlan,
        (None, Some(ARPHRD_ETHER)) => NetworkAdapterKind::Ethernet,
        _ => NetworkAdapterKind::Other,
    }
}

fn link_is_up(sysfs: &Dir, base: &Utf8Path) -> bool {
    match read_trimmed(sysfs, &base.join("operstate")).as_deref() {
        Some("up") => true,
        Some("unknown") => read_trimmed(sysfs, &base.join("carrier")).as_deref() == Some("1"),
        _ => false,
    }
}

fn read_default_routes(procfs_root: &Utf8Path) -> HashSet<String> {
    let table = Dir::open_ambient_dir(procfs_root, ambient_authority())
        .and_then(|procfs| procfs.read_to_string(ROUTE_TABLE));
    match table {
        Ok(contents) => parse_default_routes(&contents),
        Err(err) => {
            debug!(error = %err, "route table unavailable; assuming no default route");
            HashSet::new()
        }
    }
}

fn parse_default_routes(table: &str) -> HashSet<String> {
    table
        .lines()
        .skip(1)
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let [interface, destination, _gateway, flags, _refcnt, _use, _metric, mask, ..] =
                fields.as_slice()
            else {
                return None;
            };
            let up = u32::from_str_radix(flags, 16).is_ok_and(|bits| bits & RTF_UP != 0);
            (up && *destination == DEFAULT_DESTINATION && *mask == DEFAULT_MASK)
                .then(|| (*interface).to_owned())
        })
        .collect()
}

fn read_trimmed(dir: &Dir, path: &Utf8Path) -> Option<String> {
    dir.read_to_string(path)
        .ok()
        .map(|raw| raw.trim().to_owned())
}
