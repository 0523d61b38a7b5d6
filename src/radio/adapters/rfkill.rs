//! Linux rfkill radio backend.
//!
//! Reads and switches radios through the rfkill class in sysfs. Each
//! `class/rfkill/rfkillN` directory is one radio: `type` and `name` describe
//! it, `hard` reports a hardware kill switch and `soft` is the writable
//! software block. Kernels without `hard`/`soft` expose a combined `state`
//! attribute instead.

use crate::config::ShimConfig;
use crate::platform::ports::CapabilityBackend;
use crate::radio::{
    domain::{RadioAccessStatus, RadioId, RadioKind, RadioRecord, RadioState},
    ports::{RadioBackend, RadioBackendError, RadioBackendResult},
};
use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::OpenOptions;
use cap_std::fs_utf8::Dir;
use nix::unistd::{AccessFlags, access, geteuid};
use std::io::{self, Write};
use tracing::debug;

const RFKILL_CLASS_DIR: &str = "class/rfkill";

/// Radio backend over the Linux rfkill sysfs interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RfkillRadioBackend {
    sysfs_root: Utf8PathBuf,
}

impl RfkillRadioBackend {
    /// Creates a backend rooted at a sysfs mount point.
    #[must_use]
    pub fn new(sysfs_root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            sysfs_root: sysfs_root.into(),
        }
    }

    /// Creates a backend from host configuration.
    #[must_use]
    pub fn from_config(config: &ShimConfig) -> Self {
        Self::new(config.sysfs_root.clone())
    }

    /// Returns the sysfs mount point.
    #[must_use]
    pub fn sysfs_root(&self) -> &Utf8Path {
        &self.sysfs_root
    }

    async fn run_blocking<T, F>(&self, operation: F) -> RadioBackendResult<io::Result<T>>
    where
        F: FnOnce(&Dir) -> io::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let root = self.sysfs_root.clone();
        tokio::task::spawn_blocking(move || {
            let dir = Dir::open_ambient_dir(&root, ambient_authority())?;
            operation(&dir)
        })
        .await
        .map_err(RadioBackendError::runtime)
    }
}

impl CapabilityBackend for RfkillRadioBackend {
    fn backend_name(&self) -> &'static str {
        "rfkill"
    }

    fn is_available(&self) -> bool {
        Dir::open_ambient_dir(&self.sysfs_root, ambient_authority())
            .is_ok_and(|dir| dir.is_dir(RFKILL_CLASS_DIR))
    }
}

#[async_trait]
impl RadioBackend for RfkillRadioBackend {
    async fn list_radios(&self) -> RadioBackendResult<Vec<RadioRecord>> {
        self.run_blocking(read_records)
            .await?
            .map_err(RadioBackendError::runtime)
    }

    async fn radio_state(&self, radio_id: &RadioId) -> RadioBackendResult<RadioState> {
        let base = radio_dir(radio_id)?;
        self.run_blocking(move |dir| {
            if !dir.is_dir(&base) {
                return Err(io::Error::from(io::ErrorKind::NotFound));
            }
            read_state(dir, &base)
        })
        .await?
        .map_err(|err| map_io_error(radio_id, err))
    }

    async fn set_radio_state(
        &self,
        radio_id: &RadioId,
        state: RadioState,
    ) -> RadioBackendResult<RadioAccessStatus> {
        let soft_value = match state {
            RadioState::On => "0",
            RadioState::Off => "1",
            RadioState::Unknown | RadioState::Disabled => {
                return Err(RadioBackendError::runtime(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("rfkill cannot apply radio state '{state}'"),
                )));
            }
        };

        let base = radio_dir(radio_id)?;
        let hard_blocked = self
            .run_blocking(move |dir| {
                if read_flag(dir, &base.join("hard"))? == Some(true) {
                    return Ok(true);
                }
                let mut file = dir.open_with(base.join("soft"), OpenOptions::new().write(true))?;
                file.write_all(soft_value.as_bytes())?;
                Ok(false)
            })
            .await?
            .map_err(|err| map_io_error(radio_id, err))?;

        if hard_blocked {
            return Err(RadioBackendError::AccessDenied(radio_id.clone()));
        }
        debug!(radio = %radio_id, %state, "rfkill soft block updated");
        Ok(RadioAccessStatus::Allowed)
    }

    async fn request_access(&self) -> RadioAccessStatus {
        if geteuid().is_root() {
            return RadioAccessStatus::Allowed;
        }

        let records = match self.run_blocking(read_records).await {
            Ok(Ok(records)) => records,
            Ok(Err(err)) => {
                debug!(error = %err, "rfkill enumeration failed during access check");
                return RadioAccessStatus::Unspecified;
            }
            Err(err) => {
                debug!(error = %err, "rfkill access check did not complete");
                return RadioAccessStatus::Unspecified;
            }
        };

        let class_dir = self.sysfs_root.join(RFKILL_CLASS_DIR);
        let writable = records.iter().all(|record| {
            let soft = class_dir.join(&record.id).join("soft");
            access(soft.as_std_path(), AccessFlags::W_OK).is_ok()
        });
        if writable {
            RadioAccessStatus::Allowed
        } else {
            RadioAccessStatus::DeniedBySystem
        }
    }

    fn device_selector(&self) -> String {
        "rfkill:type=bluetooth".to_owned()
    }
}

fn radio_dir(radio_id: &RadioId) -> RadioBackendResult<Utf8PathBuf> {
    let id = radio_id.as_str();
    if id.contains('/') || id == "." || id == ".." {
        return Err(RadioBackendError::NotFound(radio_id.clone()));
    }
    Ok(Utf8Path::new(RFKILL_CLASS_DIR).join(id))
}

fn read_records(dir: &Dir) -> io::Result<Vec<RadioRecord>> {
    let mut records = Vec::new();
    for entry_result in dir.read_dir(RFKILL_CLASS_DIR)? {
        let id = entry_result?.file_name()?;
        let base = Utf8Path::new(RFKILL_CLASS_DIR).join(&id);
        let kind = match dir.read_to_string(base.join("type")) {
            Ok(raw_type) => kind_from_rfkill_type(&raw_type),
            Err(err) => {
                debug!(radio = %id, error = %err, "skipping rfkill entry without a type");
                continue;
            }
        };
        let name = dir
            .read_to_string(base.join("name"))
            .map(|raw_name| raw_name.trim().to_owned())
            .unwrap_or_default();
        records.push(RadioRecord::new(id, name, kind));
    }
    records.sort_by(|left, right| left.id.cmp(&right.id));
    Ok(records)
}

fn read_state(dir: &Dir, base: &Utf8Path) -> io::Result<RadioState> {
    if !dir.exists(base.join("soft")) {
        return read_legacy_state(dir, base);
    }
    let hard = read_flag(dir, &base.join("hard"))?;
    let soft = read_flag(dir, &base.join("soft"))?;
    Ok(match (hard, soft) {
        (Some(true), _) => RadioState::Disabled,
        (Some(false), Some(true)) => RadioState::Off,
        (Some(false), Some(false)) => RadioState::On,
        _ => RadioState::Unknown,
    })
}

fn read_legacy_state(dir: &Dir, base: &Utf8Path) -> io::Result<RadioState> {
    let raw = dir.read_to_string(base.join("state"))?;
    Ok(match raw.trim() {
        "0" => RadioState::Off,
        "1" => RadioState::On,
        "2" => RadioState::Disabled,
        _ => RadioState::Unknown,
    })
}

fn read_flag(dir: &Dir, path: &Utf8Path) -> io::Result<Option<bool>> {
    let raw = dir.read_to_string(path)?;
    Ok(match raw.trim() {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    })
}

fn kind_from_rfkill_type(raw_type: &str) -> RadioKind {
    match raw_type.trim() {
        "bluetooth" => RadioKind::Bluetooth,
        "wlan" => RadioKind::WiFi,
        "wwan" => RadioKind::MobileBroadband,
        "fm" => RadioKind::Fm,
        _ => RadioKind::Other,
    }
}

fn map_io_error(radio_id: &RadioId, err: io::Error) -> RadioBackendError {
    match err.kind() {
        io::ErrorKind::NotFound => RadioBackendError::NotFound(radio_id.clone()),
        io::ErrorKind::PermissionDenied => RadioBackendError::AccessDenied(radio_id.clone()),
        _ => RadioBackendError::runtime(err),
    }
}
