//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use winrt_shim::{
    SystemServices,
    chat::{
        adapters::memory::InMemorySmsComposer, ports::SmsComposer, services::ChatMessageManager,
    },
    display::{
        adapters::memory::InMemoryKeepAwake, ports::KeepAwakeBackend,
        services::DisplayRequestCoordinator,
    },
    network::{
        adapters::memory::InMemoryNetworkBackend, ports::NetworkStatusBackend,
        services::NetworkInformation,
    },
    radio::{
        adapters::memory::InMemoryRadioBackend,
        domain::{RadioKind, RadioRecord, RadioState},
        ports::RadioBackend,
        services::RadioCatalog,
    },
    vibration::{
        adapters::memory::InMemoryVibrationBackend, ports::VibrationBackend,
        services::VibrationDevice,
    },
};

/// In-memory backends kept alongside the services that use them.
pub struct Host {
    /// Services wired to the backends below.
    pub services: SystemServices,
    /// Radio backend shared with the catalogue.
    pub radios: InMemoryRadioBackend,
    /// Composer shared with the chat manager.
    pub composer: InMemorySmsComposer,
    /// Keep-awake backend shared with the display coordinator.
    pub keep_awake: InMemoryKeepAwake,
    /// Motor shared with the vibration device.
    pub motor: InMemoryVibrationBackend,
    /// Network backend shared with the network view.
    pub network: InMemoryNetworkBackend,
}

/// Provides a host where every capability has an in-memory backend.
#[fixture]
pub fn host() -> Host {
    let radios = InMemoryRadioBackend::new();
    let composer = InMemorySmsComposer::named("memory-sms");
    let keep_awake = InMemoryKeepAwake::new();
    let motor = InMemoryVibrationBackend::new();
    let network = InMemoryNetworkBackend::new();

    let radio_backend: Arc<dyn RadioBackend> = Arc::new(radios.clone());
    let composer_backend: Arc<dyn SmsComposer> = Arc::new(composer.clone());
    let keep_awake_backend: Arc<dyn KeepAwakeBackend> = Arc::new(keep_awake.clone());
    let motor_backend: Arc<dyn VibrationBackend> = Arc::new(motor.clone());
    let network_backend: Arc<dyn NetworkStatusBackend> = Arc::new(network.clone());

    let services = SystemServices::new(
        RadioCatalog::new(Some(radio_backend)),
        ChatMessageManager::new(vec![composer_backend]),
        Arc::new(DisplayRequestCoordinator::new(
            Some(keep_awake_backend),
            Arc::new(DefaultClock),
        )),
        VibrationDevice::new(Some(motor_backend)),
        NetworkInformation::new(Some(network_backend)),
    );
    Host {
        services,
        radios,
        composer,
        keep_awake,
        motor,
        network,
    }
}

/// Provides a host where no capability has a backend.
#[fixture]
pub fn bare_host() -> SystemServices {
    SystemServices::new(
        RadioCatalog::new(None),
        ChatMessageManager::new(Vec::new()),
        Arc::new(DisplayRequestCoordinator::new(None, Arc::new(DefaultClock))),
        VibrationDevice::new(None),
        NetworkInformation::new(None),
    )
}

/// Builds a radio record.
#[must_use]
pub fn radio(id: &str, kind: RadioKind) -> RadioRecord {
    RadioRecord::new(id, format!("{id} adapter"), kind)
}

/// Inserts the radio mix used by most radio tests: two Bluetooth adapters,
/// one Wi-Fi adapter and one hardware-disabled Bluetooth adapter.
///
/// # Panics
///
/// Panics if the in-memory backend lock is poisoned.
pub fn seed_radios(backend: &InMemoryRadioBackend) {
    for (record, state) in [
        (radio("hci0", RadioKind::Bluetooth), RadioState::On),
        (radio("hci1", RadioKind::Bluetooth), RadioState::Off),
        (radio("phy0", RadioKind::WiFi), RadioState::On),
        (radio("hci2", RadioKind::Bluetooth), RadioState::Disabled),
    ] {
        backend
            .insert_radio(record, state)
            .expect("seed radio should insert");
    }
}
