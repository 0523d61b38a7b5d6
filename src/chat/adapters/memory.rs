//! In-memory chat adapters.

use crate::chat::{
    domain::ComposeSmsRequest,
    ports::{
        LaunchError, LaunchResult, SmsComposer, SmsComposerError, SmsComposerResult, UriLauncher,
    },
};
use crate::platform::ports::CapabilityBackend;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory SMS composer.
///
/// Records every request it accepts. It can be told to report itself
/// unavailable at selection time or at dispatch time, which is how fallback
/// between composers is exercised.
#[derive(Debug, Clone)]
pub struct InMemorySmsComposer {
    name: &'static str,
    requires_recipient: bool,
    available: Arc<AtomicBool>,
    unavailable_on_dispatch: Arc<AtomicBool>,
    composed: Arc<RwLock<Vec<ComposeSmsRequest>>>,
    settings_opened: Arc<AtomicUsize>,
}

impl Default for InMemorySmsComposer {
    fn default() -> Self {
        Self::named("in-memory-sms")
    }
}

impl InMemorySmsComposer {
    /// Creates an available composer that requires recipients.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a composer reporting `name` as its backend name.
    #[must_use]
    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            requires_recipient: true,
            available: Arc::new(AtomicBool::new(true)),
            unavailable_on_dispatch: Arc::new(AtomicBool::new(false)),
            composed: Arc::new(RwLock::new(Vec::new())),
            settings_opened: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Allows compose requests without recipients.
    #[must_use]
    pub const fn with_optional_recipients(mut self) -> Self {
        self.requires_recipient = false;
        self
    }

    /// Sets the result of availability checks.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Makes dispatch fail with [`SmsComposerError::Unavailable`].
    pub fn set_unavailable_on_dispatch(&self, unavailable: bool) {
        self.unavailable_on_dispatch
            .store(unavailable, Ordering::SeqCst);
    }

    /// Returns the accepted requests in dispatch order.
    ///
    /// # Errors
    ///
    /// Returns composer runtime errors when lock acquisition fails.
    pub fn composed(&self) -> SmsComposerResult<Vec<ComposeSmsRequest>> {
        self.composed
            .read()
            .map(|requests| requests.clone())
            .map_err(|err| SmsComposerError::runtime(std::io::Error::other(err.to_string())))
    }

    /// Returns how many times the settings action ran.
    #[must_use]
    pub fn settings_opened(&self) -> usize {
        self.settings_opened.load(Ordering::SeqCst)
    }

    fn check_dispatch(&self) -> SmsComposerResult<()> {
        if self.unavailable_on_dispatch.load(Ordering::SeqCst) {
            return Err(SmsComposerError::Unavailable(format!(
                "{} refused dispatch",
                self.name
            )));
        }
        Ok(())
    }
}

impl CapabilityBackend for InMemorySmsComposer {
    fn backend_name(&self) -> &'static str {
        self.name
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SmsComposer for InMemorySmsComposer {
    fn requires_recipient(&self) -> bool {
        self.requires_recipient
    }

    async fn compose(&self, request: &ComposeSmsRequest) -> SmsComposerResult<()> {
        self.check_dispatch()?;
        self.composed
            .write()
            .map_err(|err| SmsComposerError::runtime(std::io::Error::other(err.to_string())))?
            .push(request.clone());
        Ok(())
    }

    async fn open_settings(&self) -> SmsComposerResult<()> {
        self.check_dispatch()?;
        self.settings_opened.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// In-memory URI launcher that records launched URIs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUriLauncher {
    launched: Arc<RwLock<Vec<String>>>,
    missing: Arc<AtomicBool>,
}

impl InMemoryUriLauncher {
    /// Creates a launcher that accepts every URI.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Models a host without an opener program.
    pub fn set_missing(&self, missing: bool) {
        self.missing.store(missing, Ordering::SeqCst);
    }

    /// Returns launched URIs in order. A poisoned lock yields an empty list.
    #[must_use]
    pub fn launched(&self) -> Vec<String> {
        self.launched
            .read()
            .map(|uris| uris.clone())
            .unwrap_or_default()
    }
}

impl CapabilityBackend for InMemoryUriLauncher {
    fn backend_name(&self) -> &'static str {
        "in-memory-uri-launcher"
    }

    fn is_available(&self) -> bool {
        !self.missing.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UriLauncher for InMemoryUriLauncher {
    async fn launch(&self, uri: &str) -> LaunchResult<()> {
        if self.missing.load(Ordering::SeqCst) {
            return Err(LaunchError::NotFound("in-memory".to_owned()));
        }
        self.launched
            .write()
            .map_err(|err| LaunchError::runtime(std::io::Error::other(err.to_string())))?
            .push(uri.to_owned());
        Ok(())
    }
}
