//! Composer that opens an `sms:` URI.

use super::launcher::SystemUriLauncher;
use crate::chat::{
    domain::ComposeSmsRequest,
    ports::{LaunchError, SmsComposer, SmsComposerError, SmsComposerResult, UriLauncher},
};
use crate::config::LauncherConfig;
use crate::platform::ports::CapabilityBackend;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

const UNRESERVED_MARKS: &[u8] = b"-._~";
const RECIPIENT_MARKS: &[u8] = b";+,";

/// Backend name of the composer over the default opener.
pub const PRIMARY_NAME: &str = "uri-sms";
/// Backend name of the composer over the alternate opener.
pub const FALLBACK_NAME: &str = "uri-sms-fallback";

/// Composer that builds `sms:<recipients>?body=<body>` and hands it to a
/// [`UriLauncher`].
///
/// Recipients are required by default, since most registered `sms:` handlers
/// refuse an empty address list.
pub struct UriSmsComposer {
    name: &'static str,
    launcher: Arc<dyn UriLauncher>,
    settings_uri: Option<String>,
    requires_recipient: bool,
}

impl UriSmsComposer {
    /// Creates a composer over a launcher.
    #[must_use]
    pub const fn new(launcher: Arc<dyn UriLauncher>) -> Self {
        Self {
            name: PRIMARY_NAME,
            launcher,
            settings_uri: None,
            requires_recipient: true,
        }
    }

    /// Creates a composer over the host's URI opener.
    #[must_use]
    pub fn from_config(config: &LauncherConfig) -> Self {
        Self::new(Arc::new(SystemUriLauncher::from_config(config))).configured(config)
    }

    /// Creates the composer over the host's alternate URI opener.
    #[must_use]
    pub fn fallback_from_config(config: &LauncherConfig) -> Self {
        Self::new(Arc::new(SystemUriLauncher::fallback_from_config(config)))
            .with_name(FALLBACK_NAME)
            .configured(config)
    }

    /// Sets the name reported by [`CapabilityBackend::backend_name`].
    #[must_use]
    pub const fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    fn configured(self, config: &LauncherConfig) -> Self {
        match config.sms_settings_uri.as_deref() {
            Some(uri) => self.with_settings_uri(uri),
            None => self,
        }
    }

    /// Sets the URI opened by [`SmsComposer::open_settings`].
    #[must_use]
    pub fn with_settings_uri(mut self, uri: impl Into<String>) -> Self {
        self.settings_uri = Some(uri.into());
        self
    }

    /// Allows compose requests without recipients.
    #[must_use]
    pub const fn with_optional_recipients(mut self) -> Self {
        self.requires_recipient = false;
        self
    }

    /// Builds the URI opened for a compose request.
    #[must_use]
    pub fn compose_uri(request: &ComposeSmsRequest) -> String {
        format!(
            "sms:{}?body={}",
            percent_encode(request.recipients(), RECIPIENT_MARKS),
            percent_encode(request.body(), &[])
        )
    }

    async fn open(&self, uri: &str) -> SmsComposerResult<()> {
        self.launcher.launch(uri).await.map_err(|err| match err {
            LaunchError::NotFound(_) => SmsComposerError::Unavailable(err.to_string()),
            LaunchError::Failed { .. } => SmsComposerError::Rejected(err.to_string()),
            LaunchError::Runtime(_) => SmsComposerError::runtime(err),
        })
    }
}

impl fmt::Debug for UriSmsComposer {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("UriSmsComposer")
            .field("name", &self.name)
            .field("launcher", &self.launcher.backend_name())
            .field("settings_uri", &self.settings_uri)
            .field("requires_recipient", &self.requires_recipient)
            .finish()
    }
}

impl CapabilityBackend for UriSmsComposer {
    fn backend_name(&self) -> &'static str {
        self.name
    }

    fn is_available(&self) -> bool {
        self.launcher.is_available()
    }
}

#[async_trait]
impl SmsComposer for UriSmsComposer {
    fn requires_recipient(&self) -> bool {
        self.requires_recipient
    }

    async fn compose(&self, request: &ComposeSmsRequest) -> SmsComposerResult<()> {
        self.open(&Self::compose_uri(request)).await
    }

    async fn open_settings(&self) -> SmsComposerResult<()> {
        let Some(uri) = self.settings_uri.as_deref() else {
            return Err(SmsComposerError::Unavailable(
                "no messaging settings URI configured".to_owned(),
            ));
        };
        self.open(uri).await
    }
}

fn percent_encode(input: &str, keep: &[u8]) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        if byte.is_ascii_alphanumeric() || UNRESERVED_MARKS.contains(&byte) || keep.contains(&byte)
        {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}
