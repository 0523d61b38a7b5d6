//! Process-based URI launcher.

use crate::chat::ports::{LaunchError, LaunchResult, UriLauncher};
use crate::config::LauncherConfig;
use crate::platform::{domain::PlatformTarget, ports::CapabilityBackend};
use async_trait::async_trait;
use std::process::{Command, Stdio};
use tracing::debug;

/// Opens URIs by running the host's opener program.
///
/// The URI is appended as the final argument to the configured command. The
/// default command depends on the build target: `xdg-open` on Linux, `open`
/// on macOS and `cmd /C start ""` on Windows. Other targets have none and
/// the launcher reports itself unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemUriLauncher {
    command: Option<Vec<String>>,
}

impl SystemUriLauncher {
    /// Creates a launcher running `command` with the URI appended.
    #[must_use]
    pub const fn new(command: Vec<String>) -> Self {
        Self {
            command: Some(command),
        }
    }

    /// Creates a launcher with the default opener for `target`.
    #[must_use]
    pub fn for_target(target: PlatformTarget) -> Self {
        Self {
            command: default_command(target),
        }
    }

    /// Creates a launcher from configuration, falling back to the default
    /// opener for the current target.
    #[must_use]
    pub fn from_config(config: &LauncherConfig) -> Self {
        config.command.clone().map_or_else(
            || Self::for_target(PlatformTarget::current()),
            Self::new,
        )
    }

    /// Creates a launcher with the alternate opener for `target`.
    #[must_use]
    pub fn fallback_for_target(target: PlatformTarget) -> Self {
        Self {
            command: fallback_command(target),
        }
    }

    /// Creates the alternate launcher from configuration, falling back to
    /// the alternate opener for the current target.
    #[must_use]
    pub fn fallback_from_config(config: &LauncherConfig) -> Self {
        config.fallback_command.clone().map_or_else(
            || Self::fallback_for_target(PlatformTarget::current()),
            Self::new,
        )
    }

    /// Returns the opener program, if any.
    #[must_use]
    pub fn program(&self) -> Option<&str> {
        self.command
            .as_deref()
            .and_then(<[String]>::first)
            .map(String::as_str)
    }
}

impl CapabilityBackend for SystemUriLauncher {
    fn backend_name(&self) -> &'static str {
        "system-uri-launcher"
    }

    fn is_available(&self) -> bool {
        self.program()
            .is_some_and(|program| which::which(program).is_ok())
    }
}

#[async_trait]
impl UriLauncher for SystemUriLauncher {
    async fn launch(&self, uri: &str) -> LaunchResult<()> {
        let Some((program, leading_args)) =
            self.command.as_deref().and_then(<[String]>::split_first)
        else {
            return Err(LaunchError::NotFound(String::new()));
        };

        let spawned_program = program.clone();
        let mut args = leading_args.to_vec();
        args.push(uri.to_owned());
        debug!(program = %program, "launching URI opener");

        let status = tokio::task::spawn_blocking(move || {
            Command::new(&spawned_program)
                .args(&args)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
        })
        .await
        .map_err(LaunchError::runtime)?;

        match status {
            Ok(exit) if exit.success() => Ok(()),
            Ok(exit) => Err(LaunchError::Failed {
                program: program.clone(),
                reason: exit.to_string(),
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(LaunchError::NotFound(program.clone()))
            }
            Err(err) => Err(LaunchError::runtime(err)),
        }
    }
}

fn default_command(target: PlatformTarget) -> Option<Vec<String>> {
    let parts: &[&str] = match target {
        PlatformTarget::Linux => &["xdg-open"],
        PlatformTarget::MacOs => &["open"],
        PlatformTarget::Windows => &["cmd", "/C", "start", ""],
        PlatformTarget::Android | PlatformTarget::Ios | PlatformTarget::Other => return None,
    };
    Some(parts.iter().map(|part| (*part).to_owned()).collect())
}

fn fallback_command(target: PlatformTarget) -> Option<Vec<String>> {
    let parts: &[&str] = match target {
        PlatformTarget::Linux => &["gio", "open"],
        PlatformTarget::Windows => &["explorer.exe"],
        PlatformTarget::MacOs
        | PlatformTarget::Android
        | PlatformTarget::Ios
        | PlatformTarget::Other => return None,
    };
    Some(parts.iter().map(|part| (*part).to_owned()).collect())
}
