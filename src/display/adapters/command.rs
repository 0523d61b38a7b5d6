//! Keep-awake through a long-running inhibitor process.

use crate::config::KeepAwakeConfig;
use crate::display::ports::{KeepAwakeBackend, KeepAwakeError, KeepAwakeResult};
use crate::platform::{domain::PlatformTarget, ports::CapabilityBackend};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::{Mutex, MutexGuard};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// How long a freshly spawned inhibitor must stay alive to count as held.
const STARTUP_GRACE: Duration = Duration::from_millis(200);
const STARTUP_POLL: Duration = Duration::from_millis(10);

/// Holds the display awake for as long as an inhibitor child process runs.
///
/// Linux uses `systemd-inhibit` wrapped around `sleep infinity`; macOS uses
/// `caffeinate -d -i`. Disabling kills the child. The child is also killed
/// when the backend is dropped.
///
/// An inhibitor that exits within a short startup grace period fails
/// `enable`. One that exits later is noticed by [`Self::is_holding`] and
/// replaced by the next `enable`.
#[derive(Debug)]
pub struct CommandKeepAwake {
    command: Option<Vec<String>>,
    child: Mutex<Option<Child>>,
}

impl CommandKeepAwake {
    /// Creates a backend running `command` as the inhibitor.
    #[must_use]
    pub const fn new(command: Vec<String>) -> Self {
        Self {
            command: Some(command),
            child: Mutex::new(None),
        }
    }

    /// Creates a backend with the default inhibitor for `target`.
    #[must_use]
    pub fn for_target(target: PlatformTarget) -> Self {
        Self {
            command: default_command(target),
            child: Mutex::new(None),
        }
    }

    /// Creates a backend from configuration, falling back to the default
    /// inhibitor for the current target.
    #[must_use]
    pub fn from_config(config: &KeepAwakeConfig) -> Self {
        config.command.clone().map_or_else(
            || Self::for_target(PlatformTarget::current()),
            Self::new,
        )
    }

    /// Returns the inhibitor program, if any.
    #[must_use]
    pub fn program(&self) -> Option<&str> {
        self.command
            .as_deref()
            .and_then(<[String]>::first)
            .map(String::as_str)
    }

    /// Reports whether an inhibitor process is currently running.
    ///
    /// A held process that has exited is reaped and no longer counts.
    #[must_use]
    pub fn is_holding(&self) -> bool {
        self.lock_child().is_ok_and(|mut held| {
            if let Some(status) = reap_exited(&mut held) {
                warn!(%status, "inhibitor process exited while held");
            }
            held.is_some()
        })
    }

    fn lock_child(&self) -> KeepAwakeResult<MutexGuard<'_, Option<Child>>> {
        self.child
            .lock()
            .map_err(|err| KeepAwakeError::runtime(std::io::Error::other(err.to_string())))
    }
}

impl CapabilityBackend for CommandKeepAwake {
    fn backend_name(&self) -> &'static str {
        "inhibitor-process"
    }

    fn is_available(&self) -> bool {
        self.program()
            .is_some_and(|program| which::which(program).is_ok())
    }
}

impl KeepAwakeBackend for CommandKeepAwake {
    fn enable(&self) -> KeepAwakeResult<()> {
        let Some((program, args)) =
            self.command.as_deref().and_then(<[String]>::split_first)
        else {
            return Err(KeepAwakeError::Failed(
                "no inhibitor command for this target".to_owned(),
            ));
        };

        let mut held = self.lock_child()?;
        if let Some(status) = reap_exited(&mut held) {
            warn!(%status, "restarting inhibitor process that exited while held");
        }
        if held.is_some() {
            return Ok(());
        }

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(KeepAwakeError::runtime)?;
        if let Some(status) = wait_for_startup(&mut child).map_err(KeepAwakeError::runtime)? {
            return Err(KeepAwakeError::Failed(format!(
                "{program} exited during startup with {status}"
            )));
        }
        debug!(program = %program, pid = child.id(), "inhibitor process started");
        *held = Some(child);
        Ok(())
    }

    fn disable(&self) -> KeepAwakeResult<()> {
        let Some(mut child) = self.lock_child()?.take() else {
            return Ok(());
        };
        stop_child(&mut child).map_err(KeepAwakeError::runtime)?;
        debug!(pid = child.id(), "inhibitor process stopped");
        Ok(())
    }
}

impl Drop for CommandKeepAwake {
    fn drop(&mut self) {
        let held = match self.child.get_mut() {
            Ok(held) => held.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        let Some(mut child) = held else {
            return;
        };
        if let Err(err) = stop_child(&mut child) {
            warn!(error = %err, "failed to stop inhibitor process on drop");
        }
    }
}

/// Polls a new child for [`STARTUP_GRACE`], returning its status if it
/// exits in that window. An exited child is reaped by the poll.
fn wait_for_startup(child: &mut Child) -> std::io::Result<Option<ExitStatus>> {
    let deadline = Instant::now() + STARTUP_GRACE;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(STARTUP_POLL);
    }
}

/// Clears `held` when its process has exited, returning the exit status.
fn reap_exited(held: &mut Option<Child>) -> Option<ExitStatus> {
    let status = match held.as_mut().map(Child::try_wait) {
        Some(Ok(Some(status))) => status,
        Some(Ok(None) | Err(_)) | None => return None,
    };
    *held = None;
    Some(status)
}

fn stop_child(child: &mut Child) -> std::io::Result<()> {
    if child.try_wait()?.is_none() {
        child.kill()?;
    }
    child.wait()?;
    Ok(())
}

fn default_command(target: PlatformTarget) -> Option<Vec<String>> {
    let parts: &[&str] = match target {
        PlatformTarget::Linux => &[
            "systemd-inhibit",
            "--what=idle",
            "--who=winrt-shim",
            "--why=display request active",
            "sleep",
            "infinity",
        ],
        PlatformTarget::MacOs => &["caffeinate", "-d", "-i"],
        PlatformTarget::Windows
        | PlatformTarget::Android
        | PlatformTarget::Ios
        | PlatformTarget::Other => return None,
    };
    Some(parts.iter().map(|part| (*part).to_owned()).collect())
}
