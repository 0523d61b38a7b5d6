//! Shared world state for SMS compose BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use winrt_shim::chat::{
    adapters::memory::InMemorySmsComposer,
    domain::ChatMessage,
    ports::SmsComposer,
    services::{ChatMessageManager, ChatServiceError},
};
use winrt_shim::platform::{domain::Capability, services::BackendRegistry};

/// Scenario world for SMS compose behaviour tests.
pub struct ChatWorld {
    /// Composer registered first.
    pub primary: InMemorySmsComposer,
    /// Composer registered second.
    pub fallback: InMemorySmsComposer,
    /// Composers installed by the scenario, in preference order.
    pub installed: Vec<Arc<dyn SmsComposer>>,
    /// Message to compose.
    pub message: Option<ChatMessage>,
    /// Result of the last compose call.
    pub result: Option<Result<(), ChatServiceError>>,
}

impl ChatWorld {
    /// Creates a world with no composers installed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            primary: InMemorySmsComposer::named("primary"),
            fallback: InMemorySmsComposer::named("fallback"),
            installed: Vec::new(),
            message: None,
            result: None,
        }
    }

    /// Returns the composer addressed by a scenario name.
    ///
    /// # Errors
    ///
    /// Returns an error for names other than `primary` and `fallback`.
    pub fn composer(&self, which: &str) -> Result<&InMemorySmsComposer, eyre::Report> {
        match which {
            "primary" => Ok(&self.primary),
            "fallback" => Ok(&self.fallback),
            other => Err(eyre::eyre!("unknown composer '{other}'")),
        }
    }

    /// Resolves the installed composers into a manager.
    #[must_use]
    pub fn manager(&self) -> ChatMessageManager {
        let registry = self.installed.iter().fold(
            BackendRegistry::<dyn SmsComposer>::new(Capability::ChatMessaging),
            |registry, composer| registry.with_candidate(Arc::clone(composer)),
        );
        ChatMessageManager::from_registry(&registry)
    }
}

impl Default for ChatWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture providing a fresh chat world.
#[fixture]
pub fn world() -> ChatWorld {
    ChatWorld::default()
}

/// Runs an async operation from a synchronous step.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
