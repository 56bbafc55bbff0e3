//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the text generator built at startup. A gateway started without
//! a provider credential carries `None` and answers generation requests
//! with a 500 instead of refusing to boot.

use std::sync::Arc;

use crate::llm::TextGenerator;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the generator is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub generator: Option<Arc<dyn TextGenerator>>,
}

impl AppState {
    #[must_use]
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { generator }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::collections::VecDeque;
    use std::ffi::OsString;
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

    use super::AppState;
    use crate::llm::{LlmError, TextGenerator};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Serialize tests that read or write process environment variables.
    pub fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Holds [`env_lock`] and puts the saved variables back on drop.
    pub struct EnvGuard {
        saved: Vec<(&'static str, Option<OsString>)>,
        _lock: MutexGuard<'static, ()>,
    }

    impl EnvGuard {
        /// Snapshot and unset `vars` for the lifetime of the guard.
        pub fn clear(vars: &[&'static str]) -> Self {
            let lock = env_lock();
            let saved = vars.iter().map(|&var| (var, std::env::var_os(var))).collect();
            for var in vars {
                // SAFETY: the env lock is held.
                unsafe { std::env::remove_var(var) };
            }
            Self { saved, _lock: lock }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            // Fields drop after this body, so the lock is still held here.
            for (var, value) in &self.saved {
                // SAFETY: the env lock is held.
                unsafe {
                    match value {
                        Some(value) => std::env::set_var(var, value),
                        None => std::env::remove_var(var),
                    }
                }
            }
        }
    }

    /// Scripted [`TextGenerator`] that records every prompt it receives.
    pub struct FakeGenerator {
        replies: Mutex<VecDeque<Result<String, LlmError>>>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl FakeGenerator {
        /// A generator that answers each call with the next scripted reply,
        /// then with `"done"` once the script runs out.
        #[must_use]
        pub fn new(replies: Vec<Result<String, LlmError>>) -> Self {
            Self { replies: Mutex::new(replies.into()), prompts: Mutex::new(Vec::new()) }
        }

        #[must_use]
        pub fn replying(text: &str) -> Self {
            Self::new(vec![Ok(text.to_owned())])
        }

        #[must_use]
        pub fn failing(status: u16) -> Self {
            Self::new(vec![Err(LlmError::ApiResponse { status, body: "upstream exploded".into() })])
        }

        pub fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait::async_trait]
    impl TextGenerator for FakeGenerator {
        async fn generate_text(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_owned());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok("done".into()))
        }
    }

    /// App state backed by `generator`.
    pub fn app_state_with(generator: Arc<FakeGenerator>) -> AppState {
        AppState::new(Some(generator as Arc<dyn TextGenerator>))
    }

    /// App state for a gateway started without a credential.
    pub fn unconfigured_app_state() -> AppState {
        AppState::new(None)
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
