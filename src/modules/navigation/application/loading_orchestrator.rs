use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

/// Minimum time the page loader stays visible after a navigation.
pub const DEFAULT_MIN_DISPLAY: Duration = Duration::from_millis(500);

#[derive(Default)]
struct OrchestratorState {
    is_loading: bool,
    current_path: Option<String>,
    pending: Option<JoinHandle<()>>,
    /// Bumped on every navigation; a timer only clears the flag for its own generation.
    generation: u64,
    torn_down: bool,
}

impl OrchestratorState {
    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

/// Page-loading flag driven by navigation events.
///
/// Each path change raises the flag and arms a timer that lowers it after
/// the minimum display duration. A newer navigation cancels the older timer,
/// so the last navigation wins.
pub struct LoadingOrchestrator {
    state: Arc<Mutex<OrchestratorState>>,
    min_display: Duration,
}

impl Default for LoadingOrchestrator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DISPLAY)
    }
}

impl LoadingOrchestrator {
    pub fn new(min_display: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(OrchestratorState::default())),
            min_display,
        }
    }

    fn lock(&self) -> MutexGuard<'_, OrchestratorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Must run inside a Tokio runtime. Returns `false` when the event was
    /// ignored: same path as the current one, or the orchestrator is torn down.
    pub fn path_changed(&self, path: &str) -> bool {
        let mut state = self.lock();
        if state.torn_down || state.current_path.as_deref() == Some(path) {
            return false;
        }

        state.cancel_pending();
        state.current_path = Some(path.to_string());
        state.is_loading = true;
        state.generation = state.generation.wrapping_add(1);

        let generation = state.generation;
        let shared = Arc::clone(&self.state);
        let min_display = self.min_display;

        state.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(min_display).await;

            let mut state = shared.lock().unwrap_or_else(PoisonError::into_inner);
            if state.generation == generation {
                state.is_loading = false;
                state.pending = None;
                debug!("Page loader timer elapsed");
            }
        }));

        debug!(path, "Navigation started page loader");
        true
    }

    /// Forces the loader on. A pending navigation timer still clears it.
    pub fn show_loading(&self) {
        self.lock().is_loading = true;
    }

    pub fn hide_loading(&self) {
        self.lock().is_loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.lock().is_loading
    }

    pub fn current_path(&self) -> Option<String> {
        self.lock().current_path.clone()
    }

    /// Cancels any pending timer and ignores further navigation events.
    pub fn teardown(&self) {
        let mut state = self.lock();
        state.cancel_pending();
        state.torn_down = true;
    }
}

impl Drop for LoadingOrchestrator {
    fn drop(&mut self) {
        self.lock().cancel_pending();
    }
}
