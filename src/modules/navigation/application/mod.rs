mod loading_orchestrator;

pub use loading_orchestrator::{LoadingOrchestrator, DEFAULT_MIN_DISPLAY};
