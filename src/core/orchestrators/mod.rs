mod search_orchestrator;

pub use search_orchestrator::{ClickOutcome, SearchOrchestrator, SearchTrigger};
