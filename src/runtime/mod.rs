pub mod fetcher;
pub mod law_api;
pub mod logging;
pub mod orchestrator;
