//! Line-based console front end: rendering, move sources and the turn loop.

mod orchestrator;
pub mod players;
pub mod render;

pub use orchestrator::Orchestrator;
