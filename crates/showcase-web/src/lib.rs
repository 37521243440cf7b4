pub mod model;
pub mod server;
pub mod observer_impl;

pub use model::{DiagnosticEntry, DiagnosticLog, GenerationStatus};
pub use server::ShowcaseServer;
