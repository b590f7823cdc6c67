pub mod apply;
pub mod backup;
pub mod config;
mod error;
pub mod jsonc;
pub mod report;
pub mod script;
pub mod style;
pub mod targets;

// Re-export public items
pub use apply::{apply, preview};
pub use error::PatchError;
pub use report::{Outcome, Report, TargetReport};
pub use targets::Targets;
