// Mon Oct 19 2026 - Alex

pub mod cli;
pub mod display;
pub mod status;

pub use cli::Args;
pub use display::DisplayRenderer;
pub use status::{StatusReporter, StatusUpdate};
