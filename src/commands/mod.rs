//! CLI command implementations.
//!
//! - **classify**: run the classifier alone on four ratings
//! - **export**: validate a submission file and write the export record
//! - **init**: write a default `.emopalette.toml`

pub mod classify;
pub mod export;
pub mod init;

pub use classify::handle_classify;
pub use export::{handle_export, ExportArgs};
pub use init::init_config;
