//! Configuration and path resolution for focusflow.

pub mod paths;
pub mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config};
