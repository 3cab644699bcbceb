//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::PursePaths;
pub use settings::Settings;
