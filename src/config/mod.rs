//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::SplitterPaths;
pub use settings::Settings;
