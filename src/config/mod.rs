mod settings;

pub use settings::{LogFormat, LoggingConfig, OutputFormat, Settings};
