pub mod errors;
pub mod logging;
pub mod output;
pub mod resolver;
pub mod root;
pub mod scan;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use output::OutputConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use scan::ScanConfig;
