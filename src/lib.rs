pub mod driver;
pub mod error;
pub mod report;
pub mod runner;
pub mod utils;

// Re-export common items
pub use error::SmokeError;
pub use runner::run_dashboard_check;
pub use utils::config::SmokeConfig;
