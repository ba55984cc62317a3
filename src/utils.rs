//! Process-wide setup shared by the binary and the tests
//!
//! - `logging`: tracing subscriber writing to the data directory
//! - `panic`: terminal restore and crash reports
//! - `paths`: data and config directories, version string

pub mod logging;
pub mod panic;
pub mod paths;

pub use logging::initialize_logging;
pub use panic::initialize_panic_handler;
pub use paths::{get_config_dir, get_data_dir, version};
