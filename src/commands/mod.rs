//! CLI command implementations.
//!
//! Commands orchestrate the library components: load inputs from the
//! configured paths, transform them, then print or render the results.

pub mod gas;
pub mod plot;
pub mod utils;

// Re-export main command functions
pub use gas::{execute_gas, gas_report_lines};
pub use plot::{execute_price, execute_swap};
pub use utils::{display_config, display_version, execute_all};
