//! Command handler modules for the Koi-Koi CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum
//!
//! # Example
//!
//! ```rust
//! use koikoi_cli::commands::handle_yaku_command;
//!
//! let mut out = Vec::new();
//! let cards = vec!["03-light-curtain".to_string(), "09-animal-sake-cup".to_string()];
//! handle_yaku_command(&cards, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("Base points: 5"));
//! ```

pub mod cfg;
pub mod deal;
pub mod play;
pub mod rng;
pub mod sim;
pub mod yaku;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use rng::handle_rng_command;
pub use sim::handle_sim_command;
pub use yaku::handle_yaku_command;
