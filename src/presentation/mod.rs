//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting for list-style commands (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Table and JSON rendering for `ls`, `hosts list` and `cert list`
//!
//! ## Usage
//!
//! ```ignore
//! use bootapp::config::Config;
//! use bootapp::presentation::factory;
//!
//! let (config, _warnings) = Config::load_or_default()?;
//! let setup = factory::create_setup_use_case(&config)?;
//! ```

pub mod factory;
pub mod output;

pub use factory::{create_setup_use_case, create_teardown_use_case, event_sink};
