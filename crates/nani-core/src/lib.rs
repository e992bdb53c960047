// crates/nani-core/src/lib.rs - Core library for the nani notes tool
//
// Everything in here is free of side effects on the page tree: the layout
// module only computes paths, the tool module only describes processes, and
// the config module only reads configuration files. Creating, removing and
// opening pages is the job of the CLI crate's services.

pub mod config;
pub mod layout;
pub mod tool;

pub use config::{ConfigError, ConfigManager, ConfigResult, NaniConfig};
pub use layout::{Category, Layout, LayoutError, PageRef};
pub use tool::{Invocation, ToolCommand, ToolExit};
