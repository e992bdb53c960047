// crates/nani-cli/src/services/mod.rs - Service layer modules
pub mod editor;
pub mod pages;
pub mod runner;
pub mod store;

pub use editor::EditorService;
pub use pages::{LinkState, PageService, Removal, Toolset};
pub use runner::{SystemRunner, ToolRunner};
pub use store::PageStore;
