// crates/nani-cli/src/commands/mod.rs - Command Handler Modules
//
// MODULE ORGANIZATION:
// - page: man/notes generate, delete, edit, view
// - list: category listings
// - deploy: site build and publish
// - link: content -> notes symlink
// - init: page tree skeleton
// - completions: shell completion scripts

#[cfg(feature = "completions")]
pub mod completions;
pub mod deploy;
pub mod init;
pub mod link;
pub mod list;
pub mod page;
