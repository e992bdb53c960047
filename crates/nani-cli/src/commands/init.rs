// crates/nani-cli/src/commands/init.rs - Page Tree Initialization Command
//
// Creates the directories every other command expects, plus a commented
// config file. Safe to run repeatedly: nothing that exists is touched.

use anyhow::Result;
use console::style;

use crate::context::Context;

/// Initialize the page tree under the base directory
///
/// CREATED STRUCTURE:
/// ```
/// base/
/// ├── .nani/config.toml
/// ├── man/
/// ├── notes/notes_all/
/// └── templates/
/// ```
pub fn handle(ctx: &Context) -> Result<()> {
    let created = ctx.pages().init()?;

    if created.is_empty() {
        println!("Nothing to do, {} is already set up", ctx.base_dir().display());
        return Ok(());
    }

    println!(
        "{} Initialized nani at: {}",
        style("✓").green(),
        ctx.base_dir().display()
    );
    for path in &created {
        println!("   created {}", path.display());
    }
    println!();
    println!("Next steps:");
    println!("   nani man tar --generate");
    println!("   nani notes week1 --generate");
    println!("   nani ls --man");

    Ok(())
}
