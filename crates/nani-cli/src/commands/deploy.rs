use anyhow::Result;
use console::style;

use crate::context::Context;

/// Build the site with the configured builder, then publish it
pub fn handle(ctx: &Context) -> Result<()> {
    ctx.pages().deploy()?;
    println!("{} Deployed {}", style("✓").green(), ctx.base_dir().display());
    Ok(())
}
