use anyhow::Result;
use console::style;

use crate::context::Context;
use crate::services::LinkState;

/// Make the notes visible to the site generator as `content/`
pub fn handle(ctx: &Context) -> Result<()> {
    let link = ctx.pages().store().layout().site_content_link();

    match ctx.pages().link()? {
        LinkState::Created => {
            println!("{} Linked {} -> notes", style("✓").green(), link.display())
        }
        LinkState::AlreadyPresent => {
            println!("{} already exists, leaving it alone", link.display())
        }
    }

    Ok(())
}
