// crates/nani-cli/src/commands/page.rs - Single Page Commands
//
// Shared by `nani man` and `nani notes`: both resolve a page reference and
// hand exactly one action to the page service.

use anyhow::{Result, bail};
use console::style;
use nani_core::{Category, PageRef};

use crate::cli::PageAction;
use crate::context::Context;
use crate::error::PageError;
use crate::services::Removal;

pub fn handle(ctx: &Context, category: Category, name: &str, action: PageAction) -> Result<()> {
    let page = PageRef::new(category, name).map_err(PageError::from)?;
    let pages = ctx.pages();

    match action {
        PageAction::Generate => {
            let path = pages.generate(&page)?;
            println!("{} Created {}", style("✓").green(), path.display());
        }
        PageAction::Delete => {
            if pages.delete(&page)? == Removal::Removed {
                println!("{} Deleted {}", style("✓").green(), page);
            }
        }
        PageAction::Edit => {
            pages.edit(&page)?;
        }
        PageAction::View => {
            if category != Category::Man {
                bail!("Only man pages can be viewed");
            }
            pages.view_man(page.name())?;
        }
    }

    Ok(())
}
