use anyhow::Result;
use nani_core::Category;

use crate::context::Context;

/// List the pages of one category
///
/// Human output is one file name per line so it pipes cleanly into other
/// tools; `--json` adds the full path of each page.
pub fn handle(ctx: &Context, category: Category, json: bool) -> Result<()> {
    let pages = ctx.pages();
    let names = pages.list(category)?;

    if json {
        let dir = pages.store().layout().category_dir(category);
        let json_pages: Vec<_> = names
            .iter()
            .map(|name| {
                serde_json::json!({
                    "category": category.tag(),
                    "file": name,
                    "path": dir.join(name).display().to_string(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json_pages)?);
    } else {
        for name in names {
            println!("{}", name);
        }
    }

    Ok(())
}
