//! Content printing command handlers

use std::path::Path;

use crate::core::config::Config;
use crate::core::outline;
use crate::error::Result;

/// Handle `roadmap list`
pub fn handle_list(json: bool) -> Result<()> {
    if json {
        println!("{}", outline::tabs_json()?);
    } else {
        print!("{}", outline::tabs_text());
    }
    Ok(())
}

/// Handle `roadmap show <key>`
pub fn handle_show(key: &str, json: bool, config_path: Option<&Path>) -> Result<()> {
    let category = outline::resolve_category(key)?;

    if json {
        println!("{}", outline::category_json(category)?);
    } else {
        let config = Config::load(config_path)?;
        print!("{}", outline::category_text(category, config.show_icons));
    }
    Ok(())
}

/// Handle `roadmap tree`
pub fn handle_tree(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    print!("{}", outline::tree_text(config.indent_width as usize));
    Ok(())
}
