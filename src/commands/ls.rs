//! Projects command handler
//!
//! Lists projects registered in `~/.bootapp/projects.json`.

use anyhow::Result;
use bootapp::presentation::{factory, output};

pub fn cmd_ls(json: bool) -> Result<()> {
    let config = super::load_config()?;
    let projects = factory::create_registry_use_case(&config).list()?;

    if json {
        println!("{}", output::projects_json(&projects));
    } else {
        print!("{}", output::render_projects(&projects));
    }
    Ok(())
}
