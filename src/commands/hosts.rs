use anyhow::Result;
use bootapp::presentation::{factory, output};
use bootapp::BootappError;

use crate::cli::HostsAction;

pub fn cmd_hosts(action: HostsAction, json: bool) -> Result<()> {
    let config = super::load_config()?;
    let hosts = factory::create_hosts_manager(&config);

    match action {
        HostsAction::List => {
            let records = hosts.list_entries().map_err(BootappError::from)?;
            if json {
                println!("{}", output::hosts_json(&records));
            } else {
                print!("{}", output::render_hosts(&records));
            }
        }
        HostsAction::Lookup { hostname } => {
            let address = hosts
                .address_for_hostname(&hostname)
                .map_err(BootappError::from)?;
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "hostname": hostname, "address": address })
                );
            } else {
                println!("{address}");
            }
        }
    }
    Ok(())
}
