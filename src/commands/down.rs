use anyhow::Result;
use bootapp::application::TeardownRequest;
use bootapp::presentation::factory;

pub fn cmd_down(project: String, keep_hosts: bool, remove_config: bool, json: bool) -> Result<()> {
    let config = super::load_config()?;
    let teardown = factory::create_teardown_use_case(&config);

    let request = TeardownRequest {
        project,
        keep_hosts,
        remove_config,
    };
    let report = teardown.execute(&request, factory::event_sink(json, "down"))?;

    if !json && report.warnings == 0 {
        println!("✓ {} is down", request.project);
    }
    Ok(())
}
