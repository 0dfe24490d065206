use std::io::Write;

use stockroom_demo::{DemoConfig, scenario};

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = DemoConfig::from_env();
    tracing::info!(data_file = %config.data_file.display(), "starting inventory demo");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    scenario::run(&config, &mut out)?;
    out.flush()?;
    Ok(())
}
