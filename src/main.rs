use std::io::{self, Write};

use ocp_craft::{CraftConfig, observability};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = CraftConfig::default();

    observability::init(&config.log_filter);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for variant in &config.variants {
        info!(%variant, "running demonstration");
        for line in variant.run() {
            writeln!(out, "{}", line)?;
        }
    }

    Ok(())
}
