use std::io::Write;

use retail_demo::{DemoConfig, run_showcase};

fn main() -> anyhow::Result<()> {
    retail_observability::init();

    let config = DemoConfig::from_env();
    if let Some(raw) = &config.rejected_format {
        tracing::warn!(value = %raw, "unknown RETAIL_DEMO_FORMAT; using text");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_showcase(&mut out, config.format)?;
    out.flush()?;
    Ok(())
}
