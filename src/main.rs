use anyhow::Result;
use ts_significance::report;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output (controlled by RUST_LOG)
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    for scenario in report::run_scenarios()? {
        println!("{}", scenario);
    }

    Ok(())
}
