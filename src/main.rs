//! seqbench binary entry point.

use tracing_subscriber::EnvFilter;

use seqbench::config::{ConfigLoader, LoggingConfig};
use seqbench::BenchRunner;

/// Default configuration file looked up in the working directory.
const CONFIG_PATH: &str = "seqbench.toml";

/// Initialize tracing with the configured level, overridable via
/// `RUST_LOG`. Diagnostics go to stderr; the timing table is program
/// output and stays on stdout.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let config = match ConfigLoader::new().load_or_default(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("seqbench: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging);

    let report = BenchRunner::new(config.bench.operations).run();
    print!("{}", report.table());

    if config.report.json {
        println!("{}", report.to_json());
    }
}
