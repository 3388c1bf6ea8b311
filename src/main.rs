use tracing_subscriber::EnvFilter;

/// Binary entrypoint for the `niet` executable.
///
/// Keeps the binary thin: all page logic lives in the `niet_lib` crate so
/// tests can drive it directly.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    niet_lib::run()
}
