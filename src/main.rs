//! `tagcall` binary.

fn main() {
    // RUST_LOG=tagcall=debug shows vocabulary installation, adoption and resolver misses.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    tagcall::cli::run();
}
