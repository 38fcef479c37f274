use taskdeck::commands::Cli;
use taskdeck::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    if is_debug_mode() {
        install_tracing();
    }
    Cli::menu()
}

fn install_tracing() {
    // RUST_LOG wins when set, otherwise debug output for this crate only.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskdeck=debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).compact().try_init();
}
