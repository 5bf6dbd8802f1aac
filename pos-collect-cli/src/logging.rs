use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is not set.
///
/// The library reports per-file failures at `warn`, which the CLI already
/// prints as scan errors, so the quiet default only lets `error` through.
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "pos_collect=error",
        1 => "pos_collect=info",
        _ => "pos_collect=debug",
    }
}

/// Install the stderr log subscriber and decide whether terminal output is colored.
///
/// `RUST_LOG` overrides the verbosity flag.
pub fn init(verbose: u8) {
    let color = std::io::stderr().is_terminal();
    colored::control::set_override(color);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    // A subscriber that is already installed stays in place.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .with_target(false)
        .try_init();
}
