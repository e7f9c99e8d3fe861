//! Tracing setup for the command line front end.
//!
//! Controlled by `MINIGIT_LOG`, which accepts the usual `EnvFilter` syntax
//! (`debug`, `minigit::areas=trace`, ...). Defaults to `warn`. Events go to
//! stderr so they never interleave with command output on stdout.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "MINIGIT_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    // a subscriber may already be installed when running inside tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init();
}
