use env_logger::Env;

/// Initializes the logger for the command line tools. `RUST_LOG` overrides the
/// default `info` level, e.g. `RUST_LOG=debug` lists every declared variable.
pub fn init() {
    // a logger may already be installed when called twice (tests, benches)
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_target(false)
        .try_init();
}
