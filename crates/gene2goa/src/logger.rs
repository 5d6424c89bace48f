//! Console logging using env_logger
//!
//! Logs go to stderr so stdout only carries state snapshots.

/// Initialize logging
///
/// `RUST_LOG` wins when set; otherwise `default_level` (from config) is used.
pub fn init(default_level: &str) {
    let env = env_logger::Env::default().default_filter_or(default_level);

    if let Err(e) = env_logger::Builder::from_env(env)
        .format_timestamp_secs()
        .try_init()
    {
        eprintln!("Failed to initialize logger: {}", e);
    }
}
