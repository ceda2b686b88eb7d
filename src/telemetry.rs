//! Tracing setup for host applications.
//!
//! The library itself only emits `tracing` events; hosts that do not
//! install their own subscriber can call [`init`] once at startup.

use tracing_subscriber::EnvFilter;

/// Installs a global fmt subscriber filtered by `RUST_LOG`
/// (default level: `info`).
///
/// Returns false if a global subscriber was already installed, in
/// which case nothing changes.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        // Whatever the first call returns, the second must report that
        // a subscriber already exists.
        let _ = init();
        assert!(!init());
    }
}
