use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "HealthGuard";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default radius for the facility search, in miles.
pub const DEFAULT_SEARCH_RADIUS_MILES: f64 = 30.0;

/// Default minimum facility rating accepted by the search contract.
/// The parameter is carried through the search API but is not applied
/// as a filter today (inert pending a product decision).
pub const DEFAULT_MIN_RATING: f64 = 0.0;

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "info,healthguard=debug"
}

/// Get the application data directory
/// ~/HealthGuard/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("HealthGuard")
}

/// Get the models directory (classifier coefficient files, one per disease)
pub fn models_dir() -> PathBuf {
    app_data_dir().join("models")
}

/// Bind address for the API server. `HEALTHGUARD_ADDR` overrides the
/// loopback default.
pub fn bind_addr() -> SocketAddr {
    std::env::var("HEALTHGUARD_ADDR")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 8420)))
}
