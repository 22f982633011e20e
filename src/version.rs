// Crate identity baked in at build time

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// "routerdash 0.1.0", used for the root route and the startup log line.
pub fn banner() -> String {
    format!("{} {}", NAME, VERSION)
}
