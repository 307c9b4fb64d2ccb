//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Crate version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version line printed by `--version`, e.g. `flywarrior 0.1.0 (2024-05-01 abc1234)`.
pub fn version_string(binary: &str) -> String {
    format!("{} {} ({} {})", binary, VERSION, BUILD_DATE, BUILD_COMMIT)
}
