use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "VitalsExtractor";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding the models directory.
pub const MODELS_DIR_ENV: &str = "VITALS_MODELS_DIR";

/// Language model tried first at startup.
pub const PREFERRED_MODEL: &str = "en_core_web_lg";

/// Language model used when the preferred one is not installed.
pub const FALLBACK_MODEL: &str = "en_core_web_md";

/// Log filter applied when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "vitals_extractor_lib=info"
}

/// Get the application data directory
/// ~/VitalsExtractor/ on all platforms. Falls back to the working directory
/// when no home directory can be determined.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Get the models directory, honoring `VITALS_MODELS_DIR` when set.
pub fn models_dir() -> PathBuf {
    models_dir_from(std::env::var_os(MODELS_DIR_ENV).map(PathBuf::from))
}

fn models_dir_from(override_dir: Option<PathBuf>) -> PathBuf {
    match override_dir {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => app_data_dir().join("models"),
    }
}
