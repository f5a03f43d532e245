use common::routes::DEFAULT_STATIC_IMAGE_PREFIX;
use log::Level;
use web_sys::window;

const STORAGE_PREFIX: &str = "histoview_";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Origin (and optional path) of the image server, e.g. "http://localhost:8000".
    /// Empty means the page's own origin.
    pub api_base_url: String,

    /// Path under which the server exposes the source images
    pub static_image_prefix: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            static_image_prefix: DEFAULT_STATIC_IMAGE_PREFIX.to_string(),
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

/// Parse a level name the way it is stored in localStorage.
pub fn parse_log_level(value: &str) -> Option<Level> {
    match value.trim().to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

fn storage_key(name: &str) -> String {
    format!("{}{}", STORAGE_PREFIX, name)
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(base_url)) = storage.get_item(&storage_key("api_base_url")) {
                settings.api_base_url = base_url;
            }

            if let Ok(Some(prefix)) = storage.get_item(&storage_key("static_image_prefix")) {
                if !prefix.is_empty() {
                    settings.static_image_prefix = prefix;
                }
            }

            if let Ok(Some(level)) = storage.get_item(&storage_key("log_level")) {
                if let Some(level) = parse_log_level(&level) {
                    settings.log_level = level;
                }
            }

            if let Ok(Some(duration)) = storage.get_item(&storage_key("toast_duration_ms")) {
                if let Ok(duration) = duration.parse::<u32>() {
                    settings.toast_duration_ms = duration;
                }
            }
        }

        settings
    }

    /// Full URL for a server path such as `/histogram/json?image_id=..`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), path)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
