//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::path::PathBuf;

/// Default location of the testimonial document
pub const DEFAULT_TESTIMONIALS_PATH: &str = "public/testimonials.json";

/// Marker left in endpoint values that were never filled in
const PLACEHOLDER_MARKER: &str = "YOUR_";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Remote sink that receives contact form submissions
    /// Example: https://script.google.com/macros/s/<id>/exec
    pub contact_endpoint: Option<String>,

    /// JSON file with the testimonial list
    pub testimonials_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            contact_endpoint: std::env::var("CONTACT_ENDPOINT").ok(),
            testimonials_path: std::env::var("TESTIMONIALS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_TESTIMONIALS_PATH)),
        }
    }

    /// Contact endpoint, unless it is unset, blank or still a placeholder
    pub fn contact_endpoint(&self) -> Option<&str> {
        self.contact_endpoint
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty() && !url.contains(PLACEHOLDER_MARKER))
    }

    /// Check if a usable contact endpoint is configured
    pub fn has_contact_endpoint(&self) -> bool {
        self.contact_endpoint().is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(endpoint: Option<&str>) -> Config {
        Config {
            contact_endpoint: endpoint.map(str::to_string),
            testimonials_path: PathBuf::from(DEFAULT_TESTIMONIALS_PATH),
        }
    }

    #[test]
    fn test_contact_endpoint_configured() {
        let config = config(Some("https://sink.example.com/hook"));
        assert_eq!(
            config.contact_endpoint(),
            Some("https://sink.example.com/hook")
        );
        assert!(config.has_contact_endpoint());
    }

    #[test]
    fn test_contact_endpoint_missing() {
        assert!(!config(None).has_contact_endpoint());
    }

    #[test]
    fn test_contact_endpoint_blank() {
        assert!(!config(Some("   ")).has_contact_endpoint());
    }

    #[test]
    fn test_contact_endpoint_placeholder() {
        let config = config(Some("YOUR_GOOGLE_SCRIPT_URL"));
        assert!(config.contact_endpoint().is_none());
    }

    #[test]
    fn test_contact_endpoint_trimmed() {
        let config = config(Some("  https://sink.example.com  "));
        assert_eq!(config.contact_endpoint(), Some("https://sink.example.com"));
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so we don't assert specific values
        let config = Config::from_env();
        let _ = config.has_contact_endpoint();
        assert!(!config.testimonials_path.as_os_str().is_empty());
    }

    #[test]
    fn test_config_debug() {
        let debug_str = format!("{:?}", config(Some("https://x.example")));
        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("contact_endpoint"));
    }
}
