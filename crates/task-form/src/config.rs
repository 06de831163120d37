//! Form Configuration
//!
//! Static defaults for the form; nothing is read from files or the environment.

/// Form settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Task endpoint, relative to the page origin or absolute
    pub endpoint: String,
    /// Trimmed description must be strictly longer than this
    pub min_description_len: usize,
    pub copy_success_message: String,
    pub copy_failure_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/task".to_string(),
            min_description_len: 15,
            copy_success_message: "Copied to clipboard! 🚀".to_string(),
            copy_failure_message: "Could not copy to clipboard 🥲".to_string(),
        }
    }
}

impl FormConfig {
    /// Resolve the endpoint against a page origin such as `https://example.com`
    pub fn endpoint_url(&self, origin: &str) -> String {
        if self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://") {
            return self.endpoint.clone();
        }
        let origin = origin.trim_end_matches('/');
        if self.endpoint.starts_with('/') {
            format!("{}{}", origin, self.endpoint)
        } else {
            format!("{}/{}", origin, self.endpoint)
        }
    }
}
