use std::time::Duration;

pub const DEFAULT_HOST: &str = "https://fourtytwowords.herokuapp.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CLIENT_NAME: &str = "DICTIONARY-CLIENT";

/// Where and how the dictionary service is reached.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub api_key: String,
    pub timeout: Duration,
    /// Sent lower-cased in the `x-http-client-name` header.
    pub client_name: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            api_key: String::new(),
            timeout: DEFAULT_TIMEOUT,
            client_name: DEFAULT_CLIENT_NAME.to_owned(),
        }
    }
}
