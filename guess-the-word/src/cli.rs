use std::time::Duration;

use clap::{Parser, Subcommand};
use dictionary::{ApiConfig, DEFAULT_CLIENT_NAME, DEFAULT_HOST, DEFAULT_TIMEOUT};

/// Guess the word from its definition, synonyms and antonyms, or look words up.
#[derive(Parser, Debug)]
#[command(name = "guess-the-word")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Base url of the dictionary service
    #[arg(long, env = "DICTIONARY_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Key sent as the `api_key` query parameter
    #[arg(long, env = "DICTIONARY_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Seconds to wait for each dictionary request
    #[arg(long, env = "DICTIONARY_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Defaults to `play`
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show the definitions of a word
    Defn { word: String },
    /// Show the synonyms of a word
    Syn { word: String },
    /// Show the antonyms of a word
    Ant { word: String },
    /// Show example sentences using a word
    Ex { word: String },
    /// Show definitions, synonyms, antonyms and examples of a word
    Dict { word: String },
    /// Play one round of guess the word
    Play,
}

impl Cli {
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            host: self.host.clone(),
            api_key: self.api_key.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            client_name: DEFAULT_CLIENT_NAME.to_owned(),
        }
    }
}
