use std::fmt;

use async_trait::async_trait;
use crate::dictionary::ExamplesResponse;
use dictionary_api::{build_request, check_word, fetch, parse_endpoint};

mod config;
mod dictionary;
mod dictionary_api;
mod relationship;

pub use config::{ApiConfig, DEFAULT_CLIENT_NAME, DEFAULT_HOST, DEFAULT_TIMEOUT};
pub use dictionary::{RandomWord, RelatedWordGroup, WordDefinition, WordExample};
pub use relationship::{filter_by_relationship, words_of, Related, RelationshipType};

#[derive(Debug)]
pub enum DictionaryError {
    Fetch(reqwest::Error),
    Deserialize(reqwest::Error),
    InvalidEndpoint(String),
    InvalidWord(String),
    UnsupportedRelationshipType(String),
}

impl DictionaryError {
    /// The service could not be reached, timed out, refused the request or sent garbage.
    pub fn is_transport(&self) -> bool {
        matches!(self, DictionaryError::Fetch(_) | DictionaryError::Deserialize(_))
    }
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionaryError::Fetch(error) if error.is_timeout() => {
                write!(f, "dictionary request timed out: {error}")
            }
            DictionaryError::Fetch(error) => write!(f, "dictionary request failed: {error}"),
            DictionaryError::Deserialize(error) => {
                write!(f, "could not read the dictionary response: {error}")
            }
            DictionaryError::InvalidEndpoint(host) => {
                write!(f, "provided endpoint {host:?} is not a valid base url")
            }
            DictionaryError::InvalidWord(word) => write!(f, "provided word {word:?} is not valid"),
            DictionaryError::UnsupportedRelationshipType(tag) => {
                write!(f, "unsupported relationship type {tag:?}")
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DictionaryError::Fetch(error) | DictionaryError::Deserialize(error) => Some(error),
            _ => None,
        }
    }
}

/// Lookups the guessing game needs from a dictionary service.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn random_word(&self) -> Result<RandomWord, DictionaryError>;
    async fn definitions(&self, word: &str) -> Result<Vec<WordDefinition>, DictionaryError>;
    async fn examples(&self, word: &str) -> Result<Vec<String>, DictionaryError>;
    async fn related_words(&self, word: &str) -> Result<Vec<RelatedWordGroup>, DictionaryError>;
}

pub struct Dictionary {
    client: reqwest::Client,
    endpoint: reqwest::Url,
    config: ApiConfig,
}

impl Dictionary {
    pub fn new(config: ApiConfig) -> Result<Self, DictionaryError> {
        let endpoint = parse_endpoint(&config.host)?;
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
            config,
        })
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> Result<T, DictionaryError> {
        let request = build_request(&self.client, &self.endpoint, &self.config, segments)?;
        fetch(&self.client, &self.config.client_name, request).await
    }
}

#[async_trait]
impl Gateway for Dictionary {
    async fn random_word(&self) -> Result<RandomWord, DictionaryError> {
        self.get(&["words", "randomWord"]).await
    }

    async fn definitions(&self, word: &str) -> Result<Vec<WordDefinition>, DictionaryError> {
        let word = check_word(word)?;
        self.get(&["word", word, "definitions"]).await
    }

    async fn examples(&self, word: &str) -> Result<Vec<String>, DictionaryError> {
        let word = check_word(word)?;
        let response: ExamplesResponse = self.get(&["word", word, "examples"]).await?;
        Ok(response
            .examples
            .into_iter()
            .map(|example| example.text)
            .collect())
    }

    async fn related_words(&self, word: &str) -> Result<Vec<RelatedWordGroup>, DictionaryError> {
        let word = check_word(word)?;
        self.get(&["word", word, "relatedWords"]).await
    }
}
