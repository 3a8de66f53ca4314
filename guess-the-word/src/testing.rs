//! Scripted collaborators for exercising the game and the lookup commands offline.

use std::{collections::VecDeque, io};

use async_trait::async_trait;
use dictionary::{DictionaryError, Gateway, RandomWord, RelatedWordGroup, WordDefinition};

use crate::console::Console;

pub struct ScriptedGateway {
    pub word: Option<&'static str>,
    pub definitions: Vec<&'static str>,
    pub related: Vec<(&'static str, Vec<&'static str>)>,
    pub examples: Vec<&'static str>,
}

impl ScriptedGateway {
    pub fn house() -> Self {
        Self {
            word: Some("house"),
            definitions: vec!["a dwelling"],
            related: vec![("synonym", vec!["home"]), ("antonym", vec![])],
            examples: vec!["The house was quiet."],
        }
    }
}

pub fn transport_error() -> DictionaryError {
    let error = reqwest::Client::new()
        .get("not a url")
        .build()
        .expect_err("relative urls cannot be requested");
    DictionaryError::Fetch(error)
}

#[async_trait]
impl Gateway for ScriptedGateway {
    async fn random_word(&self) -> Result<RandomWord, DictionaryError> {
        match self.word {
            Some(word) => Ok(RandomWord {
                word: word.to_owned(),
            }),
            None => Err(transport_error()),
        }
    }

    async fn definitions(&self, _word: &str) -> Result<Vec<WordDefinition>, DictionaryError> {
        Ok(self
            .definitions
            .iter()
            .map(|text| WordDefinition {
                text: text.to_string(),
            })
            .collect())
    }

    async fn examples(&self, _word: &str) -> Result<Vec<String>, DictionaryError> {
        Ok(self.examples.iter().map(|text| text.to_string()).collect())
    }

    async fn related_words(
        &self,
        _word: &str,
    ) -> Result<Vec<RelatedWordGroup>, DictionaryError> {
        Ok(self
            .related
            .iter()
            .map(|(tag, words)| RelatedWordGroup {
                relationship_type: tag.to_string(),
                words: words.iter().map(|word| word.to_string()).collect(),
            })
            .collect())
    }
}

#[derive(Default)]
pub struct RecordingConsole {
    pub answers: VecDeque<&'static str>,
    pub said: Vec<String>,
    pub asked: Vec<String>,
}

impl RecordingConsole {
    pub fn answering(answers: &[&'static str]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn said_line(&self, prefix: &str) -> bool {
        self.said.iter().any(|line| line.starts_with(prefix))
    }

    pub fn count(&self, line: &str) -> usize {
        self.said.iter().filter(|said| *said == line).count()
    }
}

#[async_trait]
impl Console for RecordingConsole {
    fn say(&mut self, text: &str) {
        self.said.push(text.to_owned());
    }

    async fn ask(&mut self, prompt: &str) -> io::Result<String> {
        self.asked.push(prompt.to_owned());
        self.answers
            .pop_front()
            .map(str::to_owned)
            .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))
    }
}
