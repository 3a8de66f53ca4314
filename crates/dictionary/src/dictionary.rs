use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RandomWord {
    pub word: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordDefinition {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordExample {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExamplesResponse {
    #[serde(default)]
    pub examples: Vec<WordExample>,
}

/// A set of words sharing one relationship to the looked up word.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedWordGroup {
    pub relationship_type: String,
    #[serde(default)]
    pub words: Vec<String>,
}
