use dictionary::{words_of, DictionaryError, Gateway, RelationshipType};
use tracing::debug;

use crate::console::Console;

fn print_list(console: &mut impl Console, heading: &str, items: &[String]) {
    if items.is_empty() {
        console.say(&format!("No {heading} found."));
        return;
    }
    console.say(&format!("{}:", capitalize(heading)));
    for (index, item) in items.iter().enumerate() {
        console.say(&format!("    {}. {item}", index + 1));
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn heading(kind: RelationshipType) -> &'static str {
    match kind {
        RelationshipType::Synonym => "synonyms",
        RelationshipType::Antonym => "antonyms",
        RelationshipType::All => "related words",
    }
}

pub async fn define(
    gateway: &impl Gateway,
    console: &mut impl Console,
    word: &str,
) -> Result<(), DictionaryError> {
    let definitions = gateway.definitions(word).await?;
    debug!(command = "defn", ?definitions, "response for command");
    let texts: Vec<String> = definitions.into_iter().map(|definition| definition.text).collect();
    print_list(console, "definitions", &texts);
    Ok(())
}

pub async fn related(
    gateway: &impl Gateway,
    console: &mut impl Console,
    word: &str,
    kind: RelationshipType,
) -> Result<(), DictionaryError> {
    let groups = gateway.related_words(word).await?;
    debug!(command = kind.as_str(), ?groups, "response for command");
    print_list(console, heading(kind), &words_of(&groups, kind));
    Ok(())
}

pub async fn examples(
    gateway: &impl Gateway,
    console: &mut impl Console,
    word: &str,
) -> Result<(), DictionaryError> {
    let examples = gateway.examples(word).await?;
    debug!(command = "ex", ?examples, "response for command");
    print_list(console, "examples", &examples);
    Ok(())
}

/// Everything the dictionary knows about `word`, fetched concurrently.
pub async fn full_entry(
    gateway: &impl Gateway,
    console: &mut impl Console,
    word: &str,
) -> Result<(), DictionaryError> {
    let (definitions, groups, examples) = futures::try_join!(
        gateway.definitions(word),
        gateway.related_words(word),
        gateway.examples(word),
    )?;
    debug!(command = "dict", ?definitions, ?groups, ?examples, "response for command");

    console.say(&format!("Showing dictionary entry for '{word}':"));
    let texts: Vec<String> = definitions.into_iter().map(|definition| definition.text).collect();
    print_list(console, "definitions", &texts);
    for kind in [RelationshipType::Synonym, RelationshipType::Antonym] {
        print_list(console, heading(kind), &words_of(&groups, kind));
    }
    print_list(console, "examples", &examples);
    Ok(())
}
