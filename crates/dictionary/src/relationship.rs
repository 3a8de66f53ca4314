use std::{fmt, str::FromStr};

use crate::{DictionaryError, RelatedWordGroup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipType {
    Synonym,
    Antonym,
    /// Every group the service returned, unfiltered.
    All,
}

impl RelationshipType {
    pub fn as_str(self) -> &'static str {
        match self {
            RelationshipType::Synonym => "synonym",
            RelationshipType::Antonym => "antonym",
            RelationshipType::All => "all",
        }
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationshipType {
    type Err = DictionaryError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "synonym" => Ok(RelationshipType::Synonym),
            "antonym" => Ok(RelationshipType::Antonym),
            "all" => Ok(RelationshipType::All),
            other => Err(DictionaryError::UnsupportedRelationshipType(other.to_owned())),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Related<'a> {
    All(&'a [RelatedWordGroup]),
    Group(&'a RelatedWordGroup),
}

/// Picks the group tagged `kind`, or hands back every group for [`RelationshipType::All`].
pub fn filter_by_relationship(
    groups: &[RelatedWordGroup],
    kind: RelationshipType,
) -> Result<Related<'_>, DictionaryError> {
    if kind == RelationshipType::All {
        return Ok(Related::All(groups));
    }
    groups
        .iter()
        .find(|group| group.relationship_type == kind.as_str())
        .map(Related::Group)
        .ok_or_else(|| DictionaryError::UnsupportedRelationshipType(kind.as_str().to_owned()))
}

/// Words of the group tagged `kind`; the service leaves out groups it has nothing for,
/// so a missing group is an empty list here.
pub fn words_of(groups: &[RelatedWordGroup], kind: RelationshipType) -> Vec<String> {
    match filter_by_relationship(groups, kind) {
        Ok(Related::Group(group)) => group.words.clone(),
        Ok(Related::All(groups)) => groups
            .iter()
            .flat_map(|group| group.words.iter().cloned())
            .collect(),
        Err(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(tag: &str, words: &[&str]) -> RelatedWordGroup {
        RelatedWordGroup {
            relationship_type: tag.to_owned(),
            words: words.iter().map(|word| word.to_string()).collect(),
        }
    }

    #[test]
    fn all_returns_groups_unchanged() {
        let groups = vec![group("synonym", &["big"]), group("antonym", &["small"])];
        let related = filter_by_relationship(&groups, RelationshipType::All).unwrap();
        assert_eq!(related, Related::All(&groups[..]));
    }

    #[test]
    fn picks_first_matching_group() {
        let groups = vec![
            group("same-context", &["hut"]),
            group("synonym", &["home"]),
            group("synonym", &["abode"]),
        ];
        let related = filter_by_relationship(&groups, RelationshipType::Synonym).unwrap();
        assert_eq!(related, Related::Group(&groups[1]));
    }

    #[test]
    fn missing_group_is_unsupported() {
        let groups = vec![group("synonym", &["big"])];
        let result = filter_by_relationship(&groups, RelationshipType::Antonym);
        assert!(matches!(
            result,
            Err(DictionaryError::UnsupportedRelationshipType(tag)) if tag == "antonym"
        ));
    }

    #[test]
    fn unknown_tag_fails_to_parse() {
        assert!(matches!(
            "bogus".parse::<RelationshipType>(),
            Err(DictionaryError::UnsupportedRelationshipType(tag)) if tag == "bogus"
        ));
        assert!("Synonym".parse::<RelationshipType>().is_err());
        assert_eq!("antonym".parse::<RelationshipType>().unwrap(), RelationshipType::Antonym);
    }

    #[test]
    fn words_of_missing_group_is_empty() {
        let groups = vec![group("synonym", &["home"])];
        assert_eq!(words_of(&groups, RelationshipType::Synonym), vec!["home"]);
        assert!(words_of(&groups, RelationshipType::Antonym).is_empty());
        assert!(words_of(&[], RelationshipType::Synonym).is_empty());
    }
}
