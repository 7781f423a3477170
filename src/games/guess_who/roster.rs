//! People, rosters and the questions asked about them.
//!
//! A roster is a TOML file with one `[[people]]` table per person. Every
//! key other than `name` is a trait, and every person must carry the same
//! traits:
//!
//! ```toml
//! [[people]]
//! name = "Alex"
//! hair = "Black"
//! glasses = "No"
//! ```
//!
//! Trait keys are stored lowercase with underscores, so `Hair Color` and
//! `hair_color` name the same trait.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::Deserialize;

use crate::error::GuessWhoError;

/// The trait every person has: their name.
pub const NAME_TRAIT: &str = "name";

/// The roster shipped with the crate.
pub const CLASSIC_ROSTER: &str = include_str!("classic.toml");

/// Canonical trait key: words joined by underscores, lowercase.
#[must_use]
pub fn trait_key(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

/// Title-cased trait name for display: `hair_color` is `Hair Color`.
#[must_use]
pub fn trait_label(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One face on the board.
///
/// Two people are the same person when their names match.
#[derive(Clone, Debug, Deserialize)]
pub struct Person {
    name: String,
    #[serde(flatten)]
    traits: BTreeMap<String, String>,
}

impl Person {
    pub fn new<K, V>(name: impl Into<String>, traits: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            traits: traits
                .into_iter()
                .map(|(key, value)| (trait_key(key.as_ref()), value.into()))
                .collect(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value of a trait, `name` included.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        if key == NAME_TRAIT {
            Some(&self.name)
        } else {
            self.traits.get(key).map(String::as_str)
        }
    }

    /// Traits other than the name, sorted by key.
    pub fn traits(&self) -> impl Iterator<Item = (&str, &str)> {
        self.traits.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            traits: self
                .traits
                .into_iter()
                .map(|(key, value)| (trait_key(&key), value.trim().to_string()))
                .collect(),
        }
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Person {}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// "Does the secret person have `value` for `trait_key`?"
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Question {
    pub trait_key: String,
    pub value: String,
}

impl Question {
    pub fn new(trait_key: &str, value: impl Into<String>) -> Self {
        Self {
            trait_key: self::trait_key(trait_key),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn matches(&self, person: &Person) -> bool {
        person.get(&self.trait_key) == Some(self.value.as_str())
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", trait_label(&self.trait_key), self.value)
    }
}

#[derive(Deserialize)]
struct RosterData {
    people: Vec<Person>,
}

/// The people both players start from.
///
/// Holds at least two people with distinct names and identical trait keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    pub fn new(people: Vec<Person>) -> Result<Self, GuessWhoError> {
        let people: Vec<Person> = people.into_iter().map(Person::normalized).collect();
        let [first, _, ..] = people.as_slice() else {
            return Err(GuessWhoError::TooFewPeople(people.len()));
        };

        let expected: Vec<String> = first.traits.keys().cloned().collect();
        let mut seen = FxHashSet::default();
        for person in &people {
            if !seen.insert(person.name.to_lowercase()) {
                return Err(GuessWhoError::DuplicateName(person.name.clone()));
            }
            let found: Vec<String> = person.traits.keys().cloned().collect();
            if found != expected {
                return Err(GuessWhoError::MismatchedTraits {
                    name: person.name.clone(),
                    expected,
                    found,
                });
            }
        }
        Ok(Self { people })
    }

    /// Parse a roster from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, GuessWhoError> {
        let data: RosterData = toml::from_str(text)?;
        Self::new(data.people)
    }

    /// Load a roster from a TOML file.
    pub fn load(path: &Path) -> Result<Self, GuessWhoError> {
        let content = std::fs::read_to_string(path).map_err(|e| GuessWhoError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// The built-in twelve-person roster.
    pub fn classic() -> Result<Self, GuessWhoError> {
        Self::from_toml(CLASSIC_ROSTER)
    }

    #[must_use]
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// `name` followed by every other trait key, sorted.
    #[must_use]
    pub fn trait_keys(&self) -> Vec<&str> {
        let mut keys = vec![NAME_TRAIT];
        if let Some(first) = self.people.first() {
            keys.extend(first.traits.keys().map(String::as_str));
        }
        keys
    }

    /// Look a person up by name, ignoring case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Person> {
        let name = name.trim();
        self.people
            .iter()
            .find(|person| person.name.eq_ignore_ascii_case(name))
    }

    /// Turn typed text into a question, matching the trait and value
    /// against the roster while ignoring case and spacing.
    ///
    /// `None` when no one on the roster has that value for that trait.
    #[must_use]
    pub fn question(&self, trait_text: &str, value_text: &str) -> Option<Question> {
        let key = trait_key(trait_text);
        let value = value_text.trim();
        self.people
            .iter()
            .filter_map(|person| person.get(&key))
            .find(|known| known.eq_ignore_ascii_case(value))
            .map(|known| Question {
                trait_key: key.clone(),
                value: known.to_string(),
            })
    }
}
