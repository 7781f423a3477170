//! One player's board: the people not yet flipped down.

use std::fmt;

use super::roster::{trait_label, Person, Question, Roster, NAME_TRAIT};

/// People still standing on one player's board, in roster order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    standing: Vec<Person>,
}

impl Board {
    /// Every person on the roster, standing.
    #[must_use]
    pub fn new(roster: &Roster) -> Self {
        Self {
            standing: roster.people().to_vec(),
        }
    }

    #[must_use]
    pub fn standing(&self) -> &[Person] {
        &self.standing
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.standing.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.standing.is_empty()
    }

    #[must_use]
    pub fn contains(&self, person: &Person) -> bool {
        self.standing.contains(person)
    }

    /// Whether anyone still standing fits the question.
    #[must_use]
    pub fn is_possible(&self, question: &Question) -> bool {
        self.standing.iter().any(|person| question.matches(person))
    }

    /// Flip down everyone whose fit differs from `answer`; returns how many
    /// went down.
    pub fn flip_down(&mut self, question: &Question, answer: bool) -> usize {
        let before = self.standing.len();
        self.standing.retain(|person| question.matches(person) == answer);
        before - self.standing.len()
    }

    /// Trait keys, name excluded, on which the people standing differ.
    #[must_use]
    pub fn open_traits(&self) -> Vec<&str> {
        let Some(first) = self.standing.first() else {
            return Vec::new();
        };
        first
            .traits()
            .map(|(key, _)| key)
            .filter(|key| {
                let value = first.get(key);
                self.standing.iter().any(|person| person.get(key) != value)
            })
            .collect()
    }

    /// One value per person standing, repeats included.
    #[must_use]
    pub fn values_of(&self, key: &str) -> Vec<&str> {
        self.standing
            .iter()
            .filter_map(|person| person.get(key))
            .collect()
    }

    /// The only person left, once the board is down to one.
    #[must_use]
    pub fn last_standing(&self) -> Option<&Person> {
        match self.standing.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}

impl fmt::Display for Board {
    /// A table with a `Name` column and one column per trait.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.standing.first() else {
            return writeln!(f, "(nobody left)");
        };
        let keys: Vec<&str> = std::iter::once(NAME_TRAIT)
            .chain(first.traits().map(|(key, _)| key))
            .collect();
        let labels: Vec<String> = keys.iter().map(|key| trait_label(key)).collect();
        let width = self
            .standing
            .iter()
            .flat_map(|person| keys.iter().filter_map(|key| person.get(key)))
            .map(str::len)
            .chain(labels.iter().map(String::len))
            .max()
            .map_or(10, |longest| (longest + 2).max(10));

        for label in &labels {
            write!(f, "{label:^width$}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(width * keys.len()))?;
        for person in &self.standing {
            for key in &keys {
                write!(f, "{:^width$}", person.get(key).unwrap_or_default())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
