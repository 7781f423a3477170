//! Who picks the next question: a person at the keyboard or the computer.

use std::io::Write;

use super::board::Board;
use super::roster::{trait_label, Question, Roster, NAME_TRAIT};
use crate::core::GameRng;
use crate::error::StrategyError;
use crate::strategy::{ask, LineSource};

/// Supplies one question per turn.
pub trait QuestionStrategy {
    fn name(&self) -> &str;

    /// Pick a question about the opponent's secret person. `board` is the
    /// asker's own board.
    fn choose_question(
        &mut self,
        board: &Board,
        roster: &Roster,
    ) -> Result<Question, StrategyError>;
}

/// Asks about a random trait that still splits the board, naming the value
/// of a random person standing.
///
/// When everyone standing shares every trait, it asks for a name instead.
pub struct RandomQuestion {
    name: String,
    rng: GameRng,
}

impl RandomQuestion {
    pub fn new(name: impl Into<String>, rng: GameRng) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl QuestionStrategy for RandomQuestion {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_question(
        &mut self,
        board: &Board,
        _roster: &Roster,
    ) -> Result<Question, StrategyError> {
        let open = board.open_traits();
        let key = self.rng.choose(&open).copied().unwrap_or(NAME_TRAIT);
        let values = board.values_of(key);
        let value = self.rng.choose(&values).ok_or(StrategyError::NoLegalMoves)?;
        Ok(Question::new(key, *value))
    }
}

/// Reads a trait and a description from a text stream.
pub struct PromptQuestion<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: LineSource, W: Write> PromptQuestion<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: LineSource, W: Write> QuestionStrategy for PromptQuestion<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_question(
        &mut self,
        board: &Board,
        roster: &Roster,
    ) -> Result<Question, StrategyError> {
        let traits: Vec<String> = roster.trait_keys().into_iter().map(trait_label).collect();
        loop {
            writeln!(
                self.output,
                "Guess a trait of the secret person ({}):",
                traits.join(", ")
            )?;
            let non_empty = |answer: &str| (!answer.is_empty()).then(|| answer.to_string());
            let trait_text = ask(
                &mut self.input,
                &mut self.output,
                "Trait:",
                "Sorry, must enter a value.",
                non_empty,
            )?;
            let value_text = ask(
                &mut self.input,
                &mut self.output,
                "Description:",
                "Sorry, must enter a value.",
                non_empty,
            )?;

            match roster.question(&trait_text, &value_text) {
                Some(question) if board.is_possible(&question) => return Ok(question),
                _ => writeln!(self.output, "Sorry, that is not a possible guess.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::guess_who::Person;
    use std::io::Cursor;

    fn twins() -> Roster {
        Roster::new(vec![
            Person::new("Ann", [("hair", "Red")]),
            Person::new("Ben", [("hair", "Red")]),
        ])
        .unwrap()
    }

    #[test]
    fn test_random_falls_back_to_names() {
        let roster = twins();
        let board = Board::new(&roster);
        let mut computer = RandomQuestion::new("Jasmine", GameRng::new(3));
        let question = computer.choose_question(&board, &roster).unwrap();
        assert_eq!(question.trait_key, NAME_TRAIT);
        assert!(question.value == "Ann" || question.value == "Ben");
    }

    #[test]
    fn test_prompt_reads_trait_then_description() {
        let roster = twins();
        let board = Board::new(&roster);
        let mut human = PromptQuestion::new("Ada", Cursor::new("Hair\n red \n"), Vec::new());
        let question = human.choose_question(&board, &roster).unwrap();
        assert_eq!(question, Question::new("hair", "Red"));

        let out = String::from_utf8(human.into_output()).unwrap();
        assert_eq!(
            out,
            "Guess a trait of the secret person (Name, Hair):\nTrait:\nDescription:\n"
        );
    }
}
