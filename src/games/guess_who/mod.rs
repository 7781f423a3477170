//! Guess Who: each player hides a person from the roster and the two take
//! turns asking about the other's secret.
//!
//! Each question names a trait and a value. If the opponent's secret person
//! matches, the asker flips down everyone who does not; otherwise everyone
//! who does. The first player left with only the opponent's secret person
//! standing wins. `Token::First` asks first.

pub mod asker;
pub mod board;
pub mod roster;

pub use asker::{PromptQuestion, QuestionStrategy, RandomQuestion};
pub use board::Board;
pub use roster::{trait_key, trait_label, Person, Question, Roster, CLASSIC_ROSTER, NAME_TRAIT};

use tracing::debug;

use crate::core::{GameRng, Token, TokenMap};
use crate::error::GuessWhoError;

/// What one question did to the asker's board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Answer {
    pub asker: Token,
    pub question: Question,
    /// Whether the opponent's secret person fits the question.
    pub matches: bool,
    pub flipped: usize,
    pub standing: usize,
    pub winner: Option<Token>,
}

/// `1 person`, `3 people`.
#[must_use]
pub fn people(count: usize) -> String {
    if count == 1 {
        "1 person".to_string()
    } else {
        format!("{count} people")
    }
}

/// Both boards, both secrets and whose turn it is.
#[derive(Clone, Debug)]
pub struct GuessWhoGame {
    boards: TokenMap<Board>,
    secrets: TokenMap<Person>,
    active: Token,
    questions_asked: u32,
    winner: Option<Token>,
}

impl GuessWhoGame {
    /// Start a game with each player's secret person named.
    pub fn new(
        roster: &Roster,
        first_secret: &str,
        second_secret: &str,
    ) -> Result<Self, GuessWhoError> {
        let secret = |name: &str| {
            roster
                .find(name)
                .cloned()
                .ok_or_else(|| GuessWhoError::UnknownPerson(name.to_string()))
        };
        Ok(Self::with_secrets(
            roster,
            TokenMap::from_pair(secret(first_secret)?, secret(second_secret)?),
        ))
    }

    /// Start a game with both secrets drawn at random.
    #[must_use]
    pub fn with_random_secrets(roster: &Roster, rng: &mut GameRng) -> Self {
        let people = roster.people();
        let secrets = TokenMap::new(|_| people[rng.gen_range_usize(0..people.len())].clone());
        Self::with_secrets(roster, secrets)
    }

    fn with_secrets(roster: &Roster, secrets: TokenMap<Person>) -> Self {
        Self {
            boards: TokenMap::new(|_| Board::new(roster)),
            secrets,
            active: Token::First,
            questions_asked: 0,
            winner: None,
        }
    }

    /// Token whose turn it is to ask.
    #[must_use]
    pub fn active(&self) -> Token {
        self.active
    }

    #[must_use]
    pub fn board(&self, token: Token) -> &Board {
        &self.boards[token]
    }

    #[must_use]
    pub fn secret(&self, token: Token) -> &Person {
        &self.secrets[token]
    }

    #[must_use]
    pub fn winner(&self) -> Option<Token> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    #[must_use]
    pub fn questions_asked(&self) -> u32 {
        self.questions_asked
    }

    /// The active player asks about the opponent's secret person.
    ///
    /// A question nobody on the asker's board fits is refused and the turn
    /// does not pass.
    pub fn ask(&mut self, question: &Question) -> Result<Answer, GuessWhoError> {
        if self.winner.is_some() {
            return Err(GuessWhoError::GameOver);
        }
        let asker = self.active;
        let opponent = asker.other();
        let board = &mut self.boards[asker];
        if !board.is_possible(question) {
            return Err(GuessWhoError::ImpossibleGuess(question.to_string()));
        }

        let matches = question.matches(&self.secrets[opponent]);
        let flipped = board.flip_down(question, matches);
        let standing = board.len();
        if board.last_standing() == Some(&self.secrets[opponent]) {
            self.winner = Some(asker);
        } else {
            self.active = opponent;
        }
        self.questions_asked += 1;

        debug!(
            asker = %asker,
            question = %question,
            matches,
            flipped,
            standing,
            "Question answered"
        );
        Ok(Answer {
            asker,
            question: question.clone(),
            matches,
            flipped,
            standing,
            winner: self.winner,
        })
    }

    /// Ask `strategy` for the active player's question and put it.
    ///
    /// An impossible question is the strategy's fault and is returned as an
    /// error rather than retried.
    pub fn play_turn(
        &mut self,
        roster: &Roster,
        strategy: &mut dyn QuestionStrategy,
    ) -> Result<Answer, GuessWhoError> {
        let question = strategy
            .choose_question(&self.boards[self.active], roster)
            .map_err(|source| GuessWhoError::Strategy {
                token: self.active,
                source,
            })?;
        self.ask(&question)
    }
}
