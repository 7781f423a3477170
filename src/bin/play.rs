//! Play parlor games in the terminal.

use std::io::{self, Write};
use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use parlor::games::guess_who::{
    people, Board, GuessWhoGame, PromptQuestion, QuestionStrategy, RandomQuestion, Roster,
};
use parlor::games::rps::{Opponent, RpsMatch, Throw};
use parlor::games::twenty_one::{Card, Decision, Hand, Outcome, TwentyOneMatch, TwentyOneStrategy};
use parlor::games::{connect_four, tictactoe};
use parlor::render::{join_or, pick_markers, GridView};
use parlor::strategy::ask;
use parlor::{
    play_match, BlockOrWin, GameRng, HumanPrompt, MatchState, Move, MoveError, MoveReport,
    MoveStrategy, Observer, Placement, PlayConfig, RandomLegal, Round, RoundStatus, Ruleset, Seating,
    StrategyError, Token, TokenMap,
};

/// Terminal parlor games: Connect Four, Tic-Tac-Toe, RPS, Twenty-One and
/// Guess Who.
#[derive(Parser, Debug)]
#[command(name = "play", about = "Turn-based terminal games", version)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, global = true, default_value = "parlor.toml")]
    config: PathBuf,

    /// Fixed RNG seed (overrides the config file)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Round wins needed to take the match (overrides the config file)
    #[arg(long, global = true)]
    target: Option<NonZeroU32>,

    #[command(subcommand)]
    game: Game,
}

#[derive(Subcommand, Debug)]
enum Game {
    /// Connect Four on a 6x7 grid
    ConnectFour {
        /// Who sits in the second seat
        #[arg(long, value_enum, default_value = "human")]
        opponent: GridOpponent,

        /// Your disc, R or Y; R moves first
        #[arg(long)]
        marker: Option<char>,
    },

    /// Tic-Tac-Toe on a 3x3 grid
    TicTacToe {
        /// Who sits in the second seat
        #[arg(long, value_enum, default_value = "heuristic")]
        opponent: GridOpponent,

        /// Your marker, X or O; X moves first
        #[arg(long)]
        marker: Option<char>,
    },

    /// Rock, paper, scissors, Spock, lizard
    Rps {
        /// EVE, Number 5, R2D2, Chappie, Sonny, Hal (or 1-6)
        #[arg(long, default_value = "sonny")]
        opponent: Opponent,
    },

    /// Twenty-One against the dealer
    TwentyOne,

    /// Guess Who against the computer
    GuessWho {
        /// TOML roster of people (overrides the config file)
        #[arg(long)]
        roster: Option<PathBuf>,
    },

    /// Print the default configuration as TOML
    DefaultConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum GridOpponent {
    Human,
    Random,
    Heuristic,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Game::DefaultConfig = cli.game {
        print!("{}", PlayConfig::default_toml()?);
        return Ok(());
    }

    let mut config = PlayConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    apply_overrides(&mut config, &cli);
    config.validate().context("invalid settings")?;

    let mut rng = config
        .session
        .seed
        .map_or_else(GameRng::from_entropy, GameRng::new);
    info!(seed = rng.seed(), "Session seed");

    match cli.game {
        Game::ConnectFour { opponent, marker } => run_grid_game(
            GridGame {
                title: "Connect Four",
                ruleset: connect_four::ruleset(),
                markers: connect_four::markers(),
                open: connect_four::open_columns,
            },
            opponent,
            marker,
            &config,
            &mut rng,
        ),
        Game::TicTacToe { opponent, marker } => run_grid_game(
            GridGame {
                title: "Tic-Tac-Toe",
                ruleset: tictactoe::ruleset(),
                markers: TokenMap::new(Token::marker),
                open: tictactoe::legal_squares,
            },
            opponent,
            marker,
            &config,
            &mut rng,
        ),
        Game::Rps { opponent } => run_rps(opponent, &config, &mut rng),
        Game::TwentyOne => run_twenty_one(&config, &mut rng),
        Game::GuessWho { .. } => run_guess_who(&config, &mut rng),
        Game::DefaultConfig => Ok(()),
    }
}

fn apply_overrides(config: &mut PlayConfig, cli: &Cli) {
    if let Some(seed) = cli.seed {
        config.session.seed = Some(seed);
    }
    if let Game::GuessWho {
        roster: Some(roster),
    } = &cli.game
    {
        config.guess_who.roster = Some(roster.clone());
    }
    if let Some(target) = cli.target {
        match cli.game {
            Game::ConnectFour { .. } | Game::TicTacToe { .. } => {
                config.grid_match.target_score = target;
            }
            Game::Rps { .. } => config.rps.target_score = target,
            Game::TwentyOne => config.twenty_one.target_score = target,
            Game::GuessWho { .. } | Game::DefaultConfig => {}
        }
    }
}

// =============================================================================
// Shared prompts
// =============================================================================

fn ask_name(seat: usize) -> Result<String, StrategyError> {
    ask(
        &mut io::stdin(),
        &mut io::stdout(),
        &format!("Player {seat}, what's your name?"),
        "Sorry, must enter a value.",
        |answer| (!answer.is_empty()).then(|| answer.to_string()),
    )
}

fn ask_yes_no(question: &str) -> Result<bool, StrategyError> {
    ask(
        &mut io::stdin(),
        &mut io::stdout(),
        question,
        "Sorry, must be y or n.",
        |answer| match answer.to_lowercase().as_str() {
            "y" | "yes" => Some(true),
            "n" | "no" => Some(false),
            _ => None,
        },
    )
}

fn banner(text: &str) {
    let rule = "-".repeat(text.len() + 4);
    println!("{rule}\n  {text}\n{rule}");
}

// =============================================================================
// Grid games
// =============================================================================

/// Everything that differs between the two grid games.
struct GridGame {
    title: &'static str,
    ruleset: Ruleset,
    markers: TokenMap<char>,
    /// Player-facing numbers of the moves still open.
    open: fn(&Round) -> Vec<usize>,
}

/// Prints the board and results as the session reports them.
struct TerminalObserver {
    names: TokenMap<String>,
    markers: TokenMap<char>,
    open: fn(&Round) -> Vec<usize>,
}

impl TerminalObserver {
    fn label(&self, token: Token) -> String {
        format!("{} ({})", self.names[token], self.markers[token])
    }

    fn show(&self, round: &Round) {
        println!(
            "\n{}",
            GridView::new(round.grid()).with_markers(self.markers.clone())
        );
        if !round.status().is_terminal() {
            let noun = match round.ruleset().shape().placement() {
                Placement::Drop => "columns",
                Placement::Free => "squares",
            };
            println!("Open {noun}: {}", join_or(&(self.open)(round)));
        }
    }

    fn scores(&self, state: &MatchState) {
        println!(
            "Score: {} {} - {} {} (first to {})",
            self.names[Token::First],
            state.score(Token::First),
            state.score(Token::Second),
            self.names[Token::Second],
            state.target()
        );
    }
}

impl Observer for TerminalObserver {
    fn round_started(&mut self, round: &Round, state: &MatchState) {
        println!("\nRound {}", state.rounds_played() + 1);
        println!("{} goes first.", self.label(round.starting()));
        self.show(round);
    }

    fn move_made(&mut self, round: &Round, report: &MoveReport) {
        let shape = round.ruleset().shape();
        let noun = match shape.placement() {
            Placement::Drop => "column",
            Placement::Free => "square",
        };
        let number = shape.number_of(report.mv).unwrap_or_default();
        println!("{} played {noun} {number}.", self.label(report.token));
        self.show(round);
    }

    fn move_rejected(&mut self, _token: Token, _mv: Move, error: &MoveError) {
        println!("{error}. Try again.");
    }

    fn round_finished(&mut self, round: &Round, state: &MatchState) {
        match round.status() {
            RoundStatus::Won(token) => println!("{} wins the round!", self.label(token)),
            RoundStatus::Drawn => println!("It's a tie!"),
            RoundStatus::InProgress => {}
        }
        self.scores(state);
    }
}

fn seat(
    seat_number: usize,
    kind: GridOpponent,
    token: Token,
    ruleset: &Ruleset,
    rng: &mut GameRng,
) -> Result<Box<dyn MoveStrategy>> {
    Ok(match kind {
        GridOpponent::Human => Box::new(HumanPrompt::new(
            ask_name(seat_number)?,
            io::stdin(),
            io::stdout(),
        )),
        GridOpponent::Random => Box::new(RandomLegal::new(rng.fork())),
        GridOpponent::Heuristic => Box::new(BlockOrWin::new(ruleset, token, rng.fork())),
    })
}

fn run_grid_game(
    game: GridGame,
    opponent: GridOpponent,
    marker: Option<char>,
    config: &PlayConfig,
    rng: &mut GameRng,
) -> Result<()> {
    let GridGame {
        title,
        ruleset,
        markers: defaults,
        open,
    } = game;
    let ruleset = &ruleset;
    banner(&format!("Welcome to {title}!"));
    let mut settings = config.match_settings();

    let markers = match marker {
        Some(pick) => {
            let markers = pick_markers(&defaults, pick).with_context(|| {
                format!(
                    "marker must be {} or {}",
                    defaults[Token::First],
                    defaults[Token::Second]
                )
            })?;
            // The default first marker always opens.
            if markers[Token::First] != defaults[Token::First] {
                settings = settings.with_first_to_move(Token::Second);
            }
            markers
        }
        None => defaults,
    };

    let first = seat(1, GridOpponent::Human, Token::First, ruleset, rng)?;
    let second = seat(2, opponent, Token::Second, ruleset, rng)?;
    let mut seating = Seating::new(first, second);
    let mut observer = TerminalObserver {
        names: TokenMap::new(|token| seating.name(token).to_string()),
        markers,
        open,
    };
    println!(
        "{} is {}. {} is {}.",
        observer.names[Token::First],
        observer.markers[Token::First],
        observer.names[Token::Second],
        observer.markers[Token::Second]
    );

    loop {
        let state = play_match(ruleset, &settings, &mut seating, &mut observer)
            .with_context(|| format!("playing {title}"))?;
        if let Some(winner) = state.winner() {
            println!("\n{} wins the match!", observer.names[winner]);
        }
        if !ask_yes_no("Would you like to play again? (y/n)")? {
            break;
        }
    }

    println!("Thanks for playing {title}. Goodbye!");
    Ok(())
}

// =============================================================================
// Rock, paper, scissors, Spock, lizard
// =============================================================================

fn run_rps(opponent: Opponent, config: &PlayConfig, rng: &mut GameRng) -> Result<()> {
    banner("Welcome to Rock, Paper, Scissors, Spock, Lizard!");
    println!("First to {} wins!", config.rps.target_score);

    let name = ask_name(1)?;
    let mut computer = opponent.build();
    let mut game = RpsMatch::new(config.rps.target_score);
    let names = TokenMap::from_pair(name, computer.name().to_string());
    let choices: Vec<String> = Throw::ALL
        .iter()
        .enumerate()
        .map(|(i, throw)| format!("({}){throw}", i + 1))
        .collect();
    let prompt = format!("Please choose {}:", join_or(&choices));

    loop {
        while !game.is_game_over() {
            let human: Throw = ask(
                &mut io::stdin(),
                &mut io::stdout(),
                &prompt,
                "Sorry, invalid choice.",
                |answer| answer.parse().ok(),
            )?;
            let thrown = computer.choose_throw(game.history(), rng);
            let Some(record) = game.play_round(human, thrown) else {
                break;
            };

            println!("{} chose {}.", names[Token::First], record.human);
            println!("{} chose {}.", names[Token::Second], record.computer);
            match record.winner {
                Some(token) => println!("{} won the round!", names[token]),
                None => println!("It's a tie!"),
            }
            let score = game.score();
            println!(
                "Round score: {} {} - {} {}",
                names[Token::First],
                score.score(Token::First),
                score.score(Token::Second),
                names[Token::Second]
            );
        }

        if let Some(winner) = game.score().winner() {
            println!("{} won the game!", names[winner]);
        }
        println!(
            "Games won: {} {} - {} {}",
            names[Token::First],
            game.games_won(Token::First),
            game.games_won(Token::Second),
            names[Token::Second]
        );
        if !ask_yes_no("Would you like to play again? (y/n)")? {
            break;
        }
        game.next_game();
    }

    println!("Thanks for playing Rock, Paper, Scissors, Spock, Lizard. Goodbye!");
    Ok(())
}

// =============================================================================
// Twenty-One
// =============================================================================

/// Shows the hand and asks hit or stay.
struct PromptDecision {
    name: String,
}

impl TwentyOneStrategy for PromptDecision {
    fn decide(&mut self, hand: &Hand, dealer_shows: Card) -> Result<Decision, StrategyError> {
        let mut out = io::stdout();
        writeln!(out, "{}'s hand: {hand}", self.name)?;
        writeln!(out, "Dealer shows: {dealer_shows} ?")?;
        ask(
            &mut io::stdin(),
            &mut out,
            "(H)it or (S)tay?",
            "Sorry, must enter 'H' or 'S'.",
            |answer| match answer.to_lowercase().as_str() {
                "h" | "hit" => Some(Decision::Hit),
                "s" | "stay" => Some(Decision::Stay),
                _ => None,
            },
        )
    }
}

fn describe(outcome: Outcome, name: &str) -> String {
    match outcome {
        Outcome::PlayerBust => format!("{name} busted! Dealer won!"),
        Outcome::DealerBust => format!("Dealer busted! {name} won!"),
        Outcome::PlayerWins => format!("{name} won!"),
        Outcome::DealerWins => "Dealer won!".to_string(),
        Outcome::Push => "It's a tie!".to_string(),
    }
}

fn run_twenty_one(config: &PlayConfig, rng: &mut GameRng) -> Result<()> {
    banner("Welcome to Twenty-One!");
    let settings = &config.twenty_one;
    println!(
        "Dealer stands on {}. First to {} wins!",
        settings.dealer_stands_on, settings.target_score
    );

    let mut player = PromptDecision { name: ask_name(1)? };
    loop {
        let mut game = TwentyOneMatch::new(settings.target_score, settings.dealer_stands_on);
        while !game.is_over() {
            let round = game
                .play_round(rng, &mut player)
                .context("playing Twenty-One")?;
            println!("\n{}'s hand: {}", player.name, round.player());
            println!("Dealer's hand: {}", round.dealer());
            if let Some(outcome) = round.outcome() {
                println!("{}", describe(outcome, &player.name));
            }
            let score = game.score();
            println!(
                "Score: {} {} - {} Dealer",
                player.name,
                score.score(Token::First),
                score.score(Token::Second)
            );
        }
        match game.score().winner() {
            Some(Token::First) => println!("{} wins the match!", player.name),
            Some(Token::Second) => println!("The dealer wins the match!"),
            None => {}
        }
        if !ask_yes_no("Would you like to play again? (y/n)")? {
            break;
        }
    }

    println!("Thanks for playing Twenty-One! Goodbye!");
    Ok(())
}

// =============================================================================
// Guess Who
// =============================================================================

fn run_guess_who(config: &PlayConfig, rng: &mut GameRng) -> Result<()> {
    banner("Welcome to Guess Who!");
    let roster = match &config.guess_who.roster {
        Some(path) => Roster::load(path)
            .with_context(|| format!("loading roster from {}", path.display()))?,
        None => Roster::classic()?,
    };

    let mut human = PromptQuestion::new(ask_name(1)?, io::stdin(), io::stdout());
    let mut computer = RandomQuestion::new("Jasmine", rng.fork());
    let names = TokenMap::from_pair(human.name().to_string(), computer.name().to_string());

    loop {
        println!("\n{}", Board::new(&roster));
        let secret = ask(
            &mut io::stdin(),
            &mut io::stdout(),
            "Choose your secret person (enter name):",
            "Sorry, that person is not on the list.",
            |answer| roster.find(answer).map(|person| person.name().to_string()),
        )?;
        let computer_secret = roster.people()[rng.gen_range_usize(0..roster.len())]
            .name()
            .to_string();
        let mut game = GuessWhoGame::new(&roster, &secret, &computer_secret)?;

        while !game.is_over() {
            let asker = game.active();
            if asker == Token::First {
                println!("\n{}", game.board(Token::First));
            }
            let strategy: &mut dyn QuestionStrategy = match asker {
                Token::First => &mut human,
                Token::Second => &mut computer,
            };
            let answer = game
                .play_turn(&roster, strategy)
                .context("playing Guess Who")?;

            let other = &names[asker.other()];
            println!("{} chose to check for {}.", names[asker], answer.question);
            if answer.matches {
                println!("{other}'s secret person matches that description!");
            } else {
                println!("{other}'s secret person does not match that description.");
            }
            println!(
                "{} has narrowed it down to {}.",
                names[asker],
                people(answer.standing)
            );
        }

        if let Some(winner) = game.winner() {
            println!("\n{} won!", names[winner]);
            println!(
                "{}'s secret person was {}.",
                names[winner.other()],
                game.secret(winner.other())
            );
        }
        if !ask_yes_no("Would you like to play again? (y/n)")? {
            break;
        }
    }

    println!("Thank you for playing Guess Who! Goodbye!");
    Ok(())
}
