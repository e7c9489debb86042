//! Elemforge demo binary
//!
//! Runs AI-vs-AI duels with the heuristic engine, printing the game log at
//! the chosen verbosity. Decks come from JSON deck lists or fall back to
//! the built-in demo decks.

use anyhow::Context;
use clap::Parser;
use elemforge::ai::AiEngine;
use elemforge::core::Element;
use elemforge::game::{GameAction, GameEngine, PlayerConfig, VerbosityLevel};
use elemforge::loader::DeckLoader;
use std::path::PathBuf;

/// Verbosity level for game output (accepts names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

#[derive(Parser)]
#[command(name = "duel")]
#[command(about = "Elemforge - elemental card duel engine", long_about = None)]
struct Cli {
    /// JSON deck list for player 1 (built-in fire demo deck if omitted)
    #[arg(long, value_name = "DECK_FILE")]
    deck1: Option<PathBuf>,

    /// JSON deck list for player 2 (built-in water demo deck if omitted)
    #[arg(long, value_name = "DECK_FILE")]
    deck2: Option<PathBuf>,

    /// Number of games to run
    #[arg(long, short = 'g', default_value_t = 1)]
    games: u32,

    /// Shuffle seed; game N uses seed + N
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop a game after this many turns
    #[arg(long, default_value_t = 200)]
    max_turns: u32,

    /// Verbosity level for game output (0=silent, 1=minimal, 2=normal, 3=verbose)
    #[arg(long, short = 'v', default_value = "normal")]
    verbosity: VerbosityArg,
}

fn load_deck(
    loader: &mut DeckLoader,
    path: &Option<PathBuf>,
    fallback: Element,
) -> anyhow::Result<Vec<elemforge::core::Card>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading deck list {}", path.display()))?;
            loader
                .parse_deck(&json)
                .with_context(|| format!("parsing deck list {}", path.display()))
        }
        None => Ok(loader.demo_deck(fallback)),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut wins = [0u32, 0u32];
    let mut turn_limited = 0u32;

    for game in 0..cli.games {
        // Fresh ids per game; the engine never mixes cards across games.
        let mut loader = DeckLoader::new();
        let deck1 = load_deck(&mut loader, &cli.deck1, Element::Fire)?;
        let deck2 = load_deck(&mut loader, &cli.deck2, Element::Water)?;

        let mut engine = GameEngine::with_seed(
            PlayerConfig::ai("Player 1"),
            PlayerConfig::ai("Player 2"),
            deck1,
            deck2,
            cli.seed + game as u64,
        );
        engine.set_verbosity(cli.verbosity.0);

        while !engine.is_game_over() {
            let state = engine.game_state();
            if state.turn_number > cli.max_turns {
                turn_limited += 1;
                break;
            }

            let decision = AiEngine::make_decision(&state);
            engine
                .logger_mut()
                .verbose(format!("AI decision: {}", decision.reasoning));

            if !engine.execute_action(&decision.action) {
                // A heuristic pick can go stale if the auto-end flipped the
                // turn mid-enumeration; passing is always legal.
                let pass = GameAction::EndTurn {
                    player_id: engine.current_player().id,
                };
                engine.execute_action(&pass);
            }
        }

        if let Some(winner) = engine.winner() {
            wins[winner.as_u32() as usize] += 1;
        }
    }

    println!(
        "{} games: Player 1 wins {}, Player 2 wins {}, turn-limited {}",
        cli.games, wins[0], wins[1], turn_limited
    );
    Ok(())
}
