//! Elemforge - deterministic elemental card duel engine
//!
//! A two-player, turn-based card battle: players play creatures and spells
//! from a hand, attack with elemental affinities, and race to four scored
//! kills while a heuristic AI chooses the scripted opponent's actions.
//!
//! The crate is the rules core only: it renders nothing, schedules nothing
//! and persists nothing. Hosts drive it through [`game::GameEngine`] and
//! [`ai::AiEngine`] and consume read-only [`game::GameState`] snapshots.

pub mod ai;
pub mod core;
pub mod error;
pub mod game;
pub mod loader;

pub use error::{DuelError, Result};
