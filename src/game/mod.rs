//! Game state, turn machinery and the engine orchestrator

pub mod actions;
pub mod engine;
pub mod logger;
pub mod state;
pub mod turn;

pub use actions::GameAction;
pub use engine::{EnergyGainCallback, GameEngine, PlayerConfig, OPENING_HAND_SIZE};
pub use logger::{GameLogger, LogEntry, OutputMode, VerbosityLevel};
pub use state::{GameState, Phase, WinReason};
pub use turn::TurnManager;
