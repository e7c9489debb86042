//! Heuristic AI for the scripted opponent

pub mod heuristic;

pub use heuristic::{AiEngine, Decision, END_TURN_SCORE, SCORE_THRESHOLD};
