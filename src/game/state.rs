//! Main game state structure

use crate::core::{CardId, Player, PlayerId};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Phase of the current turn
///
/// The engine runs Draw automatically at every turn start and lands in Main;
/// Combat is reserved as a transition target but unused today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Draw,
    Main,
    Combat,
    End,
}

/// Why the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinReason {
    /// A player reached four points
    Points,
    /// The loser's draw pile ran out
    DeckOut,
    /// The loser's field was empty after the opening grace period
    FieldWipe,
}

/// Complete authoritative game state
///
/// Owned exclusively by the engine; hosts only ever see cloned snapshots.
/// Player aggregates and the attacked set are replaced wholesale on every
/// transition, never mutated through aliases, so a rejected action cannot
/// leave partial writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Both players in fixed slot order (slot 0 opens the game)
    pub players: [Player; 2],

    /// Index of the active player in `players`
    pub current_player_idx: usize,

    /// Starts at 0; incremented once per turn start
    pub turn_number: u32,

    pub phase: Phase,

    pub winner: Option<PlayerId>,

    pub win_reason: Option<WinReason>,

    pub is_game_over: bool,

    /// Field monsters that already attacked this turn; cleared exactly once
    /// per turn start
    pub attacked_this_turn: FxHashSet<CardId>,
}

impl GameState {
    pub fn new(player1: Player, player2: Player) -> Self {
        GameState {
            players: [player1, player2],
            current_player_idx: 0,
            turn_number: 0,
            phase: Phase::Draw,
            winner: None,
            win_reason: None,
            is_game_over: false,
            attacked_this_turn: FxHashSet::default(),
        }
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_idx]
    }

    pub fn opponent(&self) -> &Player {
        &self.players[1 - self.current_player_idx]
    }

    pub fn opponent_idx(&self) -> usize {
        1 - self.current_player_idx
    }

    pub fn player_idx(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Has this monster already attacked this turn?
    pub fn has_attacked(&self, card_id: CardId) -> bool {
        self.attacked_this_turn.contains(&card_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn two_player_state() -> GameState {
        GameState::new(
            Player::new(PlayerId::new(0), "P1", false),
            Player::new(PlayerId::new(1), "P2", true),
        )
    }

    #[test]
    fn test_initial_state() {
        let state = two_player_state();
        assert_eq!(state.turn_number, 0);
        assert_eq!(state.phase, Phase::Draw);
        assert_eq!(state.current_player_idx, 0);
        assert!(!state.is_game_over);
        assert!(state.attacked_this_turn.is_empty());
    }

    #[test]
    fn test_opponent_lookup() {
        let mut state = two_player_state();
        assert_eq!(state.opponent().id, PlayerId::new(1));
        state.current_player_idx = 1;
        assert_eq!(state.opponent().id, PlayerId::new(0));
        assert_eq!(state.opponent_idx(), 0);
    }
}
