//! Game actions
//!
//! The discriminated union of everything a player (human or AI) can ask the
//! engine to do. Each variant carries the acting player and the minimal
//! fields it needs; the engine validates before any mutation.

use crate::core::{CardId, PlayerId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Put a monster from hand onto the field (free, but the field caps at 4)
    PlayCard { player_id: PlayerId, card_id: CardId },

    /// Pay a spell's energy cost and resolve its effect
    CastSpell { player_id: PlayerId, card_id: CardId },

    /// Attack with a field monster. `target_card_id: None` is a direct
    /// attack, legal only when the opponent's field is empty: it scores a
    /// point instead of dealing damage.
    Attack {
        player_id: PlayerId,
        card_id: CardId,
        target_card_id: Option<CardId>,
        attack_name: String,
    },

    /// Return a field monster to hand for 1 energy
    RetireCard { player_id: PlayerId, card_id: CardId },

    /// Pass the turn
    EndTurn { player_id: PlayerId },
}

impl GameAction {
    pub fn player_id(&self) -> PlayerId {
        match self {
            GameAction::PlayCard { player_id, .. }
            | GameAction::CastSpell { player_id, .. }
            | GameAction::Attack { player_id, .. }
            | GameAction::RetireCard { player_id, .. }
            | GameAction::EndTurn { player_id } => *player_id,
        }
    }
}
