//! Turn lifecycle state machine and win-condition evaluation
//!
//! `TurnManager` owns the Draw -> Main -> End cycle (Combat is a reserved
//! transition target) and the precedence-ordered win check. It operates on
//! the state and decks the engine hands it; it holds no state of its own.

use crate::core::{Deck, Player};
use crate::game::{GameAction, GameState, Phase, WinReason};
use rustc_hash::FxHashSet;

pub struct TurnManager;

impl TurnManager {
    /// Begin the active player's turn: bump the turn counter, grant energy
    /// (1, or the turn number once the energy booster is active), draw one
    /// card, clear the attacked set and land in Main. Ends with a win check
    /// because the forced draw can empty the deck before any action.
    ///
    /// Returns the energy granted so the engine can notify the host.
    pub fn start_turn(state: &mut GameState, decks: &mut [Deck; 2]) -> u32 {
        state.turn_number += 1;

        let idx = state.current_player_idx;
        let gain = if state.players[idx].has_energy_booster {
            state.turn_number
        } else {
            1
        };

        let mut player = state.players[idx].add_energy(gain);
        if let Some(card) = decks[idx].draw() {
            player.hand.push(card);
        }
        state.players[idx] = player;

        state.attacked_this_turn = FxHashSet::default();
        state.phase = Phase::Main;

        Self::check_win_conditions(state, decks);
        gain
    }

    /// Hand the turn to the other player. The next `start_turn` call,
    /// performed by the engine, completes the transition out of Draw.
    pub fn end_turn(state: &mut GameState) {
        state.current_player_idx = 1 - state.current_player_idx;
        state.phase = Phase::Draw;
    }

    /// Evaluate win conditions in fixed precedence: player 1 points win,
    /// player 2 points win, player 1 loss, player 2 loss. Only the first
    /// match applies; a loss is DeckOut when the deck is empty, FieldWipe
    /// otherwise.
    pub fn check_win_conditions(state: &mut GameState, decks: &[Deck; 2]) {
        if state.is_game_over {
            return;
        }

        let winner_and_reason = if state.players[0].has_won() {
            Some((0, WinReason::Points))
        } else if state.players[1].has_won() {
            Some((1, WinReason::Points))
        } else if state.players[0].has_lost(&decks[0], state.turn_number) {
            Some((1, Self::loss_reason(&decks[0])))
        } else if state.players[1].has_lost(&decks[1], state.turn_number) {
            Some((0, Self::loss_reason(&decks[1])))
        } else {
            None
        };

        if let Some((winner_idx, reason)) = winner_and_reason {
            state.winner = Some(state.players[winner_idx].id);
            state.win_reason = Some(reason);
            state.is_game_over = true;
        }
    }

    fn loss_reason(deck: &Deck) -> WinReason {
        if deck.is_empty() {
            WinReason::DeckOut
        } else {
            WinReason::FieldWipe
        }
    }

    /// Legality gate run before any mutation. Rejections are silent: the
    /// engine reports `false` and the state is untouched.
    pub fn can_perform_action(state: &GameState, action: &GameAction) -> bool {
        if state.is_game_over {
            return false;
        }

        let current = state.current_player();
        if action.player_id() != current.id {
            return false;
        }

        match action {
            GameAction::PlayCard { card_id, .. } => current
                .hand_card(*card_id)
                .is_some_and(|card| current.can_play_card(card)),

            GameAction::RetireCard { card_id, .. } => current.can_retire_card(*card_id),

            GameAction::Attack { .. } => {
                // The opening player never attacks on turn 1; per-card
                // cooldown and energy checks happen at resolution.
                !(state.turn_number == 1 && state.current_player_idx == 0)
            }

            GameAction::CastSpell { card_id, .. } => current
                .hand_card(*card_id)
                .and_then(|card| card.as_spell())
                .is_some_and(|spell| current.can_cast_spell(spell)),

            GameAction::EndTurn { .. } => true,
        }
    }

    /// Does any untapped field monster of `player` have a legal, affordable
    /// attack? When this is false the engine force-ends the turn.
    pub fn any_attack_available(state: &GameState, player: &Player, is_first_slot: bool) -> bool {
        player.field.iter().any(|monster| {
            !state.has_attacked(monster.id)
                && monster.can_attack(state.turn_number, is_first_slot)
                && monster
                    .attacks
                    .iter()
                    .any(|attack| attack.energy_cost <= player.energy)
        })
    }
}
