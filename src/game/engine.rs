//! Game engine orchestrator
//!
//! `GameEngine` owns the authoritative [`GameState`] and both draw piles.
//! `execute_action` is the only mutating entry point: it validates through
//! [`TurnManager`], delegates entity changes to the player and card
//! transition helpers, damage math to [`AffinityCalculator`], and drives the
//! automatic turn termination. Calls are strictly serial; the engine has no
//! internal suspension points.

use crate::core::{AffinityCalculator, Card, Deck, Player, PlayerId};
use crate::game::{GameAction, GameLogger, GameState, TurnManager, VerbosityLevel};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use serde::{Deserialize, Serialize};

/// Opening hand size dealt at construction.
pub const OPENING_HAND_SIZE: usize = 5;

/// Host-facing descriptor for one player slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub is_ai: bool,
}

impl PlayerConfig {
    pub fn human(name: impl Into<String>) -> Self {
        PlayerConfig {
            name: name.into(),
            is_ai: false,
        }
    }

    pub fn ai(name: impl Into<String>) -> Self {
        PlayerConfig {
            name: name.into(),
            is_ai: true,
        }
    }
}

/// Fired once per energy-granting transition for the human player, so the
/// host can animate the gain without the engine knowing about presentation.
pub type EnergyGainCallback = Box<dyn FnMut(PlayerId, u32)>;

pub struct GameEngine {
    state: GameState,
    decks: [Deck; 2],
    logger: GameLogger,
    on_energy_gain: Option<EnergyGainCallback>,
}

impl GameEngine {
    /// Build a game with a random shuffle seed.
    pub fn new(
        player1: PlayerConfig,
        player2: PlayerConfig,
        deck1: Vec<Card>,
        deck2: Vec<Card>,
    ) -> Self {
        Self::with_seed(player1, player2, deck1, deck2, rand::random())
    }

    /// Build a game with a fixed shuffle seed. Shuffling is the only
    /// nondeterminism in the engine, so a seed fully reproduces a game
    /// given the same action sequence.
    ///
    /// Shuffles both decks, deals the opening hands and runs the first turn
    /// start (turn number becomes 1, slot 0 active).
    pub fn with_seed(
        player1: PlayerConfig,
        player2: PlayerConfig,
        deck1: Vec<Card>,
        deck2: Vec<Card>,
        seed: u64,
    ) -> Self {
        let mut rng = ChaCha12Rng::seed_from_u64(seed);

        let mut decks = [Deck::new(deck1), Deck::new(deck2)];
        decks[0].shuffle(&mut rng);
        decks[1].shuffle(&mut rng);

        let p1 = Player::new(PlayerId::new(0), player1.name, player1.is_ai);
        let p2 = Player::new(PlayerId::new(1), player2.name, player2.is_ai);
        let mut state = GameState::new(p1, p2);

        for idx in 0..2 {
            let mut player = state.players[idx].clone();
            player.hand = decks[idx].draw_multiple(OPENING_HAND_SIZE);
            state.players[idx] = player;
        }

        let mut engine = GameEngine {
            state,
            decks,
            logger: GameLogger::new(),
            on_energy_gain: None,
        };
        engine.run_start_turn();
        engine
    }

    /// Register the host callback for human energy gains.
    pub fn set_on_energy_gain(&mut self, callback: EnergyGainCallback) {
        self.on_energy_gain = Some(callback);
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.logger.set_verbosity(verbosity);
    }

    pub fn logger_mut(&mut self) -> &mut GameLogger {
        &mut self.logger
    }

    /// Read-only snapshot of the full state. Callers must treat it as
    /// immutable; feeding a mutated copy back in has no effect.
    pub fn game_state(&self) -> GameState {
        self.state.clone()
    }

    pub fn current_player(&self) -> &Player {
        self.state.current_player()
    }

    pub fn opponent(&self) -> &Player {
        self.state.opponent()
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.state.players
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner
    }

    /// Remaining draw pile size for a player, if the id is valid.
    pub fn deck_size(&self, player_id: PlayerId) -> Option<usize> {
        self.state
            .player_idx(player_id)
            .map(|idx| self.decks[idx].size())
    }

    /// Validate and resolve one action. Returns `false` and leaves the state
    /// untouched when the action is illegal; there is no partial application.
    pub fn execute_action(&mut self, action: &GameAction) -> bool {
        if !TurnManager::can_perform_action(&self.state, action) {
            return false;
        }

        match action.clone() {
            GameAction::PlayCard { card_id, .. } => {
                let idx = self.state.current_player_idx;
                let before = &self.state.players[idx];
                let next = before.play_card(card_id);
                if next.field.len() == before.field.len() {
                    return false;
                }
                self.logger.normal(format!(
                    "{} plays card {card_id} to the field",
                    next.name
                ));
                self.state.players[idx] = next;
                true
            }

            GameAction::CastSpell { card_id, .. } => {
                let idx = self.state.current_player_idx;
                let before = &self.state.players[idx];
                let next = before.cast_spell(card_id);
                if next.hand.len() == before.hand.len() {
                    return false;
                }
                self.logger
                    .normal(format!("{} casts spell {card_id}", next.name));
                self.state.players[idx] = next;
                true
            }

            GameAction::RetireCard { card_id, .. } => {
                let idx = self.state.current_player_idx;
                let before = &self.state.players[idx];
                let next = before.retire_card(card_id);
                if next.hand.len() == before.hand.len() {
                    return false;
                }
                self.logger
                    .normal(format!("{} retires card {card_id}", next.name));
                self.state.players[idx] = next;
                true
            }

            GameAction::Attack {
                card_id,
                target_card_id,
                attack_name,
                ..
            } => self.resolve_attack(card_id, target_card_id, &attack_name),

            GameAction::EndTurn { .. } => {
                TurnManager::end_turn(&mut self.state);
                self.run_start_turn();
                true
            }
        }
    }

    /// Resolve an attack end to end: legality, energy payment, cooldown
    /// stamp, damage or direct point, dead-card sweep, kill point, win check
    /// and the automatic turn termination.
    fn resolve_attack(
        &mut self,
        card_id: crate::core::CardId,
        target_card_id: Option<crate::core::CardId>,
        attack_name: &str,
    ) -> bool {
        let idx = self.state.current_player_idx;
        let opp_idx = self.state.opponent_idx();

        if self.state.has_attacked(card_id) {
            return false;
        }

        let attacker_player = &self.state.players[idx];
        let Some(monster) = attacker_player.field_card(card_id) else {
            return false;
        };
        if !monster.can_attack(self.state.turn_number, idx == 0) {
            return false;
        }
        let Some(attack) = monster.attack_named(attack_name) else {
            return false;
        };
        if attack.energy_cost > attacker_player.energy {
            return false;
        }

        let attacker_element = monster.element;
        let base_damage = attack.damage;
        let energy_cost = attack.energy_cost;

        // Resolve the target before committing anything: a direct attack is
        // only legal into an empty field, and a stale target id is a
        // rejection, not a whiff.
        let opponent = &self.state.players[opp_idx];
        let target = match target_card_id {
            Some(target_id) => match opponent.field_card(target_id) {
                Some(target) => Some(target.clone()),
                None => return false,
            },
            None => {
                if !opponent.field.is_empty() {
                    return false;
                }
                None
            }
        };

        // Commit: pay energy, stamp the cooldown, mark the attacker.
        let stamped = monster.mark_attacked(self.state.turn_number);
        let mut next_attacker = self.state.players[idx]
            .spend_energy(energy_cost)
            .update_field_card(card_id, stamped);
        self.state.attacked_this_turn.insert(card_id);

        match target {
            None => {
                // Direct attack: a point instead of damage.
                next_attacker = next_attacker.add_points(1);
                self.logger.normal(format!(
                    "{} attacks directly with {card_id} ({attack_name}) and scores a point",
                    next_attacker.name
                ));
                self.state.players[idx] = next_attacker;
            }
            Some(target_monster) => {
                let final_damage = AffinityCalculator::calculate_final_damage(
                    base_damage,
                    attacker_element,
                    target_monster.element,
                )
                .max(0);

                let damaged = target_monster.take_damage(final_damage);
                let killed = !damaged.is_alive();

                let next_opponent = self.state.players[opp_idx]
                    .update_field_card(target_monster.id, damaged)
                    .remove_dead_cards();
                next_attacker = next_attacker.remove_dead_cards();
                if killed {
                    next_attacker = next_attacker.add_points(1);
                }

                self.logger.normal(format!(
                    "{} attacks {} with {card_id} ({attack_name}) for {final_damage}{}",
                    next_attacker.name,
                    target_monster.id,
                    if killed { ", killing it" } else { "" }
                ));
                self.state.players[idx] = next_attacker;
                self.state.players[opp_idx] = next_opponent;
            }
        }

        TurnManager::check_win_conditions(&mut self.state, &self.decks);
        if self.state.is_game_over {
            self.log_outcome();
            return true;
        }

        self.auto_end_turn_if_needed();
        true
    }

    /// Force the turn over once no untapped field monster of the active
    /// player can afford any of its attacks. Attacks are the only action
    /// class that keeps a turn alive.
    fn auto_end_turn_if_needed(&mut self) {
        let idx = self.state.current_player_idx;
        let player = &self.state.players[idx];
        if TurnManager::any_attack_available(&self.state, player, idx == 0) {
            return;
        }

        self.logger.normal(format!(
            "{} has no affordable attacks left; turn ends automatically",
            player.name
        ));
        TurnManager::end_turn(&mut self.state);
        self.run_start_turn();
    }

    /// `start_turn` plus the host notification: the energy callback fires
    /// exactly once per turn start, and only for a human active player.
    fn run_start_turn(&mut self) {
        let gain = TurnManager::start_turn(&mut self.state, &mut self.decks);

        let active = self.state.current_player();
        let (active_id, active_name, is_ai) = (active.id, active.name.clone(), active.is_ai);
        self.logger.normal(format!(
            "--- Turn {}: {} (+{gain} energy) ---",
            self.state.turn_number, active_name
        ));

        if !is_ai {
            if let Some(callback) = &mut self.on_energy_gain {
                callback(active_id, gain);
            }
        }

        if self.state.is_game_over {
            self.log_outcome();
        }
    }

    fn log_outcome(&self) {
        if let (Some(winner), Some(reason)) = (self.state.winner, self.state.win_reason) {
            let name = self
                .state
                .player(winner)
                .map(|p| p.name.as_str())
                .unwrap_or("?");
            self.logger.minimal(format!(
                "Game over on turn {}: {name} wins ({reason:?})",
                self.state.turn_number
            ));
        }
    }
}
