//! Heuristic decision maker
//!
//! A stateless evaluator: enumerate every legal action for the current
//! player, score each with additive heuristics, and return the best one.
//! Candidates are generated in a fixed order and ties keep the first
//! generated, so the same state always yields the same decision - no
//! randomness, no engine handle, no side effects.

use crate::core::{AffinityCalculator, Card, MonsterCard, Player, SpellCard, SpellEffect, SpellKind};
use crate::game::{GameAction, GameState};

/// A candidate below this score loses to simply ending the turn.
pub const SCORE_THRESHOLD: i32 = 40;

/// Fixed score of the end-turn fallback.
pub const END_TURN_SCORE: i32 = 30;

/// The chosen action plus the score and a short diagnostic trace of how it
/// was reached. The reasoning is debug text for hosts and logs, never shown
/// raw to players.
#[derive(Debug, Clone)]
pub struct Decision {
    pub action: GameAction,
    pub score: i32,
    pub reasoning: String,
}

/// Stateless heuristic engine. Safe to call repeatedly or speculatively on
/// any snapshot.
pub struct AiEngine;

impl AiEngine {
    /// Pick the best action for the current player of `state`.
    ///
    /// Enumeration order (which also breaks ties): play candidates, spell
    /// candidates, attack candidates, retire candidates. Falls back to
    /// ending the turn when nothing scores at least [`SCORE_THRESHOLD`].
    pub fn make_decision(state: &GameState) -> Decision {
        let player = state.current_player();
        let opponent = state.opponent();

        let mut candidates: Vec<Decision> = Vec::new();
        Self::collect_play_candidates(player, &mut candidates);
        Self::collect_spell_candidates(state, player, &mut candidates);
        Self::collect_attack_candidates(state, player, opponent, &mut candidates);
        Self::collect_retire_candidates(player, &mut candidates);

        let mut best: Option<Decision> = None;
        for candidate in candidates {
            if best.as_ref().map_or(true, |b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }

        match best {
            Some(decision) if decision.score >= SCORE_THRESHOLD => decision,
            _ => Decision {
                action: GameAction::EndTurn {
                    player_id: player.id,
                },
                score: END_TURN_SCORE,
                reasoning: "no candidate beats ending the turn".to_string(),
            },
        }
    }

    fn collect_play_candidates(player: &Player, out: &mut Vec<Decision>) {
        for card in &player.hand {
            let Card::Monster(monster) = card else {
                continue;
            };
            if !player.can_play_card(card) {
                continue;
            }
            let score = Self::score_play(player, monster);
            out.push(Decision {
                action: GameAction::PlayCard {
                    player_id: player.id,
                    card_id: monster.id,
                },
                score,
                reasoning: format!("play {} (hp {}, score {score})", monster.name, monster.hp),
            });
        }
    }

    /// Play score: base 50, +2 per hp, +sum of attack damages, +30 for a
    /// mythic, +20 when the field is thin (fewer than 2 monsters).
    fn score_play(player: &Player, monster: &MonsterCard) -> i32 {
        let mut score = 50;
        score += 2 * monster.hp;
        score += monster.attacks.iter().map(|a| a.damage).sum::<i32>();
        if monster.is_mythic() {
            score += 30;
        }
        if player.field.len() < 2 {
            score += 20;
        }
        score
    }

    fn collect_spell_candidates(state: &GameState, player: &Player, out: &mut Vec<Decision>) {
        for card in &player.hand {
            let Card::Spell(spell) = card else {
                continue;
            };
            if !player.can_cast_spell(spell) {
                continue;
            }
            let score = Self::score_spell(state, player, spell);
            out.push(Decision {
                action: GameAction::CastSpell {
                    player_id: player.id,
                    card_id: spell.id,
                },
                score,
                reasoning: format!("cast {} (score {score})", spell.name),
            });
        }
    }

    /// Spell score: base 40. The energy catalyst dominates while the booster
    /// is inactive (and extra so in the early game); lasting effects beat
    /// instants; cheap spells edge out expensive ones. An already-active
    /// booster earns no bonus, so the AI never recasts it.
    fn score_spell(state: &GameState, player: &Player, spell: &SpellCard) -> i32 {
        let mut score = 40;
        if spell.effect == SpellEffect::EnergyCatalyst && !player.has_energy_booster {
            score += 120;
            if state.turn_number <= 3 {
                score += 30;
            }
        }
        match spell.kind {
            SpellKind::Permanent => score += 30,
            SpellKind::Instant => score += 20,
            SpellKind::Continuous | SpellKind::Enchantment => {}
        }
        if spell.energy_cost <= 2 {
            score += 10;
        } else {
            score -= 5;
        }
        score
    }

    fn collect_attack_candidates(
        state: &GameState,
        player: &Player,
        opponent: &Player,
        out: &mut Vec<Decision>,
    ) {
        let is_first_slot = state.current_player_idx == 0;
        let racing = player.points >= 3;

        for monster in &player.field {
            if state.has_attacked(monster.id) {
                continue;
            }
            if !monster.can_attack(state.turn_number, is_first_slot) {
                continue;
            }
            for attack in &monster.attacks {
                if attack.energy_cost > player.energy {
                    continue;
                }
                if opponent.field.is_empty() {
                    // One direct candidate per eligible attacker/attack.
                    let mut score = 100 + 80;
                    if racing {
                        score += 100;
                    }
                    out.push(Decision {
                        action: GameAction::Attack {
                            player_id: player.id,
                            card_id: monster.id,
                            target_card_id: None,
                            attack_name: attack.name.clone(),
                        },
                        score,
                        reasoning: format!(
                            "direct attack with {} ({}, score {score})",
                            monster.name, attack.name
                        ),
                    });
                } else {
                    for target in &opponent.field {
                        let final_damage = AffinityCalculator::calculate_final_damage(
                            attack.damage,
                            monster.element,
                            target.element,
                        )
                        .max(0);

                        let mut score = 100 + 3 * final_damage;
                        let lethal = final_damage >= target.hp;
                        if lethal {
                            score += 50;
                        }
                        if AffinityCalculator::has_advantage(monster.element, target.element) {
                            score += 25;
                        }
                        if target.hp <= 20 {
                            score += 30;
                        }
                        if racing {
                            score += 100;
                        }
                        out.push(Decision {
                            action: GameAction::Attack {
                                player_id: player.id,
                                card_id: monster.id,
                                target_card_id: Some(target.id),
                                attack_name: attack.name.clone(),
                            },
                            score,
                            reasoning: format!(
                                "attack {} with {} ({}) for {final_damage}{} (score {score})",
                                target.name,
                                monster.name,
                                attack.name,
                                if lethal { ", lethal" } else { "" }
                            ),
                        });
                    }
                }
            }
        }
    }

    /// Retire candidates only exist for monsters the scorer considers
    /// low-value: nearly dead, or crowding an over-full field.
    fn collect_retire_candidates(player: &Player, out: &mut Vec<Decision>) {
        for monster in &player.field {
            if !player.can_retire_card(monster.id) {
                continue;
            }
            let nearly_dead = monster.hp <= 10;
            let crowded = player.field.len() > 3;
            if !nearly_dead && !crowded {
                continue;
            }
            let mut score = 10;
            if nearly_dead {
                score += 30;
            }
            if crowded {
                score += 20;
            }
            out.push(Decision {
                action: GameAction::RetireCard {
                    player_id: player.id,
                    card_id: monster.id,
                },
                score,
                reasoning: format!("retire {} (hp {}, score {score})", monster.name, monster.hp),
            });
        }
    }
}
