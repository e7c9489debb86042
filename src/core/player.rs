//! Player aggregate and its pure transition functions
//!
//! A player owns a hand, a field of up to four monsters, an energy reserve
//! and a score. Every transition returns a fresh `Player` value instead of
//! mutating through a shared reference: the engine swaps the whole aggregate
//! in on success and keeps the old one on rejection, so callers can diff
//! snapshots cheaply and a failed action can never leave partial writes.

use crate::core::{Card, CardId, Deck, MonsterCard, SpellCard, SpellEffect};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Hard cap on monsters in play per player.
pub const FIELD_LIMIT: usize = 4;

/// Points needed to win.
pub const POINTS_TO_WIN: u32 = 4;

/// Energy cost to retire a monster back to hand.
pub const RETIRE_COST: u32 = 1;

/// A field-wipe loss cannot trigger before this many turns have started.
pub const FIELD_WIPE_GRACE_TURNS: u32 = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: crate::core::PlayerId,

    /// Player name (stable identifier for the host; never localized here)
    pub name: String,

    /// Cards held, order significant for display only
    pub hand: Vec<Card>,

    /// Monsters in play, at most [`FIELD_LIMIT`]
    pub field: SmallVec<[MonsterCard; FIELD_LIMIT]>,

    /// Spendable energy, gained at every turn start
    pub energy: u32,

    /// Scored kills; the game ends at [`POINTS_TO_WIN`]
    pub points: u32,

    pub is_ai: bool,

    /// Set permanently by the energy catalyst spell; upgrades the per-turn
    /// energy gain from 1 to the turn number
    pub has_energy_booster: bool,
}

impl Player {
    pub fn new(id: crate::core::PlayerId, name: impl Into<String>, is_ai: bool) -> Self {
        Player {
            id,
            name: name.into(),
            hand: Vec::new(),
            field: SmallVec::new(),
            energy: 0,
            points: 0,
            is_ai,
            has_energy_booster: false,
        }
    }

    pub fn hand_card(&self, id: CardId) -> Option<&Card> {
        self.hand.iter().find(|c| c.id() == id)
    }

    pub fn field_card(&self, id: CardId) -> Option<&MonsterCard> {
        self.field.iter().find(|m| m.id == id)
    }

    /// Playing a monster costs no energy; the only gate is field space.
    pub fn can_play_card(&self, card: &Card) -> bool {
        card.as_monster().is_some() && self.field.len() < FIELD_LIMIT
    }

    /// Move a monster from hand to field. Returns the player unchanged when
    /// the play is illegal (no-op, not an error).
    pub fn play_card(&self, card_id: CardId) -> Self {
        let Some(card) = self.hand_card(card_id) else {
            return self.clone();
        };
        if !self.can_play_card(card) {
            return self.clone();
        }
        let mut next = self.clone();
        let pos = next.hand.iter().position(|c| c.id() == card_id).unwrap();
        if let Card::Monster(monster) = next.hand.remove(pos) {
            next.field.push(monster);
        }
        next
    }

    pub fn can_retire_card(&self, card_id: CardId) -> bool {
        self.field_card(card_id).is_some() && self.energy >= RETIRE_COST
    }

    /// Move a monster from field back to hand for [`RETIRE_COST`] energy.
    /// Unchanged when illegal.
    pub fn retire_card(&self, card_id: CardId) -> Self {
        if !self.can_retire_card(card_id) {
            return self.clone();
        }
        let mut next = self.clone();
        let pos = next.field.iter().position(|m| m.id == card_id).unwrap();
        let monster = next.field.remove(pos);
        next.hand.push(Card::Monster(monster));
        next.energy -= RETIRE_COST;
        next
    }

    pub fn add_energy(&self, amount: u32) -> Self {
        let mut next = self.clone();
        next.energy += amount;
        next
    }

    pub fn spend_energy(&self, amount: u32) -> Self {
        let mut next = self.clone();
        next.energy = next.energy.saturating_sub(amount);
        next
    }

    pub fn add_points(&self, amount: u32) -> Self {
        let mut next = self.clone();
        next.points += amount;
        next
    }

    /// Replace a field monster in place by id (after damage or cooldown
    /// stamping). Unchanged if the id is not on the field.
    pub fn update_field_card(&self, card_id: CardId, new_card: MonsterCard) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next.field.iter_mut().find(|m| m.id == card_id) {
            *slot = new_card;
        }
        next
    }

    /// Drop every monster at 0 hp from the field. Run after each damage
    /// resolution so a dead card is never observable as alive.
    pub fn remove_dead_cards(&self) -> Self {
        let mut next = self.clone();
        next.field.retain(|m| m.is_alive());
        next
    }

    pub fn has_won(&self) -> bool {
        self.points >= POINTS_TO_WIN
    }

    /// Loss check: an exhausted deck always loses; an empty field only loses
    /// once the opening grace period (both players' first turns) is over.
    pub fn has_lost(&self, deck: &Deck, turn_number: u32) -> bool {
        deck.is_empty() || (self.field.is_empty() && turn_number > FIELD_WIPE_GRACE_TURNS)
    }

    /// Cost is the only legality gate; recasting a permanent effect is legal
    /// and resolves as a no-op.
    pub fn can_cast_spell(&self, spell: &SpellCard) -> bool {
        self.energy >= spell.energy_cost
    }

    /// Pay for and resolve a spell from hand. The energy catalyst sets the
    /// booster flag (idempotent); effects the core does not interpret still
    /// consume the card and the energy. Unchanged when illegal.
    pub fn cast_spell(&self, card_id: CardId) -> Self {
        let Some(Card::Spell(spell)) = self.hand_card(card_id).cloned() else {
            return self.clone();
        };
        if !self.can_cast_spell(&spell) {
            return self.clone();
        }
        let mut next = self.clone();
        let pos = next.hand.iter().position(|c| c.id() == card_id).unwrap();
        next.hand.remove(pos);
        next.energy -= spell.energy_cost;
        if spell.effect == SpellEffect::EnergyCatalyst {
            next.has_energy_booster = true;
        }
        next
    }
}
