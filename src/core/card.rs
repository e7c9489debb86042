//! Card types and definitions
//!
//! Cards come in exactly two flavors, expressed as a tagged union: monsters
//! (creatures with hp and attacks) and spells (one-shot or lasting effects
//! paid for with energy). Card values are immutable by convention - the
//! transition helpers return a modified copy rather than mutating in place,
//! so a rejected action never leaves a half-written card behind.

use crate::core::{CardId, Element, Rarity};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Minimum number of turns between attacks for mythic-rarity monsters.
pub const MYTHIC_COOLDOWN_TURNS: u32 = 4;

/// One attack option on a monster card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    /// Stable attack name, used as an identifier in actions
    pub name: String,

    /// Base damage before the elemental affinity modifier
    pub damage: i32,

    /// Energy the attacker's owner pays to use this attack
    pub energy_cost: u32,
}

/// How long a spell's effect lasts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpellKind {
    Instant,
    Continuous,
    Enchantment,
    Permanent,
}

/// What a spell does, as a stable internal identifier
///
/// The AI and the cast resolution match on this enum, never on the display
/// name, so renaming or localizing a card cannot change behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpellEffect {
    /// Permanently upgrades the caster's per-turn energy gain (a flag, not a
    /// stacking counter - recasting is a legal no-op)
    EnergyCatalyst,

    /// Effect tag the core does not interpret; resolved by the host
    Other(String),
}

/// A creature card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterCard {
    /// Unique ID for this card instance
    pub id: CardId,

    /// Card name (stable identifier, not display text)
    pub name: String,

    pub element: Element,

    pub rarity: Rarity,

    /// Current hit points, always in `[0, max_hp]`
    pub hp: i32,

    pub max_hp: i32,

    /// Attack options (most monsters have one or two)
    pub attacks: SmallVec<[Attack; 2]>,

    /// Turn number of this monster's most recent attack, for the mythic
    /// cooldown; `None` until it attacks for the first time
    pub last_attack_turn: Option<u32>,
}

impl MonsterCard {
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        element: Element,
        rarity: Rarity,
        max_hp: i32,
    ) -> Self {
        MonsterCard {
            id,
            name: name.into(),
            element,
            rarity,
            hp: max_hp,
            max_hp,
            attacks: SmallVec::new(),
            last_attack_turn: None,
        }
    }

    pub fn with_attack(mut self, name: impl Into<String>, damage: i32, energy_cost: u32) -> Self {
        self.attacks.push(Attack {
            name: name.into(),
            damage,
            energy_cost,
        });
        self
    }

    pub fn is_mythic(&self) -> bool {
        self.rarity == Rarity::Mythic
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Whether this monster may declare an attack this turn.
    ///
    /// The player in slot 0 may never attack on the opening turn, and mythic
    /// monsters must wait [`MYTHIC_COOLDOWN_TURNS`] turns between attacks.
    /// Energy affordability is the engine's concern, not checked here.
    pub fn can_attack(&self, turn_number: u32, is_first_player_slot: bool) -> bool {
        if turn_number == 1 && is_first_player_slot {
            return false;
        }
        if self.is_mythic() {
            if let Some(last) = self.last_attack_turn {
                if turn_number.saturating_sub(last) < MYTHIC_COOLDOWN_TURNS {
                    return false;
                }
            }
        }
        true
    }

    /// Look up an attack by its stable name.
    pub fn attack_named(&self, name: &str) -> Option<&Attack> {
        self.attacks.iter().find(|a| a.name == name)
    }

    /// Apply damage, clamping hp at zero. Returns the updated card.
    pub fn take_damage(&self, damage: i32) -> Self {
        let mut card = self.clone();
        card.hp = (card.hp - damage.max(0)).max(0);
        card
    }

    /// Restore hp, clamped to `max_hp`. Returns the updated card.
    pub fn heal(&self, amount: i32) -> Self {
        let mut card = self.clone();
        card.hp = (card.hp + amount.max(0)).min(card.max_hp);
        card
    }

    /// Record that this monster attacked on the given turn.
    pub fn mark_attacked(&self, turn_number: u32) -> Self {
        let mut card = self.clone();
        card.last_attack_turn = Some(turn_number);
        card
    }
}

/// A spell card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellCard {
    /// Unique ID for this card instance
    pub id: CardId,

    /// Card name (stable identifier, not display text)
    pub name: String,

    pub element: Element,

    pub rarity: Rarity,

    /// Energy the caster pays
    pub energy_cost: u32,

    /// Stable effect identifier
    pub effect: SpellEffect,

    pub kind: SpellKind,
}

/// A card in a deck, hand or field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Card {
    Monster(MonsterCard),
    Spell(SpellCard),
}

impl Card {
    pub fn id(&self) -> CardId {
        match self {
            Card::Monster(m) => m.id,
            Card::Spell(s) => s.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Card::Monster(m) => &m.name,
            Card::Spell(s) => &s.name,
        }
    }

    pub fn element(&self) -> Element {
        match self {
            Card::Monster(m) => m.element,
            Card::Spell(s) => s.element,
        }
    }

    pub fn as_monster(&self) -> Option<&MonsterCard> {
        match self {
            Card::Monster(m) => Some(m),
            Card::Spell(_) => None,
        }
    }

    pub fn as_spell(&self) -> Option<&SpellCard> {
        match self {
            Card::Spell(s) => Some(s),
            Card::Monster(_) => None,
        }
    }
}
