//! Core value types: ids, cards, decks, players and the affinity table

pub mod affinity;
pub mod card;
pub mod deck;
pub mod entity;
pub mod player;
pub mod types;

pub use affinity::{AffinityCalculator, AFFINITY_BONUS};
pub use card::{Attack, Card, MonsterCard, SpellCard, SpellEffect, SpellKind, MYTHIC_COOLDOWN_TURNS};
pub use deck::Deck;
pub use entity::{CardId, PlayerId};
pub use player::{Player, FIELD_LIMIT, FIELD_WIPE_GRACE_TURNS, POINTS_TO_WIN, RETIRE_COST};
pub use types::{Element, Rarity};
