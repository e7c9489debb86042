//! Deck list loading and built-in demo decks
//!
//! The engine consumes fully-built `Vec<Card>` decks; this module turns a
//! JSON deck list into one, assigning fresh instance ids as it goes, and
//! provides built-in demo decks so the binary and tests need no data files.
//! Card definitions reference stable names and effect tags only - display
//! text and localization live outside this crate.

use crate::core::{Attack, Card, CardId, Element, MonsterCard, Rarity, SpellCard, SpellEffect, SpellKind};
use crate::{DuelError, Result};
use serde::Deserialize;

/// One entry in a JSON deck list.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CardDef {
    Monster {
        name: String,
        element: Element,
        rarity: Rarity,
        hp: i32,
        attacks: Vec<AttackDef>,
        #[serde(default = "default_copies")]
        copies: u32,
    },
    Spell {
        name: String,
        element: Element,
        rarity: Rarity,
        energy_cost: u32,
        effect: SpellEffect,
        kind: SpellKind,
        #[serde(default = "default_copies")]
        copies: u32,
    },
}

fn default_copies() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttackDef {
    pub name: String,
    pub damage: i32,
    pub energy_cost: u32,
}

#[derive(Debug, Clone, Deserialize)]
struct DeckFile {
    cards: Vec<CardDef>,
}

/// Builds card instances from deck lists, handing out unique ids.
#[derive(Debug, Default)]
pub struct DeckLoader {
    next_id: u32,
}

impl DeckLoader {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_card_id(&mut self) -> CardId {
        let id = CardId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Parse a JSON deck list into card instances.
    pub fn parse_deck(&mut self, json: &str) -> Result<Vec<Card>> {
        let file: DeckFile = serde_json::from_str(json)?;
        if file.cards.is_empty() {
            return Err(DuelError::InvalidDeckFormat("deck list is empty".to_string()));
        }

        let mut cards = Vec::new();
        for def in &file.cards {
            let copies = match def {
                CardDef::Monster { copies, .. } | CardDef::Spell { copies, .. } => *copies,
            };
            for _ in 0..copies {
                cards.push(self.instantiate(def));
            }
        }
        Ok(cards)
    }

    fn instantiate(&mut self, def: &CardDef) -> Card {
        match def {
            CardDef::Monster {
                name,
                element,
                rarity,
                hp,
                attacks,
                ..
            } => {
                let mut monster =
                    MonsterCard::new(self.next_card_id(), name.clone(), *element, *rarity, *hp);
                monster.attacks = attacks
                    .iter()
                    .map(|a| Attack {
                        name: a.name.clone(),
                        damage: a.damage,
                        energy_cost: a.energy_cost,
                    })
                    .collect();
                Card::Monster(monster)
            }
            CardDef::Spell {
                name,
                element,
                rarity,
                energy_cost,
                effect,
                kind,
                ..
            } => Card::Spell(SpellCard {
                id: self.next_card_id(),
                name: name.clone(),
                element: *element,
                rarity: *rarity,
                energy_cost: *energy_cost,
                effect: effect.clone(),
                kind: *kind,
            }),
        }
    }

    /// Built-in 14-card demo deck biased toward one element: a rarity spread
    /// of monsters, one mythic, and an energy catalyst.
    pub fn demo_deck(&mut self, element: Element) -> Vec<Card> {
        let mut cards = Vec::new();

        for i in 0..6 {
            cards.push(Card::Monster(
                MonsterCard::new(
                    self.next_card_id(),
                    format!("{element} scout {i}"),
                    element,
                    Rarity::Common,
                    25,
                )
                .with_attack("jab", 10, 1),
            ));
        }
        for i in 0..4 {
            cards.push(Card::Monster(
                MonsterCard::new(
                    self.next_card_id(),
                    format!("{element} warden {i}"),
                    element,
                    Rarity::Rare,
                    40,
                )
                .with_attack("slam", 20, 2)
                .with_attack("jab", 10, 1),
            ));
        }
        for i in 0..2 {
            cards.push(Card::Monster(
                MonsterCard::new(
                    self.next_card_id(),
                    format!("{element} colossus {i}"),
                    element,
                    Rarity::Epic,
                    60,
                )
                .with_attack("crush", 35, 3),
            ));
        }
        cards.push(Card::Monster(
            MonsterCard::new(
                self.next_card_id(),
                format!("{element} avatar"),
                element,
                Rarity::Mythic,
                90,
            )
            .with_attack("cataclysm", 60, 4),
        ));
        cards.push(Card::Spell(SpellCard {
            id: self.next_card_id(),
            name: "energy catalyst".to_string(),
            element: Element::All,
            rarity: Rarity::Epic,
            energy_cost: 2,
            effect: SpellEffect::EnergyCatalyst,
            kind: SpellKind::Permanent,
        }));

        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECK_JSON: &str = r#"{
        "cards": [
            {
                "type": "monster",
                "name": "ember pup",
                "element": "fire",
                "rarity": "common",
                "hp": 20,
                "attacks": [{"name": "nip", "damage": 8, "energy_cost": 1}],
                "copies": 3
            },
            {
                "type": "spell",
                "name": "energy catalyst",
                "element": "all",
                "rarity": "epic",
                "energy_cost": 2,
                "effect": "energy_catalyst",
                "kind": "permanent"
            }
        ]
    }"#;

    #[test]
    fn test_parse_deck_expands_copies_with_unique_ids() {
        let mut loader = DeckLoader::new();
        let cards = loader.parse_deck(DECK_JSON).unwrap();
        assert_eq!(cards.len(), 4);

        let mut ids: Vec<u32> = cards.iter().map(|c| c.id().as_u32()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 4);

        let spell = cards[3].as_spell().unwrap();
        assert_eq!(spell.effect, SpellEffect::EnergyCatalyst);
    }

    #[test]
    fn test_two_decks_do_not_share_ids() {
        let mut loader = DeckLoader::new();
        let a = loader.parse_deck(DECK_JSON).unwrap();
        let b = loader.parse_deck(DECK_JSON).unwrap();
        for card_a in &a {
            for card_b in &b {
                assert_ne!(card_a.id(), card_b.id());
            }
        }
    }

    #[test]
    fn test_empty_deck_is_rejected() {
        let mut loader = DeckLoader::new();
        let err = loader.parse_deck(r#"{"cards": []}"#).unwrap_err();
        assert!(matches!(err, DuelError::InvalidDeckFormat(_)));
    }

    #[test]
    fn test_malformed_json_is_a_serialization_error() {
        let mut loader = DeckLoader::new();
        let err = loader.parse_deck("not json").unwrap_err();
        assert!(matches!(err, DuelError::SerializationError(_)));
    }

    #[test]
    fn test_demo_deck_shape() {
        let mut loader = DeckLoader::new();
        let cards = loader.demo_deck(Element::Water);
        assert_eq!(cards.len(), 14);
        assert_eq!(
            cards
                .iter()
                .filter(|c| c.as_monster().is_some_and(|m| m.is_mythic()))
                .count(),
            1
        );
        assert_eq!(cards.iter().filter(|c| c.as_spell().is_some()).count(), 1);
    }
}
