//! Elemental affinity damage modifiers
//!
//! A fixed cyclic advantage table: fire beats air, air beats earth, earth
//! beats water, water beats fire. The advantaged side of a pairing reads
//! +20, the reverse reading is -20, and every other pairing (same element,
//! unrelated elements, or anything involving `All`) is 0.
//!
//! This module is the single source of truth for the cycle; previews and
//! animations must call it rather than hand-copying the table.

use crate::core::Element;

/// Damage modifier magnitude for an advantaged pairing.
pub const AFFINITY_BONUS: i32 = 20;

/// Stateless calculator for elemental damage math.
pub struct AffinityCalculator;

impl AffinityCalculator {
    /// Does `attacker` hold the advantage over `defender` in the cycle?
    pub fn has_advantage(attacker: Element, defender: Element) -> bool {
        matches!(
            (attacker, defender),
            (Element::Fire, Element::Air)
                | (Element::Air, Element::Earth)
                | (Element::Earth, Element::Water)
                | (Element::Water, Element::Fire)
        )
    }

    /// Damage modifier for an attack of `attacker` element against a
    /// `defender` element: +20 with the advantage, -20 against it, else 0.
    pub fn modifier(attacker: Element, defender: Element) -> i32 {
        if Self::has_advantage(attacker, defender) {
            AFFINITY_BONUS
        } else if Self::has_advantage(defender, attacker) {
            -AFFINITY_BONUS
        } else {
            0
        }
    }

    /// Base damage plus the affinity modifier.
    ///
    /// The result can be negative for a weak attack into a resisted element;
    /// the caller clamps to zero when applying it.
    pub fn calculate_final_damage(base: i32, attacker: Element, defender: Element) -> i32 {
        base + Self::modifier(attacker, defender)
    }
}
