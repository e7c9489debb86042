//! End-to-end scenario tests for the duel engine
//!
//! Each test drives a full `GameEngine` through real action sequences and
//! checks the cross-component rules: direct attacks, win-condition
//! precedence, the auto-end-turn transition and the no-partial-write
//! guarantee. Decks are built from identical monsters so the seeded shuffle
//! cannot change what a scripted sequence draws.

use elemforge::ai::AiEngine;
use elemforge::core::{Card, CardId, Element, MonsterCard, PlayerId, Rarity};
use elemforge::game::{GameAction, GameEngine, Phase, PlayerConfig, VerbosityLevel, WinReason};
use elemforge::loader::DeckLoader;
use std::cell::RefCell;
use std::rc::Rc;

/// Deck of `n` identical monsters; ids start at `base`.
fn uniform_deck(base: u32, n: u32, element: Element, hp: i32, damage: i32, cost: u32) -> Vec<Card> {
    (0..n)
        .map(|i| {
            Card::Monster(
                MonsterCard::new(
                    CardId::new(base + i),
                    format!("drone {}", base + i),
                    element,
                    Rarity::Common,
                    hp,
                )
                .with_attack("zap", damage, cost),
            )
        })
        .collect()
}

fn quiet(engine: &mut GameEngine) {
    engine.set_verbosity(VerbosityLevel::Silent);
}

fn play_first_monster(engine: &mut GameEngine) -> CardId {
    let player_id = engine.current_player().id;
    let card_id = engine
        .current_player()
        .hand
        .iter()
        .find(|c| c.as_monster().is_some())
        .expect("hand should hold a monster")
        .id();
    assert!(engine.execute_action(&GameAction::PlayCard { player_id, card_id }));
    card_id
}

fn end_turn(engine: &mut GameEngine) {
    let player_id = engine.current_player().id;
    assert!(engine.execute_action(&GameAction::EndTurn { player_id }));
}

#[test]
fn direct_attack_scores_a_point_into_an_empty_field() {
    let mut engine = GameEngine::with_seed(
        PlayerConfig::human("P1"),
        PlayerConfig::human("P2"),
        uniform_deck(100, 12, Element::Fire, 30, 10, 1),
        uniform_deck(200, 12, Element::Water, 30, 10, 1),
        7,
    );
    quiet(&mut engine);

    // Turn 1: the opener passes without developing a field.
    end_turn(&mut engine);

    // Turn 2: the second player lands a monster and attacks directly.
    let attacker = play_first_monster(&mut engine);
    assert!(engine.execute_action(&GameAction::Attack {
        player_id: PlayerId::new(1),
        card_id: attacker,
        target_card_id: None,
        attack_name: "zap".to_string(),
    }));

    let state = engine.game_state();
    assert_eq!(state.players[1].points, 1);
    assert_eq!(state.players[0].points, 0);
    // The attack spent its energy and exhausted the only attacker, so the
    // turn auto-ended into player 1's turn 3 - where the still-empty field
    // loses to the wipe rule.
    assert!(state.is_game_over);
    assert_eq!(state.winner, Some(PlayerId::new(1)));
    assert_eq!(state.win_reason, Some(WinReason::FieldWipe));
}

#[test]
fn deckout_ends_the_game_before_any_action() {
    // Five cards exactly cover the opening hand; the turn-one draw finds
    // the pile empty and the opener loses on the spot.
    let mut engine = GameEngine::with_seed(
        PlayerConfig::human("P1"),
        PlayerConfig::human("P2"),
        uniform_deck(100, 5, Element::Fire, 30, 10, 1),
        uniform_deck(200, 12, Element::Water, 30, 10, 1),
        7,
    );
    quiet(&mut engine);

    assert!(engine.is_game_over());
    let state = engine.game_state();
    assert_eq!(state.winner, Some(PlayerId::new(1)));
    assert_eq!(state.win_reason, Some(WinReason::DeckOut));

    // Nothing is accepted after the terminal state.
    assert!(!engine.execute_action(&GameAction::EndTurn {
        player_id: PlayerId::new(0),
    }));
}

#[test]
fn auto_end_turn_fires_energy_callback_exactly_once() {
    let mut engine = GameEngine::with_seed(
        PlayerConfig::human("P1"),
        PlayerConfig::human("P2"),
        uniform_deck(100, 12, Element::Fire, 30, 10, 1),
        uniform_deck(200, 12, Element::Water, 30, 10, 1),
        7,
    );
    quiet(&mut engine);

    // Turn 1: P1 develops. Turn 2: P2 develops.
    play_first_monster(&mut engine);
    end_turn(&mut engine);
    let defender = play_first_monster(&mut engine);
    end_turn(&mut engine);

    // Register after construction so only the upcoming transition counts.
    let gains: Rc<RefCell<Vec<(PlayerId, u32)>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&gains);
    engine.set_on_energy_gain(Box::new(move |player_id, amount| {
        sink.borrow_mut().push((player_id, amount));
    }));

    // Turn 3: P1 attacks; with one energy left and the lone attacker spent,
    // the engine must end the turn and start P2's within the same call.
    let state = engine.game_state();
    assert_eq!(state.turn_number, 3);
    let attacker = state.players[0].field[0].id;
    let energy_before = state.players[0].energy;

    assert!(engine.execute_action(&GameAction::Attack {
        player_id: PlayerId::new(0),
        card_id: attacker,
        target_card_id: Some(defender),
        attack_name: "zap".to_string(),
    }));

    let state = engine.game_state();
    assert_eq!(state.turn_number, 4);
    assert_eq!(state.current_player_idx, 1);
    assert_eq!(state.phase, Phase::Main);
    assert!(state.attacked_this_turn.is_empty());

    // Energy was deducted exactly once on the attacker's side.
    assert_eq!(state.players[0].energy, energy_before - 1);

    // Water resists fire: 10 base - 20 affinity clamps to zero damage.
    assert_eq!(state.players[1].field[0].hp, 30);

    // Exactly one callback, for the human player whose turn just started.
    let gains = gains.borrow();
    assert_eq!(gains.as_slice(), &[(PlayerId::new(1), 1)]);
}

#[test]
fn a_card_attacks_at_most_once_per_turn() {
    let mut engine = GameEngine::with_seed(
        PlayerConfig::human("P1"),
        PlayerConfig::human("P2"),
        uniform_deck(100, 12, Element::Fire, 30, 10, 1),
        uniform_deck(200, 12, Element::Water, 30, 10, 1),
        7,
    );
    quiet(&mut engine);

    // P1 fields two monsters so the first attack does not auto-end the turn.
    let first = play_first_monster(&mut engine);
    play_first_monster(&mut engine);
    end_turn(&mut engine);
    let defender = play_first_monster(&mut engine);
    end_turn(&mut engine);

    let attack = |card_id: CardId| GameAction::Attack {
        player_id: PlayerId::new(0),
        card_id,
        target_card_id: Some(defender),
        attack_name: "zap".to_string(),
    };

    assert!(engine.execute_action(&attack(first)));
    let state = engine.game_state();
    assert_eq!(state.turn_number, 3, "second monster can still attack");
    assert!(state.has_attacked(first));

    let before = serde_json::to_string(&engine.game_state()).unwrap();
    assert!(!engine.execute_action(&attack(first)));
    let after = serde_json::to_string(&engine.game_state()).unwrap();
    assert_eq!(before, after, "rejected action must not touch state");
}

#[test]
fn rejected_attack_leaves_no_partial_writes() {
    // Attacks cost 5: unaffordable on early turns.
    let mut engine = GameEngine::with_seed(
        PlayerConfig::human("P1"),
        PlayerConfig::human("P2"),
        uniform_deck(100, 12, Element::Fire, 30, 10, 5),
        uniform_deck(200, 12, Element::Water, 30, 10, 5),
        7,
    );
    quiet(&mut engine);

    let attacker = play_first_monster(&mut engine);
    end_turn(&mut engine);
    let defender = play_first_monster(&mut engine);
    end_turn(&mut engine);

    let before = serde_json::to_string(&engine.game_state()).unwrap();
    assert!(!engine.execute_action(&GameAction::Attack {
        player_id: PlayerId::new(0),
        card_id: attacker,
        target_card_id: Some(defender),
        attack_name: "zap".to_string(),
    }));
    let after = serde_json::to_string(&engine.game_state()).unwrap();
    assert_eq!(before, after);

    // Unknown attack names are rejections, not panics.
    assert!(!engine.execute_action(&GameAction::Attack {
        player_id: PlayerId::new(0),
        card_id: attacker,
        target_card_id: Some(defender),
        attack_name: "nonexistent".to_string(),
    }));
}

#[test]
fn affinity_advantage_kills_faster_and_awards_the_kill_point() {
    // Earth attacker vs water defender: 20 base + 20 affinity = 40,
    // enough to one-shot a 40 hp defender.
    let mut engine = GameEngine::with_seed(
        PlayerConfig::human("P1"),
        PlayerConfig::human("P2"),
        uniform_deck(100, 12, Element::Earth, 40, 20, 2),
        uniform_deck(200, 12, Element::Water, 40, 20, 2),
        7,
    );
    quiet(&mut engine);

    play_first_monster(&mut engine);
    end_turn(&mut engine);
    let defender = play_first_monster(&mut engine);
    end_turn(&mut engine);

    let state = engine.game_state();
    let attacker = state.players[0].field[0].id;
    assert!(engine.execute_action(&GameAction::Attack {
        player_id: PlayerId::new(0),
        card_id: attacker,
        target_card_id: Some(defender),
        attack_name: "zap".to_string(),
    }));

    let state = engine.game_state();
    assert_eq!(state.players[0].points, 1, "kill awards a point");
    assert!(
        state.players[1].field.is_empty() || state.is_game_over,
        "dead defender leaves the field"
    );
}

#[test]
fn ai_prefers_the_lethal_attack_through_the_engine() {
    let mut engine = GameEngine::with_seed(
        PlayerConfig::ai("P1"),
        PlayerConfig::ai("P2"),
        uniform_deck(100, 12, Element::Earth, 40, 20, 2),
        uniform_deck(200, 12, Element::Water, 40, 20, 2),
        7,
    );
    quiet(&mut engine);

    play_first_monster(&mut engine);
    end_turn(&mut engine);
    let defender = play_first_monster(&mut engine);
    end_turn(&mut engine);

    // Turn 3, P1 has 2 energy: the earth-vs-water attack is lethal and must
    // outrank every play/retire alternative.
    let decision = AiEngine::make_decision(&engine.game_state());
    match decision.action {
        GameAction::Attack {
            target_card_id, ..
        } => assert_eq!(target_card_id, Some(defender)),
        other => panic!("expected a lethal attack, got {other:?}"),
    }
    assert!(engine.execute_action(&decision.action));
    assert_eq!(engine.game_state().players[0].points, 1);
}

#[test]
fn ai_vs_ai_demo_game_is_deterministic_and_terminates() {
    let run = |seed: u64| {
        let mut loader = DeckLoader::new();
        let deck1 = loader.demo_deck(Element::Fire);
        let deck2 = loader.demo_deck(Element::Water);
        let mut engine = GameEngine::with_seed(
            PlayerConfig::ai("P1"),
            PlayerConfig::ai("P2"),
            deck1,
            deck2,
            seed,
        );
        quiet(&mut engine);

        while !engine.is_game_over() {
            let state = engine.game_state();
            assert!(state.turn_number <= 500, "game must terminate");
            let decision = AiEngine::make_decision(&state);
            if !engine.execute_action(&decision.action) {
                let player_id = engine.current_player().id;
                assert!(engine.execute_action(&GameAction::EndTurn { player_id }));
            }
        }
        (engine.winner(), engine.game_state().turn_number)
    };

    let (winner_a, turns_a) = run(11);
    let (winner_b, turns_b) = run(11);
    assert!(winner_a.is_some());
    assert_eq!(winner_a, winner_b);
    assert_eq!(turns_a, turns_b);
}
