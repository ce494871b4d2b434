//! Battle flow tests.
//!
//! These drive whole battles through `BattleManager`:
//! - Player input and rejection rules
//! - Enemy turn pacing and the return to the player
//! - Terminal states, events and snapshots

use std::time::Duration;

use card_battle::ai::{EnemyAction, FixedPolicy};
use card_battle::battle::{BattleManager, BattleState, EnemyDescriptor, MonsterCatalog};
use card_battle::cards::{Card, CardState, CardType, Element};
use card_battle::combatant::{Combatant, Player};
use card_battle::core::{BattleConfig, CombatantId, GameRng, PlayerConfig};
use card_battle::events::BattleEvent;
use card_battle::status::{StatusKind, StatusParams};

const FRAME: Duration = Duration::from_millis(16);

fn player_with(config: &PlayerConfig, cards: &[Card]) -> Player {
    let mut rng = GameRng::new(0);
    let mut player = Player::new(config);
    player.set_deck(cards, &mut rng);
    player.draw_card(cards.len(), &mut rng);
    player
}

fn index_of(battle: &BattleManager, card_type: CardType) -> usize {
    battle
        .player()
        .hand()
        .iter()
        .position(|c| c.card_type() == card_type)
        .expect("card type in hand")
}

/// Run updates until the enemy turn is over (or a bound is hit).
fn finish_enemy_turn(battle: &mut BattleManager) {
    for _ in 0..1_000 {
        if battle.state() != BattleState::EnemyTurn {
            return;
        }
        battle.update(FRAME);
    }
    panic!("enemy turn did not finish");
}

// ============================================================================
// Player input
// ============================================================================

/// Test that a selection played at an enemy damages it and costs energy.
#[test]
fn test_select_and_target() {
    let cards = vec![Card::new(CardType::Attack, 4, Element::Fire); 3];
    let player = player_with(&PlayerConfig::default(), &cards);
    let mut battle = BattleManager::new(
        player,
        vec![EnemyDescriptor::new("Goblin", 20, 5)],
        &BattleConfig::default(),
        1,
    )
    .unwrap();

    assert!(battle.select_card(0));
    assert!(battle.select_card(1));
    assert_eq!(battle.player().energy(), 1);

    assert!(battle.target(CombatantId::Enemy(0)));
    assert_eq!(battle.enemies()[0].health(), 12);
    assert_eq!(battle.player().hand().len(), 1);
    assert_eq!(battle.player().discard_pile().len(), 2);
    assert_eq!(battle.player().energy(), 1);
}

/// Test that targeting with nothing selected does nothing.
#[test]
fn test_target_without_selection() {
    let player = player_with(&PlayerConfig::default(), &[]);
    let mut battle = BattleManager::new(
        player,
        vec![EnemyDescriptor::new("Goblin", 20, 5)],
        &BattleConfig::default(),
        1,
    )
    .unwrap();

    assert!(!battle.target(CombatantId::Enemy(0)));
    assert_eq!(battle.enemies()[0].health(), 20);
}

/// Test that a dead enemy is not a valid target.
#[test]
fn test_dead_enemy_is_invalid_target() {
    let cards = vec![Card::new(CardType::Attack, 15, Element::Fire); 3];
    let player = player_with(&PlayerConfig::default(), &cards);
    let mut battle = BattleManager::new(
        player,
        vec![
            EnemyDescriptor::new("Goblin", 10, 5),
            EnemyDescriptor::new("Orc", 10, 3),
        ],
        &BattleConfig::default(),
        1,
    )
    .unwrap();

    assert!(battle.play_card(0, CombatantId::Enemy(0)));
    assert!(!battle.enemies()[0].is_alive());

    assert!(battle.select_card(0));
    assert!(!battle.target(CombatantId::Enemy(0)));
    assert_eq!(battle.player().energy(), 2);
    assert!(battle.player().selected_indices().is_empty());
}

/// Test that a play the player cannot afford leaves the selection alone.
#[test]
fn test_rejected_play_keeps_selection() {
    let cards = vec![
        Card::new(CardType::Attack, 3, Element::Fire),
        Card::new(CardType::Attack, 3, Element::Fire).with_energy_cost(9),
    ];
    let player = player_with(&PlayerConfig::default(), &cards);
    let mut battle = BattleManager::new(
        player,
        vec![EnemyDescriptor::new("Goblin", 20, 5)],
        &BattleConfig::default(),
        1,
    )
    .unwrap();
    let cheap = battle
        .player()
        .hand()
        .iter()
        .position(|c| c.energy_cost() == 1)
        .unwrap();
    let pricey = 1 - cheap;

    assert!(battle.select_card(cheap));
    let before = (battle.player().energy(), battle.player().selected_indices().to_vec());

    assert!(!battle.play_card(pricey, CombatantId::Enemy(0)));
    let after = (battle.player().energy(), battle.player().selected_indices().to_vec());

    assert_eq!(before, (2, vec![cheap]));
    assert_eq!(after, before);
    assert_eq!(battle.enemies()[0].health(), 20);
}

/// Test that a play at an invalid target restores the earlier selection.
#[test]
fn test_play_at_invalid_target_keeps_selection() {
    let cards = vec![
        Card::new(CardType::Defense, 2, Element::Earth),
        Card::new(CardType::Attack, 3, Element::Fire),
    ];
    let player = player_with(&PlayerConfig::default(), &cards);
    let mut battle = BattleManager::new(
        player,
        vec![EnemyDescriptor::new("Goblin", 20, 5)],
        &BattleConfig::default(),
        1,
    )
    .unwrap();
    let defense = index_of(&battle, CardType::Defense);
    let attack = index_of(&battle, CardType::Attack);

    assert!(battle.select_card(defense));
    assert!(!battle.play_card(attack, CombatantId::Player));

    assert_eq!(battle.player().selected_indices(), &[defense]);
    assert_eq!(battle.player().energy(), 2);
    assert_eq!(battle.player().hand().len(), 2);
}

/// Test that a card used up in play lands exhausted in the discard pile.
#[test]
fn test_exhausted_card_discarded() {
    let card = Card::new(CardType::Defense, 1, Element::Earth).with_max_uses(1);
    let player = player_with(&PlayerConfig::default(), &[card]);
    let mut battle = BattleManager::new(
        player,
        vec![EnemyDescriptor::new("Goblin", 10, 5)],
        &BattleConfig::default(),
        1,
    )
    .unwrap();

    assert!(battle.play_card(0, CombatantId::Player));
    assert_eq!(battle.player().discard_pile()[0].state(), CardState::Exhausted);
    assert!(battle.player().hand().is_empty());
    assert!(!battle.select_card(0));
    assert_eq!(battle.player().shield(), 1);
}

/// Test that a mulligan charges the configured energy.
#[test]
fn test_reshuffle_hand_costs_energy() {
    let config = BattleConfig::default().with_reshuffle_cost(2);
    let mut battle = BattleManager::with_new_player(
        &config,
        MonsterCatalog::standard().encounter(&["orc"], 1).unwrap(),
        None,
        17,
    )
    .unwrap();

    assert!(battle.reshuffle_hand());
    assert_eq!(battle.player().energy(), 1);
    assert_eq!(battle.player().hand().len(), 5);
    assert!(!battle.reshuffle_hand());
}

// ============================================================================
// Turn flow
// ============================================================================

/// Test a full round: enemy acts, control returns with energy refilled.
#[test]
fn test_round_trip() {
    let cards = vec![Card::new(CardType::Attack, 2, Element::Fire); 5];
    let player = player_with(&PlayerConfig::default(), &cards);
    let mut battle = BattleManager::new(
        player,
        vec![
            EnemyDescriptor::new("Goblin", 20, 5),
            EnemyDescriptor::new("Orc", 20, 3),
        ],
        &BattleConfig::default(),
        1,
    )
    .unwrap()
    .with_policy(FixedPolicy(EnemyAction::Attack));

    battle.play_card(0, CombatantId::Enemy(0));
    assert_eq!(battle.player().energy(), 2);

    assert!(battle.end_turn());
    assert_eq!(battle.state(), BattleState::EnemyTurn);
    finish_enemy_turn(&mut battle);

    assert_eq!(battle.state(), BattleState::PlayerTurn);
    assert_eq!(battle.player().health(), 92);
    assert_eq!(battle.player().energy(), 3);

    let events = battle.drain_events();
    let acted: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            BattleEvent::EnemyActed { enemy, .. } => Some(*enemy),
            _ => None,
        })
        .collect();
    assert_eq!(acted, vec![CombatantId::Enemy(0), CombatantId::Enemy(1)]);
}

/// Test that the player draws on each new turn when configured.
#[test]
fn test_turn_draw() {
    let cards = vec![Card::new(CardType::Defense, 1, Element::Earth); 8];
    let mut rng = GameRng::new(0);
    let mut player = Player::new(&PlayerConfig::default());
    player.set_deck(&cards, &mut rng);
    player.draw_card(3, &mut rng);

    let config = BattleConfig::default().with_turn_draw(2);
    let mut battle = BattleManager::new(
        player,
        vec![EnemyDescriptor::new("Goblin", 20, 1)],
        &config,
        1,
    )
    .unwrap()
    .with_policy(FixedPolicy(EnemyAction::Defend));

    battle.end_turn();
    finish_enemy_turn(&mut battle);

    assert_eq!(battle.player().hand().len(), 5);
}

/// Test that an unused dodge does not carry over into the next enemy turn.
#[test]
fn test_unused_dodge_expires() {
    let cards = vec![Card::new(CardType::Dodge, 0, Element::Air); 2];
    let player = player_with(&PlayerConfig::default(), &cards);
    let mut battle = BattleManager::new(
        player,
        vec![EnemyDescriptor::new("Goblin", 20, 1)],
        &BattleConfig::default(),
        1,
    )
    .unwrap()
    .with_policy(FixedPolicy(EnemyAction::Defend));

    assert!(battle.play_card(0, CombatantId::Player));
    assert!(battle.player().has_status(StatusKind::Dodge));

    battle.end_turn();
    finish_enemy_turn(&mut battle);

    assert!(!battle.player().has_status(StatusKind::Dodge));
}

/// Test that a timed status on an enemy counts down once per enemy turn.
#[test]
fn test_status_counts_down_across_turns() {
    let card = Card::new(CardType::Attack, 0, Element::Fire)
        .with_status_kind(StatusKind::Weakness, StatusParams::new().with_duration(2));
    let player = player_with(&PlayerConfig::default(), &[card]);
    let mut battle = BattleManager::new(
        player,
        vec![EnemyDescriptor::new("Goblin", 50, 1)],
        &BattleConfig::default(),
        1,
    )
    .unwrap()
    .with_policy(FixedPolicy(EnemyAction::Defend));

    assert!(battle.play_card(0, CombatantId::Enemy(0)));
    assert!(battle.enemies()[0].has_status(StatusKind::Weakness));

    battle.end_turn();
    finish_enemy_turn(&mut battle);
    assert_eq!(
        battle.enemies()[0].status(StatusKind::Weakness).unwrap().duration,
        Some(1)
    );

    battle.end_turn();
    finish_enemy_turn(&mut battle);
    assert!(!battle.enemies()[0].has_status(StatusKind::Weakness));
}

// ============================================================================
// Terminal states
// ============================================================================

/// Test that a battle with no enemies ends in victory on end turn.
#[test]
fn test_empty_encounter_is_victory() {
    let player = player_with(&PlayerConfig::default(), &[]);
    let mut battle = BattleManager::new(player, Vec::new(), &BattleConfig::default(), 1).unwrap();

    assert!(!battle.end_turn());
    assert_eq!(battle.state(), BattleState::Victory);
    assert!(!battle
        .drain_events()
        .iter()
        .any(|e| *e == BattleEvent::TurnStarted { state: BattleState::EnemyTurn }));
}

/// Test that the player losing all health ends in defeat and freezes the battle.
#[test]
fn test_defeat_is_absorbing() {
    let player = player_with(&PlayerConfig::default().with_max_health(10), &[]);
    let mut battle = BattleManager::new(
        player,
        vec![EnemyDescriptor::new("Ogre", 50, 25)],
        &BattleConfig::default(),
        1,
    )
    .unwrap()
    .with_policy(FixedPolicy(EnemyAction::Attack));

    battle.end_turn();
    finish_enemy_turn(&mut battle);

    assert_eq!(battle.state(), BattleState::Defeat);
    assert_eq!(battle.player().health(), 0);
    assert!(battle.input_locked());
    assert!(!battle.end_turn());

    let enemy_health = battle.enemies()[0].health();
    for _ in 0..100 {
        battle.update(Duration::from_secs(1));
    }
    assert_eq!(battle.state(), BattleState::Defeat);
    assert_eq!(battle.enemies()[0].health(), enemy_health);
}

/// Test that a won battle returns the player with its deck.
#[test]
fn test_victory_and_dismissal() {
    let cards = vec![Card::new(CardType::Attack, 30, Element::Fire); 2];
    let player = player_with(&PlayerConfig::default(), &cards);
    let mut battle = BattleManager::new(
        player,
        vec![EnemyDescriptor::new("Goblin", 10, 5)],
        &BattleConfig::default(),
        1,
    )
    .unwrap();

    assert!(battle.play_card(0, CombatantId::Enemy(0)));
    assert_eq!(battle.state(), BattleState::Victory);
    assert!(!battle.select_card(0));

    let player = battle.into_player();
    assert_eq!(player.hand().len() + player.discard_pile().len(), 2);
}

// ============================================================================
// Determinism and presentation
// ============================================================================

fn scripted_battle(seed: u64) -> Vec<BattleEvent> {
    let config = BattleConfig::default();
    let enemies = MonsterCatalog::standard()
        .encounter(&["goblin", "orc"], 2)
        .unwrap();
    let mut battle = BattleManager::with_new_player(&config, enemies, None, seed).unwrap();

    for _ in 0..20 {
        if battle.is_over() {
            break;
        }
        let attack = battle
            .player()
            .hand()
            .iter()
            .position(|c| c.card_type() == CardType::Attack && c.state() == CardState::Idle);
        let target = battle
            .enemies()
            .iter()
            .find(|e| e.is_alive())
            .map(|e| e.id());
        if let (Some(index), Some(target)) = (attack, target) {
            battle.play_card(index, target);
        }
        battle.end_turn();
        finish_enemy_turn(&mut battle);
    }
    battle.drain_events()
}

/// Test that the same seed replays the same battle.
#[test]
fn test_same_seed_same_battle() {
    assert_eq!(scripted_battle(2024), scripted_battle(2024));
}

/// Test the per-frame snapshot.
#[test]
fn test_snapshot() {
    let cards = vec![Card::new(CardType::Attack, 3, Element::Fire); 2];
    let player = player_with(&PlayerConfig::default(), &cards);
    let mut battle = BattleManager::new(
        player,
        vec![EnemyDescriptor::new("Goblin", 10, 5)],
        &BattleConfig::default(),
        1,
    )
    .unwrap();
    battle.select_card(1);

    let snapshot = battle.snapshot();
    assert_eq!(snapshot.state, BattleState::PlayerTurn);
    assert_eq!(snapshot.player.health, 100);
    assert_eq!(snapshot.enemies.len(), 1);
    assert_eq!(snapshot.enemies[0].name, "Goblin");
    assert_eq!(snapshot.hand.len(), 2);
    assert_eq!(snapshot.selected, vec![1]);
    assert_eq!(snapshot.energy, 2);
    assert!(!snapshot.input_locked);

    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: card_battle::battle::BattleSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);
}

/// Test that enemy selection uses the index of the card type found.
#[test]
fn test_mixed_hand_play() {
    let cards = vec![
        Card::new(CardType::Attack, 5, Element::Fire),
        Card::new(CardType::Defense, 2, Element::Earth),
        Card::new(CardType::Buff, 3, Element::Fire),
    ];
    let player = player_with(&PlayerConfig::default(), &cards);
    let mut battle = BattleManager::new(
        player,
        vec![EnemyDescriptor::new("Goblin", 30, 5)],
        &BattleConfig::default(),
        1,
    )
    .unwrap();

    let buff = index_of(&battle, CardType::Buff);
    assert!(battle.play_card(buff, CombatantId::Player));

    let attack = index_of(&battle, CardType::Attack);
    assert!(battle.play_card(attack, CombatantId::Enemy(0)));
    assert_eq!(battle.enemies()[0].health(), 22);

    let defense = index_of(&battle, CardType::Defense);
    assert!(battle.play_card(defense, CombatantId::Enemy(0)));
    assert_eq!(battle.player().shield(), 2);
    assert_eq!(battle.player().energy(), 0);
}
