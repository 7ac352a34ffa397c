//! Full game lifecycle tests.
//!
//! These walk complete games through negotiation, decision, and resolution
//! and verify the phase machine, the payoff bookkeeping, and the benign
//! no-effect behavior of out-of-phase or out-of-game operations.

use split_or_steal::{
    Choice, ConfigOverrides, GameId, GameStore, Outcome, ParticipantId, ParticipantProfile, Phase,
    Rejection, RoomId,
};

fn store() -> GameStore {
    GameStore::new(
        ConfigOverrides::new()
            .with_buy_in(10)
            .with_chat_rounds(2)
            .resolve(),
    )
}

fn alice() -> ParticipantId {
    ParticipantId::new("a-1")
}

fn bob() -> ParticipantId {
    ParticipantId::new("b-1")
}

/// Create a game and exchange messages until the decision phase opens.
fn negotiated_game(store: &mut GameStore) -> GameId {
    let game = store
        .create_game(
            ParticipantProfile::new("a-1", "Alice"),
            ParticipantProfile::new("b-1", "Bob"),
            RoomId::new("room-9"),
        )
        .unwrap();

    for (speaker, name, text) in [
        (alice(), "Alice", "let's both split"),
        (bob(), "Bob", "sounds fair"),
        (alice(), "Alice", "promise?"),
        (bob(), "Bob", "promise"),
    ] {
        store.add_chat_message(game.id, speaker, name, text).unwrap();
    }

    game.id
}

/// A new game has pot = 2 × buy-in and starts negotiating.
#[test]
fn test_creation_terms() {
    let mut store = store();
    let game = store
        .create_game(
            ParticipantProfile::new("a-1", "Alice"),
            ParticipantProfile::new("b-1", "Bob"),
            RoomId::new("room-9"),
        )
        .unwrap();

    assert_eq!(game.pot, 20);
    assert_eq!(game.buy_in, 10);
    assert_eq!(game.phase, Phase::Negotiating);
    assert_eq!(game.current_round(), 0);
}

/// The deciding transition fires at exactly the message that fills the
/// budget, never earlier.
#[test]
fn test_transition_at_exact_threshold() {
    let mut store = store();
    let game = store
        .create_game(
            ParticipantProfile::new("a-1", "Alice"),
            ParticipantProfile::new("b-1", "Bob"),
            RoomId::new("room-9"),
        )
        .unwrap();

    for i in 1..=3 {
        let updated = store
            .add_chat_message(game.id, alice(), "Alice", "...")
            .unwrap();
        assert_eq!(updated.phase, Phase::Negotiating, "message {i}");
    }

    let updated = store
        .add_chat_message(game.id, bob(), "Bob", "fourth")
        .unwrap();
    assert_eq!(updated.phase, Phase::Deciding);
    assert_eq!(updated.current_round(), 2);
}

/// Both split: the pot is shared evenly.
#[test]
fn test_both_split() {
    let mut store = store();
    let game = negotiated_game(&mut store);

    store.record_decision(game, &alice(), Choice::Split).unwrap();
    let resolved = store.record_decision(game, &bob(), Choice::Split).unwrap();

    assert_eq!(resolved.phase, Phase::Resolved);
    assert_eq!(resolved.a.payout, 10);
    assert_eq!(resolved.b.payout, 10);
    assert_eq!(store.completed_games()[0].outcome, Outcome::BothSplit);
}

/// One steals: the stealer takes the whole pot.
#[test]
fn test_one_steals() {
    let mut store = store();
    let game = negotiated_game(&mut store);

    store.record_decision(game, &alice(), Choice::Steal).unwrap();
    let resolved = store.record_decision(game, &bob(), Choice::Split).unwrap();

    assert_eq!(resolved.a.payout, 20);
    assert_eq!(resolved.b.payout, 0);
    assert_eq!(store.completed_games()[0].outcome, Outcome::ASteals);
}

/// Both steal: nobody is paid.
#[test]
fn test_both_steal() {
    let mut store = store();
    let game = negotiated_game(&mut store);

    store.record_decision(game, &alice(), Choice::Steal).unwrap();
    let resolved = store.record_decision(game, &bob(), Choice::Steal).unwrap();

    assert_eq!(resolved.a.payout, 0);
    assert_eq!(resolved.b.payout, 0);
    assert_eq!(store.completed_games()[0].outcome, Outcome::BothSteal);
}

/// Chat after negotiation closed leaves the record untouched.
#[test]
fn test_stray_chat_has_no_effect() {
    let mut store = store();
    let game = negotiated_game(&mut store);

    let before = store.game(game).unwrap().clone();
    let result = store.add_chat_message(game, alice(), "Alice", "wait, one more thing");

    assert!(matches!(result, Err(Rejection::WrongPhase { .. })));
    assert_eq!(store.game(game).unwrap(), &before);

    // And after resolution the game is gone entirely.
    store.record_decision(game, &alice(), Choice::Split).unwrap();
    store.record_decision(game, &bob(), Choice::Split).unwrap();
    let result = store.add_chat_message(game, alice(), "Alice", "hello?");
    assert_eq!(result, Err(Rejection::GameNotFound));
}

/// A decision from an unbound identity has no effect on either choice.
#[test]
fn test_stranger_decision_has_no_effect() {
    let mut store = store();
    let game = negotiated_game(&mut store);

    let result = store.record_decision(game, &ParticipantId::new("c-1"), Choice::Steal);
    assert_eq!(result, Err(Rejection::UnknownParticipant));

    let record = store.game(game).unwrap();
    assert!(record.a.choice.is_none());
    assert!(record.b.choice.is_none());
}

/// After resolution, neither identity has an active game and the completed
/// log holds exactly one matching entry.
#[test]
fn test_post_resolution_lookups() {
    let mut store = store();
    let game = negotiated_game(&mut store);

    store.record_decision(game, &alice(), Choice::Split).unwrap();
    store.record_decision(game, &bob(), Choice::Steal).unwrap();

    assert!(store.active_game_for(&alice()).is_none());
    assert!(store.active_game_for(&bob()).is_none());
    assert_eq!(store.active_games().count(), 0);

    let completed = store.completed_games();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].game_id, game);
    assert!(completed[0].involves(&alice()));
    assert!(completed[0].involves(&bob()));
    assert_eq!(completed[0].outcome, Outcome::BSteals);
}

/// Read-only lookups never change stored state.
#[test]
fn test_queries_are_idempotent() {
    let mut store = store();
    let game = negotiated_game(&mut store);

    let first = store.game(game).unwrap().clone();
    let _ = store.active_game_for(&alice());
    let _ = store.active_games().count();
    let _ = store.completed_games();
    let second = store.game(game).unwrap().clone();

    assert_eq!(first, second);
}

/// An identity freed by resolution can start a new game.
#[test]
fn test_identity_freed_after_resolution() {
    let mut store = store();
    let game = negotiated_game(&mut store);

    store.record_decision(game, &alice(), Choice::Split).unwrap();
    store.record_decision(game, &bob(), Choice::Split).unwrap();

    let rematch = store.create_game(
        ParticipantProfile::new("a-1", "Alice"),
        ParticipantProfile::new("b-1", "Bob"),
        RoomId::new("room-9"),
    );
    assert!(rematch.is_ok());
}
