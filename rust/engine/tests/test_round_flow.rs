use koikoi_engine::cards::CardId;
use koikoi_engine::deck::Deck;
use koikoi_engine::errors::GameError;
use koikoi_engine::player::{PlayerId, SeatConfig};
use koikoi_engine::round::{EndReason, KoikoiDecision, Move, RoundConfig, RoundEvent, RoundState};
use koikoi_engine::yaku::YakuKey;

fn id(slug: &str) -> CardId {
    slug.parse().expect("known slug")
}

/// Interleaves two hands the way the deal hands them out, then the field,
/// then the first draws.
fn scripted_deck(a: [&str; 8], b: [&str; 8], field: [&str; 8], draws: &[&str]) -> Deck {
    let mut order = Vec::new();
    for i in 0..8 {
        order.push(id(a[i]));
        order.push(id(b[i]));
    }
    order.extend(field.iter().map(|s| id(s)));
    order.extend(draws.iter().map(|s| id(s)));
    Deck::stacked(&order)
}

fn hanami_round() -> RoundState {
    RoundState::with_deck_factory(
        RoundConfig {
            seed: Some(1),
            players: vec![SeatConfig::new("a", "Alice"), SeatConfig::new("b", "Bob")],
        },
        |_| {
            scripted_deck(
                [
                    "03-light-curtain",
                    "01-chaff-a",
                    "02-chaff-a",
                    "04-chaff-a",
                    "05-chaff-a",
                    "06-chaff-a",
                    "07-chaff-a",
                    "10-chaff-a",
                ],
                [
                    "01-chaff-b",
                    "02-chaff-b",
                    "04-chaff-b",
                    "05-chaff-b",
                    "06-chaff-b",
                    "07-chaff-b",
                    "10-chaff-b",
                    "08-light-moon",
                ],
                [
                    "03-chaff-a",
                    "09-chaff-a",
                    "08-chaff-a",
                    "08-chaff-b",
                    "11-ribbon",
                    "11-chaff-lightning",
                    "12-chaff-b",
                    "12-chaff-c",
                ],
                &["09-animal-sake-cup", "12-chaff-a"],
            )
        },
    )
    .expect("scripted deal has no quads")
}

fn a() -> PlayerId {
    PlayerId::from("a")
}

fn b() -> PlayerId {
    PlayerId::from("b")
}

fn play_curtain(round: &mut RoundState) {
    let mv = Move {
        player_id: a(),
        hand_card_id: id("03-light-curtain"),
        field_card_ids: vec![],
    };
    round.apply_move(&mv).expect("single match captures without selection");
}

#[test]
fn unmatched_cards_yield_one_move_and_matched_cards_one_per_target() {
    let mut round = hanami_round();
    assert_eq!(round.redeal_count(), 0);

    let moves = round.available_moves(&a()).unwrap();
    assert_eq!(moves.len(), 8);
    let chaff = moves
        .iter()
        .find(|m| m.hand_card_id == id("01-chaff-a"))
        .unwrap();
    assert!(chaff.field_card_ids.is_empty());

    let b_moves = round.available_moves(&b()).unwrap();
    let moon_moves: Vec<&Move> = b_moves
        .iter()
        .filter(|m| m.hand_card_id == id("08-light-moon"))
        .collect();
    assert_eq!(moon_moves.len(), 2);
    assert_ne!(moon_moves[0].field_card_ids, moon_moves[1].field_card_ids);
}

#[test]
fn forming_a_yaku_opens_one_prompt() {
    let mut round = hanami_round();
    play_curtain(&mut round);

    let pending = round.pending_koikoi().cloned().expect("hanami formed");
    assert_eq!(pending.player_id, a());
    assert_eq!(pending.new_yaku.len(), 1);
    assert_eq!(pending.new_yaku[0].key, YakuKey::HanamiSake);
    assert_eq!(pending.score.base, 5);

    // the prompt blocks the turn
    assert_eq!(round.current_player_id(), Some(&a()));
    let again = Move {
        player_id: a(),
        hand_card_id: id("01-chaff-a"),
        field_card_ids: vec![],
    };
    assert_eq!(
        round.apply_move(&again).unwrap_err(),
        GameError::KoikoiPending(a())
    );
    assert!(matches!(
        round.handle_koikoi_decision(&b(), KoikoiDecision::Continue),
        Err(GameError::NoKoikoiPending(_))
    ));
}

#[test]
fn stop_ends_the_round_for_the_caller() {
    let mut round = hanami_round();
    play_curtain(&mut round);

    let outcome = round
        .handle_koikoi_decision(&a(), KoikoiDecision::Stop)
        .unwrap();
    let result = outcome.result.expect("stop finalizes");
    assert_eq!(result.reason, EndReason::KoikoiStop);
    assert_eq!(result.winner_id, Some(a()));
    assert_eq!(result.points_for(&a()), 5);
    assert_eq!(result.points_for(&b()), 0);

    let snap = round.snapshot();
    assert!(snap.is_complete);
    assert_eq!(snap.current_player_id, None);
    assert_eq!(snap.card_count(), 48);

    let late = Move {
        player_id: b(),
        hand_card_id: id("01-chaff-b"),
        field_card_ids: vec![],
    };
    assert_eq!(round.apply_move(&late).unwrap_err(), GameError::RoundComplete);
}

#[test]
fn continue_raises_level_and_passes_the_turn() {
    let mut round = hanami_round();
    play_curtain(&mut round);

    let outcome = round
        .handle_koikoi_decision(&a(), KoikoiDecision::Continue)
        .unwrap();
    assert_eq!(outcome.level, 1);
    assert!(outcome.result.is_none());
    assert!(round.pending_koikoi().is_none());

    let status = round.player_status(&a()).unwrap();
    assert_eq!(status.koikoi_level, 1);
    assert!(status.koikoi_declared);
    assert!(status.koikoi_locked);
    assert_eq!(status.total_points, 10);
    assert_eq!(round.current_player_id(), Some(&b()));
    assert!(matches!(
        round.history().last(),
        Some(RoundEvent::KoikoiDecision {
            decision: KoikoiDecision::Continue,
            level: 1,
            ..
        })
    ));
}

#[test]
fn ambiguous_hand_capture_needs_a_selection_and_drawn_card_takes_first_match() {
    let mut round = hanami_round();
    play_curtain(&mut round);
    round
        .handle_koikoi_decision(&a(), KoikoiDecision::Continue)
        .unwrap();

    let before = round.snapshot();
    let unselected = Move {
        player_id: b(),
        hand_card_id: id("08-light-moon"),
        field_card_ids: vec![],
    };
    assert!(matches!(
        round.apply_move(&unselected),
        Err(GameError::FieldSelectionRequired { matches: 2, .. })
    ));
    let wrong = Move {
        field_card_ids: vec![id("12-chaff-b")],
        ..unselected.clone()
    };
    assert!(matches!(
        round.apply_move(&wrong),
        Err(GameError::InvalidFieldSelection { .. })
    ));
    assert_eq!(round.snapshot(), before);

    let chosen = Move {
        field_card_ids: vec![id("08-chaff-b")],
        ..unselected
    };
    let outcome = round.apply_move(&chosen).unwrap();
    assert_eq!(
        outcome.captured_from_hand,
        vec![id("08-light-moon"), id("08-chaff-b")]
    );
    assert_eq!(outcome.drawn_card_id, Some(id("12-chaff-a")));
    assert_eq!(
        outcome.captured_from_deck,
        vec![id("12-chaff-a"), id("12-chaff-b")]
    );
    let field: Vec<CardId> = round.field().cards().iter().map(|c| c.id).collect();
    assert!(field.contains(&id("08-chaff-a")));
    assert!(field.contains(&id("12-chaff-c")));
}

#[test]
fn turn_passes_in_seating_order() {
    let mut round = hanami_round();
    let mv = Move {
        player_id: a(),
        hand_card_id: id("01-chaff-a"),
        field_card_ids: vec![],
    };
    let outcome = round.apply_move(&mv).unwrap();
    assert!(outcome.captured_from_hand.is_empty());
    assert!(!outcome.koikoi_prompt);
    assert_eq!(round.current_player_id(), Some(&b()));
    assert_eq!(round.turn_count(), 1);
}

/// Always taking the first listed move, b's last forced draw (12-chaff-c)
/// completes Paulownia on the 24th and final turn. Undealt cards follow in
/// catalog order.
fn last_turn_yaku_round() -> RoundState {
    RoundState::with_deck_factory(
        RoundConfig {
            seed: Some(2),
            players: vec![SeatConfig::new("a", "Alice"), SeatConfig::new("b", "Bob")],
        },
        |_| {
            scripted_deck(
                [
                    "06-chaff-b",
                    "01-chaff-b",
                    "12-chaff-b",
                    "08-animal-geese",
                    "05-chaff-b",
                    "02-chaff-a",
                    "05-animal-bridge",
                    "09-ribbon-blue",
                ],
                [
                    "04-chaff-b",
                    "08-chaff-b",
                    "06-ribbon-blue",
                    "03-ribbon-poetry",
                    "06-animal-butterfly",
                    "04-animal-cuckoo",
                    "11-animal-swallow",
                    "07-chaff-b",
                ],
                [
                    "01-chaff-a",
                    "05-chaff-a",
                    "10-animal-deer",
                    "09-animal-sake-cup",
                    "05-ribbon",
                    "10-chaff-a",
                    "10-chaff-b",
                    "08-light-moon",
                ],
                &[],
            )
        },
    )
    .expect("scripted deal has no quads")
}

fn out_of_cards(round: &RoundState) -> bool {
    round.deck_remaining() == 0
        && round
            .player_ids()
            .iter()
            .all(|p| round.player(p).unwrap().hand().is_empty())
}

#[test]
fn continue_on_the_final_turn_ends_the_round_naturally() {
    let mut round = last_turn_yaku_round();
    assert_eq!(round.redeal_count(), 0);

    let mut guard = 0;
    let pending = loop {
        guard += 1;
        assert!(guard < 100, "round did not reach its last turn");
        assert!(!round.is_complete(), "round ended without a last-turn prompt");
        if let Some(pending) = round.pending_koikoi().cloned() {
            if out_of_cards(&round) {
                break pending;
            }
            round
                .handle_koikoi_decision(&pending.player_id, KoikoiDecision::Continue)
                .unwrap();
            continue;
        }
        let current = round.current_player_id().cloned().expect("someone to act");
        let moves = round.available_moves(&current).unwrap();
        round.apply_move(&moves[0]).unwrap();
    };

    assert_eq!(pending.player_id, b());
    assert_eq!(round.turn_count(), 24);
    assert!(pending.new_yaku.iter().any(|y| y.key == YakuKey::MonthQuad));
    assert_eq!(round.player_status(&b()).unwrap().koikoi_level, 0);

    let outcome = round
        .handle_koikoi_decision(&b(), KoikoiDecision::Continue)
        .unwrap();
    assert_eq!(outcome.level, 1);
    let result = outcome.result.expect("no turn is left to play");
    assert_eq!(result.reason, EndReason::NaturalComplete);
    assert_eq!(round.player_status(&b()).unwrap().koikoi_level, 1);
    assert_eq!(round.current_player_id(), None);
    assert!(round.is_complete());
}
