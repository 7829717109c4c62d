use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::field::{Field, FieldSnapshot};
use crate::player::{PlayerId, PlayerSnapshot, PlayerState, SeatConfig};
use crate::random::default_seed;
use crate::score::{
    build_round_points, compute_player_score, KoikoiStanding, PlayerPoints, PlayerScore,
    ScoreEntry,
};
use crate::yaku::{evaluate, Yaku};

/// Cards dealt to each hand.
pub const HAND_SIZE: usize = 8;
/// Cards dealt face-up to the field.
pub const FIELD_SIZE: usize = 8;
/// Deals tried before giving up on a round.
pub const MAX_DEAL_ATTEMPTS: u32 = 12;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 5;

/// Playing one hand card, optionally naming the field card it captures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub player_id: PlayerId,
    pub hand_card_id: CardId,
    #[serde(default)]
    pub field_card_ids: Vec<CardId>,
}

impl Move {
    pub fn captures(&self) -> bool {
        !self.field_card_ids.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KoikoiDecision {
    Continue,
    Stop,
}

impl FromStr for KoikoiDecision {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continue" | "koikoi" => Ok(KoikoiDecision::Continue),
            "stop" => Ok(KoikoiDecision::Stop),
            other => Err(GameError::InvalidKoikoiDecision(other.to_string())),
        }
    }
}

impl fmt::Display for KoikoiDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KoikoiDecision::Continue => f.write_str("continue"),
            KoikoiDecision::Stop => f.write_str("stop"),
        }
    }
}

/// Open koikoi prompt. At most one exists at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingKoikoi {
    pub player_id: PlayerId,
    pub new_yaku: Vec<Yaku>,
    pub all_yaku: Vec<Yaku>,
    pub score: PlayerScore,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatus {
    pub player_id: PlayerId,
    pub koikoi_declared: bool,
    pub koikoi_level: u32,
    pub koikoi_locked: bool,
    pub total_points: u32,
    pub has_yaku: bool,
}

impl PlayerStatus {
    fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            koikoi_declared: false,
            koikoi_level: 0,
            koikoi_locked: false,
            total_points: 0,
            has_yaku: false,
        }
    }

    pub fn standing(&self) -> KoikoiStanding {
        KoikoiStanding {
            level: self.koikoi_level,
            declared: self.koikoi_declared,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerYaku {
    pub player_id: PlayerId,
    pub yaku: Vec<Yaku>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndReason {
    NaturalComplete,
    KoikoiStop,
}

/// Terminal outcome of a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub reason: EndReason,
    pub winner_id: Option<PlayerId>,
    pub points: Vec<PlayerPoints>,
    pub statuses: Vec<PlayerStatus>,
    pub yaku: Vec<PlayerYaku>,
}

impl RoundResult {
    pub fn points_for(&self, player_id: &PlayerId) -> u32 {
        self.points
            .iter()
            .find(|p| &p.player_id == player_id)
            .map_or(0, |p| p.points)
    }
}

/// What a single `apply_move` did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub player_id: PlayerId,
    pub turn: u32,
    pub hand_card_id: CardId,
    pub captured_from_hand: Vec<CardId>,
    pub drawn_card_id: Option<CardId>,
    pub captured_from_deck: Vec<CardId>,
    pub new_yaku: Vec<Yaku>,
    pub koikoi_prompt: bool,
    pub round_ended: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KoikoiOutcome {
    pub player_id: PlayerId,
    pub decision: KoikoiDecision,
    pub level: u32,
    pub result: Option<RoundResult>,
}

/// Append-only round log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RoundEvent {
    ForcedDraw {
        player_id: PlayerId,
        card_id: CardId,
    },
    Turn(TurnOutcome),
    KoikoiDecision {
        player_id: PlayerId,
        decision: KoikoiDecision,
        level: u32,
    },
}

#[derive(Debug, Clone)]
pub struct RoundConfig {
    /// `None` seeds from the wall clock.
    pub seed: Option<u32>,
    pub players: Vec<SeatConfig>,
}

/// Read-only projection of a round. Every field is an owned copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSnapshot {
    pub seed: u32,
    pub current_player_id: Option<PlayerId>,
    pub deck_remaining: usize,
    pub field: FieldSnapshot,
    pub players: Vec<PlayerSnapshot>,
    pub turn_count: u32,
    pub is_complete: bool,
    pub pending_koikoi: Option<PendingKoikoi>,
    pub player_status: Vec<PlayerStatus>,
    pub player_yaku: Vec<PlayerYaku>,
    pub round_result: Option<RoundResult>,
    pub redeal_count: u32,
}

impl RoundSnapshot {
    pub fn player(&self, id: &PlayerId) -> Option<&PlayerSnapshot> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Every card id visible in the snapshot plus the size of the draw pile.
    pub fn card_count(&self) -> usize {
        self.deck_remaining
            + self.field.cards.len()
            + self.field.discard.len()
            + self
                .players
                .iter()
                .map(|p| p.hand.len() + p.captured.len())
                .sum::<usize>()
    }
}

#[derive(Debug, Clone)]
struct Seat {
    state: PlayerState,
    status: PlayerStatus,
    yaku: Vec<Yaku>,
}

/// Turn-by-turn state machine for one round of Koi-Koi.
///
/// Constructed already dealt. Mutated only through [`RoundState::apply_move`]
/// and [`RoundState::handle_koikoi_decision`] (plus the forced draw inside
/// [`RoundState::available_moves`]); immutable once a result is set.
///
/// # Examples
///
/// ```
/// use koikoi_engine::player::SeatConfig;
/// use koikoi_engine::round::{RoundConfig, RoundState};
///
/// let mut round = RoundState::new(RoundConfig {
///     seed: Some(42),
///     players: vec![SeatConfig::new("player", "You"), SeatConfig::new("cpu", "CPU")],
/// })
/// .expect("deal");
///
/// let current = round.current_player_id().cloned().unwrap();
/// let moves = round.available_moves(&current).unwrap();
/// round.apply_move(&moves[0]).unwrap();
/// assert_eq!(round.turn_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RoundState {
    seed: u32,
    deck: Deck,
    seats: Vec<Seat>,
    field: Field,
    current_player_id: Option<PlayerId>,
    turn_count: u32,
    history: Vec<RoundEvent>,
    drawn_this_turn: Option<PlayerId>,
    pending_koikoi: Option<PendingKoikoi>,
    result: Option<RoundResult>,
    redeal_count: u32,
}

impl RoundState {
    pub fn new(config: RoundConfig) -> Result<Self, GameError> {
        Self::with_deck_factory(config, Deck::create)
    }

    /// Deals with decks produced by `factory`, called once per attempt with
    /// the base seed advanced by the attempt index.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidPlayerCount`] / [`GameError::DuplicatePlayer`] for bad seating
    /// - [`GameError::RedealLimitExceeded`] when every attempt deals a quad
    pub fn with_deck_factory<F>(config: RoundConfig, mut factory: F) -> Result<Self, GameError>
    where
        F: FnMut(u32) -> Deck,
    {
        validate_seating(&config.players)?;
        let seed = config.seed.unwrap_or_else(default_seed);

        for attempt in 0..MAX_DEAL_ATTEMPTS {
            let mut deck = factory(seed.wrapping_add(attempt));
            let mut seats: Vec<Seat> = config
                .players
                .iter()
                .map(|p| Seat {
                    state: PlayerState::new(p),
                    status: PlayerStatus::new(p.id.clone()),
                    yaku: Vec::new(),
                })
                .collect();
            let mut field = Field::new();

            for _ in 0..HAND_SIZE {
                for seat in seats.iter_mut() {
                    if let Some(card) = deck.draw() {
                        seat.state.receive_card(card);
                    }
                }
            }
            for _ in 0..FIELD_SIZE {
                if let Some(card) = deck.draw() {
                    field.add_card(card);
                }
            }

            let quad = has_month_quad(field.cards())
                || seats.iter().any(|s| has_month_quad(s.state.hand()));
            if quad {
                tracing::debug!(attempt, seed, "initial deal rejected: four cards of one month");
                continue;
            }

            let current = seats.first().map(|s| s.state.id().clone());
            return Ok(Self {
                seed,
                deck,
                seats,
                field,
                current_player_id: current,
                turn_count: 0,
                history: Vec::new(),
                drawn_this_turn: None,
                pending_koikoi: None,
                result: None,
                redeal_count: attempt,
            });
        }

        tracing::error!(seed, attempts = MAX_DEAL_ATTEMPTS, "redeal attempts exhausted");
        Err(GameError::RedealLimitExceeded {
            attempts: MAX_DEAL_ATTEMPTS,
        })
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn redeal_count(&self) -> u32 {
        self.redeal_count
    }

    pub fn current_player_id(&self) -> Option<&PlayerId> {
        self.current_player_id.as_ref()
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn history(&self) -> &[RoundEvent] {
        &self.history
    }

    pub fn pending_koikoi(&self) -> Option<&PendingKoikoi> {
        self.pending_koikoi.as_ref()
    }

    pub fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }

    /// Seating order.
    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.seats.iter().map(|s| s.state.id().clone()).collect()
    }

    pub fn player(&self, id: &PlayerId) -> Result<&PlayerState, GameError> {
        self.seat(id).map(|s| &s.state)
    }

    pub fn player_status(&self, id: &PlayerId) -> Result<&PlayerStatus, GameError> {
        self.seat(id).map(|s| &s.status)
    }

    pub fn player_yaku(&self, id: &PlayerId) -> Result<&[Yaku], GameError> {
        self.seat(id).map(|s| s.yaku.as_slice())
    }

    fn seat_index(&self, id: &PlayerId) -> Result<usize, GameError> {
        self.seats
            .iter()
            .position(|s| s.state.id() == id)
            .ok_or_else(|| GameError::UnknownPlayer(id.clone()))
    }

    fn seat(&self, id: &PlayerId) -> Result<&Seat, GameError> {
        let idx = self.seat_index(id)?;
        Ok(&self.seats[idx])
    }

    /// Legal moves for `player_id`.
    ///
    /// When it is that player's turn, their hand is empty and the deck is
    /// not, one card is drawn into the hand first and the ordinary draw of
    /// this turn is skipped. A hand card without field matches yields one
    /// move with no target; a card with N matches yields N moves, one per
    /// candidate.
    pub fn available_moves(&mut self, player_id: &PlayerId) -> Result<Vec<Move>, GameError> {
        let idx = self.seat_index(player_id)?;
        if self.result.is_some() {
            return Ok(Vec::new());
        }

        let is_current = self.current_player_id.as_ref() == Some(player_id);
        if is_current
            && self.pending_koikoi.is_none()
            && self.seats[idx].state.hand().is_empty()
            && self.drawn_this_turn.as_ref() != Some(player_id)
        {
            if let Some(card) = self.deck.draw() {
                self.seats[idx].state.receive_card(card);
                self.drawn_this_turn = Some(player_id.clone());
                self.history.push(RoundEvent::ForcedDraw {
                    player_id: player_id.clone(),
                    card_id: card.id,
                });
                tracing::debug!(
                    player_id = %player_id,
                    card = %card.id,
                    "forced draw into empty hand"
                );
            }
        }

        let mut moves = Vec::new();
        for card in self.seats[idx].state.hand() {
            let matches = self.field.matches(card.month);
            if matches.is_empty() {
                moves.push(Move {
                    player_id: player_id.clone(),
                    hand_card_id: card.id,
                    field_card_ids: Vec::new(),
                });
                continue;
            }
            for m in matches {
                moves.push(Move {
                    player_id: player_id.clone(),
                    hand_card_id: card.id,
                    field_card_ids: vec![m.id],
                });
            }
        }
        Ok(moves)
    }

    /// Plays a hand card, then draws and resolves one card from the deck
    /// unless this turn already force-drew.
    ///
    /// The move is fully validated before anything changes; a rejected move
    /// leaves the round untouched.
    ///
    /// # Errors
    ///
    /// - [`GameError::RoundComplete`] once a result is set
    /// - [`GameError::NotPlayersTurn`] when `mv.player_id` is not current
    /// - [`GameError::KoikoiPending`] while a koikoi decision is open
    /// - [`GameError::CardNotInHand`] for a card the player does not hold
    /// - [`GameError::FieldSelectionRequired`] / [`GameError::InvalidFieldSelection`]
    ///   for a missing or wrong capture target
    pub fn apply_move(&mut self, mv: &Move) -> Result<TurnOutcome, GameError> {
        if self.result.is_some() {
            return Err(GameError::RoundComplete);
        }
        if self.current_player_id.as_ref() != Some(&mv.player_id) {
            return Err(GameError::NotPlayersTurn {
                expected: self
                    .current_player_id
                    .as_ref()
                    .map_or_else(|| "none".to_string(), |p| p.to_string()),
                actual: mv.player_id.clone(),
            });
        }
        if let Some(pending) = &self.pending_koikoi {
            return Err(GameError::KoikoiPending(pending.player_id.clone()));
        }
        let idx = self.seat_index(&mv.player_id)?;
        let card = self.seats[idx]
            .state
            .hand_card(mv.hand_card_id)
            .ok_or_else(|| GameError::CardNotInHand {
                card: mv.hand_card_id,
                player: mv.player_id.clone(),
            })?;
        let selection = self.resolve_selection(card, &mv.field_card_ids)?;

        self.seats[idx].state.remove_hand_card(card.id)?;
        let captured_from_hand = self.field.place_or_capture(card, selection)?;
        self.seats[idx].state.capture_cards(&captured_from_hand);

        let mut drawn_card_id = None;
        let mut captured_from_deck = Vec::new();
        if self.drawn_this_turn.as_ref() != Some(&mv.player_id) {
            if let Some(drawn) = self.deck.draw() {
                drawn_card_id = Some(drawn.id);
                // the drawn card cannot be pre-selected; the first match in field order is taken
                let target = self.field.matches(drawn.month).first().map(|c| c.id);
                captured_from_deck = self.field.place_or_capture(drawn, target)?;
                self.seats[idx].state.capture_cards(&captured_from_deck);
            }
        }
        self.drawn_this_turn = None;
        self.turn_count += 1;

        let new_yaku = self.refresh_yaku(idx);
        let koikoi_prompt = !new_yaku.is_empty();
        if koikoi_prompt {
            let seat = &self.seats[idx];
            let pending = PendingKoikoi {
                player_id: mv.player_id.clone(),
                new_yaku: new_yaku.clone(),
                all_yaku: seat.yaku.clone(),
                score: self.score_for(idx),
            };
            tracing::info!(
                player_id = %mv.player_id,
                new_yaku = new_yaku.len(),
                base = pending.score.base,
                "koikoi prompt opened"
            );
            self.pending_koikoi = Some(pending);
        } else {
            self.settle_turn()?;
        }

        let outcome = TurnOutcome {
            player_id: mv.player_id.clone(),
            turn: self.turn_count,
            hand_card_id: card.id,
            captured_from_hand: captured_from_hand.iter().map(|c| c.id).collect(),
            drawn_card_id,
            captured_from_deck: captured_from_deck.iter().map(|c| c.id).collect(),
            new_yaku,
            koikoi_prompt,
            round_ended: self.result.is_some(),
        };
        self.history.push(RoundEvent::Turn(outcome.clone()));
        Ok(outcome)
    }

    /// Resolves the open koikoi prompt of `player_id`.
    ///
    /// `Continue` raises the player's koikoi level and resumes play; `Stop`
    /// ends the round at once with that player as winner.
    ///
    /// # Errors
    ///
    /// [`GameError::NoKoikoiPending`] unless a prompt is open for `player_id`.
    pub fn handle_koikoi_decision(
        &mut self,
        player_id: &PlayerId,
        decision: KoikoiDecision,
    ) -> Result<KoikoiOutcome, GameError> {
        match &self.pending_koikoi {
            Some(p) if &p.player_id == player_id => {}
            _ => return Err(GameError::NoKoikoiPending(player_id.clone())),
        }
        let idx = self.seat_index(player_id)?;
        self.pending_koikoi = None;

        if decision == KoikoiDecision::Continue {
            let status = &mut self.seats[idx].status;
            status.koikoi_level += 1;
            status.koikoi_declared = true;
            status.koikoi_locked = true;
        }
        let level = self.seats[idx].status.koikoi_level;
        self.history.push(RoundEvent::KoikoiDecision {
            player_id: player_id.clone(),
            decision,
            level,
        });
        tracing::info!(player_id = %player_id, %decision, level, "koikoi decision");

        match decision {
            KoikoiDecision::Continue => {
                self.refresh_totals();
                self.settle_turn()?;
            }
            KoikoiDecision::Stop => {
                self.finalize(EndReason::KoikoiStop, Some(player_id.clone()))?;
            }
        }

        Ok(KoikoiOutcome {
            player_id: player_id.clone(),
            decision,
            level,
            result: self.result.clone(),
        })
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            seed: self.seed,
            current_player_id: self.current_player_id.clone(),
            deck_remaining: self.deck.remaining(),
            field: self.field.snapshot(),
            players: self.seats.iter().map(|s| s.state.snapshot()).collect(),
            turn_count: self.turn_count,
            is_complete: self.is_complete(),
            pending_koikoi: self.pending_koikoi.clone(),
            player_status: self.seats.iter().map(|s| s.status.clone()).collect(),
            player_yaku: self
                .seats
                .iter()
                .map(|s| PlayerYaku {
                    player_id: s.state.id().clone(),
                    yaku: s.yaku.clone(),
                })
                .collect(),
            round_result: self.result.clone(),
            redeal_count: self.redeal_count,
        }
    }

    fn resolve_selection(&self, card: Card, ids: &[CardId]) -> Result<Option<CardId>, GameError> {
        if ids.len() > 1 {
            let joined: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
            return Err(GameError::InvalidFieldSelection {
                card: card.id,
                selected: joined.join(","),
            });
        }
        let selected = ids.first().copied();
        let matches = self.field.matches(card.month);
        let invalid = |sel: CardId| GameError::InvalidFieldSelection {
            card: card.id,
            selected: sel.to_string(),
        };
        match (matches.len(), selected) {
            (0, None) => Ok(None),
            (0, Some(sel)) => Err(invalid(sel)),
            (1, None) => Ok(Some(matches[0].id)),
            (n, None) => Err(GameError::FieldSelectionRequired {
                card: card.id,
                matches: n,
            }),
            (_, Some(sel)) if matches.iter().any(|m| m.id == sel) => Ok(Some(sel)),
            (_, Some(sel)) => Err(invalid(sel)),
        }
    }

    /// Re-evaluates the whole captured pile of seat `idx` and returns the yaku
    /// whose key was not recorded before.
    fn refresh_yaku(&mut self, idx: usize) -> Vec<Yaku> {
        let all = evaluate(self.seats[idx].state.captured());
        let seat = &mut self.seats[idx];
        let new: Vec<Yaku> = all
            .iter()
            .filter(|y| !seat.yaku.iter().any(|prev| prev.key == y.key))
            .copied()
            .collect();
        seat.status.has_yaku = !all.is_empty();
        seat.yaku = all;
        self.refresh_totals();
        new
    }

    fn refresh_totals(&mut self) {
        for i in 0..self.seats.len() {
            self.seats[i].status.total_points = self.score_for(i).total;
        }
    }

    fn score_for(&self, idx: usize) -> PlayerScore {
        let opponents = KoikoiStanding::combined(
            self.seats
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != idx)
                .map(|(_, s)| s.status.standing())
                .collect::<Vec<_>>()
                .iter(),
        );
        compute_player_score(&self.seats[idx].yaku, self.seats[idx].status.standing(), opponents)
    }

    fn natural_end_reached(&self) -> bool {
        self.pending_koikoi.is_none()
            && self.result.is_none()
            && self.deck.is_empty()
            && self.seats.iter().all(|s| s.state.hand().is_empty())
    }

    fn settle_turn(&mut self) -> Result<(), GameError> {
        if self.natural_end_reached() {
            self.finalize(EndReason::NaturalComplete, None)
        } else {
            self.advance_turn();
            Ok(())
        }
    }

    /// Next seat in order that can still act: a non-empty hand, or a deck to
    /// draw from.
    fn advance_turn(&mut self) {
        let count = self.seats.len();
        let start = self
            .current_player_id
            .as_ref()
            .and_then(|id| self.seats.iter().position(|s| s.state.id() == id))
            .unwrap_or(count - 1);
        let deck_empty = self.deck.is_empty();

        self.current_player_id = (1..=count)
            .map(|offset| &self.seats[(start + offset) % count])
            .find(|s| !(s.state.hand().is_empty() && deck_empty))
            .map(|s| s.state.id().clone());
    }

    fn finalize(&mut self, reason: EndReason, winner: Option<PlayerId>) -> Result<(), GameError> {
        let round_points = {
            let entries: Vec<ScoreEntry<'_>> = self
                .seats
                .iter()
                .map(|s| ScoreEntry {
                    player_id: s.state.id(),
                    yaku: &s.yaku,
                    standing: s.status.standing(),
                })
                .collect();
            build_round_points(&entries, winner.as_ref())?
        };

        for (seat, pts) in self.seats.iter_mut().zip(&round_points.points) {
            seat.status.total_points = pts.score.total;
        }

        let result = RoundResult {
            reason,
            winner_id: round_points.winner_id,
            points: round_points.points,
            statuses: self.seats.iter().map(|s| s.status.clone()).collect(),
            yaku: self
                .seats
                .iter()
                .map(|s| PlayerYaku {
                    player_id: s.state.id().clone(),
                    yaku: s.yaku.clone(),
                })
                .collect(),
        };
        tracing::info!(
            reason = ?result.reason,
            winner = ?result.winner_id,
            turns = self.turn_count,
            "round finalized"
        );

        self.current_player_id = None;
        self.pending_koikoi = None;
        self.drawn_this_turn = None;
        self.result = Some(result);
        Ok(())
    }
}

pub(crate) fn validate_seating(players: &[SeatConfig]) -> Result<(), GameError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
        return Err(GameError::InvalidPlayerCount {
            count: players.len(),
        });
    }
    let mut seen = HashSet::new();
    for p in players {
        if !seen.insert(&p.id) {
            return Err(GameError::DuplicatePlayer(p.id.clone()));
        }
    }
    Ok(())
}

/// True when four or more of `cards` share a month.
pub fn has_month_quad(cards: &[Card]) -> bool {
    let mut counts = [0u8; 13];
    for c in cards {
        let m = c.month.value() as usize;
        counts[m] += 1;
        if counts[m] >= 4 {
            return true;
        }
    }
    false
}
