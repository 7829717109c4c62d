use serde::Serialize;

use crate::actor::{Actor, ExternalActor};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::player::{PlayerId, SeatConfig};
use crate::random::default_seed;
use crate::round::{
    validate_seating, EndReason, KoikoiDecision, Move, PendingKoikoi, RoundConfig, RoundEvent,
    RoundSnapshot, RoundState, TurnOutcome,
};
use crate::score::PlayerPoints;

pub const DEFAULT_TOTAL_ROUNDS: u32 = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    /// Base seed; round `i` is dealt with `seed + i`. `None` reads the clock once.
    pub seed: Option<u32>,
    pub total_rounds: u32,
    /// Run automated seats after every host call.
    pub auto_play: bool,
    /// Deal the next round as soon as the previous one is settled.
    pub auto_advance: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: None,
            total_rounds: DEFAULT_TOTAL_ROUNDS,
            auto_play: true,
            auto_advance: true,
        }
    }
}

/// A player at the match table together with whoever decides for them.
pub struct Seat {
    pub id: PlayerId,
    pub name: String,
    actor: Box<dyn Actor>,
}

impl Seat {
    pub fn new(id: impl Into<String>, name: impl Into<String>, actor: Box<dyn Actor>) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
            actor,
        }
    }

    /// Seat driven through `play_card` / `resolve_koikoi`.
    pub fn external(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, Box::new(ExternalActor))
    }

    pub fn actor(&self) -> &dyn Actor {
        self.actor.as_ref()
    }

    fn config(&self) -> SeatConfig {
        SeatConfig {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    /// One-based round number.
    pub round: u32,
    pub seed: u32,
    pub first_player_id: PlayerId,
    pub reason: EndReason,
    pub winner_id: Option<PlayerId>,
    pub points: Vec<PlayerPoints>,
    pub redeal_count: u32,
    pub turns: u32,
}

/// A settled round with its full event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundArchive {
    pub summary: RoundSummary,
    pub events: Vec<RoundEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerTotal {
    pub player_id: PlayerId,
    pub name: String,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSnapshot {
    pub seed: u32,
    pub total_rounds: u32,
    pub completed_rounds: u32,
    pub current_round: Option<u32>,
    pub totals: Vec<PlayerTotal>,
    pub history: Vec<RoundSummary>,
    pub next_first_player_id: PlayerId,
    pub is_finished: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    #[serde(rename = "match")]
    pub match_state: MatchSnapshot,
    pub round: Option<RoundSnapshot>,
}

/// Presentation events. Produced by the service, never consumed by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum GameEvent {
    RoundStart {
        round: u32,
        seed: u32,
        first_player_id: PlayerId,
        redeal_count: u32,
    },
    Turn(TurnOutcome),
    KoikoiPrompt(PendingKoikoi),
    KoikoiDecision {
        player_id: PlayerId,
        decision: KoikoiDecision,
        level: u32,
    },
    RoundEnd(RoundSummary),
    MatchEnd {
        totals: Vec<PlayerTotal>,
        winner_id: Option<PlayerId>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceResponse {
    pub events: Vec<GameEvent>,
    pub snapshot: GameSnapshot,
}

type DeckFactory = Box<dyn FnMut(u32) -> Deck + Send>;

/// Match orchestration: round sequencing, seat dispatch and point totals.
///
/// Every host-facing operation returns the events it produced and a fresh
/// snapshot. Automated seats are driven by their [`Actor`]; seats whose actor
/// requires input wait for the host.
pub struct GameService {
    config: MatchConfig,
    seats: Vec<Seat>,
    base_seed: u32,
    deck_factory: DeckFactory,
    started: bool,
    round: Option<RoundState>,
    round_settled: bool,
    first_player_id: PlayerId,
    next_first_player_id: PlayerId,
    completed_rounds: u32,
    totals: Vec<u32>,
    archive: Vec<RoundArchive>,
}

impl GameService {
    /// # Errors
    ///
    /// - [`GameError::InvalidRoundCount`] when `total_rounds` is 0
    /// - [`GameError::InvalidPlayerCount`] / [`GameError::DuplicatePlayer`] for bad seating
    pub fn new(config: MatchConfig, seats: Vec<Seat>) -> Result<Self, GameError> {
        if config.total_rounds == 0 {
            return Err(GameError::InvalidRoundCount(config.total_rounds));
        }
        let seat_configs: Vec<SeatConfig> = seats.iter().map(Seat::config).collect();
        validate_seating(&seat_configs)?;

        let base_seed = config.seed.unwrap_or_else(default_seed);
        let first = seats[0].id.clone();
        let totals = vec![0; seats.len()];
        Ok(Self {
            config,
            seats,
            base_seed,
            deck_factory: Box::new(Deck::create),
            started: false,
            round: None,
            round_settled: false,
            first_player_id: first.clone(),
            next_first_player_id: first,
            completed_rounds: 0,
            totals,
            archive: Vec::new(),
        })
    }

    /// Replaces the shuffled deck used for every deal.
    pub fn with_deck_factory<F>(mut self, factory: F) -> Self
    where
        F: FnMut(u32) -> Deck + Send + 'static,
    {
        self.deck_factory = Box::new(factory);
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn seed(&self) -> u32 {
        self.base_seed
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    pub fn archive(&self) -> &[RoundArchive] {
        &self.archive
    }

    pub fn current_player_id(&self) -> Option<&PlayerId> {
        self.round.as_ref().and_then(RoundState::current_player_id)
    }

    pub fn is_round_finished(&self) -> bool {
        self.round.as_ref().is_some_and(RoundState::is_complete)
    }

    pub fn is_match_finished(&self) -> bool {
        self.started && self.completed_rounds >= self.config.total_rounds
    }

    pub fn total_for(&self, player_id: &PlayerId) -> Result<u32, GameError> {
        let idx = seat_index(&self.seats, player_id)?;
        Ok(self.totals[idx])
    }

    pub fn available_moves(&mut self, player_id: &PlayerId) -> Result<Vec<Move>, GameError> {
        self.round
            .as_mut()
            .ok_or(GameError::MatchNotStarted)?
            .available_moves(player_id)
    }

    /// Resets totals and deals round 1 with the match seating, then runs
    /// automated seats until someone external must act.
    pub fn start_match(&mut self) -> Result<ServiceResponse, GameError> {
        self.started = true;
        self.round = None;
        self.round_settled = false;
        self.completed_rounds = 0;
        self.totals.iter_mut().for_each(|t| *t = 0);
        self.archive.clear();
        self.next_first_player_id = self.seats[0].id.clone();
        tracing::info!(
            seed = self.base_seed,
            total_rounds = self.config.total_rounds,
            players = self.seats.len(),
            "match started"
        );

        let mut events = Vec::new();
        self.begin_round(&mut events)?;
        self.after_host_action(&mut events)?;
        Ok(self.respond(events))
    }

    /// Plays a move for an externally controlled seat.
    ///
    /// # Errors
    ///
    /// - [`GameError::MatchNotStarted`] before `start_match`
    /// - [`GameError::NotExternalActor`] for an automated seat
    /// - any validation error of [`RoundState::apply_move`]
    pub fn play_card(&mut self, mv: &Move) -> Result<ServiceResponse, GameError> {
        self.require_external(&mv.player_id)?;
        let round = self.round.as_mut().ok_or(GameError::MatchNotStarted)?;
        let outcome = round.apply_move(mv)?;

        let mut events = Vec::new();
        push_turn_events(round, outcome, &mut events);
        self.after_host_action(&mut events)?;
        Ok(self.respond(events))
    }

    /// Answers the open koikoi prompt of an externally controlled seat.
    pub fn resolve_koikoi(
        &mut self,
        player_id: &PlayerId,
        decision: KoikoiDecision,
    ) -> Result<ServiceResponse, GameError> {
        self.require_external(player_id)?;
        let round = self.round.as_mut().ok_or(GameError::MatchNotStarted)?;
        let outcome = round.handle_koikoi_decision(player_id, decision)?;

        let mut events = vec![GameEvent::KoikoiDecision {
            player_id: outcome.player_id,
            decision: outcome.decision,
            level: outcome.level,
        }];
        self.after_host_action(&mut events)?;
        Ok(self.respond(events))
    }

    /// Deals the next round once the current one has ended.
    ///
    /// Settles the finished round first if that has not happened yet.
    ///
    /// # Errors
    ///
    /// - [`GameError::MatchNotStarted`] before `start_match`
    /// - [`GameError::RoundInProgress`] while the current round is live
    /// - [`GameError::MatchFinished`] after the last round
    pub fn start_next_round(&mut self) -> Result<ServiceResponse, GameError> {
        let round = self.round.as_ref().ok_or(GameError::MatchNotStarted)?;
        if !round.is_complete() {
            return Err(GameError::RoundInProgress);
        }
        let mut events = Vec::new();
        if !self.round_settled {
            self.settle_round(&mut events)?;
        }
        if self.is_match_finished() {
            if events.is_empty() {
                return Err(GameError::MatchFinished);
            }
            return Ok(self.respond(events));
        }
        // settling may already have dealt the next round
        if self.round_settled {
            self.begin_round(&mut events)?;
        }
        self.after_host_action(&mut events)?;
        Ok(self.respond(events))
    }

    /// Performs at most one automated action: a move or koikoi decision of
    /// an automated seat, or settling a finished round. Returns no events
    /// when an external seat must act or the match is over.
    pub fn advance_cpu_turn(&mut self) -> Result<ServiceResponse, GameError> {
        if !self.started {
            return Err(GameError::MatchNotStarted);
        }
        let mut events = Vec::new();
        self.step(&mut events)?;
        Ok(self.respond(events))
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let current_round = match (&self.round, self.round_settled) {
            (Some(_), false) => Some(self.completed_rounds + 1),
            _ => None,
        };
        GameSnapshot {
            match_state: MatchSnapshot {
                seed: self.base_seed,
                total_rounds: self.config.total_rounds,
                completed_rounds: self.completed_rounds,
                current_round,
                totals: self.player_totals(),
                history: self.archive.iter().map(|a| a.summary.clone()).collect(),
                next_first_player_id: self.next_first_player_id.clone(),
                is_finished: self.is_match_finished(),
            },
            round: self.round.as_ref().map(RoundState::snapshot),
        }
    }

    fn respond(&self, events: Vec<GameEvent>) -> ServiceResponse {
        ServiceResponse {
            events,
            snapshot: self.snapshot(),
        }
    }

    fn require_external(&self, player_id: &PlayerId) -> Result<(), GameError> {
        let idx = seat_index(&self.seats, player_id)?;
        if !self.seats[idx].actor.requires_input() {
            return Err(GameError::NotExternalActor(player_id.clone()));
        }
        Ok(())
    }

    fn player_totals(&self) -> Vec<PlayerTotal> {
        self.seats
            .iter()
            .zip(&self.totals)
            .map(|(seat, &points)| PlayerTotal {
                player_id: seat.id.clone(),
                name: seat.name.clone(),
                points,
            })
            .collect()
    }

    fn after_host_action(&mut self, events: &mut Vec<GameEvent>) -> Result<(), GameError> {
        if self.config.auto_play {
            while self.step(events)? {}
        }
        Ok(())
    }

    fn begin_round(&mut self, events: &mut Vec<GameEvent>) -> Result<(), GameError> {
        let index = self.completed_rounds;
        let seed = self.base_seed.wrapping_add(index);
        let first = self.next_first_player_id.clone();
        let lead = seat_index(&self.seats, &first)?;
        let count = self.seats.len();
        let players: Vec<SeatConfig> = (0..count)
            .map(|offset| self.seats[(lead + offset) % count].config())
            .collect();

        let round = RoundState::with_deck_factory(
            RoundConfig {
                seed: Some(seed),
                players,
            },
            &mut self.deck_factory,
        )?;
        tracing::info!(
            round = index + 1,
            seed,
            first_player_id = %first,
            redeal_count = round.redeal_count(),
            "round dealt"
        );
        events.push(GameEvent::RoundStart {
            round: index + 1,
            seed,
            first_player_id: first.clone(),
            redeal_count: round.redeal_count(),
        });
        self.first_player_id = first;
        self.round = Some(round);
        self.round_settled = false;
        Ok(())
    }

    /// One automated action. `false` when nothing could be done.
    fn step(&mut self, events: &mut Vec<GameEvent>) -> Result<bool, GameError> {
        let Some(round) = self.round.as_mut() else {
            return Ok(false);
        };

        if round.is_complete() {
            if self.round_settled {
                return Ok(false);
            }
            self.settle_round(events)?;
            return Ok(true);
        }

        if let Some(pending) = round.pending_koikoi().cloned() {
            let seat = &self.seats[seat_index(&self.seats, &pending.player_id)?];
            if seat.actor.requires_input() {
                return Ok(false);
            }
            let decision = seat
                .actor
                .decide_koikoi(&round.snapshot(), &pending)
                .ok_or_else(|| GameError::ActorDeclined(pending.player_id.clone()))?;
            let outcome = round.handle_koikoi_decision(&pending.player_id, decision)?;
            events.push(GameEvent::KoikoiDecision {
                player_id: outcome.player_id,
                decision: outcome.decision,
                level: outcome.level,
            });
            return Ok(true);
        }

        let Some(current) = round.current_player_id().cloned() else {
            return Ok(false);
        };
        let seat = &self.seats[seat_index(&self.seats, &current)?];
        if seat.actor.requires_input() {
            return Ok(false);
        }
        let moves = round.available_moves(&current)?;
        if moves.is_empty() {
            return Err(GameError::NoMovesAvailable(current));
        }
        let mv = seat
            .actor
            .choose_move(&round.snapshot(), &moves)
            .ok_or_else(|| GameError::ActorDeclined(current.clone()))?;
        let outcome = round.apply_move(&mv)?;
        push_turn_events(round, outcome, events);
        Ok(true)
    }

    /// Adds the finished round to the match totals and, with `auto_advance`,
    /// deals the next one.
    fn settle_round(&mut self, events: &mut Vec<GameEvent>) -> Result<(), GameError> {
        let round = self.round.as_ref().ok_or(GameError::MatchNotStarted)?;
        let result = round.result().cloned().ok_or(GameError::RoundInProgress)?;

        for p in &result.points {
            let idx = seat_index(&self.seats, &p.player_id)?;
            self.totals[idx] = self.totals[idx].saturating_add(p.points);
        }
        self.completed_rounds += 1;

        let summary = RoundSummary {
            round: self.completed_rounds,
            seed: round.seed(),
            first_player_id: self.first_player_id.clone(),
            reason: result.reason,
            winner_id: result.winner_id.clone(),
            points: result.points.clone(),
            redeal_count: round.redeal_count(),
            turns: round.turn_count(),
        };
        self.archive.push(RoundArchive {
            summary: summary.clone(),
            events: round.history().to_vec(),
        });

        self.next_first_player_id = match &result.winner_id {
            Some(winner) => winner.clone(),
            None => {
                let idx = seat_index(&self.seats, &self.first_player_id)?;
                self.seats[(idx + 1) % self.seats.len()].id.clone()
            }
        };
        self.round_settled = true;
        tracing::info!(
            round = summary.round,
            winner = ?summary.winner_id,
            next_first_player_id = %self.next_first_player_id,
            "round settled"
        );
        events.push(GameEvent::RoundEnd(summary));

        if self.is_match_finished() {
            let totals = self.player_totals();
            let winner_id = match_winner(&totals);
            tracing::info!(winner = ?winner_id, rounds = self.completed_rounds, "match finished");
            events.push(GameEvent::MatchEnd { totals, winner_id });
        } else if self.config.auto_advance {
            self.begin_round(events)?;
        }
        Ok(())
    }
}

fn seat_index(seats: &[Seat], id: &PlayerId) -> Result<usize, GameError> {
    seats
        .iter()
        .position(|s| &s.id == id)
        .ok_or_else(|| GameError::UnknownPlayer(id.clone()))
}

fn push_turn_events(round: &RoundState, outcome: TurnOutcome, events: &mut Vec<GameEvent>) {
    let prompt = outcome.koikoi_prompt;
    events.push(GameEvent::Turn(outcome));
    if prompt {
        if let Some(pending) = round.pending_koikoi() {
            events.push(GameEvent::KoikoiPrompt(pending.clone()));
        }
    }
}

fn match_winner(totals: &[PlayerTotal]) -> Option<PlayerId> {
    let top = totals.iter().map(|t| t.points).max()?;
    let mut leaders = totals.iter().filter(|t| t.points == top);
    let first = leaders.next()?;
    if top == 0 || leaders.next().is_some() {
        None
    } else {
        Some(first.player_id.clone())
    }
}
