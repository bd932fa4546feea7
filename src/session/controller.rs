//! Session controller: round lifecycle and event dispatch.
//!
//! Owns the round state, card store, timer, and both collaborators. All
//! input arrives through two entry points, `reveal` and `on_clock`, each of
//! which runs to completion before returning. That single-threaded,
//! run-to-completion contract is what makes the board lock sufficient.

use std::time::Duration;

use tracing::{debug, info, trace};

use super::renderer::BoardRenderer;
use crate::cards::{CardRef, CardStore, DeckBuilder};
use crate::core::{DeckError, Difficulty, GameRng, RevealError, RoundConfig};
use crate::events::{Events, Notice, RoundEvent, StatusLine};
use crate::rules::{MatchResolver, RoundOutcome, RoundState};
use crate::timer::{Clock, ClockHandle, ManualClock, RoundTimer, Tick};
use crate::triggers::BonusTrigger;

/// Everything that belongs to the round in progress.
#[derive(Clone, Debug)]
struct ActiveRound {
    difficulty: Difficulty,
    state: RoundState,
    cards: CardStore,
    timer: RoundTimer,
    tick: Option<ClockHandle>,
    unflip: Option<ClockHandle>,
}

/// Drives one game session: at most one round at a time.
pub struct SessionController<R: BoardRenderer, C: Clock> {
    config: RoundConfig,
    rng: GameRng,
    deck: DeckBuilder,
    resolver: MatchResolver,
    renderer: R,
    clock: C,
    round: Option<ActiveRound>,
}

impl<R: BoardRenderer, C: Clock> SessionController<R, C> {
    /// Create a session with no active round.
    pub fn new(config: RoundConfig, renderer: R, clock: C) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self {
            deck: DeckBuilder::new(config.identity_space),
            resolver: MatchResolver::new(BonusTrigger::new(config.bonus_seconds, config.bonus_streak)),
            rng,
            config,
            renderer,
            clock,
            round: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Seed of the session RNG, for replaying a deal.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.round.is_some()
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.round.as_ref().map(|r| r.difficulty)
    }

    #[must_use]
    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref().map(|r| &r.state)
    }

    #[must_use]
    pub fn cards(&self) -> Option<&CardStore> {
        self.round.as_ref().map(|r| &r.cards)
    }

    #[must_use]
    pub fn timer(&self) -> Option<&RoundTimer> {
        self.round.as_ref().map(|r| &r.timer)
    }

    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.round().and_then(RoundState::outcome)
    }

    /// Current status line, if a round is active.
    #[must_use]
    pub fn status(&self) -> Option<StatusLine> {
        self.round.as_ref().map(status_of)
    }

    /// Clock registration of the mismatch flip-back, while one is pending.
    #[must_use]
    pub fn pending_unflip(&self) -> Option<ClockHandle> {
        self.round.as_ref().and_then(|r| r.unflip)
    }

    /// Start a fresh round, discarding any round in progress.
    ///
    /// On a deck error the session is left with no active round.
    pub fn start_round(&mut self, difficulty: Difficulty) -> Result<Events, DeckError> {
        self.cancel_clock();
        self.round = None;

        let tier = difficulty.tier();
        let identities = self.deck.build(tier.pair_count, &mut self.rng)?;

        let mut cards = CardStore::new();
        cards.deal(&identities);

        let mut timer = RoundTimer::new(tier.starting_seconds);
        timer.start();
        let tick = self.clock.start_interval(self.config.tick_period);

        info!(
            %difficulty,
            pairs = tier.pair_count,
            seconds = tier.starting_seconds,
            seed = self.rng.seed(),
            "round started"
        );

        self.round = Some(ActiveRound {
            difficulty,
            state: RoundState::new(tier.pair_count),
            cards,
            timer,
            tick: Some(tick),
            unflip: None,
        });

        let mut events = Events::new();
        events.push(RoundEvent::Dealt {
            card_count: identities.len(),
            columns: tier.columns,
        });
        events.push(RoundEvent::StatusChanged);
        self.dispatch(&events);
        Ok(events)
    }

    /// Discard the round in progress, if any, and cancel its clock registrations.
    pub fn reset(&mut self) {
        self.cancel_clock();
        if self.round.take().is_some() {
            info!("round reset");
        }
        self.renderer.clear();
    }

    /// Handle a click on `card`.
    ///
    /// Rejected clicks change nothing and are only logged; callers are free
    /// to ignore the error.
    pub fn reveal(&mut self, card: CardRef) -> Result<Events, RevealError> {
        let round = self.round.as_mut().ok_or(RevealError::NoActiveRound)?;

        let events = self
            .resolver
            .reveal(&mut round.state, &mut round.cards, &mut round.timer, card)
            .map_err(|err| {
                debug!(%card, %err, "reveal rejected");
                err
            })?;

        if events.iter().any(|e| matches!(e, RoundEvent::PairMismatched(..))) {
            round.unflip = Some(self.clock.start_timeout(self.config.mismatch_delay));
        }
        Self::stop_if_over(&mut self.clock, round, &events);

        self.dispatch(&events);
        Ok(events)
    }

    /// Handle a clock callback.
    ///
    /// Handles that do not belong to the current round (cancelled, or from
    /// an earlier round) are ignored.
    pub fn on_clock(&mut self, handle: ClockHandle) -> Events {
        let Some(round) = self.round.as_mut() else {
            trace!(%handle, "clock fired with no active round");
            return Events::new();
        };

        let events = if round.tick == Some(handle) {
            Self::on_tick(&self.resolver, round)
        } else if round.unflip == Some(handle) {
            round.unflip = None;
            self.resolver.finish_mismatch(&mut round.state, &mut round.cards)
        } else {
            trace!(%handle, "stale clock handle");
            Events::new()
        };
        Self::stop_if_over(&mut self.clock, round, &events);

        self.dispatch(&events);
        events
    }

    fn on_tick(resolver: &MatchResolver, round: &mut ActiveRound) -> Events {
        let mut events = Events::new();
        match round.timer.tick() {
            Tick::Ignored => {}
            Tick::Counted => {
                trace!(seconds_left = round.timer.seconds_left(), "tick");
                events.push(RoundEvent::StatusChanged);
            }
            Tick::Expired => {
                events.push(RoundEvent::StatusChanged);
                events.extend(resolver.expire(&mut round.state, &mut round.cards));
            }
        }
        events
    }

    /// Cancel the countdown interval once `events` end the round.
    fn stop_if_over(clock: &mut C, round: &mut ActiveRound, events: &[RoundEvent]) {
        if !events.iter().any(RoundEvent::is_terminal) {
            return;
        }
        if let Some(tick) = round.tick.take() {
            clock.cancel(tick);
        }
        info!(
            outcome = ?round.state.outcome(),
            matches = round.state.matches(),
            total_pairs = round.state.total_pairs(),
            clicks = round.state.clicks(),
            seconds_left = round.timer.seconds_left(),
            "round over"
        );
    }

    fn cancel_clock(&mut self) {
        if let Some(round) = self.round.as_mut() {
            for handle in [round.tick.take(), round.unflip.take()].into_iter().flatten() {
                self.clock.cancel(handle);
            }
        }
    }

    /// Forward events to the renderer, in order.
    fn dispatch(&mut self, events: &[RoundEvent]) {
        let Some(round) = self.round.as_ref() else {
            return;
        };

        for event in events {
            match *event {
                RoundEvent::Dealt { columns, .. } => {
                    self.renderer.render_board(&round.cards.identities(), columns);
                }
                RoundEvent::Revealed(card) => self.renderer.reveal(card),
                RoundEvent::PairMatched(a, b) => {
                    self.renderer.mark_matched(a);
                    self.renderer.mark_matched(b);
                }
                RoundEvent::PairMismatched(..) => {}
                RoundEvent::Concealed(a, b) => {
                    self.renderer.conceal(a);
                    self.renderer.conceal(b);
                }
                RoundEvent::BonusGranted { seconds } => self.renderer.notify(Notice::BonusGranted(seconds)),
                RoundEvent::StatusChanged => self.renderer.show_status(&status_of(round)),
                RoundEvent::Won => self.renderer.notify(Notice::Won),
                RoundEvent::TimeExpired => self.renderer.notify(Notice::TimeUp),
                RoundEvent::BoardDisabled => self.renderer.disable_all(),
            }
        }
    }
}

impl<R: BoardRenderer> SessionController<R, ManualClock> {
    /// Move virtual time forward, handling each callback as it comes due.
    pub fn advance(&mut self, by: Duration) -> Events {
        let until = self.clock.now() + by;
        let mut events = Events::new();
        while let Some(handle) = self.clock.next_due(until) {
            events.extend(self.on_clock(handle));
        }
        self.clock.settle(until);
        events
    }
}

fn status_of(round: &ActiveRound) -> StatusLine {
    StatusLine {
        total_pairs: round.state.total_pairs(),
        matches: round.state.matches(),
        pairs_left: round.state.pairs_left(),
        clicks: round.state.clicks(),
        seconds_left: round.timer.seconds_left(),
        seconds_elapsed: round.timer.seconds_elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{NullRenderer, RecordingRenderer, RenderCommand};

    fn session() -> SessionController<RecordingRenderer, ManualClock> {
        SessionController::new(RoundConfig::new().with_seed(42), RecordingRenderer::new(), ManualClock::new())
    }

    #[test]
    fn test_reveal_without_round() {
        let mut s = SessionController::new(RoundConfig::new().with_seed(1), NullRenderer, ManualClock::new());
        assert_eq!(s.reveal(CardRef(0)), Err(RevealError::NoActiveRound));
        assert!(s.on_clock(ClockHandle(1)).is_empty());
    }

    #[test]
    fn test_start_round_renders_board() {
        let mut s = session();
        let events = s.start_round(Difficulty::Medium).unwrap();

        assert_eq!(events[0], RoundEvent::Dealt { card_count: 12, columns: 4 });
        match &s.renderer().commands[0] {
            RenderCommand::Board { identities, columns } => {
                assert_eq!(identities.len(), 12);
                assert_eq!(*columns, 4);
            }
            other => panic!("expected board, got {:?}", other),
        }
        assert_eq!(s.status().unwrap().seconds_left, 30);
        assert_eq!(s.clock().pending(), 1);
    }

    #[test]
    fn test_deck_error_leaves_no_round() {
        let config = RoundConfig::new().with_seed(1).with_identity_space(4);
        let mut s = SessionController::new(config, NullRenderer, ManualClock::new());

        assert!(s.start_round(Difficulty::Easy).is_ok());
        let err = s.start_round(Difficulty::Medium).unwrap_err();

        assert_eq!(err, DeckError::InsufficientIdentitySpace { requested: 6, available: 4 });
        assert!(!s.is_active());
        assert_eq!(s.clock().pending(), 0);
    }

    #[test]
    fn test_reset_cancels_clock() {
        let mut s = session();
        s.start_round(Difficulty::Easy).unwrap();
        s.reset();

        assert!(!s.is_active());
        assert_eq!(s.clock().pending(), 0);
        assert!(s.advance(Duration::from_secs(5)).is_empty());
        assert_eq!(s.renderer().commands.last(), Some(&RenderCommand::Clear));
    }

    #[test]
    fn test_ticks_update_status() {
        let mut s = session();
        s.start_round(Difficulty::Easy).unwrap();
        s.advance(Duration::from_secs(3));

        let status = s.status().unwrap();
        assert_eq!(status.seconds_left, 7);
        assert_eq!(status.seconds_elapsed, 3);
        assert_eq!(s.renderer().last_status(), Some(&status));
    }

    #[test]
    fn test_expiry_stops_ticking() {
        let mut s = session();
        s.start_round(Difficulty::Easy).unwrap();
        let events = s.advance(Duration::from_secs(10));

        assert!(events.iter().any(RoundEvent::is_terminal));
        assert!(s.round.as_ref().unwrap().tick.is_none());
        assert_eq!(s.clock().pending(), 0);
    }
}
