//! Match resolver: the reveal/compare state machine.
//!
//! ```text
//! Idle --reveal--> OneRevealed --reveal other--> Comparing
//!                                                  | match    -> Idle | Won
//!                                                  | mismatch -> (locked until finish_mismatch) -> Idle
//! any non-terminal --expire--> TimeExpired
//! ```
//!
//! The resolver never schedules anything. On a mismatch it leaves the board
//! locked and reports `PairMismatched`; whoever drives it must call
//! `finish_mismatch` once the flip-back delay has passed. Reveals arriving in
//! between are rejected with `Locked`, not queued.

use tracing::debug;

use super::state::{ResolverPhase, RoundState};
use crate::cards::{CardRef, CardStore};
use crate::core::RevealError;
use crate::events::{Events, RoundEvent};
use crate::timer::RoundTimer;
use crate::triggers::BonusTrigger;

/// Applies reveal requests to a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchResolver {
    bonus: BonusTrigger,
}

impl MatchResolver {
    /// Create a resolver that consults `bonus` after every match.
    #[must_use]
    pub const fn new(bonus: BonusTrigger) -> Self {
        Self { bonus }
    }

    /// Handle a click on `card`.
    ///
    /// On success returns the events produced, always ending with
    /// `StatusChanged`. Rejections leave every piece of state untouched.
    pub fn reveal(
        &self,
        round: &mut RoundState,
        cards: &mut CardStore,
        timer: &mut RoundTimer,
        card: CardRef,
    ) -> Result<Events, RevealError> {
        if round.phase.is_terminal() {
            return Err(RevealError::RoundOver);
        }
        if round.locked {
            return Err(RevealError::Locked);
        }

        cards.reveal(card)?;

        let mut events = Events::new();
        events.push(RoundEvent::Revealed(card));

        match round.pending_first {
            None => {
                round.pending_first = Some(card);
                round.phase = ResolverPhase::OneRevealed;
            }
            Some(first) => {
                round.pending_second = Some(card);
                round.locked = true;
                round.phase = ResolverPhase::Comparing;
                round.clicks += 1;

                if cards.identity(first) == cards.identity(card) {
                    self.apply_match(round, cards, timer, first, card, &mut events);
                } else {
                    round.streak = 0;
                    debug!(%first, second = %card, "mismatch");
                    events.push(RoundEvent::PairMismatched(first, card));
                }
            }
        }

        events.push(RoundEvent::StatusChanged);
        Ok(events)
    }

    fn apply_match(
        &self,
        round: &mut RoundState,
        cards: &mut CardStore,
        timer: &mut RoundTimer,
        first: CardRef,
        second: CardRef,
        events: &mut Events,
    ) {
        round.matches += 1;
        round.streak += 1;
        cards.mark_matched(first);
        cards.mark_matched(second);
        clear_pending(round);
        round.phase = ResolverPhase::Idle;

        debug!(%first, %second, matches = round.matches, streak = round.streak, "pair matched");
        events.push(RoundEvent::PairMatched(first, second));

        if let Some(bonus) = self.bonus.observe(round, timer) {
            events.push(bonus);
        }

        if round.matches == round.total_pairs {
            round.phase = ResolverPhase::Won;
            timer.stop();
            cards.disable_all();
            events.push(RoundEvent::Won);
            events.push(RoundEvent::BoardDisabled);
        }
    }

    /// Flip a mismatched pair back face down and unlock the board.
    ///
    /// Runs after the mismatch delay. Also runs after the round expired, in
    /// which case the cards are concealed but the round stays over. Returns
    /// no events when no mismatch is pending.
    pub fn finish_mismatch(&self, round: &mut RoundState, cards: &mut CardStore) -> Events {
        let mut events = Events::new();
        let Some((first, second)) = round.pending_pair() else {
            return events;
        };

        cards.conceal(first);
        cards.conceal(second);
        clear_pending(round);
        if !round.phase.is_terminal() {
            round.phase = ResolverPhase::Idle;
        }

        events.push(RoundEvent::Concealed(first, second));
        events
    }

    /// End the round because the countdown ran out.
    ///
    /// A pending mismatch keeps its lock until `finish_mismatch` runs.
    pub fn expire(&self, round: &mut RoundState, cards: &mut CardStore) -> Events {
        let mut events = Events::new();
        if round.phase.is_terminal() {
            return events;
        }

        round.phase = ResolverPhase::TimeExpired;
        cards.disable_all();
        events.push(RoundEvent::TimeExpired);
        events.push(RoundEvent::BoardDisabled);
        events
    }
}

fn clear_pending(round: &mut RoundState) {
    round.pending_first = None;
    round.pending_second = None;
    round.locked = false;
}
