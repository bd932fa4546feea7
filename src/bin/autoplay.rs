//! Headless demo: a simulated player works through one round on a virtual clock.
//!
//! ```text
//! autoplay --difficulty medium --seed 7 --think-ms 600 --recall 0.8
//! ```

use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::info;
use tracing_subscriber::EnvFilter;

use memory_match::{
    BoardRenderer, CardIdentity, CardRef, CardStore, Difficulty, GameRng, ManualClock, Notice, RevealError,
    RoundConfig, RoundEvent, RoundOutcome, SessionController, StatusLine,
};

#[derive(Debug, Parser)]
#[command(name = "autoplay", about = "Play one memory-match round with a simulated player")]
struct Args {
    /// Difficulty tier: easy | medium | hard
    #[arg(long, default_value = "easy")]
    difficulty: Difficulty,

    /// Seed for the deal and the player's choices (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds the player waits between clicks
    #[arg(long, default_value_t = 700, value_parser = clap::value_parser!(u64).range(1..))]
    think_ms: u64,

    /// Probability the player remembers a face it has seen (0.0 - 1.0)
    #[arg(long, default_value_t = 0.9)]
    recall: f64,
}

/// Prints the board as a grid of face numbers, `??` for face-down cards.
struct TextRenderer {
    faces: Vec<CardIdentity>,
    shown: Vec<bool>,
    columns: usize,
}

impl TextRenderer {
    fn new() -> Self {
        Self { faces: Vec::new(), shown: Vec::new(), columns: 1 }
    }

    fn print_board(&self) {
        for row in self.faces.chunks(self.columns.max(1)).zip(self.shown.chunks(self.columns.max(1))) {
            let cells: Vec<String> = row
                .0
                .iter()
                .zip(row.1)
                .map(|(face, &shown)| if shown { format!("{:>3}", face.raw()) } else { " ??".to_string() })
                .collect();
            println!("  {}", cells.join(" "));
        }
    }

    fn set_shown(&mut self, card: CardRef, shown: bool) {
        if let Some(slot) = self.shown.get_mut(card.index()) {
            *slot = shown;
        }
    }
}

impl BoardRenderer for TextRenderer {
    fn render_board(&mut self, identities: &[CardIdentity], columns: usize) {
        self.faces = identities.to_vec();
        self.shown = vec![false; identities.len()];
        self.columns = columns;
        self.print_board();
    }

    fn reveal(&mut self, card: CardRef) {
        self.set_shown(card, true);
    }

    fn conceal(&mut self, card: CardRef) {
        self.set_shown(card, false);
    }

    fn mark_matched(&mut self, card: CardRef) {
        self.set_shown(card, true);
    }

    fn disable_all(&mut self) {
        self.print_board();
    }

    fn show_status(&mut self, status: &StatusLine) {
        println!("{}", status);
    }

    fn notify(&mut self, notice: Notice) {
        println!("*** {} ***", notice);
    }
}

/// A player with imperfect memory.
struct Player {
    rng: GameRng,
    recall: f64,
    seen: FxHashMap<CardIdentity, SmallVec<[CardRef; 2]>>,
}

impl Player {
    fn new(seed: u64, recall: f64) -> Self {
        Self { rng: GameRng::new(seed), recall, seen: FxHashMap::default() }
    }

    fn remember(&mut self, card: CardRef, face: CardIdentity) {
        if self.rng.gen_range_usize(0..1000) as f64 >= self.recall * 1000.0 {
            return;
        }
        let refs = self.seen.entry(face).or_default();
        if !refs.contains(&card) {
            refs.push(card);
        }
    }

    fn known_partner(&self, cards: &CardStore, card: CardRef, face: CardIdentity) -> Option<CardRef> {
        self.seen
            .get(&face)?
            .iter()
            .copied()
            .find(|&r| r != card && cards.get(r).is_some_and(|c| c.is_clickable()))
    }

    fn next_click(&mut self, cards: &CardStore) -> Option<CardRef> {
        let clickable: Vec<CardRef> = cards.iter().filter(|(_, c)| c.is_clickable()).map(|(r, _)| r).collect();
        let unseen: Vec<CardRef> = clickable
            .iter()
            .copied()
            .filter(|r| !self.seen.values().any(|refs| refs.contains(r)))
            .collect();

        if let Some(&pending) = cards.revealed_unmatched().first() {
            let face = cards.identity(pending)?;
            if let Some(partner) = self.known_partner(cards, pending, face) {
                return Some(partner);
            }
        } else if let Some(first) = self.seen.iter().find_map(|(face, refs)| {
            refs.iter().copied().find(|&r| {
                cards.get(r).is_some_and(|c| c.is_clickable()) && self.known_partner(cards, r, *face).is_some()
            })
        }) {
            return Some(first);
        }

        let pool = if unseen.is_empty() { &clickable } else { &unseen };
        self.rng.choose(pool).copied()
    }
}

/// Let `player` click until the round ends, waiting `think` before each click.
///
/// A click on a locked board waits out the flip-back delay instead, so the
/// round always makes progress.
fn play<R: BoardRenderer>(
    session: &mut SessionController<R, ManualClock>,
    player: &mut Player,
    think: Duration,
) -> Option<RoundOutcome> {
    let flip_back = session.config().mismatch_delay;

    while session.outcome().is_none() {
        if session.advance(think).iter().any(RoundEvent::is_terminal) {
            break;
        }

        let Some(cards) = session.cards() else { break };
        let Some(card) = player.next_click(cards) else { continue };

        match session.reveal(card) {
            Ok(_) => {
                if let Some(face) = session.cards().and_then(|c| c.identity(card)) {
                    player.remember(card, face);
                }
            }
            Err(RevealError::Locked) => {
                session.advance(flip_back);
            }
            Err(_) => {}
        }
    }
    session.outcome()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    if !(0.0..=1.0).contains(&args.recall) {
        bail!("--recall must be between 0.0 and 1.0, got {}", args.recall);
    }

    let mut config = RoundConfig::new();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut session = SessionController::new(config, TextRenderer::new(), ManualClock::new());
    let mut player = Player::new(session.seed(), args.recall);
    let think = Duration::from_millis(args.think_ms);

    session.start_round(args.difficulty)?;
    let outcome = play(&mut session, &mut player, think);

    info!(?outcome, seed = session.seed(), "round finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use memory_match::NullRenderer;

    fn session(seed: u64) -> SessionController<NullRenderer, ManualClock> {
        SessionController::new(RoundConfig::new().with_seed(seed), NullRenderer, ManualClock::new())
    }

    /// With no think time, only the flip-back delay moves the clock, and the round still ends.
    #[test]
    fn test_zero_think_time_finishes() {
        for difficulty in Difficulty::ALL {
            let mut s = session(7);
            let mut player = Player::new(7, 0.9);
            s.start_round(difficulty).unwrap();

            let outcome = play(&mut s, &mut player, Duration::ZERO);
            assert!(outcome.is_some());
            assert_eq!(outcome, s.outcome());
            assert!(!s.round().unwrap().is_locked() || outcome == Some(RoundOutcome::TimeExpired));
        }
    }

    /// A forgetful player who thinks slowly runs out of time.
    #[test]
    fn test_slow_player_times_out() {
        let mut s = session(3);
        let mut player = Player::new(3, 0.0);
        s.start_round(Difficulty::Hard).unwrap();

        assert_eq!(play(&mut s, &mut player, Duration::from_secs(5)), Some(RoundOutcome::TimeExpired));
        assert_eq!(s.timer().unwrap().seconds_left(), 0);
    }

    /// Zero think time is refused on the command line.
    #[test]
    fn test_think_ms_rejects_zero() {
        assert!(Args::try_parse_from(["autoplay", "--think-ms", "0"]).is_err());
        assert_eq!(Args::try_parse_from(["autoplay", "--think-ms", "1"]).unwrap().think_ms, 1);
    }
}
