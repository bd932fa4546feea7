//! Renderer seam.
//!
//! A `BoardRenderer` draws the board and forwards clicks back into
//! `SessionController::reveal`. It should skip cards whose `disabled` flag
//! is set before forwarding.

use crate::cards::{CardIdentity, CardRef};
use crate::events::{Notice, StatusLine};

/// Presentation commands issued by the session controller.
pub trait BoardRenderer {
    /// Lay out a fresh face-down board. `identities[i]` is the face of `CardRef(i)`.
    fn render_board(&mut self, identities: &[CardIdentity], columns: usize);

    /// Turn a card face up.
    fn reveal(&mut self, card: CardRef);

    /// Turn a card face down.
    fn conceal(&mut self, card: CardRef);

    /// Show a card as part of a found pair.
    fn mark_matched(&mut self, card: CardRef);

    /// Stop accepting clicks on every card.
    fn disable_all(&mut self);

    /// Replace the status text.
    fn show_status(&mut self, status: &StatusLine);

    /// Show a one-off message.
    fn notify(&mut self, notice: Notice);

    /// Remove the board after a reset.
    fn clear(&mut self) {}
}

/// Renderer that draws nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl BoardRenderer for NullRenderer {
    fn render_board(&mut self, _identities: &[CardIdentity], _columns: usize) {}
    fn reveal(&mut self, _card: CardRef) {}
    fn conceal(&mut self, _card: CardRef) {}
    fn mark_matched(&mut self, _card: CardRef) {}
    fn disable_all(&mut self) {}
    fn show_status(&mut self, _status: &StatusLine) {}
    fn notify(&mut self, _notice: Notice) {}
}

/// A single renderer command, as captured by `RecordingRenderer`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderCommand {
    Board { identities: Vec<CardIdentity>, columns: usize },
    Reveal(CardRef),
    Conceal(CardRef),
    Matched(CardRef),
    DisableAll,
    Status(StatusLine),
    Notice(Notice),
    Clear,
}

/// Renderer that records every command, for tests and replay logs.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    pub commands: Vec<RenderCommand>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices shown so far, oldest first.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Notice(n) => Some(*n),
                _ => None,
            })
            .collect()
    }

    /// The most recent status line.
    #[must_use]
    pub fn last_status(&self) -> Option<&StatusLine> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::Status(s) => Some(s),
            _ => None,
        })
    }
}

impl BoardRenderer for RecordingRenderer {
    fn render_board(&mut self, identities: &[CardIdentity], columns: usize) {
        self.commands.push(RenderCommand::Board {
            identities: identities.to_vec(),
            columns,
        });
    }

    fn reveal(&mut self, card: CardRef) {
        self.commands.push(RenderCommand::Reveal(card));
    }

    fn conceal(&mut self, card: CardRef) {
        self.commands.push(RenderCommand::Conceal(card));
    }

    fn mark_matched(&mut self, card: CardRef) {
        self.commands.push(RenderCommand::Matched(card));
    }

    fn disable_all(&mut self) {
        self.commands.push(RenderCommand::DisableAll);
    }

    fn show_status(&mut self, status: &StatusLine) {
        self.commands.push(RenderCommand::Status(*status));
    }

    fn notify(&mut self, notice: Notice) {
        self.commands.push(RenderCommand::Notice(notice));
    }

    fn clear(&mut self) {
        self.commands.push(RenderCommand::Clear);
    }
}
