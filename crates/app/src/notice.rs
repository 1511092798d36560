//! Notice state machine for the settings page message area.
//!
//! ```text
//! Idle ──saved──▶ Success ──expired──▶ Idle
//!  any ──failed──▶ Error   (stays until the next action)
//!  any ──command─▶ InProgress (no timed reversal; only a failure replaces it)
//! ```

use std::cell::{Cell, RefCell};

use crate::ports::NoticeSink;

/// What the message area currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Notice {
    #[default]
    Idle,
    Success(String),
    Error(String),
    /// A device command was sent; the page is expected to reload externally.
    InProgress(String),
}

/// Something that happened on the settings page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeEvent {
    Saved(String),
    Failed(String),
    CommandStarted(String),
    Expired,
}

impl Notice {
    /// The state reached from `self` on `event`.
    #[must_use]
    pub fn next(&self, event: NoticeEvent) -> Notice {
        match (self, event) {
            (_, NoticeEvent::CommandStarted(text)) => Notice::InProgress(text),
            (_, NoticeEvent::Failed(text)) => Notice::Error(text),
            (Notice::InProgress(_), NoticeEvent::Saved(_)) => self.clone(),
            (_, NoticeEvent::Saved(text)) => Notice::Success(text),
            (Notice::Success(_), NoticeEvent::Expired) => Notice::Idle,
            (_, NoticeEvent::Expired) => self.clone(),
        }
    }

    /// Text to display; empty when idle.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Notice::Idle => "",
            Notice::Success(text) | Notice::Error(text) | Notice::InProgress(text) => text,
        }
    }

    /// CSS classes of the message area.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            Notice::Idle => "message",
            Notice::Success(_) => "message success",
            Notice::Error(_) => "message error",
            Notice::InProgress(_) => "message info",
        }
    }
}

/// Identifies the transition that produced a notice, so a stale expiry
/// timer cannot clear a newer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTicket(u64);

/// Holds the current [`Notice`] and mirrors every change to a [`NoticeSink`].
pub struct NoticeBoard<N> {
    sink: N,
    state: RefCell<Notice>,
    generation: Cell<u64>,
}

impl<N: NoticeSink> NoticeBoard<N> {
    /// Start idle. Nothing is rendered until the first event.
    pub fn new(sink: N) -> Self {
        Self {
            sink,
            state: RefCell::new(Notice::Idle),
            generation: Cell::new(0),
        }
    }

    /// The notice currently shown.
    pub fn current(&self) -> Notice {
        self.state.borrow().clone()
    }

    /// Apply `event`, render the result and return the ticket of this transition.
    pub fn dispatch(&self, event: NoticeEvent) -> NoticeTicket {
        let next = self.state.borrow().next(event);
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.sink.show_notice(&next);
        *self.state.borrow_mut() = next;
        NoticeTicket(generation)
    }

    /// Expire the notice produced by `ticket`, unless something newer replaced it.
    ///
    /// Returns `true` when the message area changed.
    pub fn expire(&self, ticket: NoticeTicket) -> bool {
        if self.generation.get() != ticket.0 {
            return false;
        }
        let before = self.current();
        self.dispatch(NoticeEvent::Expired);
        before != self.current()
    }
}
