// tagtune/src/presence.rs

//! Tag presence debouncing.
//!
//! The reader is polled in a loop and reports the tag currently in the field
//! (or nothing). `Debouncer` turns that sample stream into edge events: one
//! `TagArrived` per contiguous presence interval and one `TagRemoved` when
//! the field goes empty.
//!
//! A change from tag A straight to tag B is reported as `TagArrived(B)` only,
//! with no `TagRemoved(A)` in between, although physically A must have left
//! the field. Consumers that need strict arrive/remove pairing should treat
//! an arrival while present as an implicit removal.

use derive_more::Display;

use crate::types::TagId;

/// Debouncer state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PresenceState {
    #[default]
    Idle,
    Present(TagId),
}

/// Edge event emitted by the debouncer
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PresenceEvent {
    #[display(fmt = "tag arrived: {}", _0)]
    TagArrived(TagId),
    #[display(fmt = "tag removed: {}", _0)]
    TagRemoved(TagId),
}

impl PresenceEvent {
    pub fn tag(&self) -> &TagId {
        match self {
            Self::TagArrived(id) | Self::TagRemoved(id) => id,
        }
    }
}

/// Presence state machine fed one poll sample at a time.
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    state: PresenceState,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PresenceState {
        &self.state
    }

    /// Feed one poll result; returns the event this sample triggers, if any.
    pub fn observe(&mut self, sample: Option<TagId>) -> Option<PresenceEvent> {
        let previous = std::mem::take(&mut self.state);
        let (next, event) = match (previous, sample) {
            (PresenceState::Idle, None) => (PresenceState::Idle, None),
            (PresenceState::Idle, Some(id)) => (
                PresenceState::Present(id.clone()),
                Some(PresenceEvent::TagArrived(id)),
            ),
            (PresenceState::Present(last), Some(id)) if id == last => {
                (PresenceState::Present(last), None)
            }
            // swap: no TagRemoved for the previous tag
            (PresenceState::Present(_), Some(id)) => (
                PresenceState::Present(id.clone()),
                Some(PresenceEvent::TagArrived(id)),
            ),
            (PresenceState::Present(last), None) => {
                (PresenceState::Idle, Some(PresenceEvent::TagRemoved(last)))
            }
        };
        self.state = next;
        event
    }
}

/// Run a whole sample sequence through a fresh debouncer.
pub fn debounce<I>(samples: I) -> Vec<PresenceEvent>
where
    I: IntoIterator<Item = Option<TagId>>,
{
    let mut debouncer = Debouncer::new();
    samples
        .into_iter()
        .filter_map(|sample| debouncer.observe(sample))
        .collect()
}
