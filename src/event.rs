//! Bounded event queue between the host framework and the control loop.
//!
//! Button presses and app intents may be produced from interrupt handlers or
//! other tasks. They are queued here and drained one at a time by the loop
//! that owns the [`crate::FixtureController`], so every event is applied
//! atomically with respect to the others.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::button::{ButtonId, PressKind};
use crate::state::FixtureIntent;

/// Event delivered to a fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureEvent {
    /// Classified button press
    Button(ButtonId, PressKind),
    /// External (app-driven) state change
    Intent(FixtureIntent),
}

/// Returned when the queue is full; carries the rejected event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub FixtureEvent);

/// Bounded event queue guarded by critical sections
pub struct EventQueue<const SIZE: usize> {
    events: Mutex<RefCell<Deque<FixtureEvent, SIZE>>>,
}

impl<const SIZE: usize> EventQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            events: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for producers
    pub const fn sender(&self) -> EventSender<'_, SIZE> {
        EventSender { queue: self }
    }

    /// Handle for the control loop
    pub const fn receiver(&self) -> EventReceiver<'_, SIZE> {
        EventReceiver { queue: self }
    }

    fn push(&self, event: FixtureEvent) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            self.events
                .borrow(cs)
                .borrow_mut()
                .push_back(event)
                .map_err(TrySendError)
        })
    }

    fn pop(&self) -> Option<FixtureEvent> {
        critical_section::with(|cs| self.events.borrow(cs).borrow_mut().pop_front())
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.events.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for EventQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle of an [`EventQueue`]
#[derive(Clone, Copy)]
pub struct EventSender<'a, const SIZE: usize> {
    queue: &'a EventQueue<SIZE>,
}

impl<const SIZE: usize> EventSender<'_, SIZE> {
    /// Queue an event
    ///
    /// Returns `Err(TrySendError(event))` if the queue is full.
    pub fn try_send(&self, event: FixtureEvent) -> Result<(), TrySendError> {
        self.queue.push(event)
    }

    /// Queue a button press
    pub fn send_button(&self, button: ButtonId, press: PressKind) -> Result<(), TrySendError> {
        self.try_send(FixtureEvent::Button(button, press))
    }

    /// Queue an external intent
    pub fn send_intent(&self, intent: FixtureIntent) -> Result<(), TrySendError> {
        self.try_send(FixtureEvent::Intent(intent))
    }
}

/// Consumer handle of an [`EventQueue`]
#[derive(Clone, Copy)]
pub struct EventReceiver<'a, const SIZE: usize> {
    queue: &'a EventQueue<SIZE>,
}

impl<const SIZE: usize> EventReceiver<'_, SIZE> {
    /// Take the oldest queued event, if any
    pub fn try_receive(&self) -> Option<FixtureEvent> {
        self.queue.pop()
    }
}
