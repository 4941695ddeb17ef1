use dom::Id;
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Char(char),
    Other(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    KeyUp,
    Change,
    Click,
    Focus,
    Blur,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomEvent {
    pub target: Id,
    pub kind: EventKind,
    /// Set for `KeyDown` / `KeyUp`.
    pub key: Option<Key>,
}

impl DomEvent {
    pub fn new(target: Id, kind: EventKind) -> Self {
        Self {
            target,
            kind,
            key: None,
        }
    }

    pub fn key_down(target: Id, key: Key) -> Self {
        Self {
            target,
            kind: EventKind::KeyDown,
            key: Some(key),
        }
    }

    pub fn key_up(target: Id, key: Key) -> Self {
        Self {
            target,
            kind: EventKind::KeyUp,
            key: Some(key),
        }
    }

    pub fn is_key(&self, key: &Key) -> bool {
        self.key.as_ref() == Some(key)
    }
}

/// What listeners asked the host to do with the event's default action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub default_prevented: bool,
    pub propagation_stopped: bool,
}

impl DispatchOutcome {
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Prevents the default action and stops propagation.
    pub fn stop(&mut self) {
        self.default_prevented = true;
        self.propagation_stopped = true;
    }

    pub fn merge(&mut self, other: DispatchOutcome) {
        self.default_prevented |= other.default_prevented;
        self.propagation_stopped |= other.propagation_stopped;
    }
}

/// Listener registrations keyed by target element and event kind.
///
/// Registering the same listener twice for the same target and kind is a
/// no-op, so repeated setup never doubles a handler.
#[derive(Debug)]
pub struct EventBus<L> {
    listeners: HashMap<(Id, EventKind), Vec<L>>,
}

impl<L: Copy + PartialEq> EventBus<L> {
    pub fn new() -> Self {
        Self {
            listeners: HashMap::new(),
        }
    }

    /// Returns `false` if the listener was already registered.
    pub fn subscribe(&mut self, target: Id, kind: EventKind, listener: L) -> bool {
        let list = self.listeners.entry((target, kind)).or_default();
        if list.contains(&listener) {
            return false;
        }
        list.push(listener);
        true
    }

    /// Listeners in registration order.
    pub fn listeners(&self, target: Id, kind: EventKind) -> &[L] {
        self.listeners
            .get(&(target, kind))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_subscribed(&self, target: Id, kind: EventKind) -> bool {
        !self.listeners(target, kind).is_empty()
    }

    pub fn unsubscribe_target(&mut self, target: Id) {
        self.listeners.retain(|(t, _), _| *t != target);
    }

    pub fn len(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<L: Copy + PartialEq> Default for EventBus<L> {
    fn default() -> Self {
        Self::new()
    }
}
