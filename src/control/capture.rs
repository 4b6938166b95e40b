/// Which control a terminal-wide pointer subscription belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    Seek,
    Volume,
}

/// Handle returned by [`PointerCapture::subscribe`].
///
/// Not `Clone`: giving it back to `unsubscribe` consumes it, so a subscription
/// can only ever be removed once.
#[derive(Debug, PartialEq, Eq)]
pub struct Subscription {
    id: u64,
    control: ControlId,
}

/// Terminal-wide pointer listeners.
///
/// A control subscribes when a drag session starts on its track and
/// unsubscribes when the session ends. While subscribed it receives every
/// pointer move and the pointer release, wherever they happen on screen.
#[derive(Debug, Default)]
pub struct PointerCapture {
    next_id: u64,
    active: Vec<(u64, ControlId)>,
}

impl PointerCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, control: ControlId) -> Subscription {
        self.next_id += 1;
        let id = self.next_id;
        self.active.push((id, control));
        log::debug!("pointer capture: +{control:?} (#{id})");
        Subscription { id, control }
    }

    pub fn unsubscribe(&mut self, sub: Subscription) {
        let before = self.active.len();
        self.active.retain(|(id, _)| *id != sub.id);
        if self.active.len() == before {
            log::warn!("pointer capture: #{} was not registered", sub.id);
        } else {
            log::debug!("pointer capture: -{:?} (#{})", sub.control, sub.id);
        }
    }

    /// Controls currently listening, in subscription order.
    pub fn subscribers(&self) -> Vec<ControlId> {
        self.active.iter().map(|(_, c)| *c).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
