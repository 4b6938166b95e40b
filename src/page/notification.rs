use std::time::{Duration, Instant};

/// A message that dismisses itself after a fixed delay.
#[derive(Debug, Clone)]
pub struct Notification {
    message: String,
    visible_until: Option<Instant>,
    ttl: Duration,
}

impl Notification {
    pub fn new(ttl: Duration) -> Self {
        Self {
            message: String::new(),
            visible_until: None,
            ttl,
        }
    }

    /// Show `message`, restarting the timer if one is already showing.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.message = message.into();
        self.visible_until = Some(now + self.ttl);
    }

    pub fn tick(&mut self, now: Instant) {
        if self.visible_until.is_some_and(|until| now >= until) {
            self.visible_until = None;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible_until.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.is_visible().then_some(self.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_after_delay() {
        let mut n = Notification::new(Duration::from_millis(3000));
        let t0 = Instant::now();
        n.show("sent", t0);
        n.tick(t0 + Duration::from_millis(2999));
        assert_eq!(n.message(), Some("sent"));
        n.tick(t0 + Duration::from_millis(3000));
        assert!(!n.is_visible());
        assert_eq!(n.message(), None);
    }

    #[test]
    fn showing_again_restarts_the_timer() {
        let mut n = Notification::new(Duration::from_secs(3));
        let t0 = Instant::now();
        n.show("one", t0);
        n.show("two", t0 + Duration::from_secs(2));
        n.tick(t0 + Duration::from_secs(4));
        assert_eq!(n.message(), Some("two"));
    }
}
