use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
struct SmoothScroll {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl SmoothScroll {
    fn value_at(&self, now: Instant) -> (f32, bool) {
        if self.duration.is_zero() {
            return (self.to, true);
        }
        let t = now.saturating_duration_since(self.started_at).as_secs_f32() / self.duration.as_secs_f32();
        if t >= 1.0 {
            return (self.to, true);
        }
        (self.from + (self.to - self.from) * ease_in_out_cubic(t), false)
    }
}

fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Vertical scroll position of the page, in rows.
#[derive(Debug, Clone)]
pub struct PageScroll {
    offset: f32,
    content_height: u16,
    viewport_height: u16,
    anim: Option<SmoothScroll>,
}

impl PageScroll {
    pub fn new(content_height: u16) -> Self {
        Self {
            offset: 0.0,
            content_height,
            viewport_height: 0,
            anim: None,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn offset_rows(&self) -> u16 {
        self.offset.round().max(0.0) as u16
    }

    pub fn max_offset(&self) -> f32 {
        self.content_height.saturating_sub(self.viewport_height) as f32
    }

    pub fn is_animating(&self) -> bool {
        self.anim.is_some()
    }

    pub fn set_viewport(&mut self, viewport_height: u16) {
        self.viewport_height = viewport_height;
        self.offset = self.offset.clamp(0.0, self.max_offset());
        if let Some(anim) = self.anim.as_mut() {
            anim.to = anim.to.clamp(0.0, self.content_height.saturating_sub(viewport_height) as f32);
        }
    }

    /// Wheel scrolling. Interrupts any running animation.
    pub fn scroll_by(&mut self, rows: f32) {
        self.anim = None;
        self.offset = (self.offset + rows).clamp(0.0, self.max_offset());
    }

    /// Animate to `target` (clamped to the scrollable range).
    pub fn scroll_to(&mut self, target: u16, now: Instant, duration: Duration) {
        let to = (target as f32).clamp(0.0, self.max_offset());
        self.anim = Some(SmoothScroll {
            from: self.offset,
            to,
            started_at: now,
            duration,
        });
        self.tick(now);
    }

    pub fn tick(&mut self, now: Instant) {
        let Some(anim) = self.anim else {
            return;
        };
        let (value, done) = anim.value_at(now);
        self.offset = value;
        if done {
            self.anim = None;
        }
    }
}
