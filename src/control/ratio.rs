use crate::control::capture::{ControlId, PointerCapture, Subscription};
use crate::playback::PlaybackError;

/// Horizontal extent of a track, in terminal columns.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackBounds {
    pub left: f32,
    pub width: f32,
}

/// Map a pointer column onto a track and return the clamped ratio.
///
/// A track with no width (not laid out yet, or squeezed to nothing) yields 0.
pub fn ratio_from_pointer(pointer_x: f32, track_left: f32, track_width: f32) -> f32 {
    if !(track_width > 0.0) || !track_width.is_finite() {
        return 0.0;
    }
    let x = pointer_x - track_left;
    if x.is_nan() {
        return 0.0;
    }
    x.clamp(0.0, track_width) / track_width
}

/// Where the value of a control ends up (media position, volume, ...).
pub trait RatioTarget {
    fn apply(&mut self, ratio: f32) -> Result<(), PlaybackError>;
}

/// When a control pushes its ratio to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// Only the indicator follows the drag; the target is written once on release.
    OnRelease,
    /// The target is written on press and on every move.
    Live,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Fill width and handle offset, both in percent of the track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Indicator {
    pub fill_percent: f32,
    pub handle_percent: f32,
}

#[derive(Debug)]
pub struct RatioControl {
    id: ControlId,
    commit: Commit,
    drag: DragState,
    ratio: f32,
    indicator: Indicator,
    subscription: Option<Subscription>,
}

impl RatioControl {
    pub fn new(id: ControlId, commit: Commit) -> Self {
        Self {
            id,
            commit,
            drag: DragState::Idle,
            ratio: 0.0,
            indicator: Indicator::default(),
            subscription: None,
        }
    }

    pub fn seek() -> Self {
        Self::new(ControlId::Seek, Commit::OnRelease)
    }

    pub fn volume() -> Self {
        Self::new(ControlId::Volume, Commit::Live)
    }

    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator
    }

    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    /// Pointer pressed on the track.
    ///
    /// Subscribes to terminal-wide pointer events so the drag keeps tracking
    /// after the pointer leaves the track. A second press without a release
    /// in between keeps the existing subscription.
    pub fn begin_interaction(
        &mut self,
        pointer_x: f32,
        bounds: TrackBounds,
        capture: &mut PointerCapture,
        target: &mut dyn RatioTarget,
    ) -> Result<(), PlaybackError> {
        self.drag = DragState::Dragging;
        if self.subscription.is_none() {
            self.subscription = Some(capture.subscribe(self.id));
        }
        self.track_pointer(pointer_x, bounds, target)
    }

    pub fn continue_interaction(
        &mut self,
        pointer_x: f32,
        bounds: TrackBounds,
        target: &mut dyn RatioTarget,
    ) -> Result<(), PlaybackError> {
        if !self.is_dragging() {
            return Ok(());
        }
        self.track_pointer(pointer_x, bounds, target)
    }

    /// Pointer released anywhere. Ends the drag session and, for
    /// [`Commit::OnRelease`] controls, writes the final ratio to the target.
    pub fn end_interaction(
        &mut self,
        capture: &mut PointerCapture,
        target: &mut dyn RatioTarget,
    ) -> Result<(), PlaybackError> {
        if !self.is_dragging() {
            return Ok(());
        }
        self.drag = DragState::Idle;
        if let Some(sub) = self.subscription.take() {
            capture.unsubscribe(sub);
        }
        match self.commit {
            Commit::OnRelease => {
                log::debug!("{:?}: commit {:.3}", self.id, self.ratio);
                target.apply(self.ratio)
            }
            Commit::Live => Ok(()),
        }
    }

    pub fn render(&mut self, ratio: f32) {
        let pct = ratio * 100.0;
        self.indicator = Indicator {
            fill_percent: pct,
            handle_percent: pct,
        };
    }

    /// Refresh from an outside source (media clock, mute toggle).
    ///
    /// Ignored while a drag is in progress so the user's position is never
    /// overwritten. Returns whether the update was applied.
    pub fn set_from_external_update(&mut self, current: f64, total: f64) -> bool {
        if self.is_dragging() {
            return false;
        }
        let ratio = if total > 0.0 && total.is_finite() && current.is_finite() {
            (current / total).clamp(0.0, 1.0) as f32
        } else {
            0.0
        };
        self.set_ratio(ratio);
        true
    }

    fn set_ratio(&mut self, ratio: f32) {
        self.ratio = ratio.clamp(0.0, 1.0);
        self.render(self.ratio);
    }

    fn track_pointer(
        &mut self,
        pointer_x: f32,
        bounds: TrackBounds,
        target: &mut dyn RatioTarget,
    ) -> Result<(), PlaybackError> {
        self.set_ratio(ratio_from_pointer(pointer_x, bounds.left, bounds.width));
        match self.commit {
            Commit::Live => target.apply(self.ratio),
            Commit::OnRelease => Ok(()),
        }
    }
}
