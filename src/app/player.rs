use crate::control::capture::{ControlId, PointerCapture};
use crate::control::mute::{MuteMemory, VolumeIcon};
use crate::control::ratio::{Indicator, RatioControl, TrackBounds};
use crate::data::config::{PlayerConfig, TrackConfig};
use crate::playback::{MediaBackend, PlaybackError, SeekTarget, VolumeTarget};
use crate::utils::timefmt::format_time;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
}

/// The audio widget: transport buttons, seek bar, volume slider.
pub struct AudioPlayer<M: MediaBackend> {
    media: M,
    track: TrackConfig,
    loaded: bool,
    playback: PlaybackState,

    seek: RatioControl,
    volume: RatioControl,
    mute: MuteMemory,
    initial_volume: f32,

    current_label: String,
    total_label: String,
    progress_hovered: bool,
}

impl<M: MediaBackend> AudioPlayer<M> {
    pub fn new(media: M, track: TrackConfig, cfg: &PlayerConfig) -> Self {
        Self {
            media,
            track,
            loaded: false,
            playback: PlaybackState::Paused,
            seek: RatioControl::seek(),
            volume: RatioControl::volume(),
            mute: MuteMemory::new(cfg.unmute_fallback),
            initial_volume: cfg.initial_volume,
            current_label: format_time(0.0),
            total_label: format_time(0.0),
            progress_hovered: false,
        }
    }

    pub fn load_song(&mut self) -> Result<(), PlaybackError> {
        self.current_label = format_time(0.0);
        self.media.set_volume(self.initial_volume);
        self.update_volume_ui();

        self.media.load(&self.track.src)?;
        self.loaded = true;
        self.on_metadata();
        Ok(())
    }

    pub fn toggle_play_pause(&mut self) -> Result<(), PlaybackError> {
        match self.playback {
            PlaybackState::Playing => {
                self.pause_song();
                Ok(())
            }
            PlaybackState::Paused => self.play_song(),
        }
    }

    fn play_song(&mut self) -> Result<(), PlaybackError> {
        self.media.play()?;
        self.playback = PlaybackState::Playing;
        Ok(())
    }

    fn pause_song(&mut self) {
        self.playback = PlaybackState::Paused;
        self.media.pause();
    }

    /// Back to the start of the track. Previous, next and replay all do this;
    /// there is only one track.
    pub fn restart(&mut self) -> Result<(), PlaybackError> {
        if !self.loaded {
            return Ok(());
        }
        self.media.seek(Duration::ZERO)?;
        self.on_time_update();
        if self.playback == PlaybackState::Playing {
            self.play_song()?;
        }
        Ok(())
    }

    /// Periodic media feed, once per frame.
    pub fn poll(&mut self) -> Result<(), PlaybackError> {
        if !self.loaded {
            return Ok(());
        }
        if self.media.poll_finished() {
            self.on_ended()?;
        }
        self.on_time_update();
        Ok(())
    }

    /// Refresh the seek bar and elapsed label from the media clock, unless
    /// the user is dragging the seek bar.
    pub fn on_time_update(&mut self) {
        if self.seek.is_dragging() {
            return;
        }
        let pos = self.media.position().as_secs_f64();
        let total = self.media.duration().map_or(0.0, |d| d.as_secs_f64());
        self.seek.set_from_external_update(pos, total);
        self.current_label = format_time(pos);
    }

    pub fn on_metadata(&mut self) {
        let total = self.media.duration().map_or(0.0, |d| d.as_secs_f64());
        self.total_label = format_time(total);
    }

    pub fn on_ended(&mut self) -> Result<(), PlaybackError> {
        log::info!("track ended");
        self.pause_song();
        self.media.seek(Duration::ZERO)?;
        self.on_time_update();
        Ok(())
    }

    pub fn begin_seek(
        &mut self,
        pointer_x: f32,
        bounds: TrackBounds,
        capture: &mut PointerCapture,
    ) -> Result<(), PlaybackError> {
        self.seek
            .begin_interaction(pointer_x, bounds, capture, &mut SeekTarget(&mut self.media))
    }

    pub fn begin_volume(
        &mut self,
        pointer_x: f32,
        bounds: TrackBounds,
        capture: &mut PointerCapture,
    ) -> Result<(), PlaybackError> {
        let res = self
            .volume
            .begin_interaction(pointer_x, bounds, capture, &mut VolumeTarget(&mut self.media));
        self.update_volume_ui();
        res
    }

    /// Terminal-wide pointer move, routed to a subscribed control.
    pub fn pointer_moved(
        &mut self,
        id: ControlId,
        pointer_x: f32,
        bounds: TrackBounds,
    ) -> Result<(), PlaybackError> {
        match id {
            ControlId::Seek => {
                self.seek
                    .continue_interaction(pointer_x, bounds, &mut SeekTarget(&mut self.media))
            }
            ControlId::Volume => {
                let res = self.volume.continue_interaction(
                    pointer_x,
                    bounds,
                    &mut VolumeTarget(&mut self.media),
                );
                self.update_volume_ui();
                res
            }
        }
    }

    /// Terminal-wide pointer release, routed to a subscribed control.
    pub fn pointer_released(
        &mut self,
        id: ControlId,
        capture: &mut PointerCapture,
    ) -> Result<(), PlaybackError> {
        match id {
            ControlId::Seek => {
                let res = self
                    .seek
                    .end_interaction(capture, &mut SeekTarget(&mut self.media));
                self.on_time_update();
                res
            }
            ControlId::Volume => self
                .volume
                .end_interaction(capture, &mut VolumeTarget(&mut self.media)),
        }
    }

    pub fn toggle_mute(&mut self) {
        let level = self.mute.toggle(self.media.volume());
        self.media.set_volume(level);
        self.update_volume_ui();
    }

    fn update_volume_ui(&mut self) {
        self.volume.set_from_external_update(self.media.volume() as f64, 1.0);
    }

    pub fn set_progress_hovered(&mut self, hovered: bool) {
        self.progress_hovered = hovered;
    }

    /// The seek handle shows on hover and stays up for the whole drag.
    pub fn progress_handle_visible(&self) -> bool {
        self.progress_hovered || self.seek.is_dragging()
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn track(&self) -> &TrackConfig {
        &self.track
    }

    pub fn seek_indicator(&self) -> Indicator {
        self.seek.indicator()
    }

    pub fn volume_indicator(&self) -> Indicator {
        self.volume.indicator()
    }

    pub fn volume_level(&self) -> f32 {
        self.media.volume()
    }

    pub fn volume_icon(&self) -> VolumeIcon {
        VolumeIcon::for_level(self.media.volume())
    }

    pub fn is_dragging(&self, id: ControlId) -> bool {
        match id {
            ControlId::Seek => self.seek.is_dragging(),
            ControlId::Volume => self.volume.is_dragging(),
        }
    }

    pub fn current_label(&self) -> &str {
        &self.current_label
    }

    pub fn total_label(&self) -> &str {
        &self.total_label
    }

    #[cfg(test)]
    pub fn media(&self) -> &M {
        &self.media
    }

    #[cfg(test)]
    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::mute::VolumeIcon;
    use crate::playback::fake::FakeMedia;

    const TRACK: TrackBounds = TrackBounds { left: 0.0, width: 100.0 };

    fn player() -> AudioPlayer<FakeMedia> {
        let mut p = AudioPlayer::new(
            FakeMedia::with_duration(240),
            TrackConfig::default(),
            &PlayerConfig::default(),
        );
        p.load_song().unwrap();
        p
    }

    #[test]
    fn load_applies_initial_volume_and_labels() {
        let p = player();
        assert_eq!(p.volume_level(), 0.5);
        assert_eq!(p.volume_indicator().fill_percent, 50.0);
        assert_eq!(p.volume_icon(), VolumeIcon::High);
        assert_eq!(p.current_label(), "0:00");
        assert_eq!(p.total_label(), "4:00");
        assert_eq!(p.playback(), PlaybackState::Paused);
    }

    #[test]
    fn load_failure_keeps_the_widget_usable() {
        let mut media = FakeMedia::with_duration(240);
        media.fail_load = true;
        let mut p = AudioPlayer::new(media, TrackConfig::default(), &PlayerConfig::default());
        assert!(p.load_song().is_err());
        assert!(!p.is_loaded());
        assert!(p.toggle_play_pause().is_err());
        assert_eq!(p.playback(), PlaybackState::Paused);
        assert!(p.restart().is_ok());
    }

    #[test]
    fn play_pause_follows_explicit_state() {
        let mut p = player();
        p.toggle_play_pause().unwrap();
        assert_eq!(p.playback(), PlaybackState::Playing);
        assert!(!p.media().paused);
        p.toggle_play_pause().unwrap();
        assert_eq!(p.playback(), PlaybackState::Paused);
        assert!(p.media().paused);
    }

    #[test]
    fn time_update_shows_position() {
        let mut p = player();
        p.media_mut().position = Duration::from_secs(60);
        p.on_time_update();
        assert_eq!(p.current_label(), "1:00");
        assert_eq!(p.seek_indicator().fill_percent, 25.0);
    }

    #[test]
    fn seek_drag_is_committed_on_release_only() {
        let mut p = player();
        let mut capture = PointerCapture::new();
        p.media_mut().position = Duration::from_secs(60);
        p.on_time_update();

        p.begin_seek(20.0, TRACK, &mut capture).unwrap();
        p.pointer_moved(ControlId::Seek, 80.0, TRACK).unwrap();

        // The media clock keeps ticking during the drag; the bar must not follow it.
        p.media_mut().position = Duration::from_secs(61);
        p.poll().unwrap();

        assert!((p.seek_indicator().fill_percent - 80.0).abs() < 1e-4);
        assert!(p.media().seeks.is_empty());
        assert_eq!(p.media().position, Duration::from_secs(61));

        p.pointer_released(ControlId::Seek, &mut capture).unwrap();
        assert_eq!(p.media().seeks.len(), 1);
        let landed = p.media().position.as_secs_f64();
        assert!((landed - 192.0).abs() < 0.01, "{landed}");
        assert_eq!(p.current_label(), "3:12");
        assert!(capture.is_empty());
    }

    #[test]
    fn volume_drag_is_live() {
        let mut p = player();
        let mut capture = PointerCapture::new();

        p.begin_volume(30.0, TRACK, &mut capture).unwrap();
        assert_eq!(p.volume_level(), 0.3);
        assert_eq!(p.volume_icon(), VolumeIcon::Low);

        p.pointer_moved(ControlId::Volume, -10.0, TRACK).unwrap();
        assert_eq!(p.volume_level(), 0.0);
        assert_eq!(p.volume_icon(), VolumeIcon::Muted);

        p.pointer_moved(ControlId::Volume, 90.0, TRACK).unwrap();
        p.pointer_released(ControlId::Volume, &mut capture).unwrap();
        assert_eq!(p.volume_level(), 0.9);
        assert!((p.volume_indicator().handle_percent - 90.0).abs() < 1e-3);
        assert!(capture.is_empty());
    }

    #[test]
    fn mute_round_trip() {
        let mut p = player();
        let mut capture = PointerCapture::new();
        p.begin_volume(42.0, TRACK, &mut capture).unwrap();
        p.pointer_released(ControlId::Volume, &mut capture).unwrap();

        p.toggle_mute();
        assert_eq!(p.volume_level(), 0.0);
        assert_eq!(p.volume_indicator().fill_percent, 0.0);
        p.toggle_mute();
        assert_eq!(p.volume_level(), 0.42);
    }

    #[test]
    fn restart_keeps_playing() {
        let mut p = player();
        p.toggle_play_pause().unwrap();
        p.media_mut().position = Duration::from_secs(100);
        p.restart().unwrap();
        assert_eq!(p.media().position, Duration::ZERO);
        assert_eq!(p.playback(), PlaybackState::Playing);
        assert_eq!(p.current_label(), "0:00");
    }

    #[test]
    fn end_of_track_pauses_and_rewinds() {
        let mut p = player();
        p.toggle_play_pause().unwrap();
        p.media_mut().position = Duration::from_secs(240);
        p.media_mut().finished = true;
        p.poll().unwrap();
        assert_eq!(p.playback(), PlaybackState::Paused);
        assert_eq!(p.media().position, Duration::ZERO);
        assert_eq!(p.seek_indicator().fill_percent, 0.0);
    }

    #[test]
    fn unknown_duration_shows_empty_bar() {
        let mut media = FakeMedia::with_duration(0);
        media.duration = None;
        let mut p = AudioPlayer::new(media, TrackConfig::default(), &PlayerConfig::default());
        p.load_song().unwrap();
        p.media_mut().position = Duration::from_secs(5);
        p.on_time_update();
        assert_eq!(p.seek_indicator().fill_percent, 0.0);
        assert_eq!(p.total_label(), "0:00");
    }

    #[test]
    fn handle_visible_while_hovered_or_dragging() {
        let mut p = player();
        let mut capture = PointerCapture::new();
        assert!(!p.progress_handle_visible());
        p.set_progress_hovered(true);
        assert!(p.progress_handle_visible());
        p.begin_seek(10.0, TRACK, &mut capture).unwrap();
        p.set_progress_hovered(false);
        assert!(p.progress_handle_visible());
        p.pointer_released(ControlId::Seek, &mut capture).unwrap();
        assert!(!p.progress_handle_visible());
    }
}
