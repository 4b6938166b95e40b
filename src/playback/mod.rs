#[cfg(test)]
pub mod fake;
pub mod local_player;
pub mod metadata;

use crate::control::ratio::RatioTarget;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("no audio output device: {0}")]
    NoOutputDevice(#[from] rodio::StreamError),

    #[error("audio sink unavailable: {0}")]
    Sink(#[from] rodio::PlayError),

    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    #[error("no track loaded")]
    NotLoaded,
}

/// Audio playback as seen by the player widget.
pub trait MediaBackend {
    /// Load a track, replacing the current one. Playback starts paused at 0.
    fn load(&mut self, path: &std::path::Path) -> Result<(), PlaybackError>;

    fn play(&mut self) -> Result<(), PlaybackError>;

    fn pause(&mut self);

    /// Elapsed playback time; zero when nothing is loaded.
    fn position(&self) -> Duration;

    /// Total length, `None` until known.
    fn duration(&self) -> Option<Duration>;

    /// Jump to `pos`, keeping the current paused/playing state.
    fn seek(&mut self, pos: Duration) -> Result<(), PlaybackError>;

    /// Volume (0.0 - 1.0)
    fn volume(&self) -> f32;

    fn set_volume(&mut self, volume: f32);

    /// True exactly once after the loaded track runs out.
    fn poll_finished(&mut self) -> bool;
}

/// Writes a ratio of the track length as the playback position.
pub struct SeekTarget<'a, M: MediaBackend + ?Sized>(pub &'a mut M);

impl<M: MediaBackend + ?Sized> RatioTarget for SeekTarget<'_, M> {
    fn apply(&mut self, ratio: f32) -> Result<(), PlaybackError> {
        let Some(total) = self.0.duration() else {
            return Ok(());
        };
        if total.is_zero() {
            return Ok(());
        }
        self.0.seek(total.mul_f32(ratio.clamp(0.0, 1.0)))
    }
}

/// Writes a ratio as the output volume.
pub struct VolumeTarget<'a, M: MediaBackend + ?Sized>(pub &'a mut M);

impl<M: MediaBackend + ?Sized> RatioTarget for VolumeTarget<'_, M> {
    fn apply(&mut self, ratio: f32) -> Result<(), PlaybackError> {
        self.0.set_volume(ratio);
        Ok(())
    }
}
