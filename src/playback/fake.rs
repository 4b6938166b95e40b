use crate::playback::{MediaBackend, PlaybackError};
use std::path::Path;
use std::time::Duration;

/// In-memory backend that records what the player asks of it.
#[derive(Debug, Clone)]
pub struct FakeMedia {
    pub loaded: bool,
    pub paused: bool,
    pub position: Duration,
    pub duration: Option<Duration>,
    pub volume: f32,
    pub seeks: Vec<Duration>,
    pub volume_writes: Vec<f32>,
    pub finished: bool,
    pub fail_load: bool,
}

impl FakeMedia {
    pub fn with_duration(secs: u64) -> Self {
        Self {
            loaded: false,
            paused: true,
            position: Duration::ZERO,
            duration: Some(Duration::from_secs(secs)),
            volume: 1.0,
            seeks: Vec::new(),
            volume_writes: Vec::new(),
            finished: false,
            fail_load: false,
        }
    }
}

impl MediaBackend for FakeMedia {
    fn load(&mut self, path: &Path) -> Result<(), PlaybackError> {
        if self.fail_load {
            return Err(PlaybackError::Open {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        self.loaded = true;
        self.paused = true;
        self.position = Duration::ZERO;
        Ok(())
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        if !self.loaded {
            return Err(PlaybackError::NotLoaded);
        }
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn seek(&mut self, pos: Duration) -> Result<(), PlaybackError> {
        if !self.loaded {
            return Err(PlaybackError::NotLoaded);
        }
        self.position = pos;
        self.seeks.push(pos);
        Ok(())
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        self.volume_writes.push(self.volume);
    }

    fn poll_finished(&mut self) -> bool {
        std::mem::take(&mut self.finished)
    }
}
