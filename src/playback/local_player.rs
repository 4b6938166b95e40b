use crate::playback::metadata::read_duration;
use crate::playback::{MediaBackend, PlaybackError};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

pub struct LocalPlayer {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Sink,

    current_path: Option<PathBuf>,
    duration: Option<Duration>,

    volume: f32,

    // position tracking: seek origin + time spent playing since then
    base_seek: Duration,
    started_at: Option<Instant>,
    played_acc: Duration,

    finished_reported: bool,
}

impl LocalPlayer {
    pub fn new() -> Result<Self, PlaybackError> {
        let (_stream, handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&handle)?;
        sink.pause();
        Ok(Self {
            _stream,
            handle,
            sink,
            current_path: None,
            duration: None,
            volume: 1.0,
            base_seek: Duration::ZERO,
            started_at: None,
            played_acc: Duration::ZERO,
            finished_reported: false,
        })
    }

    fn open(path: &Path) -> Result<Decoder<BufReader<File>>, PlaybackError> {
        let file = File::open(path).map_err(|source| PlaybackError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Decoder::new(BufReader::new(file)).map_err(|source| PlaybackError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replace the sink, preserving volume and paused state.
    fn fresh_sink(&mut self, paused: bool) -> Result<(), PlaybackError> {
        self.sink.stop();
        self.sink = Sink::try_new(&self.handle)?;
        self.sink.set_volume(self.volume);
        if paused {
            self.sink.pause();
        }
        Ok(())
    }

    fn played(&self) -> Duration {
        match self.started_at {
            Some(start) => self.played_acc + start.elapsed(),
            None => self.played_acc,
        }
    }
}

impl MediaBackend for LocalPlayer {
    fn load(&mut self, path: &Path) -> Result<(), PlaybackError> {
        let decoder = Self::open(path)?;

        self.duration = match read_duration(path) {
            Ok(d) if !d.is_zero() => Some(d),
            Ok(_) => decoder.total_duration(),
            Err(e) => {
                log::warn!("reading metadata failed for {}: {e}", path.display());
                decoder.total_duration()
            }
        };

        self.fresh_sink(true)?;
        self.sink.append(decoder);

        self.current_path = Some(path.to_path_buf());
        self.base_seek = Duration::ZERO;
        self.played_acc = Duration::ZERO;
        self.started_at = None;
        self.finished_reported = false;
        log::info!("loaded {} ({:?})", path.display(), self.duration);
        Ok(())
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        if self.current_path.is_none() {
            return Err(PlaybackError::NotLoaded);
        }
        self.sink.play();
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(start) = self.started_at.take() {
            self.played_acc += start.elapsed();
        }
        self.sink.pause();
    }

    fn position(&self) -> Duration {
        if self.current_path.is_none() {
            return Duration::ZERO;
        }
        let pos = self.base_seek + self.played();
        match self.duration {
            Some(total) => pos.min(total),
            None => pos,
        }
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn seek(&mut self, pos: Duration) -> Result<(), PlaybackError> {
        let Some(path) = self.current_path.clone() else {
            return Err(PlaybackError::NotLoaded);
        };
        let decoder = Self::open(&path)?;
        let paused = self.sink.is_paused();

        self.fresh_sink(paused)?;
        self.sink.append(decoder.skip_duration(pos));

        self.base_seek = pos;
        self.played_acc = Duration::ZERO;
        self.started_at = if paused { None } else { Some(Instant::now()) };
        self.finished_reported = false;
        Ok(())
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        self.sink.set_volume(self.volume);
    }

    fn poll_finished(&mut self) -> bool {
        if self.current_path.is_none() || self.finished_reported || !self.sink.empty() {
            return false;
        }
        self.finished_reported = true;
        if let Some(start) = self.started_at.take() {
            self.played_acc += start.elapsed();
        }
        true
    }
}
