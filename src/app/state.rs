use crate::app::player::AudioPlayer;
use crate::control::capture::PointerCapture;
use crate::data::config::Config;
use crate::page::contact::ContactForm;
use crate::page::navbar::Navbar;
use crate::page::notification::Notification;
use crate::page::scroll::PageScroll;
use crate::page::content_height;
use crate::playback::{MediaBackend, PlaybackError};
use crate::render::cover::CoverArt;
use crate::ui::theme::Theme;
use std::time::{Duration, Instant};

const TOAST_TTL: Duration = Duration::from_secs(4);

pub struct AppState<M: MediaBackend> {
    pub config: Config,
    pub theme: Theme,

    pub player: AudioPlayer<M>,
    pub capture: PointerCapture,
    pub cover: CoverArt,

    pub scroll: PageScroll,
    pub navbar: Navbar,
    pub form: ContactForm,
    pub notification: Notification,

    pub toast: Notification,
    pub should_quit: bool,
}

impl<M: MediaBackend> AppState<M> {
    pub fn new(config: Config, theme: Theme, media: M) -> Self {
        let player = AudioPlayer::new(media, config.track.clone(), &config.player);
        let cover = CoverArt::load(&config.track.cover);
        let navbar = Navbar::new(config.page.navbar_scroll_threshold);
        let notification = Notification::new(Duration::from_millis(config.page.notification_ms));

        Self {
            config,
            theme,
            player,
            capture: PointerCapture::new(),
            cover,
            scroll: PageScroll::new(content_height()),
            navbar,
            form: ContactForm::default(),
            notification,
            toast: Notification::new(TOAST_TTL),
            should_quit: false,
        }
    }

    /// Load the configured track. Failure leaves the page running without audio.
    pub fn start(&mut self) {
        if let Err(e) = self.player.load_song() {
            self.report(e);
        }
    }

    pub fn set_toast(&mut self, msg: impl Into<String>) {
        self.toast.show(msg, Instant::now());
    }

    pub fn report(&mut self, err: PlaybackError) {
        log::warn!("playback: {err}");
        self.set_toast(format!("Playback error: {err}"));
    }

    pub fn smooth_scroll_duration(&self) -> Duration {
        Duration::from_millis(self.config.page.smooth_scroll_ms)
    }

    /// Per-frame housekeeping: animations, timed notifications and the
    /// media position feed.
    pub fn tick(&mut self, now: Instant) {
        self.scroll.tick(now);
        self.navbar.on_scroll(self.scroll.offset());
        self.notification.tick(now);
        self.toast.tick(now);

        if let Err(e) = self.player.poll() {
            self.report(e);
        }
    }
}
