use crate::app::state::AppState;
use crate::control::capture::ControlId;
use crate::control::ratio::TrackBounds;
use crate::page::Section;
use crate::playback::{MediaBackend, PlaybackError};
use crate::ui::tui::{hit_test, track_bounds, Hit, Tui, UiLayout};
use crate::utils::input::{map_key, map_mouse, Action};
use anyhow::Result;
use crossterm::event::{self, Event};
use std::time::{Duration, Instant};

pub fn run<M: MediaBackend>(app: &mut AppState<M>) -> Result<()> {
    let mut tui = Tui::new()?;
    tui.enter()?;

    let res = run_loop(app, &mut tui);

    // restore the terminal even when the loop failed
    let exit = tui.exit();
    res.and(exit)
}

fn run_loop<M: MediaBackend>(app: &mut AppState<M>, tui: &mut Tui) -> Result<()> {
    let frame = Duration::from_millis(1000 / app.config.ui_fps.max(1) as u64);
    let mut last_layout = UiLayout::default();

    loop {
        let frame_start = Instant::now();

        while event::poll(Duration::from_millis(0))? {
            let action = match event::read()? {
                Event::Key(k) => map_key(k, app.form.focused().is_some()),
                Event::Mouse(m) => map_mouse(m),
                _ => Action::None,
            };
            handle_action(app, action, &last_layout, Instant::now());
        }

        if app.should_quit {
            log::info!("quit");
            return Ok(());
        }

        app.tick(Instant::now());
        last_layout = tui.draw(app)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            // idle until the next frame or the next input event
            event::poll(frame - elapsed)?;
        }
    }
}

fn control_bounds(layout: &UiLayout, id: ControlId) -> TrackBounds {
    match id {
        ControlId::Seek => track_bounds(layout.page.progress),
        ControlId::Volume => track_bounds(layout.page.volume),
    }
}

fn scroll_to_section<M: MediaBackend>(app: &mut AppState<M>, section: Section, now: Instant) {
    log::debug!("navigate to {}", section.label());
    let duration = app.smooth_scroll_duration();
    app.scroll.scroll_to(section.top(), now, duration);
}

fn pointer_down<M: MediaBackend>(
    app: &mut AppState<M>,
    col: u16,
    row: u16,
    layout: &UiLayout,
    now: Instant,
) -> Result<(), PlaybackError> {
    let hit = hit_test(layout, col, row);
    if !matches!(hit, Some(Hit::Field(_))) {
        app.form.blur();
    }

    match hit {
        Some(Hit::Brand) => scroll_to_section(app, Section::Home, now),
        Some(Hit::Link(section)) => scroll_to_section(app, section, now),
        Some(Hit::PlayPause) => app.player.toggle_play_pause()?,
        Some(Hit::Prev | Hit::Next | Hit::Replay) => app.player.restart()?,
        Some(Hit::ProgressTrack) => app.player.begin_seek(
            col as f32,
            control_bounds(layout, ControlId::Seek),
            &mut app.capture,
        )?,
        Some(Hit::VolumeIcon) => app.player.toggle_mute(),
        Some(Hit::VolumeTrack) => app.player.begin_volume(
            col as f32,
            control_bounds(layout, ControlId::Volume),
            &mut app.capture,
        )?,
        Some(Hit::Field(field)) => app.form.focus(field),
        Some(Hit::Send) => app.form.submit(&mut app.notification, now),
        None => {}
    }
    Ok(())
}

/// Apply one input action. Bounds for drags come from `layout`, the
/// geometry of the frame the user is looking at.
pub fn handle_action<M: MediaBackend>(
    app: &mut AppState<M>,
    action: Action,
    layout: &UiLayout,
    now: Instant,
) {
    let res = match action {
        Action::Quit => {
            app.should_quit = true;
            Ok(())
        }

        Action::PointerDown { col, row } => pointer_down(app, col, row, layout, now),

        Action::PointerDrag { col, row } => {
            app.player
                .set_progress_hovered(hit_test(layout, col, row) == Some(Hit::ProgressTrack));
            let mut res = Ok(());
            for id in app.capture.subscribers() {
                res = res.and(app.player.pointer_moved(id, col as f32, control_bounds(layout, id)));
            }
            res
        }

        Action::PointerUp { .. } if app.capture.is_empty() => Ok(()),
        Action::PointerUp { .. } => {
            let mut res = Ok(());
            for id in app.capture.subscribers() {
                res = res.and(app.player.pointer_released(id, &mut app.capture));
            }
            res
        }

        Action::PointerMoved { col, row } => {
            app.player
                .set_progress_hovered(hit_test(layout, col, row) == Some(Hit::ProgressTrack));
            Ok(())
        }

        Action::ScrollBy(rows) => {
            app.scroll.scroll_by(rows as f32);
            Ok(())
        }

        Action::FocusNext => {
            app.form.focus_next();
            Ok(())
        }
        Action::Blur => {
            app.form.blur();
            Ok(())
        }
        Action::Char(c) => {
            app.form.insert(c);
            Ok(())
        }
        Action::Backspace => {
            app.form.backspace();
            Ok(())
        }
        Action::Enter => {
            app.form.enter(&mut app.notification, now);
            Ok(())
        }

        Action::None => Ok(()),
    };

    if let Err(e) = res {
        app.report(e);
    }
}
