pub mod event_loop;
pub mod player;
pub mod state;
