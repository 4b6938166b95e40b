pub mod borders;
pub mod theme;
pub mod tui;

pub mod components {
    pub mod contact_field;
    pub mod control_buttons;
    pub mod navbar;
    pub mod progress_bar;
    pub mod volume_bar;
}

pub mod panels {
    pub mod about_panel;
    pub mod contact_panel;
    pub mod hero_panel;
    pub mod player_panel;
}
