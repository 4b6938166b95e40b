use ratatui::symbols::border::Set;

/// Rounded frame for the player card, form fields and the notification.
pub const CARD_BORDER: Set = Set {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};
