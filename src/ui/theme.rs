use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub error: Color,     // Red
    pub segment: Color,   // Lit segments
    pub border_focused: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    error: Color::Rgb(243, 139, 168),
    segment: Color::Rgb(243, 60, 60),
    border_focused: Color::Rgb(249, 226, 175),
    status_bg: Color::Rgb(50, 50, 70),
};
