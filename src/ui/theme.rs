use ratatui::style::Color;

pub struct Theme {
    #[allow(dead_code)] // Background fill, reserved for future use
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub pointer: Color,   // Cyan for the L/R/M marker row
    pub border_focused: Color,
    pub border_normal: Color,
    pub highlight_bg: Color, // Status bar and active input field background
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    pointer: Color::Rgb(148, 226, 213),        // Cyan/teal markers
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    highlight_bg: Color::Rgb(50, 50, 70),      // Slightly lighter than bg
};
