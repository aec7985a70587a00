use macroquad::prelude::Color;

/// Visual theme colors for the stack chrome and panels.
#[derive(Clone, Debug)]
pub struct Theme {
    /// Primary text color
    pub text_color: Color,
    /// Secondary text, e.g. breadcrumbs
    pub muted_text: Color,
    pub button_bg: Color,
    pub button_hover_bg: Color,
    pub panel_bg: Color,
    pub panel_border: Color,
    /// Title bar behind back/close buttons
    pub chrome_bg: Color,
    /// Dimmed backdrop behind an open stack
    pub backdrop: Color,
    pub window_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            text_color: Color::from_rgba(255, 255, 255, 255),
            muted_text: Color::from_rgba(150, 150, 160, 255),
            button_bg: Color::from_rgba(40, 40, 40, 200),
            button_hover_bg: Color::from_rgba(60, 60, 60, 200),
            panel_bg: Color::from_rgba(20, 20, 20, 220),
            panel_border: Color::from_rgba(50, 50, 50, 255),
            chrome_bg: Color::from_rgba(32, 32, 40, 255),
            backdrop: Color::from_rgba(0, 0, 0, 140),
            window_bg: Color::from_rgba(12, 12, 16, 255),
        }
    }
}
