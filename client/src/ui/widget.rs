use crate::ui::context::DrawCmd;
use crate::ui::context::UiContext;
use macroquad::math::{Rect, Vec2};

/// Response from widget interaction
#[derive(Debug, PartialEq, Eq)]
pub enum UiResponse {
    None,
    Clicked,
}

/// Trait every UI widget implements.
pub trait Widget {
    /// Handle input and record draw commands.
    fn ui(&mut self, ctx: &mut UiContext, area: Rect) -> UiResponse;
}

/// Simple text label.
#[derive(Debug, Clone)]
pub struct Label {
    pub text: String,
    pub muted: bool,
}

impl Label {
    pub fn new<T: Into<String>>(text: T) -> Self {
        Label {
            text: text.into(),
            muted: false,
        }
    }

    pub fn muted(mut self) -> Self {
        self.muted = true;
        self
    }
}

impl Widget for Label {
    fn ui(&mut self, ctx: &mut UiContext, area: Rect) -> UiResponse {
        let color = if self.muted {
            ctx.theme.muted_text
        } else {
            ctx.theme.text_color
        };
        ctx.push_cmd(DrawCmd::Text {
            text: self.text.clone(),
            pos: Vec2::new(area.x, area.y + ctx.font_size),
            font_size: ctx.font_size,
            color,
        });
        UiResponse::None
    }
}

/// A clickable button with a centered label.
#[derive(Debug, Clone)]
pub struct Button {
    pub label: String,
}

impl Button {
    pub fn new<T: Into<String>>(label: T) -> Self {
        Button {
            label: label.into(),
        }
    }
}

impl Widget for Button {
    fn ui(&mut self, ctx: &mut UiContext, area: Rect) -> UiResponse {
        let bg = if ctx.hovered(area) {
            ctx.theme.button_hover_bg
        } else {
            ctx.theme.button_bg
        };
        ctx.push_cmd(DrawCmd::Rect {
            rect: area,
            color: bg,
        });

        // center text within button
        let text_w = self.label.len() as f32 * ctx.font_size * 0.5;
        let text_h = ctx.font_size;
        let pos = Vec2::new(
            area.x + (area.w - text_w) / 2.0,
            area.y + (area.h + text_h) / 2.0,
        );
        ctx.push_cmd(DrawCmd::Text {
            text: self.label.clone(),
            pos,
            font_size: ctx.font_size,
            color: ctx.theme.text_color,
        });

        if ctx.clicked(area) {
            return UiResponse::Clicked;
        }
        UiResponse::None
    }
}

/// Filled panel with a border, drawn behind stack content.
pub struct Card;

impl Widget for Card {
    fn ui(&mut self, ctx: &mut UiContext, area: Rect) -> UiResponse {
        ctx.push_cmd(DrawCmd::Rect {
            rect: area,
            color: ctx.theme.panel_bg,
        });
        ctx.push_cmd(DrawCmd::Border {
            rect: area,
            thickness: 1.0,
            color: ctx.theme.panel_border,
        });
        UiResponse::None
    }
}

/// On/off switch drawn to the right of its label. A click on the switch
/// flips `is_on` and reports `Clicked`.
#[derive(Debug, Clone)]
pub struct Toggle {
    pub is_on: bool,
    pub label: String,
}

impl Toggle {
    pub fn new<T: Into<String>>(label: T) -> Self {
        Toggle {
            label: label.into(),
            is_on: false,
        }
    }

    pub fn with_state(mut self, is_on: bool) -> Self {
        self.is_on = is_on;
        self
    }

    /// Where the switch sits inside a row of `area`.
    pub fn switch_area(area: Rect) -> Rect {
        Rect::new(
            area.x + area.w - TOGGLE_WIDTH,
            area.y + (area.h - TOGGLE_HEIGHT) / 2.0,
            TOGGLE_WIDTH,
            TOGGLE_HEIGHT,
        )
    }
}

const TOGGLE_WIDTH: f32 = 40.0;
const TOGGLE_HEIGHT: f32 = 20.0;
const KNOB_INSET: f32 = 8.0;

impl Widget for Toggle {
    fn ui(&mut self, ctx: &mut UiContext, area: Rect) -> UiResponse {
        ctx.push_cmd(DrawCmd::Text {
            text: self.label.clone(),
            pos: Vec2::new(area.x, area.y + ctx.font_size),
            font_size: ctx.font_size,
            color: ctx.theme.text_color,
        });

        let switch = Toggle::switch_area(area);
        let bg = if self.is_on {
            ctx.theme.button_hover_bg
        } else {
            ctx.theme.button_bg
        };
        ctx.push_cmd(DrawCmd::Rect {
            rect: switch,
            color: bg,
        });

        let knob_size = TOGGLE_HEIGHT - KNOB_INSET;
        let knob_x = if self.is_on {
            switch.x + TOGGLE_WIDTH - knob_size - KNOB_INSET / 2.0
        } else {
            switch.x + KNOB_INSET / 2.0
        };
        ctx.push_cmd(DrawCmd::Rect {
            rect: Rect::new(knob_x, switch.y + KNOB_INSET / 2.0, knob_size, knob_size),
            color: ctx.theme.text_color,
        });

        if ctx.clicked(switch) {
            self.is_on = !self.is_on;
            return UiResponse::Clicked;
        }
        UiResponse::None
    }
}
