use crate::ui::style::Theme;
use macroquad::math::Vec2;
use macroquad::prelude::*;

/// Keys the navigation layer reacts to.
pub const TRACKED_KEYS: [KeyCode; 4] = [
    KeyCode::Escape,
    KeyCode::Backspace,
    KeyCode::Home,
    KeyCode::O,
];

/// A drawing command recorded by the UI.  When executed, issues the actual draw calls.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect {
        rect: Rect,
        color: Color,
    },
    Border {
        rect: Rect,
        thickness: f32,
        color: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        font_size: f32,
        color: Color,
    },
}

impl DrawCmd {
    /// Same command moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> DrawCmd {
        match self {
            DrawCmd::Rect { rect, color } => DrawCmd::Rect {
                rect: rect.offset(offset),
                color: *color,
            },
            DrawCmd::Border {
                rect,
                thickness,
                color,
            } => DrawCmd::Border {
                rect: rect.offset(offset),
                thickness: *thickness,
                color: *color,
            },
            DrawCmd::Text {
                text,
                pos,
                font_size,
                color,
            } => DrawCmd::Text {
                text: text.clone(),
                pos: *pos + offset,
                font_size: *font_size,
                color: *color,
            },
        }
    }

    /// Execute this draw command immediately using macroquad
    pub fn execute(&self) {
        match self {
            DrawCmd::Rect { rect, color } => {
                draw_rectangle(rect.x, rect.y, rect.w, rect.h, *color);
            }
            DrawCmd::Border {
                rect,
                thickness,
                color,
            } => {
                draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, *thickness, *color);
            }
            DrawCmd::Text {
                text,
                pos,
                font_size,
                color,
            } => {
                draw_text(text, pos.x, pos.y, *font_size, *color);
            }
        }
    }
}

/// Input sampled once per frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    pub mouse_pos: Vec2,
    pub clicked: bool,
    pub pressed_keys: Vec<KeyCode>,
}

impl FrameInput {
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// Position of a click this frame, if any.
    pub fn click_pos(&self) -> Option<Vec2> {
        self.clicked.then_some(self.mouse_pos)
    }
}

/// The UI context drives all immediate‐mode drawing and input capture.
///
/// While an offset is set, recorded geometry is shifted by it and hit tests
/// account for it, so a sliding panel stays clickable where it is drawn.
pub struct UiContext {
    pub input: FrameInput,
    pub font_size: f32,
    pub theme: Theme,
    offset: Vec2,
    draw_commands: Vec<DrawCmd>,
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

impl UiContext {
    /// Create a new UI context with default theme, font size, and empty draw list.
    pub fn new() -> Self {
        Self {
            input: FrameInput::default(),
            font_size: 20.0,
            theme: Theme::default(),
            offset: Vec2::ZERO,
            draw_commands: Vec::new(),
        }
    }

    /// Begin a new frame: sample input and clear pending draw commands
    pub fn begin_frame(&mut self) {
        self.input = capture_input();
        self.offset = Vec2::ZERO;
        self.draw_commands.clear();
    }

    /// Start a frame from already-sampled input.
    pub fn begin_frame_with(&mut self, input: FrameInput) {
        self.input = input;
        self.offset = Vec2::ZERO;
        self.draw_commands.clear();
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Record a drawing command (rectangle, text, etc.)
    pub fn push_cmd(&mut self, cmd: DrawCmd) {
        let cmd = if self.offset == Vec2::ZERO {
            cmd
        } else {
            cmd.translated(self.offset)
        };
        self.draw_commands.push(cmd);
    }

    pub fn hovered(&self, area: Rect) -> bool {
        area.offset(self.offset).contains(self.input.mouse_pos)
    }

    pub fn clicked(&self, area: Rect) -> bool {
        self.input.clicked && self.hovered(area)
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.draw_commands
    }

    /// Flush all recorded draw commands to the screen
    pub fn end_frame(&mut self) {
        for cmd in &self.draw_commands {
            cmd.execute();
        }
    }
}

fn capture_input() -> FrameInput {
    let (x, y) = mouse_position();
    FrameInput {
        mouse_pos: Vec2::new(x, y),
        clicked: is_mouse_button_pressed(MouseButton::Left),
        pressed_keys: TRACKED_KEYS
            .into_iter()
            .filter(|key| is_key_pressed(*key))
            .collect(),
    }
}
