use macroquad::math::{Rect, Vec2};

/// Horizontal stacking layout: arranges items left-to-right
pub struct HBox {
    pub padding: f32,
    pub spacing: f32,
    state: Option<BoxState>,
}

/// Vertical stacking layout: arranges items top-to-bottom
pub struct VBox {
    pub padding: f32,
    pub spacing: f32,
    state: Option<BoxState>,
}

struct BoxState {
    area: Rect,
    cursor: Vec2,
}

impl BoxState {
    fn new(area: Rect, padding: f32) -> Self {
        BoxState {
            area,
            cursor: Vec2::new(area.x + padding, area.y + padding),
        }
    }
}

impl HBox {
    pub fn new(padding: f32, spacing: f32) -> Self {
        Self {
            padding,
            spacing,
            state: None,
        }
    }

    /// Begin laying out items within `area`
    pub fn begin(&mut self, area: Rect) {
        self.state = Some(BoxState::new(area, self.padding));
    }

    /// Reserve a slot for the next item, clamped to the available height.
    /// Returns an empty rect when `begin` was not called.
    pub fn item(&mut self, desired: Vec2) -> Rect {
        let Some(st) = self.state.as_mut() else {
            return Rect::default();
        };
        let height = (st.area.h - 2.0 * self.padding).max(0.0);
        let rect = Rect::new(st.cursor.x, st.cursor.y, desired.x, desired.y.min(height));
        st.cursor.x += desired.x + self.spacing;
        rect
    }

    /// Reserve a slot flush with the right edge, independent of the cursor.
    pub fn trailing(&mut self, desired: Vec2) -> Rect {
        let Some(st) = self.state.as_ref() else {
            return Rect::default();
        };
        let height = (st.area.h - 2.0 * self.padding).max(0.0);
        Rect::new(
            st.area.x + st.area.w - self.padding - desired.x,
            st.cursor.y,
            desired.x,
            desired.y.min(height),
        )
    }

    /// Width left between the cursor and the right padding.
    pub fn remaining(&self) -> f32 {
        self.state.as_ref().map_or(0.0, |st| {
            (st.area.x + st.area.w - self.padding - st.cursor.x).max(0.0)
        })
    }

    pub fn end(&mut self) {
        self.state = None;
    }
}

impl VBox {
    pub fn new(padding: f32, spacing: f32) -> Self {
        Self {
            padding,
            spacing,
            state: None,
        }
    }

    pub fn begin(&mut self, area: Rect) {
        self.state = Some(BoxState::new(area, self.padding));
    }

    /// Reserve a slot for the next item, clamped to the available width.
    /// Returns an empty rect when `begin` was not called.
    pub fn item(&mut self, desired: Vec2) -> Rect {
        let Some(st) = self.state.as_mut() else {
            return Rect::default();
        };
        let width = (st.area.w - 2.0 * self.padding).max(0.0);
        let rect = Rect::new(st.cursor.x, st.cursor.y, desired.x.min(width), desired.y);
        st.cursor.y += desired.y + self.spacing;
        rect
    }

    pub fn end(&mut self) {
        self.state = None;
    }
}
