use screenstack::NavigationDirection;

/// Horizontal slide applied to the stack content after each transition.
///
/// Forward slides come in from the right, backward ones from the left; a
/// fresh open or a reopen does not slide.
pub struct SlideTransition {
    direction: NavigationDirection,
    elapsed: f32,
    duration: f32,
    t: f32,
    pub active: bool,
}

impl SlideTransition {
    pub fn new(duration: f32) -> Self {
        Self {
            direction: NavigationDirection::None,
            elapsed: 0.0,
            duration,
            t: 1.0,
            active: true,
        }
    }

    /// Restart the slide for a new transition.
    pub fn start(&mut self, direction: NavigationDirection) {
        self.direction = direction;
        self.elapsed = 0.0;
        self.update_t();
    }

    /// Advance by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
        self.update_t();
    }

    pub fn is_finished(&self) -> bool {
        self.t >= 1.0
    }

    fn update_t(&mut self) {
        self.t = if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        };
    }

    /// X offset for content `width` wide at the current point of the slide.
    pub fn offset_x(&self, width: f32) -> f32 {
        if !self.active {
            return 0.0;
        }
        let start = match self.direction {
            NavigationDirection::Forward => width,
            NavigationDirection::Backward => -width,
            NavigationDirection::None => 0.0,
        };
        lerp(start, 0.0, self.t)
    }
}

fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}
