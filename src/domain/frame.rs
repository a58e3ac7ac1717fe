//! Model-to-screen coordinate mapping.
//!
//! A [`Frame`] binds a model-space region to a canvas rectangle, in the role
//! the external dual-canvas `frame_region` played for the original widgets.
//! The lineage view runs its y axis downward (time ordinal 0 at the top),
//! the slice view upward (spatial y grows toward the top of the canvas).
//!
//! These functions are stateless and can be tested independently.

/// Direction of the model y axis relative to the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YDirection {
    /// Model y grows downward, matching screen coordinates.
    Down,
    /// Model y grows upward, inverted against screen coordinates.
    Up,
}

/// A coordinate mapping from a model-space region onto a canvas rect.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    canvas: egui::Rect,
    model_min: (f64, f64),
    model_max: (f64, f64),
    y_direction: YDirection,
}

impl Frame {
    /// Creates a frame mapping the model region onto the canvas rect.
    ///
    /// # Arguments
    /// * `canvas` - The screen rectangle to draw into
    /// * `model_min` - Lower-left model corner (smallest x and y)
    /// * `model_max` - Upper-right model corner (largest x and y)
    /// * `y_direction` - Orientation of the model y axis on screen
    pub fn new(
        canvas: egui::Rect,
        model_min: (f64, f64),
        model_max: (f64, f64),
        y_direction: YDirection,
    ) -> Self {
        Self {
            canvas,
            model_min,
            model_max,
            y_direction,
        }
    }

    fn model_width(&self) -> f64 {
        self.model_max.0 - self.model_min.0
    }

    fn model_height(&self) -> f64 {
        self.model_max.1 - self.model_min.1
    }

    /// Converts a model point to a screen position.
    pub fn to_screen(&self, x: f64, y: f64) -> egui::Pos2 {
        let nx = if self.model_width() == 0.0 {
            0.0
        } else {
            (x - self.model_min.0) / self.model_width()
        };
        let ny = if self.model_height() == 0.0 {
            0.0
        } else {
            (y - self.model_min.1) / self.model_height()
        };
        let sx = self.canvas.left() + nx as f32 * self.canvas.width();
        let sy = match self.y_direction {
            YDirection::Down => self.canvas.top() + ny as f32 * self.canvas.height(),
            YDirection::Up => self.canvas.bottom() - ny as f32 * self.canvas.height(),
        };
        egui::pos2(sx, sy)
    }

    /// Converts a screen position back to model coordinates.
    pub fn to_model(&self, pos: egui::Pos2) -> (f64, f64) {
        let nx = if self.canvas.width() == 0.0 {
            0.0
        } else {
            ((pos.x - self.canvas.left()) / self.canvas.width()) as f64
        };
        let ny = if self.canvas.height() == 0.0 {
            0.0
        } else {
            match self.y_direction {
                YDirection::Down => ((pos.y - self.canvas.top()) / self.canvas.height()) as f64,
                YDirection::Up => ((self.canvas.bottom() - pos.y) / self.canvas.height()) as f64,
            }
        };
        (
            self.model_min.0 + nx * self.model_width(),
            self.model_min.1 + ny * self.model_height(),
        )
    }

    /// Maps a model-space rectangle to a screen rectangle. Corner ordering
    /// is normalized, so this works for both y directions.
    pub fn rect(&self, x: f64, y: f64, w: f64, h: f64) -> egui::Rect {
        let a = self.to_screen(x, y);
        let b = self.to_screen(x + w, y + h);
        egui::Rect::from_two_pos(a, b)
    }
}
