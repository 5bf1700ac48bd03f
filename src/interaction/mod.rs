use serde::{Deserialize, Serialize};

/// Hover tracking state exposed to host applications.
///
/// Positions are viewport-space pixels as delivered by pointer events.
/// The overlay (tracking line, markers, labels) is visible only while a
/// pointer is inside the chart area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
}

impl Default for HoverState {
    fn default() -> Self {
        Self {
            visible: false,
            x: 0.0,
            y: 0.0,
        }
    }
}

impl HoverState {
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.visible = true;
        self.x = x;
        self.y = y;
    }

    pub fn on_pointer_leave(&mut self) {
        self.visible = false;
    }
}
