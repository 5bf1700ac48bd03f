use serde::{Deserialize, Serialize};

use crate::core::PixelPoint;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Stroke-dash state for a partially revealed path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashState {
    pub dash_length: f64,
    pub gap_length: f64,
    pub offset: f64,
}

impl DashState {
    pub fn validate(self) -> ChartResult<()> {
        for (field, value) in [
            ("dash_length", self.dash_length),
            ("gap_length", self.gap_length),
            ("offset", self.offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "dash `{field}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one open polyline (a sampled series curve).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolylinePrimitive {
    pub vertices: Vec<PixelPoint>,
    pub stroke_width: f64,
    pub color: Color,
    pub dash: Option<DashState>,
}

impl PolylinePrimitive {
    #[must_use]
    pub fn new(vertices: Vec<PixelPoint>, stroke_width: f64, color: Color) -> Self {
        Self {
            vertices,
            stroke_width,
            color,
            dash: None,
        }
    }

    #[must_use]
    pub fn with_dash(mut self, dash: DashState) -> Self {
        self.dash = Some(dash);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.vertices.len() < 2 {
            return Err(ChartError::InvalidData(
                "polyline needs at least two vertices".to_owned(),
            ));
        }
        for vertex in &self.vertices {
            if !vertex.is_finite() {
                return Err(ChartError::InvalidData(
                    "polyline vertices must be finite".to_owned(),
                ));
            }
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "polyline stroke width must be finite and > 0".to_owned(),
            ));
        }
        if let Some(dash) = self.dash {
            dash.validate()?;
        }
        self.color.validate()
    }
}

/// Draw command for one axis-aligned rectangle.
///
/// `fill` is optional so legend swatches can render hollow while keeping
/// their stroke color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill: None,
            stroke: None,
            stroke_width: 1.0,
        }
    }

    #[must_use]
    pub const fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub const fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "rect position must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width < 0.0 || self.height < 0.0
        {
            return Err(ChartError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        if self.fill.is_none() && self.stroke.is_none() {
            return Err(ChartError::InvalidData(
                "rect must carry a fill or a stroke".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "rect stroke width must be finite and > 0".to_owned(),
            ));
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        Ok(())
    }
}

/// Draw command for one stroked circle (hover markers).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub stroke: Color,
    pub stroke_width: f64,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, radius: f64, stroke: Color, stroke_width: f64) -> Self {
        Self {
            cx,
            cy,
            radius,
            stroke,
            stroke_width,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.stroke.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
///
/// `rotation_degrees` rotates around the anchor (the vertical axis
/// caption renders at -90).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub rotation_degrees: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            rotation_degrees: 0.0,
        }
    }

    #[must_use]
    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.rotation_degrees.is_finite() {
            return Err(ChartError::InvalidData(
                "text rotation must be finite".to_owned(),
            ));
        }
        self.color.validate()
    }
}
