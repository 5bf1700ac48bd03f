use serde::{Deserialize, Serialize};

use crate::core::types::PixelPoint;
use crate::error::{ChartError, ChartResult};

/// Samples the smoothing basis curve through `points` into a polyline.
///
/// The emitted path follows the basis-curve drawing rules: it starts at
/// the first point, takes a short straight join onto the spline body,
/// runs one cubic segment per interior point, and closes with a mirrored
/// join into the last point. Fewer than three points degrade to the raw
/// polyline.
///
/// The curve is a smoothing spline, not an interpolating one: interior
/// points pull the path without lying on it, and it can locally
/// overshoot near sharp turns.
#[must_use]
pub fn sample_basis_curve(points: &[PixelPoint], samples_per_segment: usize) -> Vec<PixelPoint> {
    let samples = samples_per_segment.max(1);
    let n = points.len();
    if n <= 2 {
        return points.to_vec();
    }

    let mut out = Vec::with_capacity(2 + (n - 1) * samples);
    out.push(points[0]);

    let join = PixelPoint::new(
        (5.0 * points[0].x + points[1].x) / 6.0,
        (5.0 * points[0].y + points[1].y) / 6.0,
    );
    out.push(join);

    let mut cursor = join;
    for k in 3..n {
        cursor = push_basis_segment(
            &mut out,
            cursor,
            points[k - 2],
            points[k - 1],
            points[k],
            samples,
        );
    }
    // Closing segment reuses the last point as its own successor.
    push_basis_segment(
        &mut out,
        cursor,
        points[n - 2],
        points[n - 1],
        points[n - 1],
        samples,
    );
    out.push(points[n - 1]);

    out
}

/// One cubic segment of the basis body: control points are thirds
/// between the two spline knots, the endpoint is their weighted blend
/// with the incoming data point.
fn push_basis_segment(
    out: &mut Vec<PixelPoint>,
    from: PixelPoint,
    a: PixelPoint,
    b: PixelPoint,
    incoming: PixelPoint,
    samples: usize,
) -> PixelPoint {
    let control1 = PixelPoint::new((2.0 * a.x + b.x) / 3.0, (2.0 * a.y + b.y) / 3.0);
    let control2 = PixelPoint::new((a.x + 2.0 * b.x) / 3.0, (a.y + 2.0 * b.y) / 3.0);
    let end = PixelPoint::new(
        (a.x + 4.0 * b.x + incoming.x) / 6.0,
        (a.y + 4.0 * b.y + incoming.y) / 6.0,
    );

    for step in 1..=samples {
        let t = step as f64 / samples as f64;
        out.push(cubic_bezier_point(from, control1, control2, end, t));
    }
    end
}

fn cubic_bezier_point(
    p0: PixelPoint,
    p1: PixelPoint,
    p2: PixelPoint,
    p3: PixelPoint,
    t: f64,
) -> PixelPoint {
    let u = 1.0 - t;
    let b0 = u * u * u;
    let b1 = 3.0 * u * u * t;
    let b2 = 3.0 * u * t * t;
    let b3 = t * t * t;
    PixelPoint::new(
        b0 * p0.x + b1 * p1.x + b2 * p2.x + b3 * p3.x,
        b0 * p0.y + b1 * p1.y + b2 * p2.y + b3 * p3.y,
    )
}

/// Arc-length parametrization of a sampled path.
///
/// This is the rendered-geometry query surface the hover hit test runs
/// against: total length plus position-at-length lookups, the same
/// queries an SVG path element answers for its flattened geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathGeometry {
    vertices: Vec<PixelPoint>,
    cumulative: Vec<f64>,
}

impl PathGeometry {
    pub fn from_vertices(vertices: Vec<PixelPoint>) -> ChartResult<Self> {
        for vertex in &vertices {
            if !vertex.is_finite() {
                return Err(ChartError::InvalidData(
                    "path vertices must be finite".to_owned(),
                ));
            }
        }

        let mut cumulative = Vec::with_capacity(vertices.len());
        let mut total = 0.0;
        for (index, vertex) in vertices.iter().enumerate() {
            if index > 0 {
                total += vertices[index - 1].distance_to(*vertex);
            }
            cumulative.push(total);
        }

        Ok(Self {
            vertices,
            cumulative,
        })
    }

    /// Samples the basis curve through `points` and wraps it.
    pub fn from_curve_points(points: &[PixelPoint], samples_per_segment: usize) -> ChartResult<Self> {
        Self::from_vertices(sample_basis_curve(points, samples_per_segment))
    }

    #[must_use]
    pub fn vertices(&self) -> &[PixelPoint] {
        &self.vertices
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn start(&self) -> Option<PixelPoint> {
        self.vertices.first().copied()
    }

    #[must_use]
    pub fn end(&self) -> Option<PixelPoint> {
        self.vertices.last().copied()
    }

    /// Position at an arc-length offset from the path start.
    ///
    /// Offsets are clamped to `[0, total_length]`. Returns `None` only
    /// for an empty path or a non-finite offset.
    #[must_use]
    pub fn point_at_length(&self, length: f64) -> Option<PixelPoint> {
        if self.vertices.is_empty() || !length.is_finite() {
            return None;
        }
        if self.vertices.len() == 1 {
            return Some(self.vertices[0]);
        }

        let length = length.clamp(0.0, self.total_length());
        let upper = self
            .cumulative
            .partition_point(|&milestone| milestone < length)
            .min(self.vertices.len() - 1)
            .max(1);
        let lower = upper - 1;

        let segment = self.cumulative[upper] - self.cumulative[lower];
        if segment <= 0.0 {
            return Some(self.vertices[lower]);
        }

        let t = (length - self.cumulative[lower]) / segment;
        let from = self.vertices[lower];
        let to = self.vertices[upper];
        Some(PixelPoint::new(
            from.x + (to.x - from.x) * t,
            from.y + (to.y - from.y) * t,
        ))
    }
}
