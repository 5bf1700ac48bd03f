pub mod animation;
pub mod curve;
pub mod scale;
pub mod series;
pub mod time_scale;
pub mod types;
pub mod value_scale;
pub mod visibility;

pub use animation::{DEFAULT_LINE_DRAW_MS, LineDrawAnimation};
pub use curve::{PathGeometry, sample_basis_curve};
pub use scale::LinearScale;
pub use series::{Series, SeriesPoint, SeriesRow, SeriesTable};
pub use time_scale::{TimeScale, unix_seconds_to_year, year_to_unix_seconds};
pub use types::{ChartLayout, Margins, PixelPoint, Viewport};
pub use value_scale::ValueScale;
pub use visibility::VisibilitySet;
