pub mod errors;
pub mod point;
pub mod utils;
pub mod douglas_peucker;
pub mod haversine;
pub mod track;

pub use douglas_peucker::{point_line_distance, rdp, rdp_indices, simplify_mask};
pub use haversine::{haversine, GeoCoordinate, EARTH_RADIUS_M};
pub use point::{Planar, Point};
