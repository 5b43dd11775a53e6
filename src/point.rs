use serde::{Deserialize, Serialize};

/// Read access to planar `(x, y)` coordinates.
///
/// Simplification only ever looks at the first two coordinates of a point, so
/// anything that can expose them can be simplified.
pub trait Planar {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl Planar for Point {
    fn x(&self) -> f64 { self.x }
    fn y(&self) -> f64 { self.y }
}

impl Planar for (f64, f64) {
    fn x(&self) -> f64 { self.0 }
    fn y(&self) -> f64 { self.1 }
}

impl Planar for [f64; 2] {
    fn x(&self) -> f64 { self[0] }
    fn y(&self) -> f64 { self[1] }
}

impl<P: Planar + ?Sized> Planar for &P {
    fn x(&self) -> f64 { (**self).x() }
    fn y(&self) -> f64 { (**self).y() }
}
