use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board columns, rows, and positions.
pub type Coord = u8;

/// Count type used for total-cell counts.
pub type CellCount = u16;

/// Two-dimensional board coordinates `(x, y)`, i.e. `(column, row)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// A position on the drawing surface, in canvas pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, `(x, y)` is the top-left corner.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Strict on every edge: points on the border are outside.
    pub fn contains(&self, point: Point) -> bool {
        point.x > self.x
            && point.x < self.x + self.w
            && point.y > self.y
            && point.y < self.y + self.h
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2., self.y + self.h / 2.)
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }
}

/// Size of the drawing surface.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub const DEFAULT_WIDTH: f64 = 600.;
    pub const DEFAULT_HEIGHT: f64 = 400.;

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub const fn rect(&self) -> Rect {
        Rect::new(0., 0., self.width, self.height)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_is_strict_on_borders() {
        let rect = Rect::new(0., 0., 200., 100.);

        assert!(rect.contains(Point::new(1., 1.)));
        assert!(rect.contains(Point::new(199.5, 99.5)));
        assert!(!rect.contains(Point::new(0., 50.)));
        assert!(!rect.contains(Point::new(200., 50.)));
        assert!(!rect.contains(Point::new(100., 100.)));
    }

    #[test]
    fn default_canvas_is_600_by_400() {
        assert_eq!(Canvas::default().rect(), Rect::new(0., 0., 600., 400.));
    }
}
