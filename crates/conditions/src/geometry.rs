//! Plane geometry predicates.
//!
//! Rectangles use canvas coordinates: `top` grows downwards and `left` grows to the right.

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CanvasRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasRect {
    #[inline]
    pub const fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub const fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// True if a non-degenerate triangle has sides `a`, `b` and `c`.
pub fn is_triangle(a: f64, b: f64, c: f64) -> bool {
    a + b > c && a + c > b && b + c > a
}

/// True if the two rectangles share interior area. Touching edges do not overlap.
pub fn do_rectangles_overlap(rect1: &CanvasRect, rect2: &CanvasRect) -> bool {
    rect1.left < rect2.right()
        && rect2.left < rect1.right()
        && rect1.top < rect2.bottom()
        && rect2.top < rect1.bottom()
}

/// True if `point` lies strictly inside `circle`.
pub fn is_inside_circle(circle: &Circle, point: &Point) -> bool {
    (point.x - circle.center.x).hypot(point.y - circle.center.y) < circle.radius
}
