//! Shared geometry types.

/// A rectangle defined by (x0, y0, x1, y1) where (x0, y0) is the bottom-left
/// corner and (x1, y1) is the top-right, in page coordinates (y grows up).
pub type Rect = (f64, f64, f64, f64);

/// Common accessors for objects with a bounding box.
pub trait HasBBox {
    fn x0(&self) -> f64;
    fn y0(&self) -> f64;
    fn x1(&self) -> f64;
    fn y1(&self) -> f64;

    fn bbox(&self) -> Rect {
        (self.x0(), self.y0(), self.x1(), self.y1())
    }
}

impl<T: HasBBox + ?Sized> HasBBox for &T {
    fn x0(&self) -> f64 {
        (**self).x0()
    }
    fn y0(&self) -> f64 {
        (**self).y0()
    }
    fn x1(&self) -> f64 {
        (**self).x1()
    }
    fn y1(&self) -> f64 {
        (**self).y1()
    }
}
