//! 2D affine transformations.
//!
//! Hosts describe how the overlay view is placed on screen with a
//! [`Transform2D`]; the overlay inverts it to map raw pointer coordinates back
//! into its own local space.

use crate::types::Point;

/// A 2D affine transformation.
///
/// Maps `(x, y)` to `(a·x + c·y + tx, b·x + d·y + ty)`:
/// ```text
/// | a  c  tx |
/// | b  d  ty |
/// ```
///
/// # Examples
///
/// ```
/// use dpad_overlay_render::{Point, Transform2D};
///
/// // View scaled by 2 and then shifted right by 10.
/// let view = Transform2D::translate(10.0, 0.0).then(&Transform2D::scale(2.0));
/// assert_eq!(view.transform_point(Point::new(5.0, 0.0)), Point::new(20.0, 0.0));
///
/// let local = view.inverse().unwrap().transform_point(Point::new(20.0, 0.0));
/// assert_eq!(local, Point::new(5.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    /// The identity transform.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// Create a transform from its six coefficients.
    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32, tx: f32, ty: f32) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    /// A pure translation.
    #[inline]
    pub const fn translate(tx: f32, ty: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// A uniform scale about the origin.
    #[inline]
    pub const fn scale(s: f32) -> Self {
        Self::scale_xy(s, s)
    }

    /// A non-uniform scale about the origin.
    #[inline]
    pub const fn scale_xy(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// A rotation about the origin, in radians.
    pub fn rotate(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// The transform that applies `inner` first and `self` second.
    pub fn then(&self, inner: &Self) -> Self {
        Self {
            a: self.a * inner.a + self.c * inner.b,
            b: self.b * inner.a + self.d * inner.b,
            c: self.a * inner.c + self.c * inner.d,
            d: self.b * inner.c + self.d * inner.d,
            tx: self.a * inner.tx + self.c * inner.ty + self.tx,
            ty: self.b * inner.tx + self.d * inner.ty + self.ty,
        }
    }

    /// Map a point.
    #[inline]
    pub fn transform_point(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    /// Determinant of the linear part.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.a * self.d - self.b * self.c
    }

    /// The inverse transform, or `None` if this one is singular.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < 1e-10 {
            return None;
        }

        let inv = 1.0 / det;
        Some(Self {
            a: self.d * inv,
            b: -self.b * inv,
            c: -self.c * inv,
            d: self.a * inv,
            tx: (self.c * self.ty - self.d * self.tx) * inv,
            ty: (self.b * self.tx - self.a * self.ty) * inv,
        })
    }

    /// The inverse, or the identity for a singular transform.
    #[inline]
    pub fn inverse_or_identity(&self) -> Self {
        self.inverse().unwrap_or(Self::IDENTITY)
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}
