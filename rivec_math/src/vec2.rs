use std::{
    fmt::Display,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use bytemuck::{Pod, Zeroable};

pub const fn v2(x: f32, y: f32) -> Vector2 {
    Vector2::new(x, y)
}

/// A point or direction in the plane.
///
/// Two vectors with equal fields are interchangeable; equality is exact and
/// field-wise, with no epsilon. There is deliberately no `PartialOrd`: the
/// aggregate orderings live in named methods such as
/// [`Vector2::all_components_greater`] and [`Vector2::sum_exceeds`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = v2(0.0, 0.0);
    pub const ONE: Self = v2(1.0, 1.0);
    pub const UP: Self = v2(0.0, 1.0);
    pub const DOWN: Self = v2(0.0, -1.0);
    pub const LEFT: Self = v2(-1.0, 0.0);
    pub const RIGHT: Self = v2(1.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn splat(v: f32) -> Self {
        v2(v, v)
    }

    /// Overwrites both components in place.
    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub const fn to_array(&self) -> [f32; 2] {
        [self.x, self.y]
    }

    pub fn sqr_magnitude(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn magnitude(&self) -> f32 {
        f32::sqrt(self.sqr_magnitude())
    }

    /// Returns this vector scaled to unit length.
    ///
    /// A zero vector is divided by a zero magnitude, so the result is
    /// `(NaN, NaN)`.
    pub fn normalized(&self) -> Self {
        *self / self.magnitude()
    }

    /// Rotates 90° counter-clockwise.
    pub fn perpendicular(&self) -> Self {
        v2(-self.y, self.x)
    }

    pub fn scale(&self, factor: f32) -> Self {
        *self * factor
    }

    /// Returns a copy whose magnitude is at most `max_length`.
    ///
    /// Vectors already within the limit come back unchanged; longer ones keep
    /// their direction and are scaled to exactly `max_length`.
    pub fn clamp_magnitude(&self, max_length: f32) -> Self {
        let magnitude = self.magnitude();
        if magnitude <= max_length {
            return *self;
        }

        *self * (max_length / magnitude)
    }

    /// `x + y`, the quantity the scalar comparisons are measured against.
    pub fn component_sum(&self) -> f32 {
        self.x + self.y
    }
}

impl Display for Vector2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*})", p, self.x, p, self.y),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

impl From<Vector2> for (f32, f32) {
    fn from(v: Vector2) -> Self {
        (v.x, v.y)
    }
}

impl From<Vector2> for [f32; 2] {
    fn from(v: Vector2) -> Self {
        v.to_array()
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        v2(x, y)
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Self {
        v2(x, y)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Self::Output {
        v2(-self.x, -self.y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, v: Self) -> Self::Output {
        v2(self.x + v.x, self.y + v.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, v: Self) {
        self.x += v.x;
        self.y += v.y;
    }
}

impl Add<f32> for Vector2 {
    type Output = Vector2;

    fn add(self, s: f32) -> Self::Output {
        v2(self.x + s, self.y + s)
    }
}

impl AddAssign<f32> for Vector2 {
    fn add_assign(&mut self, s: f32) {
        self.x += s;
        self.y += s;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, v: Self) -> Self::Output {
        v2(self.x - v.x, self.y - v.y)
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, v: Self) {
        self.x -= v.x;
        self.y -= v.y;
    }
}

impl Sub<f32> for Vector2 {
    type Output = Vector2;

    fn sub(self, s: f32) -> Self::Output {
        v2(self.x - s, self.y - s)
    }
}

impl SubAssign<f32> for Vector2 {
    fn sub_assign(&mut self, s: f32) {
        self.x -= s;
        self.y -= s;
    }
}

impl Mul for Vector2 {
    type Output = Vector2;

    fn mul(self, v: Self) -> Self::Output {
        v2(self.x * v.x, self.y * v.y)
    }
}

impl MulAssign for Vector2 {
    fn mul_assign(&mut self, v: Self) {
        self.x *= v.x;
        self.y *= v.y;
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;

    fn mul(self, s: f32) -> Self::Output {
        v2(self.x * s, self.y * s)
    }
}

impl MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, s: f32) {
        self.x *= s;
        self.y *= s;
    }
}

impl Div for Vector2 {
    type Output = Vector2;

    fn div(self, v: Self) -> Self::Output {
        v2(self.x / v.x, self.y / v.y)
    }
}

impl DivAssign for Vector2 {
    fn div_assign(&mut self, v: Self) {
        self.x /= v.x;
        self.y /= v.y;
    }
}

impl Div<f32> for Vector2 {
    type Output = Vector2;

    fn div(self, s: f32) -> Self::Output {
        v2(self.x / s, self.y / s)
    }
}

impl DivAssign<f32> for Vector2 {
    fn div_assign(&mut self, s: f32) {
        self.x /= s;
        self.y /= s;
    }
}
