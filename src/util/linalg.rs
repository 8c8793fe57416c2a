#[allow(unused_imports)]
use crate::core::prelude::*;

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, Div, Mul, Neg, Rem, Sub},
};

/// A 2D vector with 64-bit floating point components and GLSL-style operations.
///
/// [`Vec2`] is a plain value: every operation returns a new vector and nothing mutates in place.
/// Arithmetic between two vectors is component-wise and available through the usual operators
/// (`+`, `-`, `*`, `/`, `%` and unary `-`). Invalid numeric input never panics or errors; it
/// propagates as `NaN` or infinity exactly as [`f64`] arithmetic does.
///
/// # Examples
///
/// ```
/// use glvec2::core::prelude::*;
///
/// let a = Vec2::new(2.0, 3.0);
/// let b = Vec2::new(4.0, 5.0);
/// assert_eq!(a + b, Vec2::new(6.0, 8.0));
/// assert_eq!(a * b, Vec2::new(8.0, 15.0));
/// assert_eq!(Vec2::new(3.0, 4.0).len(), 5.0);
/// ```
///
/// # Equality
/// [`PartialEq`] is exact, component by component, the same as [`Vec2::equal`]. Use
/// [`Vec2::almost_eq`] to compare results that went through rounding.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

/// Anything that exposes numeric `x` and `y` components, and so can be copied into a [`Vec2`]
/// with [`Vec2::copy`].
pub trait Vec2Like {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl Vec2Like for Vec2 {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}
impl Vec2Like for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }
    fn y(&self) -> f64 {
        self[1]
    }
}
impl Vec2Like for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Vec2 {
    /// Creates a vector from its two components.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Vec2 {
        Vec2 { x, y }
    }
    /// Returns a vector with both components set to 0.0. Same as [`Vec2::default`].
    #[must_use]
    pub fn zero() -> Vec2 {
        Vec2 { x: 0.0, y: 0.0 }
    }
    /// Creates a new vector with both components set to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use glvec2::core::prelude::*;
    /// let vec = Vec2::from_scalar(3.0);
    /// assert_eq!(vec.x, 3.0);
    /// assert_eq!(vec.y, 3.0);
    /// ```
    #[must_use]
    pub fn from_scalar(s: f64) -> Vec2 {
        Vec2 { x: s, y: s }
    }
    /// Copies the components of any [`Vec2Like`] value.
    ///
    /// # Examples
    ///
    /// ```
    /// use glvec2::core::prelude::*;
    /// assert_eq!(Vec2::copy(&[1.0, 2.0]), Vec2::new(1.0, 2.0));
    /// assert_eq!(Vec2::copy(&(1.0, 2.0)), Vec2::new(1.0, 2.0));
    /// ```
    #[must_use]
    pub fn copy(v: &impl Vec2Like) -> Vec2 {
        Vec2 { x: v.x(), y: v.y() }
    }

    /// Returns a vector with both components set to 1.0.
    #[must_use]
    pub fn one() -> Vec2 {
        Vec2 { x: 1.0, y: 1.0 }
    }
    /// Returns the unit vector along the positive x-axis.
    #[must_use]
    pub fn unit_x() -> Vec2 {
        Vec2 { x: 1.0, y: 0.0 }
    }
    /// Returns the unit vector along the positive y-axis.
    #[must_use]
    pub fn unit_y() -> Vec2 {
        Vec2 { x: 0.0, y: 1.0 }
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Vec2 {
        Vec2 {
            x: f(self.x),
            y: f(self.y),
        }
    }
    fn zip_map(&self, other: Vec2, f: impl Fn(f64, f64) -> f64) -> Vec2 {
        Vec2 {
            x: f(self.x, other.x),
            y: f(self.y, other.y),
        }
    }

    // Common functions

    /// Returns a new vector with the absolute value of each component.
    #[must_use]
    pub fn abs(&self) -> Vec2 {
        self.map(f64::abs)
    }

    /// Returns `-1.0` for each negative component and `1.0` otherwise.
    ///
    /// Unlike [`f64::signum`] and GLSL's `sign`, this never produces zero: `0.0`, `-0.0` and `NaN`
    /// all map to `1.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use glvec2::core::prelude::*;
    /// assert_eq!(Vec2::zero().sign(), Vec2::new(1.0, 1.0));
    /// assert_eq!(Vec2::new(-3.0, 2.0).sign(), Vec2::new(-1.0, 1.0));
    /// ```
    #[must_use]
    pub fn sign(&self) -> Vec2 {
        self.map(|c| if c < 0.0 { -1.0 } else { 1.0 })
    }

    /// Rounds each component down.
    #[must_use]
    pub fn floor(&self) -> Vec2 {
        self.map(f64::floor)
    }
    #[must_use]
    pub fn ceil(&self) -> Vec2 {
        self.map(f64::ceil)
    }

    /// Returns `abs(c % 1.0)` for each component.
    ///
    /// For negative input this is the distance to the next integer towards zero, not
    /// `c - floor(c)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use glvec2::core::prelude::*;
    /// assert_eq!(Vec2::new(-1.25, 2.75).fract(), Vec2::new(0.25, 0.75));
    /// ```
    #[must_use]
    pub fn fract(&self) -> Vec2 {
        self.map(|c| (c % 1.0).abs())
    }

    /// Component-wise minimum. Unlike [`f64::min`], a `NaN` in either operand gives `NaN`.
    #[must_use]
    pub fn min(&self, other: Vec2) -> Vec2 {
        self.zip_map(other, |a, b| {
            if a.is_nan() || b.is_nan() {
                f64::NAN
            } else {
                a.min(b)
            }
        })
    }
    /// Component-wise maximum. Unlike [`f64::max`], a `NaN` in either operand gives `NaN`.
    #[must_use]
    pub fn max(&self, other: Vec2) -> Vec2 {
        self.zip_map(other, |a, b| {
            if a.is_nan() || b.is_nan() {
                f64::NAN
            } else {
                a.max(b)
            }
        })
    }

    /// Clamps each component to `[min, max]` of the matching components.
    ///
    /// Evaluated as `min(max(c, lo), hi)`, so unlike [`f64::clamp`] this does not panic when
    /// `lo > hi`; the upper bound wins. A `NaN` component or bound gives `NaN`.
    #[must_use]
    pub fn clamp(&self, min: Vec2, max: Vec2) -> Vec2 {
        self.max(min).min(max)
    }

    /// Linearly interpolates towards `other`: `self + (other - self) * weight`.
    ///
    /// `weight` is not clamped, so values outside `[0, 1]` extrapolate.
    #[must_use]
    pub fn mix(&self, other: Vec2, weight: f64) -> Vec2 {
        *self + (other - *self) * weight
    }

    /// Returns `0.0` for each component below the matching `edge` component and `1.0` otherwise.
    #[must_use]
    pub fn step(&self, edge: Vec2) -> Vec2 {
        self.zip_map(edge, |c, e| if c < e { 0.0 } else { 1.0 })
    }

    // Geometric functions

    /// Computes the dot product of two vectors.
    #[must_use]
    pub fn dot(&self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product, the signed area of the parallelogram spanned by the two
    /// vectors. Positive if `other` is counterclockwise from `self`.
    #[must_use]
    pub fn cross(&self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Returns the squared length of the vector.
    ///
    /// Use this instead of [`len`](Vec2::len) when comparing lengths to avoid the square root.
    #[must_use]
    pub fn len_sqr(&self) -> f64 {
        self.dot(*self)
    }
    /// Returns the length of the vector.
    #[must_use]
    pub fn len(&self) -> f64 {
        self.len_sqr().sqrt()
    }

    #[must_use]
    pub fn dist_sqr(&self, other: Vec2) -> f64 {
        (*self - other).len_sqr()
    }
    #[must_use]
    pub fn dist(&self, other: Vec2) -> f64 {
        (*self - other).len()
    }

    /// Returns the vector divided by its length.
    ///
    /// There is no special case for the zero vector: its normal has `NaN` components.
    #[must_use]
    pub fn normal(&self) -> Vec2 {
        *self / self.len()
    }

    /// Returns `self` if `reference` points against `incident`, otherwise `-self`.
    ///
    /// Only `incident` and `reference` enter the test; `self` is just the value being oriented.
    ///
    /// # Examples
    ///
    /// ```
    /// use glvec2::core::prelude::*;
    /// let n = Vec2::new(0.0, 1.0);
    /// let incident = Vec2::new(1.0, -1.0);
    /// assert_eq!(n.faceforward(incident, n), n);
    /// assert_eq!(n.faceforward(-incident, n), -n);
    /// ```
    #[must_use]
    pub fn faceforward(&self, incident: Vec2, reference: Vec2) -> Vec2 {
        if reference.dot(incident) < 0.0 {
            *self
        } else {
            -*self
        }
    }

    /// Reflects this incident direction about a surface normal.
    ///
    /// # Parameters
    ///
    /// * `normal` - The normal vector to reflect about. Should be normalised for the result to
    ///   keep the length of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use glvec2::core::prelude::*;
    /// let vec = Vec2::new(1.0, -1.0);
    /// assert_eq!(vec.reflect(Vec2::unit_y()), Vec2::new(1.0, 1.0));
    /// ```
    #[must_use]
    pub fn reflect(&self, normal: Vec2) -> Vec2 {
        *self - 2.0 * normal.dot(*self) * normal
    }

    /// Refracts this incident direction through a surface with the given normal.
    ///
    /// `eta` is the ratio of indices of refraction. Both `self` and `normal` should be
    /// normalised. On total internal reflection the zero vector is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use glvec2::core::prelude::*;
    /// // Grazing incidence into a much less dense medium.
    /// let grazing = Vec2::new(1.0, 0.0);
    /// assert_eq!(grazing.refract(Vec2::unit_y(), 2.0), Vec2::zero());
    /// ```
    #[must_use]
    pub fn refract(&self, normal: Vec2, eta: f64) -> Vec2 {
        let d = normal.dot(*self);
        let k = 1.0 - eta * eta * (1.0 - d * d);
        if k < 0.0 {
            Vec2::zero()
        } else {
            eta * *self - (eta * d + k.sqrt()) * normal
        }
    }

    // Exponential functions

    #[must_use]
    pub fn sqrt(&self) -> Vec2 {
        self.map(f64::sqrt)
    }
    /// Component-wise square, `self * self`. Not to be confused with [`len_sqr`](Vec2::len_sqr).
    #[must_use]
    pub fn sqr(&self) -> Vec2 {
        *self * *self
    }
    #[must_use]
    pub fn pow(&self, exponent: f64) -> Vec2 {
        self.map(|c| c.powf(exponent))
    }
    #[must_use]
    pub fn exp(&self) -> Vec2 {
        self.map(f64::exp)
    }
    #[must_use]
    pub fn exp2(&self) -> Vec2 {
        self.map(f64::exp2)
    }
    /// Natural logarithm of each component.
    #[must_use]
    pub fn log(&self) -> Vec2 {
        self.map(f64::ln)
    }
    #[must_use]
    pub fn log2(&self) -> Vec2 {
        self.map(f64::log2)
    }

    // Angle functions

    #[must_use]
    pub fn sin(&self) -> Vec2 {
        self.map(f64::sin)
    }
    #[must_use]
    pub fn cos(&self) -> Vec2 {
        self.map(f64::cos)
    }
    #[must_use]
    pub fn tan(&self) -> Vec2 {
        self.map(f64::tan)
    }
    #[must_use]
    pub fn asin(&self) -> Vec2 {
        self.map(f64::asin)
    }
    #[must_use]
    pub fn acos(&self) -> Vec2 {
        self.map(f64::acos)
    }
    #[must_use]
    pub fn atan(&self) -> Vec2 {
        self.map(f64::atan)
    }

    /// Returns the angle from the positive x-axis, `atan2(y, x)`, in the range `(-π, π]`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Returns a new vector rotated counterclockwise by the given angle in radians.
    ///
    /// # Examples
    ///
    /// ```
    /// use glvec2::core::prelude::*;
    /// let rotated = Vec2::unit_x().rotate(std::f64::consts::FRAC_PI_2);
    /// assert!(rotated.almost_eq(Vec2::unit_y()));
    /// ```
    #[must_use]
    pub fn rotate(&self, radians: f64) -> Vec2 {
        let (sin, cos) = radians.sin_cos();
        Vec2 {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    // Comparison functions
    //
    // Each of these reduces both components to a single bool. The ordering ones only hold when
    // the relation holds for x and for y.

    #[must_use]
    pub fn equal(&self, other: Vec2) -> bool {
        self.x == other.x && self.y == other.y
    }
    #[must_use]
    pub fn not_equal(&self, other: Vec2) -> bool {
        self.x != other.x || self.y != other.y
    }
    /// # Examples
    ///
    /// ```
    /// use glvec2::core::prelude::*;
    /// assert!(Vec2::new(1.0, 2.0).less(Vec2::new(2.0, 3.0)));
    /// assert!(!Vec2::new(1.0, 2.0).less(Vec2::new(2.0, 1.0)));
    /// ```
    #[must_use]
    pub fn less(&self, other: Vec2) -> bool {
        self.x < other.x && self.y < other.y
    }
    #[must_use]
    pub fn less_equal(&self, other: Vec2) -> bool {
        self.x <= other.x && self.y <= other.y
    }
    #[must_use]
    pub fn greater(&self, other: Vec2) -> bool {
        self.x > other.x && self.y > other.y
    }
    #[must_use]
    pub fn greater_equal(&self, other: Vec2) -> bool {
        self.x >= other.x && self.y >= other.y
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Checks if the vector is approximately equal to another vector.
    ///
    /// Two vectors are considered approximately equal if the length of their difference
    /// is less than [`EPSILON`](crate::core::config::EPSILON).
    #[must_use]
    pub fn almost_eq(&self, rhs: Vec2) -> bool {
        (*self - rhs).len() < EPSILON
    }

    /// Compares two vectors based on their squared length.
    ///
    /// This first attempts [`partial_cmp()`](f64::partial_cmp), which fails if either length is
    /// `NaN`. It then falls back to [`total_cmp()`](f64::total_cmp) and logs a warning.
    #[must_use]
    pub fn cmp_by_length(&self, other: &Vec2) -> Ordering {
        let self_len = self.len_sqr();
        let other_len = other.len_sqr();
        self_len.partial_cmp(&other_len).unwrap_or_else(|| {
            warn!(
                "cmp_by_length(): partial_cmp() failed: {} vs. {}",
                self, other
            );
            self_len.total_cmp(&other_len)
        })
    }
}

impl Zero for Vec2 {
    fn zero() -> Self {
        Vec2 { x: 0.0, y: 0.0 }
    }

    fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

impl One for Vec2 {
    fn one() -> Self {
        Vec2 { x: 1.0, y: 1.0 }
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from(value: [f64; 2]) -> Self {
        Vec2::copy(&value)
    }
}
impl From<(f64, f64)> for Vec2 {
    fn from(value: (f64, f64)) -> Self {
        Vec2::copy(&value)
    }
}

impl From<Vec2> for [f64; 2] {
    fn from(value: Vec2) -> Self {
        [value.x, value.y]
    }
}
impl From<Vec2> for (f64, f64) {
    fn from(value: Vec2) -> Self {
        (value.x, value.y)
    }
}

impl TryFrom<&[f64]> for Vec2 {
    type Error = anyhow::Error;

    fn try_from(value: &[f64]) -> Result<Self> {
        match value {
            [x, y] => Ok(Vec2 { x: *x, y: *y }),
            _ => bail!(
                "Vec2::try_from(): expected 2 components, got {}",
                value.len()
            ),
        }
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();

        write!(f, "vec(")?;
        if let Some(p) = precision {
            write!(f, "{0:.1$}", self.x, p)?;
            write!(f, ", {0:.1$}", self.y, p)?;
        } else {
            write!(f, "{}, {}", self.x, self.y)?;
        }
        write!(f, ")")
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<Vec2> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
        }
    }
}
impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self * rhs.x,
            y: self * rhs.y,
        }
    }
}
impl Mul<&Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, rhs: &Vec2) -> Self::Output {
        self * *rhs
    }
}

impl Div<Vec2> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
        }
    }
}
impl Div<f64> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f64) -> Self::Output {
        Vec2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

// The sign of each result component follows the dividend, as with `f64 % f64`.
impl Rem<Vec2> for Vec2 {
    type Output = Vec2;

    fn rem(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x % rhs.x,
            y: self.y % rhs.y,
        }
    }
}
impl Rem<f64> for Vec2 {
    type Output = Vec2;

    fn rem(self, rhs: f64) -> Self::Output {
        Vec2 {
            x: self.x % rhs,
            y: self.y % rhs,
        }
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}
impl Neg for &Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl Sum for Vec2 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Vec2::zero(), Add::add)
    }
}
