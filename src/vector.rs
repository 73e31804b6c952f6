// src/vector.rs
//! Fixed-size Euclidean vectors over `f64`.
//!
//! One const-generic [`Vector`] backs the 2-, 3- and 4-component aliases.
//! Named accessors are only defined for the arities that have them, so
//! `Vector2::w` is a compile error rather than a runtime failure.

use crate::error::{Error, Result};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};

/// Component type of every vector.
pub type Scalar = f64;

/// An N-component Euclidean vector.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector<const N: usize> {
    #[serde(with = "serde_array")]
    data: [Scalar; N],
}

/// A 2-component vector.
pub type Vector2 = Vector<2>;
/// A 3-component vector.
pub type Vector3 = Vector<3>;
/// A 4-component vector.
pub type Vector4 = Vector<4>;

#[allow(clippy::should_implement_trait, clippy::len_without_is_empty)]
impl<const N: usize> Vector<N> {
    /// Construct from an array of length N.
    #[inline(always)]
    pub const fn from_array(data: [Scalar; N]) -> Self {
        Self { data }
    }

    /// Components in index order.
    #[inline(always)]
    pub fn components(&self) -> &[Scalar; N] {
        &self.data
    }

    /// Componentwise sum.
    #[inline]
    pub fn add(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// Componentwise difference.
    #[inline]
    pub fn sub(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    /// Scale every component by `s`.
    #[inline]
    pub fn mul(self, s: Scalar) -> Self {
        self.map(|a| a * s)
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> Scalar {
        let mut sum: Scalar = 0.0;
        for i in 0..N {
            sum += self.data[i] * other.data[i];
        }
        sum
    }

    /// Euclidean norm (length).
    ///
    /// Two-component vectors go through `hypot` so that very large or very
    /// small components neither overflow nor underflow. Higher arities take
    /// the square root of the plain sum of squares.
    #[inline]
    pub fn len(&self) -> Scalar {
        if N == 2 {
            self.data[0].hypot(self.data[1])
        } else {
            self.dot(self).sqrt()
        }
    }

    /// Rescale to unit length.
    ///
    /// A zero-length vector has no direction; it is reported as
    /// [`Error::DegenerateVector`] instead of dividing by zero. Components
    /// are divided by the length directly; the reciprocal of a subnormal
    /// length overflows.
    pub fn normalize(self) -> Result<Self> {
        let len = self.len();
        if len == 0.0 {
            return Err(Error::DegenerateVector);
        }
        Ok(self.map(|a| a / len))
    }

    #[inline]
    fn map(self, f: impl Fn(Scalar) -> Scalar) -> Self {
        let mut out = self.data;
        for v in &mut out {
            *v = f(*v);
        }
        Self { data: out }
    }

    #[inline]
    fn zip_with(self, rhs: Self, f: impl Fn(Scalar, Scalar) -> Scalar) -> Self {
        let mut out = self.data;
        for i in 0..N {
            out[i] = f(out[i], rhs.data[i]);
        }
        Self { data: out }
    }
}

impl Vector<2> {
    /// Create a new `Vector2` from components.
    #[inline(always)]
    pub const fn new(x: Scalar, y: Scalar) -> Self {
        Self { data: [x, y] }
    }

    /// X component.
    #[inline(always)]
    pub fn x(&self) -> Scalar {
        self.data[0]
    }

    /// Y component.
    #[inline(always)]
    pub fn y(&self) -> Scalar {
        self.data[1]
    }
}

impl Vector<3> {
    /// Create a new `Vector3` from components.
    #[inline(always)]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { data: [x, y, z] }
    }

    /// X component.
    #[inline(always)]
    pub fn x(&self) -> Scalar {
        self.data[0]
    }

    /// Y component.
    #[inline(always)]
    pub fn y(&self) -> Scalar {
        self.data[1]
    }

    /// Z component.
    #[inline(always)]
    pub fn z(&self) -> Scalar {
        self.data[2]
    }
}

impl Vector<4> {
    /// Create a new `Vector4` from components.
    #[inline(always)]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// X component.
    #[inline(always)]
    pub fn x(&self) -> Scalar {
        self.data[0]
    }

    /// Y component.
    #[inline(always)]
    pub fn y(&self) -> Scalar {
        self.data[1]
    }

    /// Z component.
    #[inline(always)]
    pub fn z(&self) -> Scalar {
        self.data[2]
    }

    /// W component.
    #[inline(always)]
    pub fn w(&self) -> Scalar {
        self.data[3]
    }
}

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self { data: [0.0; N] }
    }
}

impl<const N: usize> From<[Scalar; N]> for Vector<N> {
    fn from(data: [Scalar; N]) -> Self {
        Self { data }
    }
}

impl<const N: usize> From<Vector<N>> for [Scalar; N] {
    fn from(v: Vector<N>) -> [Scalar; N] {
        v.data
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = Scalar;
    #[inline(always)]
    fn index(&self, i: usize) -> &Scalar {
        &self.data[i]
    }
}

// Arithmetic operators
impl<const N: usize> Add for Vector<N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vector::add(self, rhs)
    }
}

impl<const N: usize> Sub for Vector<N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Vector::sub(self, rhs)
    }
}

impl<const N: usize> Mul<Scalar> for Vector<N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Scalar) -> Self {
        Vector::mul(self, rhs)
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

impl<const N: usize> Zero for Vector<N> {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.data.iter().all(|v| *v == 0.0)
    }
}

/// A tiny wrapper for printing a vector rounded to `decimals` places.
pub struct Rounded<'a, const N: usize>(pub &'a Vector<N>, pub usize);

impl<'a, const N: usize> Rounded<'a, N> {
    /// Wrap a `&Vector` for pretty-printing with `decimals` digits.
    #[inline(always)]
    pub fn new(v: &'a Vector<N>, decimals: usize) -> Self {
        Rounded(v, decimals)
    }
}

impl<const N: usize> fmt::Display for Rounded<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Rounded(v, dec) = *self;
        write!(f, "Vector{}(", N)?;
        for (i, c) in v.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c:.dec$}")?;
        }
        write!(f, ")")
    }
}

// serde has no impls for const-generic arrays; go through a sequence and
// check the length on the way back in.
mod serde_array {
    use super::Scalar;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer, const N: usize>(
        data: &[Scalar; N],
        s: S,
    ) -> Result<S::Ok, S::Error> {
        s.collect_seq(data.iter())
    }

    pub fn deserialize<'de, D: Deserializer<'de>, const N: usize>(
        d: D,
    ) -> Result<[Scalar; N], D::Error> {
        let v = Vec::<Scalar>::deserialize(d)?;
        let len = v.len();
        v.try_into()
            .map_err(|_| D::Error::invalid_length(len, &format!("{N} components").as_str()))
    }
}
