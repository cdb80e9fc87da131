use std::fmt::Debug;
use std::fmt::Display;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;
use std::ops::Sub;
use std::ops::SubAssign;

use scalarff::alt_bn128::Bn128FieldElement;
use scalarff::Curve25519FieldElement;
use scalarff::FieldElement;
use scalarff::OxfoiFieldElement;

/// An element of a ring. Coefficients of a [`Polynomial`](crate::Polynomial)
/// and entries of a [`Matrix`](crate::Matrix) are values of this trait.
///
/// Nothing beyond ring arithmetic is assumed: there is no division,
/// no ordering and no overflow contract. Multiplication need not be
/// commutative and the ring may have zero divisors.
pub trait RingElement:
    Clone
    + Debug
    + Display
    + PartialEq
    + Add<Output = Self>
    + AddAssign
    + Mul<Output = Self>
    + MulAssign
    + Neg<Output = Self>
    + Sub<Output = Self>
    + SubAssign
{
    /// The additive identity
    fn zero() -> Self;

    /// The multiplicative identity
    fn one() -> Self;

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Map an unsigned integer into the ring, e.g. `3` becomes `1 + 1 + 1`.
    ///
    /// The default implementation only uses ring addition (double-and-add),
    /// so it works for any ring. Types with a native conversion override it.
    fn from_u64(v: u64) -> Self {
        double_and_add(Self::one(), v)
    }

    /// Map the negation of an unsigned integer into the ring, e.g. `3`
    /// becomes `-1 + -1 + -1`.
    ///
    /// The value is accumulated from `-1` rather than negated at the end,
    /// so the most negative value of a two's complement integer does not
    /// overflow.
    fn from_u64_negated(v: u64) -> Self {
        double_and_add(-Self::one(), v)
    }
}

/// `unit * v` using only ring addition
fn double_and_add<T: RingElement>(unit: T, v: u64) -> T {
    let mut out = T::zero();
    let mut base = unit;
    let mut v = v;
    while v > 0 {
        if v & 1 == 1 {
            out += base.clone();
        }
        v >>= 1;
        if v > 0 {
            base = base.clone() + base;
        }
    }
    out
}

macro_rules! primitive_ring_element {
    ( $zero: expr, $one: expr, $( $t: ty ),* ) => {
        $(
            impl RingElement for $t {
                fn zero() -> Self {
                    $zero
                }

                fn one() -> Self {
                    $one
                }
            }
        )*
    };
}

primitive_ring_element!(0, 1, i8, i16, i32, i64, i128, isize);
primitive_ring_element!(0.0, 1.0, f32, f64);

macro_rules! field_ring_element {
    ( $( $t: ty ),* ) => {
        $(
            impl RingElement for $t {
                fn zero() -> Self {
                    <$t as FieldElement>::zero()
                }

                fn one() -> Self {
                    <$t as FieldElement>::one()
                }

                fn from_u64(v: u64) -> Self {
                    <$t>::from(v)
                }

                fn from_u64_negated(v: u64) -> Self {
                    -<$t>::from(v)
                }
            }
        )*
    };
}

field_ring_element!(OxfoiFieldElement, Bn128FieldElement, Curve25519FieldElement);
