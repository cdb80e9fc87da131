use std::fmt::Display;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;
use std::ops::Sub;
use std::ops::SubAssign;

#[cfg(feature = "rand")]
use scalarff::FieldElement;

use super::RingElement;

/// A univariate polynomial with coefficients in a ring
///
/// Coefficients are stored densely, index `i` holding the coefficient
/// of `x^i`. The vector is always in canonical form: it is never empty
/// and, if it holds more than one element, the last element is non-zero.
/// The zero polynomial is a single zero coefficient.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<T>", into = "Vec<T>"))]
pub struct Polynomial<T: RingElement> {
    coefficients: Vec<T>,
}

impl<T: RingElement> Default for Polynomial<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: RingElement> Polynomial<T> {
    /// Build a polynomial from coefficients in ascending degree order.
    /// Trailing zeros are discarded.
    pub fn new(coefficients: Vec<T>) -> Self {
        let mut out = Self { coefficients };
        out.clean_up();
        out
    }

    /// Return the zero polynomial
    pub fn zero() -> Self {
        Self {
            coefficients: vec![T::zero()],
        }
    }

    /// Return the identity polynomial
    pub fn identity() -> Self {
        Self::constant(T::one())
    }

    /// Return the degree 0 polynomial `c`
    pub fn constant(c: T) -> Self {
        Self {
            coefficients: vec![c],
        }
    }

    /// Restore canonical form by removing trailing zero coefficients,
    /// stopping at a single element.
    fn clean_up(&mut self) {
        if self.coefficients.is_empty() {
            self.coefficients.push(T::zero());
        }
        while self.coefficients.len() > 1
            && self.coefficients.last().is_some_and(RingElement::is_zero)
        {
            self.coefficients.pop();
        }
    }

    /// Return the degree of the polynomial. The zero polynomial has degree 0.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Return the coefficient of `x^degree`. Coefficients past the stored
    /// terms are zero.
    pub fn coefficient(&self, degree: usize) -> T {
        self.coefficients
            .get(degree)
            .cloned()
            .unwrap_or_else(T::zero)
    }

    /// The canonical coefficient vector, constant term first
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    pub fn leading_coefficient(&self) -> &T {
        &self.coefficients[self.degree()]
    }

    /// Returns true if `self` is the zero polynomial
    pub fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0].is_zero()
    }

    /// Add `coef * x^exp` to the polynomial
    pub fn term(&mut self, coef: &T, exp: usize) {
        if self.coefficients.len() < exp + 1 {
            self.coefficients.resize(exp + 1, T::zero());
        }
        self.coefficients[exp] += coef.clone();
        self.clean_up();
    }

    /// Raise the polynomial to the power `n` by repeated squaring.
    /// `pow(0)` is the identity polynomial for every receiver, including zero.
    pub fn pow(&self, n: u64) -> Self {
        let mut out = Self::identity();
        let mut base = self.clone();
        let mut n = n;
        while n > 0 {
            if n & 1 == 1 {
                out *= &base;
            }
            n >>= 1;
            if n > 0 {
                base = &base * &base;
            }
        }
        out
    }

    /// Sample a polynomial of (at most) the given degree with uniformly
    /// random coefficients.
    #[cfg(feature = "rand")]
    pub fn rand_uniform<R: rand::Rng>(degree: usize, rng: &mut R) -> Self
    where
        T: FieldElement,
    {
        Self::new((0..=degree).map(|_| T::sample_uniform(rng)).collect())
    }
}

impl<T: RingElement> From<T> for Polynomial<T> {
    fn from(c: T) -> Self {
        Self::constant(c)
    }
}

impl<T: RingElement> From<Vec<T>> for Polynomial<T> {
    fn from(coefficients: Vec<T>) -> Self {
        Self::new(coefficients)
    }
}

impl<T: RingElement> From<Polynomial<T>> for Vec<T> {
    fn from(p: Polynomial<T>) -> Self {
        p.coefficients
    }
}

/// Renders highest degree first, e.g. `3x^2 + 2x + 1`. Zero terms are
/// skipped and negative coefficients print through the ring's own
/// formatting, so `x^2 - 1` renders as `1x^2 + -1`.
impl<T: RingElement> Display for Polynomial<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "{}", self.coefficients[0]);
        }
        let terms = self
            .coefficients
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, c)| !c.is_zero())
            .map(|(i, c)| match i {
                0 => format!("{c}"),
                1 => format!("{c}x"),
                _ => format!("{c}x^{i}"),
            })
            .collect::<Vec<_>>();
        write!(f, "{}", terms.join(" + "))
    }
}

impl<T: RingElement> AddAssign<T> for Polynomial<T> {
    fn add_assign(&mut self, c: T) {
        self.coefficients[0] += c;
    }
}

impl<T: RingElement> SubAssign<T> for Polynomial<T> {
    fn sub_assign(&mut self, c: T) {
        self.coefficients[0] -= c;
    }
}

impl<T: RingElement> MulAssign<T> for Polynomial<T> {
    fn mul_assign(&mut self, c: T) {
        for v in self.coefficients.iter_mut() {
            *v *= c.clone();
        }
        self.clean_up();
    }
}

impl<T: RingElement> AddAssign<&Polynomial<T>> for Polynomial<T> {
    fn add_assign(&mut self, other: &Polynomial<T>) {
        if self.coefficients.len() < other.coefficients.len() {
            self.coefficients
                .resize(other.coefficients.len(), T::zero());
        }
        for (i, v) in other.coefficients.iter().enumerate() {
            self.coefficients[i] += v.clone();
        }
        self.clean_up();
    }
}

impl<T: RingElement> SubAssign<&Polynomial<T>> for Polynomial<T> {
    fn sub_assign(&mut self, other: &Polynomial<T>) {
        if self.coefficients.len() < other.coefficients.len() {
            self.coefficients
                .resize(other.coefficients.len(), T::zero());
        }
        for (i, v) in other.coefficients.iter().enumerate() {
            self.coefficients[i] -= v.clone();
        }
        self.clean_up();
    }
}

impl<T: RingElement> MulAssign<&Polynomial<T>> for Polynomial<T> {
    fn mul_assign(&mut self, other: &Polynomial<T>) {
        let mut coefficients =
            vec![T::zero(); self.coefficients.len() + other.coefficients.len() - 1];
        for (i, a) in self.coefficients.iter().enumerate() {
            for (j, b) in other.coefficients.iter().enumerate() {
                // combine the exponents
                coefficients[i + j] += a.clone() * b.clone();
            }
        }
        self.coefficients = coefficients;
        self.clean_up();
    }
}

impl<T: RingElement> AddAssign for Polynomial<T> {
    fn add_assign(&mut self, other: Self) {
        *self += &other;
    }
}

impl<T: RingElement> SubAssign for Polynomial<T> {
    fn sub_assign(&mut self, other: Self) {
        *self -= &other;
    }
}

impl<T: RingElement> MulAssign for Polynomial<T> {
    fn mul_assign(&mut self, other: Self) {
        *self *= &other;
    }
}

impl<T: RingElement> Add for Polynomial<T> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += &other;
        self
    }
}

impl<T: RingElement> Add<&Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, other: &Polynomial<T>) -> Polynomial<T> {
        let mut out = self.clone();
        out += other;
        out
    }
}

impl<T: RingElement> Sub for Polynomial<T> {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= &other;
        self
    }
}

impl<T: RingElement> Sub<&Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, other: &Polynomial<T>) -> Polynomial<T> {
        let mut out = self.clone();
        out -= other;
        out
    }
}

impl<T: RingElement> Mul for Polynomial<T> {
    type Output = Self;

    fn mul(mut self, other: Self) -> Self {
        self *= &other;
        self
    }
}

impl<T: RingElement> Mul<&Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, other: &Polynomial<T>) -> Polynomial<T> {
        let mut out = self.clone();
        out *= other;
        out
    }
}

impl<T: RingElement> Add<T> for Polynomial<T> {
    type Output = Self;

    fn add(mut self, c: T) -> Self {
        self += c;
        self
    }
}

impl<T: RingElement> Sub<T> for Polynomial<T> {
    type Output = Self;

    fn sub(mut self, c: T) -> Self {
        self -= c;
        self
    }
}

impl<T: RingElement> Mul<T> for Polynomial<T> {
    type Output = Self;

    fn mul(mut self, c: T) -> Self {
        self *= c;
        self
    }
}

impl<T: RingElement> Neg for Polynomial<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Polynomial::new(self.coefficients.into_iter().map(|v| -v).collect())
    }
}

impl<T: RingElement> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        -self.clone()
    }
}
