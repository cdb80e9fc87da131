//! A square matrix over a ring. Used as an evaluation domain for
//! polynomials, e.g. `p(M)` for a square matrix `M`.
//!
//! Dimension mismatches and out of range accesses are programming errors
//! and panic.
use std::fmt::Display;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Index;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;
use std::ops::Sub;
use std::ops::SubAssign;

#[cfg(feature = "rand")]
use scalarff::FieldElement;

use super::RingElement;

/// An `n x n` matrix stored row-major. `n` is fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<T>>", into = "Vec<Vec<T>>")
)]
pub struct Matrix<T: RingElement> {
    size: usize,
    values: Vec<T>,
}

impl<T: RingElement> Matrix<T> {
    /// Build a matrix from `size` rows of `size` elements each.
    /// Panics if the grid is not exactly `size x size`.
    pub fn new(size: usize, rows: Vec<Vec<T>>) -> Self {
        assert!(size > 0, "matrix size must be positive");
        assert_eq!(rows.len(), size, "matrix row count mismatch");
        for row in &rows {
            assert_eq!(row.len(), size, "matrix row length mismatch");
        }
        Matrix {
            size,
            values: rows.into_iter().flatten().collect(),
        }
    }

    /// Return an identity matrix of size `n`
    pub fn identity(n: usize) -> Self {
        let mut out = Self::zero(n);
        for i in 0..n {
            out.values[i * n + i] = T::one();
        }
        out
    }

    /// Return an `n x n` matrix with every entry equal to `v`
    pub fn filled(n: usize, v: T) -> Self {
        assert!(n > 0, "matrix size must be positive");
        Matrix {
            size: n,
            values: vec![v; n * n],
        }
    }

    pub fn zero(n: usize) -> Self {
        Self::filled(n, T::zero())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Retrieve the element at `(row, col)`. Panics if either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> &T {
        assert!(
            row < self.size && col < self.size,
            "matrix index ({row}, {col}) out of range for size {}",
            self.size
        );
        &self.values[row * self.size + col]
    }

    /// Copy the matrix out as a vector of rows
    pub fn rows(&self) -> Vec<Vec<T>> {
        self.values
            .chunks(self.size)
            .map(|row| row.to_vec())
            .collect()
    }

    fn assert_eq_size(&self, other: &Self) {
        assert_eq!(
            self.size, other.size,
            "lhs and rhs matrix dimensions are not equal"
        );
    }

    #[cfg(feature = "rand")]
    pub fn rand_uniform<R: rand::Rng>(size: usize, rng: &mut R) -> Self
    where
        T: FieldElement,
    {
        assert!(size > 0, "matrix size must be positive");
        Matrix {
            size,
            values: (0..size * size).map(|_| T::sample_uniform(rng)).collect(),
        }
    }
}

impl<T: RingElement> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = anyhow::Error;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        let size = rows.len();
        if size == 0 {
            anyhow::bail!("matrix must have at least one row");
        }
        if let Some(i) = rows.iter().position(|row| row.len() != size) {
            anyhow::bail!(
                "matrix row {i} has {} elements, expected {size}",
                rows[i].len()
            );
        }
        Ok(Self::new(size, rows))
    }
}

impl<T: RingElement> From<Matrix<T>> for Vec<Vec<T>> {
    fn from(m: Matrix<T>) -> Self {
        m.rows()
    }
}

impl<T: RingElement> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.get(row, col)
    }
}

impl<T: RingElement> Display for Matrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "(")?;
        for row in self.values.chunks(self.size) {
            write!(f, "[")?;
            for v in row {
                write!(f, "{v},")?;
            }
            write!(f, "],")?;
        }
        write!(f, ")")
    }
}

impl<T: RingElement> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, other: &Matrix<T>) {
        self.assert_eq_size(other);
        for (a, b) in self.values.iter_mut().zip(other.values.iter()) {
            *a += b.clone();
        }
    }
}

impl<T: RingElement> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, other: &Matrix<T>) {
        self.assert_eq_size(other);
        for (a, b) in self.values.iter_mut().zip(other.values.iter()) {
            *a -= b.clone();
        }
    }
}

impl<T: RingElement> AddAssign for Matrix<T> {
    fn add_assign(&mut self, other: Self) {
        *self += &other;
    }
}

impl<T: RingElement> SubAssign for Matrix<T> {
    fn sub_assign(&mut self, other: Self) {
        *self -= &other;
    }
}

impl<T: RingElement> Add for Matrix<T> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += &other;
        self
    }
}

impl<T: RingElement> Sub for Matrix<T> {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= &other;
        self
    }
}

impl<T: RingElement> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, other: &Matrix<T>) -> Matrix<T> {
        self.assert_eq_size(other);
        let n = self.size;
        let mut values = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                let mut v = T::zero();
                for k in 0..n {
                    v += self.values[i * n + k].clone() * other.values[k * n + j].clone();
                }
                values.push(v);
            }
        }
        Matrix { size: n, values }
    }
}

impl<T: RingElement> Mul for Matrix<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        &self * &other
    }
}

impl<T: RingElement> MulAssign<&Matrix<T>> for Matrix<T> {
    fn mul_assign(&mut self, other: &Matrix<T>) {
        *self = &*self * other;
    }
}

impl<T: RingElement> MulAssign for Matrix<T> {
    fn mul_assign(&mut self, other: Self) {
        *self *= &other;
    }
}

impl<T: RingElement> Mul<T> for Matrix<T> {
    type Output = Self;

    fn mul(self, v: T) -> Self {
        Matrix {
            size: self.size,
            values: self.values.into_iter().map(|x| x * v.clone()).collect(),
        }
    }
}

impl<T: RingElement> Neg for Matrix<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Matrix {
            size: self.size,
            values: self.values.into_iter().map(|x| -x).collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use scalarff::OxfoiFieldElement;

    use super::Matrix;

    fn m2(a: i64, b: i64, c: i64, d: i64) -> Matrix<i64> {
        Matrix::new(2, vec![vec![a, b], vec![c, d]])
    }

    #[test]
    fn constructors() {
        let i = Matrix::<i64>::identity(3);
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(*i.get(r, c), if r == c { 1 } else { 0 });
            }
        }
        let f = Matrix::filled(2, 7_i64);
        assert_eq!(f.rows(), vec![vec![7, 7], vec![7, 7]]);
        assert_eq!(f.size(), 2);
        assert_eq!(Matrix::<i64>::zero(2), m2(0, 0, 0, 0));
        assert_eq!(m2(1, 2, 3, 4)[(1, 0)], 3);
    }

    #[test]
    #[should_panic(expected = "matrix row length mismatch")]
    fn ragged_grid() {
        Matrix::new(2, vec![vec![1_i64, 2], vec![3]]);
    }

    #[test]
    #[should_panic(expected = "matrix row count mismatch")]
    fn wrong_row_count() {
        Matrix::new(3, vec![vec![1_i64, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_access() {
        m2(1, 2, 3, 4).get(0, 2);
    }

    #[test]
    fn try_from_rows() {
        let m = Matrix::try_from(vec![vec![1_i64, 2], vec![3, 4]]).unwrap();
        assert_eq!(m, m2(1, 2, 3, 4));
        assert!(Matrix::<i64>::try_from(vec![]).is_err());
        assert!(Matrix::try_from(vec![vec![1_i64, 2], vec![3]]).is_err());
        assert!(Matrix::try_from(vec![vec![1_i64, 2]]).is_err());
    }

    #[test]
    fn arithmetic() {
        let a = m2(1, 2, 3, 4);
        let b = m2(5, 6, 7, 8);
        assert_eq!(a.clone() + b.clone(), m2(6, 8, 10, 12));
        assert_eq!(a.clone() - b.clone(), m2(-4, -4, -4, -4));
        assert_eq!(&a * &b, m2(19, 22, 43, 50));
        assert_eq!(&b * &a, m2(23, 34, 31, 46));
        assert_eq!(a.clone() * 3, m2(3, 6, 9, 12));
        assert_eq!(-a.clone(), m2(-1, -2, -3, -4));
        assert_eq!(&a * &Matrix::identity(2), a);

        let mut c = a.clone();
        c += b.clone();
        c -= a.clone();
        assert_eq!(c, b);
        c *= Matrix::identity(2);
        assert_eq!(c, b);
    }

    #[test]
    #[should_panic(expected = "dimensions are not equal")]
    fn mul_size_mismatch() {
        let _ = Matrix::<i64>::identity(2) * Matrix::identity(3);
    }

    #[test]
    #[should_panic(expected = "dimensions are not equal")]
    fn add_size_mismatch() {
        let _ = Matrix::<i64>::identity(2) + Matrix::identity(3);
    }

    #[test]
    fn display() {
        assert_eq!(m2(1, 2, 3, 4).to_string(), "([1,2,],[3,4,],)");
    }

    #[test]
    fn mul_associative() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let a = Matrix::<OxfoiFieldElement>::rand_uniform(3, &mut rng);
            let b = Matrix::<OxfoiFieldElement>::rand_uniform(3, &mut rng);
            let c = Matrix::<OxfoiFieldElement>::rand_uniform(3, &mut rng);
            assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_validates_shape() {
        let m = m2(1, 2, 3, 4);
        assert_eq!(serde_json::to_string(&m).unwrap(), "[[1,2],[3,4]]");
        let back: Matrix<i64> = serde_json::from_str("[[1,2],[3,4]]").unwrap();
        assert_eq!(back, m);
        assert!(serde_json::from_str::<Matrix<i64>>("[[1,2],[3]]").is_err());
    }
}
