//! Horner evaluation of a [`Polynomial`] in different domains.
//!
//! A polynomial with coefficients in `T` can be evaluated at a scalar `T`,
//! at another polynomial (composition) or at a square matrix. All three
//! use the same recurrence, folding coefficients from the highest degree
//! down:
//!
//! ```text
//! acc = acc * point + c_i
//! ```
//!
//! Only the starting accumulator and the meaning of `*` and `+ c_i`
//! change between domains, see [`HornerDomain`].
use tracing::trace;

use super::Matrix;
use super::Polynomial;
use super::RingElement;

/// A domain a polynomial over `T` can be evaluated in
pub trait HornerDomain<T: RingElement>: Sized {
    /// The accumulator before any coefficient is folded in, shaped
    /// after the evaluation point `self`.
    fn horner_start(&self) -> Self;

    /// A single Horner step, `acc * point + coefficient`.
    fn horner_step(acc: Self, point: &Self, coefficient: &T) -> Self;
}

impl<T: RingElement> HornerDomain<T> for T {
    fn horner_start(&self) -> Self {
        T::zero()
    }

    fn horner_step(acc: Self, point: &Self, coefficient: &T) -> Self {
        acc * point.clone() + coefficient.clone()
    }
}

impl<T: RingElement> HornerDomain<T> for Polynomial<T> {
    fn horner_start(&self) -> Self {
        Polynomial::zero()
    }

    fn horner_step(mut acc: Self, point: &Self, coefficient: &T) -> Self {
        acc *= point;
        acc += coefficient.clone();
        acc
    }
}

/// The matrix domain starts from the identity and adds each coefficient
/// to every entry of the accumulator (not only the diagonal). For a
/// polynomial of degree `d` this yields
/// `M^(d+1) + sum_i J(c_i) * M^i` where `J(c)` is the matrix filled with `c`.
impl<T: RingElement> HornerDomain<T> for Matrix<T> {
    fn horner_start(&self) -> Self {
        Matrix::identity(self.size())
    }

    fn horner_step(acc: Self, point: &Self, coefficient: &T) -> Self {
        &acc * point + Matrix::filled(point.size(), coefficient.clone())
    }
}

impl<T: RingElement> Polynomial<T> {
    /// Evaluate the polynomial at `point` using Horner's method.
    ///
    /// `point` may be a ring element, a [`Polynomial`] or a [`Matrix`].
    pub fn evaluate<D: HornerDomain<T>>(&self, point: &D) -> D {
        trace!(degree = self.degree(), "horner evaluation");
        self.coefficients()
            .iter()
            .rev()
            .fold(point.horner_start(), |acc, c| D::horner_step(acc, point, c))
    }

    /// Substitute `other` for the variable, returning `self(other(x))`.
    pub fn compose(&self, other: &Polynomial<T>) -> Polynomial<T> {
        self.evaluate(other)
    }

    pub fn evaluate_matrix(&self, m: &Matrix<T>) -> Matrix<T> {
        trace!(size = m.size(), "matrix evaluation");
        self.evaluate(m)
    }
}

#[cfg(test)]
mod test {
    use scalarff::FieldElement;
    use scalarff::OxfoiFieldElement;

    use crate::Matrix;
    use crate::Polynomial;

    /// `sum c_i x^i` computed term by term
    fn naive_eval(p: &Polynomial<OxfoiFieldElement>, x: &OxfoiFieldElement) -> OxfoiFieldElement {
        let mut out = OxfoiFieldElement::zero();
        let mut power = OxfoiFieldElement::one();
        for c in p.coefficients() {
            out += c.clone() * power.clone();
            power *= x.clone();
        }
        out
    }

    #[test]
    fn scalar_evaluation() {
        let p = Polynomial::new(vec![1_i64, 2, 3]);
        assert_eq!(p.evaluate(&2_i64), 17);
        assert_eq!(p.evaluate(&0_i64), 1);
        assert_eq!(p.evaluate(&-1_i64), 2);
        assert_eq!(Polynomial::<i64>::zero().evaluate(&5_i64), 0);
    }

    #[test]
    fn horner_matches_naive() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let p = Polynomial::<OxfoiFieldElement>::rand_uniform(6, &mut rng);
            let x = OxfoiFieldElement::sample_uniform(&mut rng);
            assert_eq!(p.evaluate(&x), naive_eval(&p, &x));
        }
    }

    #[test]
    fn substitution() {
        let p = Polynomial::new(vec![1_i64, 2, 3]);
        let q = Polynomial::new(vec![1_i64, 2]);
        let r = p.compose(&q);
        assert_eq!(r.coefficients(), &[6, 16, 12]);
        // composing with x is the identity
        assert_eq!(p.compose(&Polynomial::new(vec![0, 1])), p);
        // composing with a constant evaluates
        assert_eq!(p.compose(&Polynomial::from(2)), Polynomial::from(17));
    }

    #[test]
    fn composition_commutes_with_evaluation() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let p = Polynomial::<OxfoiFieldElement>::rand_uniform(4, &mut rng);
            let q = Polynomial::<OxfoiFieldElement>::rand_uniform(3, &mut rng);
            let x = OxfoiFieldElement::sample_uniform(&mut rng);
            let pq = p.compose(&q);
            assert_eq!(pq.degree(), p.degree() * q.degree());
            assert_eq!(pq.evaluate(&x), p.evaluate(&q.evaluate(&x)));
        }
    }

    #[test]
    fn matrix_evaluation() {
        let p = Polynomial::new(vec![1_i64, 2, 3]);
        let m = p.evaluate_matrix(&Matrix::identity(2));
        assert_eq!(m.size(), 2);
        assert_eq!(m.rows(), vec![vec![7, 6], vec![6, 7]]);
    }

    #[test]
    fn matrix_evaluation_closed_form() {
        // p(M) = M^(d+1) + sum_i J(c_i) * M^i
        let p = Polynomial::new(vec![2_i64, -1, 1]);
        let a = Matrix::new(2, vec![vec![1, 2], vec![0, 3]]);
        let a2 = &a * &a;
        let a3 = &a2 * &a;
        let expected = a3
            + &Matrix::filled(2, 2_i64) * &Matrix::identity(2)
            + &Matrix::filled(2, -1_i64) * &a
            + &Matrix::filled(2, 1_i64) * &a2;
        assert_eq!(p.evaluate(&a), expected);
    }

    #[test]
    fn matrix_evaluation_keeps_size() {
        let p = Polynomial::<i64>::parse("x^3 - 4").unwrap();
        let m = p.evaluate_matrix(&Matrix::filled(4, 1_i64));
        assert_eq!(m.size(), 4);
    }
}
