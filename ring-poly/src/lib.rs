//! Univariate polynomials and square matrices with entries in an abstract
//! ring ([`RingElement`]). Polynomials can be built from coefficients or parsed
//! from text (`"3x^2 + 2x + 1"`), combined with the usual arithmetic operators
//! and evaluated with Horner's method at a ring element, at another polynomial
//! or at a [`Matrix`].
//!
//! ```
//! use ring_poly::Matrix;
//! use ring_poly::Polynomial;
//!
//! let p: Polynomial<i64> = "3x^2 + 2x + 1".parse().unwrap();
//! assert_eq!(p.evaluate(&2_i64), 17);
//! assert_eq!(p.compose(&Polynomial::new(vec![1, 2])).coefficients(), &[6, 16, 12]);
//! assert_eq!(p.evaluate_matrix(&Matrix::identity(2)).rows(), vec![vec![7, 6], vec![6, 7]]);
//! assert_eq!(p.to_string(), "3x^2 + 2x + 1");
//! ```

mod evaluate;
mod matrix;
mod parser;
mod polynomial;
mod ring;

pub use evaluate::HornerDomain;
pub use matrix::Matrix;
pub use parser::MAX_PARSED_DEGREE;
pub use polynomial::Polynomial;
pub use ring::RingElement;

pub use scalarff::FieldElement;
