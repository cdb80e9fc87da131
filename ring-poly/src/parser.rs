//! Parse polynomials from free-form text such as `3x^2 + 2x + 1 - x + 5`.
//!
//! Whitespace is ignored. The remaining text is scanned left to right as a
//! sequence of monomials, each made of three optional groups:
//!
//! - a run of `+`/`-` signs, negative if it holds an odd number of `-`
//! - a run of decimal digits, the coefficient magnitude (`1` if absent)
//! - `x` or `x^<digits>`, the degree (`0` if absent, `1` for a bare `x`)
//!
//! Monomials of equal degree are summed, so `2x - x` is `x`. Exponents
//! above [`MAX_PARSED_DEGREE`] are rejected.
use std::str::FromStr;

use anyhow::Context;
use anyhow::Result;
use tracing::debug;
use tracing::trace;

use super::Polynomial;
use super::RingElement;

/// The largest exponent accepted in text. The dense representation
/// allocates one coefficient per degree.
pub const MAX_PARSED_DEGREE: usize = 1 << 24;

/// A single signed term read from the input
#[derive(Clone, Debug, PartialEq, Eq)]
struct Monomial {
    negative: bool,
    coefficient: u64,
    degree: usize,
}

impl Monomial {
    fn value<T: RingElement>(&self) -> T {
        if self.negative {
            T::from_u64_negated(self.coefficient)
        } else {
            T::from_u64(self.coefficient)
        }
    }
}

/// Parse the digits following `x^` at `offset`.
fn parse_degree(digits: &str, offset: usize) -> Result<usize> {
    let degree = digits.parse::<usize>().with_context(|| {
        format!("can not parse string polynomial: exponent {digits} at offset {offset} is out of range")
    })?;
    if degree > MAX_PARSED_DEGREE {
        debug!(offset, degree, "rejected polynomial exponent");
        anyhow::bail!(
            "can not parse string polynomial: exponent {degree} at offset {offset} exceeds {MAX_PARSED_DEGREE}"
        );
    }
    Ok(degree)
}

/// Split whitespace-free source into monomials.
fn scan(src: &str) -> Result<Vec<Monomial>> {
    let bytes = src.as_bytes();
    let len = bytes.len();
    let mut monomials = Vec::new();
    let mut i = 0;
    while i < len {
        let start = i;

        // sign run
        let mut minus_count = 0;
        while i < len && (bytes[i] == b'+' || bytes[i] == b'-') {
            if bytes[i] == b'-' {
                minus_count += 1;
            }
            i += 1;
        }

        // coefficient digits
        let digits_start = i;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let digits = &src[digits_start..i];

        // x group
        let x_start = i;
        if i < len && bytes[i] == b'x' {
            i += 1;
            if i < len && bytes[i] == b'^' {
                i += 1;
                while i < len && bytes[i].is_ascii_digit() {
                    i += 1;
                }
            }
        }
        let x_group = &src[x_start..i];

        if i == start {
            // i only ever advances over ascii so `start` is a char boundary
            let c = src[start..].chars().next().unwrap_or_default();
            debug!(offset = start, "rejected polynomial expression: {src}");
            anyhow::bail!(
                "can not parse string polynomial: unexpected character '{c}' at offset {start}"
            );
        }

        let coefficient = if digits.is_empty() {
            1
        } else {
            digits.parse::<u64>().with_context(|| {
                format!("can not parse string polynomial: coefficient {digits} at offset {digits_start} is out of range")
            })?
        };

        let degree = match x_group {
            "" => 0,
            "x" => 1,
            g if g.len() > 2 && g.starts_with("x^") => parse_degree(&g[2..], x_start + 2)?,
            g => {
                debug!(offset = x_start, "rejected polynomial expression: {src}");
                anyhow::bail!(
                    "can not parse string polynomial: malformed term \"{g}\" at offset {x_start}"
                )
            }
        };

        let monomial = Monomial {
            negative: minus_count % 2 == 1,
            coefficient,
            degree,
        };
        trace!(offset = start, ?monomial, "scanned monomial");
        monomials.push(monomial);
    }
    Ok(monomials)
}

impl<T: RingElement> Polynomial<T> {
    /// Parse a polynomial from text. See the [module docs](self) for the grammar.
    pub fn parse(source: &str) -> Result<Self> {
        let cleaned = source
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>();
        let mut out = Self::zero();
        for monomial in scan(&cleaned)? {
            out.term(&monomial.value(), monomial.degree);
        }
        Ok(out)
    }
}

impl<T: RingElement> FromStr for Polynomial<T> {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
