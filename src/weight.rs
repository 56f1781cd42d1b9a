//! Weight capability and GCD reduction.
//!
//! Anything the scheduler hands out must report an integer weight through
//! [`Weighted`]. The scheduler never looks at items beyond that.

use std::rc::Rc;
use std::sync::Arc;

/// A value that carries a scheduling weight.
///
/// The weight is read once, at construction. It must be strictly positive;
/// zero and negative weights are rejected rather than silently skipped.
///
/// ```
/// use junban::Weighted;
///
/// struct Backend {
///     addr: &'static str,
///     share: i64,
/// }
///
/// impl Weighted for Backend {
///     fn weight(&self) -> i64 {
///         self.share
///     }
/// }
/// ```
pub trait Weighted {
    /// The slot's weight.
    fn weight(&self) -> i64;
}

impl<W: Weighted + ?Sized> Weighted for &W {
    #[inline]
    fn weight(&self) -> i64 {
        (**self).weight()
    }
}

impl<W: Weighted + ?Sized> Weighted for Box<W> {
    #[inline]
    fn weight(&self) -> i64 {
        (**self).weight()
    }
}

impl<W: Weighted + ?Sized> Weighted for Rc<W> {
    #[inline]
    fn weight(&self) -> i64 {
        (**self).weight()
    }
}

impl<W: Weighted + ?Sized> Weighted for Arc<W> {
    #[inline]
    fn weight(&self) -> i64 {
        (**self).weight()
    }
}

/// `(item, weight)` pairs: the second element is the weight.
impl<T> Weighted for (T, i64) {
    #[inline]
    fn weight(&self) -> i64 {
        self.1
    }
}

/// Greatest common divisor (Euclid).
pub(crate) fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Divide every weight by the GCD of all of them.
///
/// Returns the divisor and the new total. Weights must be positive and
/// non-empty; the caller validates that.
pub(crate) fn normalize(weights: &mut [u64]) -> (u64, u64) {
    let g = weights.iter().copied().fold(0, gcd);
    if g > 1 {
        for w in weights.iter_mut() {
            *w /= g;
        }
    }
    (g, weights.iter().sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(5, 0), 5);
    }

    #[test]
    fn normalize_reduces_by_common_divisor() {
        let mut w = vec![100, 200];
        let (g, total) = normalize(&mut w);
        assert_eq!(g, 100);
        assert_eq!(total, 3);
        assert_eq!(w, vec![1, 2]);
    }

    #[test]
    fn normalize_leaves_coprime_weights_alone() {
        let mut w = vec![5, 3, 2];
        let (g, total) = normalize(&mut w);
        assert_eq!(g, 1);
        assert_eq!(total, 10);
        assert_eq!(w, vec![5, 3, 2]);
    }

    #[test]
    fn normalize_single_slot_becomes_one() {
        let mut w = vec![42];
        assert_eq!(normalize(&mut w), (42, 1));
        assert_eq!(w, vec![1]);
    }

    fn weight_of<W: Weighted>(w: W) -> i64 {
        w.weight()
    }

    #[test]
    fn forwarding_impls() {
        let pair = ("a", 7i64);
        assert_eq!(weight_of(pair), 7);
        assert_eq!(weight_of(&pair), 7);
        assert_eq!(weight_of(Box::new(pair)), 7);
        assert_eq!(weight_of(Rc::new(pair)), 7);
        assert_eq!(weight_of(Arc::new(pair)), 7);
    }
}
