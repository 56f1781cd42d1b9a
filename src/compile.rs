//! Table compiler.
//!
//! Turns a weight vector into a fixed sequence of slot indices using the
//! "smooth" weighted round-robin walk popularized by nginx:
//!
//! 1. Reduce all weights by their GCD, giving a total `T`.
//! 2. Keep a credit per slot, starting at zero.
//! 3. For each of the `T` positions: add every slot's weight to its credit,
//!    pick the slot with the largest credit (earliest slot on ties), emit it,
//!    and subtract `T` from the winner.
//!
//! Credits sum to zero after every step, so over one pass each slot is picked
//! exactly as often as its reduced weight. Picks of a heavy slot are spread
//! across the cycle instead of being emitted back to back.
//!
//! The walk runs once. Replaying the result is the job of [`crate::Wrr`].

use crate::error::{Result, WrrError};
use crate::weight::normalize;

/// Largest number of slots a cycle can index (indices are stored as `u16`).
pub const MAX_SLOTS: usize = u16::MAX as usize;

/// A compiled smooth round-robin cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    indices: Box<[u16]>,
    slots: usize,
    gcd: u64,
    raw_total: u64,
}

impl Cycle {
    /// Slot indices in selection order.
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Cycle length (the GCD-reduced total weight). Never zero.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always `false`: compilation rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of slots the cycle was compiled for.
    pub fn slot_count(&self) -> usize {
        self.slots
    }

    /// The divisor all weights were reduced by.
    pub fn gcd(&self) -> u64 {
        self.gcd
    }

    /// Sum of the weights as supplied, before reduction.
    pub fn raw_total(&self) -> u64 {
        self.raw_total
    }
}

/// Compile a weight vector into a smooth round-robin [`Cycle`].
///
/// Position `i` of `weights` is slot `i`. Weights must be strictly positive.
///
/// # Errors
///
/// - [`WrrError::Empty`] if `weights` is empty.
/// - [`WrrError::TooManySlots`] if there are more than [`MAX_SLOTS`] weights.
/// - [`WrrError::NonPositiveWeight`] for the first weight `<= 0`.
/// - [`WrrError::WeightOverflow`] if the weights sum past `i64::MAX`.
/// - [`WrrError::CycleTooLarge`] if the reduced cycle cannot be allocated.
///
/// ```
/// let cycle = junban::compile(&[3, 1]).unwrap();
/// assert_eq!(cycle.indices(), &[0, 0, 1, 0]);
/// ```
pub fn compile(weights: &[i64]) -> Result<Cycle> {
    let n = weights.len();
    if n == 0 {
        return Err(WrrError::Empty);
    }
    if n > MAX_SLOTS {
        return Err(WrrError::TooManySlots {
            count: n,
            max: MAX_SLOTS,
        });
    }

    let mut eff = Vec::with_capacity(n);
    let mut raw_total: i64 = 0;
    for (index, &weight) in weights.iter().enumerate() {
        if weight <= 0 {
            return Err(WrrError::NonPositiveWeight { index, weight });
        }
        raw_total = raw_total
            .checked_add(weight)
            .ok_or(WrrError::WeightOverflow)?;
        eff.push(weight as u64);
    }

    let (gcd, total) = normalize(&mut eff);

    let len = usize::try_from(total).map_err(|_| WrrError::CycleTooLarge { len: total })?;
    let mut indices: Vec<u16> = Vec::new();
    indices
        .try_reserve_exact(len)
        .map_err(|_| WrrError::CycleTooLarge { len: total })?;

    // total <= raw_total <= i64::MAX, and every credit stays within
    // (-total, n * total), far from the i64 edges for any allocatable cycle.
    let step = total as i64;
    let mut credit = vec![0i64; n];
    for _ in 0..len {
        let mut best = 0usize;
        let mut best_credit = i64::MIN;
        for (j, (c, &w)) in credit.iter_mut().zip(&eff).enumerate() {
            *c += w as i64;
            // Strict comparison: the earliest slot wins ties.
            if *c > best_credit {
                best = j;
                best_credit = *c;
            }
        }
        indices.push(best as u16);
        credit[best] -= step;
    }

    log::debug!(
        "compiled {} slots: gcd {}, raw total {}, cycle length {}",
        n,
        gcd,
        raw_total,
        len
    );
    log::trace!("cycle indices: {:?}", indices);

    Ok(Cycle {
        indices: indices.into_boxed_slice(),
        slots: n,
        gcd,
        raw_total: raw_total as u64,
    })
}
