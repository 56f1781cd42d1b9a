//! `junban`: precompiled smooth weighted round-robin.
//!
//! Given a fixed set of items, each with a positive integer weight, a [`Wrr`]
//! hands them out so that every full cycle contains each item exactly as many
//! times as its (GCD-reduced) weight. Heavy items are interleaved with light
//! ones instead of arriving in bursts: weights `{A: 3, B: 1}` yield
//! `A A B A`, not `A A A B`.
//!
//! The weight table is compiled once, at construction, using nginx's smooth
//! weighted round-robin walk. Selection is then a single atomic increment plus
//! two array lookups, safe to call from many threads at once.
//!
//! Exposed modules:
//! - `weight`: the [`Weighted`] capability items implement.
//! - `compile`: the table compiler ([`compile()`], [`Cycle`]).
//! - `wrr`: the lock-free cursor scheduler ([`Wrr`]).
//! - `error`: construction errors ([`WrrError`]).
//!
//! ```
//! use junban::{Weighted, Wrr};
//!
//! #[derive(Clone)]
//! struct Server {
//!     name: &'static str,
//!     w: i64,
//! }
//!
//! impl Weighted for Server {
//!     fn weight(&self) -> i64 {
//!         self.w
//!     }
//! }
//!
//! let servers = [Server { name: "s1", w: 5 }, Server { name: "s2", w: 1 }];
//! let sched = Wrr::new(&servers)?;
//! let first = sched.next();
//! assert_eq!(first.name, "s1");
//! # Ok::<(), junban::WrrError>(())
//! ```
//!
//! Weights are fixed for the lifetime of a scheduler. To reweight, build a new
//! one.

#![forbid(unsafe_code)]

pub mod compile;
pub mod error;
pub mod weight;
pub mod wrr;

pub use compile::{compile, Cycle, MAX_SLOTS};
pub use error::{Result, WrrError};
pub use weight::Weighted;
pub use wrr::{Picks, Wrr};
