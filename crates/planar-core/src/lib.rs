// SPDX-License-Identifier: Apache-2.0
//! planar-core: surface-snapshot normalization and per-frame diff tracking.
//!
//! AR/SLAM backends report the *current* set of detected planar surfaces once
//! per frame, in mutually incompatible shapes, and none of them say which
//! surfaces are new, changed, or gone. This crate supplies the two pieces that
//! close that gap:
//!
//! - the **normalizer** ([`normalize`]), which converts a raw backend record
//!   ([`RawPlane`]) into the canonical [`PlaneRecord`] shape, and
//! - the **diff engine** ([`PlaneTracker`]), which holds the table of known
//!   surfaces and partitions each frame's snapshot into added/updated/removed
//!   change sets ([`FrameDelta`]).
//!
//! Both are pure and deterministic given their inputs. Delivery of change
//! sets to consumers is the `planar-port` crate's concern; acquiring raw
//! snapshots from a real sensor is the driver's.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::use_self
)]

mod delta;
mod ident;
mod normalize;
mod raw;
mod record;
mod tracker;

// Re-exports for stable public API
/// Per-frame change sets and their counters.
pub use delta::{DeltaStats, FrameDelta};
/// Canonical and raw surface identity.
pub use ident::{PlaneId, RawId};
/// The normalizer: raw backend record to canonical record.
pub use normalize::normalize;
/// Raw backend shapes and the classification error contract.
pub use raw::{Backend, Boundary, RawPlane, ShapeError};
/// The canonical, backend-independent surface record.
pub use record::PlaneRecord;
/// The diff engine owning the known-surfaces table.
pub use tracker::PlaneTracker;
