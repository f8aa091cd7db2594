// SPDX-License-Identifier: Apache-2.0
//! Surface change-set delivery contract.
//!
//! This crate defines the boundary between the diff engine and downstream
//! consumers. It contains no diff logic — that lives in planar-core.
//!
//! # Design Principles
//!
//! - **Consumers are dumb** — They receive change sets and react. No
//!   tracking logic on the consumer side.
//! - **No time ownership** — The driver calls the tracker once per frame
//!   and forwards the result; sinks never poll.
//! - **Snapshots, not streams** — Payload slices are read-only views valid
//!   for the duration of the call; the next frame may reuse the enclosing
//!   storage.
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
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

use planar_core::{FrameDelta, PlaneRecord};

/// Consumer-side hooks for per-frame surface changes.
///
/// Implementors receive the three change sets of one frame, in the order
/// added, updated, removed. A hook fires only when its change set is
/// non-empty (see [`dispatch`]), so an implementation never needs to filter
/// empty notifications.
///
/// The slices are borrowed, point-in-time snapshots. An implementation that
/// needs the records beyond the call must clone them.
pub trait PlaneSink {
    /// Surfaces first seen this frame.
    fn planes_added(&mut self, planes: &[PlaneRecord]);

    /// Surfaces whose data changed this frame.
    fn planes_updated(&mut self, planes: &[PlaneRecord]);

    /// Surfaces that disappeared this frame, with their last-known records.
    fn planes_removed(&mut self, planes: &[PlaneRecord]);
}

/// Forwards one frame's change sets to a sink, skipping empty categories.
pub fn dispatch<S: PlaneSink + ?Sized>(delta: &FrameDelta, sink: &mut S) {
    if !delta.added.is_empty() {
        sink.planes_added(&delta.added);
    }
    if !delta.updated.is_empty() {
        sink.planes_updated(&delta.updated);
    }
    if !delta.removed.is_empty() {
        sink.planes_removed(&delta.removed);
    }
}
