//! # Win Detection Strategies Module
//!
//! This module contains the detection strategies that can be plugged into a
//! [`Game`](crate::Game). Each strategy implements the
//! [`WinDetector`](crate::WinDetector) trait, so they are interchangeable
//! and must agree on every board state.
//!
//! ## Available Strategies
//! - **Naive**: full-board rescan, O(rows * columns) per check
//! - **Incremental**: four-axis check around the last move, O(1) per check
//! - **Bitboard**: last-move check against per-symbol bit masks, O(1) per
//!   check with branchless occupancy tests
//!
//! ## Adding a New Strategy
//! Implement `WinDetector` for a new type: `has_connect_four` for the
//! query, plus the `observe_drop`/`observe_reset` hooks if the strategy
//! keeps state parallel to the grid.

pub mod bitboard;
pub mod incremental;
pub mod naive;

/// The four line axes as (row, column) steps: horizontal, vertical, main
/// diagonal, anti-diagonal. The opposite direction of each axis is its
/// negation.
pub(crate) const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];
