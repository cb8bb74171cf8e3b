// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timing**: Auto-dismiss and close grace delays
//! - **Geometry**: Gap between toasts and distance to the window edges

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default auto-dismiss delay (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 5000;

/// Maximum auto-dismiss delay (in milliseconds).
pub const MAX_DURATION_MS: u64 = 10 * 60 * 1000;

/// Delay between a close trigger and removal, leaving room for the exit
/// (in milliseconds).
pub const DEFAULT_CLOSE_GRACE_MS: u64 = 1000;

/// Maximum close grace delay (in milliseconds).
pub const MAX_CLOSE_GRACE_MS: u64 = 10_000;

/// Interval of the timer tick driving auto-dismiss (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Geometry Defaults
// ==========================================================================

/// Default space between stacked toasts (in logical pixels).
pub const DEFAULT_GAP: f32 = 15.0;

/// Maximum space between stacked toasts.
pub const MAX_GAP: f32 = 128.0;

/// Default distance between the stack and the window edges.
pub const DEFAULT_OFFSET: f32 = 20.0;

/// Maximum distance between the stack and the window edges.
pub const MAX_OFFSET: f32 = 256.0;
