// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of toasts.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and inverted toast appearance
//! - [`toast`] - Card widget for a single toast and its height estimate
//! - [`overlay`] - Stacked overlay positioning every visible toast

pub mod design_tokens;
pub mod overlay;
pub mod theming;
pub mod toast;
