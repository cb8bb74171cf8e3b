// SPDX-License-Identifier: MPL-2.0
//! `iced_toaster` provides toast notifications for the Iced GUI framework.
//!
//! The [`toast`] module holds the framework-agnostic core: a notification
//! store, a presenter computing where each toast sits in the stack, and a
//! [`Toaster`](toast::Toaster) tying them together with dismissal timers.
//! The [`ui`] module renders that state with Iced, and [`app`] is a small
//! playground built on both.

#![doc(html_root_url = "https://docs.rs/iced_toaster/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod toast;
pub mod ui;

#[cfg(test)]
mod test_utils;
