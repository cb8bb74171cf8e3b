// SPDX-License-Identifier: MPL-2.0
//! Toast queue and stacking, independent of any widget library.
//!
//! # Components
//!
//! - [`store`] - `Store`, the ordered set of live toasts and its listeners
//! - [`presenter`] - `Presenter`, turning the live set and measured heights
//!   into offsets and visibility
//! - [`toaster`] - `Toaster`, a store and presenter wired together with the
//!   dismissal timers
//! - [`layout`] - positions, modes and the offset computation
//!
//! # Usage
//!
//! ```
//! use iced_toaster::toast::{Draft, Settings, Toaster};
//! use std::time::{Duration, Instant};
//!
//! let toaster: Toaster = Toaster::with_settings(Settings::default());
//! let saved = toaster.store().success("Image saved");
//! toaster
//!     .store()
//!     .create(Draft::error("Upload failed").persist().dismiss_button(true));
//!
//! // The rendering layer reports heights once it knows them.
//! toaster.report_height(saved, 48.0);
//!
//! for placement in toaster.placements() {
//!     let _ = (placement.offset, placement.visible);
//! }
//!
//! // The host drives the timers.
//! toaster.tick(Instant::now() + Duration::from_secs(10));
//! ```

mod entry;
mod kind;
pub mod layout;
pub mod presenter;
mod settings;
pub mod store;
pub mod toaster;

pub use entry::{Action, ActionHandler, Content, Dismissal, Draft, Hints, Toast, ToastId};
pub use kind::Kind;
pub use layout::{stack_offsets, Alignment, Edge, Mode, Placement, Position};
pub use presenter::Presenter;
pub use settings::{KindDefaults, KindStyle, Settings};
pub use store::{Listener, Store, Subscription, WeakStore};
pub use toaster::Toaster;
