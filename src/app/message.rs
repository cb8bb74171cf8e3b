// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the playground.

use crate::toast::{Kind, Mode, Position};
use crate::ui::overlay;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Show(Kind),
    ShowWithAction,
    ShowPersistent,
    SetPosition(Position),
    SetMode(Mode),
    ToggleDismissButton,
    Clear,
    Toast(overlay::Message),
    Tick(Instant), // Periodic tick driving toast timers
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`).
    pub lang: Option<String>,
    /// Config file used instead of the one in the user config directory.
    pub config_path: Option<PathBuf>,
    /// Position override for this session; not persisted.
    pub position: Option<Position>,
    /// Mode override for this session; not persisted.
    pub mode: Option<Mode>,
}
