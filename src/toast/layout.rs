// SPDX-License-Identifier: MPL-2.0
//! Stacking geometry: positions, display modes and offset computation.

use super::entry::ToastId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Screen edge the stack is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

/// Horizontal placement of the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Start,
    Center,
    End,
}

/// Where the stack sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    #[default]
    BottomCenter,
    BottomRight,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Edge that receives offset 0.
    #[must_use]
    pub fn edge(self) -> Edge {
        match self {
            Position::TopLeft | Position::TopCenter | Position::TopRight => Edge::Top,
            Position::BottomLeft | Position::BottomCenter | Position::BottomRight => Edge::Bottom,
        }
    }

    #[must_use]
    pub fn alignment(self) -> Alignment {
        match self {
            Position::TopLeft | Position::BottomLeft => Alignment::Start,
            Position::TopCenter | Position::BottomCenter => Alignment::Center,
            Position::TopRight | Position::BottomRight => Alignment::End,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|position| position.as_str() == s)
            .ok_or_else(|| format!("unknown position '{s}'"))
    }
}

/// How many toasts are shown at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Every live toast is shown, stacked.
    #[default]
    Multi,
    /// Only the newest toast is shown; creating one removes the others.
    Single,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "multi" => Ok(Mode::Multi),
            "single" => Ok(Mode::Single),
            other => Err(format!("unknown mode '{other}'")),
        }
    }
}

/// Where the rendering layer should put one toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub id: ToastId,
    pub visible: bool,
    /// Distance from the anchored edge, in logical pixels.
    pub offset: f32,
    pub edge: Edge,
    pub alignment: Alignment,
    /// The toast is in its grace period and about to be removed.
    pub closing: bool,
}

/// Computes stacking offsets.
///
/// `heights` is ordered oldest first; `None` stands for a height that has not
/// been reported yet and counts as 0. The newest toast sits on the anchored
/// edge with offset 0, and every older toast is pushed away from the edge by
/// `height + gap` of each toast newer than itself.
#[must_use]
pub fn stack_offsets(heights: &[Option<f32>], gap: f32) -> Vec<f32> {
    let mut offsets = vec![0.0; heights.len()];
    let mut running = 0.0;

    for index in (0..heights.len()).rev() {
        offsets[index] = running;
        running += heights[index].unwrap_or(0.0) + gap;
    }

    offsets
}
