// SPDX-License-Identifier: MPL-2.0
//! Toaster settings supplied at mount time.

use super::kind::Kind;
use super::layout::{Mode, Position};
use crate::config::defaults::{
    DEFAULT_CLOSE_GRACE_MS, DEFAULT_DURATION_MS, DEFAULT_GAP, DEFAULT_OFFSET, MAX_CLOSE_GRACE_MS,
    MAX_DURATION_MS, MAX_GAP, MAX_OFFSET,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Behavior and geometry of a toaster.
///
/// Serialized as the `[toaster]` table of `settings.toml`; every field is
/// optional there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub position: Position,
    /// Space between stacked toasts, in logical pixels.
    pub gap: f32,
    /// Distance between the stack and the window edges.
    pub offset: f32,
    pub mode: Mode,
    /// Auto-dismiss delay for toasts that do not set their own. 0 disables it.
    pub default_duration_ms: u64,
    /// Delay between a close trigger and the actual removal.
    pub close_grace_ms: u64,
    /// Whether toasts show a dismiss button unless they say otherwise.
    pub dismiss_button: bool,
    /// Per-kind presentation defaults, the `[toaster.kinds.<kind>]` tables.
    #[serde(skip_serializing_if = "KindDefaults::is_empty")]
    pub kinds: KindDefaults,
}

/// Presentation defaults applied to every toast of one kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KindStyle {
    /// Glyph shown when the toast carries no glyph of its own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

/// [`KindStyle`] per toast kind; missing kinds use the built-in look.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KindDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<KindStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<KindStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<KindStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<KindStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<KindStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<KindStyle>,
}

impl KindDefaults {
    #[must_use]
    pub fn get(&self, kind: Kind) -> Option<&KindStyle> {
        match kind {
            Kind::Default => self.default.as_ref(),
            Kind::Success => self.success.as_ref(),
            Kind::Error => self.error.as_ref(),
            Kind::Warning => self.warning.as_ref(),
            Kind::Info => self.info.as_ref(),
            Kind::Custom => self.custom.as_ref(),
        }
    }

    /// Replaces the defaults of one kind.
    pub fn set(&mut self, kind: Kind, style: KindStyle) {
        let slot = match kind {
            Kind::Default => &mut self.default,
            Kind::Success => &mut self.success,
            Kind::Error => &mut self.error,
            Kind::Warning => &mut self.warning,
            Kind::Info => &mut self.info,
            Kind::Custom => &mut self.custom,
        };
        *slot = Some(style);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        Kind::ALL.into_iter().all(|kind| self.get(kind).is_none())
    }

    /// Default glyph configured for `kind`, ignoring blank values.
    #[must_use]
    pub fn media(&self, kind: Kind) -> Option<&str> {
        self.get(kind)
            .and_then(|style| style.media.as_deref())
            .filter(|media| !media.trim().is_empty())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            position: Position::default(),
            gap: DEFAULT_GAP,
            offset: DEFAULT_OFFSET,
            mode: Mode::default(),
            default_duration_ms: DEFAULT_DURATION_MS,
            close_grace_ms: DEFAULT_CLOSE_GRACE_MS,
            dismiss_button: false,
            kinds: KindDefaults::default(),
        }
    }
}

/// Clamps a float setting, replacing non-finite values with the default.
fn clamp_or(value: f32, max: f32, default: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, max)
    } else {
        default
    }
}

impl Settings {
    /// Brings every value inside its supported range so hand-edited configs
    /// cannot request nonsensical geometry.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            gap: clamp_or(self.gap, MAX_GAP, DEFAULT_GAP),
            offset: clamp_or(self.offset, MAX_OFFSET, DEFAULT_OFFSET),
            default_duration_ms: self.default_duration_ms.min(MAX_DURATION_MS),
            close_grace_ms: self.close_grace_ms.min(MAX_CLOSE_GRACE_MS),
            ..self
        }
    }

    /// Default auto-dismiss duration; `None` when auto-dismiss is off.
    #[must_use]
    pub fn default_duration(&self) -> Option<Duration> {
        (self.default_duration_ms > 0).then(|| Duration::from_millis(self.default_duration_ms))
    }

    #[must_use]
    pub fn close_grace(&self) -> Duration {
        Duration::from_millis(self.close_grace_ms)
    }
}
