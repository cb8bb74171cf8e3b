// SPDX-License-Identifier: MPL-2.0
//! Semantic categories of toasts.

/// Category of a toast.
///
/// The core never interprets the kind beyond carrying it; the rendering layer
/// picks the accent color and glyph from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    /// Neutral message without semantic accent.
    #[default]
    Default,
    /// Operation completed successfully.
    Success,
    /// Something failed.
    Error,
    /// Something needs attention but did not fail.
    Warning,
    /// Informational message.
    Info,
    /// Caller-rendered block shown without the standard chrome.
    Custom,
}

impl Kind {
    /// All kinds, in declaration order.
    pub const ALL: [Kind; 6] = [
        Kind::Default,
        Kind::Success,
        Kind::Error,
        Kind::Warning,
        Kind::Info,
        Kind::Custom,
    ];

    /// Stable lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Default => "default",
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Warning => "warning",
            Kind::Info => "info",
            Kind::Custom => "custom",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
