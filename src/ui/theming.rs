// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes for toasts.
//!
//! The OS preference is read once through `dark_light` when a theme is
//! resolved; it is not watched for changes.

use crate::toast::Kind;
use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors a toast is painted with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub surface: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub border: Color,
    pub hover: Color,

    // Semantic colors
    pub neutral: Color,
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::WHITE,
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            border: palette::GRAY_100,
            hover: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },

            neutral: palette::GRAY_700,
            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: palette::GRAY_800,
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            border: palette::GRAY_700,
            hover: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            },

            neutral: palette::GRAY_200,
            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,
        }
    }

    /// Accent color of a toast kind.
    #[must_use]
    pub fn accent(&self, kind: Kind) -> Color {
        match kind {
            Kind::Default | Kind::Custom => self.neutral,
            Kind::Success => self.success,
            Kind::Error => self.error,
            Kind::Warning => self.warning,
            Kind::Info => self.info,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }
}

/// Whether toasts match the application theme or stand out against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Default,
    /// Light toasts on a dark theme and the other way around.
    Invert,
}

/// Resolved theme of a mounted toaster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastTheme {
    /// Whether the surrounding application is dark.
    pub app_dark: bool,
    pub toast: ColorScheme,
}

impl ToastTheme {
    /// Resolves `mode` (querying the OS for `System`) and applies `appearance`.
    #[must_use]
    pub fn new(mode: ThemeMode, appearance: Appearance) -> Self {
        Self::from_dark(mode.is_dark(), appearance)
    }

    #[must_use]
    pub fn from_dark(app_dark: bool, appearance: Appearance) -> Self {
        let toast_dark = match appearance {
            Appearance::Default => app_dark,
            Appearance::Invert => !app_dark,
        };
        let toast = if toast_dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };
        Self { app_dark, toast }
    }

    /// Iced theme for the surrounding application.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.app_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
