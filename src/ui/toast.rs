// SPDX-License-Identifier: MPL-2.0
//! Card widget for a single toast.
//!
//! Cards have a kind-colored accent border, an optional glyph, the text
//! content and an actions row holding the action and dismiss buttons.

use super::overlay::Message;
use crate::i18n::fluent::I18n;
use crate::toast::{Content, Kind, KindDefaults, Settings, Toast, ToastId};
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, text, tooltip, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Translated button texts, resolved once per view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub dismiss: String,
    pub action: String,
    pub action_alt: String,
}

impl Labels {
    #[must_use]
    pub fn from_i18n(i18n: &I18n) -> Self {
        Self {
            dismiss: i18n.tr("toast-dismiss"),
            action: i18n.tr("toast-action"),
            action_alt: i18n.tr("toast-action-alt"),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            dismiss: "Close".to_string(),
            action: "Action".to_string(),
            action_alt: "esc".to_string(),
        }
    }
}

/// Default glyph of a kind, if it has one.
#[must_use]
pub fn kind_glyph(kind: Kind) -> Option<&'static str> {
    match kind {
        Kind::Success => Some("✔"),
        Kind::Error => Some("✖"),
        Kind::Warning => Some("⚠"),
        Kind::Info => Some("ℹ"),
        Kind::Default | Kind::Custom => None,
    }
}

/// Glyph shown on the card: the toast's own media, then the configured
/// default of its kind, then the built-in kind glyph.
fn glyph<C>(toast: &Toast<C>, kinds: &KindDefaults) -> Option<String> {
    toast
        .hints()
        .media
        .clone()
        .or_else(|| kinds.media(toast.kind()).map(str::to_string))
        .or_else(|| kind_glyph(toast.kind()).map(str::to_string))
}

/// Renders the card of one toast.
///
/// `custom` renders [`Content::Custom`] payloads and gets the toast id along
/// with the payload; it is never called for text toasts.
pub fn view<'a, C>(
    toast: &Toast<C>,
    scheme: ColorScheme,
    labels: &Labels,
    settings: &Settings,
    custom: &dyn Fn(ToastId, &C) -> Element<'a, Message>,
) -> Element<'a, Message> {
    let id = toast.id();
    let default_dismiss_button = settings.dismiss_button;
    let accent = scheme.accent(toast.kind());

    let body: Element<'a, Message> = match toast.content() {
        Content::Text { title, description } => {
            let mut column = Column::new().spacing(spacing::XXS).push(
                Text::new(title.clone())
                    .size(typography::BODY)
                    .style(move |_: &Theme| text::Style {
                        color: Some(scheme.text_primary),
                    }),
            );
            if let Some(description) = description {
                column = column.push(
                    Text::new(description.clone())
                        .size(typography::BODY_SM)
                        .style(move |_: &Theme| text::Style {
                            color: Some(scheme.text_secondary),
                        }),
                );
            }
            column.width(Length::Fill).into()
        }
        Content::Custom(block) => custom(id, block),
    };

    // Layout: [glyph] [content]
    let mut header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Top);
    if let Some(glyph) = glyph(toast, &settings.kinds) {
        header = header.push(
            Container::new(
                Text::new(glyph)
                    .size(sizing::ICON_SM)
                    .style(move |_: &Theme| text::Style {
                        color: Some(accent),
                    }),
            )
            .width(Length::Fixed(sizing::ICON_MD))
            .align_x(alignment::Horizontal::Center),
        );
    }
    header = header.push(body);

    let mut card = Column::new().spacing(spacing::SM).push(header);

    if toast.has_actions(default_dismiss_button) {
        let mut actions = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(Space::new().width(Length::Fill));

        if let Some(action) = toast.action() {
            let label = action.label_text().unwrap_or(&labels.action).to_string();
            let alt = action
                .alt_text_value()
                .unwrap_or(&labels.action_alt)
                .to_string();
            let press = button(Text::new(label).size(typography::CAPTION))
                .on_press(Message::Action(id))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .padding([spacing::XXS, spacing::XS])
                .style(move |theme: &Theme, status| {
                    action_button_style(theme, status, scheme, accent)
                });
            actions = actions.push(tooltip(
                press,
                Container::new(Text::new(alt).size(typography::CAPTION))
                    .padding(spacing::XXS)
                    .style(move |_: &Theme| container::Style {
                        background: Some(iced::Background::Color(scheme.surface)),
                        text_color: Some(scheme.text_secondary),
                        border: iced::Border {
                            color: scheme.border,
                            width: border::WIDTH_SM,
                            radius: radius::SM.into(),
                        },
                        ..Default::default()
                    }),
                tooltip::Position::Top,
            ));
        }

        if toast.shows_dismiss_button(default_dismiss_button) {
            actions = actions.push(
                button(Text::new(labels.dismiss.clone()).size(typography::CAPTION))
                    .on_press(Message::Dismiss(id))
                    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                    .padding([spacing::XXS, spacing::XS])
                    .style(move |theme: &Theme, status| {
                        dismiss_button_style(theme, status, scheme)
                    }),
            );
        }
        card = card.push(actions);
    }

    let container = Container::new(card).width(Length::Fixed(sizing::TOAST_WIDTH));
    if toast.hints().unstyled {
        container.into()
    } else {
        container
            .padding(spacing::MD)
            .style(move |_: &Theme| card_style(scheme, accent))
            .into()
    }
}

/// Style function for the toast card.
fn card_style(scheme: ColorScheme, accent: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::SURFACE,
            ..scheme.surface
        })),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

fn action_button_style(
    _theme: &Theme,
    status: button::Status,
    scheme: ColorScheme,
    accent: Color,
) -> button::Style {
    let background = match status {
        button::Status::Hovered => Color {
            a: opacity::OVERLAY_STRONG,
            ..accent
        },
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent
        },
        button::Status::Active | button::Status::Pressed => accent,
    };
    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color: scheme.surface,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(
    _theme: &Theme,
    status: button::Status,
    scheme: ColorScheme,
) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(scheme.hover),
        button::Status::Active | button::Status::Disabled => None,
    };
    button::Style {
        background: background.map(iced::Background::Color),
        text_color: scheme.text_secondary,
        border: iced::Border {
            color: scheme.border,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
