// SPDX-License-Identifier: MPL-2.0
//! Playground controls.
//!
//! The toast overlay is layered on top of these by `App::view`.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::toast::{Kind, Mode, Position, Settings};
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Context required to render the controls.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub settings: &'a Settings,
    pub live: usize,
}

fn choice<'a>(label: String, selected: bool, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XXS, spacing::SM])
        .style(if selected {
            button::primary
        } else {
            button::secondary
        })
        .into()
}

fn section<'a>(title: String, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(content)
        .into()
}

/// Renders the playground controls.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let kinds = Row::with_children(Kind::ALL.into_iter().map(|kind| {
        choice(
            i18n.tr(&format!("playground-kind-{}", kind.as_str())),
            false,
            Message::Show(kind),
        )
    }))
    .spacing(spacing::XS);

    let positions = Row::with_children(Position::ALL.into_iter().map(|position| {
        choice(
            position.as_str().to_string(),
            ctx.settings.position == position,
            Message::SetPosition(position),
        )
    }))
    .spacing(spacing::XS);

    let options = Row::new()
        .spacing(spacing::XS)
        .push(choice(
            i18n.tr("playground-with-action"),
            false,
            Message::ShowWithAction,
        ))
        .push(choice(
            i18n.tr("playground-persistent"),
            false,
            Message::ShowPersistent,
        ))
        .push(choice(
            i18n.tr("playground-mode-multi"),
            ctx.settings.mode == Mode::Multi,
            Message::SetMode(Mode::Multi),
        ))
        .push(choice(
            i18n.tr("playground-mode-single"),
            ctx.settings.mode == Mode::Single,
            Message::SetMode(Mode::Single),
        ))
        .push(choice(
            i18n.tr("playground-dismiss-button"),
            ctx.settings.dismiss_button,
            Message::ToggleDismissButton,
        ))
        .push(choice(i18n.tr("playground-clear"), false, Message::Clear));

    let live = ctx.live.to_string();
    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(Text::new(i18n.tr("playground-title")).size(typography::TITLE_MD))
        .push(section(i18n.tr("playground-section-kinds"), kinds))
        .push(section(i18n.tr("playground-section-position"), positions))
        .push(section(i18n.tr("playground-section-options"), options))
        .push(
            Text::new(i18n.tr_with_args("playground-live-count", &[("count", live.as_str())]))
                .size(typography::BODY_SM),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}
