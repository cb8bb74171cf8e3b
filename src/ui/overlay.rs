// SPDX-License-Identifier: MPL-2.0
//! Stacked overlay rendering every visible toast of a [`Toaster`].
//!
//! Each toast is laid out in its own full-size layer, pinned to the
//! configured corner and pushed away from the edge by its stack offset.
//! Layers are pushed oldest first so the newest toast is drawn on top.
//!
//! Every card sits in a [`sensor`] that reports its laid-out height as
//! [`Message::Measured`] once it is shown; hosts forward it to
//! [`Toaster::report_height`].

use super::theming::ToastTheme;
use super::toast::{self, Labels};
use crate::toast::{Alignment, Edge, Placement, ToastId, Toaster};
use iced::widget::{sensor, Container, Stack};
use iced::{alignment, Element, Length, Padding, Size};

/// Interactions coming out of the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Dismiss(ToastId),
    Action(ToastId),
    /// Laid-out height of a card, in logical pixels.
    Measured(ToastId, f32),
}

/// Turns the size a card was laid out at into its height report.
pub fn measured(id: ToastId) -> impl Fn(Size) -> Message {
    move |size| Message::Measured(id, size.height)
}

fn horizontal(align: Alignment) -> alignment::Horizontal {
    match align {
        Alignment::Start => alignment::Horizontal::Left,
        Alignment::Center => alignment::Horizontal::Center,
        Alignment::End => alignment::Horizontal::Right,
    }
}

fn vertical(edge: Edge) -> alignment::Vertical {
    match edge {
        Edge::Top => alignment::Vertical::Top,
        Edge::Bottom => alignment::Vertical::Bottom,
    }
}

/// Padding that moves a card to its placement inside a full-size layer.
#[must_use]
pub fn layer_padding(placement: &Placement, edge_offset: f32) -> Padding {
    let stacked = edge_offset + placement.offset.max(0.0);
    let (top, bottom) = match placement.edge {
        Edge::Top => (stacked, 0.0),
        Edge::Bottom => (0.0, stacked),
    };
    Padding {
        top,
        right: edge_offset,
        bottom,
        left: edge_offset,
    }
}

/// Renders the toasts of `toaster`.
///
/// Closing toasts and toasts hidden by single mode are skipped. `custom`
/// renders caller-defined payloads and receives the id of their toast, so a
/// block can emit [`Message::Dismiss`] or [`Message::Action`] for itself.
pub fn view<'a, C: 'static>(
    toaster: &Toaster<C>,
    theme: &ToastTheme,
    labels: &Labels,
    custom: impl Fn(ToastId, &C) -> Element<'a, Message>,
) -> Element<'a, Message> {
    let settings = toaster.settings();
    let layers = toaster
        .entries()
        .into_iter()
        .filter(|(_, placement)| placement.visible && !placement.closing)
        .map(|(entry, placement)| -> Element<'a, Message> {
            let id = entry.id();
            let card = toast::view(&entry, theme.toast, labels, settings, &custom);
            Container::new(sensor(card).key(id).on_show(measured(id)))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(horizontal(placement.alignment))
                .align_y(vertical(placement.edge))
                .padding(layer_padding(&placement, settings.offset))
                .into()
        });

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
