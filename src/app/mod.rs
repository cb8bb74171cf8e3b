// SPDX-License-Identifier: MPL-2.0
//! Playground application mounting a toaster.
//!
//! The `App` struct wires the toaster, localization and persisted settings
//! together. Every button fires a toast or changes a toaster setting; setting
//! changes are written back to the config file.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::toast::{Action, Content, Draft, Kind, Settings, ToastId, Toaster};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::overlay;
use crate::ui::theming::ToastTheme;
use crate::ui::toast::Labels;
use iced::widget::{button, Container, Row, Stack, Text};
use iced::{alignment, window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    config: Config,
    /// Where setting changes are saved; `None` uses the default location.
    config_path: Option<PathBuf>,
    theme: ToastTheme,
    labels: Labels,
    /// Custom toasts carry the number of the block they show.
    toaster: Toaster<u32>,
    custom_blocks: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .field("toaster", &self.toaster)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn load_config(path: Option<&PathBuf>) -> Config {
    let loaded = match path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    loaded.unwrap_or_else(|err| {
        log::warn!("using default settings: {err}");
        Config::default()
    })
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        (Self::from_flags(flags), Task::none())
    }

    /// Builds the state without starting the runtime.
    pub fn from_flags(flags: Flags) -> Self {
        let config = load_config(flags.config_path.as_ref());
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut settings = config.toaster.clone();
        if let Some(position) = flags.position {
            settings.position = position;
        }
        if let Some(mode) = flags.mode {
            settings.mode = mode;
        }

        log::info!(
            "toaster mounted at {} in {:?} mode",
            settings.position,
            settings.mode
        );

        App {
            labels: Labels::from_i18n(&i18n),
            theme: ToastTheme::new(config.theme, config.appearance),
            toaster: Toaster::with_settings(settings),
            i18n,
            config,
            config_path: flags.config_path,
            custom_blocks: 0,
        }
    }

    /// The mounted toaster.
    pub fn toaster(&self) -> &Toaster<u32> {
        &self.toaster
    }

    fn title(&self) -> String {
        self.i18n.tr("playground-title")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.toaster.has_toasts())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show(kind) => {
                self.show(kind);
            }
            Message::ShowWithAction => {
                let weak = self.toaster.store().downgrade();
                let undone = self.i18n.tr("playground-action-undone");
                let action = Action::new(move |_| {
                    if let Some(store) = weak.upgrade() {
                        store.success(undone.as_str());
                    }
                })
                .label(self.i18n.tr("playground-action-undo"));
                self.toaster.store().create(
                    Draft::message(self.i18n.tr("playground-message-action")).action(action),
                );
            }
            Message::ShowPersistent => {
                self.toaster.store().create(
                    Draft::warning(self.i18n.tr("playground-message-persistent"))
                        .persist()
                        .dismiss_button(true),
                );
            }
            Message::SetPosition(position) => {
                self.reconfigure(Settings {
                    position,
                    ..self.toaster.settings().clone()
                });
            }
            Message::SetMode(mode) => {
                self.reconfigure(Settings {
                    mode,
                    ..self.toaster.settings().clone()
                });
            }
            Message::ToggleDismissButton => {
                let settings = self.toaster.settings().clone();
                self.reconfigure(Settings {
                    dismiss_button: !settings.dismiss_button,
                    ..settings
                });
            }
            Message::Clear => self.toaster.store().clear(),
            Message::Toast(overlay::Message::Dismiss(id)) => {
                self.toaster.dismiss(id, Instant::now());
            }
            Message::Toast(overlay::Message::Action(id)) => {
                if self.toaster.trigger_action(id) {
                    self.toaster.dismiss(id, Instant::now());
                }
            }
            Message::Toast(overlay::Message::Measured(id, height)) => {
                self.toaster.report_height(id, height);
            }
            Message::Tick(now) => {
                self.toaster.tick(now);
            }
        }
        Task::none()
    }

    fn show(&mut self, kind: Kind) {
        let store = self.toaster.store();
        if kind == Kind::Custom {
            self.custom_blocks += 1;
            store.create(Draft::custom(self.custom_blocks));
            return;
        }
        let title = self.i18n.tr(&format!("playground-message-{}", kind.as_str()));
        let content = Content::with_description(title, self.i18n.tr("playground-description"));
        store.create(Draft::new(kind, content));
    }

    /// Applies new toaster settings and saves them.
    fn reconfigure(&mut self, settings: Settings) {
        self.toaster.configure(settings);
        self.config.toaster = self.toaster.settings().clone();

        let saved = match &self.config_path {
            Some(path) => config::save_to_path(&self.config, path),
            None => config::save(&self.config),
        };
        if let Err(err) = saved {
            log::warn!("failed to save settings: {err}");
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = view::view(view::ViewContext {
            i18n: &self.i18n,
            settings: self.toaster.settings(),
            live: self.toaster.store().len(),
        });

        let toasts = overlay::view(&self.toaster, &self.theme, &self.labels, |id, block| {
            custom_block(&self.i18n, &self.labels, id, *block)
        })
        .map(Message::Toast);

        Stack::new()
            .push(controls)
            .push(toasts)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Body of a playground custom toast: its number and a button closing it.
fn custom_block<'a>(
    i18n: &I18n,
    labels: &Labels,
    id: ToastId,
    number: u32,
) -> Element<'a, overlay::Message> {
    let number = number.to_string();
    let title = i18n.tr_with_args("playground-custom-block", &[("number", number.as_str())]);
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill)
        .push(Text::new(title).size(typography::BODY).width(Length::Fill))
        .push(
            button(Text::new(labels.dismiss.clone()).size(typography::CAPTION))
                .on_press(overlay::Message::Dismiss(id))
                .padding([spacing::XXS, spacing::XS]),
        );
    Container::new(row).padding(spacing::XS).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{Mode, Position};
    use std::time::Duration;
    use tempfile::tempdir;

    fn app_with_config(dir: &tempfile::TempDir) -> App {
        App::from_flags(Flags {
            lang: Some("en-US".to_string()),
            config_path: Some(dir.path().join("settings.toml")),
            ..Flags::default()
        })
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let dir = tempdir().expect("temp dir");
        let app = app_with_config(&dir);
        assert_eq!(app.config, Config::default());
        assert!(!app.toaster().has_toasts());
    }

    #[test]
    fn flags_override_toaster_settings() {
        let dir = tempdir().expect("temp dir");
        let app = App::from_flags(Flags {
            lang: Some("en-US".to_string()),
            config_path: Some(dir.path().join("settings.toml")),
            position: Some(Position::TopLeft),
            mode: Some(Mode::Single),
        });
        assert_eq!(app.toaster().settings().position, Position::TopLeft);
        assert_eq!(app.toaster().settings().mode, Mode::Single);
    }

    #[test]
    fn show_creates_a_toast_of_each_kind() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with_config(&dir);
        let _ = app.update(Message::Show(Kind::Success));
        let _ = app.update(Message::Show(Kind::Custom));

        let toasts = app.toaster().store().toasts();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].kind(), Kind::Success);
        assert_eq!(toasts[1].content().custom(), Some(&1));
    }

    #[test]
    fn measured_heights_push_older_toasts_away() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with_config(&dir);
        let _ = app.update(Message::Show(Kind::Info));
        let _ = app.update(Message::Show(Kind::Custom));
        let toasts = app.toaster().store().toasts();
        let (older, newer) = (toasts[0].id(), toasts[1].id());
        let gap = app.toaster().settings().gap;

        let _ = app.update(Message::Toast(overlay::Message::Measured(newer, 48.0)));
        let _ = app.update(Message::Toast(overlay::Message::Measured(older, 72.0)));
        // A later report for the same card is ignored
        let _ = app.update(Message::Toast(overlay::Message::Measured(newer, 500.0)));

        let placements = app.toaster().placements();
        assert_eq!(placements[0].offset, 48.0 + gap);
        assert_eq!(placements[1].offset, 0.0);
    }

    #[test]
    fn custom_block_dismiss_closes_only_its_toast() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with_config(&dir);
        let _ = app.update(Message::Show(Kind::Custom));
        let _ = app.update(Message::Show(Kind::Custom));
        let toasts = app.toaster().store().toasts();
        let (first, second) = (toasts[0].id(), toasts[1].id());

        let _ = custom_block(&app.i18n, &app.labels, first, 1);
        let _ = app.update(Message::Toast(overlay::Message::Dismiss(first)));

        assert!(app.toaster().is_closing(first));
        assert!(!app.toaster().is_closing(second));
    }

    #[test]
    fn action_runs_and_closes_the_toast() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with_config(&dir);
        let _ = app.update(Message::ShowWithAction);
        let id = app.toaster().store().toasts()[0].id();

        let _ = app.update(Message::Toast(overlay::Message::Action(id)));
        assert!(app.toaster().is_closing(id));
        // The action itself fired a follow-up toast
        assert_eq!(app.toaster().store().len(), 2);
    }

    #[test]
    fn dismiss_then_tick_removes_the_toast() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with_config(&dir);
        let _ = app.update(Message::ShowPersistent);
        let id = app.toaster().store().toasts()[0].id();

        let _ = app.update(Message::Toast(overlay::Message::Dismiss(id)));
        assert!(app.toaster().is_closing(id));
        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(2)));
        assert!(!app.toaster().has_toasts());
    }

    #[test]
    fn setting_changes_are_persisted() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with_config(&dir);
        let _ = app.update(Message::SetPosition(Position::TopRight));
        let _ = app.update(Message::ToggleDismissButton);

        let saved = config::load_from_path(&dir.path().join("settings.toml")).expect("saved");
        assert_eq!(saved.toaster.position, Position::TopRight);
        assert!(saved.toaster.dismiss_button);
    }

    #[test]
    fn switching_to_single_mode_keeps_the_newest() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with_config(&dir);
        let _ = app.update(Message::Show(Kind::Info));
        let _ = app.update(Message::Show(Kind::Error));
        let _ = app.update(Message::SetMode(Mode::Single));

        let toasts = app.toaster().store().toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind(), Kind::Error);
    }

    #[test]
    fn clear_removes_everything() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with_config(&dir);
        let _ = app.update(Message::Show(Kind::Warning));
        let _ = app.update(Message::Clear);
        assert!(!app.toaster().has_toasts());
    }
}
