// SPDX-License-Identifier: MPL-2.0
//! Toast entries and the drafts they are created from.
//!
//! A [`Draft`] is what callers build; the [`Store`](super::Store) turns it into
//! a [`Toast`] by assigning an id and a creation timestamp.

use super::kind::Kind;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Unique identifier for a toast, assigned by the store that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value, mostly useful for logging.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a toast displays.
///
/// `C` is an opaque payload for caller-rendered content. The core only
/// carries it around.
#[derive(Debug, Clone, PartialEq)]
pub enum Content<C = ()> {
    /// Plain title with an optional description line.
    Text {
        title: String,
        description: Option<String>,
    },
    /// Caller-supplied block, rendered by the caller.
    Custom(C),
}

impl<C> Content<C> {
    /// Creates a title-only text content.
    pub fn text(title: impl Into<String>) -> Self {
        Content::Text {
            title: title.into(),
            description: None,
        }
    }

    /// Creates a text content with a description line.
    pub fn with_description(title: impl Into<String>, description: impl Into<String>) -> Self {
        Content::Text {
            title: title.into(),
            description: Some(description.into()),
        }
    }

    /// Returns the custom payload, if any.
    pub fn custom(&self) -> Option<&C> {
        match self {
            Content::Custom(block) => Some(block),
            Content::Text { .. } => None,
        }
    }
}

impl<C> From<&str> for Content<C> {
    fn from(title: &str) -> Self {
        Content::text(title)
    }
}

impl<C> From<String> for Content<C> {
    fn from(title: String) -> Self {
        Content::text(title)
    }
}

/// When a toast goes away on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dismissal {
    /// Use the toaster's configured default duration.
    #[default]
    Default,
    /// Auto-dismiss after the given duration.
    After(Duration),
    /// Stay until dismissed explicitly.
    Persist,
}

impl Dismissal {
    /// Builds a dismissal from a duration; zero means persist.
    #[must_use]
    pub fn after(duration: Duration) -> Self {
        if duration.is_zero() {
            Dismissal::Persist
        } else {
            Dismissal::After(duration)
        }
    }

    /// Resolves against the configured default. `None` means no auto-dismiss.
    #[must_use]
    pub fn resolve(self, default: Option<Duration>) -> Option<Duration> {
        match self {
            Dismissal::Default => default.filter(|d| !d.is_zero()),
            Dismissal::After(d) if d.is_zero() => None,
            Dismissal::After(d) => Some(d),
            Dismissal::Persist => None,
        }
    }
}

/// Callback run when the toast's action button is pressed.
pub type ActionHandler = Rc<dyn Fn(ToastId)>;

/// Optional action button attached to a toast.
#[derive(Clone)]
pub struct Action {
    label: Option<String>,
    alt_text: Option<String>,
    on_press: ActionHandler,
}

impl Action {
    /// Creates an action using the toaster's default label.
    pub fn new(on_press: impl Fn(ToastId) + 'static) -> Self {
        Self {
            label: None,
            alt_text: None,
            on_press: Rc::new(on_press),
        }
    }

    /// Overrides the button label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the alternative text describing a keyboard route to the action.
    #[must_use]
    pub fn alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    #[must_use]
    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn alt_text_value(&self) -> Option<&str> {
        self.alt_text.as_deref()
    }

    /// Runs the callback.
    pub fn invoke(&self, id: ToastId) {
        (self.on_press)(id);
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .field("alt_text", &self.alt_text)
            .finish_non_exhaustive()
    }
}

/// Presentation hints passed through to the rendering layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hints {
    /// Per-toast dismiss button override; `None` uses the toaster default.
    pub dismiss_button: Option<bool>,
    /// Render without the standard card chrome.
    pub unstyled: bool,
    /// Glyph shown instead of the kind's default one.
    pub media: Option<String>,
}

/// A toast about to be created.
#[derive(Debug, Clone)]
pub struct Draft<C = ()> {
    kind: Kind,
    content: Content<C>,
    dismissal: Dismissal,
    hints: Hints,
    action: Option<Action>,
}

impl<C> Draft<C> {
    /// Creates a draft of the given kind.
    pub fn new(kind: Kind, content: impl Into<Content<C>>) -> Self {
        Self {
            kind,
            content: content.into(),
            dismissal: Dismissal::Default,
            hints: Hints::default(),
            action: None,
        }
    }

    pub fn message(content: impl Into<Content<C>>) -> Self {
        Self::new(Kind::Default, content)
    }

    pub fn success(content: impl Into<Content<C>>) -> Self {
        Self::new(Kind::Success, content)
    }

    pub fn error(content: impl Into<Content<C>>) -> Self {
        Self::new(Kind::Error, content)
    }

    pub fn warning(content: impl Into<Content<C>>) -> Self {
        Self::new(Kind::Warning, content)
    }

    pub fn info(content: impl Into<Content<C>>) -> Self {
        Self::new(Kind::Info, content)
    }

    /// Creates a caller-rendered toast without the standard chrome.
    pub fn custom(block: C) -> Self {
        Self::new(Kind::Custom, Content::Custom(block))
    }

    /// Auto-dismisses after `duration`; zero keeps the toast until dismissed.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.dismissal = Dismissal::after(duration);
        self
    }

    /// Keeps the toast until it is dismissed explicitly.
    #[must_use]
    pub fn persist(mut self) -> Self {
        self.dismissal = Dismissal::Persist;
        self
    }

    #[must_use]
    pub fn dismiss_button(mut self, show: bool) -> Self {
        self.hints.dismiss_button = Some(show);
        self
    }

    #[must_use]
    pub fn unstyled(mut self) -> Self {
        self.hints.unstyled = true;
        self
    }

    #[must_use]
    pub fn media(mut self, glyph: impl Into<String>) -> Self {
        self.hints.media = Some(glyph.into());
        self
    }

    #[must_use]
    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub(crate) fn into_toast(self, id: ToastId, created_at: Instant) -> Toast<C> {
        Toast {
            id,
            kind: self.kind,
            content: self.content,
            dismissal: self.dismissal,
            hints: self.hints,
            action: self.action,
            created_at,
        }
    }
}

/// A live toast tracked by a store.
#[derive(Debug, Clone)]
pub struct Toast<C = ()> {
    id: ToastId,
    kind: Kind,
    content: Content<C>,
    dismissal: Dismissal,
    hints: Hints,
    action: Option<Action>,
    created_at: Instant,
}

impl<C> Toast<C> {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn content(&self) -> &Content<C> {
        &self.content
    }

    #[must_use]
    pub fn dismissal(&self) -> Dismissal {
        self.dismissal
    }

    pub fn hints(&self) -> &Hints {
        &self.hints
    }

    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    /// When the store created this toast.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Whether the dismiss button is shown, given the toaster default.
    #[must_use]
    pub fn shows_dismiss_button(&self, default: bool) -> bool {
        self.hints.dismiss_button.unwrap_or(default)
    }

    /// Whether the toast has an actions row (action or dismiss button).
    ///
    /// Only affects spacing inside the card, never its position.
    #[must_use]
    pub fn has_actions(&self, default_dismiss_button: bool) -> bool {
        self.action.is_some() || self.shows_dismiss_button(default_dismiss_button)
    }

    /// Instant at which auto-dismiss kicks in, if it applies.
    ///
    /// A duration too long to be represented as an instant never expires.
    #[must_use]
    pub fn auto_dismiss_at(&self, default: Option<Duration>) -> Option<Instant> {
        self.dismissal
            .resolve(default)
            .and_then(|duration| self.created_at.checked_add(duration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn toast<C>(draft: Draft<C>) -> Toast<C> {
        draft.into_toast(ToastId::from_raw(7), Instant::now())
    }

    #[test]
    fn zero_duration_means_persist() {
        assert_eq!(Dismissal::after(Duration::ZERO), Dismissal::Persist);
        let t: Toast = toast(Draft::info("hi").duration(Duration::ZERO));
        assert_eq!(t.dismissal(), Dismissal::Persist);
    }

    #[test]
    fn default_dismissal_falls_back_to_configured_duration() {
        let default = Some(Duration::from_secs(5));
        assert_eq!(Dismissal::Default.resolve(default), default);
        assert_eq!(Dismissal::Default.resolve(Some(Duration::ZERO)), None);
        assert_eq!(Dismissal::Default.resolve(None), None);
    }

    #[test]
    fn explicit_dismissal_overrides_default() {
        let default = Some(Duration::from_secs(5));
        assert_eq!(
            Dismissal::After(Duration::from_secs(1)).resolve(default),
            Some(Duration::from_secs(1))
        );
        assert_eq!(Dismissal::Persist.resolve(default), None);
    }

    #[test]
    fn auto_dismiss_deadline_is_relative_to_creation() {
        let t: Toast = toast(Draft::success("saved").duration(Duration::from_millis(300)));
        assert_eq!(
            t.auto_dismiss_at(None),
            Some(t.created_at() + Duration::from_millis(300))
        );
        let persistent: Toast = toast(Draft::error("failed").persist());
        assert_eq!(persistent.auto_dismiss_at(Some(Duration::from_secs(5))), None);
    }

    #[test]
    fn unrepresentable_deadline_never_expires() {
        let t: Toast = toast(Draft::info("long").duration(Duration::MAX));
        assert_eq!(t.dismissal(), Dismissal::After(Duration::MAX));
        assert_eq!(t.auto_dismiss_at(None), None);
    }

    #[test]
    fn kind_constructors_set_kind() {
        assert_eq!(Draft::<()>::message("").kind(), Kind::Default);
        assert_eq!(Draft::<()>::success("").kind(), Kind::Success);
        assert_eq!(Draft::<()>::error("").kind(), Kind::Error);
        assert_eq!(Draft::<()>::warning("").kind(), Kind::Warning);
        assert_eq!(Draft::<()>::info("").kind(), Kind::Info);
        assert_eq!(Draft::custom(42_u8).kind(), Kind::Custom);
    }

    #[test]
    fn has_actions_considers_action_and_dismiss_button() {
        let plain: Toast = toast(Draft::message("plain"));
        assert!(!plain.has_actions(false));
        assert!(plain.has_actions(true));

        let no_button: Toast = toast(Draft::message("x").dismiss_button(false));
        assert!(!no_button.has_actions(true));

        let with_action: Toast = toast(Draft::message("x").action(Action::new(|_| {})));
        assert!(with_action.has_actions(false));
    }

    #[test]
    fn action_invokes_callback_with_id() {
        let seen = Rc::new(Cell::new(None));
        let sink = Rc::clone(&seen);
        let t: Toast = toast(
            Draft::message("undo?").action(Action::new(move |id| sink.set(Some(id))).label("Undo")),
        );

        let action = t.action().expect("action attached");
        assert_eq!(action.label_text(), Some("Undo"));
        action.invoke(t.id());
        assert_eq!(seen.get(), Some(t.id()));
    }

    #[test]
    fn custom_content_is_carried_untouched() {
        let t = toast(Draft::custom(vec![1, 2, 3]));
        assert_eq!(t.content().custom(), Some(&vec![1, 2, 3]));
    }
}
