// SPDX-License-Identifier: MPL-2.0
//! A mounted toaster: a store, a presenter subscribed to it, and the timers
//! that close toasts.
//!
//! Timers are plain deadlines. The host calls [`Toaster::tick`] from its event
//! loop; nothing runs in the background.

use super::entry::{Toast, ToastId};
use super::layout::Placement;
use super::presenter::Presenter;
use super::settings::Settings;
use super::store::{Store, Subscription, WeakStore};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

pub struct Toaster<C = ()> {
    store: Store<C>,
    presenter: Rc<RefCell<Presenter>>,
    settings: Settings,
    _subscription: Subscription,
}

impl<C> std::fmt::Debug for Toaster<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toaster")
            .field("store", &self.store)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

/// Removes ids from the store, if it is still alive.
fn remove_all<C>(store: &WeakStore<C>, ids: Vec<ToastId>) {
    if ids.is_empty() {
        return;
    }
    if let Some(store) = store.upgrade() {
        for id in ids {
            store.remove(id);
        }
    }
}

impl<C: 'static> Toaster<C> {
    /// Mounts a toaster on `store`.
    ///
    /// Toasts already in the store are picked up immediately; in single mode
    /// all but the newest are removed right away.
    pub fn new(store: Store<C>, settings: Settings) -> Self {
        let settings = settings.sanitized();
        let presenter = Rc::new(RefCell::new(Presenter::new(&settings)));

        let subscription = {
            let presenter = Rc::clone(&presenter);
            let weak = store.downgrade();
            store.subscribe(move |toasts| {
                // The borrow ends with this statement; removal notifies again.
                let superseded = presenter.borrow_mut().sync(toasts);
                remove_all(&weak, superseded);
            })
        };

        let superseded = presenter.borrow_mut().sync(&store.toasts());
        remove_all(&store.downgrade(), superseded);

        Self {
            store,
            presenter,
            settings,
            _subscription: subscription,
        }
    }

    /// Mounts a toaster on a fresh store.
    pub fn with_settings(settings: Settings) -> Self {
        Self::new(Store::new(), settings)
    }

    /// The store this toaster renders.
    pub fn store(&self) -> &Store<C> {
        &self.store
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replaces the settings. Switching to single mode drops all but the
    /// newest toast.
    pub fn configure(&mut self, settings: Settings) {
        self.settings = settings.sanitized();
        let superseded = self.presenter.borrow_mut().configure(&self.settings);
        remove_all(&self.store.downgrade(), superseded);
    }

    /// Records the rendered height of a toast.
    pub fn report_height(&self, id: ToastId, height: f32) -> bool {
        self.presenter.borrow_mut().report_height(id, height)
    }

    /// Placement of every live toast, oldest first.
    #[must_use]
    pub fn placements(&self) -> Vec<Placement> {
        self.presenter.borrow().placements()
    }

    #[must_use]
    pub fn placement(&self, id: ToastId) -> Option<Placement> {
        self.presenter.borrow().placement(id)
    }

    /// Live toasts paired with their placement, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<(Rc<Toast<C>>, Placement)> {
        let placements = self.placements();
        self.store
            .toasts()
            .into_iter()
            .zip(placements)
            .filter(|(toast, placement)| toast.id() == placement.id)
            .collect()
    }

    /// Starts the exit of a toast; it is removed once the grace period ends.
    pub fn dismiss(&self, id: ToastId, now: Instant) -> bool {
        self.presenter.borrow_mut().begin_close(id, now)
    }

    #[must_use]
    pub fn is_closing(&self, id: ToastId) -> bool {
        self.presenter.borrow().is_closing(id)
    }

    /// Removes a toast immediately, skipping the grace period.
    pub fn remove(&self, id: ToastId) -> bool {
        self.store.remove(id)
    }

    /// Runs the action attached to a toast, if any.
    pub fn trigger_action(&self, id: ToastId) -> bool {
        match self.store.get(id) {
            Some(toast) => match toast.action() {
                Some(action) => {
                    log::debug!("toast {id} action pressed");
                    action.invoke(id);
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    /// Advances the timers to `now`.
    ///
    /// Toasts past their auto-dismiss deadline start closing; closing toasts
    /// past their grace period are removed. Returns whether anything changed.
    pub fn tick(&self, now: Instant) -> bool {
        let default = self.settings.default_duration();
        let due: Vec<ToastId> = self
            .store
            .toasts()
            .iter()
            .filter(|toast| toast.auto_dismiss_at(default).is_some_and(|at| at <= now))
            .map(|toast| toast.id())
            .collect();

        let mut changed = false;
        {
            let mut presenter = self.presenter.borrow_mut();
            for id in due {
                changed |= presenter.begin_close(id, now);
            }
        }

        let expired = self.presenter.borrow().expired(now);
        for id in expired {
            changed |= self.store.remove(id);
        }
        changed
    }

    /// Whether anything is live, i.e. whether timers need ticking.
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.store.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::entry::{Action, Draft};
    use crate::toast::layout::Mode;
    use std::cell::Cell;
    use std::time::Duration;

    fn settings(mode: Mode) -> Settings {
        Settings {
            mode,
            ..Settings::default()
        }
    }

    #[test]
    fn single_mode_keeps_only_the_newest() {
        let toaster: Toaster = Toaster::with_settings(settings(Mode::Single));
        let store = toaster.store();

        store.toast("a");
        store.toast("b");
        let c = store.success("c");

        let live: Vec<_> = store.toasts().iter().map(|t| t.id()).collect();
        assert_eq!(live, vec![c]);
        assert_eq!(toaster.placements().len(), 1);
    }

    #[test]
    fn mounting_in_single_mode_trims_existing_toasts() {
        let store: Store = Store::new();
        store.toast("a");
        let b = store.toast("b");

        let toaster = Toaster::new(store.clone(), settings(Mode::Single));
        assert_eq!(store.len(), 1);
        assert!(store.contains(b));
        assert_eq!(toaster.placements()[0].id, b);
    }

    #[test]
    fn mounting_picks_up_existing_toasts() {
        let store: Store = Store::new();
        let a = store.toast("a");
        let toaster = Toaster::new(store, settings(Mode::Multi));
        assert!(toaster.report_height(a, 40.0));
    }

    #[test]
    fn dismiss_removes_after_grace_period() {
        let toaster: Toaster = Toaster::with_settings(settings(Mode::Multi));
        let id = toaster.store().toast("bye");
        let now = Instant::now();

        assert!(toaster.dismiss(id, now));
        assert!(toaster.is_closing(id));
        assert!(!toaster.tick(now + Duration::from_millis(500)));
        assert!(toaster.store().contains(id));

        assert!(toaster.tick(now + Duration::from_secs(1)));
        assert!(!toaster.store().contains(id));
    }

    #[test]
    fn manual_remove_during_grace_is_idempotent() {
        let toaster: Toaster = Toaster::with_settings(settings(Mode::Multi));
        let id = toaster.store().toast("x");
        let now = Instant::now();
        toaster.dismiss(id, now);

        assert!(toaster.remove(id));
        assert!(!toaster.tick(now + Duration::from_secs(2)));
        assert!(toaster.store().is_empty());
    }

    #[test]
    fn auto_dismiss_starts_grace_at_deadline() {
        let toaster: Toaster = Toaster::with_settings(settings(Mode::Multi));
        let id = toaster
            .store()
            .create(Draft::info("soon").duration(Duration::from_millis(200)));
        let created = toaster.store().get(id).expect("live").created_at();

        toaster.tick(created + Duration::from_millis(199));
        assert!(!toaster.is_closing(id));

        toaster.tick(created + Duration::from_millis(200));
        assert!(toaster.is_closing(id));
        assert_eq!(toaster.placement(id).map(|p| p.offset), Some(-15.0));

        toaster.tick(created + Duration::from_millis(1200));
        assert!(!toaster.store().contains(id));
    }

    #[test]
    fn persistent_toasts_never_auto_dismiss() {
        let toaster: Toaster = Toaster::with_settings(settings(Mode::Multi));
        let id = toaster.store().create(Draft::error("stuck").persist());
        let created = toaster.store().get(id).expect("live").created_at();

        toaster.tick(created + Duration::from_secs(3600));
        assert!(!toaster.is_closing(id));
        assert!(toaster.store().contains(id));
    }

    #[test]
    fn unrepresentable_duration_does_not_break_ticking() {
        let toaster: Toaster = Toaster::with_settings(settings(Mode::Multi));
        let long = toaster
            .store()
            .create(Draft::info("long").duration(Duration::MAX));
        let short = toaster
            .store()
            .create(Draft::info("short").duration(Duration::from_millis(10)));
        let created = toaster.store().get(short).expect("live").created_at();

        assert!(toaster.tick(created + Duration::from_millis(10)));
        assert!(!toaster.is_closing(long));
        assert!(toaster.is_closing(short));
        toaster.tick(created + Duration::from_secs(3600));
        assert_eq!(toaster.store().toasts().len(), 1);
        assert!(toaster.store().contains(long));
    }

    #[test]
    fn zero_default_duration_disables_auto_dismiss() {
        let toaster: Toaster = Toaster::with_settings(Settings {
            default_duration_ms: 0,
            ..Settings::default()
        });
        let id = toaster.store().toast("stays");
        let created = toaster.store().get(id).expect("live").created_at();

        toaster.tick(created + Duration::from_secs(60));
        assert!(toaster.store().contains(id));
    }

    #[test]
    fn configure_to_single_drops_older_toasts() {
        let mut toaster: Toaster = Toaster::with_settings(settings(Mode::Multi));
        toaster.store().toast("a");
        let b = toaster.store().toast("b");

        toaster.configure(settings(Mode::Single));
        assert_eq!(toaster.store().len(), 1);
        assert!(toaster.store().contains(b));
    }

    #[test]
    fn trigger_action_runs_callback() {
        let toaster: Toaster = Toaster::with_settings(settings(Mode::Multi));
        let pressed = Rc::new(Cell::new(false));
        let sink = Rc::clone(&pressed);
        let id = toaster
            .store()
            .create(Draft::message("undo").action(Action::new(move |_| sink.set(true))));
        let plain = toaster.store().toast("plain");

        assert!(toaster.trigger_action(id));
        assert!(pressed.get());
        assert!(!toaster.trigger_action(plain));
    }

    #[test]
    fn entries_pair_toasts_with_placements() {
        let toaster: Toaster = Toaster::with_settings(settings(Mode::Multi));
        let a = toaster.store().toast("a");
        let b = toaster.store().toast("b");
        toaster.report_height(b, 48.0);

        let entries = toaster.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0.id(), a);
        assert_eq!(entries[0].1.offset, 63.0);
        assert_eq!(entries[1].1.offset, 0.0);
    }

    #[test]
    fn dropping_toaster_unsubscribes() {
        let store: Store = Store::new();
        let toaster = Toaster::new(store.clone(), settings(Mode::Multi));
        assert_eq!(store.listener_count(), 1);
        drop(toaster);
        assert_eq!(store.listener_count(), 0);
    }
}
