// SPDX-License-Identifier: MPL-2.0
//! Stacking and visibility of live toasts.
//!
//! The presenter mirrors the store's order, keeps the heights reported by the
//! rendering layer and turns both into one [`Placement`] per toast. It never
//! measures anything itself.
//!
//! Heights are write-once: the first usable report for an id is kept until the
//! toast leaves the store, even if the toast's content is later rendered
//! differently. A toast in its closing grace period stops reserving space, so
//! older toasts slide into its slot while the renderer plays the exit.

use super::entry::{Toast, ToastId};
use super::layout::{stack_offsets, Mode, Placement, Position};
use super::settings::Settings;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Presenter {
    position: Position,
    gap: f32,
    mode: Mode,
    grace: Duration,
    /// Live ids, oldest first.
    order: Vec<ToastId>,
    heights: HashMap<ToastId, f32>,
    /// Removal deadlines of toasts in their grace period.
    closing: HashMap<ToastId, Instant>,
}

impl Presenter {
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        let settings = settings.clone().sanitized();
        Self {
            position: settings.position,
            gap: settings.gap,
            mode: settings.mode,
            grace: settings.close_grace(),
            order: Vec::new(),
            heights: HashMap::new(),
            closing: HashMap::new(),
        }
    }

    /// Applies new geometry. Returns the ids a switch to single mode supersedes.
    pub fn configure(&mut self, settings: &Settings) -> Vec<ToastId> {
        let settings = settings.clone().sanitized();
        self.position = settings.position;
        self.gap = settings.gap;
        self.mode = settings.mode;
        self.grace = settings.close_grace();
        self.superseded()
    }

    /// Mirrors the store's live set and forgets state of removed toasts.
    ///
    /// Returns the toasts single mode wants gone; the caller removes them from
    /// the store.
    pub fn sync<C>(&mut self, toasts: &[Rc<Toast<C>>]) -> Vec<ToastId> {
        self.order = toasts.iter().map(|toast| toast.id()).collect();

        let live: HashSet<ToastId> = self.order.iter().copied().collect();
        self.heights.retain(|id, _| live.contains(id));
        self.closing.retain(|id, _| live.contains(id));

        self.superseded()
    }

    fn superseded(&self) -> Vec<ToastId> {
        match (self.mode, self.order.split_last()) {
            (Mode::Single, Some((_, older))) => older.to_vec(),
            _ => Vec::new(),
        }
    }

    /// Records the rendered height of a toast.
    ///
    /// Returns `false` when the report is ignored: unknown id, unusable value,
    /// or a height already on record.
    pub fn report_height(&mut self, id: ToastId, height: f32) -> bool {
        if !self.order.contains(&id) || !height.is_finite() || height < 0.0 {
            return false;
        }
        match self.heights.get(&id) {
            Some(known) if *known > 0.0 => false,
            _ => {
                log::trace!("toast {id} measured at {height}px");
                self.heights.insert(id, height);
                true
            }
        }
    }

    /// Reported height, if any.
    #[must_use]
    pub fn height(&self, id: ToastId) -> Option<f32> {
        self.heights.get(&id).copied()
    }

    /// Starts the grace period of a toast.
    ///
    /// Returns `false` for unknown ids and toasts already closing; a second
    /// trigger keeps the first deadline.
    pub fn begin_close(&mut self, id: ToastId, now: Instant) -> bool {
        if !self.order.contains(&id) || self.closing.contains_key(&id) {
            return false;
        }
        log::debug!("toast {id} closing");
        // A grace period past the representable range ends right away.
        let deadline = now.checked_add(self.grace).unwrap_or(now);
        self.closing.insert(id, deadline);
        true
    }

    #[must_use]
    pub fn is_closing(&self, id: ToastId) -> bool {
        self.closing.contains_key(&id)
    }

    /// Closing toasts whose grace period is over, oldest first.
    #[must_use]
    pub fn expired(&self, now: Instant) -> Vec<ToastId> {
        self.order
            .iter()
            .filter(|id| self.closing.get(*id).is_some_and(|deadline| *deadline <= now))
            .copied()
            .collect()
    }

    #[must_use]
    pub fn has_closing(&self) -> bool {
        !self.closing.is_empty()
    }

    /// Placement of every live toast, oldest first.
    #[must_use]
    pub fn placements(&self) -> Vec<Placement> {
        // A closing toast contributes `-gap + gap`, i.e. no space at all.
        let heights: Vec<Option<f32>> = self
            .order
            .iter()
            .map(|id| {
                if self.is_closing(*id) {
                    Some(-self.gap)
                } else {
                    self.height(*id)
                }
            })
            .collect();
        let offsets = stack_offsets(&heights, self.gap);
        let newest = self.order.len().saturating_sub(1);

        self.order
            .iter()
            .zip(offsets)
            .enumerate()
            .map(|(index, (&id, offset))| {
                let closing = self.is_closing(id);
                Placement {
                    id,
                    visible: self.mode == Mode::Multi || index == newest,
                    offset: if closing { -self.gap } else { offset },
                    edge: self.position.edge(),
                    alignment: self.position.alignment(),
                    closing,
                }
            })
            .collect()
    }

    #[must_use]
    pub fn placement(&self, id: ToastId) -> Option<Placement> {
        self.placements()
            .into_iter()
            .find(|placement| placement.id == id)
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn gap(&self) -> f32 {
        self.gap
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
