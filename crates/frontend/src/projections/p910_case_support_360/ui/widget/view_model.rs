//! ViewModel for the Case Support 360 widget
//!
//! Owns the view state (snapshot / error / loading), subscribes to the case
//! id bound by the host shell, and applies exactly one settlement per issued
//! request.

use crate::projections::p910_case_support_360::api;
use crate::projections::p910_case_support_360::error::normalize;
use contracts::projections::p910_case_support_360::dto::Support360Snapshot;
use leptos::prelude::*;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;

/// Terminal outcome of one fetch request.
#[derive(Debug, Clone)]
pub enum Settlement {
    Success(Support360Snapshot),
    Failure(Value),
}

/// ViewModel for the Case Support 360 widget
///
/// At most one of `snapshot` / `error_message` is set at any time; both are
/// empty only before the first settlement.
#[derive(Clone)]
pub struct CaseSupport360Vm {
    pub snapshot: RwSignal<Option<Support360Snapshot>>,
    pub error_message: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,

    // Monotonic request number; a settlement applies only while its request
    // is still the newest, so a slow stale response cannot overwrite fresher
    // data.
    generation: RwSignal<u64>,
}

impl CaseSupport360Vm {
    /// Create a new ViewModel instance in its initial loading state
    pub fn new() -> Self {
        Self {
            snapshot: RwSignal::new(None),
            error_message: RwSignal::new(None),
            loading: RwSignal::new(true),
            generation: RwSignal::new(0),
        }
    }

    /// Subscribe to the case id bound by the host shell.
    ///
    /// Every change of the id (including its initial value becoming
    /// available) issues a new request. An absent id issues nothing and
    /// leaves the current state untouched.
    pub fn bind(&self, case_id: Signal<Option<String>>) {
        let vm = self.clone();
        Effect::new(move || {
            vm.on_case_id_change(case_id.get());
        });
    }

    fn on_case_id_change(&self, case_id: Option<String>) {
        let Some(case_id) = case_id else {
            return;
        };
        self.load(case_id);
    }

    /// Issue a fetch for the given case id.
    pub fn load(&self, case_id: String) {
        let generation = self.begin_request();

        let vm = self.clone();
        spawn_local(async move {
            let settlement = match api::fetch_support360(&case_id).await {
                Ok(snapshot) => Settlement::Success(snapshot),
                Err(payload) => Settlement::Failure(payload),
            };
            vm.settle(generation, settlement);
        });
    }

    /// Register a new request: bump the generation and re-arm `loading`.
    /// Previous snapshot/error stays visible until the new settlement lands.
    fn begin_request(&self) -> u64 {
        let generation = self.generation.get_untracked() + 1;
        self.generation.set(generation);
        self.loading.set(true);
        generation
    }

    /// Apply a terminal request outcome to the view state.
    fn settle(&self, generation: u64, settlement: Settlement) {
        if generation != self.generation.get_untracked() {
            log::debug!("dropping settlement of superseded request #{}", generation);
            return;
        }
        match settlement {
            Settlement::Success(snapshot) => {
                self.snapshot.set(Some(snapshot));
                self.error_message.set(None);
            }
            Settlement::Failure(payload) => {
                self.snapshot.set(None);
                self.error_message.set(Some(normalize(Some(&payload))));
            }
        }
        self.loading.set(false);
    }

    /// Whether the snapshot carries any order items
    pub fn has_order_items(&self) -> Signal<bool> {
        let snapshot = self.snapshot;
        Signal::derive(move || {
            snapshot
                .get()
                .map(|s| !s.order_items.is_empty())
                .unwrap_or(false)
        })
    }

    /// Whether the snapshot carries any return lines
    pub fn has_return_lines(&self) -> Signal<bool> {
        let snapshot = self.snapshot;
        Signal::derive(move || {
            snapshot
                .get()
                .map(|s| !s.return_lines.is_empty())
                .unwrap_or(false)
        })
    }

    /// Whether the snapshot carries any shipments
    pub fn has_shipments(&self) -> Signal<bool> {
        let snapshot = self.snapshot;
        Signal::derive(move || {
            snapshot
                .get()
                .map(|s| !s.shipments.is_empty())
                .unwrap_or(false)
        })
    }
}

impl Default for CaseSupport360Vm {
    fn default() -> Self {
        Self::new()
    }
}
