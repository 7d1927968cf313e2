//! Global Application State
//!
//! Reactive state management using Leptos signals. The controller is the
//! single owner of navigation and session state; the signals here are a
//! mirror refreshed after every controller call.

use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

use carbon_control::{
    Config, Controller, LoginRequest, NavEvent, Notification, Section, SignupRequest,
    SubmitOutcome, ViewModel,
};

use super::auth::BrowserAuthProvider;

/// Extra wait past a toast's TTL so the expiry check never runs early
const EXPIRY_SLACK_MS: u32 = 50;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    controller: Rc<Controller<BrowserAuthProvider>>,
    /// Screen, session and active section
    pub model: RwSignal<ViewModel>,
    /// Live toasts
    pub toasts: RwSignal<Vec<Notification>>,
    /// A login or signup is waiting on the provider
    pub submitting: RwSignal<bool>,
    /// Highest toast id that already has an expiry timer
    expiry_scheduled: Rc<Cell<u64>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let config = Config::default();
    let provider = BrowserAuthProvider::from_config(&config.auth);
    let controller = Controller::new(provider, config);

    let state = GlobalState {
        model: create_rw_signal(controller.snapshot()),
        toasts: create_rw_signal(Vec::new()),
        submitting: create_rw_signal(false),
        controller: Rc::new(controller),
        expiry_scheduled: Rc::new(Cell::new(0)),
    };

    provide_context(state);
}

impl GlobalState {
    pub fn config(&self) -> &Config {
        self.controller.config()
    }

    /// Copy controller state into the signals
    fn sync(&self) {
        self.model.set(self.controller.snapshot());
        self.submitting.set(self.controller.is_submitting());

        let toasts = self.controller.notifications().items().to_vec();
        self.schedule_expiry(&toasts);
        self.toasts.set(toasts);
    }

    /// Start an expiry check for every toast that does not have one yet
    fn schedule_expiry(&self, toasts: &[Notification]) {
        let seen = self.expiry_scheduled.get();

        for toast in toasts.iter().filter(|t| t.id > seen) {
            let ttl = u32::try_from(toast.ttl.as_millis()).unwrap_or(u32::MAX);
            let state = self.clone();

            gloo_timers::callback::Timeout::new(ttl.saturating_add(EXPIRY_SLACK_MS), move || {
                state.expire();
            })
            .forget();
        }

        if let Some(max) = toasts.iter().map(|t| t.id).max() {
            self.expiry_scheduled.set(seen.max(max));
        }
    }

    /// Apply a navigation event; invalid events are logged and ignored
    pub fn dispatch(&self, event: NavEvent) {
        if let Err(e) = self.controller.dispatch(event) {
            web_sys::console::warn_1(&e.to_string().into());
        }
        self.sync();
    }

    pub async fn login(&self, request: LoginRequest) {
        self.submitting.set(true);
        let result = self.controller.login(request).await;
        self.finish_submit(result);
    }

    pub async fn signup(&self, request: SignupRequest) {
        self.submitting.set(true);
        let result = self.controller.signup(request).await;
        self.finish_submit(result);
    }

    fn finish_submit(&self, result: Result<SubmitOutcome, carbon_control::TransitionError>) {
        match result {
            // The controller queued an info toast for the user
            Ok(SubmitOutcome::Ignored) => {
                web_sys::console::log_1(&"Submission already in flight".into());
            }
            Ok(_) => {}
            Err(e) => web_sys::console::warn_1(&e.to_string().into()),
        }
        self.sync();
    }

    pub fn logout(&self) {
        if let Err(e) = self.controller.logout() {
            web_sys::console::warn_1(&e.to_string().into());
        }
        self.sync();
    }

    pub fn select_section(&self, section: Section) {
        if let Err(e) = self.controller.select_section(section) {
            web_sys::console::warn_1(&e.to_string().into());
        }
        self.sync();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.controller.report_error(message);
        self.sync();
    }

    /// Drop toasts whose TTL has run out
    fn expire(&self) {
        if self.controller.expire_notifications() > 0 {
            self.sync();
        }
    }

    /// Remove a toast
    pub fn dismiss(&self, id: u64) {
        if self.controller.dismiss_notification(id) {
            self.sync();
        }
    }
}
