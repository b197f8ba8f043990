//! # General error boundary: one place that decides how a failed route looks
//!
//! Routes hand their [`RouteFailure`] and path parameters to
//! [`GeneralErrorBoundary`], optionally with [`ErrorHandlers`] describing how
//! that route wants specific failures shown. The decision is a three-way branch
//! ([`select`]):
//!
//! | Failure | Handler registered for its status? | Fallback |
//! |---------|-----------------------------------|----------|
//! | `Status` | yes | [`Fallback::Registered`]: the route's own handler |
//! | `Status` | no | [`Fallback::DefaultStatus`]: prints the status and message, unless overridden |
//! | `Unexpected` | n/a | [`Fallback::Unexpected`]: a generic retry message, unless overridden |
//!
//! The unexpected fallback never echoes the error text. The raw failure is
//! logged with `tracing` before anything is rendered: `warn!` for status
//! failures, `error!` for unexpected ones.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use api::{RouteFailure, RouteParams, StatusFailure};
use dioxus::prelude::*;

/// What a status handler gets to look at.
#[derive(Clone, Copy, Debug)]
pub struct StatusInfo<'a> {
    pub failure: &'a StatusFailure,
    pub params: &'a RouteParams,
}

pub type StatusHandler = Rc<dyn Fn(StatusInfo<'_>) -> Element>;
pub type UnexpectedHandler = Rc<dyn Fn(&RouteFailure) -> Element>;

/// Per-route rendering overrides.
#[derive(Clone, Default)]
pub struct ErrorHandlers {
    status: HashMap<u16, StatusHandler>,
    default_status: Option<StatusHandler>,
    unexpected: Option<UnexpectedHandler>,
}

impl ErrorHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render failures with exactly this status through `handler`.
    pub fn on_status(
        mut self,
        status: u16,
        handler: impl Fn(StatusInfo<'_>) -> Element + 'static,
    ) -> Self {
        self.status.insert(status, Rc::new(handler));
        self
    }

    /// Replace the fallback for statuses without a handler.
    pub fn default_status(mut self, handler: impl Fn(StatusInfo<'_>) -> Element + 'static) -> Self {
        self.default_status = Some(Rc::new(handler));
        self
    }

    /// Replace the fallback for failures without a status.
    pub fn unexpected(mut self, handler: impl Fn(&RouteFailure) -> Element + 'static) -> Self {
        self.unexpected = Some(Rc::new(handler));
        self
    }
}

impl PartialEq for ErrorHandlers {
    fn eq(&self, other: &Self) -> bool {
        fn same<T: ?Sized>(a: &Option<Rc<T>>, b: &Option<Rc<T>>) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
        }

        self.status.len() == other.status.len()
            && self
                .status
                .iter()
                .all(|(code, a)| other.status.get(code).is_some_and(|b| Rc::ptr_eq(a, b)))
            && same(&self.default_status, &other.default_status)
            && same(&self.unexpected, &other.unexpected)
    }
}

impl fmt::Debug for ErrorHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut codes: Vec<_> = self.status.keys().collect();
        codes.sort();
        f.debug_struct("ErrorHandlers")
            .field("status", &codes)
            .field("default_status", &self.default_status.is_some())
            .field("unexpected", &self.unexpected.is_some())
            .finish()
    }
}

/// Which rendering path a failure takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fallback {
    Registered(u16),
    DefaultStatus(u16),
    Unexpected,
}

pub fn select(failure: &RouteFailure, handlers: &ErrorHandlers) -> Fallback {
    match failure {
        RouteFailure::Status(status) if handlers.status.contains_key(&status.status) => {
            Fallback::Registered(status.status)
        }
        RouteFailure::Status(status) => Fallback::DefaultStatus(status.status),
        RouteFailure::Unexpected(_) => Fallback::Unexpected,
    }
}

/// Render the fallback [`select`] picks. Never fails.
pub fn dispatch(failure: &RouteFailure, params: &RouteParams, handlers: &ErrorHandlers) -> Element {
    match (select(failure, handlers), failure) {
        (Fallback::Registered(code), RouteFailure::Status(status)) => {
            let info = StatusInfo {
                failure: status,
                params,
            };
            match handlers.status.get(&code) {
                Some(handler) => handler(info),
                None => default_status_fallback(info),
            }
        }
        (Fallback::DefaultStatus(_), RouteFailure::Status(status)) => {
            let info = StatusInfo {
                failure: status,
                params,
            };
            match &handlers.default_status {
                Some(handler) => handler(info),
                None => default_status_fallback(info),
            }
        }
        _ => match &handlers.unexpected {
            Some(handler) => handler(failure),
            None => default_unexpected_fallback(),
        },
    }
}

fn default_status_fallback(info: StatusInfo<'_>) -> Element {
    let StatusFailure { status, message } = info.failure;
    rsx! {
        p { "{status} {message}" }
    }
}

fn default_unexpected_fallback() -> Element {
    rsx! {
        p { "Oh no, an unexpected error occurred. Please try again later." }
    }
}

/// Fallback UI for a route whose loader or action failed.
#[component]
pub fn GeneralErrorBoundary(
    failure: RouteFailure,
    #[props(default)] params: RouteParams,
    #[props(default)] handlers: ErrorHandlers,
) -> Element {
    match &failure {
        RouteFailure::Status(status) => {
            tracing::warn!(status = status.status, message = %status.message, "route failed")
        }
        RouteFailure::Unexpected(error) => tracing::error!(%error, "route failed unexpectedly"),
    }

    rsx! {
        div {
            class: "container mx-auto flex h-full w-full items-center justify-center bg-destructive p-20 text-h2 text-destructive-foreground",
            {dispatch(&failure, &params, &handlers)}
        }
    }
}
