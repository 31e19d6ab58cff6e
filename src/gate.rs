//! # Navigation Gate
//!
//! Resolves an invite-link identity to the screen the visitor lands on.
//!
//! The decision itself is the pure [`route_for`]; the gate wraps it with the
//! remote lookup and memoizes per identity so revisiting the same link does
//! not issue a second lookup.
//!
//! ## Routing
//! - Existing participants for the identity → dashboard
//! - None yet → registration form
//! - Lookup rejected with 400 → unauthorized page, server message attached
//! - Lookup rejected with 404 → not-found page, server message attached
//! - Anything else, including transport failures → not-found page with a
//!   generic message

use tracing::debug;

use crate::{directory::ParticipantDirectory, error::ApiFailure, models::ParticipantRecord};

pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Transition-scoped context handed from one screen to the next.
///
/// Never persisted; a reload loses it and must re-enter through the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub school_mail: String,
}

impl Session {
    pub fn new(school_mail: impl Into<String>) -> Self {
        Self {
            school_mail: school_mail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard(Session),
    Registration(Session),
    Unauthorized { message: String },
    NotFound { message: String },
}

/// The gate's decision as a pure function of the identity and lookup result.
pub fn route_for(
    school_mail: &str,
    outcome: Result<Vec<ParticipantRecord>, ApiFailure>,
) -> Route {
    match outcome {
        Ok(participants) if !participants.is_empty() => {
            Route::Dashboard(Session::new(school_mail))
        }
        Ok(_) => Route::Registration(Session::new(school_mail)),
        Err(failure) => match failure.status {
            Some(400) => Route::Unauthorized {
                message: failure.message,
            },
            Some(404) => Route::NotFound {
                message: failure.message,
            },
            // 403/409 and friends collapse with transport failures on entry;
            // only create/update treat them distinctly.
            _ => Route::NotFound {
                message: UNEXPECTED_ERROR.to_string(),
            },
        },
    }
}

#[derive(Default)]
pub struct NavigationGate {
    resolved: Option<(String, Route)>,
}

impl NavigationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// One lookup per distinct identity; an unchanged identity returns the
    /// cached route. Never fails — every lookup outcome maps to a route.
    pub async fn resolve(
        &mut self,
        school_mail: &str,
        directory: &dyn ParticipantDirectory,
    ) -> Route {
        if let Some((mail, route)) = &self.resolved {
            if mail == school_mail {
                debug!("Identity unchanged, reusing resolved route");
                return route.clone();
            }
        }

        let route = route_for(school_mail, directory.authenticate(school_mail).await);
        self.resolved = Some((school_mail.to_string(), route.clone()));

        route
    }
}
