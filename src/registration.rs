//! Registration form: creates the first (or another) participant record for
//! an invited school, then hands control to the dashboard.

use crate::{
    directory::ParticipantDirectory,
    gate::{Route, Session},
    models::NewParticipant,
    notice::{server_message, Notice},
    validate,
};

pub struct Registration {
    session: Session,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Registered { notice: Notice, next: Route },
    /// Stay on the form; the visitor can correct and resubmit.
    Rejected(Notice),
}

impl Registration {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Reached without an identity → away to the unauthorized page.
    pub fn guard(&self) -> Option<Route> {
        if self.session.school_mail.is_empty() {
            return Some(Route::Unauthorized {
                message: String::new(),
            });
        }

        None
    }

    /// A blank form pre-bound to the session identity.
    pub fn blank_form(&self) -> NewParticipant {
        NewParticipant {
            school_mail: self.session.school_mail.clone(),
            ..NewParticipant::default()
        }
    }

    pub async fn submit(
        &self,
        form: NewParticipant,
        directory: &dyn ParticipantDirectory,
    ) -> SubmitOutcome {
        if let Err(message) = validate::registration(&form) {
            return SubmitOutcome::Rejected(Notice::error("Invalid Request", message));
        }

        // The owning identity comes from the session, not the form.
        let submission = NewParticipant {
            school_mail: self.session.school_mail.clone(),
            ..form
        };

        match directory.register(&submission).await {
            Ok(()) => SubmitOutcome::Registered {
                notice: Notice::success("Success", "Participant registered successfully!"),
                next: Route::Dashboard(self.session.clone()),
            },
            Err(failure) if failure.is(409) => SubmitOutcome::Rejected(Notice::error(
                "Conflict",
                server_message(
                    failure.message,
                    "Participant with the provided email or mobile number is already registered.",
                ),
            )),
            Err(failure) => SubmitOutcome::Rejected(Notice::error(
                "Something went wrong",
                server_message(failure.message, "Could not save details."),
            )),
        }
    }
}
