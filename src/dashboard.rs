//! Dashboard screen: shows a school's registered participants and lets one
//! record at a time be edited in place.
//!
//! Local state only changes after a verified successful server response; a
//! rejected update leaves both the list and the open editor untouched.

use crate::{
    directory::ParticipantDirectory,
    gate::{Route, Session},
    models::{CoordinatorFields, ParticipantRecord},
    notice::{server_message, Notice},
    validate,
};

pub struct Dashboard {
    session: Session,
    participants: Vec<ParticipantRecord>,
    editing: Option<Editor>,
}

/// The one open in-place editor, seeded from the record under edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    pub index: usize,
    pub draft: CoordinatorFields,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Redirect(Route),
    Failed { notice: Notice, redirect: Route },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(Notice),
    /// Editor stays open; nothing local changed.
    Rejected(Notice),
}

impl Dashboard {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            participants: Vec::new(),
            editing: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn participants(&self) -> &[ParticipantRecord] {
        &self.participants
    }

    pub fn editor(&self) -> Option<&Editor> {
        self.editing.as_ref()
    }

    /// Fetches the school's records. An empty identity means the screen was
    /// reached without going through the gate; send the visitor away.
    pub async fn load(&mut self, directory: &dyn ParticipantDirectory) -> LoadOutcome {
        if self.session.school_mail.is_empty() {
            return LoadOutcome::Redirect(Route::Unauthorized {
                message: String::new(),
            });
        }

        match directory.participants(&self.session.school_mail).await {
            Ok(participants) => {
                self.participants = participants;
                LoadOutcome::Loaded
            }
            Err(failure) => {
                let notice = match failure.status {
                    Some(404) => {
                        Notice::error("Not Found", "No participants found or invalid request.")
                    }
                    Some(403) => Notice::error(
                        "Unauthorized",
                        "You do not have permission to access this resource.",
                    ),
                    _ => Notice::error(
                        "Something went wrong",
                        server_message(
                            failure.message,
                            "An error occurred while fetching data.",
                        ),
                    ),
                };

                LoadOutcome::Failed {
                    notice,
                    redirect: Route::NotFound {
                        message: String::new(),
                    },
                }
            }
        }
    }

    /// Opens the editor on one record. Starting an edit while another is open
    /// replaces it, discarding the previous draft.
    pub fn begin_edit(&mut self, index: usize) -> bool {
        let Some(record) = self.participants.get(index) else {
            return false;
        };

        self.editing = Some(Editor {
            index,
            draft: CoordinatorFields::of(record),
        });

        true
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Submits the edited coordinator fields for the record under edit,
    /// reconciling the local list with the server's authoritative response.
    pub async fn save(
        &mut self,
        fields: CoordinatorFields,
        directory: &dyn ParticipantDirectory,
    ) -> SaveOutcome {
        let Some(index) = self.editing.as_ref().map(|editor| editor.index) else {
            return SaveOutcome::Rejected(Notice::error(
                "Invalid Request",
                "No record is being edited.",
            ));
        };

        if let Err(message) = validate::coordinator(&fields) {
            return SaveOutcome::Rejected(Notice::error("Invalid Request", message));
        }

        let Some(record) = self.participants.get(index) else {
            return SaveOutcome::Rejected(Notice::error(
                "Not Found",
                "Participant does not exist.",
            ));
        };
        let id = record.id.clone();

        match directory.update(&id, &fields).await {
            Ok(participants) => {
                self.participants = participants;
                self.editing = None;

                SaveOutcome::Saved(Notice::success(
                    "Success",
                    "Participant details updated successfully!",
                ))
            }
            Err(failure) => {
                let notice = match failure.status {
                    Some(409) => Notice::error(
                        "Conflict",
                        server_message(
                            failure.message,
                            "A participant with the same email or contact number already exists.",
                        ),
                    ),
                    Some(400) => Notice::error(
                        "Invalid Request",
                        server_message(failure.message, "Invalid request format or data."),
                    ),
                    Some(404) => Notice::error(
                        "Not Found",
                        server_message(failure.message, "Participant does not exist."),
                    ),
                    _ => Notice::error(
                        "Something went wrong",
                        server_message(failure.message, "Could not update participant details."),
                    ),
                };

                SaveOutcome::Rejected(notice)
            }
        }
    }

    /// "Add another" hands control back to the registration form with the
    /// same identity.
    pub fn register_another(&self) -> Route {
        Route::Registration(self.session.clone())
    }
}
