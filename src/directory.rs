//! Seams over the remote collaborators.
//!
//! Screens and the navigation gate talk to these traits so the routing and
//! editing logic can be exercised without a network.

use async_trait::async_trait;

use crate::{
    error::ApiFailure,
    models::{CoordinatorFields, NewParticipant, ParticipantRecord, School},
};

/// Remote service holding participant registrations.
#[async_trait]
pub trait ParticipantDirectory: Send + Sync {
    /// Lookup backing the invite-link entry check.
    async fn authenticate(&self, school_mail: &str)
        -> Result<Vec<ParticipantRecord>, ApiFailure>;

    async fn participants(&self, school_mail: &str)
        -> Result<Vec<ParticipantRecord>, ApiFailure>;

    async fn register(&self, submission: &NewParticipant) -> Result<(), ApiFailure>;

    /// Returns the full authoritative participant list after the update.
    async fn update(
        &self,
        id: &str,
        fields: &CoordinatorFields,
    ) -> Result<Vec<ParticipantRecord>, ApiFailure>;
}

/// Remote service over the static affiliated-school listings.
#[async_trait]
pub trait SchoolDirectory: Send + Sync {
    async fn search(&self, state: &str, city: &str) -> Result<Vec<School>, ApiFailure>;
}
