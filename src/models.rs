//! Wire structures shared with the remote registration API.
//!
//! Field names follow the API's camelCase JSON, with the Mongo-style `_id`
//! on stored records.

use serde::{Deserialize, Serialize};

/// One registered coordinator/school entry tied to a school mail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub affiliation_number: String,
    pub school_name: String,
    pub teacher_coordinator_name: String,
    pub teacher_coordinator_mobile: String,
    pub teacher_coordinator_email: String,
    pub school_mail: String,
}

/// A registration submission; the server assigns the record id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewParticipant {
    pub affiliation_number: String,
    pub school_name: String,
    pub teacher_coordinator_name: String,
    pub teacher_coordinator_mobile: String,
    pub teacher_coordinator_email: String,
    pub school_mail: String,
}

/// The subset of a record that is editable from the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatorFields {
    pub teacher_coordinator_name: String,
    pub teacher_coordinator_email: String,
    pub teacher_coordinator_mobile: String,
}

impl CoordinatorFields {
    pub fn of(record: &ParticipantRecord) -> Self {
        Self {
            teacher_coordinator_name: record.teacher_coordinator_name.clone(),
            teacher_coordinator_email: record.teacher_coordinator_email.clone(),
            teacher_coordinator_mobile: record.teacher_coordinator_mobile.clone(),
        }
    }
}

/// One affiliated-school listing from the read-only directory search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub school_name: String,
    pub affiliation_id: String,
}
