//! In-process stand-in for the remote registration API, served over a real
//! socket so the reqwest client is exercised end to end.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Router,
};
use serde_json::json;
use tokio::net::TcpListener;

use enroll::models::{CoordinatorFields, NewParticipant, ParticipantRecord};

#[derive(Clone)]
pub struct Stub {
    records: Arc<Mutex<Vec<ParticipantRecord>>>,
    next_id: Arc<AtomicUsize>,
}

impl Stub {
    fn new(initial: Vec<ParticipantRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(initial)),
            next_id: Arc::new(AtomicUsize::new(1)),
        }
    }
}

fn conflicts(records: &[ParticipantRecord], email: &str, mobile: &str, skip_id: &str) -> bool {
    records.iter().any(|record| {
        record.id != skip_id
            && (record.teacher_coordinator_email == email
                || record.teacher_coordinator_mobile == mobile)
    })
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

async fn authenticate(
    State(stub): State<Stub>,
    Path(school_mail): Path<String>,
) -> Response {
    if !school_mail.contains('@') {
        return error(StatusCode::BAD_REQUEST, "Invalid school mail");
    }

    let records = stub.records.lock().unwrap();
    let matching: Vec<ParticipantRecord> = records
        .iter()
        .filter(|record| record.school_mail == school_mail)
        .cloned()
        .collect();

    Json(matching).into_response()
}

async fn get_participants(
    State(stub): State<Stub>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let school_mail = params.get("schoolMail").cloned().unwrap_or_default();

    let records = stub.records.lock().unwrap();
    let matching: Vec<ParticipantRecord> = records
        .iter()
        .filter(|record| record.school_mail == school_mail)
        .cloned()
        .collect();

    Json(json!({ "participants": matching })).into_response()
}

async fn save_participant(
    State(stub): State<Stub>,
    Json(submission): Json<NewParticipant>,
) -> Response {
    let mut records = stub.records.lock().unwrap();

    if conflicts(
        &records,
        &submission.teacher_coordinator_email,
        &submission.teacher_coordinator_mobile,
        "",
    ) {
        return error(
            StatusCode::CONFLICT,
            "Participant with the provided email or mobile number is already registered.",
        );
    }

    let id = format!("p{}", stub.next_id.fetch_add(1, Ordering::SeqCst));
    records.push(ParticipantRecord {
        id,
        affiliation_number: submission.affiliation_number,
        school_name: submission.school_name,
        teacher_coordinator_name: submission.teacher_coordinator_name,
        teacher_coordinator_mobile: submission.teacher_coordinator_mobile,
        teacher_coordinator_email: submission.teacher_coordinator_email,
        school_mail: submission.school_mail,
    });

    StatusCode::CREATED.into_response()
}

async fn update_participant(
    State(stub): State<Stub>,
    Path(id): Path<String>,
    Json(fields): Json<CoordinatorFields>,
) -> Response {
    let mut records = stub.records.lock().unwrap();

    if !records.iter().any(|record| record.id == id) {
        return error(StatusCode::NOT_FOUND, "Participant does not exist.");
    }

    if conflicts(
        &records,
        &fields.teacher_coordinator_email,
        &fields.teacher_coordinator_mobile,
        &id,
    ) {
        return error(
            StatusCode::CONFLICT,
            "A participant with the same email or contact number already exists.",
        );
    }

    let mut school_mail = String::new();
    for record in records.iter_mut() {
        if record.id == id {
            record.teacher_coordinator_name = fields.teacher_coordinator_name.clone();
            record.teacher_coordinator_email = fields.teacher_coordinator_email.clone();
            record.teacher_coordinator_mobile = fields.teacher_coordinator_mobile.clone();
            school_mail = record.school_mail.clone();
        }
    }

    let matching: Vec<ParticipantRecord> = records
        .iter()
        .filter(|record| record.school_mail == school_mail)
        .cloned()
        .collect();

    Json(json!({ "participants": matching })).into_response()
}

async fn search_schools(Json(filter): Json<serde_json::Value>) -> Response {
    let state = filter["state"].as_str().unwrap_or_default();

    let schools = match state {
        "Delhi" => json!([
            { "schoolName": "Springdale Public School", "affiliationId": "AFF-1001" },
            { "schoolName": "Modern Convent", "affiliationId": "AFF-1002" },
        ]),
        "Karnataka" => json!([
            { "schoolName": "Green Valley High", "affiliationId": "AFF-2001" },
        ]),
        _ => json!([]),
    };

    Json(json!({ "schools": schools })).into_response()
}

pub async fn spawn(initial: Vec<ParticipantRecord>) -> String {
    let app = Router::new()
        .route("/authenticate/{school_mail}", post(authenticate))
        .route("/participants/get-participants", get(get_participants))
        .route("/participants/save-participants", post(save_participant))
        .route(
            "/participants/update-participants/{id}",
            patch(update_participant),
        )
        .route("/affiliated-schools/search-schools", post(search_schools))
        .with_state(Stub::new(initial));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{address}")
}

pub fn seeded_record(id: &str, school_mail: &str, email: &str, mobile: &str) -> ParticipantRecord {
    ParticipantRecord {
        id: id.to_string(),
        affiliation_number: "12345".to_string(),
        school_name: "Springdale Public School, Sector 9".to_string(),
        teacher_coordinator_name: "A Sharma".to_string(),
        teacher_coordinator_mobile: mobile.to_string(),
        teacher_coordinator_email: email.to_string(),
        school_mail: school_mail.to_string(),
    }
}
