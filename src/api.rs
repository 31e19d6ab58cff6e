//! Thin reqwest wrapper around the remote registration API.
//!
//! Every failure is normalized into [`ApiFailure`]: non-2xx responses carry
//! their status and whatever `message` the body held; transport errors and
//! unexpected body shapes carry no status.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;

use crate::{
    config::Config,
    directory::{ParticipantDirectory, SchoolDirectory},
    error::ApiFailure,
    models::{CoordinatorFields, NewParticipant, ParticipantRecord, School},
};

pub struct Api {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ParticipantsBody {
    participants: Vec<ParticipantRecord>,
}

#[derive(Deserialize)]
struct SchoolsBody {
    schools: Vec<School>,
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

impl Api {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn check(result: Result<Response, reqwest::Error>) -> Result<Response, ApiFailure> {
    let response = result.map_err(|e| ApiFailure::transport(e.to_string()))?;
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let body: ErrorBody = response.json().await.unwrap_or_default();
    Err(ApiFailure::status(status.as_u16(), body.message))
}

async fn json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiFailure> {
    response
        .json()
        .await
        .map_err(|e| ApiFailure::transport(e.to_string()))
}

#[async_trait]
impl ParticipantDirectory for Api {
    async fn authenticate(
        &self,
        school_mail: &str,
    ) -> Result<Vec<ParticipantRecord>, ApiFailure> {
        let response = check(
            self.client
                .post(self.url(&format!("/authenticate/{school_mail}")))
                .send()
                .await,
        )
        .await?;

        json(response).await
    }

    async fn participants(
        &self,
        school_mail: &str,
    ) -> Result<Vec<ParticipantRecord>, ApiFailure> {
        let response = check(
            self.client
                .get(self.url("/participants/get-participants"))
                .query(&[("schoolMail", school_mail)])
                .send()
                .await,
        )
        .await?;

        let body: ParticipantsBody = json(response).await?;
        Ok(body.participants)
    }

    async fn register(&self, submission: &NewParticipant) -> Result<(), ApiFailure> {
        check(
            self.client
                .post(self.url("/participants/save-participants"))
                .json(submission)
                .send()
                .await,
        )
        .await?;

        Ok(())
    }

    async fn update(
        &self,
        id: &str,
        fields: &CoordinatorFields,
    ) -> Result<Vec<ParticipantRecord>, ApiFailure> {
        let response = check(
            self.client
                .patch(self.url(&format!("/participants/update-participants/{id}")))
                .json(fields)
                .send()
                .await,
        )
        .await?;

        let body: ParticipantsBody = json(response).await?;
        Ok(body.participants)
    }
}

#[async_trait]
impl SchoolDirectory for Api {
    async fn search(&self, state: &str, city: &str) -> Result<Vec<School>, ApiFailure> {
        let response = check(
            self.client
                .post(self.url("/affiliated-schools/search-schools"))
                .json(&serde_json::json!({ "state": state, "city": city }))
                .send()
                .await,
        )
        .await?;

        let body: SchoolsBody = json(response).await?;
        Ok(body.schools)
    }
}
