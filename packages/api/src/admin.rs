//! Admin API surface.
//!
//! One method per backend operation. Every call attaches the session's
//! bearer token when one is present; a missing token is not an error at
//! this layer, rejecting unauthenticated calls is the backend's job.

use interview_core::{
    Application, ApplicationId, ApplicationStatus, ExportFormat, QueryState, Stats,
};
use serde::{Deserialize, Serialize};

use crate::error::expect_success;
use crate::{ApiConfig, ApiError, Session};

/// Login credentials for the admin surface.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Token payload returned by a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Envelope around the paginated application list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationsPage {
    #[serde(default)]
    pub applications: Vec<Application>,
}

#[derive(Debug, Serialize)]
struct StatusPatch {
    status: ApplicationStatus,
}

/// Client for the admin (bearer-authenticated) API surface.
#[derive(Clone)]
pub struct AdminApi {
    http: reqwest::Client,
    base: String,
    session: Session,
}

impl AdminApi {
    /// Build a client around an explicit session.
    pub fn new(config: &ApiConfig, session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: config.admin_base.clone(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// `POST /login`. The session is not touched here; the caller decides
    /// what to do with the returned token.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/login"))
            .json(credentials)
            .send()
            .await?;
        expect_success(&response)?;
        Ok(response.json().await?)
    }

    /// `GET /applications` with the query's page and filter parameters.
    pub async fn list_applications(&self, query: &QueryState) -> Result<ApplicationsPage, ApiError> {
        let request = self
            .http
            .get(self.url("/applications"))
            .query(&query.params());
        let response = self.authorize(request).send().await?;
        expect_success(&response)?;
        Ok(response.json().await?)
    }

    /// `GET /stats`.
    pub async fn stats(&self) -> Result<Stats, ApiError> {
        let request = self.http.get(self.url("/stats"));
        let response = self.authorize(request).send().await?;
        expect_success(&response)?;
        Ok(response.json().await?)
    }

    /// `DELETE /applications/{id}`.
    pub async fn delete_application(&self, id: &ApplicationId) -> Result<(), ApiError> {
        let request = self.http.delete(self.url(&format!("/applications/{id}")));
        let response = self.authorize(request).send().await?;
        expect_success(&response)
    }

    /// `PUT /applications/{id}` with the full edited record.
    ///
    /// Last-write-wins full replace, not a diff.
    pub async fn update_application(&self, application: &Application) -> Result<(), ApiError> {
        let request = self
            .http
            .put(self.url(&format!("/applications/{}", application.id)))
            .json(application);
        let response = self.authorize(request).send().await?;
        expect_success(&response)
    }

    /// `PATCH /applications/{id}/status`.
    pub async fn update_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<(), ApiError> {
        let request = self
            .http
            .patch(self.url(&format!("/applications/{id}/status")))
            .json(&StatusPatch { status });
        let response = self.authorize(request).send().await?;
        expect_success(&response)
    }

    /// `GET /export/{format}`, returning the raw blob for download.
    pub async fn export(&self, format: ExportFormat) -> Result<Vec<u8>, ApiError> {
        let request = self.http.get(self.url(&format!("/export/{format}")));
        let response = self.authorize(request).send().await?;
        expect_success(&response)?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;

    #[test]
    fn empty_list_envelope_decodes() {
        let page: ApplicationsPage = serde_json::from_str("{}").unwrap();
        assert!(page.applications.is_empty());
    }

    #[test]
    fn list_envelope_decodes_applications() {
        let json = r#"{"applications": [{
            "_id": "66f2a1b3c4d5e6f708192a3b",
            "name": "Asha Verma",
            "email": "asha@example.com",
            "phone": "9876543210",
            "examType": "upsc",
            "createdAt": "2026-01-15T09:30:00Z"
        }]}"#;
        let page: ApplicationsPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.applications.len(), 1);
        assert_eq!(page.applications[0].name, "Asha Verma");
    }

    #[test]
    fn status_patch_serializes_wire_form() {
        let body = serde_json::to_value(StatusPatch {
            status: ApplicationStatus::Reviewed,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"status": "reviewed"}));
    }
}
