//! Public submission surface.

use interview_core::ExamType;
use reqwest::multipart::{Form, Part};

use crate::error::expect_success;
use crate::{ApiConfig, ApiError};

/// Candidate-entered fields for a new application.
///
/// Marks stay as free-form text; the backend stores them verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub exam_type: ExamType,
    pub prelims_marks: String,
    pub mains_marks: String,
}

/// Photo file attached to a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Client for the public (unauthenticated) API surface.
#[derive(Clone)]
pub struct PublicApi {
    http: reqwest::Client,
    base: String,
}

impl PublicApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: config.public_base.clone(),
        }
    }

    /// `POST /applications` as a multipart form with the photo file part.
    pub async fn submit_application(
        &self,
        draft: &SubmissionDraft,
        photo: PhotoUpload,
    ) -> Result<(), ApiError> {
        let photo_part = Part::bytes(photo.bytes)
            .file_name(photo.file_name)
            .mime_str(&photo.content_type)?;

        let form = Form::new()
            .text("name", draft.name.clone())
            .text("phone", draft.phone.clone())
            .text("email", draft.email.clone())
            .text("examType", draft.exam_type.as_str())
            .text("prelimsMarks", draft.prelims_marks.clone())
            .text("mainsMarks", draft.mains_marks.clone())
            .part("photo", photo_part);

        let response = self
            .http
            .post(format!("{}/applications", self.base))
            .multipart(form)
            .send()
            .await?;
        expect_success(&response)
    }
}
