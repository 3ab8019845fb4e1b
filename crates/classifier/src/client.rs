//! REST client for the classifier's `/api/classify` endpoint.

use std::time::Duration;

use serde::Deserialize;

/// Outcome of a best-effort classification attempt.
///
/// `Unavailable` covers every failure mode; callers treat it as "no AI
/// assistance for this complaint" and carry on.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// The service returned a prediction.
    Classified {
        /// Predicted category label (the category's internal name).
        label: String,
        /// Prediction confidence in `[0, 1]`.
        confidence: f64,
    },
    /// The service could not be reached or returned garbage.
    Unavailable,
}

/// Errors from the classifier REST layer.
///
/// Only visible through logs: [`ClassifierClient::classify`] swallows
/// them into [`Classification::Unavailable`].
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// The HTTP request itself failed (network, DNS, timeout, or a
    /// response body that was not the expected JSON).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Classifier returned HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Successful response shape of `POST /api/classify`.
#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    category: String,
    confidence: f64,
}

impl From<ClassifyResponse> for Classification {
    fn from(response: ClassifyResponse) -> Self {
        Classification::Classified {
            label: response.category,
            confidence: response.confidence,
        }
    }
}

/// HTTP client for a single classifier service instance.
pub struct ClassifierClient {
    client: reqwest::Client,
    base_url: String,
}

impl ClassifierClient {
    /// Create a client for the service at `base_url` with a hard
    /// per-request timeout.
    ///
    /// The timeout bounds the entire call; there is no retry. A slow
    /// classifier delays intake by at most this duration.
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, base_url }
    }

    /// Classify an image, best-effort.
    ///
    /// Never fails: any error is logged at WARN and collapsed into
    /// [`Classification::Unavailable`].
    pub async fn classify(&self, image: Vec<u8>, content_type: &str) -> Classification {
        match self.try_classify(image, content_type).await {
            Ok(response) => {
                tracing::debug!(
                    category = %response.category,
                    confidence = response.confidence,
                    "Image classified"
                );
                response.into()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Image classification unavailable, continuing without");
                Classification::Unavailable
            }
        }
    }

    /// Execute a single `POST /api/classify` request.
    async fn try_classify(
        &self,
        image: Vec<u8>,
        content_type: &str,
    ) -> Result<ClassifyResponse, ClassifierError> {
        let part = reqwest::multipart::Part::bytes(image)
            .file_name("complaint-image")
            .mime_str(content_type)?;
        let form = reqwest::multipart::Form::new().part("image", part);

        let response = self
            .client
            .post(format!("{}/api/classify", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifierError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<ClassifyResponse>().await?)
    }
}
