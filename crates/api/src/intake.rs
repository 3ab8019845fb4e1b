//! Complaint intake pipeline.
//!
//! Orchestrates the creation-time decision logic: validate, store the
//! image (best-effort), classify it (best-effort), resolve the effective
//! category, score priority, resolve the owning department, then persist
//! the complaint and its `created` history entry atomically.
//!
//! Failure policy: validation and the final persist are the only fatal
//! steps. Image upload and classification are advisory; their failures
//! are logged and absorbed, degrading the record instead of rejecting it.

use validator::Validate;

use civica_classifier::Classification;
use civica_core::error::CoreError;
use civica_core::priority::priority_score;
use civica_core::types::DbId;
use civica_db::models::category::Category;
use civica_db::models::complaint::{Complaint, CreateComplaint};
use civica_db::repositories::{CategoryRepo, ComplaintRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// An image file extracted from the multipart request.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// A fully collected intake request, validated before any collaborator
/// is touched.
#[derive(Debug, Validate)]
pub struct IntakeRequest {
    pub user_id: DbId,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "location must not be empty"))]
    pub location: String,
    pub category_id: Option<DbId>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image: Option<ImageUpload>,
}

/// Run the intake pipeline and return the persisted complaint.
pub async fn create_complaint(state: &AppState, request: IntakeRequest) -> AppResult<Complaint> {
    // Step 0: fail fast on invalid input, before any collaborator call.
    request
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    if let Some(image) = &request.image {
        validate_image(image, state.config.max_upload_bytes)?;
    }

    // Steps 1-2: best-effort image persistence and classification. The
    // image buffer is owned by this block and dropped when it ends,
    // success or failure.
    let mut image_url = None;
    let mut classification = Classification::Unavailable;
    if let Some(image) = request.image {
        let key = image_key(request.user_id, &image.filename, chrono::Utc::now());

        match state
            .storage
            .upload(&key, image.bytes.clone(), &image.content_type)
            .await
        {
            Ok(url) => image_url = Some(url),
            Err(e) => {
                tracing::warn!(error = %e, key, "Image upload failed, continuing without image URL");
            }
        }

        classification = state.classifier.classify(image.bytes, &image.content_type).await;
    }

    let (ai_label, ai_confidence) = match &classification {
        Classification::Classified { label, confidence } => {
            (Some(label.clone()), Some(*confidence))
        }
        Classification::Unavailable => (None, None),
    };

    // Step 3: effective category. The citizen's explicit choice wins;
    // the AI label is a fallback, resolved by exact name match. A lookup
    // miss is a valid "no category" outcome, never an error.
    let effective = resolve_effective_category(state, request.category_id, ai_label.as_deref())
        .await?;

    // Steps 4-5: priority heuristic and department lookup.
    let priority = priority_score(
        effective.as_ref().map(|c| c.name.as_str()),
        &request.description,
    );
    let department_id = effective.as_ref().and_then(|c| c.department_id);

    // Steps 6-7: persist row + created history entry in one transaction.
    // Any failure here aborts the whole operation.
    let complaint = ComplaintRepo::create_with_history(
        &state.pool,
        &CreateComplaint {
            user_id: request.user_id,
            category_id: effective.map(|c| c.id),
            department_id,
            title: request.title,
            description: request.description,
            location: request.location,
            latitude: request.latitude,
            longitude: request.longitude,
            image_url,
            priority,
            ai_detected_category: ai_label,
            ai_category_confidence: ai_confidence,
        },
    )
    .await?;

    tracing::info!(
        complaint_id = complaint.id,
        priority = complaint.priority,
        department_id = complaint.department_id,
        "Complaint created"
    );

    Ok(complaint)
}

/// Resolve the effective category: the requested id first, then the AI
/// label by exact name match, then none.
async fn resolve_effective_category(
    state: &AppState,
    requested: Option<DbId>,
    ai_label: Option<&str>,
) -> AppResult<Option<Category>> {
    if let Some(id) = requested {
        if let Some(category) = CategoryRepo::find_by_id(&state.pool, id).await? {
            return Ok(Some(category));
        }
        tracing::warn!(category_id = id, "Requested category not found, falling back");
    }

    match ai_label {
        Some(label) => Ok(CategoryRepo::find_by_name(&state.pool, label).await?),
        None => Ok(None),
    }
}

/// Reject non-image or oversized uploads before touching storage.
fn validate_image(image: &ImageUpload, max_bytes: usize) -> Result<(), AppError> {
    if !image.content_type.starts_with("image/") {
        return Err(CoreError::Validation(format!(
            "Only image files are allowed (got {})",
            image.content_type
        ))
        .into());
    }
    if image.bytes.len() > max_bytes {
        return Err(CoreError::Validation(format!(
            "Image exceeds the maximum upload size of {max_bytes} bytes"
        ))
        .into());
    }
    Ok(())
}

/// Build the storage key for an uploaded image: namespaced by citizen,
/// made unique by the upload timestamp, keeping the original extension.
/// Only short alphanumeric extensions are kept; anything else (including
/// separators smuggled in via the filename) falls back to `jpg`, so the
/// key never nests deeper than `{user_id}/`.
fn image_key(user_id: DbId, filename: &str, now: chrono::DateTime<chrono::Utc>) -> String {
    let ext = filename
        .rsplit('.')
        .next()
        .filter(|ext| {
            !ext.is_empty()
                && ext.len() <= 8
                && *ext != filename
                && ext.chars().all(|c| c.is_ascii_alphanumeric())
        })
        .map(str::to_lowercase)
        .unwrap_or_else(|| "jpg".to_string());
    format!("{user_id}/{}.{ext}", now.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(millis: i64) -> chrono::DateTime<chrono::Utc> {
        chrono::DateTime::from_timestamp_millis(millis).unwrap()
    }

    #[test]
    fn image_key_namespaces_by_citizen_and_timestamp() {
        assert_eq!(image_key(7, "photo.JPG", at(1700000000000)), "7/1700000000000.jpg");
    }

    #[test]
    fn image_key_defaults_extension_when_missing() {
        assert_eq!(image_key(7, "photo", at(1)), "7/1.jpg");
        assert_eq!(image_key(7, "", at(1)), "7/1.jpg");
    }

    #[test]
    fn image_key_drops_non_alphanumeric_extensions() {
        // A separator after the last dot must not create extra key
        // segments under the upload root.
        assert_eq!(image_key(7, "a./x", at(1)), "7/1.jpg");
        assert_eq!(image_key(7, "photo.j/pg", at(1)), "7/1.jpg");
        assert_eq!(image_key(7, "photo.j.p..g/", at(1)), "7/1.jpg");
        assert_eq!(image_key(7, "shot.png ", at(1)), "7/1.jpg");
    }

    #[test]
    fn oversized_image_is_rejected() {
        let image = ImageUpload {
            filename: "big.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![0; 16],
        };
        assert!(validate_image(&image, 8).is_err());
        assert!(validate_image(&image, 16).is_ok());
    }

    #[test]
    fn non_image_content_type_is_rejected() {
        let image = ImageUpload {
            filename: "report.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            bytes: vec![0; 4],
        };
        assert!(validate_image(&image, 1024).is_err());
    }

    #[test]
    fn empty_required_fields_fail_validation() {
        let request = IntakeRequest {
            user_id: 1,
            title: String::new(),
            description: "d".to_string(),
            location: "l".to_string(),
            category_id: None,
            latitude: None,
            longitude: None,
            image: None,
        };
        assert!(request.validate().is_err());
    }
}
