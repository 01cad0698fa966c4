//! HTTP handlers for the crop image analysis gateway

use axum::{
    extract::{Multipart, State},
    Json,
};
use shared::{CropAnalysis, Language};

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Maximum accepted image payload
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Analyze an uploaded crop/soil image
///
/// Multipart form with an `image` field (binary) and an optional
/// `language` field (`en`|`hi`, default `en`).
pub async fn analyze_crop(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<CropAnalysis>> {
    let mut image: Option<(Vec<u8>, String)> = None;
    let mut language = Language::En;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::ValidationError(format!("Invalid multipart body: {}", e)))?
    {
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("image") => {
                let mime_type = field
                    .content_type()
                    .unwrap_or("image/jpeg")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::ValidationError(format!("Failed to read image: {}", e)))?;
                image = Some((bytes.to_vec(), mime_type));
            }
            Some("language") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::ValidationError(format!("Invalid language field: {}", e)))?;
                language = value
                    .parse()
                    .map_err(|e: String| AppError::ValidationError(e))?;
            }
            _ => {}
        }
    }

    let (bytes, mime_type) = image.ok_or_else(|| AppError::Validation {
        field: "image".to_string(),
        message: "No image file provided".to_string(),
        message_hi: "कोई छवि फ़ाइल प्रदान नहीं की गई।".to_string(),
    })?;

    if bytes.is_empty() {
        return Err(AppError::Validation {
            field: "image".to_string(),
            message: "Image file is empty".to_string(),
            message_hi: "छवि फ़ाइल खाली है।".to_string(),
        });
    }

    tracing::info!(
        size_bytes = bytes.len(),
        mime_type = %mime_type,
        language = language.code(),
        "Analyzing crop image"
    );

    let analysis = state.gemini.analyze(&bytes, &mime_type, language).await?;
    Ok(Json(analysis))
}

/// Translate a previously produced English analysis into Hindi
pub async fn translate_analysis(
    State(state): State<AppState>,
    Json(analysis): Json<CropAnalysis>,
) -> AppResult<Json<CropAnalysis>> {
    let translated = state.gemini.translate(&analysis).await?;
    Ok(Json(translated))
}
