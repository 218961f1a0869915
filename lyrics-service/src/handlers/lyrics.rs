use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::services::prompt::{build_prompt, STYLE_DIRECTIVES};
use crate::services::providers::{GenerationParams, ProviderError};
use crate::startup::AppState;
use service_core::error::AppError;

/// A song generation request. Field values are embedded in the prompt
/// verbatim; `desc` may be empty.
#[derive(Debug, Deserialize)]
pub struct SongRequest {
    pub lang: String,
    pub genre: String,
    pub desc: String,
}

#[derive(Debug, Serialize)]
pub struct LyricsResponse {
    pub lyrics_1: String,
    pub lyrics_2: String,
}

/// Convert a provider failure into the single error shape this endpoint
/// exposes: a 500 whose detail is the stringified cause.
fn generation_error(err: ProviderError) -> AppError {
    AppError::InternalError(anyhow::Error::new(err))
}

/// Generate one lyric variant using the directive at `index`.
async fn generate_variant(
    state: &AppState,
    request: &SongRequest,
    index: usize,
) -> Result<String, AppError> {
    let prompt = build_prompt(
        &request.lang,
        &request.genre,
        STYLE_DIRECTIVES[index],
        &request.desc,
    );

    let params = GenerationParams {
        candidate_count: Some(1),
        temperature: Some(1.0),
    };

    let response = state
        .text_provider
        .generate(&prompt, &params)
        .await
        .map_err(generation_error)?;

    let text = response.text.ok_or_else(|| {
        AppError::InternalError(anyhow::anyhow!(
            "Provider returned no text for variant {}",
            index + 1
        ))
    })?;

    tracing::debug!(
        variant = index + 1,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        finish_reason = ?response.finish_reason,
        "Generated lyrics variant"
    );

    Ok(text)
}

/// Generate two stylistic variants of song lyrics.
///
/// The two provider calls are sequential; if either fails the whole request
/// fails and no partial result is returned.
#[tracing::instrument(skip(state, request))]
pub async fn generate_lyrics(
    State(state): State<AppState>,
    Json(request): Json<SongRequest>,
) -> Result<Json<LyricsResponse>, AppError> {
    let lyrics_1 = generate_variant(&state, &request, 0).await?;
    let lyrics_2 = generate_variant(&state, &request, 1).await?;

    Ok(Json(LyricsResponse { lyrics_1, lyrics_2 }))
}
