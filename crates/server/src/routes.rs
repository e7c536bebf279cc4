use std::sync::Arc;

use axum::{Json, extract::State};
use mate_core::model::QuizPayload;
use storage::ImageKind;
use tracing::info;

use crate::{error::AppError, generator::build_payload, state::AppState};

pub async fn game_data_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<QuizPayload>, AppError> {
    let correct = state.catalog.list_images(ImageKind::ChoiceA).await?;
    let wrong = state.catalog.list_images(ImageKind::ChoiceB).await?;
    let ending = state.catalog.list_images(ImageKind::Ending).await?;

    let payload = build_payload(
        correct,
        wrong,
        &ending,
        state.config.question_count,
        &mut rand::rng(),
    )?;
    info!(questions = payload.len(), "served game data");
    Ok(Json(payload))
}
