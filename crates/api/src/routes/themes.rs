//! Operator theme endpoint handlers.

use axum::{extract::Path, Json};

use domain::models::theme::Theme;

/// Palette for a mobile operator.
///
/// GET /api/v1/themes/:operator
pub async fn get_theme(Path(operator): Path<String>) -> Json<Theme> {
    Json(Theme::for_operator(&operator))
}
