use axum::Json;

use simplr_core::catalog::{SEMESTERS, Semester};

/// The semester and lab catalog shown on the landing page.
pub async fn list_labs() -> Json<&'static [Semester]> {
    Json(SEMESTERS)
}
