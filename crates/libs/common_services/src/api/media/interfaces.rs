use crate::database::review::MediaReview;
use crate::tmdb::SectionMap;
use app_state::RESERVED_SECTION_NAME;
use serde::Serialize;
use tracing::warn;

/// Merged detail view of a movie or show.
///
/// Serializes as one flat object: each fetched upstream section under its own
/// name, plus `reviews`, which is always present.
#[derive(Serialize, Debug)]
pub struct MediaDetailsResponse {
    #[serde(flatten)]
    pub sections: SectionMap,
    pub reviews: Vec<MediaReview>,
}

/// Joins fetched sections with locally stored reviews. Reviews end up newest first
/// whatever order they arrive in.
#[must_use]
pub fn assemble_details(
    mut sections: SectionMap,
    mut reviews: Vec<MediaReview>,
) -> MediaDetailsResponse {
    if sections.remove(RESERVED_SECTION_NAME).is_some() {
        warn!("Discarding upstream section named '{RESERVED_SECTION_NAME}'");
    }
    reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    MediaDetailsResponse { sections, reviews }
}
