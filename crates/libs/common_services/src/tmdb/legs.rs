use crate::database::media::MediaType;
use app_state::DetailSection;
use url::Url;

/// One named upstream request of a detail aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    pub name: String,
    pub url: Url,
}

/// Relative upstream path of a section, e.g. `movie/550/credits`.
#[must_use]
pub fn section_path(media_type: MediaType, media_id: i32, section: &DetailSection) -> String {
    let suffix = section.path_suffix.trim_matches('/');
    if suffix.is_empty() {
        format!("{}/{media_id}", media_type.as_path())
    } else {
        format!("{}/{media_id}/{suffix}", media_type.as_path())
    }
}
