use serde::Deserialize;
use time::Date;

/// Fields supplied by the upload/edit form. Id, owner and the deletion
/// state are assigned by the repository.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReturnItem {
    pub title: String,
    pub description: String,
    /// Remote URL or embedded data URI; stored opaquely, never validated.
    pub image_url: String,
    #[serde(with = "crate::items::iso_date")]
    pub date: Date,
}
