//! GraphQL type definitions
//!
//! These types mirror the stored records but expose the string IDs and field
//! names of the public API.

use async_graphql::{ID, SimpleObject};

use crate::db::{CollectionRecord, MediaRecord};

/// A single photo, panorama or video
#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct Media {
    /// Assigned by the store on creation
    pub id: ID,
    /// Human-readable date of when the media was taken
    pub date: String,
    pub title: String,
    /// ISO timestamp of when the media was uploaded
    pub upload_date: String,
    /// One of "Image", "Panorama" or "Video"
    #[graphql(name = "type")]
    pub media_type: String,
    /// URL of the full image or video
    #[graphql(name = "contentURL")]
    pub content_url: String,
    #[graphql(name = "thumbnailURL")]
    pub thumbnail_url: String,
    /// Web path this media can be accessed at
    #[graphql(name = "webURL")]
    pub web_url: String,
    pub description: Option<String>,
}

impl From<MediaRecord> for Media {
    fn from(r: MediaRecord) -> Self {
        Self {
            id: ID(r.id.to_hex()),
            date: r.date,
            title: r.title,
            upload_date: r.upload_date,
            media_type: r.media_type,
            content_url: r.content_url,
            thumbnail_url: r.thumbnail_url,
            web_url: r.web_url,
            description: r.description,
        }
    }
}

/// A named, ordered group of media
#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct Collection {
    pub id: ID,
    pub title: String,
    pub description: Option<String>,
    /// Copies of the media taken when the collection was last written.
    /// Later edits to a media item do not show up here.
    pub media: Vec<Media>,
    /// Web path this collection can be accessed at
    #[graphql(name = "webURL")]
    pub web_url: String,
}

impl From<CollectionRecord> for Collection {
    fn from(r: CollectionRecord) -> Self {
        Self {
            id: ID(r.id.to_hex()),
            title: r.title,
            description: r.description,
            media: r.media.into_iter().map(Media::from).collect(),
            web_url: r.web_url,
        }
    }
}
