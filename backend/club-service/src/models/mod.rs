/// Data models for club-service
///
/// Row structs for the six tables plus the domain enums:
/// - `PostCategory`: the fixed board category set
/// - `MediaKind`: image/video classification of an upload
/// - `CommentTarget`: the tagged form of a comment's parent reference;
///   persistence maps the tag onto three nullable columns
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

/// A registered club member account.
///
/// `password_hash` is an opaque credential written by the upstream identity
/// flow; this service never inspects it. The struct is not serializable so
/// the credential cannot leak into a response; the directory endpoint uses
/// [`MemberProfile`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub nickname: String,
    pub name: String,
    pub level: Option<String>,
    pub intro: Option<String>,
    pub is_approved: bool,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// Public view of a member for the directory listing.
#[derive(Debug, Clone, Serialize)]
pub struct MemberProfile {
    pub id: i64,
    pub nickname: String,
    pub name: String,
    pub level: Option<String>,
    pub intro: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for MemberProfile {
    fn from(user: User) -> Self {
        MemberProfile {
            id: user.id,
            nickname: user.nickname,
            name: user.name,
            level: user.level,
            intro: user.intro,
            is_admin: user.is_admin,
            created_at: user.created_at,
        }
    }
}

/// Board category. The set is closed; anything else is rejected with
/// `InvalidCategory` before it reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PostCategory {
    Notice,
    Free,
    Market,
    Suggestion,
}

impl PostCategory {
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "notice" => Ok(PostCategory::Notice),
            "free" => Ok(PostCategory::Free),
            "market" => Ok(PostCategory::Market),
            "suggestion" => Ok(PostCategory::Suggestion),
            other => Err(AppError::InvalidCategory(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PostCategory::Notice => "notice",
            PostCategory::Free => "free",
            PostCategory::Market => "market",
            PostCategory::Suggestion => "suggestion",
        }
    }

    /// Display title for the board listing.
    pub fn board_title(&self) -> &'static str {
        match self {
            PostCategory::Notice => "Notices",
            PostCategory::Free => "Free Board",
            PostCategory::Market => "Member Market",
            PostCategory::Suggestion => "Suggestions",
        }
    }
}

/// Stored media classification, derived from the upload's content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Anything that is not an image is treated as video, matching how the
    /// album has always classified uploads.
    pub fn from_mime(content_type: &mime::Mime) -> Self {
        if content_type.type_() == mime::IMAGE {
            MediaKind::Image
        } else {
            MediaKind::Video
        }
    }
}

/// A board post. The media attachment is optional.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: i64,
    pub category: PostCategory,
    pub title: String,
    pub content: String,
    pub media_path: Option<String>,
    pub media_kind: Option<MediaKind>,
    pub author_id: Option<i64>,
    pub author_nickname: String,
    pub created_at: DateTime<Utc>,
}

/// A match/practice schedule entry. `event_time` is free-form text the way
/// members actually write it ("19:00", "after practice").
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScheduleEvent {
    pub id: i64,
    pub title: String,
    pub event_date: NaiveDate,
    pub event_time: Option<String>,
    pub location: Option<String>,
    pub author_id: Option<i64>,
    pub author_nickname: String,
    pub created_at: DateTime<Utc>,
}

/// A photo or video in the club album.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AlbumItem {
    pub id: i64,
    pub caption: Option<String>,
    pub media_path: String,
    pub media_kind: MediaKind,
    pub uploader_id: Option<i64>,
    pub uploader_nickname: String,
    pub created_at: DateTime<Utc>,
}

/// A link-style news entry.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NewsItem {
    pub id: i64,
    pub title: String,
    pub link: String,
    pub author_id: Option<i64>,
    pub author_nickname: String,
    pub created_at: DateTime<Utc>,
}

/// The parent a comment is attached to. Exactly one of the three stored
/// references is ever set; this enum is the honest shape of that row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentTarget {
    Post(i64),
    Schedule(i64),
    Album(i64),
}

impl CommentTarget {
    /// Parse the `{kind}/{id}` pair from a comment route.
    pub fn parse(kind: &str, id: i64) -> Result<Self, AppError> {
        match kind {
            "post" => Ok(CommentTarget::Post(id)),
            "schedule" => Ok(CommentTarget::Schedule(id)),
            "album" => Ok(CommentTarget::Album(id)),
            other => Err(AppError::InvalidTargetKind(other.to_string())),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CommentTarget::Post(_) => "post",
            CommentTarget::Schedule(_) => "schedule",
            CommentTarget::Album(_) => "album",
        }
    }

    pub fn parent_id(&self) -> i64 {
        match self {
            CommentTarget::Post(id) | CommentTarget::Schedule(id) | CommentTarget::Album(id) => {
                *id
            }
        }
    }

    /// Canonical location of the parent, used as the redirect target after
    /// comment mutations.
    pub fn location(&self) -> String {
        match self {
            CommentTarget::Post(id) => format!("/community/post/{}", id),
            CommentTarget::Schedule(id) => format!("/schedule/{}", id),
            CommentTarget::Album(id) => format!("/album/{}", id),
        }
    }
}

/// A comment under a post, schedule event or album item.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub author_id: Option<i64>,
    pub author_nickname: String,
    pub post_id: Option<i64>,
    pub schedule_id: Option<i64>,
    pub album_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Resolve which parent this comment belongs to.
    ///
    /// The creation path and the schema CHECK both guarantee exactly one
    /// reference; if a row ever carries more than one anyway, the post >
    /// schedule > album order wins and the anomaly is logged instead of
    /// silently ignored. A row with none is an invariant violation.
    pub fn target(&self) -> Result<CommentTarget, AppError> {
        let references = [
            self.post_id.is_some(),
            self.schedule_id.is_some(),
            self.album_id.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count();

        if references > 1 {
            tracing::warn!(
                comment_id = self.id,
                references,
                "comment row references more than one parent"
            );
        }

        if let Some(id) = self.post_id {
            Ok(CommentTarget::Post(id))
        } else if let Some(id) = self.schedule_id {
            Ok(CommentTarget::Schedule(id))
        } else if let Some(id) = self.album_id {
            Ok(CommentTarget::Album(id))
        } else {
            Err(AppError::OrphanedComment(self.id))
        }
    }
}
