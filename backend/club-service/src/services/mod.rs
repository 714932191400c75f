/// Business logic layer
///
/// One service per aggregate, each a thin struct over the SQLite pool.
/// Mutations all follow the same discipline: load the row (not-found wins),
/// check `can_mutate`, then write.
pub mod album;
pub mod comments;
pub mod media;
pub mod news;
pub mod posts;
pub mod schedule;
pub mod users;

pub use album::AlbumService;
pub use comments::CommentService;
pub use media::{MediaStore, StoredMedia};
pub use news::NewsService;
pub use posts::PostService;
pub use schedule::ScheduleService;
pub use users::{NewMember, UserService};
