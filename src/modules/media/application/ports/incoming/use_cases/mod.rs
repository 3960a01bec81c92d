mod attach_media_comment;
mod create_media;
mod delete_media;
mod get_media;
mod rate_media;
mod set_media_tags;
mod update_media_status;

pub use attach_media_comment::{AttachMediaCommentError, AttachMediaCommentUseCase};
pub use create_media::{CreateMediaError, CreateMediaUseCase};
pub use delete_media::{DeleteMediaError, DeleteMediaUseCase};
pub use get_media::{GetMediaError, GetMediaUseCase};
pub use rate_media::{RateMediaError, RateMediaUseCase, MAX_SCORE, MIN_SCORE};
pub use set_media_tags::{SetMediaTagsError, SetMediaTagsUseCase, TagSelection};
pub use update_media_status::{StatusChange, UpdateMediaStatusError, UpdateMediaStatusUseCase};
