mod attach_media_comment_service;
mod create_media_service;
mod delete_media_service;
mod get_media_service;
mod rate_media_service;
mod set_media_tags_service;
mod update_media_status_service;

pub use attach_media_comment_service::AttachMediaCommentService;
pub use create_media_service::CreateMediaService;
pub use delete_media_service::DeleteMediaService;
pub use get_media_service::GetMediaService;
pub use rate_media_service::RateMediaService;
pub use set_media_tags_service::SetMediaTagsService;
pub use update_media_status_service::UpdateMediaStatusService;
