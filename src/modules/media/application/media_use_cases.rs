use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::modules::media::adapter::outgoing::{
    MediaCommentRepositoryPostgres, MediaRepositoryPostgres, MediaTagRepositoryPostgres,
};
use crate::modules::media::application::ports::incoming::use_cases::{
    AttachMediaCommentUseCase, CreateMediaUseCase, DeleteMediaUseCase, GetMediaUseCase,
    RateMediaUseCase, SetMediaTagsUseCase, UpdateMediaStatusUseCase,
};
use crate::modules::media::application::service::{
    AttachMediaCommentService, CreateMediaService, DeleteMediaService, GetMediaService,
    RateMediaService, SetMediaTagsService, UpdateMediaStatusService,
};
use crate::modules::tag::adapter::outgoing::TagRepositoryPostgres;

#[derive(Clone)]
pub struct MediaUseCases {
    pub create: Arc<dyn CreateMediaUseCase + Send + Sync>,
    pub get: Arc<dyn GetMediaUseCase + Send + Sync>,
    pub update_status: Arc<dyn UpdateMediaStatusUseCase + Send + Sync>,
    pub set_tags: Arc<dyn SetMediaTagsUseCase + Send + Sync>,
    pub attach_comment: Arc<dyn AttachMediaCommentUseCase + Send + Sync>,
    pub rate: Arc<dyn RateMediaUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteMediaUseCase + Send + Sync>,
}

impl MediaUseCases {
    /// Wires every use case against Postgres repositories sharing one pool.
    pub fn postgres(db: Arc<DatabaseConnection>) -> Self {
        let media_repo = MediaRepositoryPostgres::new(db.clone());
        let media_tag_repo = MediaTagRepositoryPostgres::new(db.clone());
        let media_comment_repo = MediaCommentRepositoryPostgres::new(db.clone());
        let tag_repo = TagRepositoryPostgres::new(db);

        Self {
            create: Arc::new(CreateMediaService::new(media_repo.clone())),
            get: Arc::new(GetMediaService::new(
                media_repo.clone(),
                media_tag_repo.clone(),
                media_comment_repo.clone(),
            )),
            update_status: Arc::new(UpdateMediaStatusService::new(media_repo.clone())),
            set_tags: Arc::new(SetMediaTagsService::new(
                media_repo.clone(),
                tag_repo,
                media_tag_repo,
            )),
            attach_comment: Arc::new(AttachMediaCommentService::new(media_comment_repo)),
            rate: Arc::new(RateMediaService::new(media_repo.clone())),
            delete: Arc::new(DeleteMediaService::new(media_repo)),
        }
    }
}
