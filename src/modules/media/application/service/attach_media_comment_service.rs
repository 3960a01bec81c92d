use async_trait::async_trait;

use crate::modules::media::application::ports::incoming::use_cases::{
    AttachMediaCommentError, AttachMediaCommentUseCase,
};
use crate::modules::media::application::ports::outgoing::MediaCommentRepository;

pub struct AttachMediaCommentService<C>
where
    C: MediaCommentRepository,
{
    repo: C,
}

impl<C> AttachMediaCommentService<C>
where
    C: MediaCommentRepository,
{
    pub fn new(repo: C) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<C> AttachMediaCommentUseCase for AttachMediaCommentService<C>
where
    C: MediaCommentRepository + Send + Sync,
{
    async fn execute(
        &self,
        media_id: i32,
        comment_id: i32,
    ) -> Result<(), AttachMediaCommentError> {
        self.repo
            .attach_comment(media_id, comment_id)
            .await
            .map_err(AttachMediaCommentError::from)
    }
}
