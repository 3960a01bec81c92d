use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::comment::adapter::outgoing::sea_orm_entity as comments;

/// A comment belongs to at most one media record: `comment_id` is unique on
/// top of the composite key.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "media_comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub media_id: i32,

    #[sea_orm(primary_key, auto_increment = false, unique)]
    pub comment_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::media::Entity",
        from = "Column::MediaId",
        to = "super::media::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Media,

    #[sea_orm(
        belongs_to = "crate::modules::comment::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::CommentId",
        to = "crate::modules::comment::adapter::outgoing::sea_orm_entity::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Comments,
}

impl Related<super::media::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Media.def()
    }
}

impl Related<comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
