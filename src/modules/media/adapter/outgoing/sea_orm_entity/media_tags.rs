use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::tag::adapter::outgoing::sea_orm_entity as tags;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "media_tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub media_id: i32,

    #[sea_orm(primary_key, auto_increment = false)]
    pub tag_id: i32,
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
        belongs_to = "crate::modules::tag::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::TagId",
        to = "crate::modules::tag::adapter::outgoing::sea_orm_entity::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Tags,
}

impl Related<super::media::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Media.def()
    }
}

impl Related<tags::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tags.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
