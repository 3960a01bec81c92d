use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::modules::media::adapter::outgoing::sea_orm_entity::{media, media_tags};
use crate::modules::tag::application::domain::entities::Tag;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "String(StringLen::N(50))", unique)]
    pub name: String,

    #[sea_orm(column_type = "String(StringLen::N(50))", unique)]
    pub slug: String,
}

impl Model {
    pub fn to_domain(&self) -> Tag {
        Tag {
            id: self.id,
            name: self.name.clone(),
            slug: self.slug.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "media_tags::Entity")]
    MediaTags,
}

impl Related<media_tags::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaTags.def()
    }
}

// Many-to-many: tags <-> media via media_tags
impl Related<media::Entity> for Entity {
    fn to() -> RelationDef {
        media_tags::Relation::Media.def()
    }

    fn via() -> Option<RelationDef> {
        Some(media_tags::Relation::Tags.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(name) = &self.name {
            self.name = Set(name.trim().to_string());
        }

        if let ActiveValue::Set(slug) = &self.slug {
            self.slug = Set(slug.trim().to_lowercase());
        }

        Ok(self)
    }
}
