use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};

use crate::modules::comment::adapter::outgoing::sea_orm_entity as comments;
use crate::modules::media::application::domain::entities::MediaKind;
use crate::modules::media::application::domain::status::validate_status;
use crate::modules::tag::adapter::outgoing::sea_orm_entity as tags;

/// One table for every kind of media; `type` picks the kind.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "media")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_name = "type")]
    pub kind: MediaType,

    #[sea_orm(column_type = "String(StringLen::N(50))", unique)]
    pub slug: String,

    pub created_on: DateTimeWithTimeZone,

    pub modified_on: DateTimeWithTimeZone,

    pub publish_on: Option<DateTimeWithTimeZone>,

    // Bitmask, see domain::status
    pub status: i32,

    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub title: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,

    pub duration: i32,

    pub views: i32,

    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub upload_url: Option<String>,

    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub url: Option<String>,

    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub author_name: String,

    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub author_email: String,

    pub rating_sum: i32,

    pub rating_votes: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum MediaType {
    #[sea_orm(string_value = "audio")]
    Audio,

    #[sea_orm(string_value = "video")]
    Video,
}

impl From<MediaKind> for MediaType {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Audio => MediaType::Audio,
            MediaKind::Video => MediaType::Video,
        }
    }
}

impl From<MediaType> for MediaKind {
    fn from(kind: MediaType) -> Self {
        match kind {
            MediaType::Audio => MediaKind::Audio,
            MediaType::Video => MediaKind::Video,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::media_tags::Entity")]
    MediaTags,

    #[sea_orm(has_many = "super::media_comments::Entity")]
    MediaComments,
}

impl Related<super::media_tags::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaTags.def()
    }
}

impl Related<super::media_comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaComments.def()
    }
}

// Many-to-many: media <-> tags via media_tags
impl Related<tags::Entity> for Entity {
    fn to() -> RelationDef {
        super::media_tags::Relation::Tags.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::media_tags::Relation::Media.def().rev())
    }
}

// Many-to-many: media <-> comments via media_comments
impl Related<comments::Entity> for Entity {
    fn to() -> RelationDef {
        super::media_comments::Relation::Comments.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::media_comments::Relation::Media.def().rev())
    }
}

/// Marker carried by the `DbErr::Custom` raised for negative counters.
pub(crate) const NEGATIVE_COUNTER: &str = "must not be negative";

fn check_not_negative(column: &str, value: i32) -> Result<(), DbErr> {
    if value < 0 {
        return Err(DbErr::Custom(format!(
            "{column} {NEGATIVE_COUNTER}, got {value}"
        )));
    }
    Ok(())
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(status) = &self.status {
            validate_status(*status).map_err(|e| DbErr::Custom(e.to_string()))?;
        }

        if let ActiveValue::Set(duration) = &self.duration {
            check_not_negative("duration", *duration)?;
        }

        if let ActiveValue::Set(views) = &self.views {
            check_not_negative("views", *views)?;
        }

        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::Set;

            if !_insert {
                let mut model = self;
                model.modified_on = Set(Utc::now().into());
                return Ok(model);
            }
        }

        Ok(self)
    }
}
