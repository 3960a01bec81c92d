use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::comment::application::domain::entities::Comment;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_name = "type", column_type = "String(StringLen::N(15))", nullable)]
    pub comment_type: Option<String>,

    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub subject: Option<String>,

    pub created_on: DateTimeWithTimeZone,

    pub modified_on: DateTimeWithTimeZone,

    pub status: i32,

    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub author_name: String,

    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub author_email: Option<String>,

    pub author_ip: i64,

    #[sea_orm(column_type = "Text")]
    pub body: String,
}

impl Model {
    pub fn to_domain(&self) -> Comment {
        Comment {
            id: self.id,
            comment_type: self.comment_type.clone(),
            subject: self.subject.clone(),
            created_on: self.created_on.into(),
            modified_on: self.modified_on.into(),
            status: self.status,
            author_name: self.author_name.clone(),
            author_email: self.author_email.clone(),
            author_ip: self.author_ip,
            body: self.body.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_one = "crate::modules::media::adapter::outgoing::sea_orm_entity::media_comments::Entity"
    )]
    MediaComments,
}

impl Related<crate::modules::media::adapter::outgoing::sea_orm_entity::media_comments::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::MediaComments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
