use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set, TransactionTrait,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use crate::modules::tag::adapter::outgoing::sea_orm_entity::{ActiveModel, Column, Entity};
use crate::modules::tag::application::domain::entities::{slugify, Tag};
use crate::modules::tag::application::ports::outgoing::{TagRepository, TagRepositoryError};

#[derive(Debug, Clone)]
pub struct TagRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TagRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> TagRepositoryError {
    TagRepositoryError::DatabaseError(e.to_string())
}

/// (name, slug) pairs, first spelling wins per slug, empty slugs dropped.
fn unique_by_slug(names: Vec<String>) -> Vec<(String, String)> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter_map(|name| {
            let name = name.trim().to_string();
            let slug = slugify(&name);
            if slug.is_empty() || !seen.insert(slug.clone()) {
                return None;
            }
            Some((name, slug))
        })
        .collect()
}

#[async_trait]
impl TagRepository for TagRepositoryPostgres {
    async fn fetch_and_create_tags(
        &self,
        names: Vec<String>,
    ) -> Result<Vec<Tag>, TagRepositoryError> {
        let wanted = unique_by_slug(names);
        if wanted.is_empty() {
            return Ok(Vec::new());
        }

        let slugs: Vec<String> = wanted.iter().map(|(_, slug)| slug.clone()).collect();
        let rows = wanted.iter().map(|(name, slug)| ActiveModel {
            name: Set(name.clone()),
            slug: Set(slug.clone()),
            ..Default::default()
        });

        let txn = self.db.begin().await.map_err(map_db_err)?;

        // Existing slugs are left alone; the select below picks them up.
        let inserted = match Entity::insert_many(rows)
            .on_conflict(OnConflict::column(Column::Slug).do_nothing().to_owned())
            .exec_without_returning(&txn)
            .await
        {
            Ok(n) => n,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(map_db_err(e));
            }
        };

        let found = match Entity::find()
            .filter(Column::Slug.is_in(slugs.clone()))
            .all(&txn)
            .await
        {
            Ok(found) => found,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(map_db_err(e));
            }
        };

        txn.commit().await.map_err(map_db_err)?;

        debug!(
            requested = slugs.len(),
            created = inserted,
            "Resolved tags"
        );

        let tags = slugs
            .iter()
            .filter_map(|slug| found.iter().find(|m| &m.slug == slug))
            .map(|m| m.to_domain())
            .collect();

        Ok(tags)
    }
}
