use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr, TransactionTrait,
    sea_query::{Expr, Query},
};
use uuid::Uuid;

use modshelf_schema::{mod_entries, mod_lists, users};

use crate::domain::repository::{ModEntryRepository, ModListRepository, UserRepository};
use crate::domain::types::{
    ModEntry, ModList, ModListChanges, ModListDetail, ModListOwner, ModListSummary, User,
};
use crate::error::ApiError;

/// Entries loaded per list in browse views.
const PREVIEW_MODS: u64 = 5;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find user by username")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), ApiError> {
        users::ActiveModel {
            id: Set(user.id),
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        email: model.email,
        password_hash: model.password_hash,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Mod list repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbModListRepository {
    pub db: DatabaseConnection,
}

impl DbModListRepository {
    /// Attach the preview entries and total count (and optionally the owner)
    /// to a list row.
    async fn summarize(
        &self,
        model: mod_lists::Model,
        with_owner: bool,
    ) -> Result<ModListSummary, ApiError> {
        let preview = mod_entries::Entity::find()
            .filter(mod_entries::Column::ModListId.eq(model.id))
            .order_by_desc(mod_entries::Column::AddedAt)
            .limit(PREVIEW_MODS)
            .all(&self.db)
            .await
            .context("load mod preview")?;

        let mod_count = mod_entries::Entity::find()
            .filter(mod_entries::Column::ModListId.eq(model.id))
            .count(&self.db)
            .await
            .context("count mods")?;

        let owner = if with_owner {
            users::Entity::find_by_id(model.user_id)
                .one(&self.db)
                .await
                .context("load list owner")?
                .map(|u| ModListOwner {
                    id: u.id,
                    username: u.username,
                })
        } else {
            None
        };

        Ok(ModListSummary {
            list: mod_list_from_model(model),
            preview: preview.into_iter().map(mod_entry_from_model).collect(),
            mod_count,
            owner,
        })
    }

    async fn load_detail(&self, model: mod_lists::Model) -> Result<ModListDetail, ApiError> {
        let mods = mod_entries::Entity::find()
            .filter(mod_entries::Column::ModListId.eq(model.id))
            .order_by_desc(mod_entries::Column::AddedAt)
            .all(&self.db)
            .await
            .context("load mod entries")?;
        Ok(ModListDetail {
            list: mod_list_from_model(model),
            mods: mods.into_iter().map(mod_entry_from_model).collect(),
        })
    }
}

impl ModListRepository for DbModListRepository {
    async fn create(&self, list: &ModList) -> Result<(), ApiError> {
        mod_list_active_model(list)
            .insert(&self.db)
            .await
            .context("create mod list")?;
        Ok(())
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<ModListSummary>, ApiError> {
        let models = mod_lists::Entity::find()
            .filter(mod_lists::Column::UserId.eq(user_id))
            .order_by_desc(mod_lists::Column::UpdatedAt)
            .all(&self.db)
            .await
            .context("list mod lists by user")?;

        let mut results = Vec::with_capacity(models.len());
        for model in models {
            results.push(self.summarize(model, false).await?);
        }
        Ok(results)
    }

    async fn list_public(&self) -> Result<Vec<ModListSummary>, ApiError> {
        let models = mod_lists::Entity::find()
            .filter(mod_lists::Column::IsPublic.eq(true))
            .order_by_desc(mod_lists::Column::UpdatedAt)
            .all(&self.db)
            .await
            .context("list public mod lists")?;

        let mut results = Vec::with_capacity(models.len());
        for model in models {
            results.push(self.summarize(model, true).await?);
        }
        Ok(results)
    }

    async fn get_owned(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<ModListDetail>, ApiError> {
        let model = mod_lists::Entity::find_by_id(id)
            .filter(mod_lists::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("get owned mod list")?;
        match model {
            Some(model) => Ok(Some(self.load_detail(model).await?)),
            None => Ok(None),
        }
    }

    async fn get_public(&self, id: Uuid) -> Result<Option<ModListDetail>, ApiError> {
        let model = mod_lists::Entity::find_by_id(id)
            .filter(mod_lists::Column::IsPublic.eq(true))
            .one(&self.db)
            .await
            .context("get public mod list")?;
        match model {
            Some(model) => Ok(Some(self.load_detail(model).await?)),
            None => Ok(None),
        }
    }

    async fn is_owned(&self, id: Uuid, user_id: Uuid) -> Result<bool, ApiError> {
        let model = mod_lists::Entity::find_by_id(id)
            .filter(mod_lists::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("check mod list ownership")?;
        Ok(model.is_some())
    }

    async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        changes: &ModListChanges,
    ) -> Result<bool, ApiError> {
        let mut query = mod_lists::Entity::update_many()
            .filter(mod_lists::Column::Id.eq(id))
            .filter(mod_lists::Column::UserId.eq(user_id));
        if let Some(name) = &changes.name {
            query = query.col_expr(mod_lists::Column::Name, Expr::value(name.clone()));
        }
        if let Some(description) = &changes.description {
            query = query.col_expr(
                mod_lists::Column::Description,
                Expr::value(description.clone()),
            );
        }
        if let Some(is_public) = changes.is_public {
            query = query.col_expr(mod_lists::Column::IsPublic, Expr::value(is_public));
        }
        query = query.col_expr(mod_lists::Column::UpdatedAt, Expr::value(Utc::now()));

        let result = query.exec(&self.db).await.context("update mod list")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<bool, ApiError> {
        let result = mod_lists::Entity::delete_many()
            .filter(mod_lists::Column::Id.eq(id))
            .filter(mod_lists::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .context("delete mod list")?;
        Ok(result.rows_affected > 0)
    }

    async fn list_containing(
        &self,
        user_id: Uuid,
        mod_slug: &str,
    ) -> Result<Vec<ModListSummary>, ApiError> {
        let models = mod_lists::Entity::find()
            .filter(mod_lists::Column::UserId.eq(user_id))
            .filter(
                mod_lists::Column::Id.in_subquery(
                    Query::select()
                        .column(mod_entries::Column::ModListId)
                        .from(mod_entries::Entity)
                        .and_where(Expr::col(mod_entries::Column::ModSlug).eq(mod_slug))
                        .to_owned(),
                ),
            )
            .order_by_desc(mod_lists::Column::UpdatedAt)
            .all(&self.db)
            .await
            .context("list mod lists containing slug")?;

        let mut results = Vec::with_capacity(models.len());
        for model in models {
            results.push(self.summarize(model, false).await?);
        }
        Ok(results)
    }

    async fn insert_with_mods(&self, list: &ModList, mods: &[ModEntry]) -> Result<(), ApiError> {
        let list = list.clone();
        let mods = mods.to_vec();
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    mod_list_active_model(&list).insert(txn).await?;
                    for entry in &mods {
                        mod_entry_active_model(entry).insert(txn).await?;
                    }
                    Ok(())
                })
            })
            .await
            .context("insert mod list with entries")?;
        Ok(())
    }
}

fn mod_list_from_model(model: mod_lists::Model) -> ModList {
    ModList {
        id: model.id,
        user_id: model.user_id,
        name: model.name,
        description: model.description,
        is_public: model.is_public,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn mod_list_active_model(list: &ModList) -> mod_lists::ActiveModel {
    mod_lists::ActiveModel {
        id: Set(list.id),
        user_id: Set(list.user_id),
        name: Set(list.name.clone()),
        description: Set(list.description.clone()),
        is_public: Set(list.is_public),
        created_at: Set(list.created_at),
        updated_at: Set(list.updated_at),
    }
}

// ── Mod entry repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbModEntryRepository {
    pub db: DatabaseConnection,
}

impl ModEntryRepository for DbModEntryRepository {
    async fn add(&self, entry: &ModEntry) -> Result<(), ApiError> {
        match mod_entry_active_model(entry).insert(&self.db).await {
            Ok(_) => Ok(()),
            // The (mod_list_id, mod_slug) unique index answers "already added".
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(ApiError::ModAlreadyInList),
                _ => Err(anyhow::Error::from(e).context("insert mod entry").into()),
            },
        }
    }

    async fn remove(&self, mod_list_id: Uuid, mod_slug: &str) -> Result<u64, ApiError> {
        let result = mod_entries::Entity::delete_many()
            .filter(mod_entries::Column::ModListId.eq(mod_list_id))
            .filter(mod_entries::Column::ModSlug.eq(mod_slug))
            .exec(&self.db)
            .await
            .context("remove mod entry")?;
        Ok(result.rows_affected)
    }

    async fn contains(&self, mod_list_id: Uuid, mod_slug: &str) -> Result<bool, ApiError> {
        let model = mod_entries::Entity::find()
            .filter(mod_entries::Column::ModListId.eq(mod_list_id))
            .filter(mod_entries::Column::ModSlug.eq(mod_slug))
            .one(&self.db)
            .await
            .context("check mod entry membership")?;
        Ok(model.is_some())
    }
}

fn mod_entry_from_model(model: mod_entries::Model) -> ModEntry {
    ModEntry {
        id: model.id,
        mod_list_id: model.mod_list_id,
        mod_slug: model.mod_slug,
        mod_title: model.mod_title,
        mod_icon_url: model.mod_icon_url,
        mod_author: model.mod_author,
        added_at: model.added_at,
    }
}

fn mod_entry_active_model(entry: &ModEntry) -> mod_entries::ActiveModel {
    mod_entries::ActiveModel {
        id: Set(entry.id),
        mod_list_id: Set(entry.mod_list_id),
        mod_slug: Set(entry.mod_slug.clone()),
        mod_title: Set(entry.mod_title.clone()),
        mod_icon_url: Set(entry.mod_icon_url.clone()),
        mod_author: Set(entry.mod_author.clone()),
        added_at: Set(entry.added_at),
    }
}
