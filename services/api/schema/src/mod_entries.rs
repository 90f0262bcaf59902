use sea_orm::entity::prelude::*;

/// One mod's presence record inside a list. `mod_slug` is the external
/// catalog's identifier, unique per list (enforced by a unique index on
/// `(mod_list_id, mod_slug)` in the migration).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mod_entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub mod_list_id: Uuid,
    pub mod_slug: String,
    pub mod_title: String,
    pub mod_icon_url: Option<String>,
    pub mod_author: String,
    pub added_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mod_lists::Entity",
        from = "Column::ModListId",
        to = "super::mod_lists::Column::Id"
    )]
    ModList,
}

impl Related<super::mod_lists::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModList.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
