use sea_orm::entity::prelude::*;

/// Account record. `password_hash` is an Argon2id PHC string and never leaves
/// the service.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mod_lists::Entity")]
    ModLists,
}

impl Related<super::mod_lists::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModLists.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
