use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "routine")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_email: String,
    pub title: String,
    pub content: String,
    /// Planned length of the routine in days.
    pub duration: i32,
    /// Training-split category code (e.g. push/pull/legs).
    pub division: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserEmail",
        to = "super::user::Column::Email",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,

    #[sea_orm(has_many = "super::day::Entity")]
    Day,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::day::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Day.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
