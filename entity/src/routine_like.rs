use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "routine_like")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_email: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub routine_id: i64,
    pub created_at: DateTimeUtc,
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

    #[sea_orm(
        belongs_to = "super::routine::Entity",
        from = "Column::RoutineId",
        to = "super::routine::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Routine,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::routine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Routine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
