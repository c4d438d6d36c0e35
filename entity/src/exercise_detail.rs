use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exercise_detail")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub day_id: i64,
    pub exercise_name: String,
    pub set_count: i32,
    pub repetition_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::day::Entity",
        from = "Column::DayId",
        to = "super::day::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Day,
}

impl Related<super::day::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Day.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
