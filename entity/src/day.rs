use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "day")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub routine_id: i64,
    /// Position of this day inside its routine, starting at 1.
    pub day_number: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::routine::Entity",
        from = "Column::RoutineId",
        to = "super::routine::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Routine,

    #[sea_orm(has_many = "super::exercise_detail::Entity")]
    ExerciseDetail,
}

impl Related<super::routine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Routine.def()
    }
}

impl Related<super::exercise_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExerciseDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
