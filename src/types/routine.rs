use entity::{day, exercise_detail, routine};
use serde::{Deserialize, Serialize};

use crate::types::page::Slice;

/// Authorship restriction applied to a routine feed query. Modeled as a sum
/// type so "no filter" and "filter by nothing" cannot be confused.
#[derive(Debug, Clone)]
pub enum AuthorScope {
    Any,
    Nickname(String),
    Emails(Vec<String>),
}

#[derive(Serialize, Deserialize)]
pub struct RoutineCreate {
    pub title: String,
    pub content: String,
    pub duration: i32,
    pub division: i32,
    #[serde(default)]
    pub days: Vec<DayCreate>,
}

#[derive(Serialize, Deserialize)]
pub struct DayCreate {
    pub day_number: i32,
    #[serde(default)]
    pub exercises: Vec<ExerciseCreate>,
}

#[derive(Serialize, Deserialize)]
pub struct ExerciseCreate {
    pub exercise_name: String,
    pub set_count: i32,
    pub repetition_count: i32,
}

#[derive(Serialize, Deserialize)]
pub struct RoutineCreateRes {
    pub id: i64,
}

#[derive(Serialize, Deserialize)]
pub struct RoutineSummary {
    pub id: i64,
    pub author_email: String,
    pub title: String,
    pub content: String,
    pub duration: i32,
    pub division: i32,
}

impl From<routine::Model> for RoutineSummary {
    fn from(model: routine::Model) -> Self {
        RoutineSummary {
            id: model.id,
            author_email: model.user_email,
            title: model.title,
            content: model.content,
            duration: model.duration,
            division: model.division,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct RoutineSliceRes {
    pub routines: Vec<RoutineSummary>,
    pub has_next: bool,
}

impl From<Slice<routine::Model>> for RoutineSliceRes {
    fn from(slice: Slice<routine::Model>) -> Self {
        let slice = slice.map(RoutineSummary::from);
        RoutineSliceRes {
            routines: slice.items,
            has_next: slice.has_next,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct DayRes {
    pub day_number: i32,
    pub exercises: Vec<ExerciseRes>,
}

#[derive(Serialize, Deserialize)]
pub struct ExerciseRes {
    pub exercise_name: String,
    pub set_count: i32,
    pub repetition_count: i32,
}

#[derive(Serialize, Deserialize)]
pub struct RoutineDetailRes {
    #[serde(flatten)]
    pub routine: RoutineSummary,
    pub days: Vec<DayRes>,
}

impl RoutineDetailRes {
    pub fn from_parts(
        routine: routine::Model,
        days: Vec<(day::Model, Vec<exercise_detail::Model>)>,
    ) -> Self {
        RoutineDetailRes {
            routine: routine.into(),
            days: days
                .into_iter()
                .map(|(day, exercises)| DayRes {
                    day_number: day.day_number,
                    exercises: exercises
                        .into_iter()
                        .map(|e| ExerciseRes {
                            exercise_name: e.exercise_name,
                            set_count: e.set_count,
                            repetition_count: e.repetition_count,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct LikeCountRes {
    pub like_count: u64,
}

#[derive(Serialize, Deserialize)]
pub struct ScrapCountRes {
    pub scrap_count: u64,
}

#[derive(Deserialize)]
pub struct RoutineListQuery {
    pub division: Option<i32>,
    pub author: Option<String>,
    pub page: Option<u64>,
    pub size: Option<u64>,
}
