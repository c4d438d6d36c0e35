use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Email,
}

#[derive(DeriveIden)]
enum Routine {
    Table,
    Id,
    UserEmail,
    Title,
    Content,
    Duration,
    Division,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Day {
    Table,
    Id,
    RoutineId,
    DayNumber,
}

#[derive(DeriveIden)]
enum ExerciseDetail {
    Table,
    Id,
    DayId,
    ExerciseName,
    SetCount,
    RepetitionCount,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline so the same script runs on both
        // Postgres and the embedded sqlite backend used by the test suite.
        m.create_table(
            Table::create()
                .table(Routine::Table)
                .col(
                    ColumnDef::new(Routine::Id)
                        .big_integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(Routine::UserEmail).string().not_null())
                .col(ColumnDef::new(Routine::Title).string().not_null())
                .col(ColumnDef::new(Routine::Content).text().not_null())
                .col(ColumnDef::new(Routine::Duration).integer().not_null())
                .col(ColumnDef::new(Routine::Division).integer().not_null())
                .col(
                    ColumnDef::new(Routine::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(Routine::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_routine_user")
                        .from(Routine::Table, Routine::UserEmail)
                        .to(User::Table, User::Email)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_routine_user")
                .table(Routine::Table)
                .col(Routine::UserEmail)
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_routine_division")
                .table(Routine::Table)
                .col(Routine::Division)
                .to_owned(),
        )
        .await?;

        m.create_table(
            Table::create()
                .table(Day::Table)
                .col(
                    ColumnDef::new(Day::Id)
                        .big_integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(Day::RoutineId).big_integer().not_null())
                .col(ColumnDef::new(Day::DayNumber).integer().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_day_routine")
                        .from(Day::Table, Day::RoutineId)
                        .to(Routine::Table, Routine::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_day_routine")
                .table(Day::Table)
                .col(Day::RoutineId)
                .to_owned(),
        )
        .await?;

        m.create_table(
            Table::create()
                .table(ExerciseDetail::Table)
                .col(
                    ColumnDef::new(ExerciseDetail::Id)
                        .big_integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(ExerciseDetail::DayId).big_integer().not_null())
                .col(ColumnDef::new(ExerciseDetail::ExerciseName).string().not_null())
                .col(ColumnDef::new(ExerciseDetail::SetCount).integer().not_null())
                .col(
                    ColumnDef::new(ExerciseDetail::RepetitionCount)
                        .integer()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_exercise_detail_day")
                        .from(ExerciseDetail::Table, ExerciseDetail::DayId)
                        .to(Day::Table, Day::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_exercise_detail_day")
                .table(ExerciseDetail::Table)
                .col(ExerciseDetail::DayId)
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(
            Table::drop()
                .table(ExerciseDetail::Table)
                .if_exists()
                .to_owned(),
        )
        .await?;
        m.drop_table(Table::drop().table(Day::Table).if_exists().to_owned())
            .await?;
        m.drop_table(Table::drop().table(Routine::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
