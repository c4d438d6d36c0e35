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
}

#[derive(DeriveIden)]
enum RoutineLike {
    Table,
    UserEmail,
    RoutineId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum RoutineScrap {
    Table,
    UserEmail,
    RoutineId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Follow {
    Table,
    FollowerEmail,
    FolloweeEmail,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // The composite primary keys double as the uniqueness constraint the
        // like/scrap/follow toggles rely on: inserts use ON CONFLICT DO
        // NOTHING against them, so a lost race means "already present".
        m.create_table(
            Table::create()
                .table(RoutineLike::Table)
                .col(ColumnDef::new(RoutineLike::UserEmail).string().not_null())
                .col(ColumnDef::new(RoutineLike::RoutineId).big_integer().not_null())
                .col(
                    ColumnDef::new(RoutineLike::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp()),
                )
                .primary_key(
                    Index::create()
                        .name("pk_routine_like")
                        .col(RoutineLike::UserEmail)
                        .col(RoutineLike::RoutineId),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_routine_like_user")
                        .from(RoutineLike::Table, RoutineLike::UserEmail)
                        .to(User::Table, User::Email)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_routine_like_routine")
                        .from(RoutineLike::Table, RoutineLike::RoutineId)
                        .to(Routine::Table, Routine::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_routine_like_routine")
                .table(RoutineLike::Table)
                .col(RoutineLike::RoutineId)
                .to_owned(),
        )
        .await?;

        m.create_table(
            Table::create()
                .table(RoutineScrap::Table)
                .col(ColumnDef::new(RoutineScrap::UserEmail).string().not_null())
                .col(ColumnDef::new(RoutineScrap::RoutineId).big_integer().not_null())
                .col(
                    ColumnDef::new(RoutineScrap::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp()),
                )
                .primary_key(
                    Index::create()
                        .name("pk_routine_scrap")
                        .col(RoutineScrap::UserEmail)
                        .col(RoutineScrap::RoutineId),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_routine_scrap_user")
                        .from(RoutineScrap::Table, RoutineScrap::UserEmail)
                        .to(User::Table, User::Email)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_routine_scrap_routine")
                        .from(RoutineScrap::Table, RoutineScrap::RoutineId)
                        .to(Routine::Table, Routine::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_routine_scrap_user")
                .table(RoutineScrap::Table)
                .col(RoutineScrap::UserEmail)
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_routine_scrap_routine")
                .table(RoutineScrap::Table)
                .col(RoutineScrap::RoutineId)
                .to_owned(),
        )
        .await?;

        m.create_table(
            Table::create()
                .table(Follow::Table)
                .col(ColumnDef::new(Follow::FollowerEmail).string().not_null())
                .col(ColumnDef::new(Follow::FolloweeEmail).string().not_null())
                .col(
                    ColumnDef::new(Follow::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp()),
                )
                .primary_key(
                    Index::create()
                        .name("pk_follow")
                        .col(Follow::FollowerEmail)
                        .col(Follow::FolloweeEmail),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_follow_follower")
                        .from(Follow::Table, Follow::FollowerEmail)
                        .to(User::Table, User::Email)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_follow_followee")
                        .from(Follow::Table, Follow::FolloweeEmail)
                        .to(User::Table, User::Email)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_follow_follower")
                .table(Follow::Table)
                .col(Follow::FollowerEmail)
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Follow::Table).if_exists().to_owned())
            .await?;
        m.drop_table(
            Table::drop()
                .table(RoutineScrap::Table)
                .if_exists()
                .to_owned(),
        )
        .await?;
        m.drop_table(
            Table::drop()
                .table(RoutineLike::Table)
                .if_exists()
                .to_owned(),
        )
        .await?;
        Ok(())
    }
}
