/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Experiments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Experiments::Title).string().not_null())
                    .col(ColumnDef::new(Experiments::Description).text().not_null())
                    .col(ColumnDef::new(Experiments::ModelType).string().not_null())
                    .col(ColumnDef::new(Experiments::Status).string().not_null())
                    .col(ColumnDef::new(Experiments::Accuracy).double())
                    .col(
                        ColumnDef::new(Experiments::IsPublic)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Experiments::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Experiments::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Secondary indexes so filtered listing stays cheap as rows grow
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-experiments-status")
                    .table(Experiments::Table)
                    .col(Experiments::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-experiments-model_type")
                    .table(Experiments::Table)
                    .col(Experiments::ModelType)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-experiments-is_public")
                    .table(Experiments::Table)
                    .col(Experiments::IsPublic)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Experiments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experiments {
    Table,
    Id,
    Title,
    Description,
    ModelType,
    Status,
    Accuracy,
    IsPublic,
    CreatedAt,
    UpdatedAt,
}
