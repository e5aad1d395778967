use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202601050005_create_route_assignments"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("route_assignments"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("route_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("student_id")).integer().not_null())
                    .col(
                        ColumnDef::new(Alias::new("pickup_latitude"))
                            .decimal_len(10, 8)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("pickup_longitude"))
                            .decimal_len(11, 8)
                            .null(),
                    )
                    .col(ColumnDef::new(Alias::new("pickup_order")).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_route_assignments_route")
                            .from(Alias::new("route_assignments"), Alias::new("route_id"))
                            .to(Alias::new("routes"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_route_assignments_student")
                            .from(Alias::new("route_assignments"), Alias::new("student_id"))
                            .to(Alias::new("students"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A student rides a given route at most once.
        manager
            .create_index(
                Index::create()
                    .name("uq_route_assignments_route_student")
                    .table(Alias::new("route_assignments"))
                    .col(Alias::new("route_id"))
                    .col(Alias::new("student_id"))
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_route_assignments_route_order")
                    .table(Alias::new("route_assignments"))
                    .col(Alias::new("route_id"))
                    .col(Alias::new("pickup_order"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Alias::new("route_assignments"))
                    .to_owned(),
            )
            .await
    }
}
