pub use sea_orm_migration::prelude::*;

mod m20261019_000001_create_user_table;
mod m20261019_000002_create_session_table;
mod m20261019_000003_create_enrollment_table;
mod m20261019_000004_create_ticket_type_table;
mod m20261019_000005_create_ticket_table;
mod m20261019_000006_create_hotel_table;
mod m20261019_000007_create_room_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_user_table::Migration),
            Box::new(m20261019_000002_create_session_table::Migration),
            Box::new(m20261019_000003_create_enrollment_table::Migration),
            Box::new(m20261019_000004_create_ticket_type_table::Migration),
            Box::new(m20261019_000005_create_ticket_table::Migration),
            Box::new(m20261019_000006_create_hotel_table::Migration),
            Box::new(m20261019_000007_create_room_table::Migration),
        ]
    }
}
