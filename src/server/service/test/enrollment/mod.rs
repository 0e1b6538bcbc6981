use crate::server::{error::AppError, service::enrollment::EnrollmentService};
use entity::sea_orm_active_enums::TicketStatus;
use test_utils::{builder::TestBuilder, factory};
