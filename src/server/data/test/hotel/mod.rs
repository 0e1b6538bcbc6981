use crate::server::data::hotel::HotelRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod get_with_rooms;
