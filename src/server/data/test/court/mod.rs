use crate::server::data::court::CourtRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::court::CourtFactory};

mod find_active;
mod update_status;
