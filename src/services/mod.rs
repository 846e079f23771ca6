// Service module exports

pub mod database;
pub mod event;
pub mod export;
pub mod month_view;
pub mod settings;
pub mod storage;
