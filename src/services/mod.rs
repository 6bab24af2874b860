pub mod item_service;
pub mod user_service;
pub mod warehouse_service;
