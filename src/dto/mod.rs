pub mod items;
pub mod users;
pub mod warehouses;
