pub mod items;
pub mod users;
pub mod variants;
pub mod warehouses;

pub use items::Entity as Items;
pub use users::Entity as Users;
pub use variants::Entity as Variants;
pub use warehouses::Entity as Warehouses;
