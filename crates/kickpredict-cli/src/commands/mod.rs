//! Command implementations.

pub mod ask;
pub mod categories;
pub mod extract;
pub mod health;
pub mod profile;
pub mod train;

pub use self::ask::execute_ask;
pub use self::categories::execute_categories;
pub use self::extract::execute_extract;
pub use self::health::execute_health;
pub use self::profile::execute_profile;
pub use self::train::execute_train;
