//! Saved-fund handlers. Every route here sits behind [`JwtAuth`](crate::middleware::JwtAuth).

pub mod check_saved;
pub mod list;
pub mod remove;
pub mod save;

pub use check_saved::check_saved;
pub use list::list_funds;
pub use remove::remove_fund;
pub use save::save_fund;
