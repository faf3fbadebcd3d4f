pub mod error;
pub mod funds;
pub mod market;
pub mod user;

pub use error::*;
pub use funds::*;
pub use market::*;
pub use user::*;
