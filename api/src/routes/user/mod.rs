pub mod login;
pub mod me;
pub mod register;

pub use login::login;
pub use me::me;
pub use register::register;
