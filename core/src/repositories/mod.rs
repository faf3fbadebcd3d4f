pub mod user;

pub use user::UserRepository;

#[cfg(any(test, feature = "mocks"))]
pub use user::MockUserRepository;
