pub mod aggregate;

pub use aggregate::{Sex, User, UserId};
