pub mod book;
pub mod salon;
pub mod user;
