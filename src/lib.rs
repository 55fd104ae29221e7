pub mod books;
pub mod catalog;
pub mod core;
pub mod gateway;
pub mod users;
pub mod utils;
pub mod server;
