pub mod events;
pub mod factory;
pub mod logs;
pub mod remote;
