pub mod command;
pub mod controller;
pub mod domain;
pub mod events;
pub mod fallback;
pub mod library;
pub mod repository;
