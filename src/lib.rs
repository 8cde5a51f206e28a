pub mod api;
pub mod core;
pub mod generator;
pub mod gui;
pub mod persistence;
