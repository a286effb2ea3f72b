pub mod app;
pub mod components;
pub mod controls;
pub mod state;
