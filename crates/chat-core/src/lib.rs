pub mod ports;
pub mod event_bus;
pub mod state;
pub mod controller;
