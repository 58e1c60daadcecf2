pub mod backend;
pub mod browser;
pub mod encode;
