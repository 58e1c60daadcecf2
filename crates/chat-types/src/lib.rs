pub mod message;
pub mod session;
pub mod wire;
pub mod event;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use error::ChatError;
pub use session::SessionId;
pub type Result<T> = std::result::Result<T, ChatError>;
