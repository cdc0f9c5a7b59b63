pub mod bot;
pub mod common;
pub mod intent;
pub mod monitor;
pub mod router;
pub mod session;
