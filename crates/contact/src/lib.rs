//! Contact form controller and the gateway boundary it submits through.

mod controller;
mod error;
mod event;
mod gateway;
mod notification;
mod types;

pub use controller::*;
pub use error::*;
pub use event::*;
pub use gateway::*;
pub use notification::*;
pub use types::*;
