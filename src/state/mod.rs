pub mod connection;
pub mod gesture;

pub use connection::{ConnectionStatus, ReconnectPolicy};
pub use gesture::{Contact, GestureIntent, GestureState};
