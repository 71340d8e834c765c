mod connection;
mod entities;

pub use connection::*;
pub use entities::*;
