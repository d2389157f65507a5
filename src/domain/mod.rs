mod error;
mod identifier;
mod schema;
mod state;
mod trigger;

pub use error::*;
pub use identifier::*;
pub use schema::*;
pub use state::*;
pub use trigger::*;

pub type Unit = ();
