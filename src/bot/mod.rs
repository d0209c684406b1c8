//! Contact bot.
//!
//! A line-oriented command loop over an in-memory contact store:
//!
//! - `hello` - greeting
//! - `add <name> <phone>` - adds a contact unless the name exists
//! - `change <name> <phone>` - sets the phone, creating the contact if needed
//! - `phone <name>` - shows the phone of a contact
//! - `all` - lists every contact in insertion order
//! - `close` / `exit` - ends the session
//!
//! Handler failures are [`ContactError`] variants that the session turns
//! into the canned line printed to the user.

mod handlers;
mod parser;
mod session;
mod store;

pub use handlers::{
    add_contact, change_contact, error_message, show_all, show_phone, ContactError,
    ContactResult, Operation,
};
pub use parser::{parse_input, Command};
pub use session::{Reply, Session};
pub use store::{Contact, ContactStore};
