//! Contacts and their accumulation into contact sets.

pub use self::contact::Contact;
pub use self::contact_arena::{ContactArena, ContactHandle};
pub use self::contact_set::{ContactSet, QueryType};

mod contact;
mod contact_arena;
mod contact_set;
