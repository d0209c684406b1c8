//! Contact operations and their failure variants.

use std::fmt;

use thiserror::Error;

use super::store::ContactStore;

/// Operations that can fail with a [`ContactError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Change,
    Phone,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "add"),
            Operation::Change => write!(f, "change"),
            Operation::Phone => write!(f, "phone"),
        }
    }
}

/// Failure of a contact operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("expected {expected} argument(s), got {got}")]
    Arity { expected: usize, got: usize },

    #[error("contact '{0}' not found")]
    NotFound(String),

    #[error("contact '{0}' already exists")]
    AlreadyExists(String),
}

/// Result of a contact operation.
pub type ContactResult = Result<String, ContactError>;

/// Turns an operation failure into the line shown to the user.
pub fn error_message(operation: Operation, err: &ContactError) -> String {
    match (operation, err) {
        (Operation::Add | Operation::Change, ContactError::Arity { .. }) => {
            "Give me name and phone please.".to_string()
        }
        (Operation::Phone, ContactError::Arity { .. }) => "Enter user name".to_string(),
        (_, ContactError::NotFound(_)) => "Contact not found.".to_string(),
        (_, ContactError::AlreadyExists(name)) => {
            format!("A contact with that name \"{}\" already exists.", name)
        }
    }
}

fn name_and_phone(args: &[String]) -> Result<(&str, &str), ContactError> {
    match args {
        [name, phone] => Ok((name.as_str(), phone.as_str())),
        _ => Err(ContactError::Arity {
            expected: 2,
            got: args.len(),
        }),
    }
}

/// Adds a contact unless the name is taken.
pub fn add_contact(args: &[String], contacts: &mut ContactStore) -> ContactResult {
    let (name, phone) = name_and_phone(args)?;
    if !contacts.insert(name, phone) {
        return Err(ContactError::AlreadyExists(name.to_string()));
    }
    Ok("Contact added.".to_string())
}

/// Sets the phone for a contact, creating it if absent.
pub fn change_contact(args: &[String], contacts: &mut ContactStore) -> ContactResult {
    let (name, phone) = name_and_phone(args)?;
    if contacts.update(name, phone).is_none() {
        tracing::debug!(name, "change created a new contact");
    }
    Ok("Contact updated.".to_string())
}

/// Returns the phone of the named contact. Extra arguments are ignored.
pub fn show_phone(args: &[String], contacts: &ContactStore) -> ContactResult {
    let name = args.first().ok_or(ContactError::Arity {
        expected: 1,
        got: 0,
    })?;
    contacts
        .lookup(name)
        .map(String::from)
        .ok_or_else(|| ContactError::NotFound(name.clone()))
}

/// Lists every contact as `name: phone`, one per line.
pub fn show_all(contacts: &ContactStore) -> String {
    contacts
        .list()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
