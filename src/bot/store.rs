//! In-memory contact store.

use std::collections::HashMap;
use std::fmt;

/// A single contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phone)
    }
}

/// Name to phone mapping that remembers insertion order.
#[derive(Debug, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    index: HashMap<String, usize>,
}

impl ContactStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new contact.
    ///
    /// Returns `false` and leaves the existing phone untouched if the name
    /// is already present.
    pub fn insert(&mut self, name: &str, phone: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.index.insert(name.to_string(), self.contacts.len());
        self.contacts.push(Contact {
            name: name.to_string(),
            phone: phone.to_string(),
        });
        true
    }

    /// Sets the phone for `name`, inserting the contact if it is absent.
    ///
    /// Returns the previous phone, if any.
    pub fn update(&mut self, name: &str, phone: &str) -> Option<String> {
        match self.index.get(name) {
            Some(&i) => Some(std::mem::replace(
                &mut self.contacts[i].phone,
                phone.to_string(),
            )),
            None => {
                self.insert(name, phone);
                None
            }
        }
    }

    /// Looks up the phone for `name`.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&i| self.contacts[i].phone.as_str())
    }

    /// Whether a contact with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Contacts in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the store has no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
