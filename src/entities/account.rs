// 💳 Account Entity - the single record managed by the service
//
// Identity is a numeric id assigned by the store on first insert.
// Values (name, document, phone) can be replaced by an update; the id never changes.

use serde::{Deserialize, Serialize};

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

/// Account record as stored and as exchanged over HTTP.
///
/// JSON shape: `{"id": number|null, "name": ..., "document": ..., "phone": ...}`.
/// `id` may be omitted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Store-assigned identity. `None` until the first save.
    #[serde(default)]
    pub id: Option<i64>,

    /// Holder name (at least 5 characters on create)
    pub name: String,

    /// National document number (exactly 11 characters on create)
    pub document: String,

    /// Free-form contact phone
    pub phone: String,
}

impl Account {
    /// Create a new, not yet persisted account
    pub fn new(name: impl Into<String>, document: impl Into<String>, phone: impl Into<String>) -> Self {
        Account {
            id: None,
            name: name.into(),
            document: document.into(),
            phone: phone.into(),
        }
    }

    /// Same values, bound to the given identity
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Same values, detached from any identity
    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }

    /// Copy of this record whose values are taken from `values`.
    /// Identity is kept from `self`.
    pub fn with_values_of(&self, values: &Account) -> Account {
        Account {
            id: self.id,
            name: values.name.clone(),
            document: values.document.clone(),
            phone: values.phone.clone(),
        }
    }
}
