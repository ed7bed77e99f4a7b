//! The mail-service boundary.
//!
//! The controller does not fetch mail itself — it delegates to a
//! [`MailService`] collaborator handed to it at construction. What sits
//! behind that collaborator (transport, credentials, scheduling) is outside
//! this crate.

pub mod stub;

use crate::error::Result;
use crate::model::item::DispatchItem;

/// One batch of fetched mail.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct MailData {
    /// Items contained in the batch, in the order the source returned them.
    pub items: Vec<DispatchItem>,
}

impl MailData {
    /// Number of items in the batch.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the batch carries no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A collaborator able to fetch mail.
///
/// This is the single capability the controller needs from the outside
/// world. Implementations report failures as [`MailError`]; callers receive
/// them as-is.
///
/// [`MailError`]: crate::error::MailError
pub trait MailService {
    /// Fetch one batch of mail.
    fn get_mail(&self) -> Result<MailData>;
}
