//! Dispatch controller — the state the view layer reads.

use tracing::debug;

use crate::error::Result;
use crate::model::item::{self, DispatchItem};
use crate::service::MailService;

/// View state for the dispatch dashboard.
///
/// Holds an ordered list of [`DispatchItem`]s, fixed at construction, and a
/// mail-service collaborator. Triggering a fetch never replaces the list;
/// its only side effect is the delegated call itself.
pub struct DispatchCtrl {
    items: Vec<DispatchItem>,
    mail_service: Box<dyn MailService>,
}

impl DispatchCtrl {
    /// Create a controller seeded with the built-in sample items.
    pub fn new(mail_service: Box<dyn MailService>) -> Self {
        Self {
            items: item::sample_items(),
            mail_service,
        }
    }

    /// The items shown on the dashboard, in display order.
    pub fn items(&self) -> &[DispatchItem] {
        &self.items
    }

    /// Trigger a mail fetch on the collaborator.
    ///
    /// The fetched batch is dropped: the item list stays as constructed. A
    /// collaborator error is returned to the caller unmodified.
    pub fn get_mail(&self) -> Result<()> {
        let data = self.mail_service.get_mail()?;
        debug!(items = data.len(), "Fetched mail batch, discarding");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::stub::StubMailService;

    #[test]
    fn test_new_seeds_sample_items() {
        let ctrl = DispatchCtrl::new(Box::new(StubMailService));
        assert_eq!(ctrl.items().len(), 3);
        assert_eq!(ctrl.items()[0].title, "Could you do this?");
    }

    #[test]
    fn test_get_mail_with_stub_succeeds() {
        let ctrl = DispatchCtrl::new(Box::new(StubMailService));
        ctrl.get_mail().expect("stub fetch succeeds");
    }
}
