//! A no-backend mail service, used when no real source is wired in.

use tracing::debug;

use super::{MailData, MailService};
use crate::error::Result;

/// Mail service that always succeeds with an empty batch.
///
/// This is the collaborator the binary ships with; it keeps the dashboard
/// fully usable without a configured mail source.
#[derive(Debug, Default)]
pub struct StubMailService;

impl MailService for StubMailService {
    fn get_mail(&self) -> Result<MailData> {
        debug!("Stub mail fetch, returning empty batch");
        Ok(MailData::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_returns_empty_batch() {
        let data = StubMailService.get_mail().expect("stub never fails");
        assert!(data.is_empty());
        assert_eq!(data.len(), 0);
    }
}
