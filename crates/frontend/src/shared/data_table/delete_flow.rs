//! Confirm-then-delete state machine shared by every table
//!
//! ```text
//! Idle --initiate--> ConfirmPending --confirm--> InFlight --finish--> Idle
//!                         |
//!                       cancel --> Idle
//! ```

use crate::shared::api_utils::ApiError;
use crate::shared::notifications::Notice;

/// Record chosen for deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteFlow {
    #[default]
    Idle,
    ConfirmPending(DeleteTarget),
    InFlight(DeleteTarget),
}

impl DeleteFlow {
    /// Open the confirmation for `target`, replacing any pending one.
    /// Returns `false` while a request is in flight.
    pub fn initiate(&mut self, target: DeleteTarget) -> bool {
        if self.is_busy() {
            return false;
        }
        *self = DeleteFlow::ConfirmPending(target);
        true
    }

    pub fn pending(&self) -> Option<&DeleteTarget> {
        match self {
            DeleteFlow::ConfirmPending(target) => Some(target),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        if let DeleteFlow::ConfirmPending(_) = self {
            *self = DeleteFlow::Idle;
        }
    }

    /// Move the pending target to in-flight and hand it out for the request
    pub fn confirm(&mut self) -> Option<DeleteTarget> {
        let DeleteFlow::ConfirmPending(target) = self else {
            return None;
        };
        let target = target.clone();
        *self = DeleteFlow::InFlight(target.clone());
        Some(target)
    }

    pub fn finish(&mut self) {
        *self = DeleteFlow::Idle;
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, DeleteFlow::InFlight(_))
    }
}

/// Backend able to remove one record of a REST collection
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    async fn delete_record(&self, collection: &str, id: &str) -> Result<(), ApiError>;
}

/// Issue exactly one delete request and describe the outcome
pub async fn execute_delete<S: RecordStore>(
    store: &S,
    collection: &str,
    entity: &str,
    target: &DeleteTarget,
) -> Notice {
    match store.delete_record(collection, &target.id).await {
        Ok(()) => Notice::success(format!("{} deleted successfully!", entity)),
        Err(e) => {
            log::error!("Failed to delete {} {}: {}", entity, target.id, e);
            Notice::error(format!("Error deleting {}", entity.to_lowercase()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeStore {
        calls: RefCell<Vec<(String, String)>>,
        fail_with: Option<ApiError>,
    }

    impl RecordStore for FakeStore {
        async fn delete_record(&self, collection: &str, id: &str) -> Result<(), ApiError> {
            self.calls
                .borrow_mut()
                .push((collection.to_string(), id.to_string()));
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    fn target(id: &str) -> DeleteTarget {
        DeleteTarget {
            id: id.to_string(),
            label: format!("Record {}", id),
        }
    }

    #[test]
    fn test_confirm_sends_one_request() {
        let store = FakeStore::default();
        let mut flow = DeleteFlow::default();
        assert!(flow.initiate(target("abc")));

        let confirmed = flow.confirm().unwrap();
        assert!(flow.is_busy());
        assert!(flow.confirm().is_none());

        let notice = block_on(execute_delete(&store, "jobs", "Job", &confirmed));
        flow.finish();

        assert_eq!(
            store.calls.borrow().as_slice(),
            &[("jobs".to_string(), "abc".to_string())]
        );
        assert!(notice.is_success());
        assert_eq!(notice.message, "Job deleted successfully!");
        assert_eq!(flow, DeleteFlow::Idle);
    }

    #[test]
    fn test_cancel_sends_nothing() {
        let mut flow = DeleteFlow::default();
        flow.initiate(target("abc"));
        flow.cancel();
        assert_eq!(flow, DeleteFlow::Idle);
        assert!(flow.confirm().is_none());
    }

    #[test]
    fn test_failed_delete_reports_error() {
        let store = FakeStore {
            fail_with: Some(ApiError::Status(500)),
            ..Default::default()
        };
        let notice = block_on(execute_delete(&store, "plans", "Plan", &target("p1")));
        assert!(!notice.is_success());
        assert_eq!(notice.message, "Error deleting plan");
        assert_eq!(store.calls.borrow().len(), 1);
    }

    #[test]
    fn test_initiate_replaces_pending_but_not_in_flight() {
        let mut flow = DeleteFlow::default();
        flow.initiate(target("a"));
        flow.initiate(target("b"));
        assert_eq!(flow.pending().map(|t| t.id.as_str()), Some("b"));

        flow.confirm();
        assert!(!flow.initiate(target("c")));
        assert_eq!(flow, DeleteFlow::InFlight(target("b")));

        flow.cancel();
        assert!(flow.is_busy());
    }
}
