//! Mock notification sender for testing.

use crate::error::NotificationError;
use crate::providers::NotificationSender;
use crate::types::{BookingRequest, ConfirmationId};
use std::future::Future;
use std::sync::{Arc, Mutex};

/// Mock notification sender.
///
/// Records the confirmation id of every delivery attempt. `failing()`
/// builds a sender whose every delivery fails, for exercising the
/// best-effort path.
#[derive(Clone, Debug, Default)]
pub struct MockNotificationSender {
    failing: bool,
    attempts: Arc<Mutex<Vec<ConfirmationId>>>,
}

impl MockNotificationSender {
    /// Create a sender that delivers every confirmation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sender whose every delivery fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Number of delivery attempts seen, successful or not.
    #[must_use]
    pub fn invocations(&self) -> usize {
        super::lock(&self.attempts).len()
    }

    /// Confirmation ids of all delivery attempts, in call order.
    #[must_use]
    pub fn sent(&self) -> Vec<ConfirmationId> {
        super::lock(&self.attempts).clone()
    }
}

impl NotificationSender for MockNotificationSender {
    fn send_confirmation(
        &self,
        confirmation_id: &ConfirmationId,
        _request: &BookingRequest,
    ) -> impl Future<Output = Result<(), NotificationError>> + Send {
        let confirmation_id = confirmation_id.clone();
        let failing = self.failing;
        let attempts = Arc::clone(&self.attempts);

        async move {
            super::lock(&attempts).push(confirmation_id.clone());
            if failing {
                return Err(NotificationError::Delivery {
                    message: "simulated delivery failure".to_string(),
                });
            }
            tracing::debug!(confirmation_id = %confirmation_id, "Mock confirmation sent");
            Ok(())
        }
    }
}
