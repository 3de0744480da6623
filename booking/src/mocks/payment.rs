//! Mock payment gateway for testing.

use crate::error::PaymentError;
use crate::providers::PaymentGateway;
use crate::types::{BookingRequest, Money, TransactionId};
use std::future::Future;
use std::sync::{Arc, Mutex};

/// A recorded `pay` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentCall {
    /// The booking the charge referenced.
    pub request: BookingRequest,
    /// Amount the workflow tried to collect.
    pub amount: Money,
}

#[derive(Debug, Default)]
struct Inner {
    calls: Vec<PaymentCall>,
    next_transaction: u64,
}

/// Mock payment gateway.
///
/// Accepts every charge by default; `rejecting_above` configures a price
/// ceiling (business rejection) and `unavailable` simulates a transport
/// fault. All invocations are recorded, including rejected ones.
#[derive(Clone, Debug, Default)]
pub struct MockPaymentGateway {
    ceiling: Option<Money>,
    outage: bool,
    inner: Arc<Mutex<Inner>>,
}

impl MockPaymentGateway {
    /// Create a gateway that accepts every charge.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gateway that rejects any charge above `ceiling`.
    #[must_use]
    pub fn rejecting_above(ceiling: Money) -> Self {
        Self {
            ceiling: Some(ceiling),
            ..Self::default()
        }
    }

    /// Create a gateway that fails every charge with a transport fault.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            outage: true,
            ..Self::default()
        }
    }

    /// Number of `pay` invocations seen, successful or not.
    #[must_use]
    pub fn invocations(&self) -> usize {
        super::lock(&self.inner).calls.len()
    }

    /// All recorded invocations, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<PaymentCall> {
        super::lock(&self.inner).calls.clone()
    }

    /// Amount of the most recent invocation, if any.
    #[must_use]
    pub fn last_amount(&self) -> Option<Money> {
        super::lock(&self.inner).calls.last().map(|call| call.amount)
    }
}

impl PaymentGateway for MockPaymentGateway {
    fn pay(
        &self,
        request: &BookingRequest,
        amount: Money,
    ) -> impl Future<Output = Result<TransactionId, PaymentError>> + Send {
        let call = PaymentCall {
            request: request.clone(),
            amount,
        };
        let ceiling = self.ceiling;
        let outage = self.outage;
        let inner = Arc::clone(&self.inner);

        async move {
            let mut guard = super::lock(&inner);
            guard.calls.push(call);

            if outage {
                return Err(PaymentError::Gateway {
                    message: "simulated gateway outage".to_string(),
                });
            }
            if let Some(ceiling) = ceiling {
                if amount > ceiling {
                    tracing::debug!(
                        amount = %amount,
                        ceiling = %ceiling,
                        "Mock gateway rejected charge over ceiling"
                    );
                    return Err(PaymentError::AmountTooHigh { amount, ceiling });
                }
            }

            guard.next_transaction += 1;
            let transaction_id = TransactionId::new(format!("txn-{}", guard.next_transaction));
            tracing::debug!(
                transaction_id = %transaction_id,
                amount = %amount,
                "Mock payment collected"
            );
            Ok(transaction_id)
        }
    }
}
