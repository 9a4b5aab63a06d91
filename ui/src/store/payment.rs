use super::Reducer;
use crate::types::{PaymentHistoryEntry, Subscription};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentState {
    pub subscription: Option<Subscription>,
    pub payment_history: Vec<PaymentHistoryEntry>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaymentAction {
    SetLoading(bool),
    SetSubscription(Option<Subscription>),
    SetPaymentHistory(Vec<PaymentHistoryEntry>),
    SetError(Option<String>),
}

impl Reducer for PaymentState {
    type Action = PaymentAction;

    fn reduce(&mut self, action: PaymentAction) {
        match action {
            PaymentAction::SetLoading(loading) => self.loading = loading,
            PaymentAction::SetSubscription(subscription) => self.subscription = subscription,
            PaymentAction::SetPaymentHistory(history) => self.payment_history = history,
            PaymentAction::SetError(error) => self.error = error,
        }
    }
}
