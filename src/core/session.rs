use crate::core::dispatcher::SubmissionDispatcher;
use crate::core::estimator;
use crate::domain::model::{BudgetSubmission, Estimate, EstimateRequest};
use crate::domain::ports::{ConfigProvider, Notifier};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// One budget form session: the field values, the last computed estimate,
/// and the in-flight submission flag. The estimate is recomputed
/// synchronously on every accepted parameter edit, so reading it is always
/// consistent with the current form state.
pub struct BudgetSession<C: ConfigProvider, N: Notifier> {
    request: EstimateRequest,
    estimate: Estimate,
    sending: bool,
    dispatcher: SubmissionDispatcher<C>,
    notifier: N,
}

impl<C: ConfigProvider, N: Notifier> BudgetSession<C, N> {
    pub fn new(config: C, notifier: N) -> Self {
        let request = EstimateRequest::default();
        let estimate = estimator::estimate(request.developer_count, request.feature_count);
        Self {
            request,
            estimate,
            sending: false,
            dispatcher: SubmissionDispatcher::new(config),
            notifier,
        }
    }

    pub fn request(&self) -> &EstimateRequest {
        &self.request
    }

    pub fn estimate(&self) -> Estimate {
        self.estimate
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Replaces the whole form after validation, recomputing the estimate.
    pub fn apply(&mut self, request: EstimateRequest) -> Result<()> {
        request.validate()?;
        self.request = request;
        self.recompute();
        Ok(())
    }

    pub fn set_developer_count(&mut self, count: u32) {
        self.request.developer_count = count;
        self.recompute();
    }

    pub fn set_feature_count(&mut self, count: u32) {
        self.request.feature_count = count;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.estimate =
            estimator::estimate(self.request.developer_count, self.request.feature_count);
    }

    /// Best-effort webhook submission. Refuses re-entry while a submission
    /// is in flight; any failure surfaces as exactly one error notice and
    /// the sending flag is always released. Returns whether the webhook
    /// accepted the submission.
    pub async fn send_budget(&mut self) -> bool {
        if self.sending {
            return false;
        }
        self.sending = true;

        let submission = BudgetSubmission::new(self.request.clone(), self.estimate);
        let sent = match self.dispatcher.post_budget(&submission).await {
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| "Orçamento enviado para análise".to_string());
                self.notifier.success(&message);
                true
            }
            Err(e) => {
                tracing::warn!("Budget submission failed: {}", e);
                self.notifier
                    .error(&format!("Não foi possível enviar o orçamento: {}", e));
                false
            }
        };

        self.sending = false;
        sent
    }

    /// WhatsApp contact link for the current form state.
    pub fn contact_link(&self) -> String {
        self.dispatcher.contact_link(&self.request, &self.estimate)
    }

    /// Combined action: post the budget, then hand back the WhatsApp link.
    /// The POST is fire-and-continue; the link is produced even when it
    /// fails.
    pub async fn send_and_contact(&mut self) -> String {
        self.send_budget().await;
        self.contact_link()
    }
}
