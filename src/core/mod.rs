pub mod dispatcher;
pub mod estimator;
pub mod session;

pub use crate::domain::model::{
    BudgetSubmission, Estimate, EstimateRequest, ServiceType, WebhookResponse,
};
pub use crate::domain::ports::{ConfigProvider, Notifier};
pub use crate::utils::error::Result;
