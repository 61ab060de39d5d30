use crate::utils::error::BudgetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Application categories offered in the calculator, as (value, label) pairs.
/// The value is what gets forwarded to the webhook; the label is what the
/// contact summary shows.
pub const APPLICATION_TYPES: [(&str, &str); 9] = [
    ("multi", "Multiplataforma (várias opções)"),
    ("web", "Aplicativo Web"),
    ("mobile", "Aplicativo Mobile"),
    ("site", "Site institucional"),
    ("integration", "Integração de Sistemas"),
    ("automation", "Aplicação de automação"),
    ("desktop", "Aplicação Desktop"),
    ("games", "Jogos e Aplicações Lúdicas"),
    ("other", "Outros (especificar)"),
];

pub fn application_type_label(value: &str) -> Option<&'static str> {
    APPLICATION_TYPES
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Team,
    Project,
}

impl ServiceType {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::Team => "Escalar um time de desenvolvedores",
            ServiceType::Project => "Contratar serviço para um projeto",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceType::Team => write!(f, "team"),
            ServiceType::Project => write!(f, "project"),
        }
    }
}

impl FromStr for ServiceType {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "team" => Ok(ServiceType::Team),
            "project" => Ok(ServiceType::Project),
            other => Err(BudgetError::InvalidConfigValue {
                field: "service_type".to_string(),
                value: other.to_string(),
                reason: "expected \"team\" or \"project\"".to_string(),
            }),
        }
    }
}

/// Everything the budget form collects. The contact and project text fields
/// are forwarded as-is; only `developer_count` and `feature_count` feed the
/// estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    pub contact_name: String,
    pub organization_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub service_type: ServiceType,
    pub application_type: String,
    pub project_name: String,
    pub project_description: String,
    pub developer_count: u32,
    pub feature_count: u32,
}

impl Default for EstimateRequest {
    fn default() -> Self {
        Self {
            contact_name: String::new(),
            organization_name: String::new(),
            contact_email: String::new(),
            contact_phone: String::new(),
            service_type: ServiceType::Project,
            application_type: String::new(),
            project_name: String::new(),
            project_description: String::new(),
            developer_count: 1,
            feature_count: 1,
        }
    }
}

/// Computed estimate: cost in BRL (multiples of 10) and timeline in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    pub cost: u64,
    pub timeline: u32,
}

/// Webhook payload: the full request plus the computed estimate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSubmission {
    #[serde(flatten)]
    pub request: EstimateRequest,
    pub estimated_value: u64,
    pub estimated_time: u32,
}

impl BudgetSubmission {
    pub fn new(request: EstimateRequest, estimate: Estimate) -> Self {
        Self {
            request,
            estimated_value: estimate.cost,
            estimated_time: estimate.timeline,
        }
    }
}

/// Webhook response body. A missing or malformed body deserializes to the
/// default shape instead of raising.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
}
