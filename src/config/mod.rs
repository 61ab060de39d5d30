pub mod cli;
pub mod request_file;

use crate::domain::model::{EstimateRequest, ServiceType};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

/// Placeholder used when neither --base-url nor WEBHOOK_BASE_URL is set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8787";
/// The agency's WhatsApp number (country code + DDD + number).
pub const DEFAULT_WHATSAPP_NUMBER: &str = "5567993369450";

#[derive(Debug, Clone, Parser)]
#[command(name = "budget-calc")]
#[command(about = "Project cost and timeline estimator with webhook forwarding")]
pub struct CliConfig {
    /// Webhook base URL; falls back to WEBHOOK_BASE_URL, then a local placeholder.
    #[arg(long)]
    pub base_url: Option<String>,

    /// WhatsApp number for the contact deep link.
    #[arg(long, default_value = DEFAULT_WHATSAPP_NUMBER)]
    pub whatsapp_number: String,

    /// TOML file with the budget request ([contact], [service], [project]).
    #[arg(long)]
    pub request_file: Option<String>,

    #[arg(long)]
    pub contact_name: Option<String>,

    #[arg(long)]
    pub organization_name: Option<String>,

    #[arg(long)]
    pub contact_email: Option<String>,

    #[arg(long)]
    pub contact_phone: Option<String>,

    /// "team" or "project".
    #[arg(long)]
    pub service_type: Option<String>,

    /// One of: multi, web, mobile, site, integration, automation, desktop, games, other.
    #[arg(long)]
    pub application_type: Option<String>,

    #[arg(long)]
    pub project_name: Option<String>,

    #[arg(long)]
    pub project_description: Option<String>,

    /// Developers working in parallel, 1 to 5.
    #[arg(long)]
    pub developers: Option<u32>,

    /// Discrete features the project comprises, 1 to 100.
    #[arg(long)]
    pub features: Option<u32>,

    /// Post the submission to the budget webhook.
    #[arg(long)]
    pub send: bool,

    /// Print the prefilled WhatsApp contact link.
    #[arg(long)]
    pub whatsapp: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Fills in the base URL from the environment when the flag is absent.
    pub fn resolve_base_url(&mut self) {
        if self.base_url.is_none() {
            self.base_url = std::env::var("WEBHOOK_BASE_URL").ok();
        }
    }

    /// Builds the request: the TOML file first (when given), explicit flags
    /// on top, form defaults underneath.
    pub fn build_request(&self) -> Result<EstimateRequest> {
        let mut request = match &self.request_file {
            Some(path) => request_file::RequestFile::from_file(path)?.into_request()?,
            None => EstimateRequest::default(),
        };

        if let Some(v) = &self.contact_name {
            request.contact_name = v.clone();
        }
        if let Some(v) = &self.organization_name {
            request.organization_name = v.clone();
        }
        if let Some(v) = &self.contact_email {
            request.contact_email = v.clone();
        }
        if let Some(v) = &self.contact_phone {
            request.contact_phone = v.clone();
        }
        if let Some(v) = &self.service_type {
            request.service_type = v.parse::<ServiceType>()?;
        }
        if let Some(v) = &self.application_type {
            request.application_type = v.clone();
        }
        if let Some(v) = &self.project_name {
            request.project_name = v.clone();
        }
        if let Some(v) = &self.project_description {
            request.project_description = v.clone();
        }
        if let Some(v) = self.developers {
            request.developer_count = v;
        }
        if let Some(v) = self.features {
            request.feature_count = v;
        }

        Ok(request)
    }
}

impl ConfigProvider for CliConfig {
    fn webhook_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    fn whatsapp_number(&self) -> &str {
        &self.whatsapp_number
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", self.webhook_base_url())?;
        validation::validate_phone_digits("whatsapp_number", &self.whatsapp_number)?;
        Ok(())
    }
}
