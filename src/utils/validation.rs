use crate::domain::model::{EstimateRequest, APPLICATION_TYPES};
use crate::utils::error::{BudgetError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// One inline validation message, addressed by the form field name the site
/// uses (camelCase).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: &'static str,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// Collects every field problem in the request, mirroring the form schema:
/// the caller can report them inline and as one summary.
pub fn validate_request(request: &EstimateRequest) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    if request.contact_name.chars().count() < 2 {
        issues.push(FieldIssue {
            field: "contactName",
            message: "Informe seu nome completo",
        });
    }
    if request.organization_name.chars().count() < 2 {
        issues.push(FieldIssue {
            field: "organizationName",
            message: "Informe o nome da organização ou empresa",
        });
    }
    if !email_pattern().is_match(&request.contact_email) {
        issues.push(FieldIssue {
            field: "contactEmail",
            message: "Informe um e-mail válido",
        });
    }
    if request.contact_phone.chars().count() < 10 {
        issues.push(FieldIssue {
            field: "contactPhone",
            message: "Informe um telefone válido (com DDD)",
        });
    }
    if !APPLICATION_TYPES
        .iter()
        .any(|(value, _)| *value == request.application_type)
    {
        issues.push(FieldIssue {
            field: "applicationType",
            message: "Por favor selecione o tipo de aplicação",
        });
    }
    if request.project_name.chars().count() < 3 {
        issues.push(FieldIssue {
            field: "projectName",
            message: "Nome do projeto deve ter pelo menos 3 caracteres",
        });
    }
    if request.project_description.chars().count() < 10 {
        issues.push(FieldIssue {
            field: "projectDescription",
            message: "Por favor forneça uma descrição mais detalhada",
        });
    }
    if request.developer_count < 1 {
        issues.push(FieldIssue {
            field: "developerCount",
            message: "É necessário pelo menos 1 desenvolvedor",
        });
    } else if request.developer_count > 5 {
        issues.push(FieldIssue {
            field: "developerCount",
            message: "Máximo de 5 desenvolvedores permitido",
        });
    }
    if request.feature_count < 1 {
        issues.push(FieldIssue {
            field: "featureCount",
            message: "É necessário pelo menos 1 funcionalidade",
        });
    } else if request.feature_count > 100 {
        issues.push(FieldIssue {
            field: "featureCount",
            message: "Máximo de 100 funcionalidades permitido",
        });
    }

    issues
}

impl Validate for EstimateRequest {
    fn validate(&self) -> Result<()> {
        let issues = validate_request(self);
        if issues.is_empty() {
            return Ok(());
        }
        let message = issues
            .iter()
            .map(|issue| format!("{}: {}", issue.field, issue.message))
            .collect::<Vec<_>>()
            .join("; ");
        Err(BudgetError::Validation { message })
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(BudgetError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(BudgetError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(BudgetError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_phone_digits(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(BudgetError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected digits only (country code + DDD + number)".to_string(),
        });
    }
    Ok(())
}
