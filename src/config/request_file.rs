use crate::domain::model::{EstimateRequest, ServiceType};
use crate::utils::error::{BudgetError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A budget request loaded from a TOML file, sectioned the way the form
/// groups its fields:
///
/// ```toml
/// [contact]
/// name = "Maria Silva"
/// organization = "Acme"
/// email = "maria@acme.com.br"
/// phone = "67993360000"
///
/// [service]
/// type = "project"
/// application = "web"
///
/// [project]
/// name = "Portal"
/// description = "Portal de atendimento ao cliente"
/// developers = 2
/// features = 10
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RequestFile {
    pub contact: ContactSection,
    pub service: ServiceSection,
    pub project: ProjectSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactSection {
    pub name: String,
    pub organization: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSection {
    pub r#type: String,
    pub application: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
    pub name: String,
    pub description: String,
    pub developers: u32,
    pub features: u32,
}

impl RequestFile {
    pub fn from_file(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Err(BudgetError::InvalidConfigValue {
                field: "request_file".to_string(),
                value: path.to_string(),
                reason: "file not found".to_string(),
            });
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn into_request(self) -> Result<EstimateRequest> {
        Ok(EstimateRequest {
            contact_name: self.contact.name,
            organization_name: self.contact.organization,
            contact_email: self.contact.email,
            contact_phone: self.contact.phone,
            service_type: self.service.r#type.parse::<ServiceType>()?,
            application_type: self.service.application,
            project_name: self.project.name,
            project_description: self.project.description,
            developer_count: self.project.developers,
            feature_count: self.project.features,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
[contact]
name = "Maria Silva"
organization = "Acme"
email = "maria@acme.com.br"
phone = "67993360000"

[service]
type = "team"
application = "mobile"

[project]
name = "App de campo"
description = "Coleta de dados em campo"
developers = 3
features = 25
"#;

    #[test]
    fn loads_a_sectioned_request() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let request = RequestFile::from_file(file.path().to_str().unwrap())
            .unwrap()
            .into_request()
            .unwrap();

        assert_eq!(request.contact_name, "Maria Silva");
        assert_eq!(request.service_type, ServiceType::Team);
        assert_eq!(request.application_type, "mobile");
        assert_eq!(request.developer_count, 3);
        assert_eq!(request.feature_count, 25);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let error = RequestFile::from_file("/nonexistent/request.toml").unwrap_err();
        assert!(matches!(error, BudgetError::InvalidConfigValue { .. }));
    }

    #[test]
    fn malformed_toml_is_reported() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[contact\nname = ").unwrap();

        let error = RequestFile::from_file(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(error, BudgetError::RequestFile(_)));
    }

    #[test]
    fn unknown_service_type_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.replace("team", "freelance").as_bytes())
            .unwrap();

        let error = RequestFile::from_file(file.path().to_str().unwrap())
            .unwrap()
            .into_request()
            .unwrap_err();
        assert!(matches!(error, BudgetError::InvalidConfigValue { .. }));
    }
}
