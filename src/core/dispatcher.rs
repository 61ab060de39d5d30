use crate::domain::model::{
    application_type_label, BudgetSubmission, Estimate, EstimateRequest, WebhookResponse,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{BudgetError, Result};
use reqwest::Client;

/// Serializes submissions to the budget webhook and builds the WhatsApp
/// contact deep link. One POST per call, no retry.
pub struct SubmissionDispatcher<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> SubmissionDispatcher<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Posts the submission to `{base_url}/webhook/budget`. A transport
    /// error, a non-2xx status, or a body with `status != true` all count as
    /// failure; an absent or malformed body degrades to the empty response
    /// shape.
    pub async fn post_budget(&self, submission: &BudgetSubmission) -> Result<WebhookResponse> {
        let url = format!(
            "{}/webhook/budget",
            self.config.webhook_base_url().trim_end_matches('/')
        );
        tracing::debug!("Posting budget submission to: {}", url);

        let response = self.client.post(&url).json(submission).send().await?;
        let http_status = response.status();
        tracing::debug!("Webhook response status: {}", http_status);

        let body = response.json::<WebhookResponse>().await.unwrap_or_default();

        if !http_status.is_success() {
            return Err(BudgetError::Rejected {
                message: format!("webhook returned HTTP {}", http_status),
            });
        }
        if !body.status {
            return Err(BudgetError::Rejected {
                message: body
                    .message
                    .clone()
                    .unwrap_or_else(|| "webhook reported failure".to_string()),
            });
        }
        Ok(body)
    }

    /// WhatsApp deep link with the budget summary prefilled.
    pub fn contact_link(&self, request: &EstimateRequest, estimate: &Estimate) -> String {
        let text = summary_text(request, estimate);
        format!(
            "https://wa.me/{}?text={}",
            self.config.whatsapp_number(),
            urlencoding::encode(&text)
        )
    }
}

/// Human-readable summary of the request and its estimate, in the site's
/// language.
pub fn summary_text(request: &EstimateRequest, estimate: &Estimate) -> String {
    let application = application_type_label(&request.application_type)
        .unwrap_or(request.application_type.as_str());
    let day_word = if estimate.timeline == 1 { "dia" } else { "dias" };

    format!(
        "Olá! Fiz uma simulação de orçamento no site.\n\
         \n\
         Nome: {}\n\
         Empresa: {}\n\
         E-mail: {}\n\
         Telefone: {}\n\
         Serviço: {}\n\
         Tipo de aplicação: {}\n\
         Projeto: {}\n\
         Descrição: {}\n\
         Funcionalidades: {}\n\
         Desenvolvedores: {}\n\
         \n\
         Valor estimado: R$ {}\n\
         Prazo estimado: {} {}",
        request.contact_name,
        request.organization_name,
        request.contact_email,
        request.contact_phone,
        request.service_type.label(),
        application,
        request.project_name,
        request.project_description,
        request.feature_count,
        request.developer_count,
        format_brl(estimate.cost),
        estimate.timeline,
        day_word,
    )
}

/// Formats a whole BRL amount with pt-BR thousands grouping ("255.300").
pub fn format_brl(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ServiceType;
    use httpmock::prelude::*;

    struct MockConfig {
        base_url: String,
        whatsapp_number: String,
    }

    impl MockConfig {
        fn new(base_url: String) -> Self {
            Self {
                base_url,
                whatsapp_number: "5567993369450".to_string(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn webhook_base_url(&self) -> &str {
            &self.base_url
        }

        fn whatsapp_number(&self) -> &str {
            &self.whatsapp_number
        }
    }

    fn sample_request() -> EstimateRequest {
        EstimateRequest {
            contact_name: "Maria Silva".to_string(),
            organization_name: "Acme".to_string(),
            contact_email: "maria@acme.com.br".to_string(),
            contact_phone: "67993360000".to_string(),
            service_type: ServiceType::Project,
            application_type: "web".to_string(),
            project_name: "Portal".to_string(),
            project_description: "Portal de atendimento ao cliente".to_string(),
            developer_count: 2,
            feature_count: 10,
        }
    }

    fn sample_submission() -> BudgetSubmission {
        BudgetSubmission::new(sample_request(), Estimate { cost: 9580, timeline: 7 })
    }

    #[tokio::test]
    async fn post_budget_accepts_status_true() {
        let server = MockServer::start();
        let webhook = server.mock(|when, then| {
            when.method(POST)
                .path("/webhook/budget")
                .json_body_partial(r#"{"estimatedValue": 9580, "estimatedTime": 7}"#);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"status": true, "message": "recebido"}));
        });

        let dispatcher = SubmissionDispatcher::new(MockConfig::new(server.base_url()));
        let response = dispatcher.post_budget(&sample_submission()).await.unwrap();

        webhook.assert();
        assert!(response.status);
        assert_eq!(response.message.as_deref(), Some("recebido"));
    }

    #[tokio::test]
    async fn post_budget_rejects_non_2xx() {
        let server = MockServer::start();
        let webhook = server.mock(|when, then| {
            when.method(POST).path("/webhook/budget");
            then.status(500);
        });

        let dispatcher = SubmissionDispatcher::new(MockConfig::new(server.base_url()));
        let error = dispatcher.post_budget(&sample_submission()).await.unwrap_err();

        webhook.assert();
        assert!(matches!(error, BudgetError::Rejected { .. }));
        assert!(error.to_string().contains("500"));
    }

    #[tokio::test]
    async fn post_budget_rejects_status_false() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/webhook/budget");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"status": false, "message": "fila cheia"}));
        });

        let dispatcher = SubmissionDispatcher::new(MockConfig::new(server.base_url()));
        let error = dispatcher.post_budget(&sample_submission()).await.unwrap_err();

        assert!(error.to_string().contains("fila cheia"));
    }

    #[tokio::test]
    async fn post_budget_treats_malformed_body_as_empty_shape() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/webhook/budget");
            then.status(200).body("not json at all");
        });

        let dispatcher = SubmissionDispatcher::new(MockConfig::new(server.base_url()));
        // Empty shape means status=false, which reads as a rejection.
        let error = dispatcher.post_budget(&sample_submission()).await.unwrap_err();
        assert!(matches!(error, BudgetError::Rejected { .. }));
    }

    #[tokio::test]
    async fn post_budget_tolerates_trailing_slash_in_base_url() {
        let server = MockServer::start();
        let webhook = server.mock(|when, then| {
            when.method(POST).path("/webhook/budget");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"status": true}));
        });

        let base = format!("{}/", server.base_url());
        let dispatcher = SubmissionDispatcher::new(MockConfig::new(base));
        dispatcher.post_budget(&sample_submission()).await.unwrap();

        webhook.assert();
    }

    #[test]
    fn contact_link_targets_the_fixed_number() {
        let dispatcher =
            SubmissionDispatcher::new(MockConfig::new("http://localhost:8787".to_string()));
        let link =
            dispatcher.contact_link(&sample_request(), &Estimate { cost: 9580, timeline: 7 });

        assert!(link.starts_with("https://wa.me/5567993369450?text="));
        // The summary is URL-encoded: no raw spaces or newlines survive.
        let text = link.split_once("?text=").unwrap().1;
        assert!(!text.contains(' '));
        assert!(!text.contains('\n'));
        assert!(text.contains("9.580"));
    }

    #[test]
    fn summary_text_uses_labels_and_plurals() {
        let request = sample_request();
        let text = summary_text(&request, &Estimate { cost: 9580, timeline: 7 });
        assert!(text.contains("Aplicativo Web"));
        assert!(text.contains("Contratar serviço para um projeto"));
        assert!(text.contains("Valor estimado: R$ 9.580"));
        assert!(text.contains("Prazo estimado: 7 dias"));

        let text = summary_text(&request, &Estimate { cost: 450, timeline: 1 });
        assert!(text.contains("Prazo estimado: 1 dia"));
        assert!(!text.contains("1 dias"));
    }

    #[test]
    fn format_brl_groups_thousands() {
        assert_eq!(format_brl(0), "0");
        assert_eq!(format_brl(450), "450");
        assert_eq!(format_brl(9580), "9.580");
        assert_eq!(format_brl(255_300), "255.300");
        assert_eq!(format_brl(1_000_000), "1.000.000");
    }
}
