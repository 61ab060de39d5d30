use budget_calc::core::dispatcher::format_brl;
use budget_calc::utils::{
    logger,
    validation::{self, Validate},
};
use budget_calc::{BudgetSession, CliConfig, ConsoleNotifier};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();
    config.resolve_base_url();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting budget-calc CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let request = match config.build_request() {
        Ok(request) => request,
        Err(e) => {
            tracing::error!("❌ Could not build the budget request: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // Per-field report plus one summary line, like the form shows inline
    // messages next to each field.
    let issues = validation::validate_request(&request);
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("  • {}: {}", issue.field, issue.message);
        }
        eprintln!("❌ O formulário contém {} campo(s) inválido(s)", issues.len());
        std::process::exit(1);
    }

    let send = config.send;
    let whatsapp = config.whatsapp;

    let mut session = BudgetSession::new(config, ConsoleNotifier);
    session.apply(request)?;

    let estimate = session.estimate();
    println!("Estimativa: R$ {}", format_brl(estimate.cost));
    println!(
        "Prazo estimado: {} {}",
        estimate.timeline,
        if estimate.timeline == 1 { "dia" } else { "dias" }
    );

    match (send, whatsapp) {
        (true, true) => {
            // Fire-and-continue: the link is printed even if the POST fails.
            let link = session.send_and_contact().await;
            println!("📱 {}", link);
        }
        (true, false) => {
            if session.send_budget().await {
                tracing::info!("✅ Budget submission accepted");
            }
        }
        (false, true) => {
            println!("📱 {}", session.contact_link());
        }
        (false, false) => {}
    }

    Ok(())
}
