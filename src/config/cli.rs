use crate::domain::ports::Notifier;

/// Console notifier for the CLI: successes on stdout, failures on stderr,
/// both mirrored to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        tracing::info!("{}", message);
        println!("✅ {}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
        eprintln!("❌ {}", message);
    }
}
