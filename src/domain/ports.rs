pub trait ConfigProvider: Send + Sync {
    fn webhook_base_url(&self) -> &str;
    fn whatsapp_number(&self) -> &str;
}

/// User-visible feedback surface. The CLI prints to the console; tests
/// record the notices.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}
