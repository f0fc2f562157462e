/// Values injected from the process environment rather than derived from the
/// notification payload.
#[derive(Debug, Clone, Default)]
pub struct ConverterConfig {
    /// Application identifier stamped into purchase-event properties for the
    /// downstream marketing pipeline. Empty when unset; absence is not an
    /// error.
    pub app_id: String,
}

impl ConverterConfig {
    pub fn from_env() -> Self {
        Self {
            app_id: std::env::var("MARKETING_APP_ID").unwrap_or_default(),
        }
    }
}
