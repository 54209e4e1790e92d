use crate::models::CertificateTarget;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub report: ReportConfig,
    pub llm: LlmConfig,
    pub email: EmailConfig,
    #[serde(default)]
    pub certificates: Vec<CertificateTarget>,
    #[serde(default)]
    pub inspector: InspectorConfig,
    #[serde(default)]
    pub secrets: SecretsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub snapshot_path: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_attachment_name")]
    pub attachment_name: String,
    /// Where the HTML goes when email is disabled.
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

fn default_title() -> String {
    "Server Report Summary".into()
}

fn default_attachment_name() -> String {
    "lxc_status_report.txt".into()
}

fn default_output_path() -> String {
    "report.html".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub temperature: f32,
    #[serde(default = "default_llm_timeout_secs")]
    pub timeout_secs: u64,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_api_url() -> String {
    "https://api.openai.com/v1".into()
}

fn default_model() -> String {
    "gpt-4".into()
}

fn default_llm_timeout_secs() -> u64 {
    60
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default = "default_user_env")]
    pub user_env: String,
    #[serde(default = "default_password_env")]
    pub password_env: String,
    /// Recipients; empty means send to the SMTP user itself.
    #[serde(default)]
    pub to: Vec<String>,
    #[serde(default = "default_subject")]
    pub subject: String,
}

fn default_true() -> bool {
    true
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".into()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_user_env() -> String {
    "EMAIL_USER".into()
}

fn default_password_env() -> String {
    "EMAIL_PASSWORD".into()
}

fn default_subject() -> String {
    "Daily Server Executive Report".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectorConfig {
    #[serde(default = "default_openssl_bin")]
    pub openssl_bin: String,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            openssl_bin: default_openssl_bin(),
        }
    }
}

fn default_openssl_bin() -> String {
    "openssl".into()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecretsConfig {
    /// Optional .env file loaded before secrets are read from the environment.
    pub env_file: Option<String>,
}

/// Secrets resolved from the environment at startup.
#[derive(Clone)]
pub struct Secrets {
    pub llm_api_key: String,
    pub smtp_user: String,
    pub smtp_password: String,
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("llm_api_key", &"***")
            .field("smtp_user", &self.smtp_user)
            .field("smtp_password", &"***")
            .finish()
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("reading config {}: {}", path, e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.report.snapshot_path.is_empty(),
            "report.snapshot_path must be non-empty"
        );
        anyhow::ensure!(!self.report.title.is_empty(), "report.title must be non-empty");
        anyhow::ensure!(
            !self.report.attachment_name.is_empty(),
            "report.attachment_name must be non-empty"
        );
        anyhow::ensure!(!self.llm.api_url.is_empty(), "llm.api_url must be non-empty");
        anyhow::ensure!(!self.llm.model.is_empty(), "llm.model must be non-empty");
        anyhow::ensure!(
            (0.0..=2.0).contains(&self.llm.temperature),
            "llm.temperature must be between 0.0 and 2.0, got {}",
            self.llm.temperature
        );
        anyhow::ensure!(
            self.llm.timeout_secs > 0,
            "llm.timeout_secs must be > 0, got {}",
            self.llm.timeout_secs
        );
        if self.email.enabled {
            anyhow::ensure!(
                !self.email.smtp_host.is_empty(),
                "email.smtp_host must be non-empty"
            );
            anyhow::ensure!(
                self.email.smtp_port > 0,
                "email.smtp_port must be between 1 and 65535, got {}",
                self.email.smtp_port
            );
        } else {
            anyhow::ensure!(
                !self.report.output_path.is_empty(),
                "report.output_path must be non-empty when email is disabled"
            );
        }
        let mut seen = HashSet::new();
        for (i, cert) in self.certificates.iter().enumerate() {
            anyhow::ensure!(
                !cert.domain.is_empty(),
                "certificates[{}].domain must be non-empty",
                i
            );
            anyhow::ensure!(
                !cert.path.is_empty(),
                "certificates[{}].path must be non-empty",
                i
            );
            anyhow::ensure!(
                seen.insert(cert.domain.as_str()),
                "certificates[{}].domain {:?} is duplicated",
                i,
                cert.domain
            );
        }
        Ok(())
    }

    /// Load the optional .env file, then read secrets named by the config.
    /// SMTP credentials are only required when email is enabled.
    pub fn resolve_secrets(&self) -> anyhow::Result<Secrets> {
        if let Some(env_file) = &self.secrets.env_file {
            dotenvy::from_path(env_file)
                .map_err(|e| anyhow::anyhow!("loading env file {}: {}", env_file, e))?;
        }
        let llm_api_key = std::env::var(&self.llm.api_key_env).unwrap_or_default();
        let (smtp_user, smtp_password) = if self.email.enabled {
            let user = std::env::var(&self.email.user_env)
                .map_err(|_| anyhow::anyhow!("{} must be set", self.email.user_env))?;
            let password = std::env::var(&self.email.password_env)
                .map_err(|_| anyhow::anyhow!("{} must be set", self.email.password_env))?;
            (user, password)
        } else {
            (String::new(), String::new())
        };
        Ok(Secrets {
            llm_api_key,
            smtp_user,
            smtp_password,
        })
    }

    /// Recipients for the report: configured list, or the SMTP user.
    pub fn recipients(&self, secrets: &Secrets) -> Vec<String> {
        if self.email.to.is_empty() {
            vec![secrets.smtp_user.clone()]
        } else {
            self.email.to.clone()
        }
    }
}
