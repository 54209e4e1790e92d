use anyhow::Result;
use infra_report::certificates::OpensslInspector;
use infra_report::config::AppConfig;
use infra_report::llm::OpenAiSummarizer;
use infra_report::mailer::{Delivery, FileDelivery, SmtpMailer, SmtpSettings};
use infra_report::runner::{ReportRunner, RunnerConfig, RunnerDeps};
use infra_report::version::{NAME, VERSION};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

async fn run_with<D: Delivery>(
    app_config: &AppConfig,
    summarizer: OpenAiSummarizer,
    delivery: D,
) -> Result<()> {
    let runner = ReportRunner::new(
        RunnerDeps {
            summarizer,
            delivery,
            inspector: OpensslInspector::new(&app_config.inspector.openssl_bin),
        },
        RunnerConfig::from_app(app_config),
    );
    let outcome = runner.run(chrono::Utc::now()).await?;
    tracing::info!(
        overall = %outcome.overall,
        used_fallback = outcome.used_fallback,
        subject = %outcome.subject,
        "Run complete"
    );
    Ok(())
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = try_main().await {
        tracing::error!(error = %e, "report run failed");
        std::process::exit(1);
    }
}

async fn try_main() -> Result<()> {
    tracing::info!(
        "===== New execution: {} {} at {} =====",
        NAME,
        VERSION,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let app_config = AppConfig::load()?;
    let secrets = app_config.resolve_secrets()?;
    if secrets.llm_api_key.is_empty() {
        tracing::info!(env = %app_config.llm.api_key_env, "LLM API key not set");
    }
    let summarizer = OpenAiSummarizer::new(&app_config.llm, secrets.llm_api_key.clone())?;

    if app_config.email.enabled {
        let settings = SmtpSettings {
            host: app_config.email.smtp_host.clone(),
            port: app_config.email.smtp_port,
            user: secrets.smtp_user.clone(),
            password: secrets.smtp_password.clone(),
            from: secrets.smtp_user.clone(),
            to: app_config.recipients(&secrets),
        };
        run_with(&app_config, summarizer, SmtpMailer::new(settings)).await
    } else {
        let delivery = FileDelivery::new(&app_config.report.output_path);
        run_with(&app_config, summarizer, delivery).await
    }
}
