use anyhow::ensure;
use clap::Subcommand;
use folio_client::{
    form::{FormController, SubmitOutcome},
    transport::{HttpSubmissionTransport, PanelKind, SubmissionTransportConfig},
    validate::FormFields,
};
use folio_config::Config;

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Submit a test message through the full client pipeline
    Test {
        /// Submission endpoint; defaults to the configured http address
        #[arg(long)]
        target: Option<String>,
        #[arg(long, default_value = "Test")]
        first_name: String,
        #[arg(long, default_value = "test@example.com")]
        email: String,
        #[arg(long, default_value = "Contact form deliverability test")]
        message: String,
    },
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            ContactCommand::Test {
                target,
                first_name,
                email,
                message,
            } => test(config, target, first_name, email, message).await,
        }
    }
}

async fn test(
    config: Config,
    target: Option<String>,
    first_name: String,
    email: String,
    message: String,
) -> anyhow::Result<()> {
    let target = target.unwrap_or_else(|| {
        format!("http://{}:{}/contact", config.http.host, config.http.port)
    });

    let transport = HttpSubmissionTransport::new(SubmissionTransportConfig { target });
    let mut controller = FormController::new(transport);

    let mut fields = FormFields {
        first_name,
        email,
        message,
        ..Default::default()
    };

    match controller.submit(&mut fields).await {
        SubmitOutcome::Panel(panel) => {
            println!("{}: {}", panel.title, panel.body);
            ensure!(panel.kind == PanelKind::Success, "Submission failed");
        }
        SubmitOutcome::Rejected(errors) => {
            for error in &errors {
                eprintln!("{:?}: {}", error.field, error.error);
            }
            anyhow::bail!("Validation failed");
        }
        SubmitOutcome::Accepted | SubmitOutcome::AlreadyPending => unreachable!(),
    }

    Ok(())
}
