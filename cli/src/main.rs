//! CLI entrypoint for claimcheck
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use claimcheck_application::{
    ActivityLogger, ConsensusParams, IdentityProvider, NoActivityLogger, RenderEvidenceUseCase,
    ReviewEvidenceInput, ReviewEvidenceUseCase, SubmitClaimInput, SubmitClaimUseCase,
    SubmitEvidenceInput, SubmitEvidenceUseCase,
};
use claimcheck_domain::{ClaimId, EvidenceId, UserId};
use claimcheck_infrastructure::{
    ConfigLoader, FileConfig, JsonFactStore, JsonlActivityLogger, StaticIdentity,
};
use claimcheck_presentation::cli::commands::{claim_draft, evidence_draft};
use claimcheck_presentation::{Cli, Command, OutputFormatter, formatter_for, set_color_enabled};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cli.log_level()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    let params = validated_params(&config)?;

    set_color_enabled(config.output.color);
    let format = config.output.resolve_format(cli.output.map(Into::into));
    let formatter = formatter_for(format);

    // === Dependency Injection ===
    let dataset = cli
        .dataset
        .clone()
        .unwrap_or_else(|| config.store.dataset.clone());
    let store = Arc::new(
        JsonFactStore::open(&dataset)
            .await
            .with_context(|| format!("Failed to open dataset {}", dataset.display()))?,
    );

    let user_id = cli.user_id().or(config.identity.user.map(UserId));
    let identity: Arc<dyn IdentityProvider> = Arc::new(
        StaticIdentity::resolve(&store, user_id)
            .await
            .context("Unknown user")?,
    );

    let logger: Arc<dyn ActivityLogger> = match config
        .logging
        .activity_log_path()
        .and_then(JsonlActivityLogger::open)
    {
        Some(logger) => Arc::new(logger),
        None => Arc::new(NoActivityLogger),
    };

    let Some(command) = cli.command else {
        bail!("No command given. Run `claimcheck --help` for usage.");
    };

    info!("Starting claimcheck (threshold {}%)", params.threshold.percent());

    let app = App {
        store,
        identity,
        logger,
        params,
        formatter,
    };
    let output = app.run(command).await?;
    println!("{}", output);

    Ok(())
}

/// Report every config issue and fail on errors
fn validated_params(config: &FileConfig) -> Result<ConsensusParams> {
    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            error!("{}", issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }

    let errors = issues.iter().filter(|i| i.is_error()).count();
    if errors > 0 {
        bail!("Configuration has {} error(s)", errors);
    }

    Ok(config.consensus.to_params().0)
}

/// Wired-up use cases for one invocation
struct App {
    store: Arc<JsonFactStore>,
    identity: Arc<dyn IdentityProvider>,
    logger: Arc<dyn ActivityLogger>,
    params: ConsensusParams,
    formatter: Box<dyn OutputFormatter>,
}

impl App {
    fn render(&self) -> RenderEvidenceUseCase<JsonFactStore> {
        RenderEvidenceUseCase::new(Arc::clone(&self.store)).with_params(self.params)
    }

    async fn run(&self, command: Command) -> Result<String> {
        match command {
            Command::Claims => {
                let claims = self.render().list_claims().await?;
                Ok(self.formatter.format_claims(&claims))
            }
            Command::Claim { id } => {
                let claim = self.render().render_claim(ClaimId(id)).await?;
                Ok(self.formatter.format_claim(&claim))
            }
            Command::Evidence { id } => {
                let evidence = self.render().execute(EvidenceId(id)).await?;
                Ok(self.formatter.format_evidence(&evidence))
            }
            Command::Review {
                evidence_id,
                relationship,
                details,
            } => {
                let use_case =
                    ReviewEvidenceUseCase::new(Arc::clone(&self.store), Arc::clone(&self.identity))
                        .with_logger(Arc::clone(&self.logger))
                        .with_params(self.params);
                let input =
                    ReviewEvidenceInput::new(EvidenceId(evidence_id), details.to_review(relationship));
                let result = use_case.execute(input).await?;
                self.persist().await?;
                Ok(self.formatter.format_review(&result))
            }
            Command::SubmitClaim {
                claim_text,
                description,
                topic,
                source,
            } => {
                let use_case =
                    SubmitClaimUseCase::new(Arc::clone(&self.store), Arc::clone(&self.identity))
                        .with_logger(Arc::clone(&self.logger));
                let input = SubmitClaimInput::new(
                    claim_draft(&claim_text, &description, topic),
                    source.to_source(),
                );
                let claim = use_case.execute(input).await?;
                self.persist().await?;

                let view = self.render().render_claim(claim.id).await?;
                Ok(self.formatter.format_claim(&view))
            }
            Command::SubmitEvidence {
                claim_id,
                description,
                source,
                relationship,
                review,
            } => {
                let use_case =
                    SubmitEvidenceUseCase::new(Arc::clone(&self.store), Arc::clone(&self.identity))
                        .with_logger(Arc::clone(&self.logger));
                let mut input = SubmitEvidenceInput::new(
                    evidence_draft(claim_id, &description),
                    source.to_source(),
                );
                if let Some(relationship) = relationship {
                    input = input.with_review(review.to_review(relationship));
                }
                let submitted = use_case.execute(input).await?;
                self.persist().await?;

                let view = self.render().execute(submitted.evidence.id).await?;
                Ok(self.formatter.format_evidence(&view))
            }
        }
    }

    async fn persist(&self) -> Result<()> {
        self.store
            .save()
            .await
            .context("Failed to save dataset")?;
        if let Some(path) = self.store.path() {
            info!("Saved dataset to {}", path.display());
        }
        Ok(())
    }
}
