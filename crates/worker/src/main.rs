use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use advisor_core::domain::advice::PortfolioAdvice;
use advisor_core::domain::analytics::{AdvancedAnalytics, MarketAnalyticsReport};
use advisor_core::models::{AdvisoryInput, AdvisoryModel, AnalyticsInput};

mod inputs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportKind {
    Portfolio,
    Market,
    Advanced,
    All,
}

impl ReportKind {
    fn includes(self, other: ReportKind) -> bool {
        self == ReportKind::All || self == other
    }
}

#[derive(Debug, Parser)]
#[command(name = "advisor_worker")]
struct Args {
    /// Which report to produce.
    #[arg(long, value_enum, default_value = "all")]
    report: ReportKind,

    /// JSON file with the user profile.
    #[arg(long)]
    user_profile: Option<PathBuf>,

    /// JSON file with market data.
    #[arg(long)]
    market_data: Option<PathBuf>,

    /// JSON file with sentiment data.
    #[arg(long)]
    sentiment_data: Option<PathBuf>,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Serialize)]
struct ReportEnvelope {
    provider: String,
    generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    portfolio: Option<PortfolioAdvice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    market: Option<MarketAnalyticsReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    advanced: Option<AdvancedAnalytics>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = advisor_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    match run(&settings, &args).await {
        Ok(out) => {
            println!("{out}");
            Ok(())
        }
        Err(err) => {
            sentry_anyhow::capture_anyhow(&err);
            tracing::error!(report = ?args.report, error = %err, "report run failed");
            Err(err)
        }
    }
}

async fn run(settings: &advisor_core::config::Settings, args: &Args) -> anyhow::Result<String> {
    let model = advisor_core::models::from_settings(settings)?;
    let envelope = build_envelope(model.as_ref(), args).await?;

    tracing::info!(
        provider = %envelope.provider,
        report = ?args.report,
        "generated advisory report"
    );

    let out = if args.pretty {
        serde_json::to_string_pretty(&envelope)
    } else {
        serde_json::to_string(&envelope)
    };
    out.context("failed to serialize report")
}

async fn build_envelope(model: &dyn AdvisoryModel, args: &Args) -> anyhow::Result<ReportEnvelope> {
    let report = args.report;

    let portfolio = if report.includes(ReportKind::Portfolio) {
        let input = AdvisoryInput {
            user_profile: inputs::load_json(args.user_profile.as_deref())?,
            market_data: inputs::load_json(args.market_data.as_deref())?,
        };
        Some(model.recommend_portfolio(input).await?)
    } else {
        None
    };

    let market = if report.includes(ReportKind::Market) {
        let input = AnalyticsInput {
            market_data: inputs::load_json(args.market_data.as_deref())?,
            sentiment_data: inputs::load_json(args.sentiment_data.as_deref())?,
        };
        Some(model.market_analytics(input).await?)
    } else {
        None
    };

    let advanced = if report.includes(ReportKind::Advanced) {
        Some(model.advanced_analytics().await?)
    } else {
        None
    };

    Ok(ReportEnvelope {
        provider: model.provider().to_string(),
        generated_at: Utc::now(),
        portfolio,
        market,
        advanced,
    })
}

fn init_sentry(settings: &advisor_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
