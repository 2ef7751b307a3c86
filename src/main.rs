use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use revelia::i18n::{self, Language};
use revelia::workflows::analysis::AnalysisView;
use revelia::workflows::state::Submission;
use revelia::{AppConfig, HttpDreamApi, LandingSession};

#[derive(Parser, Debug)]
#[command(name = "revelia", about = "Revelia.life landing page driver")]
struct Cli {
    /// UI language: es, en or pt
    #[arg(long, short, global = true, default_value = "es")]
    lang: Language,

    /// Overrides BACKEND_URL
    #[arg(long, global = true)]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the localized landing copy and pricing plans
    Page,
    /// Submit a dream for analysis and print the result
    Analyze {
        text: String,
        #[arg(long)]
        email: Option<String>,
    },
    /// Submit an email lead
    Lead { email: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let _guard = std::env::var("SENTRY_DSN").ok().map(|dsn| {
        sentry::init((
            dsn.as_str(),
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    use tracing_subscriber::{fmt, EnvFilter};
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,revelia=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();

    i18n::validate_catalog().context("Localization catalog is incomplete")?;

    let cli = Cli::parse();
    let mut config = AppConfig::from_env().context("Invalid backend configuration")?;
    if let Some(url) = cli.backend_url.as_deref() {
        config = config.with_backend_url(url)?;
    }

    let mut session = LandingSession::new(Arc::new(HttpDreamApi::new(&config)));
    session.set_language(cli.lang);

    match cli.command {
        Command::Page => print_page(&session),
        Command::Analyze { text, email } => {
            session.set_dream_text(text);
            session.set_email(email.unwrap_or_default());
            println!("{}", session.analyze_button_label());
            if let Submission::Skipped(reason) = session.analyze().await {
                tracing::info!(?reason, "Nothing submitted");
                return Ok(());
            }
            print_analysis(&session.analysis_view());
        }
        Command::Lead { email } => {
            session.set_email(email);
            session.capture_lead().await;
            if let Some(message) = session.lead_view().message {
                println!("{message}");
            }
        }
    }
    Ok(())
}

fn print_page(session: &LandingSession<HttpDreamApi>) {
    let texts = session.texts();
    println!("{}  [{}: {}]", texts.title, texts.lang_label, session.language().display_name());
    println!("{}", texts.subtitle);
    println!("SEO: {}", texts.seo_hero);
    println!();
    println!("{} -> [{}]", texts.placeholder, texts.cta_analyze);
    println!("{} ({}) -> [{}]", texts.lead_title, texts.email_placeholder, texts.lead_cta);
    println!();
    println!("{}", texts.pricing_title);
    for card in session.pricing() {
        let marker = if card.highlighted { "*" } else { " " };
        println!("{marker} {} {}", card.name, card.price);
        for feature in card.features {
            println!("    - {feature}");
        }
        println!("    [{}]", card.cta);
    }
}

fn print_analysis(view: &AnalysisView) {
    match view {
        AnalysisView::Ready(rendered) => {
            println!("{}", rendered.heading);
            println!("{}", rendered.summary);
            println!("{}: {}", rendered.themes_label, rendered.themes);
            println!("{}: {}", rendered.tips_label, rendered.recommendations);
        }
        AnalysisView::Failed { message } => println!("{message}"),
        AnalysisView::Loading { label } => println!("{label}"),
        AnalysisView::Hidden => {}
    }
}
