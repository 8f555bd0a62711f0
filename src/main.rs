use clap::Parser;
use student_registry::app::demo::run_demo;
use student_registry::app::session::DEFAULT_TITLE;
use student_registry::utils::error::ErrorSeverity;
use student_registry::utils::{logger, validation::Validate};
use student_registry::{
    stdio_prompter, CliConfig, OutputFormat, RegistryError, RosterConfig, Session, StudentStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting student-registry");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ student-registry failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(config: &CliConfig) -> Result<(), RegistryError> {
    let mut store = StudentStore::new();
    let mut title = DEFAULT_TITLE.to_string();

    if let Some(path) = &config.roster {
        tracing::info!("📁 Loading roster from: {}", path);
        let roster = RosterConfig::from_file(path)?;
        roster.validate()?;
        roster.seed(&mut store)?;
        if let Some(roster_title) = roster.title() {
            title = roster_title.to_string();
        }
    }

    let format = config.output_format();

    if config.demo {
        let mut out = tokio::io::stdout();
        return run_demo(&mut store, &mut out, format).await;
    }

    // JSON mode keeps stdout to JSON documents; questions go to stderr.
    let prompter = stdio_prompter(format == OutputFormat::Json);
    let mut session = Session::new(store, prompter, tokio::io::stdout())
        .with_format(format)
        .with_title(title);
    session.run().await
}
