use anyhow::Context;
use clap::Parser;
use record_convert::config::toml_config::TomlConfig;
use record_convert::utils::{error::ErrorSeverity, logger, validation::Validate};
use record_convert::{ConversionPipeline, ConversionPlan, ConvertEngine, ConvertError, LocalStorage};

#[derive(Parser)]
#[command(name = "toml-convert")]
#[command(about = "Run a record conversion described by a TOML job file")]
struct Args {
    /// Path to TOML job file
    #[arg(short, long, default_value = "convert-job.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - show the resolved conversion without reading or writing records
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置，日誌要等設定檔讀完才知道層級
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load job file '{}': {}", args.config, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_logger(args.verbose, config.log_level(), config.log_json());
    tracing::info!("🚀 Starting TOML-based conversion");
    tracing::info!("📁 Loaded job from: {}", args.config);

    if let Err(e) = config.validate() {
        exit_with(e);
    }

    let plan = match ConversionPlan::resolve(&config) {
        Ok(plan) => plan,
        Err(e) => exit_with(e),
    };

    display_job_summary(&config, &plan, args.dry_run);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No conversion will occur");
        perform_dry_run(&plan)?;
        return Ok(());
    }

    let engine = ConvertEngine::new(ConversionPipeline::new(LocalStorage::default(), plan));

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ Job '{}' completed", config.job.name);
            println!("✅ Conversion completed: {}", output_path);
        }
        Err(e) => exit_with(e),
    }

    Ok(())
}

fn display_job_summary(config: &TomlConfig, plan: &ConversionPlan, dry_run: bool) {
    println!("📋 Job Summary:");
    println!("  Job: {}", config.job.name);
    if let Some(description) = &config.job.description {
        println!("  Description: {}", description);
    }
    println!("  Input: {} ({})", plan.input_path, plan.input_format);
    println!("  Output: {} ({})", plan.output_path, plan.output_format);

    if dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(plan: &ConversionPlan) -> anyhow::Result<()> {
    let metadata = std::fs::metadata(&plan.input_path)
        .with_context(|| format!("input file '{}' is not accessible", plan.input_path))?;
    println!("🔍 Dry Run Analysis:");
    println!("  Input size: {} bytes", metadata.len());

    if std::path::Path::new(&plan.output_path).exists() {
        println!("  ⚠️ Output file exists and would be overwritten");
    }

    println!();
    println!("✅ Dry run analysis complete.");
    Ok(())
}

fn exit_with(e: ConvertError) -> ! {
    if e.severity() == ErrorSeverity::Low {
        tracing::warn!("⚠️ Conversion skipped: {}", e);
        eprintln!("⚠️ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    tracing::error!(
        "❌ Job failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
