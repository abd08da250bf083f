use clap::Parser;
use record_convert::utils::{error::ErrorSeverity, logger, validation::Validate};
use record_convert::{
    CliConfig, ConversionPipeline, ConversionPlan, ConvertEngine, ConvertError, LocalStorage,
};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, None, config.log_json);

    tracing::info!("Starting record-convert");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with(e);
    }

    // 先決定格式，副檔名不支援時不做任何 I/O
    let plan = match ConversionPlan::resolve(&config) {
        Ok(plan) => plan,
        Err(e) => exit_with(e),
    };
    tracing::info!(
        "Converting {} ({}) -> {} ({})",
        plan.input_path,
        plan.input_format,
        plan.output_path,
        plan.output_format
    );

    let engine = ConvertEngine::new(ConversionPipeline::new(LocalStorage::default(), plan));

    match engine.run() {
        Ok(output_path) => {
            println!("✅ Conversion completed: {}", output_path);
        }
        Err(e) => exit_with(e),
    }
}

fn exit_with(e: ConvertError) -> ! {
    if e.severity() == ErrorSeverity::Low {
        tracing::warn!("⚠️ Conversion skipped: {}", e);
        eprintln!("⚠️ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    tracing::error!(
        "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
