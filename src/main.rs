use clap::Parser;
use topic_aggregator::utils::{logger, validation::Validate};
use topic_aggregator::{CliConfig, LocalStorage, ReportEngine, Settings, SummaryPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting topic-aggregator CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 載入選用的設定檔
    let settings = match &config.settings {
        Some(path) => match Settings::from_file(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!("❌ Failed to load settings '{}': {}", path, e);
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };

    // 驗證設定檔,壞的比對樣板在這裡就擋下來
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Settings validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 創建存儲和管道
    let storage = LocalStorage::new(config.output_dir.clone());
    let rule = settings.match_rule();
    let render_config = settings.render_config();
    let pipeline = SummaryPipeline::new(storage, config, rule).with_render_config(render_config);

    // 創建報告引擎並運行
    let engine = ReportEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Report completed successfully!");
            tracing::info!("📁 Report saved to: {}", output_path);
            println!("✅ Report completed successfully!");
            println!("📁 Report saved to: {}", output_path);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Report run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                topic_aggregator::utils::error::ErrorSeverity::Low => 0, // 警告，但成功
                topic_aggregator::utils::error::ErrorSeverity::Medium => 2, // 配置錯誤
                topic_aggregator::utils::error::ErrorSeverity::High => 1, // 處理錯誤
                topic_aggregator::utils::error::ErrorSeverity::Critical => 3, // 系統錯誤
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
