use clap::Parser;
use nearby_bikermeets::utils::logger::{self, LogFormat};
use nearby_bikermeets::utils::validation::Validate;
use nearby_bikermeets::{
    CliConfig, FileOptionsStore, MeetFinder, MeetsPlugin, OutputFormat, ShortcodeAttributes,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    let log_format = if config.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(log_format, config.verbose);

    tracing::info!("Starting bikermeets lookup");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let service = config.service_config()?;
    let finder = MeetFinder::new(&service)?;
    let store = FileOptionsStore::new(config.options_file.clone());
    let plugin = MeetsPlugin::new(store, finder).await?;

    // 命令列參數等同 shortcode 屬性
    let attributes = ShortcodeAttributes {
        radius: config.radius,
        limit: config.limit,
    };

    match config.format {
        OutputFormat::Html => {
            let html = plugin
                .render_shortcode(&attributes, config.location())
                .await;
            println!("{}", html);
        }
        OutputFormat::Json => match plugin.find_meets(&attributes, config.location()).await {
            Ok(links) => println!("{}", serde_json::to_string_pretty(&links)?),
            Err(e) => {
                tracing::error!("❌ Venue lookup failed: {}", e);
                eprintln!("❌ {}", e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(2);
            }
        },
    }

    Ok(())
}
