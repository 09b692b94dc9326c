use bookstore::utils::{logger, validation::Validate};
use bookstore::{Bookstore, CliConfig, MatchPolicy, StoreConfig, StoreReport};
use clap::Parser;

fn main() {
    let args = CliConfig::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("📁 Loading store configuration from: {}", args.config);

    let mut config = match StoreConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(titles) = &args.titles {
        config.catalog.titles_path = Some(titles.clone());
        tracing::info!("🔧 Title list overridden to: {}", titles);
    }
    if args.ignore_case {
        config.catalog.case_sensitive = Some(false);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let store = Bookstore::from_config(&config);
    if store.catalog().is_degraded() {
        tracing::warn!("⚠️ {} starts with an empty catalog", store.store_name());
    }
    tracing::debug!(
        "Catalog ready: {} titles, case-insensitive words: {}",
        store.title_count(),
        store.catalog().match_policy() == MatchPolicy::CaseInsensitive
    );

    for line in StoreReport::new(&store).render(&args.find, &args.words) {
        println!("{}", line);
    }
}
