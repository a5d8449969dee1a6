use clap::Parser;
use small_fp::utils::{logger, validation::Validate};
use small_fp::{ChainEngine, ChainError, CliConfig, ConfiguredChain};

fn run(config: &CliConfig) -> Result<String, ChainError> {
    config.validate()?;

    let chain_config = config.load_chain()?;
    let format = chain_config.output_format();
    tracing::debug!("Chain config: {:?}", chain_config);

    let engine = ChainEngine::new(ConfiguredChain::new(chain_config));
    let outcome = engine.run()?;
    outcome.render(format)
}

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    match run(&config) {
        Ok(line) => println!("{}", line),
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "Chain failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
