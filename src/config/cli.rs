use crate::config::toml_config::{ChainConfig, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "small-fp")]
#[command(about = "Run a map/filter/reduce chain and print the result")]
pub struct CliConfig {
    /// Path to a TOML chain file; the built-in default chain is used when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the output format from the chain file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// 載入串接設定：有指定檔案就讀檔，否則使用預設串接
    pub fn load_chain(&self) -> Result<ChainConfig> {
        let mut chain = match &self.config {
            Some(path) => ChainConfig::from_file(path)?,
            None => ChainConfig::default(),
        };

        // 命令列覆蓋設定
        if let Some(format) = self.format {
            chain.output = Some(crate::config::toml_config::OutputConfig {
                format: Some(format),
            });
        }

        chain.validate()?;
        Ok(chain)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_builtin_chain() {
        let cli = CliConfig::parse_from(["small-fp"]);
        assert!(cli.validate().is_ok());
        let chain = cli.load_chain().unwrap();
        assert_eq!(chain.chain.name, "default");
        assert_eq!(chain.output_format(), OutputFormat::Plain);
    }

    #[test]
    fn test_format_override() {
        let cli = CliConfig::parse_from(["small-fp", "--format", "json", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.load_chain().unwrap().output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let cli = CliConfig::parse_from(["small-fp", "--config", "/nonexistent/chain.toml"]);
        assert!(matches!(
            cli.load_chain(),
            Err(crate::utils::error::ChainError::IoError(_))
        ));
    }
}
