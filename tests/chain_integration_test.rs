use anyhow::Result;
use small_fp::core::Pipeline;
use small_fp::{ChainConfig, ChainEngine, ChainError, ConfiguredChain, OutputFormat};
use small_fp::utils::validation::Validate;
use tempfile::TempDir;

fn run_toml(content: &str) -> small_fp::Result<i64> {
    let config = ChainConfig::from_toml_str(content)?;
    config.validate()?;
    Ok(ChainEngine::new(ConfiguredChain::new(config)).run()?.result)
}

/// 測試內建預設串接：[10..50] ×3 → >100 → sum = 270
#[test]
fn test_default_chain_end_to_end() -> Result<()> {
    let outcome = ChainEngine::new(ConfiguredChain::new(ChainConfig::default())).run()?;
    assert_eq!(outcome.chain, "default");
    assert_eq!(outcome.input_len, 5);
    assert_eq!(outcome.surviving_len, 2);
    assert_eq!(outcome.result, 270);
    Ok(())
}

#[test]
fn test_shipped_config_file() -> Result<()> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/configs/default_chain.toml");
    let config = ChainConfig::from_file(path)?;
    config.validate()?;
    assert_eq!(config.output_format(), OutputFormat::Plain);

    let outcome = ChainEngine::new(ConfiguredChain::new(config)).run()?;
    assert_eq!(outcome.result, 270);
    Ok(())
}

#[test]
fn test_chain_from_temp_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("odd_squares.toml");
    std::fs::write(
        &config_path,
        r#"
[chain]
name = "odd-squares"
values = [1, 2, 3, 4, 5]

[[steps]]
filter = { op = "odd" }

[[steps]]
map = { op = "square" }

[reduce]
op = "max"
initial = -1

[output]
format = "json"
"#,
    )?;

    let config = ChainConfig::from_file(&config_path)?;
    assert_eq!(config.output_format(), OutputFormat::Json);

    let chain = ConfiguredChain::new(config);
    assert_eq!(chain.name(), "odd-squares");
    let transformed = chain.transform(chain.extract()?)?;
    assert_eq!(transformed.as_slice(), &[1, 9, 25]);
    assert_eq!(chain.reduce(transformed)?, 25);
    Ok(())
}

#[test]
fn test_empty_values_reduce_to_initial() -> Result<()> {
    let result = run_toml(
        r#"
[chain]
name = "empty"
values = []

[[steps]]
map = { op = "add", value = 1 }

[reduce]
op = "product"
initial = 7
"#,
    )?;
    assert_eq!(result, 7);
    Ok(())
}

/// 測試執行期溢位會中止串接並回報原始錯誤
#[test]
fn test_overflow_stops_chain() {
    let err = run_toml(
        r#"
[chain]
name = "overflow"
values = [2, 3]

[[steps]]
map = { op = "multiply", value = 9223372036854775807 }

[reduce]
op = "sum"
"#,
    )
    .unwrap_err();

    assert!(matches!(err, ChainError::ArithmeticOverflow { lhs: 2, .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_zero_divisor_rejected_before_running() {
    let err = run_toml(
        r#"
[chain]
name = "bad"
values = [4]

[[steps]]
filter = { op = "divisible_by", value = 0 }

[reduce]
op = "sum"
"#,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ChainError::InvalidConfigValueError { ref field, .. } if field == "steps[0].filter.value"
    ));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_unknown_op_is_config_error() {
    let err = run_toml(
        r#"
[chain]
name = "unknown"
values = [1]

[[steps]]
map = { op = "cube" }

[reduce]
op = "sum"
"#,
    )
    .unwrap_err();

    assert!(matches!(err, ChainError::ConfigError { .. }));
}

/// 測試 stdout 單行輸出：plain 為純量，json 只含 chain 與 result
#[test]
fn test_default_chain_renders_one_line() -> Result<()> {
    let outcome = ChainEngine::new(ConfiguredChain::new(ChainConfig::default())).run()?;
    assert_eq!(outcome.render(OutputFormat::Plain)?, "270");
    assert_eq!(
        outcome.render(OutputFormat::Json)?,
        r#"{"chain":"default","result":270}"#
    );
    Ok(())
}
