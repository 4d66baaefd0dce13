//! `lexgate config init`

use crate::cli::ConfigInitArgs;
use crate::config::{ConfigError, LexgateConfig};
use std::fs;

const EXAMPLE_CONFIG: &str = include_str!("../../lexgate.example.toml");

/// Example configuration, pointed at `base_url` when one is given.
///
/// The result is parsed and validated before it is returned, so a file
/// written from it always loads.
pub fn render_config(base_url: Option<&str>) -> Result<String, ConfigError> {
    let content = match base_url {
        Some(url) => {
            let quoted = toml::Value::String(url.to_string()).to_string();
            let mut out: String = EXAMPLE_CONFIG
                .lines()
                .map(|line| {
                    if line.starts_with("base_url = ") {
                        format!("base_url = {}", quoted)
                    } else {
                        line.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join("\n");
            out.push('\n');
            out
        }
        None => EXAMPLE_CONFIG.to_string(),
    };

    let config: LexgateConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;

    Ok(content)
}

/// Write a starter config file, refusing to clobber one unless forced.
pub fn handle_config_init(
    args: &ConfigInitArgs,
    base_url: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.output.exists() && !args.force {
        return Err(format!(
            "File already exists: {}. Use --force to overwrite.",
            args.output.display()
        )
        .into());
    }

    let content = render_config(base_url)?;
    fs::write(&args.output, content)?;

    println!("✓ Configuration file created: {}", args.output.display());
    match base_url {
        Some(url) => println!("  QA service: {}", url),
        None => println!("  Point [gateway].base_url at your QA service."),
    }

    Ok(())
}
