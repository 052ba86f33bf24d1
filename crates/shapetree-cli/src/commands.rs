use crate::args::{Cli, ColorMode};
use crate::input;
use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use shapetree_engine::{ModelOpts, RenderOpts, format_value};
use std::io::Read;

pub fn run(cli: Cli) -> Result<()> {
    let raw = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let json: serde_json::Value =
        serde_json::from_str(&raw).context("Input is not valid JSON")?;
    let value = input::value_from_json(&json)?;

    let model_opts = ModelOpts {
        detailed: cli.detailed,
        max_depth: cli.max_depth,
    };
    let render_opts = RenderOpts {
        indent: cli.indent,
        enable_color: match cli.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        },
        max_depth: cli.max_depth,
    };

    let rendered = format_value(&value, &model_opts, &render_opts)?;
    println!("{}", rendered);

    Ok(())
}
