/*
 * expand.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Expand command implementation
 */

//! Expand command implementation.
//!
//! Resolves the effective options (defaults, then `weave.toml`, then flags),
//! runs the expansion and either writes the `t.`-prefixed artifact or prints
//! the result.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use weave_runtime::NativeRuntime;
use weave_template::{ExpandOptions, Expander};

use crate::config::WeaveConfig;

/// Arguments for the expand command
#[derive(Debug, Clone, Default)]
pub struct ExpandArgs {
    /// Root document
    pub input: PathBuf,
    /// Explicit config file
    pub config: Option<PathBuf>,
    /// Boundary marker override
    pub boundaries: Option<bool>,
    /// Output prefix override
    pub prefix: Option<String>,
    /// Nesting depth override
    pub max_depth: Option<usize>,
    /// Print to stdout instead of writing the artifact
    pub stdout: bool,
}

impl ExpandArgs {
    /// Effective options: defaults, then config file, then flags.
    pub fn resolve_options(&self) -> Result<ExpandOptions> {
        let config = WeaveConfig::discover(self.config.as_deref(), &self.input)?;
        let mut options = config.apply(ExpandOptions::default());

        if let Some(emit) = self.boundaries {
            options = options.with_boundaries(emit);
        }
        if let Some(prefix) = &self.prefix {
            options = options.with_output_prefix(prefix.clone());
        }
        if let Some(depth) = self.max_depth {
            options = options.with_max_depth(depth);
        }
        Ok(options)
    }
}

/// Execute the expand command
pub fn execute(args: ExpandArgs) -> Result<()> {
    let options = args.resolve_options()?;
    let expander = Expander::new(NativeRuntime::new()).with_options(options);

    if args.stdout {
        let result = expander
            .expand_to_string(&args.input)
            .with_context(|| format!("Failed to expand {}", args.input.display()))?;
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(result.as_bytes())
            .context("Failed to write to stdout")?;
        stdout.flush().context("Failed to write to stdout")?;
        return Ok(());
    }

    let output = expander
        .expand(&args.input)
        .with_context(|| format!("Failed to expand {}", args.input.display()))?;
    info!("Wrote {}", output.display());
    Ok(())
}
