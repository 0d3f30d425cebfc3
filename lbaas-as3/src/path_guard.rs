use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Refuse an `--output` path that resolves to the input bundle.
pub fn ensure_output_not_input(output: &Path, input: &Path) -> Result<()> {
    let out_norm = normalize_for_compare(output)
        .with_context(|| format!("failed to normalize output path {}", output.display()))?;
    let in_norm = normalize_for_compare(input)
        .with_context(|| format!("failed to normalize input path {}", input.display()))?;

    if out_norm == in_norm {
        bail!(
            "refusing to overwrite input bundle: output {} matches input {}",
            output.display(),
            input.display()
        );
    }
    Ok(())
}

fn normalize_for_compare(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return path
            .canonicalize()
            .with_context(|| format!("canonicalize {}", path.display()));
    }

    // Not on disk yet, so only anchor relative paths at cwd; `..` stays unresolved.
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("current_dir")?;
    Ok(cwd.join(path))
}
