//! Reorder contract functions in Solidity files.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use rayon::prelude::*;

use crate::io;

pub struct SortConfig {
    pub path: PathBuf,
    pub output: Option<PathBuf>,
    pub write: bool,
}

pub fn sort_path(config: SortConfig) -> Result<()> {
    if config.path.is_dir() {
        if !config.write {
            bail!("sorting a directory requires --write");
        }
        sort_directory(&config.path)
    } else {
        sort_single(&config)
    }
}

fn sort_single(config: &SortConfig) -> Result<()> {
    let source = io::read_file(&config.path)?;
    let sorted = crate::reorder_source_text(&source, &config.path)
        .with_context(|| format!("failed to sort {}", config.path.display()))?;

    if config.write {
        if sorted != source {
            io::write_file(&config.path, &sorted)?;
            log::info!("rewrote {}", config.path.display());
        }
    } else if let Some(output) = &config.output {
        io::write_file(output, &sorted)?;
    } else {
        print!("{sorted}");
    }
    Ok(())
}

fn sort_directory(root: &Path) -> Result<()> {
    let files = io::find_solidity_files(root)?;
    log::info!(
        "sorting {} Solidity files under {}",
        files.len(),
        root.display()
    );

    let outcomes: Vec<(&PathBuf, Result<bool>)> = files
        .par_iter()
        .map(|file| (file, sort_in_place(file)))
        .collect();

    let mut changed = 0;
    let mut failed = 0;
    for (file, outcome) in outcomes {
        match outcome {
            Ok(true) => changed += 1,
            Ok(false) => {}
            Err(error) => {
                failed += 1;
                log::error!("{}: {error:#}", file.display());
            }
        }
    }

    println!(
        "Reordered {changed} of {} files, {} already canonical",
        files.len(),
        files.len() - changed - failed
    );
    if failed > 0 {
        bail!("{failed} file(s) could not be sorted");
    }
    Ok(())
}

/// Returns whether the file changed.
fn sort_in_place(path: &Path) -> Result<bool> {
    let source = io::read_file(path)?;
    let sorted = crate::reorder_source_text(&source, path)?;
    if sorted == source {
        return Ok(false);
    }
    io::write_file(path, &sorted)?;
    Ok(true)
}
