//! Verify canonical function ordering without rewriting anything.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use colored::*;
use rayon::prelude::*;
use serde::Serialize;

use crate::analyzers::SolidityAnalyzer;
use crate::cli::OutputFormat;
use crate::core::ordering::is_canonically_ordered;
use crate::io;

pub struct CheckConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub files: Vec<FileCheck>,
    pub unsorted: usize,
}

#[derive(Debug, Serialize)]
pub struct FileCheck {
    pub path: PathBuf,
    pub ordered: bool,
    pub unsorted_contracts: Vec<String>,
}

pub fn check_paths(config: CheckConfig) -> Result<CheckReport> {
    let files = if config.path.is_dir() {
        io::find_solidity_files(&config.path)?
    } else {
        vec![config.path.clone()]
    };

    let checks: Vec<Result<FileCheck>> = files.par_iter().map(|file| check_file(file)).collect();

    let mut report = CheckReport {
        files: Vec::new(),
        unsorted: 0,
    };
    let mut failed = 0;
    for (file, check) in files.iter().zip(checks) {
        match check {
            Ok(file_check) => {
                if !file_check.ordered {
                    report.unsorted += 1;
                }
                report.files.push(file_check);
            }
            Err(error) => {
                failed += 1;
                log::error!("{}: {error:#}", file.display());
            }
        }
    }
    if failed > 0 {
        bail!("{failed} file(s) could not be checked");
    }

    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Terminal => print_terminal(&report),
    }

    Ok(report)
}

fn check_file(path: &Path) -> Result<FileCheck> {
    let source = io::read_file(path)?;
    let mut analyzer = SolidityAnalyzer::new()?;
    let ast = analyzer.parse(&source, path.to_path_buf())?;

    let mut unsorted_contracts = Vec::new();
    for scope in ast.contracts() {
        if !is_canonically_ordered(&scope.members)? {
            unsorted_contracts.push(scope.name);
        }
    }

    Ok(FileCheck {
        path: path.to_path_buf(),
        ordered: unsorted_contracts.is_empty(),
        unsorted_contracts,
    })
}

fn print_terminal(report: &CheckReport) {
    for file in &report.files {
        if !file.ordered {
            println!(
                "{}: functions out of canonical order in {}",
                file.path.display(),
                file.unsorted_contracts.join(", ")
            );
        }
    }

    let checked = report.files.len();
    if report.unsorted == 0 {
        println!(
            "{}",
            format!("{checked} file(s) checked, all canonically ordered").green()
        );
    } else {
        println!(
            "{}",
            format!(
                "{checked} file(s) checked, {} with non-canonical ordering",
                report.unsorted
            )
            .yellow()
        );
    }
}
