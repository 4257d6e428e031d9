mod commands;
mod logging;
mod prompt;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{self, Command};

use anyhow::Context;
use clap::{CommandFactory, Parser};
use colored::*;
use commands::{Cli, Commands};
use dotenv::dotenv;
use prompt::StdinPrompt;
use scrappit_core::{
    AutoConfirm, ConfirmPrompt, CutOutcome, LineRange, ScrapConfig, ScrapEngine, SplitMode,
};
use tracing::error;
use walkdir::WalkDir;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let args = Cli::parse();

    let project = match resolve_project_folder(args.project.as_deref()) {
        Some(project) => project,
        None => {
            println!("{}", "No project folder available. Nothing done.".yellow());
            return Ok(());
        }
    };

    let config = match scrappit_core::config::load_configuration(Some(&project)) {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    let engine = ScrapEngine::new(project, config.clone());

    match args.command {
        Some(Commands::Cut { file, lines, yes }) => {
            if let Err(err) = run_cut(&engine, &file, &lines, yes) {
                error!("Error: {}", err);
                process::exit(1);
            }
        }
        Some(Commands::Archive { file, yes }) => {
            if let Err(err) = run_archive(&engine, file.as_deref(), yes) {
                error!("Error: {}", err);
                process::exit(1);
            }
        }
        Some(Commands::Companion { file, open }) => {
            if let Err(err) = run_companion(&engine, &config, &file, open) {
                error!("Error: {}", err);
                process::exit(1);
            }
        }
        Some(Commands::Tree) => {
            if let Err(err) = run_tree(&engine) {
                error!("Error: {}", err);
                process::exit(1);
            }
        }
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:#?}", config);
            match engine.scrap_root() {
                Ok(root) => println!("Scrap root: {}", root.display()),
                Err(err) => println!("Scrap root: {}", err.to_string().red()),
            }
        }
        None => {
            let _ = Cli::command().print_long_help();
        }
    }

    Ok(())
}

/// Explicit project folder or the current directory, canonicalized.
fn resolve_project_folder(project: Option<&Path>) -> Option<PathBuf> {
    let folder = match project {
        Some(p) => p.to_path_buf(),
        None => env::current_dir().ok()?,
    };
    fs::canonicalize(folder).ok()
}

fn canonical_file(file: &Path) -> anyhow::Result<PathBuf> {
    fs::canonicalize(file).with_context(|| format!("cannot access file {}", file.display()))
}

fn confirm_prompt(assume_yes: bool) -> Box<dyn ConfirmPrompt> {
    if assume_yes {
        Box::new(AutoConfirm)
    } else {
        Box::new(StdinPrompt)
    }
}

fn run_cut(
    engine: &ScrapEngine,
    file: &Path,
    lines: &[LineRange],
    assume_yes: bool,
) -> anyhow::Result<()> {
    let file = canonical_file(file)?;
    let prompt = confirm_prompt(assume_yes);

    match engine.cut(&file, lines, prompt.as_ref())? {
        CutOutcome::Cut {
            log_file,
            blocks_written,
            ..
        } => {
            println!(
                "{} {} ({} block{})",
                "Scrap sent text to:".green(),
                log_file.display(),
                blocks_written,
                if blocks_written == 1 { "" } else { "s" },
            );
        }
        CutOutcome::NothingSelected => {
            println!("{}", "No text selected for scrapping. Nothing done.".yellow());
        }
    }
    Ok(())
}

fn run_archive(
    engine: &ScrapEngine,
    file: Option<&Path>,
    assume_yes: bool,
) -> anyhow::Result<()> {
    let Some(file) = file else {
        println!("{}", "No file given for archiving. Nothing done.".yellow());
        return Ok(());
    };
    let file = canonical_file(file)?;
    let prompt = confirm_prompt(assume_yes);

    let dest = engine.archive(&file, prompt.as_ref())?;
    println!("{} {}", "Archived whole file to:".green(), dest.display());
    Ok(())
}

fn run_companion(
    engine: &ScrapEngine,
    config: &ScrapConfig,
    file: &Path,
    open: bool,
) -> anyhow::Result<()> {
    let file = canonical_file(file)?;

    let Some(log) = engine.companion(&file)? else {
        println!(
            "{} {}",
            "No scrap file found corresponding to:".yellow(),
            file.display()
        );
        return Ok(());
    };

    println!("{}", log.display());
    if open {
        open_side_by_side(&file, &log, config.compare_split())?;
    }
    Ok(())
}

/// Open source and scrap log in the user's editor. vim-style editors honor
/// the configured split with -o/-O.
fn open_side_by_side(file: &Path, log: &Path, split: SplitMode) -> anyhow::Result<()> {
    let editor = match env::var("VISUAL").or_else(|_| env::var("EDITOR")) {
        Ok(editor) => editor,
        Err(_) => {
            println!("{}", "Neither $VISUAL nor $EDITOR is set.".yellow());
            return Ok(());
        }
    };

    let mut cmd = Command::new(&editor);
    match split {
        SplitMode::Horizontal => {
            cmd.arg("-o");
        }
        SplitMode::Vertical => {
            cmd.arg("-O");
        }
        SplitMode::None => {}
    }
    let status = cmd
        .arg(file)
        .arg(log)
        .status()
        .with_context(|| format!("failed to launch editor '{editor}'"))?;
    if !status.success() {
        println!("{} {}", "Editor exited with".yellow(), status);
    }
    Ok(())
}

fn run_tree(engine: &ScrapEngine) -> anyhow::Result<()> {
    let root = engine.scrap_root()?;
    if !root.is_dir() {
        println!(
            "{} {}",
            "No scrap tree yet at".yellow(),
            root.display()
        );
        return Ok(());
    }

    println!("{}", root.display().to_string().bold());
    for entry in WalkDir::new(&root).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let marker = if entry.file_type().is_dir() { "/" } else { "" };
        println!(
            "{}{}{}",
            "  ".repeat(entry.depth()),
            entry.file_name().to_string_lossy(),
            marker,
        );
    }
    Ok(())
}
