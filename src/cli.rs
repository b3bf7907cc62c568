//! Command-line interface module for dirsort.
//!
//! This module wires the pipeline together in its fixed order:
//! safeguard, directory listing, classification, folder provisioning, and
//! relocation. It also hosts the dry-run preview, which shares the same
//! [`SortPlan`] as the real run instead of duplicating the pipeline.

use crate::config::SortConfig;
use crate::file_category::{FileClassifier, SortMode, extension_key};
use crate::file_organizer::FileRelocator;
use crate::listing::{ListError, list_entries};
use crate::output::OutputFormatter;
use clap::Parser;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::PathBuf;

/// Sort a directory's top-level files into category subfolders.
#[derive(Parser, Debug)]
#[command(name = "dirsort", version)]
pub struct Cli {
    /// The directory to sort. Defaults to the current directory.
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Create one folder per file extension instead of using the built-in
    /// category table.
    #[arg(short = 'e', long)]
    pub by_extension: bool,

    /// Show what would be moved without touching anything.
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// The classification strategy selected by the flags.
    pub fn mode(&self) -> SortMode {
        if self.by_extension {
            SortMode::ByExtension
        } else {
            SortMode::ByCategory
        }
    }
}

/// The planned moves for one directory snapshot.
///
/// Grouping files by destination up front keeps classification to a single
/// pass over the listing and lets the real run and the dry run consume the
/// same structure.
#[derive(Debug, Default)]
pub struct SortPlan {
    /// Destination folder name → files headed there.
    pub moves: BTreeMap<String, Vec<String>>,
    /// Files with no destination under the active strategy; they stay put.
    pub skipped: Vec<String>,
}

impl SortPlan {
    /// Total number of files the plan would move.
    pub fn file_count(&self) -> usize {
        self.moves.values().map(Vec::len).sum()
    }

    /// True when the plan moves nothing.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Runs the CLI with parsed arguments.
///
/// This is the only place the process environment (home directory, working
/// directory) is consulted. A safeguard violation comes back as an error
/// and aborts the run before any side effect; everything past the safeguard
/// is best-effort and reported through the formatter instead.
pub fn run(cli: Cli) -> Result<(), String> {
    let mode = cli.mode();
    let dry_run = cli.dry_run;
    let config = SortConfig::from_environment(cli.dir, mode).map_err(|e| e.to_string())?;

    if dry_run {
        preview_directory(&config)
    } else {
        sort_directory(&config)
    }
}

/// Builds the sorting plan for the configured directory.
///
/// Lists the eligible entries, classifies each one, and groups them by
/// destination folder. The destination for each distinct extension is
/// derived once and memoized, so planning is a single pass regardless of
/// how many files share an extension.
pub fn build_plan(config: &SortConfig) -> Result<SortPlan, ListError> {
    let entries = list_entries(&config.target, config.include_hidden)?;
    let classifier = FileClassifier::new(config.mode);

    let mut destinations: HashMap<String, Option<String>> = HashMap::new();
    let mut plan = SortPlan::default();

    for name in entries {
        let key = extension_key(&name);
        let destination = match destinations.get(key) {
            Some(cached) => cached.clone(),
            None => {
                let derived = classifier.classify(key);
                destinations.insert(key.to_string(), derived.clone());
                derived
            }
        };

        match destination {
            Some(folder) => plan.moves.entry(folder).or_default().push(name),
            None => plan.skipped.push(name),
        }
    }

    Ok(plan)
}

/// Sorts the configured directory.
///
/// Every destination folder in the plan is provisioned before the first
/// move. A folder that cannot be created drops out of the plan along with
/// its files; a file that cannot be moved is reported and skipped. The run
/// always continues to the end and finishes with a summary.
pub fn sort_directory(config: &SortConfig) -> Result<(), String> {
    OutputFormatter::info(&format!("Sorting contents of: {}", config.target.display()));

    let plan = match build_plan(config) {
        Ok(plan) => plan,
        Err(e) => {
            OutputFormatter::error(&e.to_string());
            return Ok(());
        }
    };

    if plan.is_empty() {
        report_skipped(&plan);
        OutputFormatter::plain("Nothing to sort.");
        return Ok(());
    }

    let mut failures: Vec<String> = Vec::new();
    let mut unprovisioned: HashSet<String> = HashSet::new();
    for folder in plan.moves.keys() {
        if let Err(e) = FileRelocator::provision(&config.target, folder) {
            failures.push(e.to_string());
            unprovisioned.insert(folder.clone());
        }
    }

    let total: u64 = plan
        .moves
        .iter()
        .filter(|(folder, _)| !unprovisioned.contains(folder.as_str()))
        .map(|(_, files)| files.len() as u64)
        .sum();
    let pb = OutputFormatter::create_progress_bar(total);

    let mut counts: HashMap<String, usize> = HashMap::new();
    for (folder, files) in &plan.moves {
        if unprovisioned.contains(folder.as_str()) {
            continue;
        }
        for name in files {
            pb.set_message(name.clone());
            match FileRelocator::relocate(&config.target, name, folder) {
                Ok(_) => {
                    *counts.entry(folder.clone()).or_insert(0) += 1;
                }
                Err(e) => failures.push(e.to_string()),
            }
            pb.inc(1);
        }
    }
    pb.finish_and_clear();

    for failure in &failures {
        OutputFormatter::error(failure);
    }
    report_skipped(&plan);

    let moved: usize = counts.values().sum();
    OutputFormatter::summary_table(&counts, moved);

    if failures.is_empty() {
        OutputFormatter::success("Sorting complete!");
    } else {
        OutputFormatter::warning("Sorting finished with errors; the files above stayed in place.");
    }

    Ok(())
}

/// Shows what a run would do without touching the filesystem.
pub fn preview_directory(config: &SortConfig) -> Result<(), String> {
    OutputFormatter::dry_run_notice(&format!(
        "Analyzing contents of: {}",
        config.target.display()
    ));

    let plan = match build_plan(config) {
        Ok(plan) => plan,
        Err(e) => {
            OutputFormatter::error(&e.to_string());
            return Ok(());
        }
    };

    if plan.is_empty() {
        report_skipped(&plan);
        OutputFormatter::plain("Nothing to sort.");
        return Ok(());
    }

    OutputFormatter::header("Planned moves");
    let mut counts: HashMap<String, usize> = HashMap::new();
    for (folder, files) in &plan.moves {
        for name in files {
            OutputFormatter::plain(&format!(" - {} → {}/", name, folder));
        }
        counts.insert(folder.clone(), files.len());
    }
    report_skipped(&plan);

    OutputFormatter::summary_table(&counts, plan.file_count());
    OutputFormatter::dry_run_notice("No files were modified.");

    Ok(())
}

fn report_skipped(plan: &SortPlan) {
    if !plan.skipped.is_empty() {
        OutputFormatter::warning(&format!(
            "{} file(s) have no matching category and stay in place.",
            plan.skipped.len()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn config_for(target: &Path, mode: SortMode) -> SortConfig {
        SortConfig::resolve(
            target.to_path_buf(),
            mode,
            Path::new("/nonexistent-home"),
            Path::new("/nonexistent-cwd"),
        )
        .expect("Config should resolve")
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["dirsort"]).expect("Parse failed");
        assert_eq!(cli.dir, PathBuf::from("."));
        assert_eq!(cli.mode(), SortMode::ByCategory);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_cli_by_extension_flag() {
        let cli = Cli::try_parse_from(["dirsort", "-e", "/tmp/x"]).expect("Parse failed");
        assert_eq!(cli.dir, PathBuf::from("/tmp/x"));
        assert_eq!(cli.mode(), SortMode::ByExtension);
    }

    #[test]
    fn test_build_plan_groups_by_folder() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::write(temp_dir.path().join("b.txt"), "b").unwrap();
        fs::write(temp_dir.path().join("c.md"), "c").unwrap();

        let config = config_for(temp_dir.path(), SortMode::ByExtension);
        let plan = build_plan(&config).expect("Plan failed");

        assert_eq!(plan.moves.len(), 2);
        assert_eq!(plan.moves["Txt Files"].len(), 2);
        assert_eq!(plan.moves["Md Files"], vec!["c.md"]);
        assert!(plan.skipped.is_empty());
        assert_eq!(plan.file_count(), 3);
    }

    #[test]
    fn test_build_plan_records_misses() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("photo.jpg"), "j").unwrap();
        fs::write(temp_dir.path().join("notes.xyz"), "x").unwrap();

        let config = config_for(temp_dir.path(), SortMode::ByCategory);
        let plan = build_plan(&config).expect("Plan failed");

        assert_eq!(plan.moves["Images"], vec!["photo.jpg"]);
        assert_eq!(plan.skipped, vec!["notes.xyz"]);
    }

    #[test]
    fn test_build_plan_extensionless_files_share_a_folder() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("Makefile"), "m").unwrap();
        fs::write(temp_dir.path().join("LICENSE"), "l").unwrap();

        let config = config_for(temp_dir.path(), SortMode::ByExtension);
        let plan = build_plan(&config).expect("Plan failed");

        assert_eq!(plan.moves.len(), 1);
        assert_eq!(plan.moves[" Files"].len(), 2);
    }

    #[test]
    fn test_build_plan_unreadable_directory() {
        let config = config_for(Path::new("/non/existent/path"), SortMode::ByCategory);
        assert!(build_plan(&config).is_err());
    }
}
