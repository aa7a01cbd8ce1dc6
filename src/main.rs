use std::path::Path;

use anyhow::Result;
use env_logger::Env;
use log::info;

use crate::{
    api::cli::{Cli, CliProgram},
    catalog::{fix_catalog_file, CATALOG_FILE},
    config::config::Config,
    types::FixReport,
};

mod api;
mod catalog;
mod config;
mod fixes;
mod types;

fn main() -> Result<()> {
    let cli = Cli {};
    let program = cli.run();

    let config = Config::new_from_file(program.config.clone())?;
    init_logger(&program, &config);

    let dry_run = program.dry_run || config.is_dry_run();
    let report = fix_catalog_file(Path::new(CATALOG_FILE), dry_run)?;

    log_report(&report, dry_run);
    println!("{}", summary_line(&report, dry_run));

    Ok(())
}

fn init_logger(program: &CliProgram, config: &Config) {
    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or(config.get_log_filter()));

    if program.verbose {
        builder.parse_filters("debug");
    }

    builder.init();
}

fn log_report(report: &FixReport, dry_run: bool) {
    if dry_run {
        info!("Found {} broken links, catalog left unchanged", report.len());
    } else if report.is_empty() {
        info!("No broken links found");
    } else {
        info!("Replaced {} broken links", report.len());
    }
}

fn summary_line(report: &FixReport, dry_run: bool) -> String {
    if dry_run {
        format!("Would fix {} broken links in {}", report.len(), CATALOG_FILE)
    } else {
        format!("Fixed broken links in {}", CATALOG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::summary_line;
    use crate::types::{FixReport, Replacement};

    fn report_with(count: usize) -> FixReport {
        FixReport {
            replacements: (0..count)
                .map(|index| Replacement {
                    pointer: format!("/videos/{}/youtube_url", index),
                    from: "https://medtube.net/".to_string(),
                    to: "https://www.youtube.com/".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn it_confirms_fix() {
        assert_eq!(
            summary_line(&report_with(3), false),
            "Fixed broken links in educational_videos_catalog.json"
        );
    }

    #[test]
    fn it_confirms_even_without_replacements() {
        assert_eq!(
            summary_line(&FixReport::default(), false),
            "Fixed broken links in educational_videos_catalog.json"
        );
    }

    #[test]
    fn it_counts_on_dry_run() {
        assert_eq!(
            summary_line(&report_with(2), true),
            "Would fix 2 broken links in educational_videos_catalog.json"
        );
    }
}
