use console::style;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::TICK_INTERVAL;

// Progress bar style template as a constant
const PROGRESS_BAR_TEMPLATE: &str = "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len}";

pub struct ProgressReporter {
    multi_progress: MultiProgress,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
        }
    }

    /// Starts the per-role progress bar for a lint run. The returned bar is
    /// cheap to clone and safe to tick from parallel workers.
    pub fn start_lint(&self, total_roles: u64) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(total_roles));
        pb.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_BAR_TEMPLATE)
                .expect("Progress bar template should be valid")
                .progress_chars("█▉▊▋▌▍▎▏ "),
        );
        pb.set_message("Analyzing roles");
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn finish_analysis(&self, circuits_found: usize) {
        if circuits_found == 0 {
            eprintln!(
                "{} No cycles detected! {}",
                style("✓").green().bold(),
                style("🎉").dim()
            );
        } else {
            eprintln!(
                "{} Found {} cycle{}",
                style("⚠").yellow().bold(),
                style(circuits_found).red().bold(),
                if circuits_found == 1 { "" } else { "s" }
            );
        }
    }
}
