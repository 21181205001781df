//! Output formatting and progress bars for CLI commands

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for the per-state minimax solve during a policy export.
/// Each tick is one decision state searched to the end of the game.
pub fn create_solve_progress(total_states: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_states);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("solving {bar:36.cyan/blue} {pos:>4}/{len} states [{elapsed_precise}, eta {eta}]")
            .expect("Invalid progress bar template")
            .progress_chars("#>."),
    );
    pb
}

/// Spinner shown while the reachability walk enumerates positions
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message.to_string());
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{key}:"), value);
}
