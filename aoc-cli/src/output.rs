//! Output formatting for phase results

use aoc_solver::{PhaseObserver, PhaseReport};
use chrono::TimeDelta;
use std::time::Instant;

/// Prints each phase as it finishes
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// The lines printed for one finished phase
    pub fn result_lines(&self, report: &PhaseReport) -> Vec<String> {
        if self.quiet {
            return vec![report.answer.clone()];
        }

        let prefix = format!(
            "{}/{:02} Solution {}",
            report.year,
            report.day,
            part_label(report.part)
        );
        vec![
            format!("{}: {}", prefix, report.answer),
            format!(
                "{} took: {} (read: {}, parse: {}, solve: {})",
                prefix,
                format_duration(report.total_duration()),
                format_duration(report.read_duration),
                format_duration(report.parse_duration),
                format_duration(report.solve_duration)
            ),
        ]
    }

    /// Print a summary after all results
    pub fn print_summary(&self, reports: &[PhaseReport]) {
        if self.quiet {
            return;
        }

        let total_read_time: TimeDelta = reports.iter().map(|r| r.read_duration).sum();
        let total_parse_time: TimeDelta = reports.iter().map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = reports.iter().map(|r| r.solve_duration).sum();

        println!();
        println!("--- Summary ---");
        println!("Phases solved: {}", reports.len());
        println!("Total read time: {}", format_duration(total_read_time));
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

impl PhaseObserver for OutputFormatter {
    fn phase_finished(&mut self, report: &PhaseReport) {
        for line in self.result_lines(report) {
            println!("{}", line);
        }
    }
}

/// `A` for part 1, `B` for part 2
fn part_label(part: u8) -> String {
    match part {
        1..=26 => char::from(b'A' + part - 1).to_string(),
        other => other.to_string(),
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    match TimeDelta::from_std(d) {
        Ok(delta) => format_duration(delta),
        Err(_) => "N/A".to_string(),
    }
}
