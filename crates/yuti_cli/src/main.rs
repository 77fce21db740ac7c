use clap::{Parser, Subcommand};
use yuti_core::julian::{SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};
use yuti_core::{Body, MeanElementModel};
use yuti_search::{Boundary, ScanConfig, angle_span, search_conjunctions};

#[derive(Parser)]
#[command(name = "yuti", about = "Yuti conjunction window search")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a date range for conjunction windows (mean-element model)
    Scan {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: String,
        /// Comma-separated body names
        #[arg(long, default_value = "sun,mercury,venus,mars,jupiter,saturn")]
        bodies: String,
        /// Conjunction threshold in degrees
        #[arg(long, default_value = "45")]
        threshold: f64,
        /// Coarse scan step in days
        #[arg(long, default_value = "1")]
        step: f64,
    },
    /// Angular span of a set of ecliptic longitudes
    Span {
        /// Longitudes in degrees
        #[arg(required = true)]
        degrees: Vec<f64>,
    },
}

/// Parse a YYYY-MM-DD date into a Julian Date at 0h.
fn require_date(s: &str) -> f64 {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() == 3 {
        let fields = (
            parts[0].parse::<i32>(),
            parts[1].parse::<u32>(),
            parts[2].parse::<u32>(),
        );
        if let (Ok(year), Ok(month), Ok(day)) = fields {
            if (1..=12).contains(&month) && (1..=31).contains(&day) {
                return calendar_to_jd(year, month, f64::from(day));
            }
        }
    }
    eprintln!("Invalid date: {s} (expected YYYY-MM-DD)");
    std::process::exit(1);
}

/// Parse a comma-separated body list.
fn require_bodies(s: &str) -> Vec<Body> {
    let mut bodies = Vec::new();
    for name in s.split(',') {
        let name = name.trim();
        match Body::from_name(name) {
            Some(body) => bodies.push(body),
            None => {
                eprintln!("Invalid body name: {name}");
                eprintln!(
                    "Valid: sun, mercury, venus, moon, mars, jupiter, saturn, uranus, neptune, pluto"
                );
                std::process::exit(1);
            }
        }
    }
    bodies
}

/// Format a Julian Date as a calendar date and time.
fn format_jd(jd: f64) -> String {
    let (year, month, day_frac) = jd_to_calendar(jd);
    let day = day_frac.floor() as u32;
    let total_seconds = day_frac.fract() * SECONDS_PER_DAY;
    let hour = (total_seconds / 3600.0).floor() as u32;
    let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
    format!("{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}")
}

fn format_boundary(boundary: &Boundary) -> String {
    match boundary {
        Boundary::Exact(jd) => format_jd(*jd),
        Boundary::Open(jd) => format!("{} (open)", format_jd(*jd)),
        Boundary::Unresolved { .. } => format!("~{} (unresolved)", format_jd(boundary.jd())),
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            start,
            end,
            bodies,
            threshold,
            step,
        } => {
            let jd_start = require_date(&start);
            let jd_end = require_date(&end);
            let bodies = require_bodies(&bodies);
            let config = ScanConfig::new(threshold, step);
            let model = MeanElementModel::new();

            match search_conjunctions(&model, &bodies, jd_start, jd_end, &config) {
                Ok(intervals) => {
                    if intervals.is_empty() {
                        println!("No conjunction windows found");
                        return;
                    }
                    println!(
                        "{} window(s), bodies: {}",
                        intervals.len(),
                        bodies
                            .iter()
                            .map(|b| b.name())
                            .collect::<Vec<_>>()
                            .join(", ")
                    );
                    for iv in &intervals {
                        println!(
                            "{}  ->  {}  ({:.1} days, min span {:.2} deg)",
                            format_boundary(&iv.start),
                            format_boundary(&iv.end),
                            iv.duration_days(),
                            iv.min_span_deg
                        );
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Span { degrees } => {
            println!("{:.4} deg", angle_span(&degrees));
        }
    }
}
