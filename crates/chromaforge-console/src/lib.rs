//! Colorful console output for solver metrics.
//!
//! Provides a custom `tracing` layer that formats solver events with colors.
//! Everything goes to stderr so stdout stays free for the solution itself.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve start/end, improved colorings)
//! - **DEBUG**: Progress updates (1/sec with speed and incumbent)
//! - **TRACE**: Individual search decisions

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the solver console output at INFO level.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the ChromaForge banner and sets up tracing. `RUST_LOG` overrides
/// the default level.
pub fn init() {
    init_with_level(LevelFilter::INFO);
}

/// Like [`init`], with an explicit default level for solver events.
pub fn init_with_level(level: LevelFilter) {
    INIT.get_or_init(|| {
        print_banner();

        let directive: Directive = format!("chromaforge_solver={}", level)
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into());
        let filter = EnvFilter::builder()
            .with_default_directive(directive)
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolverConsoleLayer)
            .try_init();
    });
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since solve start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
  ____ _                                _____
 / ___| |__  _ __ ___  _ __ ___   __ _|  ___|__  _ __ __ _  ___
| |   | '_ \| '__/ _ \| '_ ` _ \ / _` | |_ / _ \| '__/ _` |/ _ \
| |___| | | | | | (_) | | | | | | (_| |  _| (_) | | | (_| |  __/
 \____|_| |_|_|  \___/|_| |_| |_|\__,_|_|  \___/|_|  \__, |\___|
                                                     |___/
"#;

    let version_line = format!(
        "                   v{} - Branch-and-Bound Graph Coloring\n",
        VERSION
    );

    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{}", banner.bright_cyan());
    let _ = writeln!(stderr, "{}", version_line.bright_white().bold());
    let _ = stderr.flush();
}

/// A tracing layer that formats solver events with colors.
pub struct SolverConsoleLayer;

impl<S: Subscriber> Layer<S> for SolverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        // Accept events from solver and CLI modules
        if !target.starts_with("chromaforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let level = *metadata.level();
        let output = format_event(&visitor, level);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    status: Option<String>,
    propagation: Option<String>,
    bounder: Option<String>,
    vertex_count: Option<u64>,
    edge_count: Option<u64>,
    time_limit_ms: Option<u64>,
    improvement_cap: Option<u64>,
    colors: Option<u64>,
    improvements: Option<u64>,
    decisions: Option<u64>,
    backtracks: Option<u64>,
    lower_bound: Option<u64>,
    best: Option<u64>,
    depth: Option<u64>,
    speed: Option<u64>,
    vertex: Option<u64>,
    color: Option<u64>,
    duration_ms: Option<u64>,
    optimal: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "status" => self.status = Some(s),
            "propagation" => self.propagation = Some(s),
            "bounder" => self.bounder = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "vertex_count" => self.vertex_count = Some(value),
            "edge_count" => self.edge_count = Some(value),
            "time_limit_ms" => self.time_limit_ms = Some(value),
            "improvement_cap" => self.improvement_cap = Some(value),
            "colors" => self.colors = Some(value),
            "improvements" => self.improvements = Some(value),
            "decisions" => self.decisions = Some(value),
            "backtracks" => self.backtracks = Some(value),
            "lower_bound" => self.lower_bound = Some(value),
            "best" => self.best = Some(value),
            "depth" => self.depth = Some(value),
            "speed" => self.speed = Some(value),
            "vertex" => self.vertex = Some(value),
            "color" => self.color = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "optimal" {
            self.optimal = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "status" => self.status = Some(value.to_string()),
            "propagation" => self.propagation = Some(value.to_string()),
            "bounder" => self.bounder = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "solve_start" => {
            mark_solve_start();
            format_solve_start(v)
        }
        "solve_end" => format_solve_end(v),
        "solution_improved" => format_solution_improved(v),
        "progress" => format_progress(v),
        "decision" => format_decision(v, level),
        "infeasible" => format_infeasible(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    let vertices = v.vertex_count.unwrap_or(0);
    let edges = v.edge_count.unwrap_or(0);
    let time_limit = v.time_limit_ms.unwrap_or(0);

    let mut output = format!(
        "{} {} Solving │ {} vertices │ {} edges │ density {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        format_count(vertices).bright_yellow(),
        format_count(edges).bright_yellow(),
        format_density(vertices, edges).bright_magenta()
    );

    if time_limit > 0 {
        output.push_str(&format!(
            " │ {} limit",
            format_duration_ms(time_limit).bright_yellow()
        ));
    }

    match v.improvement_cap {
        Some(cap) if cap > 0 => {
            output.push_str(&format!(" │ cap {} improvements", cap.bright_yellow()));
        }
        _ => {}
    }

    if let (Some(propagation), Some(bounder)) = (&v.propagation, &v.bounder) {
        output.push_str(&format!(
            " │ {} + {}",
            propagation.white().bold(),
            bounder.white().bold()
        ));
    }

    output
}

fn format_solution_improved(v: &EventVisitor) -> String {
    let colors = v.colors.unwrap_or(0);
    let improvements = v.improvements.unwrap_or(0);
    let decisions = v.decisions.unwrap_or(0);

    format!(
        "{} {} {} colors │ improvement #{} │ {} decisions",
        format_elapsed(),
        "★".bright_green().bold(),
        format_count(colors).bright_green().bold(),
        improvements,
        format_count(decisions).white()
    )
}

fn format_progress(v: &EventVisitor) -> String {
    let decisions = v.decisions.unwrap_or(0);
    let speed = v.speed.unwrap_or(0);
    let depth = v.depth.unwrap_or(0);
    let best = v.best.unwrap_or(0);

    format!(
        "{} {} {:>10} decisions │ {:>12}/s │ depth {:>5} │ best {}",
        format_elapsed(),
        "⚡".bright_cyan(),
        format_count(decisions).white(),
        format_count(speed).bright_magenta().bold(),
        depth,
        best.bright_yellow()
    )
}

fn format_decision(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    format!(
        "{} {} depth {:>5} │ vertex {:>6} := {}",
        format_elapsed(),
        "·".bright_black(),
        v.depth.unwrap_or(0),
        format_count(v.vertex.unwrap_or(0)).bright_black(),
        v.color.unwrap_or(0)
    )
}

fn format_infeasible(v: &EventVisitor) -> String {
    format!(
        "{} {} Infeasible │ self-loop on vertex {}",
        format_elapsed(),
        "✗".bright_red().bold(),
        v.vertex.unwrap_or(0).bright_red()
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let colors = v.colors.unwrap_or(0);
    let optimal = v.optimal.unwrap_or(false);
    let status = v.status.as_deref().unwrap_or("unknown");
    let duration = v.duration_ms.unwrap_or(0);

    let verdict = if optimal {
        "OPTIMAL".bright_green().bold().to_string()
    } else {
        "BEST FOUND".bright_yellow().bold().to_string()
    };

    let mut output = format!(
        "{} {} Solving complete │ {} colors │ {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_count(colors).bright_green().bold(),
        verdict,
        status
    );

    // Summary box
    let inner_width: usize = 58;
    let border = "═".repeat(inner_width);
    output.push_str("\n\n");
    output.push_str(&format!("╔{}╗", border).bright_cyan().to_string());
    output.push('\n');

    let title = if optimal {
        "OPTIMAL COLORING FOUND"
    } else {
        "BEST COLORING WITHIN BUDGET"
    };
    let total_pad = inner_width.saturating_sub(title.len());
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    let title_colored = if optimal {
        title.bright_green().bold().to_string()
    } else {
        title.bright_yellow().bold().to_string()
    };
    output.push_str(&format!(
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left_pad),
        title_colored,
        " ".repeat(right_pad),
        "║".bright_cyan()
    ));
    output.push('\n');
    output.push_str(&format!("╠{}╣", border).bright_cyan().to_string());
    output.push('\n');

    let rows = [
        ("Colors:", format_count(colors)),
        ("Lower bound:", format_count(v.lower_bound.unwrap_or(0))),
        ("Decisions:", format_count(v.decisions.unwrap_or(0))),
        ("Backtracks:", format_count(v.backtracks.unwrap_or(0))),
        ("Time:", format_duration_ms(duration)),
    ];
    for (label, value) in rows {
        output.push_str(&format!(
            "{}  {:<18}{:>36}  {}",
            "║".bright_cyan(),
            label,
            value,
            "║".bright_cyan()
        ));
        output.push('\n');
    }

    output.push_str(&format!("╚{}╝", border).bright_cyan().to_string());
    output.push('\n');

    output
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

fn format_density(vertices: u64, edges: u64) -> String {
    if vertices < 2 {
        return "0.000".to_string();
    }
    let pairs = vertices as f64 * (vertices as f64 - 1.0) / 2.0;
    format!("{:.3}", edges as f64 / pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1_500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_format_density() {
        assert_eq!(format_density(1, 0), "0.000");
        assert_eq!(format_density(4, 3), "0.500");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let visitor = EventVisitor {
            event: Some("something_else".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor, Level::INFO).is_empty());
    }

    #[test]
    fn test_decision_only_at_trace() {
        let visitor = EventVisitor {
            event: Some("decision".to_string()),
            vertex: Some(7),
            color: Some(2),
            depth: Some(3),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor, Level::DEBUG).is_empty());
        assert!(format_event(&visitor, Level::TRACE).contains(":= 2"));
    }

    #[test]
    fn test_solve_end_summary() {
        let visitor = EventVisitor {
            event: Some("solve_end".to_string()),
            colors: Some(3),
            optimal: Some(true),
            status: Some("exhausted".to_string()),
            decisions: Some(12_345),
            duration_ms: Some(42),
            ..EventVisitor::default()
        };
        let output = format_event(&visitor, Level::INFO);

        assert!(output.contains("OPTIMAL COLORING FOUND"));
        assert!(output.contains("12,345"));
        assert!(output.contains("42ms"));
    }
}
