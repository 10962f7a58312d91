use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use portfolio_dp::{
    scenario::load_scenarios, utils::table_cells, utils::DEFAULT_RECURSIVE_LIMIT, Comparator,
    ComparatorBuilder, Comparison, Scenario,
};
use serde::Serialize;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

/// Run every knapsack strategy on a set of portfolio scenarios and report
/// values, timings and cross-checks.
#[derive(Parser, Debug)]
#[command(name = "portfolio_probe", version)]
struct Options {
    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// TOML file with [[scenarios]]; the built-in cases are used when absent.
    #[arg(long)]
    scenarios: Option<PathBuf>,

    /// Largest project count for which the exhaustive solver is run.
    #[arg(long, default_value_t = DEFAULT_RECURSIVE_LIMIT)]
    recursive_limit: usize,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone, Serialize)]
struct Measurement {
    scenario: String,
    projects: usize,
    capacity: usize,
    table_cells: Option<usize>,
    greedy: u64,
    recursive: Option<u64>,
    memoized: u64,
    optimal: u64,
    chosen: Vec<String>,
    wall_s: f64,
    rss_delta_kib: u64,
    verification: Verification,
}

#[derive(Clone, Serialize)]
struct Verification {
    status: VerificationStatus,
    detail: Option<String>,
}

#[derive(Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
enum VerificationStatus {
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }
}

fn main() {
    let options = Options::parse();

    #[cfg(feature = "tracing")]
    init_tracing();

    let scenarios = match &options.scenarios {
        Some(path) => match load_scenarios(path) {
            Ok(s) => s,
            Err(err) => {
                eprintln!("portfolio_probe: {}: {err}", path.display());
                std::process::exit(2);
            }
        },
        None => Scenario::builtin(),
    };

    let comparator = ComparatorBuilder::new()
        .with_recursive_limit(options.recursive_limit)
        .build();

    eprintln!("\n{}", "=".repeat(72));
    eprintln!("Portfolio probe: {} scenario(s)", scenarios.len());
    eprintln!("{}", "=".repeat(72));

    let mut sys = System::new();
    let total = scenarios.len();
    let measurements: Vec<Measurement> = scenarios
        .iter()
        .enumerate()
        .map(|(idx, scenario)| {
            eprintln!("[{}/{}] {} ...", idx + 1, total, scenario.label);
            measure(&comparator, scenario, &mut sys)
        })
        .collect();

    print_summary(&measurements);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("portfolio_probe output error: {err}");
        std::process::exit(1);
    }
    if measurements
        .iter()
        .any(|m| matches!(m.verification.status, VerificationStatus::Failed))
    {
        std::process::exit(1);
    }
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn measure(comparator: &Comparator, scenario: &Scenario, sys: &mut System) -> Measurement {
    let before = rss_kib(sys);
    let start = Instant::now();
    let cmp: Comparison = comparator.compare(scenario);
    let duration = start.elapsed();
    let after = rss_kib(sys);

    let (status, detail) = match cmp.verify(scenario.capacity) {
        Ok(()) => (VerificationStatus::Passed, None),
        Err(detail) => (VerificationStatus::Failed, Some(detail)),
    };

    Measurement {
        scenario: scenario.label.clone(),
        projects: scenario.projects.len(),
        capacity: scenario.capacity,
        table_cells: table_cells(scenario.projects.len(), scenario.capacity),
        greedy: cmp.greedy,
        recursive: cmp.recursive,
        memoized: cmp.memoized,
        optimal: cmp.optimal_value(),
        chosen: cmp.tabulation.names().into_iter().map(String::from).collect(),
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification: Verification { status, detail },
    }
}

fn print_summary(measurements: &[Measurement]) {
    eprintln!("\n{}", "=".repeat(72));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(72));
    for m in measurements {
        eprintln!("{} (capacity {}, {} projects)", m.scenario, m.capacity, m.projects);
        eprintln!("  greedy:     {}", m.greedy);
        match m.recursive {
            Some(v) => eprintln!("  recursive:  {v}"),
            None => eprintln!("  recursive:  skipped (> limit)"),
        }
        eprintln!("  memoized:   {}", m.memoized);
        eprintln!("  tabulation: {}  chosen: [{}]", m.optimal, m.chosen.join(", "));
        if m.greedy < m.optimal {
            eprintln!("  greedy gap: {}", m.optimal - m.greedy);
        }
        if let Some(ref detail) = m.verification.detail {
            eprintln!("  FAILED: {detail}");
        }
    }
    let failed = measurements
        .iter()
        .filter(|m| matches!(m.verification.status, VerificationStatus::Failed))
        .count();
    eprintln!();
    eprintln!("Verified: {} passed, {} failed", measurements.len() - failed, failed);
    eprintln!();
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,projects,capacity,greedy,recursive,memoized,optimal,chosen,wall_s,rss_delta_kib,status,detail");
    for m in measurements {
        let detail = m
            .verification
            .detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "\"{}\",{},{},{},{},{},{},\"{}\",{:.6},{},{},\"{}\"",
            m.scenario.replace('"', "'"),
            m.projects,
            m.capacity,
            m.greedy,
            m.recursive.map(|v| v.to_string()).unwrap_or_default(),
            m.memoized,
            m.optimal,
            m.chosen.join(";").replace('"', "'"),
            m.wall_s,
            m.rss_delta_kib,
            m.verification.status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let mut col1 = "scenario".len();
    for m in measurements {
        col1 = col1.max(m.scenario.len());
    }

    println!(
        "{:<col1$}  {:>4}  {:>8}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}  {:>8}",
        "scenario", "n", "capacity", "greedy", "recursive", "memoized", "optimal", "wall_s", "status",
    );
    println!(
        "{:-<col1$}  {:-<4}  {:-<8}  {:-<10}  {:-<10}  {:-<10}  {:-<10}  {:-<10}  {:-<8}",
        "", "", "", "", "", "", "", "", "",
    );
    for m in measurements {
        let recursive = m
            .recursive
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<col1$}  {:>4}  {:>8}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10.6}  {:>8}",
            m.scenario,
            m.projects,
            m.capacity,
            m.greedy,
            recursive,
            m.memoized,
            m.optimal,
            m.wall_s,
            m.verification.status.label(),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    let json = serde_json::to_string_pretty(measurements).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}
