use chrono::Utc;
use clap::Parser;
use intake_core::{config::Config, seed, DashboardSummary, Latency, MemoryStore};

#[derive(Parser)]
#[command(name = "intake", about = "intake — training institute admin data layer")]
struct Cli {
    /// Override the simulated API latency in milliseconds.
    #[arg(long)]
    latency_ms: Option<u64>,
    /// Write debug logs to /tmp/intake-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/intake-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("intake debug log started — tail -f /tmp/intake-debug.log");
    }

    let config = Config::load().unwrap_or_else(|_| Config::defaults());
    let latency = Latency::from_millis(cli.latency_ms.unwrap_or(config.api.latency_ms));
    tracing::debug!(latency_ms = latency.as_duration().as_millis() as u64, "building stores");

    let students = MemoryStore::new(seed::students()?, latency);
    let enquiries = MemoryStore::new(seed::enquiries()?, latency);

    let today = Utc::now().date_naive();
    let summary =
        DashboardSummary::collect(&students, &enquiries, today, config.dashboard.recent_limit)
            .await?;

    println!("intake — institute summary for {today}");
    println!("  students enrolled:  {}", summary.total_students);
    println!("  new enquiries:      {}", summary.new_enquiries);
    println!("  follow-ups due:     {}", summary.pending_follow_ups);
    println!("  recent enrollments:");
    for student in &summary.recent_students {
        println!(
            "    {} — {} ({})",
            student.enrollment_date, student.name, student.course
        );
    }
    println!("  recent enquiries:");
    for enquiry in &summary.recent_enquiries {
        println!(
            "    {} — {} ({}, {})",
            enquiry.enquiry_date, enquiry.name, enquiry.interested_course, enquiry.status
        );
    }

    Ok(())
}
