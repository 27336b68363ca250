use std::time::Duration;

use tracing_subscriber::fmt::format::FmtSpan;
use wick::{Cadence, Schedule, every_new_1st_minute, every_new_nth_minute};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=wick=trace (build with --features tracing)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let minutely = every_new_1st_minute(|| println!("minute tick"));
    let quarterly = every_new_nth_minute(15, 0, || println!("quarter-hour tick"))?;
    let five = Schedule::new(Cadence::EveryFifthMinute)
        .fire_on_alignment(false)
        .spawn(|| println!("five-minute tick (boundary skipped)"))?;

    println!("running schedules for ~3 minutes...");
    tokio::time::sleep(Duration::from_secs(180)).await;

    minutely.cancel().await;
    quarterly.cancel().await;
    five.cancel().await;
    Ok(())
}
