use color_eyre::eyre::{Result, WrapErr, eyre};
use dotenv::dotenv;
use termtable_client::config::ClientConfig;
use termtable_client::http::ApiClient;
use termtable_client::service::ScheduleService;
use termtable_client::stores::AcademicYearStore;
use termtable_core::models::calendar;
use termtable_core::models::slot::day_name;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ClientConfig::from_env()?;

    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let group_id: i64 = std::env::args()
        .nth(1)
        .ok_or_else(|| eyre!("usage: termtable <subject-group-id>"))?
        .parse()
        .wrap_err("subject-group-id must be an integer")?;

    let api = ApiClient::new(&config)?;
    let service = ScheduleService::new(api.clone(), api.clone());

    match api.current_year().await? {
        Some(year) => {
            println!("Academic year starting {}:", year.start_date);
            for range in calendar::quarter_ranges(&year) {
                println!("  Q{}: {} .. {}", range.quarter, range.start, range.end);
            }
            match calendar::current_quarter(Some(&year)) {
                Some(quarter) => println!("Current quarter: Q{quarter}"),
                None => println!("Current quarter: none (outside the academic year)"),
            }
        }
        None => println!("No active academic year configured"),
    }

    let session = service.load_for_group(group_id).await?;
    println!();
    println!("Weekly schedule for group {group_id}:");
    if session.draft.is_empty() {
        println!("  (no slots)");
    }
    for day in 0..7 {
        let slots = session.draft.slots_for_day(day);
        if slots.is_empty() {
            continue;
        }
        println!("  {}:", day_name(day));
        for (_, slot) in slots {
            let quarter = match slot.quarter {
                Some(q) => format!("Q{q}"),
                None => "all quarters".to_string(),
            };
            let room = slot.room.as_deref().unwrap_or("-");
            println!(
                "    {}-{}  room {:<8} {}",
                slot.start_time, slot.end_time, room, quarter
            );
        }
    }

    Ok(())
}
