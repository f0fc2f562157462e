use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use clap::{Parser, ValueEnum};
use tracing::info;

use subevents_convert::convert::{app_store_event_type, play_store_event_type};
use subevents_convert::notifications::{appstore, playstore};
use subevents_convert::observability::logging::init_logging;
use subevents_convert::timestamp::parse_epoch_millis;

/// Classifies a store notification JSON file without calling any
/// collaborators. Triage aid when unsupported-notification-type alerts fire.
#[derive(Parser)]
#[command(name = "inspect-notification")]
#[command(about = "Classify a store notification JSON file")]
#[command(version = "0.1.0")]
struct Cli {
    /// Which store produced the notification
    #[arg(long, value_enum)]
    platform: StorePlatform,

    /// Path to the notification JSON file
    file: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum StorePlatform {
    PlayStore,
    AppStore,
}

fn render_millis(millis: i64) -> String {
    match Utc.timestamp_millis_opt(millis).single() {
        Some(ts) => ts.to_rfc3339(),
        None => format!("{millis} (out of renderable range)"),
    }
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let raw = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;

    match cli.platform {
        StorePlatform::PlayStore => {
            let noti: playstore::DeveloperNotification =
                serde_json::from_str(&raw).context("not a play-store developer notification")?;
            let sub = &noti.subscription_notification;
            let event_type = play_store_event_type(sub.notification_type)?;
            let millis = parse_epoch_millis(&noti.event_time_millis)?;

            info!(package_name = %noti.package_name, "parsed play-store notification");
            println!("platform:    android");
            println!("type code:   {}", sub.notification_type);
            println!("event_type:  {event_type}");
            println!("product_id:  {}", sub.subscription_id);
            println!("event time:  {}", render_millis(millis));
        }
        StorePlatform::AppStore => {
            let noti: appstore::SubscriptionNotification =
                serde_json::from_str(&raw).context("not an app-store subscription notification")?;
            let event_type = app_store_event_type(&noti)?;

            info!(
                receipts = noti.unified_receipt.latest_receipt_info.len(),
                "parsed app-store notification"
            );
            println!("platform:    ios");
            println!("type code:   {}", noti.notification_type);
            println!("event_type:  {event_type}");
            println!("environment: {}", noti.environment);
            if let Some(receipt) = noti.unified_receipt.latest_receipt_info.first() {
                println!("product_id:  {}", receipt.product_id);
                if !receipt.purchase_date_ms.is_empty() {
                    let millis = parse_epoch_millis(&receipt.purchase_date_ms)?;
                    println!("purchased:   {}", render_millis(millis));
                }
            }
        }
    }

    Ok(())
}
