//! `status` command: opening-hours check, once or on a timer.

use std::time::Duration;

use chrono::{Datelike, Local, NaiveDateTime};
use foodie_core::{translate, weekday_key, AppSettings, ShopSession, TranslationKey};

use crate::ticker::AvailabilityTicker;

/// Print the current availability; with `watch`, keep printing transitions
/// until interrupted.
///
/// # Errors
///
/// Returns an error if the interrupt handler cannot be installed.
pub(crate) async fn run_status(
    session: &mut ShopSession,
    watch: bool,
    settings: &AppSettings,
) -> anyhow::Result<()> {
    let now = Local::now().naive_local();
    session.refresh_availability(&now);
    println!("{}", render_status(session, &now));

    if !watch {
        return Ok(());
    }

    let period = Duration::from_secs(settings.availability_interval_secs);
    let ticker = AvailabilityTicker::spawn(session.config().opening_hours.clone(), period, || {
        Local::now().naive_local()
    });
    let mut receiver = ticker.subscribe();
    tracing::info!(
        interval_secs = settings.availability_interval_secs,
        open = ticker.is_open(),
        "watching availability"
    );

    loop {
        tokio::select! {
            changed = receiver.changed() => {
                if changed.is_err() {
                    break;
                }
                let now = Local::now().naive_local();
                session.refresh_availability(&now);
                println!("{}", render_status(session, &now));
            }
            result = tokio::signal::ctrl_c() => {
                result?;
                tracing::info!("stopping availability watch");
                break;
            }
        }
    }

    Ok(())
}

fn render_status(session: &ShopSession, now: &NaiveDateTime) -> String {
    let config = session.config();
    let language = config.language();
    let day = weekday_key(now.weekday());
    let hours = config
        .opening_hours
        .get(day)
        .map_or_else(|| "-".to_string(), |interval| format!("{}-{}", interval.start, interval.end));

    let state = if session.store_open() {
        "open".to_string()
    } else {
        translate(language, TranslationKey::StoreClosed).to_string()
    };

    format!(
        "[{}] {}: {state} ({day} {hours})",
        now.format("%Y-%m-%d %H:%M"),
        config.shop_name
    )
}
