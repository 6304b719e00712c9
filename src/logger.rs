//! File logger setup for front-ends that ask for it.

use std::fs::File;

use time::{format_description, OffsetDateTime, UtcOffset};
use tracing::{subscriber::set_global_default, Level};
use tracing_subscriber::{fmt::writer::BoxMakeWriter, FmtSubscriber};

/// Installs a file logger writing every `tracing` event up to DEBUG level.
///
/// Will panic on error
pub fn init_logger() {
    let file = File::create(log_file_name()).unwrap();
    let writer = BoxMakeWriter::new(file);
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let timer = tracing_subscriber::fmt::time::OffsetTime::new(
        offset,
        format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]").unwrap(),
    );

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_timer(timer)
        .with_writer(writer)
        .finish();

    set_global_default(subscriber).expect(
        "Could not set global default tracing subscriber. \
         Consider disabling logs if you are already setting a subscriber.",
    );
}

fn log_file_name() -> String {
    let format = format_description::parse("league_[year]-[month]-[day]_[hour][minute][second].log")
        .unwrap();
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(&format).unwrap()
}
