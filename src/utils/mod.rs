pub mod browser;

use anyhow::Result;
use chrono::{DateTime, NaiveDateTime, Utc};
use console::style;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Level, LevelFilter};
use ms::{__to_string__, ms};

use crate::validation::Schema;

pub fn set_hook() {
    // last resort for anything that was not turned into an error
    std::panic::set_hook(Box::new(|panic_info| {
        let message = if let Some(message) = panic_info.payload().downcast_ref::<String>() {
            message.clone()
        } else if let Some(message) = panic_info.payload().downcast_ref::<&str>() {
            (*message).to_string()
        } else {
            format!("{panic_info:?}")
        };

        log::error!("Something went wrong: {message}");
        log::error!("Please run the command again, or report it if it keeps happening");

        #[cfg(debug_assertions)]
        log::debug!("{panic_info}");

        clean_term();

        std::process::exit(1);
    }));
}

pub fn clean_term() {
    let term = console::Term::stdout();

    // prompts hide the cursor, make sure it comes back
    if term.is_term() {
        term.show_cursor().ok();
    }
}

pub fn logs(verbose: bool) {
    let colors = ColoredLevelConfig::new()
        .info(Color::BrightCyan)
        .error(Color::BrightRed)
        .warn(Color::BrightYellow)
        .debug(Color::BrightWhite);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            let level = record.level();

            match level {
                Level::Debug => out.finish(format_args!(
                    "{} [{}]: {}",
                    colors.color(Level::Debug).to_string().to_lowercase(),
                    record.target(),
                    message
                )),

                level => out.finish(format_args!(
                    "{}: {}",
                    colors.color(level).to_string().to_lowercase(),
                    message
                )),
            }
        })
        .level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        // the cache logs every lookup at debug
        .level_for("moka", LevelFilter::Warn)
        .chain(
            fern::Dispatch::new()
                .filter(|metadata| !matches!(metadata.level(), Level::Error | Level::Warn))
                .chain(std::io::stdout()),
        )
        .chain(
            fern::Dispatch::new()
                .level(log::LevelFilter::Warn)
                .chain(std::io::stderr()),
        )
        .apply()
        .ok();
}

/// Parses the API's timestamps, naive ones are taken as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|date| date.and_utc())
}

pub fn relative_time(date: DateTime<Utc>) -> String {
    let millis = Utc::now().timestamp_millis() - date.timestamp_millis();

    ms!(millis.unsigned_abs(), true)
}

/// `3 days ago` for a parseable timestamp, `-` when missing.
pub fn format_timestamp(value: Option<&str>) -> String {
    match value {
        Some(value) => match parse_timestamp(value) {
            Some(date) => format!("{} ago", relative_time(date)),
            None => value.to_string(),
        },
        None => "-".to_string(),
    }
}

pub fn urlify(s: &str) -> String {
    style(s).bold().underlined().to_string()
}

pub fn ellipsis(s: &str, max: usize) -> String {
    let line = s.lines().next().unwrap_or_default();

    if line.chars().count() <= max && line.len() == s.len() {
        return line.to_string();
    }

    let cut = line.chars().take(max.saturating_sub(3)).collect::<String>();

    format!("{}...", cut.trim_end())
}

/// Asks before destructive actions, `force` skips the prompt.
pub fn confirm(prompt: &str, force: bool) -> Result<bool> {
    if force {
        return Ok(true);
    }

    let answer = dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact_opt()?;

    Ok(answer.unwrap_or(false))
}

/// Prompts for one form field, checked against `schema` as it is entered.
pub fn prompt_field(
    prompt: &str,
    initial: &str,
    schema: &Schema,
    field: &'static str,
) -> Result<String> {
    let value = dialoguer::Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .validate_with(|input: &String| schema.check(field, input))
        .interact_text()?;

    Ok(value.trim().to_string())
}
