use chrono::{Datelike, NaiveDate};
use skycast_core::{CurrentConditions, DailyForecast};
use std::io::{self, Write};

const DAYS_OF_WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const DEGREE: char = '\u{b0}';

/// Day name from the Monday-first table.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    DAYS_OF_WEEK[date.weekday().num_days_from_monday() as usize]
}

pub fn write_current(
    out: &mut impl Write,
    location: &str,
    current: &CurrentConditions,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Location: {location}")?;
    writeln!(out, "Day: {}", weekday_name(current.observed_at.date_naive()))?;

    writeln!(out)?;
    writeln!(out, "Temperatures")?;
    writeln!(out, "High: {}", current.temp_max)?;
    writeln!(out, "Low: {}", current.temp_min)?;
    writeln!(out, "Current: {}", current.temp)?;

    writeln!(out)?;
    writeln!(out, "Sky:")?;
    writeln!(out, "{}", current.description)?;
    Ok(())
}

/// Print up to `requested` days; a note follows if fewer were returned.
pub fn write_forecast(
    out: &mut impl Write,
    location: &str,
    forecast: &DailyForecast,
    requested: usize,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Location: {location}")?;

    let days = forecast.first_days(requested);
    for day in days {
        let date = day.date();

        writeln!(out)?;
        writeln!(out, "Date:")?;
        writeln!(out, "{} {}", weekday_name(date), date)?;

        writeln!(out)?;
        writeln!(out, "Temperatures:")?;
        writeln!(out, "High: {}{DEGREE}", day.max)?;
        writeln!(out, "Low: {}{DEGREE}", day.min)?;
        writeln!(out, "Day: {}{DEGREE}", day.day)?;

        writeln!(out)?;
        writeln!(out, "Sky:")?;
        writeln!(out, "{}", day.sky)?;
    }

    if days.len() < requested {
        writeln!(out)?;
        writeln!(
            out,
            "Only {} of {requested} requested days are available.",
            days.len()
        )?;
    }
    Ok(())
}
