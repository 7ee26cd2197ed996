use chrono::NaiveDate;
use clap::{Arg, Command};
use dob_check::logging::{info, init_tracing};
use dob_check::{Clock, FixedClock, FormInput, SystemClock, submit};
use std::error::Error;
use std::process::ExitCode;

fn parse_today(raw: &str) -> Result<NaiveDate, Box<dyn Error>> {
    if !dob_check::is_valid_date(raw) {
        return Err(format!("--today: expected a real YYYY-MM-DD date, got {raw:?}").into());
    }
    Ok(NaiveDate::parse_from_str(raw, "%Y-%m-%d")?)
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    init_tracing();

    let matches = Command::new("dob-check")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Validate a date of birth and print the age")
        .arg(
            Arg::new("day")
                .short('d')
                .long("day")
                .value_name("DD")
                .help("Day of birth"),
        )
        .arg(
            Arg::new("month")
                .short('m')
                .long("month")
                .value_name("MM")
                .help("Month of birth"),
        )
        .arg(
            Arg::new("year")
                .short('y')
                .long("year")
                .value_name("YYYY")
                .help("Year of birth"),
        )
        .arg(
            Arg::new("today")
                .long("today")
                .value_name("YYYY-MM-DD")
                .help("Pin the current date instead of reading the system clock"),
        )
        .get_matches();

    let raw = |id: &str| matches.get_one::<String>(id).cloned().unwrap_or_default();
    let input = FormInput::new(raw("day"), raw("month"), raw("year"));

    let clock: Box<dyn Clock> = match matches.get_one::<String>("today") {
        Some(today) => Box::new(FixedClock::at_date(parse_today(today)?)),
        None => Box::new(SystemClock),
    };
    info!(today = %clock.today(), "validating date of birth");

    let report = submit(&input, &clock.as_ref());
    if let Some(age) = report.age {
        println!("{age}");
        return Ok(ExitCode::SUCCESS);
    }
    for (field, reason) in report.errors() {
        println!("{field}: {reason}");
    }
    Ok(ExitCode::FAILURE)
}
