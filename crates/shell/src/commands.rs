//! Parsing of shell input lines into commands.

use barberbook_core::{
    calendar::parse_iso_date,
    errors::BookingError,
    models::{BookingRequest, ClockTime, ScheduleUpdate, SlotDuration, WorkingDays},
};
use chrono::NaiveDate;
use thiserror::Error;

pub const BOOK_USAGE: &str = "book YYYY-MM-DD HH:MM NAME | PHONE | EMAIL";
pub const BLOCK_USAGE: &str = "block YYYY-MM-DD [confirm]";
pub const CONFIG_USAGE: &str =
    "config [start=HH:MM] [end=HH:MM] [duration=30|60] [days=1,2,3,4,5,6]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Week { offset: i64 },
    Slots { date: NaiveDate },
    Book(BookingRequest),
    Login { password: String },
    Logout,
    Config(ScheduleUpdate),
    /// `confirmed` is set by a trailing `confirm` and allows cancelling
    /// the day's bookings.
    Block { date: NaiveDate, confirmed: bool },
    Unblock { date: NaiveDate },
    Agenda { date: NaiveDate },
    Quit,
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("{0}")]
    Invalid(#[from] BookingError),
}

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let command = match name.to_lowercase().as_str() {
            "help" | "?" => Command::Help,
            "week" => Command::Week {
                offset: parse_offset(rest)?,
            },
            "slots" => Command::Slots {
                date: required_date(rest, "slots YYYY-MM-DD")?,
            },
            "book" => Command::Book(parse_booking(rest)?),
            "login" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("login PASSWORD"));
                }
                Command::Login {
                    password: rest.to_string(),
                }
            }
            "logout" => Command::Logout,
            "config" => Command::Config(parse_update(rest)?),
            "block" => parse_block(rest)?,
            "unblock" => Command::Unblock {
                date: required_date(rest, "unblock YYYY-MM-DD")?,
            },
            "agenda" => Command::Agenda {
                date: required_date(rest, "agenda YYYY-MM-DD")?,
            },
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }

    /// Commands reserved for an authenticated barber.
    pub fn requires_barber(&self) -> bool {
        matches!(
            self,
            Command::Config(_)
                | Command::Block { .. }
                | Command::Unblock { .. }
                | Command::Agenda { .. }
        )
    }
}

fn parse_offset(rest: &str) -> Result<i64, CommandError> {
    if rest.is_empty() {
        return Ok(0);
    }
    rest.parse::<i64>()
        .map_err(|_| CommandError::Usage("week [OFFSET], e.g. week 1 or week -1"))
}

fn required_date(rest: &str, usage: &'static str) -> Result<NaiveDate, CommandError> {
    if rest.is_empty() || rest.contains(char::is_whitespace) {
        return Err(CommandError::Usage(usage));
    }
    Ok(parse_iso_date(rest)?)
}

/// Splits off the first whitespace-separated word, skipping any run of
/// whitespace after it.
fn next_word(input: &str) -> Option<(&str, &str)> {
    let (word, rest) = input.trim_start().split_once(char::is_whitespace)?;
    Some((word, rest.trim_start()))
}

fn parse_block(rest: &str) -> Result<Command, CommandError> {
    let mut words = rest.split_whitespace();
    let (Some(date), flag, None) = (words.next(), words.next(), words.next()) else {
        return Err(CommandError::Usage(BLOCK_USAGE));
    };
    let confirmed = match flag {
        None => false,
        Some(flag) if flag.eq_ignore_ascii_case("confirm") => true,
        Some(_) => return Err(CommandError::Usage(BLOCK_USAGE)),
    };

    Ok(Command::Block {
        date: parse_iso_date(date)?,
        confirmed,
    })
}

fn parse_booking(rest: &str) -> Result<BookingRequest, CommandError> {
    let Some((date, rest)) = next_word(rest) else {
        return Err(CommandError::Usage(BOOK_USAGE));
    };
    let Some((time, details)) = next_word(rest) else {
        return Err(CommandError::Usage(BOOK_USAGE));
    };

    let date = parse_iso_date(date)?;
    let time_slot: ClockTime = time.parse()?;

    let fields: Vec<&str> = details.split('|').map(str::trim).collect();
    let [name, phone, email] = fields.as_slice() else {
        return Err(CommandError::Usage(BOOK_USAGE));
    };
    if name.is_empty() || phone.is_empty() || email.is_empty() {
        return Err(CommandError::Usage(BOOK_USAGE));
    }
    if !looks_like_email(email) {
        return Err(BookingError::Validation(format!("'{}' is not a valid email address", email)).into());
    }

    Ok(BookingRequest {
        date,
        time_slot,
        client_name: name.to_string(),
        client_phone: phone.to_string(),
        client_email: email.to_string(),
    })
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

fn parse_update(rest: &str) -> Result<ScheduleUpdate, CommandError> {
    let mut update = ScheduleUpdate::default();

    for pair in rest.split_whitespace() {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(CommandError::Usage(CONFIG_USAGE));
        };
        match key.to_lowercase().as_str() {
            "start" => update.start_time = Some(value.parse()?),
            "end" => update.end_time = Some(value.parse()?),
            "duration" => {
                let minutes = value
                    .parse::<u16>()
                    .map_err(|_| CommandError::Usage(CONFIG_USAGE))?;
                update.slot_duration = Some(SlotDuration::try_from(minutes)?);
            }
            "days" => {
                let indices = value
                    .split(',')
                    .filter(|d| !d.trim().is_empty())
                    .map(|d| d.trim().parse::<u8>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|_| CommandError::Usage(CONFIG_USAGE))?;
                update.working_days = Some(WorkingDays::from_indices(indices)?);
            }
            _ => return Err(CommandError::Usage(CONFIG_USAGE)),
        }
    }

    if update.is_empty() {
        return Err(CommandError::Usage(CONFIG_USAGE));
    }
    Ok(update)
}
