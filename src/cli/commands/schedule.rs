//! Visual schedule command
//!
//! Store-backed schedule editing from the terminal. Item ids are long;
//! any unambiguous prefix is accepted.

use chrono::NaiveTime;

use crate::cli::args::{ScheduleCommand, ScheduleSubcommand};
use crate::error::MirnoError;
use crate::store::FileStore;
use crate::tools::Schedule;

/// Runs a schedule subcommand.
///
/// # Errors
///
/// Currently infallible: bad input (blank titles, unknown ids) is
/// reported on stdout without failing.
pub fn run(cmd: &ScheduleCommand) -> Result<(), MirnoError> {
    let store = FileStore::open(&cmd.store);
    let schedule = Schedule::load(&store);

    match &cmd.subcommand {
        ScheduleSubcommand::List => print_schedule(&schedule),

        ScheduleSubcommand::Add { title, time } => {
            if NaiveTime::parse_from_str(time, "%H:%M").is_err() {
                println!("'{time}' is not an HH:MM time; the item will sort first");
            }
            let next = schedule.with_added(time, title);
            if next == schedule {
                println!("nothing added: title is empty");
            } else {
                next.save(&store);
                print_schedule(&next);
            }
        }

        ScheduleSubcommand::Done { id } => match resolve(&schedule, id) {
            Some(full_id) => {
                let next = schedule.with_toggled(&full_id);
                next.save(&store);
                print_schedule(&next);
            }
            None => println!("no unique item matches '{id}'"),
        },

        ScheduleSubcommand::Remove { id } => match resolve(&schedule, id) {
            Some(full_id) => {
                let next = schedule.with_removed(&full_id);
                next.save(&store);
                print_schedule(&next);
            }
            None => println!("no unique item matches '{id}'"),
        },

        ScheduleSubcommand::Reset => {
            Schedule::clear_stored(&store);
            let seeded = Schedule::load(&store);
            println!("schedule reset to the default day");
            print_schedule(&seeded);
        }
    }

    Ok(())
}

/// Resolves an id prefix to the full id of exactly one item.
fn resolve(schedule: &Schedule, prefix: &str) -> Option<String> {
    let mut matches = schedule
        .items()
        .iter()
        .filter(|item| item.id.starts_with(prefix));
    let first = matches.next()?;
    if matches.next().is_some() {
        return None;
    }
    Some(first.id.clone())
}

fn print_schedule(schedule: &Schedule) {
    for item in schedule.sorted() {
        let mark = if item.done { 'x' } else { ' ' };
        let short_id = item.id.get(..8).unwrap_or(&item.id);
        println!("  [{mark}] {}  {:<24} ({short_id})", item.time, item.title);
    }
}
