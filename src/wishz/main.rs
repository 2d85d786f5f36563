use clap::Parser;
use colored::*;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use wishz::api::WishzApi;
use wishz::commands::{self, CmdMessage, CmdResult, MessageLevel};
use wishz::dispatch::DispatchCommand;
use wishz::error::{Result, WishzError};
use wishz::model::{BirthdayRecord, TIMESTAMP_FORMAT};
use wishz::schedule::{self, Clock, DailyScheduler, SystemClock};
use wishz::store::fs::FileStore;

mod args;
use args::Cli;

const MENU_PROMPT: &str = "Enter 'add' to add new birthdays, 'list' to list them, \
'schedule' to schedule birthday messages, 'update' to update a birthday, \
'clear' to clear all birthdays, or 'exit' to exit: ";

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: WishzApi<FileStore>,
    dispatch_command: String,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = AppContext {
        api: WishzApi::new(FileStore::new(&cli.file)),
        dispatch_command: cli.dispatch_command,
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let Some(action) = prompt_line(&mut input, MENU_PROMPT)? else {
            // EOF behaves like exit.
            break;
        };
        match action.to_lowercase().as_str() {
            "add" => handle_add(&mut ctx, &mut input)?,
            "list" => handle_list(&ctx)?,
            "schedule" => handle_schedule(&mut ctx)?,
            "update" => handle_update(&mut ctx, &mut input)?,
            "clear" => handle_clear(&mut ctx)?,
            "exit" => {
                println!("Exiting the program.");
                break;
            }
            "" => continue,
            _ => println!(
                "{}",
                "Invalid option. Please enter 'add', 'list', 'schedule', 'update', 'clear', or 'exit'."
                    .red()
            ),
        }
    }

    Ok(())
}

fn handle_add(ctx: &mut AppContext, input: &mut impl BufRead) -> Result<()> {
    let Some(count_str) = prompt_line(input, "How many birthdays would you like to add? ")? else {
        return Ok(());
    };
    let count: usize = match count_str.parse() {
        Ok(n) => n,
        Err(_) => {
            print_error(&format!("Error adding birthdays: invalid count '{count_str}'"));
            return Ok(());
        }
    };

    for _ in 0..count {
        let Some(timestamp) = prompt_line(
            input,
            "Enter the date and time in the format YYYY-MM-DD HH:MM:SS: ",
        )?
        else {
            return Ok(());
        };
        let Some(name) = prompt_line(input, "Enter the name of the person: ")? else {
            return Ok(());
        };
        let Some(phone) = prompt_line(
            input,
            "Enter the phone number of the person (in the format +countrycodephonenumber): ",
        )?
        else {
            return Ok(());
        };

        // A bad timestamp abandons the rest of the batch; records already
        // appended stay appended.
        let at = match BirthdayRecord::parse_timestamp(&timestamp) {
            Ok(at) => at,
            Err(e) => {
                print_error(&format!("Error adding birthdays: {e}"));
                return Ok(());
            }
        };

        let result = ctx.api.add_record(&BirthdayRecord::new(at, name, phone))?;
        print_messages(&result.messages);
    }

    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_records()?;
    print_listing(&result);
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, input: &mut impl BufRead) -> Result<()> {
    let listing = ctx.api.list_records()?;
    print_listing(&listing);
    print_messages(&listing.messages);

    let Some(selection) = prompt_line(input, "Enter the number of the birthday you want to update: ")?
    else {
        return Ok(());
    };
    let index: usize = match selection.parse() {
        Ok(n) => n,
        Err(_) => {
            print_error("Invalid selection.");
            return Ok(());
        }
    };
    if index == 0 || index > listing.listed.len() {
        print_error("Invalid selection.");
        return Ok(());
    }

    let Some(timestamp) = prompt_line(
        input,
        "Enter the new date and time in the format YYYY-MM-DD HH:MM:SS: ",
    )?
    else {
        return Ok(());
    };
    let Some(name) = prompt_line(input, "Enter the new name of the person: ")? else {
        return Ok(());
    };
    let Some(phone) = prompt_line(
        input,
        "Enter the new phone number of the person (in the format +countrycodephonenumber): ",
    )?
    else {
        return Ok(());
    };

    let at = match BirthdayRecord::parse_timestamp(&timestamp) {
        Ok(at) => at,
        Err(e) => {
            print_error(&format!("Error updating birthday: {e}"));
            return Ok(());
        }
    };

    match ctx.api.update_record(index, BirthdayRecord::new(at, name, phone)) {
        Ok(result) => print_messages(&result.messages),
        Err(WishzError::InvalidSelection { .. }) => print_error("Invalid selection."),
        Err(e) => print_error(&format!("Error updating birthday: {e}")),
    }

    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear_records()?;
    print_messages(&result.messages);
    Ok(())
}

/// Build the send plan, register it, then run the tick loop. Only a
/// dispatch failure (or process termination) leaves the loop.
fn handle_schedule(ctx: &mut AppContext) -> Result<()> {
    let clock = Rc::new(SystemClock);
    let plan = ctx.api.plan_schedule(clock.now());
    print_messages(&plan.messages);

    if plan.jobs.is_empty() {
        println!("{}", "No upcoming birthdays to schedule.".dimmed());
        return Ok(());
    }

    let sender = Rc::new(RefCell::new(DispatchCommand::new(ctx.dispatch_command.as_str())));
    let mut scheduler = DailyScheduler::new();
    commands::schedule::register(&mut scheduler, &plan, Rc::clone(&clock), sender);

    schedule::run_loop(&mut scheduler, &*clock)
}

fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_listing(result: &CmdResult) {
    for dr in &result.listed {
        println!(
            "{} {}: {}, {}",
            format!("{}.", dr.index).yellow(),
            dr.record.name.bold(),
            dr.record.at.format(TIMESTAMP_FORMAT),
            dr.record.phone
        );
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_error(content: &str) {
    println!("{}", content.red());
}
