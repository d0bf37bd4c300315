/*!
# Terminal Module

This Rust module provides the interactive interpreter session.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::mach::Runtime;
use ansi_term::{Colour, Style};
use linefeed::{Interface, ReadResult, Signal};
use std::sync::atomic::Ordering;

pub fn main() {
    let mut runtime = Runtime::new("");
    let interrupted = runtime.interrupt_flag();
    ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(&mut runtime) {
        eprintln!("{}", error);
    }
}

fn main_loop(runtime: &mut Runtime) -> std::io::Result<()> {
    let command = Interface::new("hyeong")?;
    command.set_report_signal(Signal::Interrupt, true);
    command.set_prompt("> ")?;
    command.write_fmt(format_args!(
        "Hyeo-ung Programming Language\nType \"help\" for more information.\n"
    ))?;

    loop {
        let line = match command.read_line()? {
            ReadResult::Input(line) => line,
            ReadResult::Signal(Signal::Interrupt) => {
                command.set_buffer("")?;
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        let trimmed = line.trim();
        match trimmed {
            "" => continue,
            "exit" => break,
            "help" => {
                command.write_fmt(format_args!(
                    "clear          Reset the machine and its output\n\
                     input DIGITS   Provide digits for the input stack\n\
                     state          Show the stacks of the machine\n\
                     exit           Leave the interpreter\n\
                     Anything else runs as Hyeo-ung code. Ctrl-C breaks a loop.\n"
                ))?;
                continue;
            }
            "clear" => {
                runtime.clear();
                continue;
            }
            "state" => {
                command.write_fmt(format_args!("{:?}", runtime.state()))?;
                continue;
            }
            _ => {}
        }
        if let Some(digits) = trimmed.strip_prefix("input ") {
            runtime.set_input(digits.trim());
            continue;
        }
        command.add_history_unique(line.clone());
        let out_mark = runtime.output().len();
        let err_mark = runtime.error_output().len();
        // a fatal error keeps the session and its stacks alive
        let result = runtime.run(&line);
        let out = &runtime.output()[out_mark..];
        if !out.is_empty() {
            command.write_fmt(format_args!(
                "[{}] {}\n",
                Style::new().bold().paint("stdout"),
                out
            ))?;
        }
        let err = &runtime.error_output()[err_mark..];
        if !err.is_empty() {
            command.write_fmt(format_args!(
                "[{}] {}\n",
                Colour::Red.bold().paint("stderr"),
                err
            ))?;
        }
        if let Err(error) = result {
            command.write_fmt(format_args!(
                "{}\n",
                Style::new().bold().paint(error.to_string())
            ))?;
        }
    }
    Ok(())
}
