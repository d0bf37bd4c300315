extern crate ansi_term;
extern crate ctrlc;
use ansi_term::Style;
use hyeong::lang::Error;
use hyeong::mach::Runtime;
use std::process;
use std::sync::atomic::Ordering;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.len() {
        0 => hyeong::term::main(),
        1 => run(&args[0], None),
        2 => run(&args[0], Some(&args[1])),
        _ => {
            eprintln!("usage: hyeong [program] [input]");
            process::exit(64);
        }
    }
}

fn run(program: &str, input: Option<&str>) {
    let source = match std::fs::read_to_string(program) {
        Ok(source) => source,
        Err(_) => exit_with(hyeong::error!(FileNotFound; "PROGRAM FILE")),
    };
    let input = match input {
        None => String::new(),
        Some(arg) => match std::fs::read_to_string(arg) {
            Ok(text) => text,
            // not a readable file, the argument itself carries the digits
            Err(_) => arg.to_string(),
        },
    };
    let mut runtime = Runtime::new(&input);
    let interrupted = runtime.interrupt_flag();
    ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    let result = runtime.run(&source);
    print!("{}", runtime.output());
    eprint!("{}", runtime.error_output());
    if let Err(error) = result {
        exit_with(error);
    }
}

fn exit_with(error: Error) -> ! {
    eprintln!("{}", Style::new().bold().paint(error.to_string()));
    process::exit(i32::from(error.code()))
}
