use hyeong::lang::Error;
use hyeong::mach::Runtime;

fn run(source: &str, input: &str) -> (Runtime, Result<(), Error>) {
    let mut runtime = Runtime::new(input);
    let result = runtime.run(source);
    (runtime, result)
}

#[test]
fn push_literal() {
    let (runtime, result) = run("형...", "");
    assert!(result.is_ok());
    assert_eq!(runtime.state().values(3), [3.0]);
    assert!(runtime.output().is_empty());
    assert!(runtime.error_output().is_empty());
}

#[test]
fn print_zero() {
    let (runtime, result) = run("혀어어어어어어엉......핫.", "");
    assert!(result.is_ok());
    assert_eq!(runtime.output(), "0");
}

#[test]
fn print_h() {
    let (runtime, result) = run("혀어어어어어어엉.........핫.", "");
    assert!(result.is_ok());
    assert_eq!(runtime.output(), "H");
}

#[test]
fn counter_loop_prints_digits() {
    let source = "형 흣........💕 흣.... 형. 하앙... 흣. 흑... 흐읏....!💕";
    let (runtime, result) = run(source, "");
    assert!(result.is_ok());
    assert_eq!(runtime.output(), "12345678");
}

#[test]
fn stderr_channel() {
    let (runtime, result) = run("형. 흣..", "");
    assert!(result.is_ok());
    assert!(runtime.output().is_empty());
    assert_eq!(runtime.error_output(), "1");
}

#[test]
fn empty_pop_poisons_with_nan() {
    let (runtime, result) = run("항.", "");
    assert!(result.is_ok());
    assert_eq!(runtime.output(), "NaN");
}

#[test]
fn negate_restores_its_operands() {
    let (runtime, result) = run("형.... 형...... 흐읏...", "");
    assert!(result.is_ok());
    assert_eq!(runtime.state().values(3), [6.0, 4.0, -10.0]);
}

#[test]
fn reciprocal_replaces_its_operands() {
    let (runtime, result) = run("형.. 형.... 흐읍...", "");
    assert!(result.is_ok());
    assert_eq!(runtime.state().values(3), [0.25, 0.5, 0.125]);
}

#[test]
fn copy_switches_the_current_stack() {
    let (runtime, result) = run("형.... 흑...... 형.", "");
    assert!(result.is_ok());
    assert_eq!(runtime.state().values(3), [4.0]);
    assert_eq!(runtime.state().values(6), [4.0, 1.0]);
}

#[test]
fn reading_an_output_stack_is_fatal() {
    let (runtime, result) = run("형. 흑.", "");
    assert_eq!(runtime.output(), "\u{1}");
    assert_eq!(result.unwrap_err().code(), 1);
}

#[test]
fn input_digits_feed_stack_zero() {
    let (runtime, result) = run("흑 하앙.", "570");
    assert!(result.is_ok());
    assert_eq!(runtime.output(), "\u{7}");
}

#[test]
fn input_runs_out() {
    let (runtime, result) = run("흑 하앙.", "57");
    assert_eq!(runtime.output(), "\u{c}");
    assert_eq!(result.unwrap_err().code(), 2);
}

#[test]
fn errors_carry_the_command_location() {
    let (_, result) = run("형.\n흑.", "");
    assert_eq!(result.unwrap_err().location(), Some((2, 0)));
}

#[test]
fn return_signal_without_an_origin_falls_through() {
    let (runtime, result) = run("형♡", "");
    assert!(result.is_ok());
    assert_eq!(runtime.state().values(3), [0.0]);
}

#[test]
fn incremental_runs_share_state() {
    let mut runtime = Runtime::new("");
    runtime.run("형..").unwrap();
    runtime.run("형...").unwrap();
    assert_eq!(runtime.state().values(3), [2.0, 3.0]);
}

#[test]
fn clear_resets_the_machine() {
    let mut runtime = Runtime::new("");
    runtime.run("형.. 형♥").unwrap();
    runtime.clear();
    assert!(runtime.state().values(3).is_empty());
    assert!(runtime.state().commands().is_empty());
    runtime.run("형...").unwrap();
    assert_eq!(runtime.state().values(3), [3.0]);
}
