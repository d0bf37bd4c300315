use super::state::State;
use crate::error;
use crate::lang::{parse, Command, Error, Kind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// The machine. Owns the state, the two output channels, and the
/// one-shot input text. Commands are fed one at a time so a session
/// can keep extending the same run.
pub struct Runtime {
    state: State,
    input: Option<String>,
    out: String,
    err: String,
    interrupted: Arc<AtomicBool>,
}

impl Runtime {
    pub fn new(input: &str) -> Runtime {
        Runtime {
            state: State::new(),
            input: Some(input.to_string()),
            out: String::new(),
            err: String::new(),
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Everything written to stdout so far.
    pub fn output(&self) -> &str {
        &self.out
    }

    /// Everything written to stderr so far.
    pub fn error_output(&self) -> &str {
        &self.err
    }

    /// Shared flag a signal handler can set to break a runaway program.
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        self.interrupted.clone()
    }

    /// Replace the pending input text.
    pub fn set_input(&mut self, input: &str) {
        self.input = Some(input.to_string());
    }

    /// Fresh machine, same interrupt wiring.
    pub fn clear(&mut self) {
        self.state = State::new();
        self.input = None;
        self.out.clear();
        self.err.clear();
    }

    pub fn run(&mut self, source: &str) -> Result<()> {
        for command in parse(source) {
            self.execute(command)?;
        }
        Ok(())
    }

    /// Appends one command to the log and runs until control passes
    /// the end of the log. A jump backward replays earlier commands.
    pub fn execute(&mut self, command: Command) -> Result<()> {
        let mut loc = self.state.push_code(command);
        let end = loc + 1;
        while loc < end {
            if self.interrupted.swap(false, Ordering::SeqCst) {
                return Err(error!(Break, self.state.code(loc).location()));
            }
            loc = self.step(loc)?;
        }
        Ok(())
    }

    fn step(&mut self, loc: usize) -> Result<usize> {
        let code = self.state.code(loc).clone();
        self.dispatch(&code, loc)
            .map_err(|error| error.in_location(code.location()))
    }

    fn dispatch(&mut self, code: &Command, loc: usize) -> Result<usize> {
        let cur = self.state.current_stack();
        match code.kind() {
            Kind::Hyeong => {
                self.push_wrap(cur, code.area_count() as f64);
            }
            Kind::Hang => {
                let mut sum = 0.0;
                for _ in 0..code.hangul_count() {
                    sum += self.pop_wrap(cur)?;
                }
                self.push_wrap(code.dot_count(), sum);
            }
            Kind::Hat => {
                let mut product = 1.0;
                for _ in 0..code.hangul_count() {
                    product *= self.pop_wrap(cur)?;
                }
                self.push_wrap(code.dot_count(), product);
            }
            Kind::Heut => {
                let mut sum = 0.0;
                let mut taken = Vec::with_capacity(code.hangul_count());
                for _ in 0..code.hangul_count() {
                    taken.push(self.pop_wrap(cur)?);
                }
                for num in taken {
                    sum -= num;
                    self.push_wrap(cur, num);
                }
                self.push_wrap(code.dot_count(), sum);
            }
            Kind::Heup => {
                let mut product = 1.0;
                let mut taken = Vec::with_capacity(code.hangul_count());
                for _ in 0..code.hangul_count() {
                    taken.push(self.pop_wrap(cur)?);
                }
                for num in taken {
                    product *= 1.0 / num;
                    self.push_wrap(cur, 1.0 / num);
                }
                self.push_wrap(code.dot_count(), product);
            }
            Kind::Heuk | Kind::Hyeo | Kind::Ha | Kind::Heu => {
                let num = self.pop_wrap(cur)?;
                for _ in 0..code.hangul_count() {
                    self.push_wrap(code.dot_count(), num);
                }
                self.push_wrap(cur, num);
                self.state.set_current_stack(code.dot_count());
            }
        }

        // the kind may have moved the current stack
        let cur = self.state.current_stack();
        let num = self.pop_wrap(cur)?;
        let threshold = code.area_count() as f64;
        let signal = code.tree().evaluate(threshold, || self.pop_wrap(cur))?;
        self.push_wrap(cur, num);
        self.resolve(signal, code.area_count(), loc)
    }

    /// Two-visit jump protocol. The first command to report a
    /// `(area, signal)` pair marks the spot, the second one jumps
    /// there. Signal 13 returns to wherever the last jump left from.
    fn resolve(&mut self, signal: u8, area: usize, loc: usize) -> Result<usize> {
        if signal == 13 {
            if let Some(origin) = self.state.latest_jump() {
                return Ok(origin);
            }
        } else if signal != 0 {
            let id = ((area as u64) << 4) + u64::from(signal);
            match self.state.point(id) {
                Some(target) => {
                    if target != loc {
                        self.state.set_latest_jump(loc);
                        return Ok(target);
                    }
                }
                None => self.state.set_point(id, loc),
            }
        }
        Ok(loc + 1)
    }

    fn push_wrap(&mut self, index: usize, num: f64) {
        match index {
            1 => write_value(&mut self.out, num),
            2 => write_value(&mut self.err, num),
            _ => self.state.push(index, num),
        }
    }

    fn pop_wrap(&mut self, index: usize) -> Result<f64> {
        match index {
            0 => {
                if self.state.stack(0).is_empty() {
                    let text = match self.input.take() {
                        Some(text) => text,
                        None => return Err(error!(InputExhausted)),
                    };
                    for c in text.chars() {
                        if let Some(digit) = c.to_digit(10) {
                            self.state.push(0, f64::from(digit));
                        }
                    }
                    if self.state.stack(0).is_empty() {
                        return Err(error!(InputExhausted));
                    }
                }
                Ok(self.state.pop(0))
            }
            1 => Err(error!(IllegalRead; "STDOUT IS WRITE-ONLY")),
            2 => Err(error!(IllegalRead; "STDERR IS WRITE-ONLY")),
            _ => Ok(self.state.pop(index)),
        }
    }
}

/// A positive value prints as the code point of its floor, anything
/// else as the decimal text of its absolute value.
fn write_value(channel: &mut String, num: f64) {
    if num > 0.0 {
        match std::char::from_u32(num.floor() as u32) {
            Some(c) => channel.push(c),
            None => channel.push(std::char::REPLACEMENT_CHARACTER),
        }
    } else {
        channel.push_str(&num.abs().to_string());
    }
}
