use crate::lang::Command;
use std::collections::HashMap;

/// Numbered stacks, the command log, and the jump table for one run.
///
/// Stacks exist once touched. Stack 0 is the input stack, stacks 1
/// and 2 are claimed by the output channels and never stored here.
pub struct State {
    stacks: HashMap<usize, Vec<f64>>,
    code: Vec<Command>,
    points: HashMap<u64, usize>,
    cur: usize,
    latest: Option<usize>,
}

impl State {
    pub fn new() -> State {
        State {
            stacks: HashMap::new(),
            code: Vec::new(),
            points: HashMap::new(),
            cur: 3,
            latest: None,
        }
    }

    pub fn current_stack(&self) -> usize {
        self.cur
    }

    pub fn set_current_stack(&mut self, cur: usize) {
        self.cur = cur;
    }

    pub fn stack(&mut self, index: usize) -> &mut Vec<f64> {
        self.stacks.entry(index).or_insert_with(Vec::new)
    }

    /// Read-only view, an untouched stack reads as empty.
    pub fn values(&self, index: usize) -> &[f64] {
        match self.stacks.get(&index) {
            Some(stack) => stack,
            None => &[],
        }
    }

    pub fn push(&mut self, index: usize, num: f64) {
        let stack = self.stack(index);
        // a NaN produced by reading an empty stack does not take root
        if !stack.is_empty() || !num.is_nan() {
            stack.push(num);
        }
    }

    pub fn pop(&mut self, index: usize) -> f64 {
        self.stack(index).pop().unwrap_or(f64::NAN)
    }

    pub fn code(&self, loc: usize) -> &Command {
        &self.code[loc]
    }

    pub fn push_code(&mut self, command: Command) -> usize {
        self.code.push(command);
        self.code.len() - 1
    }

    pub fn commands(&self) -> &[Command] {
        &self.code
    }

    pub fn point(&self, id: u64) -> Option<usize> {
        self.points.get(&id).copied()
    }

    /// First registration wins, later calls never overwrite.
    pub fn set_point(&mut self, id: u64, loc: usize) {
        self.points.entry(id).or_insert(loc);
    }

    pub fn latest_jump(&self) -> Option<usize> {
        self.latest
    }

    pub fn set_latest_jump(&mut self, loc: usize) {
        self.latest = Some(loc);
    }
}

impl Default for State {
    fn default() -> State {
        State::new()
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "current stack: {}", self.cur)?;
        let mut indices: Vec<usize> = self.stacks.keys().copied().collect();
        indices.sort_unstable();
        for index in indices {
            writeln!(f, "stack {}: {:?}", index, self.stacks[&index])?;
        }
        Ok(())
    }
}
