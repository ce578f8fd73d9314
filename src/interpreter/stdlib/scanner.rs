use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    interpreter::{
        environment::Environment,
        evaluator::core::EvalResult,
        stdlib::{HostIo, build_members, host_methods, parse_number},
        value::{class::Class, core::Value},
    },
    util::num::parse_integer,
};

/// Input state shared by every `Scanner`.
///
/// `rest` holds what is left of the current line after `next` and friends
/// have taken words from it. `None` means the next read starts a new line.
#[derive(Clone)]
struct ScannerState {
    io:   HostIo,
    rest: Rc<RefCell<Option<String>>>,
}

impl ScannerState {
    /// The remainder of the current line, or the next full line.
    fn next_line(&self, line: usize) -> EvalResult<String> {
        match self.rest.borrow_mut().take() {
            Some(rest) => Ok(rest),
            None => self.io.read_line(line),
        }
    }

    /// The next whitespace-delimited word, skipping blank lines.
    fn next_word(&self, line: usize) -> EvalResult<String> {
        loop {
            let text = self.next_line(line)?;
            let text = text.trim_start();
            if text.is_empty() {
                continue;
            }

            let end = text.find(char::is_whitespace).unwrap_or(text.len());
            let (word, rest) = text.split_at(end);
            *self.rest.borrow_mut() = Some(rest.to_string());
            return Ok(word.to_string());
        }
    }
}

host_methods! {
    SCANNER_TABLE: ScannerState {
        "nextLine" => {
            params: &[],
            func: |state, _, line| state.next_line(line).map(Value::from),
        },
        "next" => {
            params: &[],
            func: |state, _, line| state.next_word(line).map(Value::from),
        },
        "nextInt" => {
            params: &[],
            func: |state, _, line| parse_integer(&state.next_word(line)?, line).map(Value::Number),
        },
        "nextDouble" => {
            params: &[],
            func: |state, _, line| {
                parse_number(&state.next_word(line)?, "Scanner.nextDouble", line).map(Value::Number)
            },
        },
    }
}

/// Builds `java.util.Scanner`. Construction ignores its arguments.
pub(super) fn class(io: &HostIo, closure: &Rc<Environment>) -> Class {
    let state = ScannerState { io:   io.clone(),
                               rest: Rc::new(RefCell::new(None)), };

    Class::host("Scanner", HashMap::new(), build_members(SCANNER_TABLE, &state, closure))
}
