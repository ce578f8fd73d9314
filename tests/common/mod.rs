use std::{cell::RefCell, io::Cursor, rc::Rc};

use kava::{error::Error, interpreter::stdlib::HostIo, run_source};

/// Runs `source` with `input` as standard input, returning whatever was
/// printed before the run finished alongside its result.
pub fn run_capturing(source: &str, input: &str) -> (String, Result<(), Error>) {
    let output = Rc::new(RefCell::new(Vec::new()));
    let io = HostIo::new(output.clone(), Rc::new(RefCell::new(Cursor::new(input.to_string()))));

    let result = run_source(source, &io);
    let printed = String::from_utf8(output.borrow().clone()).expect("output is UTF-8");

    (printed, result)
}

/// Runs `source` and returns its output, panicking on any error.
#[allow(dead_code)]
pub fn run(source: &str, input: &str) -> String {
    let (printed, result) = run_capturing(source, input);
    if let Err(e) = result {
        panic!("Script failed: {e}\nOutput so far:\n{printed}");
    }
    printed
}

/// Wraps `body` in a class with an entry point, all on one line.
#[allow(dead_code)]
pub fn in_main(body: &str) -> String {
    format!("class Main {{ public static void main(String[] args) {{ {body} }} }}")
}
