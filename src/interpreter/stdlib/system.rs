use std::{collections::HashMap, rc::Rc};

use crate::interpreter::{
    environment::Environment,
    stdlib::{HostIo, build_members, host_methods},
    value::{class::Class, core::Value},
};

host_methods! {
    PRINT_STREAM_TABLE: HostIo {
        "println" => {
            params: &[],
            variadic: true,
            func: |io, args, line| {
                if args.is_empty() {
                    io.write("\n", line)?;
                }
                for arg in args {
                    io.write(&format!("{arg}\n"), line)?;
                }
                Ok(Value::Null)
            },
        },
        "print" => {
            params: &["value"],
            func: |io, args, line| {
                io.write(&args[0].to_string(), line)?;
                Ok(Value::Null)
            },
        },
    }
}

/// Builds `java.lang.System` with its `out` and `in` streams.
pub(super) fn class(io: &HostIo, closure: &Rc<Environment>) -> Class {
    let print_stream = Rc::new(Class::host("PrintStream",
                                           HashMap::new(),
                                           build_members(PRINT_STREAM_TABLE, io, closure)));
    let input_stream = Rc::new(Class::host("InputStream", HashMap::new(), HashMap::new()));

    let statics = HashMap::from([("out".to_string(), Class::construct(&print_stream)),
                                 ("in".to_string(), Class::construct(&input_stream))]);

    Class::host("System", statics, HashMap::new())
}
