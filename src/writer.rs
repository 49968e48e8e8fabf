use std::io::{self, Stderr, Stdout, Write};

// Commands write through this seam so tests can capture their output

pub trait OutErr {
    fn write_err(&mut self, s: &str);
    fn write(&mut self, s: &str);
}

pub struct TotpWriter {
    pub out: Stdout,
    pub err: Stderr,
}

impl TotpWriter {
    pub fn new() -> Self {
        TotpWriter {
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

impl Default for TotpWriter {
    fn default() -> Self {
        TotpWriter::new()
    }
}

impl OutErr for TotpWriter {
    fn write_err(&mut self, s: &str) {
        match self.err.write_all(s.as_bytes()) {
            Ok(_) => (),
            Err(e) => eprintln!("{}", e),
        }
    }

    fn write(&mut self, s: &str) {
        match self.out.write_all(s.as_bytes()) {
            Ok(_) => (),
            Err(e) => eprintln!("{}", e),
        }
    }
}
