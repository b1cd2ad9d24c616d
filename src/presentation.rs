use crate::validation::ValidationResult;
use std::io::{self, Write};

/// Receives validation outcomes and shows them to the user.
pub trait Presenter {
    fn present_result(&mut self, result: &ValidationResult) -> io::Result<()>;
}

/// Writes one message line per result.
pub struct WriterPresenter<W: Write> {
    writer: W,
}

impl<W: Write> WriterPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Presenter for WriterPresenter<W> {
    fn present_result(&mut self, result: &ValidationResult) -> io::Result<()> {
        writeln!(self.writer, "{}", result.message())?;
        self.writer.flush()
    }
}
