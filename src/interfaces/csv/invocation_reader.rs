use crate::error::{RecordError, Result};
use std::io::Read;

/// An operation name and its positional arguments.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Invocation {
    pub function: String,
    pub args: Vec<String>,
}

/// Reads invocations from a CSV source.
///
/// Each row is `function,arg1,arg2,...` with no header row. Rows may have any
/// width, fields are trimmed, and lines starting with `#` are skipped.
pub struct InvocationReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> InvocationReader<R> {
    /// Creates a new `InvocationReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .flexible(true)
            .comment(Some(b'#'))
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads invocations row by row.
    pub fn invocations(self) -> impl Iterator<Item = Result<Invocation>> {
        self.reader.into_records().map(|result| -> Result<Invocation> {
            let record = result?;
            let mut fields = record.iter().map(str::to_string);
            let function = fields
                .next()
                .filter(|f| !f.is_empty())
                .ok_or_else(|| RecordError::ValidationError("Missing operation name".to_string()))?;
            Ok(Invocation {
                function,
                args: fields.collect(),
            })
        })
    }
}
