use crate::application::dispatch::Response;
use crate::error::{RecordError, Result};
use std::io::Write;

/// Writes one CSV row per invocation outcome: `function,status,payload`.
///
/// `status` is `success` or `failure`; a failure's payload is the error message.
pub struct ResponseWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResponseWriter<W> {
    pub fn new(sink: W) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(sink);
        writer.write_record(["function", "status", "payload"])?;
        Ok(Self { writer })
    }

    pub fn write_outcome(&mut self, function: &str, outcome: &Result<Response>) -> Result<()> {
        match outcome {
            Ok(response) => {
                let payload = response.payload_str();
                self.writer
                    .write_record([function, "success", payload.as_str()])?;
            }
            Err(err) => {
                let message = err.to_string();
                self.writer
                    .write_record([function, "failure", message.as_str()])?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(RecordError::from)
    }
}
