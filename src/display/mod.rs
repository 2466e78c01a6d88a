/// Output sinks. Everything that turns a finished `FrameBuffer` into
/// something visible lives under this module.

use thiserror::Error;

use crate::frame::FrameBuffer;

mod serial;
mod terminal;

pub use serial::SerialLedSink;
pub use terminal::AnsiTerminalSink;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("display write failed: {0}")]
    Io(#[from] std::io::Error),
}

pub trait DisplaySink {
    /// Present one frame.  Must not block the tick loop indefinitely.
    fn show(&mut self, frame: &FrameBuffer) -> Result<(), SinkError>;
}

/// Discards every frame.
#[derive(Debug, Default)]
pub struct NullSink;

impl DisplaySink for NullSink {
    fn show(&mut self, _frame: &FrameBuffer) -> Result<(), SinkError> {
        Ok(())
    }
}
