/// LED matrix over a serial link: the frame is streamed row-major, three
/// bytes (`r`, `g`, `b`) per pixel, then flushed.

use std::io::Write;

use super::{DisplaySink, SinkError};
use crate::frame::FrameBuffer;

pub struct SerialLedSink<W: Write> {
    port: W,
}

impl<W: Write> SerialLedSink<W> {
    pub fn new(port: W) -> Self {
        Self { port }
    }

    pub fn into_inner(self) -> W {
        self.port
    }
}

impl<W: Write> DisplaySink for SerialLedSink<W> {
    fn show(&mut self, frame: &FrameBuffer) -> Result<(), SinkError> {
        let mut packet = Vec::with_capacity(frame.width() * frame.height() * 3);
        for row in frame.rows() {
            for pixel in row.iter() {
                packet.extend_from_slice(&pixel.to_bytes());
            }
        }
        self.port.write_all(&packet)?;
        self.port.flush()?;
        Ok(())
    }
}
