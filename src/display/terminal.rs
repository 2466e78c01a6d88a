/// ANSI terminal dump: one `*` per pixel in 24-bit color.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use super::{DisplaySink, SinkError};
use crate::frame::{FrameBuffer, Rgb};

const PIXEL: char = '*';

pub struct AnsiTerminalSink<W: Write> {
    out: W,
}

impl<W: Write> AnsiTerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl<W: Write> DisplaySink for AnsiTerminalSink<W> {
    fn show(&mut self, frame: &FrameBuffer) -> Result<(), SinkError> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.out.queue(cursor::MoveTo(0, 0))?;

        // Only emit a color escape when it differs from the previous pixel.
        let mut current: Option<Rgb> = None;
        for row in frame.rows() {
            for &pixel in row.iter() {
                if current != Some(pixel) {
                    self.out.queue(style::SetForegroundColor(to_color(pixel)))?;
                    current = Some(pixel);
                }
                self.out.queue(Print(PIXEL))?;
            }
            self.out.queue(Print("\r\n"))?;
        }

        self.out.queue(style::ResetColor)?;
        self.out.flush()?;
        Ok(())
    }
}
