use std::io::{self, Write};

use matrix_pong::display::*;
use matrix_pong::frame::{FrameBuffer, Rgb, BORDER, LEFT, OFF};

/// Writer that always fails, standing in for an unplugged device.
struct Unplugged;

impl Write for Unplugged {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::NotConnected, "no device"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::NotConnected, "no device"))
    }
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

// ── FrameBuffer ───────────────────────────────────────────────────────────────

#[test]
fn frame_buffer_ignores_out_of_range_writes() {
    let mut fb = FrameBuffer::new();
    fb.set(-1, 0, LEFT);
    fb.set(60, 0, LEFT);
    fb.set(0, 30, LEFT);
    assert!(fb.rows().all(|row| row.iter().all(|&c| c == OFF)));
    assert_eq!(fb.get(60, 0), None);
    assert_eq!(fb.get(0, -1), None);
}

#[test]
fn frame_buffer_lines_are_clipped() {
    let mut fb = FrameBuffer::new();
    fb.hline(57, 3, 10, LEFT);
    assert_eq!(fb.get(57, 3), Some(LEFT));
    assert_eq!(fb.get(59, 3), Some(LEFT));
    fb.vline(4, 28, 10, BORDER);
    assert_eq!(fb.get(4, 29), Some(BORDER));
    fb.clear(OFF);
    assert_eq!(fb, FrameBuffer::new());
}

// ── AnsiTerminalSink ──────────────────────────────────────────────────────────

#[test]
fn terminal_prints_one_star_per_pixel() {
    let mut sink = AnsiTerminalSink::new(Vec::new());
    sink.show(&FrameBuffer::new()).unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();

    assert_eq!(count(&text, "*"), 60 * 30);
    assert_eq!(count(&text, "\r\n"), 30);
    assert!(text.contains("\x1b[2J"));
}

#[test]
fn terminal_emits_color_only_on_change() {
    let mut sink = AnsiTerminalSink::new(Vec::new());
    sink.show(&FrameBuffer::new()).unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();
    // A blank frame needs a single escape up front.
    assert_eq!(count(&text, "38;2;"), 1);
    assert!(text.contains("38;2;0;0;0m"));

    let mut fb = FrameBuffer::new();
    fb.set(3, 0, Rgb::new(1, 2, 3));
    let mut sink = AnsiTerminalSink::new(Vec::new());
    sink.show(&fb).unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();
    // off → custom → off
    assert_eq!(count(&text, "38;2;"), 3);
    assert!(text.contains("38;2;1;2;3m"));
}

#[test]
fn terminal_write_failure_is_reported() {
    let mut sink = AnsiTerminalSink::new(Unplugged);
    let err = sink.show(&FrameBuffer::new()).unwrap_err();
    assert!(matches!(err, SinkError::Io(_)));
}

// ── SerialLedSink ─────────────────────────────────────────────────────────────

#[test]
fn serial_streams_rgb_row_major() {
    let mut fb = FrameBuffer::new();
    fb.set(0, 1, BORDER);
    fb.set(2, 0, Rgb::new(9, 8, 7));

    let mut sink = SerialLedSink::new(Vec::new());
    sink.show(&fb).unwrap();
    let bytes = sink.into_inner();

    assert_eq!(bytes.len(), 60 * 30 * 3);
    assert_eq!(&bytes[0..3], &[0, 0, 0]);
    assert_eq!(&bytes[6..9], &[9, 8, 7]);
    let row1 = 60 * 3;
    assert_eq!(&bytes[row1..row1 + 3], &[255, 255, 255]);
}

#[test]
fn serial_frames_are_appended() {
    let mut sink = SerialLedSink::new(Vec::new());
    sink.show(&FrameBuffer::new()).unwrap();
    sink.show(&FrameBuffer::new()).unwrap();
    assert_eq!(sink.into_inner().len(), 2 * 60 * 30 * 3);
}

#[test]
fn serial_write_failure_is_reported() {
    let mut sink = SerialLedSink::new(Unplugged);
    assert!(sink.show(&FrameBuffer::new()).is_err());
}

#[test]
fn null_sink_accepts_anything() {
    assert!(NullSink.show(&FrameBuffer::new()).is_ok());
}
