//! JSON-lines output for frames

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

/// Writes each record as one line of JSON
pub struct FrameWriter<W: Write> {
    out: W,
    written: u64,
}

impl<W: Write> FrameWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    pub fn write<T: Serialize>(&mut self, record: &T) -> Result<()> {
        serde_json::to_writer(&mut self.out, record).context("failed to encode frame")?;
        self.out.write_all(b"\n").context("failed to write frame")?;
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn finish(mut self) -> Result<W> {
        self.out.flush().context("failed to flush frames")?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::frames::Frame;

    #[test]
    fn one_line_per_frame() {
        let frame = Frame {
            step: 3,
            t: 30.0,
            position_a: vec![0.0, 0.0],
            velocity_a: vec![0.0, 0.0],
            position_b: vec![1.5, 2.0],
            velocity_b: vec![0.5, 0.0],
            separation: 2.5,
        };
        let mut writer = FrameWriter::new(Vec::new());
        writer.write(&frame).unwrap();
        writer.write(&frame).unwrap();
        assert_eq!(writer.written(), 2);

        let bytes = writer.finish().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let back: Frame = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(back, frame);
    }
}
