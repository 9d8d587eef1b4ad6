use anyhow::Context;
use lidarcore::FrameOutput;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends one JSON object per processed frame.
pub struct JsonLinesSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl JsonLinesSink {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening output {}", path.display()))?;
        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn write(&mut self, output: &FrameOutput) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.writer, output)
            .with_context(|| format!("serializing frame {}", output.header.seq))?;
        self.writer
            .write_all(b"\n")
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }

    pub fn flush(&mut self) -> anyhow::Result<()> {
        self.writer
            .flush()
            .with_context(|| format!("flushing {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lidarcore::interface::{Detection, DetectionFrame, FrameHeader};
    use lidarcore::{FramePipeline, PipelineConfig};

    #[test]
    fn sink_appends_one_line_per_frame() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("frames.jsonl");
        let pipeline = FramePipeline::new(PipelineConfig::default()).unwrap();

        let mut sink = JsonLinesSink::open(&path).unwrap();
        for seq in 0..2 {
            let frame = DetectionFrame::new(
                FrameHeader {
                    seq,
                    ..Default::default()
                },
                vec![Detection::new([10.0, 2.0, 0.0], [4.0, 2.0, 1.5], 0.0, 0.9, 2)],
            );
            sink.write(&pipeline.process(&frame)).unwrap();
        }
        sink.flush().unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let outputs: Vec<FrameOutput> = contents
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[1].header.seq, 1);
        assert_eq!(outputs[0].obstacles_2d.obstacles[0].x_corners, [8.0, 8.0, 12.0, 12.0]);
    }
}
