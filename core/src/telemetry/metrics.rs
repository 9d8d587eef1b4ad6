use crate::processing::pipeline::FrameReport;
use std::sync::Mutex;

/// Running totals across every frame a pipeline has processed.
pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub frames: usize,
    pub received: usize,
    pub malformed: usize,
    pub rejected: usize,
    pub emitted: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_frame(&self, report: &FrameReport) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.frames += 1;
            metrics.received += report.received;
            metrics.malformed += report.malformed;
            metrics.rejected += report.below_threshold + report.unmapped;
            metrics.emitted += report.emitted;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        if let Ok(metrics) = self.inner.lock() {
            *metrics
        } else {
            MetricsSnapshot::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
