use std::time::{Duration, Instant};

/// Wall-clock timer scoped to one report section.
pub struct SectionTimer {
    label: &'static str,
    started: Instant,
}

impl SectionTimer {
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for SectionTimer {
    fn drop(&mut self) {
        tracing::debug!(
            section = self.label,
            elapsed_ms = self.started.elapsed().as_secs_f64() * 1000.0,
            "section finished"
        );
    }
}
