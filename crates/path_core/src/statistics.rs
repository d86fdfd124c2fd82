use std::{
    fmt::Display,
    time::{Duration, Instant},
};

#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    /// Vertices settled by the last full run
    pub nodes_settled: usize,
    pub duration: Option<Duration>,
    /// Queries answered from an already settled search tree
    pub cache_hits: usize,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time.take() {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} nodes settled in {:?}, {} cached queries",
            self.nodes_settled, self.duration, self.cache_hits
        )
    }
}
