/// cache accounting at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

impl Stats {
    pub fn rate(&self) -> f64 {
        match self.hits + self.misses {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} entries, {} hits, {} misses ({:.0}% hit rate)",
            self.size,
            self.hits,
            self.misses,
            self.rate() * 100.0,
        )
    }
}
