/// Per-end progress fills, gated so the display only moves in visible steps.
///
/// Stored fills start at `-granularity` so every segment renders its 0% state
/// on the first update. A fill advances when it has grown by at least the
/// granularity, or when it first reaches exactly 100; after that it freezes.
#[derive(Debug, Clone)]
pub struct EndProgress {
    fills: Vec<i64>,
    s_per_end: i64,
    granularity: i64,
}

impl EndProgress {
    pub fn new(total_ends: usize, s_per_end: i64, granularity: i64) -> Self {
        Self {
            fills: vec![-granularity; total_ends],
            s_per_end,
            granularity,
        }
    }

    /// Advance stored fills for the given elapsed time. Returns the ends
    /// whose displayed fill changed, with their new percentage.
    pub fn update(&mut self, elapsed_s: i64) -> Vec<(usize, i64)> {
        let mut changed = Vec::new();
        for end in 0..self.fills.len() {
            let fill = self.raw_fill(end, elapsed_s);
            let stored = self.fills[end];
            if fill >= stored + self.granularity || (fill == 100 && stored != 100) {
                self.fills[end] = fill;
                changed.push((end, fill));
            }
        }
        changed
    }

    fn raw_fill(&self, end: usize, elapsed_s: i64) -> i64 {
        let start = end as i64 * self.s_per_end;
        let pct = (elapsed_s - start) as f64 / self.s_per_end as f64 * 100.0;
        pct.clamp(0.0, 100.0) as i64
    }

    /// Displayed percentage for one end, 0..=100.
    pub fn fill(&self, end: usize) -> i64 {
        self.fills[end].max(0)
    }

    pub fn total_ends(&self) -> usize {
        self.fills.len()
    }
}
