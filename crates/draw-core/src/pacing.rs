/// Maps elapsed play time onto stone throws and grid slots.
///
/// Throws alternate between the two teams, so throw order and grid order
/// differ: the grid shows one row per team, filled left to right.
#[derive(Debug, Clone)]
pub struct StonePacing {
    num_stones: usize,
    s_per_stone: f64,
}

impl StonePacing {
    pub fn new(num_stones: usize, s_per_stone: f64) -> Self {
        Self {
            num_stones,
            s_per_stone,
        }
    }

    /// Which stone should currently be in play. Deterministic in elapsed
    /// time, non-decreasing within an end, wraps at `num_stones`.
    pub fn stone_index(&self, elapsed_s: i64) -> usize {
        let throws = (elapsed_s as f64 / self.s_per_stone).floor() as i64;
        throws.rem_euclid(self.num_stones as i64) as usize
    }

    /// Grid slot for the k-th throw of an end: throw 2k belongs to the
    /// first team (top row), throw 2k+1 to the second (bottom row).
    pub fn grid_slot(&self, throw_idx: usize) -> usize {
        let half = self.num_stones / 2;
        if throw_idx % 2 == 0 {
            throw_idx / 2
        } else {
            half + throw_idx / 2
        }
    }

    /// Grid slots of every stone already thrown at the given stone index.
    pub fn thrown_slots(&self, stone_index: usize) -> impl Iterator<Item = usize> + '_ {
        (0..stone_index).map(|k| self.grid_slot(k))
    }

    pub fn num_stones(&self) -> usize {
        self.num_stones
    }
}
