use rand::Rng;
use rand::seq::index;

/// How many questions a run should ask; zero means the whole bank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RequestedCount(u32);

impl RequestedCount {
    pub const ALL: Self = Self(0);

    #[must_use]
    pub fn new(count: u32) -> Self {
        Self(count)
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        self.0 == 0
    }

    /// Number of questions a run over `total` questions will contain.
    #[must_use]
    pub fn resolve(&self, total: usize) -> usize {
        if self.is_all() {
            return total;
        }
        usize::try_from(self.0).map_or(total, |requested| requested.min(total))
    }
}

impl From<u32> for RequestedCount {
    fn from(count: u32) -> Self {
        Self::new(count)
    }
}

/// Uniform random sample, without replacement, of bank indices for one run.
///
/// The result has `requested.resolve(total)` distinct entries in `[0, total)`,
/// in random order.
pub fn select_order<R: Rng + ?Sized>(
    total: usize,
    requested: RequestedCount,
    rng: &mut R,
) -> Vec<usize> {
    let amount = requested.resolve(total);
    index::sample(rng, total, amount).into_vec()
}
