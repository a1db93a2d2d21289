pub const CAPACITY: usize = 10;

/// Most recent thumb-to-index distances, oldest evicted first once full.
#[derive(Debug, Default)]
pub struct PinchHistory {
    samples: [f64; CAPACITY],
    start: usize,
    len: usize,
}

impl PinchHistory {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, distance: f64) {
        if self.len < CAPACITY {
            self.samples[(self.start + self.len) % CAPACITY] = distance;
            self.len += 1;
        } else {
            self.samples[self.start] = distance;
            self.start = (self.start + 1) % CAPACITY;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn oldest(&self) -> Option<f64> {
        (self.len > 0).then(|| self.samples[self.start])
    }

    pub fn newest(&self) -> Option<f64> {
        (self.len > 0).then(|| self.samples[(self.start + self.len - 1) % CAPACITY])
    }

    /// Samples in arrival order.
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(move |i| self.samples[(self.start + i) % CAPACITY])
    }
}
