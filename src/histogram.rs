//! Bounded streaming histogram.
//!
//! Classic streaming-histogram scheme: every value enters as a singleton
//! bin; when the bin list grows past its capacity, the two adjacent bins
//! with the closest centroids merge into their count-weighted average.
//! Memory is O(capacity) no matter how many values stream through.

use std::io::{self, Write};

/// One histogram bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub centroid: f64,
    pub count: u64,
}

/// A fixed-capacity streaming histogram.
#[derive(Debug, Clone)]
pub struct Histogram {
    bins: Vec<Bin>,
    capacity: usize,
    total: u64,
}

/// Width of the widest bar in the rendered summary.
const BAR_WIDTH: usize = 50;

impl Histogram {
    /// `capacity` is the maximum number of bins kept; must be at least 1.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 1);
        Self {
            bins: Vec::with_capacity(capacity + 1),
            capacity,
            total: 0,
        }
    }

    /// Insert one value, merging the closest adjacent pair if the bin
    /// list overflows. The sum of all bin counts always equals the number
    /// of values inserted so far.
    pub fn insert(&mut self, value: f64) {
        let idx = self
            .bins
            .partition_point(|bin| bin.centroid < value);
        self.bins.insert(idx, Bin { centroid: value, count: 1 });
        self.total += 1;

        while self.bins.len() > self.capacity {
            self.merge_closest_pair();
        }
    }

    fn merge_closest_pair(&mut self) {
        let mut best = 0;
        let mut best_gap = f64::INFINITY;
        for i in 0..self.bins.len() - 1 {
            let gap = self.bins[i + 1].centroid - self.bins[i].centroid;
            if gap < best_gap {
                best_gap = gap;
                best = i;
            }
        }

        let (a, b) = (self.bins[best], self.bins[best + 1]);
        let count = a.count + b.count;
        let centroid =
            (a.centroid * a.count as f64 + b.centroid * b.count as f64) / count as f64;
        self.bins[best] = Bin { centroid, count };
        self.bins.remove(best + 1);
    }

    /// Bins in ascending centroid order.
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Number of values inserted so far.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Write the distribution summary: one line per bin with its
    /// centroid, count and a bar proportional to the largest bin, then a
    /// total line.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let max = self.bins.iter().map(|b| b.count).max().unwrap_or(0).max(1);
        for bin in &self.bins {
            // Largest bin gets the full bar; every non-empty bin gets at
            // least one mark.
            let width = ((bin.count as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
            let bar = "#".repeat(width.max(1));
            writeln!(out, "{:>12.3} {:>8} {}", bin.centroid, bin.count, bar)?;
        }
        writeln!(out, "total: {}", self.total)
    }
}
