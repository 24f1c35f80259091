//! Frequency statistics used to tell body text from everything else.

use std::collections::BTreeMap;

/// Occurrence counts of some run attribute (height, font size, offset).
#[derive(Debug, Clone)]
pub struct Histogram<T: Ord + Copy> {
    counts: BTreeMap<T, usize>,
}

impl<T: Ord + Copy> Histogram<T> {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Add an observation.
    pub fn add(&mut self, value: T) {
        *self.counts.entry(value).or_insert(0) += 1;
    }

    /// The most common value; ties go to the smallest value.
    pub fn mode(&self) -> Option<T> {
        let mut best: Option<(T, usize)> = None;
        for (&value, &count) in &self.counts {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((value, count));
            }
        }
        best.map(|(value, _)| value)
    }
}

impl<T: Ord + Copy> Default for Histogram<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Copy> FromIterator<T> for Histogram<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut histogram = Self::new();
        for value in iter {
            histogram.add(value);
        }
        histogram
    }
}
