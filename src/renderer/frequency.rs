use serde::ser::{Serialize, SerializeMap, Serializer};

/// Per-digit counters for one color bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [usize; 10],
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, digit: u8) {
        self.counts[digit as usize] += 1;
    }

    pub fn count(&self, digit: u8) -> usize {
        self.counts[digit as usize]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// `(digit, count)` pairs for 0 through 9.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.counts.iter().enumerate().map(|(d, &c)| (d as u8, c))
    }
}

// Serialized as {"0": n, ..., "9": n} so the JSON keys read as digits.
impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (digit, count) in self.iter() {
            map.serialize_entry(&digit.to_string(), &count)?;
        }
        map.end()
    }
}
