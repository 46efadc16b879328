use serde::{Deserialize, Serialize};

/// Set of distinct detector layers seen in a Hough cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayerSet {
    bits: [u64; 4],
}

impl LayerSet {
    #[inline]
    pub fn insert(&mut self, layer: u8) {
        let layer = layer as usize;
        self.bits[layer >> 6] |= 1u64 << (layer & 63);
    }

    #[inline]
    pub fn contains(&self, layer: u8) -> bool {
        let layer = layer as usize;
        self.bits[layer >> 6] & (1u64 << (layer & 63)) != 0
    }

    /// Number of distinct layers.
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|word| word.count_ones()).sum()
    }

    pub fn clear(&mut self) {
        self.bits = [0; 4];
    }
}

/// Minimum number of distinct layers a cell needs to count as active.
///
/// There is no default: the threshold depends on the detector the finder
/// runs on and must be stated explicitly by the deployment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerFilter {
    pub min_layers: u32,
}

impl LayerFilter {
    pub fn new(min_layers: u32) -> Self {
        Self { min_layers }
    }

    /// Returns the distinct-layer count when it passes the threshold, else 0.
    ///
    /// A cell is active iff the returned value is non-zero.
    #[inline]
    pub fn apply(&self, layers: &LayerSet) -> u32 {
        let count = layers.count();
        if count >= self.min_layers {
            count
        } else {
            0
        }
    }
}
