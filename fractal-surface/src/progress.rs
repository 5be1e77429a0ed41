//! Progress reporting schedule for the layer sweep.

/// Decides which z layers of a sweep are worth reporting.
///
/// Reports at most about twenty evenly spaced layers plus the final
/// one, so coarse grids log every layer and fine grids stay quiet
/// between milestones.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LayerProgress {
    total: usize,
    step: usize,
}

impl LayerProgress {
    /// Schedule for a sweep over `total` layers.
    pub(crate) fn new(total: usize) -> Self {
        Self {
            total,
            step: (total / 20).max(1),
        }
    }

    /// Whether the given zero-based layer should be reported.
    ///
    /// The final layer is always reported so a run never ends short of
    /// 100%.
    pub(crate) const fn should_report(&self, layer: usize) -> bool {
        layer % self.step == 0 || layer + 1 == self.total
    }

    /// Completed percentage after the given layer, rounded down.
    pub(crate) const fn percent(&self, layer: usize) -> usize {
        (layer + 1) * 100 / self.total
    }
}
