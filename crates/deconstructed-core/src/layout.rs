//! Responsive layout classification.

/// Viewport widths below this are laid out as a single column
pub const COMPACT_BREAKPOINT: f64 = 1024.0;

/// The two page arrangements
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LayoutMode {
    /// Stacked single column
    Compact,
    /// Sticky sidebar beside the content column
    Wide,
}

impl LayoutMode {
    /// Classify a viewport width in logical pixels.
    ///
    /// NaN has no sensible ordering and is treated as wide.
    pub fn from_width(width: f64) -> Self {
        if width < COMPACT_BREAKPOINT {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }

    pub fn is_compact(&self) -> bool {
        matches!(self, LayoutMode::Compact)
    }
}

/// Remembers the current mode and reports breakpoint crossings
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LayoutTracker {
    mode: LayoutMode,
}

impl LayoutTracker {
    pub fn new(initial_width: f64) -> Self {
        Self {
            mode: LayoutMode::from_width(initial_width),
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Feed a new width; returns the new mode only if it changed
    pub fn observe(&mut self, width: f64) -> Option<LayoutMode> {
        let next = LayoutMode::from_width(width);
        if next == self.mode {
            return None;
        }
        tracing::debug!(width, from = ?self.mode, to = ?next, "layout mode changed");
        self.mode = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_edges() {
        assert_eq!(LayoutMode::from_width(0.0), LayoutMode::Compact);
        assert_eq!(LayoutMode::from_width(1023.9), LayoutMode::Compact);
        assert_eq!(LayoutMode::from_width(1024.0), LayoutMode::Wide);
        assert_eq!(LayoutMode::from_width(1920.0), LayoutMode::Wide);
    }

    #[test]
    fn non_finite_widths() {
        assert_eq!(LayoutMode::from_width(f64::NAN), LayoutMode::Wide);
        assert_eq!(LayoutMode::from_width(f64::INFINITY), LayoutMode::Wide);
        assert_eq!(LayoutMode::from_width(f64::NEG_INFINITY), LayoutMode::Compact);
    }

    #[test]
    fn tracker_reports_only_crossings() {
        let mut tracker = LayoutTracker::new(1280.0);
        assert_eq!(tracker.mode(), LayoutMode::Wide);

        assert_eq!(tracker.observe(1100.0), None);
        assert_eq!(tracker.observe(800.0), Some(LayoutMode::Compact));
        assert_eq!(tracker.observe(600.0), None);
        assert_eq!(tracker.observe(1024.0), Some(LayoutMode::Wide));
        assert_eq!(tracker.mode(), LayoutMode::Wide);
    }

    #[test]
    fn no_hysteresis() {
        let mut tracker = LayoutTracker::new(1023.0);
        assert_eq!(tracker.observe(1024.0), Some(LayoutMode::Wide));
        assert_eq!(tracker.observe(1023.0), Some(LayoutMode::Compact));
    }
}
