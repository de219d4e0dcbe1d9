/// Scroll geometry sampled once per animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_top,
            document_height,
            viewport_height,
        }
    }

    /// Scrollable range; never negative.
    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    /// Fraction of the page scrolled, in `[0, 1]`. Zero when the page cannot
    /// scroll; overscroll is clamped.
    pub fn progress(&self) -> f64 {
        let range = self.max_scroll();
        if !range.is_finite() || range <= 0.0 || !self.scroll_top.is_finite() {
            return 0.0;
        }
        (self.scroll_top / range).clamp(0.0, 1.0)
    }
}

/// `scroll_top / (document_height - viewport_height)` in `[0, 1]`.
pub fn progress_ratio(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    ScrollMetrics::new(scroll_top, document_height, viewport_height).progress()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscrollable_page_reports_zero() {
        assert_eq!(progress_ratio(0.0, 500.0, 500.0), 0.0);
        assert_eq!(progress_ratio(20.0, 400.0, 500.0), 0.0);
        assert_eq!(ScrollMetrics::new(0.0, 400.0, 500.0).max_scroll(), 0.0);
    }

    #[test]
    fn progress_is_measured_against_max_scroll() {
        let metrics = ScrollMetrics::new(250.0, 1080.0, 80.0);
        assert_eq!(metrics.max_scroll(), 1000.0);
        assert_eq!(metrics.progress(), 0.25);
        assert_eq!(ScrollMetrics::new(f64::NAN, 1080.0, 80.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::new(10.0, f64::NAN, 80.0).progress(), 0.0);
    }

    #[test]
    fn non_finite_inputs_report_zero() {
        assert_eq!(progress_ratio(f64::NAN, 1000.0, 100.0), 0.0);
        assert_eq!(progress_ratio(10.0, f64::INFINITY, 100.0), 0.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(progress_ratio(-12.0, 1050.0, 50.0), 0.0);
        assert_eq!(progress_ratio(1020.0, 1050.0, 50.0), 1.0);
    }
}
