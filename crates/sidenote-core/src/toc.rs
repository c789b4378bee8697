//! Active-heading selection for the table-of-contents highlighter.

/// Document position of one heading carrying an `id` attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    /// The heading's `id`, shared with the TOC link fragment.
    pub id: String,

    /// Distance from the document top, in pixels.
    pub offset_top: f64,
}

impl Heading {
    /// Create a new heading position.
    pub fn new(id: impl Into<String>, offset_top: f64) -> Self {
        Self {
            id: id.into(),
            offset_top,
        }
    }
}

/// Select the heading the viewport currently sits in.
///
/// `headings` must be in document order. Picks the last heading at or above
/// `scroll_position`; when the page is scrolled above every heading, falls
/// back to the first one. Returns `None` only for an empty slice.
pub fn select_active_heading(headings: &[Heading], scroll_position: f64) -> Option<&Heading> {
    headings
        .iter()
        .rev()
        .find(|h| h.offset_top <= scroll_position)
        .or_else(|| headings.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_headings() -> Vec<Heading> {
        vec![
            Heading::new("intro", 0.0),
            Heading::new("middle", 500.0),
            Heading::new("end", 1200.0),
        ]
    }

    #[test]
    fn test_selects_last_heading_above_position() {
        // scrollY = 560, navbar 60, margin 80 -> position 700
        let headings = sample_headings();
        let active = select_active_heading(&headings, 700.0).unwrap();
        assert_eq!(active.id, "middle");
    }

    #[test]
    fn test_selects_first_heading_at_top() {
        let headings = sample_headings();
        let active = select_active_heading(&headings, 140.0).unwrap();
        assert_eq!(active.id, "intro");
    }

    #[test]
    fn test_exact_boundary_is_inclusive() {
        let headings = sample_headings();
        let active = select_active_heading(&headings, 500.0).unwrap();
        assert_eq!(active.id, "middle");
    }

    #[test]
    fn test_falls_back_to_first_when_above_all() {
        let headings = vec![Heading::new("late", 900.0), Heading::new("later", 1400.0)];
        let active = select_active_heading(&headings, 100.0).unwrap();
        assert_eq!(active.id, "late");
    }

    #[test]
    fn test_past_last_heading_selects_last() {
        let headings = sample_headings();
        let active = select_active_heading(&headings, 5000.0).unwrap();
        assert_eq!(active.id, "end");
    }

    #[test]
    fn test_empty_slice_selects_nothing() {
        assert!(select_active_heading(&[], 700.0).is_none());
    }
}
