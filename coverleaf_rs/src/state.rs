//! Pure interaction state, kept out of the view layer so both renderers
//! share one set of transition rules and the rules stay testable on the
//! host.

/// Single-open accordion.
///
/// States: no item open, or exactly item `i` open. Clicking the open item
/// closes it; clicking any other item moves the open state there. Opening
/// is never accumulative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// Initial state: nothing open.
    pub fn closed() -> Accordion {
        Accordion::default()
    }

    pub fn toggle(&mut self, item: usize) {
        self.open = if self.open == Some(item) {
            None
        } else {
            Some(item)
        };
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self, item: usize) -> bool {
        self.open == Some(item)
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }
}

/// Carousel position over a fixed-length list.
///
/// Advancing wraps modulo the list length in both directions. A zero-length
/// carousel is inert: every operation is a no-op and the index stays 0, so
/// callers that guard rendering on emptiness can still hold one safely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Carousel {
        Carousel { index: 0, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Step forward one slide, wrapping past the end.
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Step backward one slide, wrapping past the start.
    pub fn retreat(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to a slide (dot navigation). Out-of-range selections are
    /// ignored rather than clamped; dots only exist for valid indices.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accordion_starts_closed() {
        let acc = Accordion::closed();
        assert_eq!(acc.open_item(), None);
        assert!(!acc.is_open(0));
    }

    #[test]
    fn toggling_open_item_closes_it() {
        let mut acc = Accordion::closed();
        acc.toggle(2);
        assert!(acc.is_open(2));
        acc.toggle(2);
        assert_eq!(acc.open_item(), None);
    }

    #[test]
    fn opening_another_item_moves_the_open_state() {
        let mut acc = Accordion::closed();
        acc.toggle(1);
        acc.toggle(3);
        assert!(!acc.is_open(1));
        assert!(acc.is_open(3));
        assert_eq!(acc.open_item(), Some(3));
    }

    #[test]
    fn close_resets_from_any_state() {
        let mut acc = Accordion::closed();
        acc.toggle(4);
        acc.close();
        assert_eq!(acc.open_item(), None);
    }

    #[test]
    fn carousel_wraps_forward() {
        let mut c = Carousel::new(3);
        c.advance();
        c.advance();
        c.advance();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn carousel_wraps_backward() {
        let mut c = Carousel::new(3);
        c.retreat();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut c = Carousel::new(0);
        c.advance();
        c.retreat();
        c.select(1);
        assert_eq!(c.index(), 0);
        assert!(c.is_empty());
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut c = Carousel::new(3);
        c.select(2);
        assert_eq!(c.index(), 2);
        c.select(7);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn manual_selection_composes_with_advance() {
        // Timer keeps its cadence after manual navigation: it simply
        // advances from whatever index is current.
        let mut c = Carousel::new(4);
        c.select(3);
        c.advance();
        assert_eq!(c.index(), 0);
    }
}
