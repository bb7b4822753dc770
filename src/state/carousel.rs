use tracing::debug;

/// Which slide is showing. Callers pass valid indices; the timer path always
/// does via `next`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    len: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideChange {
    pub previous: usize,
    pub current: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.current == index
    }

    pub fn go_to(&mut self, index: usize) -> SlideChange {
        let change = SlideChange {
            previous: self.current,
            current: index,
        };
        self.current = index;
        debug!(slide = change.current, previous = change.previous, "carousel moved");
        change
    }

    /// Advances with wraparound. An empty carousel has nowhere to go.
    pub fn next(&mut self) -> Option<SlideChange> {
        if self.is_empty() {
            return None;
        }
        Some(self.go_to((self.current + 1) % self.len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_slide() {
        let carousel = Carousel::new(3);
        assert_eq!(carousel.current(), 0);
        assert!(carousel.is_active(0));
    }

    #[test]
    fn next_wraps_to_zero() {
        let mut carousel = Carousel::new(3);
        carousel.go_to(2);
        let change = carousel.next().expect("non-empty carousel advances");
        assert_eq!(change, SlideChange { previous: 2, current: 0 });
    }

    #[test]
    fn advancing_from_any_slide_cycles_back_to_zero() {
        for len in 1..=6 {
            for start in 0..len {
                let mut carousel = Carousel::new(len);
                carousel.go_to(start);

                for _ in 0..(len - 1 - start) {
                    carousel.next();
                }
                assert_eq!(carousel.current(), len - 1);

                carousel.next();
                assert_eq!(carousel.current(), 0, "len {len}, start {start}");
            }
        }
    }

    #[test]
    fn manual_selection_replaces_current() {
        let mut carousel = Carousel::new(4);
        carousel.next();
        let change = carousel.go_to(3);
        assert_eq!(change.previous, 1);
        assert!(carousel.is_active(3));
        assert!(!carousel.is_active(1));
    }

    #[test]
    fn empty_carousel_does_not_advance() {
        let mut carousel = Carousel::new(0);
        assert_eq!(carousel.next(), None);
        assert_eq!(carousel.current(), 0);
    }
}
