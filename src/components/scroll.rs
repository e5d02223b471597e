use crate::config::NAV_SCROLL_THRESHOLD_PX;

/// True once the page has scrolled past the nav shadow threshold.
///
/// Kept a pure function of the current offset so the flag can never drift
/// from the real scroll position.
pub fn past_top(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!past_top(10.0));
        assert!(past_top(11.0));
    }

    #[test]
    fn top_of_page_is_unscrolled() {
        assert!(!past_top(0.0));
        // rubber-band overscroll reports negative offsets on some platforms
        assert!(!past_top(-3.0));
    }

    #[test]
    fn flag_follows_offset_down_and_back_up() {
        let flags: Vec<bool> = [0.0, 50.0, 0.0].iter().map(|s| past_top(*s)).collect();
        assert_eq!(flags, vec![false, true, false]);
    }
}
