//! Small presentation helpers shared by the page widgets.

use num_format::{Locale, ToFormattedString};
use once_cell::sync::Lazy;
use regex::Regex;

static SCRIPT_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("valid script regex"));

/// `1234567` -> `1,234,567`.
pub fn format_number(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}

/// Removes `<script>` elements from text echoed back into the page.
pub fn sanitize_input(input: &str) -> String {
    SCRIPT_TAG_RE.replace_all(input, "").into_owned()
}

/// Client-side reference `PHM-<millis>-<9 chars>`.
pub fn registration_reference(now_millis: u64) -> String {
    let suffix: String = uuid::Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(9)
        .collect();
    format!("PHM-{now_millis}-{suffix}")
}

/// Width of the scroll progress bar, in percent.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Scroll position that brings an anchor target just below the fixed navbar.
pub fn nav_scroll_target(offset_top: f64, nav_height: f64) -> f64 {
    (offset_top - nav_height - 8.0).max(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: u64,
    pub done: bool,
}

impl CounterFrame {
    pub fn label(&self) -> String {
        format_number(self.value)
    }
}

/// Linear count-up from zero, one increment per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: u32, tick_ms: u32) -> Self {
        let ticks = (f64::from(duration_ms) / f64::from(tick_ms.max(1))).max(1.0);
        Self {
            target,
            increment: target as f64 / ticks,
            current: 0.0,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn tick(&mut self) -> CounterFrame {
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.current = self.target as f64;
            CounterFrame {
                value: self.target,
                done: true,
            }
        } else {
            CounterFrame {
                value: self.current.floor() as u64,
                done: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_get_separators() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(50000), "50,000");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn script_tags_are_stripped() {
        assert_eq!(
            sanitize_input("Acme <SCRIPT type=\"x\">alert(1)</script>Pharma"),
            "Acme Pharma"
        );
        assert_eq!(sanitize_input("a < b"), "a < b");
    }

    #[test]
    fn reference_shape() {
        let reference = registration_reference(1_700_000_000_000);
        let parts: Vec<_> = reference.splitn(3, '-').collect();
        assert_eq!(parts[0], "PHM");
        assert_eq!(parts[1], "1700000000000");
        assert_eq!(parts[2].len(), 9);
    }

    #[test]
    fn progress_handles_unscrollable_pages() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(100.0, 1200.0, 800.0), 25.0);
        assert_eq!(scroll_progress(500.0, 1200.0, 800.0), 100.0);
    }

    #[test]
    fn anchor_offset_clears_navbar() {
        assert_eq!(nav_scroll_target(500.0, 80.0), 412.0);
        assert_eq!(nav_scroll_target(10.0, 80.0), 0.0);
    }

    #[test]
    fn counter_reaches_target_exactly() {
        let mut anim = CounterAnimation::new(1000, 2000, 16);
        let mut frames = 0;
        let last = loop {
            let frame = anim.tick();
            frames += 1;
            if frame.done {
                break frame;
            }
            assert!(frame.value < 1000);
        };
        assert_eq!(last.value, 1000);
        assert_eq!(last.label(), "1,000");
        assert!((124..=126).contains(&frames));
    }
}
