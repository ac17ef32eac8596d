use yidian_types::{PageSnapshot, Rect};

use crate::hover::{Caret, HitTester};

/// Horizontal reach of caret snapping past a run's last glyph. Browser
/// caret hit-testing resolves points in the empty tail of a line to the
/// nearest text position; the snapped span is then filtered by the
/// word-rect containment check in `resolve_word_at`.
const CARET_SNAP_SLACK_PX: f64 = 32.0;

/// Hit-tester over the most recent page snapshot.
pub struct SnapshotHitTester<'a> {
    snapshot: &'a PageSnapshot,
}

impl<'a> SnapshotHitTester<'a> {
    pub fn new(snapshot: &'a PageSnapshot) -> Self {
        Self { snapshot }
    }

    /// Nearest character to `x` among the chars of `run` whose vertical
    /// band contains `y`.
    fn nearest_on_line(&self, run: usize, x: f64, y: f64) -> Option<usize> {
        let boxes = &self.snapshot.runs.get(run)?.char_boxes;
        boxes
            .iter()
            .enumerate()
            .filter(|(_, b)| y >= b.top && y <= b.bottom)
            .min_by(|(_, a), (_, b)| {
                let da = distance_x(a, x);
                let db = distance_x(b, x);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| i)
    }
}

fn distance_x(b: &Rect, x: f64) -> f64 {
    if x < b.left {
        b.left - x
    } else if x > b.right {
        x - b.right
    } else {
        0.0
    }
}

impl HitTester for SnapshotHitTester<'_> {
    fn caret_from_point(&self, x: f64, y: f64) -> Option<Caret> {
        // Direct glyph hit wins.
        for (run, r) in self.snapshot.runs.iter().enumerate() {
            for (offset, b) in r.char_boxes.iter().enumerate() {
                if b.contains(x, y) {
                    return Some(Caret { run, offset });
                }
            }
        }

        // Otherwise snap within a run's line band, like DOM caret
        // hit-testing does at line ends and between glyphs.
        for (run, r) in self.snapshot.runs.iter().enumerate() {
            let Some(bounds) = r.bounds() else { continue };
            let reachable = y >= bounds.top
                && y <= bounds.bottom
                && x >= bounds.left
                && x <= bounds.right + CARET_SNAP_SLACK_PX;
            if reachable && let Some(offset) = self.nearest_on_line(run, x, y) {
                return Some(Caret { run, offset });
            }
        }

        None
    }

    fn run_text(&self, run: usize) -> Option<&str> {
        self.snapshot.runs.get(run).map(|r| r.text.as_str())
    }

    fn range_rect(&self, run: usize, start: usize, end: usize) -> Option<Rect> {
        let boxes = self.snapshot.runs.get(run)?.char_boxes.get(start..end)?;
        let mut iter = boxes.iter();
        let first = *iter.next()?;
        Some(iter.fold(first, |acc, b| acc.union(b)))
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::page_with_lines;
    use super::*;

    #[test]
    fn direct_glyph_hit_returns_its_offset() {
        let page = page_with_lines(&["abc", "def"]);
        let tester = SnapshotHitTester::new(&page);

        assert_eq!(
            tester.caret_from_point(12.0, 8.0),
            Some(Caret { run: 0, offset: 1 })
        );
        assert_eq!(
            tester.caret_from_point(20.0, 24.0),
            Some(Caret { run: 1, offset: 2 })
        );
    }

    #[test]
    fn point_past_line_end_snaps_to_last_char() {
        let page = page_with_lines(&["abc"]);
        let tester = SnapshotHitTester::new(&page);

        // Within the snap slack after the final glyph.
        assert_eq!(
            tester.caret_from_point(30.0, 8.0),
            Some(Caret { run: 0, offset: 2 })
        );
        // Beyond the slack: no caret at all.
        assert_eq!(tester.caret_from_point(200.0, 8.0), None);
        // Off the line band entirely.
        assert_eq!(tester.caret_from_point(12.0, 100.0), None);
    }

    #[test]
    fn range_rect_unions_the_span() {
        let page = page_with_lines(&["abcdef"]);
        let tester = SnapshotHitTester::new(&page);

        assert_eq!(
            tester.range_rect(0, 1, 4),
            Some(Rect::new(8.0, 0.0, 24.0, 16.0))
        );
        assert_eq!(tester.range_rect(0, 2, 2), None);
        assert_eq!(tester.range_rect(0, 4, 99), None);
        assert_eq!(tester.range_rect(5, 0, 1), None);
    }
}
