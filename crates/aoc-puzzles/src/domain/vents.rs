//! Hydrothermal vent lines (2021/05)
//!
//! Each vent line is rasterized onto a dense occupancy grid; the answer is
//! the number of cells covered by at least two lines.

use crate::constants::{DANGER_THRESHOLD, MAX_DIAGRAM_CELLS, SEGMENT_SEPARATOR};
use crate::domain::input_format::{InputFormatError, parse_number};
use crate::domain::raster::{Point, rasterize_line};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A vent line between two grid points
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    /// Create a new segment
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Horizontal or vertical
    pub fn is_axis_aligned(&self) -> bool {
        self.start.x == self.end.x || self.start.y == self.end.y
    }

    /// Grid cells covered by this segment
    pub fn cells(&self) -> Vec<Point> {
        rasterize_line(self.start, self.end)
    }
}

/// Which segments take part in a diagram
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SegmentFilter {
    /// Horizontal and vertical segments only
    #[default]
    AxisAligned,
    /// Every segment, diagonals included
    All,
}

impl SegmentFilter {
    /// Check whether a segment passes the filter
    pub fn accepts(&self, segment: &Segment) -> bool {
        match self {
            Self::AxisAligned => segment.is_axis_aligned(),
            Self::All => true,
        }
    }
}

/// Parse a point written as `x,y`
fn parse_point(text: &str, line: usize, raw: &str) -> Result<Point, InputFormatError> {
    let (x, y) = text
        .trim()
        .split_once(',')
        .ok_or_else(|| InputFormatError::InvalidSegment {
            line,
            text: raw.to_string(),
        })?;
    let x: u32 = parse_number(x, line)?;
    let y: u32 = parse_number(y, line)?;
    Ok(Point::new(i64::from(x), i64::from(y)))
}

/// Parse one `x1,y1 -> x2,y2` line
pub fn parse_segment(text: &str, line: usize) -> Result<Segment, InputFormatError> {
    let (start, end) = text.split_once(SEGMENT_SEPARATOR).ok_or_else(|| {
        InputFormatError::InvalidSegment {
            line,
            text: text.to_string(),
        }
    })?;

    Ok(Segment::new(
        parse_point(start, line, text)?,
        parse_point(end, line, text)?,
    ))
}

/// Parse every non-blank line of the input
pub fn parse_segments(input: &str) -> Result<Vec<Segment>, InputFormatError> {
    let segments = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_segment(line, index + 1))
        .collect::<Result<Vec<_>, _>>()?;

    if segments.is_empty() {
        return Err(InputFormatError::Empty);
    }

    Ok(segments)
}

/// Cells needed along one axis to hold `coordinate` (0 for negatives)
fn extent(coordinate: i64) -> u64 {
    u64::try_from(coordinate).map_or(0, |c| c.saturating_add(1))
}

/// Dense grid of line counts
///
/// Row-major, `width * height` cells. Coordinates are non-negative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagram {
    width: usize,
    height: usize,
    counts: Vec<u32>,
}

impl Diagram {
    /// Create an empty diagram
    ///
    /// Fails when `width * height` exceeds `MAX_DIAGRAM_CELLS`.
    pub fn new(width: u64, height: u64) -> Result<Self, InputFormatError> {
        let too_large = InputFormatError::DiagramTooLarge {
            width,
            height,
            limit: MAX_DIAGRAM_CELLS,
        };
        let cells = width
            .checked_mul(height)
            .filter(|&cells| cells <= MAX_DIAGRAM_CELLS)
            .ok_or_else(|| too_large.clone())?;
        let (Ok(cells), Ok(width), Ok(height)) = (
            usize::try_from(cells),
            usize::try_from(width),
            usize::try_from(height),
        ) else {
            return Err(too_large);
        };

        Ok(Self {
            width,
            height,
            counts: vec![0; cells],
        })
    }

    /// Smallest diagram holding every segment endpoint
    pub fn sized_for(segments: &[Segment]) -> Result<Self, InputFormatError> {
        let (width, height) = segments
            .iter()
            .flat_map(|s| [s.start, s.end])
            .fold((0u64, 0u64), |(w, h), p| {
                (w.max(extent(p.x)), h.max(extent(p.y)))
            });
        Self::new(width, height)
    }

    /// Build a diagram from the segments accepted by `filter`
    pub fn from_segments(
        segments: &[Segment],
        filter: SegmentFilter,
    ) -> Result<Self, InputFormatError> {
        let mut diagram = Self::sized_for(segments)?;

        #[cfg(feature = "parallel")]
        let rasterized: Vec<Vec<Point>> = segments
            .par_iter()
            .filter(|s| filter.accepts(s))
            .map(Segment::cells)
            .collect();

        #[cfg(not(feature = "parallel"))]
        let rasterized: Vec<Vec<Point>> = segments
            .iter()
            .filter(|s| filter.accepts(s))
            .map(Segment::cells)
            .collect();

        log::debug!(
            "plotting {} of {} segments on a {}x{} diagram",
            rasterized.len(),
            segments.len(),
            diagram.width,
            diagram.height
        );

        for cells in &rasterized {
            diagram.plot(cells);
        }

        Ok(diagram)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, point: Point) -> Option<usize> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    /// Line count at a cell (0 outside the grid)
    pub fn get(&self, point: Point) -> u32 {
        self.index(point).map_or(0, |i| self.counts[i])
    }

    /// Add one to every cell
    ///
    /// Cells outside the grid are ignored.
    pub fn plot(&mut self, cells: &[Point]) {
        for &cell in cells {
            if let Some(i) = self.index(cell) {
                self.counts[i] += 1;
            }
        }
    }

    /// Number of cells with at least `threshold` lines
    pub fn count_at_least(&self, threshold: u32) -> usize {
        self.counts.iter().filter(|&&c| c >= threshold).count()
    }

    /// Number of cells where lines overlap
    pub fn count_overlaps(&self) -> usize {
        self.count_at_least(DANGER_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
0,9 -> 5,9
8,0 -> 0,8
9,4 -> 3,4
2,2 -> 2,1
7,0 -> 7,4
6,4 -> 2,0
0,9 -> 2,9
3,4 -> 1,4
0,0 -> 8,8
5,5 -> 8,2
";

    #[test]
    fn test_parse_segment() {
        let segment = parse_segment("0,9 -> 5,9", 1).unwrap();
        assert_eq!(segment, Segment::new(Point::new(0, 9), Point::new(5, 9)));
        assert!(segment.is_axis_aligned());
    }

    #[test]
    fn test_parse_segment_errors() {
        assert!(matches!(
            parse_segment("0,9 5,9", 4),
            Err(InputFormatError::InvalidSegment { line: 4, .. })
        ));
        assert!(matches!(
            parse_segment("0;9 -> 5,9", 2),
            Err(InputFormatError::InvalidSegment { line: 2, .. })
        ));
        assert!(matches!(
            parse_segment("-1,9 -> 5,9", 1),
            Err(InputFormatError::InvalidNumber { line: 1, .. })
        ));
    }

    #[test]
    fn test_example_axis_aligned() {
        let segments = parse_segments(EXAMPLE).unwrap();
        let diagram = Diagram::from_segments(&segments, SegmentFilter::AxisAligned).unwrap();
        assert_eq!(diagram.width(), 10);
        assert_eq!(diagram.height(), 10);
        assert_eq!(diagram.count_overlaps(), 5);
    }

    #[test]
    fn test_example_all() {
        let segments = parse_segments(EXAMPLE).unwrap();
        let diagram = Diagram::from_segments(&segments, SegmentFilter::All).unwrap();
        assert_eq!(diagram.count_overlaps(), 12);
        assert_eq!(diagram.get(Point::new(4, 4)), 3);
    }

    #[test]
    fn test_plot_ignores_out_of_range() {
        let mut diagram = Diagram::new(2, 2).unwrap();
        diagram.plot(&[Point::new(0, 0), Point::new(5, 5), Point::new(-1, 0)]);
        assert_eq!(diagram.get(Point::new(0, 0)), 1);
        assert_eq!(diagram.count_at_least(1), 1);
    }

    #[test]
    fn test_sized_for_empty() {
        let diagram = Diagram::sized_for(&[]).unwrap();
        assert_eq!(diagram.width(), 0);
        assert_eq!(diagram.count_overlaps(), 0);
    }

    #[test]
    fn test_huge_coordinates_are_rejected() {
        let segments = parse_segments("0,0 -> 4000000000,4000000000\n").unwrap();
        let result = Diagram::from_segments(&segments, SegmentFilter::All);
        assert_eq!(
            result,
            Err(InputFormatError::DiagramTooLarge {
                width: 4_000_000_001,
                height: 4_000_000_001,
                limit: MAX_DIAGRAM_CELLS,
            })
        );
    }

    #[test]
    fn test_diagram_size_limit() {
        assert!(Diagram::new(1 << 12, 1 << 12).is_ok());
        assert!(matches!(
            Diagram::new((1 << 12) + 1, 1 << 12),
            Err(InputFormatError::DiagramTooLarge { .. })
        ));
        assert!(matches!(
            Diagram::new(u64::MAX, 2),
            Err(InputFormatError::DiagramTooLarge { .. })
        ));
    }

    #[test]
    fn test_long_thin_diagram() {
        let segments = parse_segments("0,0 -> 100000,0\n5,0 -> 5,0\n").unwrap();
        let diagram = Diagram::from_segments(&segments, SegmentFilter::AxisAligned).unwrap();
        assert_eq!(diagram.width(), 100_001);
        assert_eq!(diagram.height(), 1);
        assert_eq!(diagram.count_overlaps(), 1);
    }
}
