//! Column, row-height, offset, and container-height computation
//!
//! All sizes are whole pixels, as reported by `offsetWidth`/`offsetHeight`.
//! Cards are numbered in DOM order; the card at position `i` sits in row
//! `i / columns` and column `i % columns`.

/// Number of columns the container can hold.
///
/// Derived from the container width and the measured width of the first
/// card, rounded to the nearest whole number. With no cards the container
/// width itself is the divisor, which yields a single column. Always at
/// least 1, also for non-positive widths.
pub fn column_count(container_width: i32, first_card_width: Option<i32>) -> usize {
    let divisor = first_card_width.unwrap_or(container_width);
    if divisor <= 0 {
        return 1;
    }
    let ratio = (container_width as f64 / divisor as f64).round() as i64;
    ratio.max(1) as usize
}

/// Maximum card height per row.
///
/// Row `r` owns the cards at positions `r * columns .. (r + 1) * columns`;
/// the last row may be partial. Empty input yields no rows.
pub fn row_heights(heights: &[i32], columns: usize) -> Vec<i32> {
    let columns = columns.max(1);
    heights
        .chunks(columns)
        .map(|row| row.iter().copied().max().unwrap_or(0))
        .collect()
}

/// Upward translation for the card at `index`, in pixels.
///
/// Accumulates the shortfall of every card above it in the same column:
/// each predecessor contributes its row height minus its own height, which
/// is exactly the gap it leaves open below itself.
pub fn card_offset(index: usize, heights: &[i32], row_heights: &[i32], columns: usize) -> i32 {
    let columns = columns.max(1);
    let mut offset = 0;
    let mut prev = index as i64 - columns as i64;
    while prev >= 0 {
        let i = prev as usize;
        offset += row_heights[i / columns] - heights[i];
        prev -= columns as i64;
    }
    offset
}

/// Offsets for every card, in card order.
pub fn offsets(heights: &[i32], row_heights: &[i32], columns: usize) -> Vec<i32> {
    (0..heights.len())
        .map(|index| card_offset(index, heights, row_heights, columns))
        .collect()
}

/// Height of the tallest column, i.e. the container height that fully
/// contains the packed layout.
pub fn container_height(heights: &[i32], columns: usize) -> i32 {
    let columns = columns.max(1);
    let mut totals = vec![0; columns];
    for (index, height) in heights.iter().enumerate() {
        totals[index % columns] += height;
    }
    totals.into_iter().max().unwrap_or(0)
}
