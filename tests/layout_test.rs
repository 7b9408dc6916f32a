// Test the masonry layout math on fixtures of known heights

use masonry_wasm::layout::{card_offset, column_count, container_height, offsets, row_heights};

#[test]
fn test_column_count_rounds_to_nearest() {
    assert_eq!(column_count(1000, Some(250)), 4);
    assert_eq!(column_count(1100, Some(250)), 4); // 4.4 rounds down
    assert_eq!(column_count(1150, Some(250)), 5); // 4.6 rounds up
    assert_eq!(column_count(100, Some(250)), 1); // 0.4 rounds to 0, clamped
}

#[test]
fn test_column_count_without_cards_is_one() {
    assert_eq!(column_count(960, None), 1);
}

#[test]
fn test_three_column_pack() {
    // 3 columns, 6 cards: rows are [100,150,120] and [90,200,80]
    let heights = [100, 150, 120, 90, 200, 80];
    let columns = 3;

    let rows = row_heights(&heights, columns);
    assert_eq!(rows, vec![150, 200]);

    // second-row cards close the gaps their column left open
    let result = offsets(&heights, &rows, columns);
    assert_eq!(result, vec![0, 0, 0, 50, 50, 30]);

    // column sums are 190, 350, 200; the tallest wins
    assert_eq!(container_height(&heights, columns), 350);
}

#[test]
fn test_row_height_dominates_every_card_in_its_row() {
    let heights = [40, 90, 10, 70, 55, 120, 30];
    let columns = 2;
    let rows = row_heights(&heights, columns);
    assert_eq!(rows.len(), 4); // ceil(7 / 2)
    for (index, height) in heights.iter().enumerate() {
        assert!(rows[index / columns] >= *height);
    }
}

#[test]
fn test_offsets_replay_the_per_column_shortfall() {
    // Walk each column top to bottom and carry the cumulative shortfall;
    // every card's offset must equal the gap accumulated above it.
    let heights = [80, 120, 60, 95, 40, 140, 75, 33];
    let columns = 3;
    let rows = row_heights(&heights, columns);
    let engine = offsets(&heights, &rows, columns);

    for col in 0..columns {
        let mut shortfall = 0;
        let mut index = col;
        while index < heights.len() {
            assert_eq!(engine[index], shortfall, "card {}", index);
            assert_eq!(card_offset(index, &heights, &rows, columns), shortfall);
            shortfall += rows[index / columns] - heights[index];
            index += columns;
        }
    }
}

#[test]
fn test_recompute_is_idempotent() {
    let heights = [100, 150, 120, 90, 200, 80];
    let columns = 3;
    let first = offsets(&heights, &row_heights(&heights, columns), columns);
    let second = offsets(&heights, &row_heights(&heights, columns), columns);
    assert_eq!(first, second);
    assert_eq!(
        container_height(&heights, columns),
        container_height(&heights, columns)
    );
}

#[test]
fn test_removal_reflows_the_remaining_cards() {
    // 4 cards in 2 columns; dropping the card at index 1 leaves 3 cards in
    // contiguous slots and the layout is recomputed over the shorter list
    let mut heights = vec![100, 150, 120, 90];
    heights.remove(1);
    assert_eq!(heights, vec![100, 120, 90]);

    let columns = 2;
    let rows = row_heights(&heights, columns);
    assert_eq!(rows.len(), 2); // ceil(3 / 2)
    assert_eq!(offsets(&heights, &rows, columns).len(), 3);
    // columns are now [100, 90] and [120]
    assert_eq!(container_height(&heights, columns), 190);
}

#[test]
fn test_empty_grid_collapses_to_zero() {
    let heights: [i32; 0] = [];
    assert_eq!(row_heights(&heights, 3), Vec::<i32>::new());
    assert_eq!(offsets(&heights, &[], 3), Vec::<i32>::new());
    assert_eq!(container_height(&heights, 3), 0);
}
