//! Tests for the diamond sweep: shape, amounts, mirroring, clipping and accumulation

#[cfg(test)]
mod tests {
    use heatgrid::algorithm::falloff::FalloffProfile;
    use heatgrid::algorithm::propagation::{diamond_offsets, mirrored, quadrant_offsets, spread};
    use heatgrid::spatial::events::CellChanged;
    use heatgrid::{CellCoord, HeatmapError, HeatmapGrid, WorldPosition};
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    fn unit_grid(width: i32, height: i32) -> HeatmapGrid {
        HeatmapGrid::new(width, height, 1.0, WorldPosition::ZERO).expect("valid grid")
    }

    // Tests the worked example: peak at the origin, 50 one step away, 0 two steps away
    // Verified by skipping the falloff subtraction
    #[test]
    fn test_ten_by_ten_scenario() {
        let mut grid = unit_grid(10, 10);

        grid.add_value_radial(WorldPosition::new(5.0, 5.0), 100, 0, 2)
            .expect("valid falloff");

        assert_eq!(grid.get_value(5, 5), 100);
        for (x, y) in [(6, 5), (4, 5), (5, 6), (5, 4)] {
            assert_eq!(grid.get_value(x, y), 50, "distance 1 cell ({x}, {y})");
        }
        for (x, y) in [(7, 5), (3, 5), (5, 7), (5, 3), (6, 6), (4, 4), (6, 4), (4, 6)] {
            assert_eq!(grid.get_value(x, y), 0, "distance 2 cell ({x}, {y})");
        }
        assert_eq!(
            grid.iter_cells().filter(|(_, value)| *value > 0).count(),
            5
        );
    }

    // Tests the field is mirror-symmetric and non-increasing with Manhattan distance
    // Verified by skipping the (-dx, -dy) reflection
    #[test]
    fn test_symmetric_monotone_diamond() {
        let mut grid = unit_grid(21, 21);
        let center = CellCoord::new(10, 10);

        grid.add_value_radial(WorldPosition::new(10.5, 10.5), 100, 2, 5)
            .expect("valid falloff");

        for (cell, value) in grid.iter_cells() {
            let dx = cell.x - center.x;
            let dy = cell.y - center.y;
            assert_eq!(value, grid.get_value(center.x - dx, cell.y), "horizontal mirror");
            assert_eq!(value, grid.get_value(cell.x, center.y - dy), "vertical mirror");

            let distance = cell.manhattan_distance(center);
            let expected = match distance {
                0..=2 => 100,
                3 => 67,
                4 => 34,
                5 => 1,
                _ => 0,
            };
            assert_eq!(value, expected, "cell ({}, {})", cell.x, cell.y);
        }
    }

    // Tests each sweep writes every diamond cell exactly once
    // Verified by mirroring axis offsets unconditionally
    #[test]
    fn test_each_cell_written_once() {
        let mut grid = unit_grid(15, 15);
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        grid.subscribe(move |event: CellChanged| sink.borrow_mut().push(event));

        grid.add_value_radial(WorldPosition::new(7.0, 7.0), 10, 1, 4)
            .expect("valid falloff");

        let events = events.borrow();
        let unique: HashSet<_> = events.iter().copied().collect();
        assert_eq!(events.len(), unique.len());
        assert_eq!(events.len(), 41);
    }

    // Tests offsets come out in sweep order with mirrors grouped per quadrant offset
    // Verified by iterating dy in the outer loop
    #[test]
    fn test_offset_order() {
        assert_eq!(
            quadrant_offsets(1).collect::<Vec<_>>(),
            vec![(0, 0), (0, 1), (1, 0)]
        );
        assert_eq!(mirrored(0, 0).collect::<Vec<_>>(), vec![(0, 0)]);
        assert_eq!(mirrored(0, 2).collect::<Vec<_>>(), vec![(0, 2), (0, -2)]);
        assert_eq!(mirrored(3, 0).collect::<Vec<_>>(), vec![(3, 0), (-3, 0)]);
        assert_eq!(
            mirrored(1, 2).collect::<Vec<_>>(),
            vec![(1, 2), (-1, 2), (1, -2), (-1, -2)]
        );
        assert_eq!(
            diamond_offsets(1),
            vec![(0, 0), (0, 1), (0, -1), (1, 0), (-1, 0)]
        );
    }

    // Tests the diamond holds 2r(r+1)+1 distinct cells within radius r
    // Verified by using an exclusive outer bound
    #[test]
    fn test_diamond_size() {
        for range in 0..8 {
            let offsets = diamond_offsets(range);
            let unique: HashSet<_> = offsets.iter().copied().collect();
            assert_eq!(offsets.len(), unique.len());
            assert_eq!(offsets.len() as i32, 2 * range * (range + 1) + 1);
            assert!(
                offsets
                    .iter()
                    .all(|(dx, dy)| dx.abs() + dy.abs() <= range)
            );
        }
        assert!(diamond_offsets(-1).is_empty());
    }

    // Tests cells beyond the edge are dropped while in-range cells are still painted
    // Verified by aborting the sweep at the first out-of-range cell
    #[test]
    fn test_sweep_clips_at_edges() {
        let mut grid = unit_grid(4, 4);

        grid.add_value_radial(WorldPosition::new(0.2, 0.2), 90, 1, 4)
            .expect("valid falloff");

        assert_eq!(grid.get_value(0, 0), 90);
        assert_eq!(grid.get_value(1, 0), 90);
        assert_eq!(grid.get_value(1, 1), 60);
        assert_eq!(grid.get_value(3, 0), 30);
        assert_eq!(grid.get_value(3, 3), 0);
    }

    // Tests a click outside the grid still paints the overlapping part of its diamond
    // Verified by returning early when the origin cell is out of range
    #[test]
    fn test_origin_outside_grid() {
        let mut grid = unit_grid(4, 4);

        grid.add_value_radial(WorldPosition::new(-1.5, 1.5), 80, 0, 4)
            .expect("valid falloff");

        assert_eq!(grid.get_value(0, 1), 40);
        assert_eq!(grid.get_value(1, 1), 20);
        assert_eq!(grid.get_value(0, 2), 20);
        assert_eq!(grid.get_value(2, 1), 0);
    }

    // Tests overlapping sweeps accumulate rather than take a maximum
    // Verified by keeping the larger of old and new values
    #[test]
    fn test_overlapping_sweeps_accumulate() {
        let mut grid = unit_grid(9, 9);
        let position = WorldPosition::new(4.0, 4.0);

        grid.add_value_radial(position, 30, 0, 2).expect("valid falloff");
        grid.add_value_radial(position, 30, 0, 2).expect("valid falloff");

        assert_eq!(grid.get_value(4, 4), 60);
        assert_eq!(grid.get_value(5, 4), 30);

        for _ in 0..3 {
            grid.add_value_radial(position, 30, 0, 2).expect("valid falloff");
        }
        assert_eq!(grid.get_value(4, 4), 100);
        assert_eq!(grid.get_value(4, 5), 75);
    }

    // Tests a negative outer amount lowers saturated cells, with halfway steps rounding to even
    // Verified by rounding the falloff step half away from zero
    #[test]
    fn test_negative_amount_reduces_saturated_cell() {
        let mut grid = unit_grid(9, 9);
        grid.set_value(6, 4, 100);
        grid.set_value(4, 6, 100);

        grid.add_value_radial(WorldPosition::new(4.0, 4.0), 5, 0, 2)
            .expect("valid falloff");
        assert_eq!(grid.get_value(4, 4), 5);
        assert_eq!(grid.get_value(5, 4), 3);
        assert_eq!(grid.get_value(6, 4), 100);

        grid.add_value_radial(WorldPosition::new(4.0, 4.0), 7, 0, 2)
            .expect("valid falloff");
        assert_eq!(grid.get_value(4, 6), 99);
        assert_eq!(grid.get_value(4, 4), 12);
    }

    // Tests degenerate ranges fail before touching any cell
    // Verified by validating after the sweep
    #[test]
    fn test_degenerate_range_writes_nothing() {
        let mut grid = unit_grid(5, 5);
        let events = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&events);
        grid.subscribe(move |_: CellChanged| *sink.borrow_mut() += 1);

        let result = grid.add_value_radial(WorldPosition::new(2.0, 2.0), 100, 2, 2);

        assert!(matches!(
            result,
            Err(HeatmapError::InvalidFalloffRange { .. })
        ));
        assert_eq!(*events.borrow(), 0);
        assert!(grid.iter_cells().all(|(_, value)| value == 0));
    }

    // Tests a negative outer radius is an empty sweep
    // Verified by treating negative ranges as their absolute value
    #[test]
    fn test_negative_total_range_is_empty() {
        let mut grid = unit_grid(5, 5);

        grid.add_value_radial(WorldPosition::new(2.0, 2.0), 100, 0, -1)
            .expect("valid falloff");

        assert!(grid.iter_cells().all(|(_, value)| value == 0));
    }

    // Tests spread on a cell coordinate matches the world-space entry point
    // Verified by offsetting the origin cell by one
    #[test]
    fn test_spread_matches_world_entry_point() {
        let profile = FalloffProfile::new(60, 1, 3).expect("valid profile");
        let mut by_cell = unit_grid(8, 8);
        let mut by_world = unit_grid(8, 8);

        spread(&mut by_cell, CellCoord::new(3, 4), &profile);
        by_world.add_falloff(WorldPosition::new(3.9, 4.1), &profile);

        let left: Vec<_> = by_cell.iter_cells().collect();
        let right: Vec<_> = by_world.iter_cells().collect();
        assert_eq!(left, right);
    }
}
