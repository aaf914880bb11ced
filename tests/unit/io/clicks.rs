//! Tests for click script parsing, random scatter and application

#[cfg(test)]
mod tests {
    use heatgrid::io::clicks::{Brush, Click, ClickScript, parse_position};
    use heatgrid::{HeatmapError, HeatmapGrid, WorldPosition};
    use std::path::Path;
    use tempfile::TempDir;

    const SHORT_BRUSH: Brush = Brush {
        value: 100,
        full_value_range: 0,
        total_range: 2,
    };

    // Tests positions parse with whitespace and negative coordinates
    // Verified by rejecting leading minus signs
    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("-4, 2.5"), Ok(WorldPosition::new(-4.0, 2.5)));
        assert!(parse_position("1,2,3").is_err());
        assert!(parse_position("a,1").is_err());
        assert!(parse_position("inf,0").is_err());
    }

    // Tests comments, blank lines and per-line brushes
    // Verified by treating '#' lines as clicks
    #[test]
    fn test_parse_script() {
        let text = "# warm-up\n\n1.5, 2   # default brush\n  10,20,60,1,8\n";

        let script =
            ClickScript::parse(text, Path::new("inline"), Brush::default()).expect("valid script");

        assert_eq!(script.len(), 2);
        assert_eq!(
            script.clicks().first(),
            Some(&Click {
                position: WorldPosition::new(1.5, 2.0),
                brush: Brush::default(),
            })
        );
        assert_eq!(
            script.clicks().get(1).map(|click| click.brush),
            Some(Brush {
                value: 60,
                full_value_range: 1,
                total_range: 8,
            })
        );
    }

    // Tests malformed lines report their one-based line number
    // Verified by counting only non-blank lines
    #[test]
    fn test_parse_error_line_number() {
        let text = "1,1\n\n2,2,3\n";

        let error = ClickScript::parse(text, Path::new("bad.clicks"), Brush::default())
            .expect_err("three fields are invalid");

        assert!(
            matches!(&error, HeatmapError::ClickScript { line: 3, .. }),
            "{error}"
        );
        let message = error.to_string();
        assert!(message.contains("bad.clicks"), "{message}");
        assert!(message.contains("got 3"), "{message}");

        let error = ClickScript::parse("1,1,x,0,2", Path::new("bad"), Brush::default())
            .expect_err("value must be an integer");
        assert!(error.to_string().contains("value 'x'"), "{error}");
    }

    // Tests scripts load from disk and a missing file is a file system error
    // Verified by returning an empty script for missing files
    #[test]
    fn test_from_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("session.clicks");
        std::fs::write(&path, "3,4\n5,6\n").expect("write script");

        let script = ClickScript::from_file(&path, SHORT_BRUSH).expect("readable script");
        assert_eq!(script.len(), 2);
        assert!(script.clicks().iter().all(|click| click.brush == SHORT_BRUSH));

        let missing = ClickScript::from_file(&temp.path().join("absent"), SHORT_BRUSH);
        assert!(matches!(missing, Err(HeatmapError::FileSystem { .. })));
    }

    // Tests random scatter is reproducible and stays inside the grid's world extent
    // Verified by ignoring the grid origin
    #[test]
    fn test_random_scatter() {
        let grid = HeatmapGrid::new(5, 4, 2.0, WorldPosition::new(10.0, -5.0)).expect("valid grid");

        let first = ClickScript::random(200, 7, &grid, SHORT_BRUSH).expect("finite extent");
        let second = ClickScript::random(200, 7, &grid, SHORT_BRUSH).expect("finite extent");
        let other = ClickScript::random(200, 8, &grid, SHORT_BRUSH).expect("finite extent");

        assert_eq!(first, second);
        assert_ne!(first, other);
        for click in first.clicks() {
            let cell = grid.world_to_cell(click.position);
            assert!(grid.contains(cell.x, cell.y), "{:?}", click.position);
        }
    }

    // Tests scatter over a grid whose world extent overflows is an error, not a panic
    // Verified by sampling from an infinite range
    #[test]
    fn test_random_scatter_rejects_infinite_extent() {
        let huge_cells =
            HeatmapGrid::new(100, 100, 1e307, WorldPosition::ZERO).expect("finite cell size");
        let result = ClickScript::random(1, 1, &huge_cells, Brush::default());
        assert!(matches!(
            result,
            Err(HeatmapError::InvalidParameter {
                parameter: "cell_size",
                ..
            })
        ));

        let far_origin = HeatmapGrid::new(10, 10, 1e300, WorldPosition::new(f64::MAX, 0.0))
            .expect("finite cell size");
        assert!(ClickScript::random(1, 1, &far_origin, Brush::default()).is_err());
    }

    // Tests clicks are applied in order and accumulate
    // Verified by applying only the last click
    #[test]
    fn test_apply_script() {
        let mut grid = HeatmapGrid::new(5, 5, 1.0, WorldPosition::ZERO).expect("valid grid");
        let mut script = ClickScript::new();
        assert!(script.is_empty());
        script.push(Click {
            position: WorldPosition::new(0.5, 0.5),
            brush: SHORT_BRUSH,
        });
        script.extend(
            ClickScript::parse("2.5,0.5,30,0,3", Path::new("inline"), SHORT_BRUSH)
                .expect("valid script"),
        );

        script.apply(&mut grid).expect("valid brushes");

        assert_eq!(grid.get_value(0, 0), 100);
        assert_eq!(grid.get_value(1, 0), 50 + 20);
        assert_eq!(grid.get_value(2, 0), 30);
        assert_eq!(grid.get_value(4, 0), 10);
        assert_eq!(grid.get_value(0, 1), 50);
    }

    // Tests a click with equal radii fails and leaves earlier clicks applied
    // Verified by validating the whole script up front
    #[test]
    fn test_apply_stops_at_invalid_brush() {
        let mut grid = HeatmapGrid::new(5, 5, 1.0, WorldPosition::ZERO).expect("valid grid");
        let script = ClickScript::parse("0.5,0.5\n1.5,1.5,10,2,2\n", Path::new("inline"), SHORT_BRUSH)
            .expect("parses");

        let result = script.apply(&mut grid);

        assert!(matches!(
            result,
            Err(HeatmapError::InvalidFalloffRange {
                full_value_range: 2,
                total_range: 2,
            })
        ));
        assert_eq!(grid.get_value(0, 0), 100);
    }
}
