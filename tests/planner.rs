use glam::{Quat, UVec2, Vec3};
use pretty_assertions::assert_eq;
use tileforge::constants::{SAMPLE_MAP, SAMPLE_MAP_SIZE, TILE_LOCAL_SCALE};
use tileforge::error::LayoutError;
use tileforge::map::decoder::MapDecoder;
use tileforge::map::grid::TileGrid;
use tileforge::map::planner::{LayoutConfig, MapLayoutPlanner};

fn four_by_four() -> TileGrid {
    MapDecoder::decode(SAMPLE_MAP, SAMPLE_MAP_SIZE).unwrap()
}

#[test]
fn test_centered_layout_positions() {
    let config = LayoutConfig::new(true, 0, 1, 2).unwrap();
    let plan = MapLayoutPlanner::plan(&four_by_four(), &config);

    // First cell sits in the negative quadrant, half a tile off the edge.
    assert_eq!(plan.placements[0].position, Vec3::new(-1.5, 0.0, -1.5));
    // Last cell mirrors it across the origin.
    assert_eq!(plan.placements[15].position, Vec3::new(1.5, 0.0, 1.5));
}

#[test]
fn test_corner_anchored_layout_positions() {
    let config = LayoutConfig::new(false, 0, 1, 2).unwrap();
    let plan = MapLayoutPlanner::plan(&four_by_four(), &config);

    assert_eq!(plan.placements[0].position, Vec3::new(-3.0, 0.0, -3.0));
    assert_eq!(plan.placements[15].position, Vec3::new(0.0, 0.0, 0.0));
}

#[test]
fn test_plan_covers_every_cell_in_order() {
    let config = LayoutConfig::default();
    let grid = four_by_four();
    let plan = MapLayoutPlanner::plan(&grid, &config);

    assert_eq!(plan.len(), 16);

    // Placement order matches grid iteration order.
    for ((cell, _), placement) in grid.cells().zip(&plan.placements) {
        assert_eq!(
            placement.position,
            MapLayoutPlanner::tile_position(cell, grid.size(), true)
        );
    }
}

#[test]
fn test_out_of_palette_values_degrade_to_default() {
    let grid = MapDecoder::decode("0,1,2,5", UVec2::new(2, 2)).unwrap();
    let config = LayoutConfig::new(true, 0, 1, 3).unwrap();

    let plan = MapLayoutPlanner::plan(&grid, &config);
    let tiles: Vec<usize> = plan.placements.iter().map(|p| p.tile).collect();

    // 0..=2 are inside the three-tile palette; 5 is not.
    assert_eq!(tiles, vec![0, 1, 2, 0]);
}

#[test]
fn test_shared_rotation() {
    let config = LayoutConfig::new(true, 45, 1, 1).unwrap();
    let plan = MapLayoutPlanner::plan(&four_by_four(), &config);

    let expected = Quat::from_rotation_y(45f32.to_radians());
    assert!(plan.placements.iter().all(|p| p.rotation == expected));

    let level = LayoutConfig::new(true, 0, 1, 1).unwrap();
    let flat = MapLayoutPlanner::plan(&four_by_four(), &level);
    assert!(flat.placements.iter().all(|p| p.rotation == Quat::IDENTITY));
}

#[test]
fn test_rotation_turns_about_the_vertical_axis() {
    let config = LayoutConfig::new(true, 90, 1, 1).unwrap();
    let plan = MapLayoutPlanner::plan(&four_by_four(), &config);

    // A quarter turn about +Y carries +X onto -Z.
    let rotated = plan.placements[0].rotation * Vec3::X;
    assert!(rotated.abs_diff_eq(Vec3::NEG_Z, 1e-6));

    let opposite = LayoutConfig::new(true, -90, 1, 1).unwrap();
    let back = MapLayoutPlanner::plan(&four_by_four(), &opposite);
    assert!((back.placements[0].rotation * Vec3::X).abs_diff_eq(Vec3::Z, 1e-6));
}

#[test]
fn test_scale_lives_on_the_plan_not_the_tiles() {
    let config = LayoutConfig::new(true, 0, 4, 1).unwrap();
    let plan = MapLayoutPlanner::plan(&four_by_four(), &config);

    assert_eq!(plan.scale, 4.0);
    assert!(plan.placements.iter().all(|p| p.scale == TILE_LOCAL_SCALE));
}

#[test]
fn test_flatten_applies_aggregate_scale() {
    let config = LayoutConfig::new(true, 0, 2, 2).unwrap();
    let plan = MapLayoutPlanner::plan(&four_by_four(), &config);

    let flat: Vec<_> = plan.flatten().collect();
    assert_eq!(flat.len(), plan.len());
    assert_eq!(flat[0].position, Vec3::new(-3.0, 0.0, -3.0));
    assert_eq!(flat[0].scale, 2.0);
    assert_eq!(flat[0].tile, plan.placements[0].tile);
}

#[test]
fn test_planning_is_deterministic() {
    let config = LayoutConfig::new(false, -30, 7, 4).unwrap();
    let grid = four_by_four();

    let first = MapLayoutPlanner::plan(&grid, &config);
    let second = MapLayoutPlanner::plan(&grid, &config);

    assert_eq!(first, second);
}

#[test]
fn test_config_rejects_out_of_range_values() {
    assert!(matches!(
        LayoutConfig::new(true, -91, 1, 1),
        Err(LayoutError::RotationOutOfRange(-91))
    ));
    assert!(matches!(
        LayoutConfig::new(true, 0, 11, 1),
        Err(LayoutError::ScaleOutOfRange(11))
    ));
    assert!(matches!(LayoutConfig::new(true, 0, 1, 0), Err(LayoutError::EmptyPalette)));

    // The extremes themselves are valid.
    assert!(LayoutConfig::new(true, -90, 1, 1).is_ok());
    assert!(LayoutConfig::new(false, 90, 10, 1).is_ok());
}

#[test]
fn test_default_config_is_valid() {
    let config = LayoutConfig::default();
    assert!(config.validate().is_ok());
    assert!(config.centered);
}
