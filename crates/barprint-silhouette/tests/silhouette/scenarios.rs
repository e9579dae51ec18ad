use barprint_core::{Point, Rect, Tolerance};
use barprint_silhouette::{
    rectangle_outline, Outline, OutlineError, OutlineParams, SilhouetteBuilder,
};

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn build(rects: &[Rect]) -> Outline {
    SilhouetteBuilder::default().build(rects).unwrap()
}

#[test]
fn test_single_rectangle_outline() {
    let outline = build(&[Rect::new(0.0, 0.0, 10.0, 5.0)]);
    assert_eq!(outline.len(), 4);
    assert_eq!(
        outline.points(),
        pts(&[(0.0, 5.0), (0.0, 0.0), (10.0, 0.0), (10.0, 5.0)]).as_slice()
    );
    assert_eq!(outline.area(), 50.0);
}

#[test]
fn test_inverted_corners_give_same_outline() {
    let normal = build(&[Rect::new(0.0, 0.0, 10.0, 5.0)]);
    let inverted = build(&[Rect::new(10.0, 5.0, 0.0, 0.0)]);
    assert_eq!(normal, inverted);
}

#[test]
fn test_stacked_rectangles_of_different_width() {
    let outline = build(&[Rect::new(0.0, 0.0, 10.0, 5.0), Rect::new(2.0, 5.0, 8.0, 10.0)]);
    assert_eq!(
        outline.points(),
        pts(&[
            (2.0, 10.0),
            (2.0, 5.0),
            (0.0, 5.0),
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 5.0),
            (8.0, 5.0),
            (8.0, 10.0),
        ])
        .as_slice()
    );
    assert!(outline.is_rectilinear(Tolerance::MERGE));
    assert!(outline.is_simple(Tolerance::MERGE));
    assert_eq!(outline.area(), 80.0);
}

#[test]
fn test_pyramid_of_three_rows() {
    let rects = [
        Rect::new(0.0, 0.0, 12.0, 4.0),
        Rect::new(2.0, 4.0, 10.0, 8.0),
        Rect::new(4.0, 8.0, 8.0, 12.0),
    ];
    let outline = build(&rects);
    assert_eq!(outline.len(), 12);
    assert!(outline.is_rectilinear(Tolerance::MERGE));
    assert!(outline.is_simple(Tolerance::MERGE));
    assert_eq!(outline.area(), 96.0);
    assert_eq!(outline.perimeter(), 48.0);
}

#[test]
fn test_inverted_pyramid() {
    let rects = [
        Rect::new(4.0, 0.0, 8.0, 4.0),
        Rect::new(2.0, 4.0, 10.0, 8.0),
        Rect::new(0.0, 8.0, 12.0, 12.0),
    ];
    let outline = build(&rects);
    assert_eq!(
        outline.points(),
        pts(&[
            (0.0, 12.0),
            (0.0, 8.0),
            (2.0, 8.0),
            (2.0, 4.0),
            (4.0, 4.0),
            (4.0, 0.0),
            (8.0, 0.0),
            (8.0, 4.0),
            (10.0, 4.0),
            (10.0, 8.0),
            (12.0, 8.0),
            (12.0, 12.0),
        ])
        .as_slice()
    );
    assert!(outline.is_simple(Tolerance::MERGE));
    assert_eq!(outline.area(), 96.0);
}

#[test]
fn test_taller_bar_in_one_row() {
    let outline = build(&[Rect::new(0.0, 0.0, 5.0, 5.0), Rect::new(5.0, 0.0, 10.0, 8.0)]);
    assert_eq!(
        outline.points(),
        pts(&[
            (5.0, 8.0),
            (5.0, 5.0),
            (0.0, 5.0),
            (0.0, 0.0),
            (5.0, 0.0),
            (10.0, 0.0),
            (10.0, 8.0),
        ])
        .as_slice()
    );
    assert!(outline.is_rectilinear(Tolerance::MERGE));
    assert!(outline.is_simple(Tolerance::MERGE));
    assert_eq!(outline.area(), 65.0);
}

#[test]
fn test_lower_bar_in_one_row() {
    let outline = build(&[Rect::new(0.0, 0.0, 5.0, 5.0), Rect::new(5.0, -2.0, 10.0, 5.0)]);
    assert_eq!(
        outline.points(),
        pts(&[
            (0.0, 5.0),
            (0.0, 0.0),
            (5.0, 0.0),
            (5.0, -2.0),
            (10.0, -2.0),
            (10.0, 5.0),
            (5.0, 5.0),
        ])
        .as_slice()
    );
    assert!(outline.is_simple(Tolerance::MERGE));
    assert_eq!(outline.area(), 60.0);
}

#[test]
fn test_bar_cluster_in_one_row() {
    // Three parallel bars with gaps: the footprint bridges the gaps.
    let rects = [
        Rect::new(0.0, 0.0, 2.0, 10.0),
        Rect::new(3.0, 0.0, 5.0, 10.0),
        Rect::new(6.0, 0.0, 8.0, 10.0),
    ];
    let outline = build(&rects);
    assert!(outline.is_rectilinear(Tolerance::MERGE));
    assert!(outline.is_simple(Tolerance::MERGE));
    assert_eq!(outline.area(), 80.0);
    assert_eq!(
        outline.without_collinear(Tolerance::MERGE).points(),
        pts(&[(0.0, 10.0), (0.0, 0.0), (8.0, 0.0), (8.0, 10.0)]).as_slice()
    );
}

#[test]
fn test_disjoint_rectangles_are_bridged() {
    // Disconnected input is outside the supported footprint shapes; the
    // outline still comes back closed, spanning both rectangles.
    let outline = build(&[Rect::new(0.0, 0.0, 5.0, 5.0), Rect::new(10.0, 0.0, 15.0, 5.0)]);
    assert!(outline.is_rectilinear(Tolerance::MERGE));
    assert_eq!(outline.area(), 75.0);
}

#[test]
fn test_tolerance_boundary_on_edges() {
    let rects = [Rect::new(5.0, 0.0, 10.0, 5.0), Rect::new(5.005, 5.0, 10.0, 10.0)];

    let coarse = SilhouetteBuilder::new(OutlineParams::new(Tolerance::MERGE))
        .build(&rects)
        .unwrap();
    assert_eq!(coarse.without_collinear(Tolerance::MERGE).len(), 4);

    let fine_tol = Tolerance::new(0.001).unwrap();
    let fine = SilhouetteBuilder::new(OutlineParams::new(fine_tol))
        .build(&rects)
        .unwrap();
    assert_eq!(fine.without_collinear(fine_tol).len(), 6);
}

#[test]
fn test_collinear_removal_through_params() {
    let rects = [
        Rect::new(0.0, 0.0, 2.0, 10.0),
        Rect::new(3.0, 0.0, 5.0, 10.0),
        Rect::new(6.0, 0.0, 8.0, 10.0),
    ];
    let outline = SilhouetteBuilder::new(OutlineParams::default().with_remove_collinear(true))
        .build(&rects)
        .unwrap();
    assert_eq!(outline.len(), 4);
}

#[test]
fn test_no_outline_cases() {
    assert!(rectangle_outline(&[], Tolerance::MERGE).is_none());
    assert!(rectangle_outline(&[Rect::new(0.0, 0.0, 0.0, 5.0)], Tolerance::MERGE).is_none());

    let builder = SilhouetteBuilder::default();
    assert_eq!(builder.build(&[]), Err(OutlineError::EmptyInput));
}

#[test]
fn test_outline_serializes_as_points() {
    let outline = build(&[Rect::new(0.0, 0.0, 1.0, 1.0)]);
    let json = serde_json::to_value(&outline).unwrap();
    assert_eq!(json["points"].as_array().unwrap().len(), 4);
    assert_eq!(json["points"][1]["x"], 0.0);
    assert_eq!(json["points"][1]["y"], 0.0);
}
