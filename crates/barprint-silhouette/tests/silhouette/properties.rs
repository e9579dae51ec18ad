use barprint_core::{Rect, Tolerance};
use barprint_silhouette::SilhouetteBuilder;
use proptest::prelude::*;

/// Rectangles on an integer grid so tolerance never decides a comparison.
fn grid_rects() -> impl Strategy<Value = Vec<Rect>> {
    prop::collection::vec((0i32..20, 0i32..20, 1i32..8, 1i32..8), 1..12).prop_map(|cells| {
        cells
            .into_iter()
            .map(|(x, y, w, h)| {
                Rect::new(x as f64, y as f64, (x + w) as f64, (y + h) as f64)
            })
            .collect()
    })
}

/// Connected grid footprints. Every rectangle after the first shares at
/// least one unit of its span with an earlier rectangle on one axis, and
/// overlaps or touches it on the other.
fn connected_rects() -> impl Strategy<Value = Vec<Rect>> {
    let seed = (0i32..20, 0i32..20, 1i32..8, 1i32..8);
    let step = (
        any::<prop::sample::Index>(),
        any::<bool>(),
        1i32..8,
        1i32..8,
        any::<prop::sample::Index>(),
        any::<prop::sample::Index>(),
    );
    (seed, prop::collection::vec(step, 0..11)).prop_map(|((x, y, w, h), steps)| {
        let mut cells = vec![(x, y, x + w, y + h)];
        for (parent, transpose, w, h, along, across) in steps {
            let (px0, py0, px1, py1) = cells[parent.index(cells.len())];
            // `u` is the shared axis, `v` the one the new cell attaches on.
            let (u0, u1, v0, v1, du, dv) = if transpose {
                (py0, py1, px0, px1, h, w)
            } else {
                (px0, px1, py0, py1, w, h)
            };
            let u_lo = u0 - du + 1;
            let us = u_lo + along.index((u1 - u_lo) as usize) as i32;
            let v_lo = v0 - dv;
            let vs = v_lo + across.index((v1 - v_lo + 1) as usize) as i32;
            cells.push(if transpose {
                (vs, us, vs + dv, us + du)
            } else {
                (us, vs, us + du, vs + dv)
            });
        }
        cells
            .into_iter()
            .map(|(x0, y0, x1, y1)| Rect::new(x0 as f64, y0 as f64, x1 as f64, y1 as f64))
            .collect()
    })
}

proptest! {
    #[test]
    fn outline_is_idempotent(rects in grid_rects()) {
        let builder = SilhouetteBuilder::default();
        let first = builder.build(&rects).unwrap();
        let second = builder.build(&rects).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn outline_ignores_input_order(rects in grid_rects(), shift in 0usize..12) {
        let builder = SilhouetteBuilder::default();
        let original = builder.build(&rects).unwrap();

        let mut permuted = rects.clone();
        permuted.reverse();
        let len = permuted.len();
        permuted.rotate_left(shift % len);
        let reordered = builder.build(&permuted).unwrap();

        prop_assert!(original.same_shape(&reordered, Tolerance::MERGE));
        prop_assert_eq!(original.area(), reordered.area());
    }

    #[test]
    fn outline_is_closed_and_rectilinear(rects in grid_rects()) {
        let outline = SilhouetteBuilder::default().build(&rects).unwrap();
        prop_assert!(outline.len() >= 4);
        prop_assert!(outline.is_rectilinear(Tolerance::MERGE));
    }

    #[test]
    fn connected_outline_is_simple(rects in connected_rects()) {
        let outline = SilhouetteBuilder::default().build(&rects).unwrap();
        prop_assert!(outline.len() >= 4);
        prop_assert!(outline.is_rectilinear(Tolerance::MERGE));
        prop_assert!(outline.is_simple(Tolerance::MERGE), "{:?}", outline.points());

        let largest = rects.iter().map(|r| r.width() * r.height()).fold(0.0, f64::max);
        prop_assert!(outline.area() >= largest);
    }
}
