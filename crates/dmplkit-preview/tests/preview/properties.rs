use dmplkit_preview::{PlotBuilder, SvgBuilder};
use proptest::prelude::*;

fn moves() -> impl Strategy<Value = Vec<(i32, i32, bool)>> {
    prop::collection::vec((-10_000i32..10_000, -10_000i32..10_000, any::<bool>()), 0..32)
}

proptest! {
    #[test]
    fn cursor_and_extent_track_plots(steps in moves(), flip_at in 0usize..32) {
        let mut builder = SvgBuilder::new();
        let (mut x, mut y) = (0i64, 0i64);
        let (mut max_x, mut max_y) = (0i64, 0i64);
        let mut flipped = false;
        let mut drawn = 0;

        for (i, &(dx, dy, pen_down)) in steps.iter().enumerate() {
            if i == flip_at {
                builder.flip_axes();
                flipped = true;
            }
            if pen_down {
                builder.pen_down();
                drawn += 1;
            } else {
                builder.pen_up();
            }
            builder.plot(dx, dy);

            let (dx, dy) = if flipped { (dy, dx) } else { (dx, dy) };
            x += i64::from(dx);
            y += i64::from(dy);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        prop_assert_eq!(builder.cursor(), (x, y));
        prop_assert_eq!(builder.extent(), (max_x as f64, max_y as f64));
        prop_assert_eq!(builder.elements().len(), drawn);
    }

    #[test]
    fn extent_never_shrinks(
        steps in moves(),
        arcs in prop::collection::vec((-500i32..500, -500i32..500, -360i32..=360), 0..8),
    ) {
        let mut builder = SvgBuilder::new();
        let mut last = builder.extent();

        for (&(dx, dy, _), &(ax, ay, degrees)) in steps.iter().zip(arcs.iter().cycle()) {
            builder.plot(dx, dy);
            builder.arc(ax, ay, degrees);
            let extent = builder.extent();
            prop_assert!(extent.0 >= last.0 && extent.1 >= last.1);
            last = extent;
        }
    }
}
