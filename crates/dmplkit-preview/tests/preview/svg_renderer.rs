use dmplkit_core::{MeasuringUnit, Tool};
use dmplkit_preview::{PlotBuilder, PlotError, SvgBuilder};

#[test]
fn test_render_empty_builder() {
    let builder = SvgBuilder::new();
    let svg = builder.compile();

    assert!(svg.starts_with(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"0mm\" height=\"0mm\" viewBox=\"0 0 0 0\">\n"
    ));
    assert!(svg.ends_with("    </defs>\n    \n</svg>"));
    assert!(!svg.contains("<line"));
}

#[test]
fn test_style_block_defines_every_tool() {
    let svg = SvgBuilder::new().compile();
    for tool in [Tool::Regular, Tool::Kiss, Tool::Through, Tool::Flex] {
        assert!(svg.contains(&format!(".{} {{", tool.css_class())));
    }
    assert!(svg.contains("path {\n                fill: none;"));
}

#[test]
fn test_plot_draws_line_and_moves_cursor() {
    let mut builder = SvgBuilder::new();
    builder.plot(100, 50).plot(-30, 20);

    assert_eq!(builder.cursor(), (70, 70));
    assert_eq!(builder.extent(), (100.0, 70.0));
    assert_eq!(
        builder.elements(),
        &[
            "<line x1=\"0\" y1=\"0\" x2=\"100\" y2=\"50\" class=\"regular\" />",
            "<line x1=\"100\" y1=\"50\" x2=\"70\" y2=\"70\" class=\"regular\" />",
        ]
    );
}

#[test]
fn test_pen_up_moves_without_drawing() {
    let mut builder = SvgBuilder::new();
    builder.pen_up().plot(10, 10).pen_down().plot(5, 0);

    assert_eq!(builder.cursor(), (15, 10));
    assert_eq!(builder.elements().len(), 1);
    assert_eq!(
        builder.elements()[0],
        "<line x1=\"10\" y1=\"10\" x2=\"15\" y2=\"10\" class=\"regular\" />"
    );
}

#[test]
fn test_pen_up_still_grows_extent() {
    let mut builder = SvgBuilder::new();
    builder.pen_up().plot(300, 400).plot(-300, -400);

    assert!(!builder.is_pen_down());
    assert_eq!(builder.cursor(), (0, 0));
    assert_eq!(builder.extent(), (300.0, 400.0));
    assert!(builder.elements().is_empty());
}

#[test]
fn test_flipped_plot() {
    let mut builder = SvgBuilder::new();
    builder.plot(10, 0).flip_axes().plot(10, 0);

    assert_eq!(builder.cursor(), (10, 10));
    assert_eq!(
        builder.elements()[1],
        "<line x1=\"10\" y1=\"0\" x2=\"10\" y2=\"10\" class=\"regular\" />"
    );
}

#[test]
fn test_tool_classes() {
    let mut builder = SvgBuilder::new();
    builder.flex_cut().unwrap().plot(1, 0);
    builder.kiss_cut().unwrap().plot(1, 0);
    builder.through_cut().unwrap().plot(1, 0);
    builder.regular_cut().unwrap().plot(1, 0);

    let classes: Vec<&str> = builder
        .elements()
        .iter()
        .map(|e| e.split("class=\"").nth(1).unwrap().trim_end_matches("\" />"))
        .collect();
    assert_eq!(classes, vec!["flex", "kiss", "through", "regular"]);
}

#[test]
fn test_unmapped_pen_fails_closed() {
    let mut builder = SvgBuilder::new();
    builder.flex_cut().unwrap();

    let err = builder.change_pen(3).unwrap_err();
    assert_eq!(err, PlotError::UnmappedPen(3));
    assert!(err.is_unsupported());
    assert_eq!(builder.tool(), Tool::Flex);
}

#[test]
fn test_invalid_pen_is_rejected() {
    let mut builder = SvgBuilder::new();
    let err = builder.change_pen(1984).unwrap_err();
    assert_eq!(err.to_string(), "1984 is not a valid Pen");
    assert_eq!(builder.tool(), Tool::Regular);
}

#[test]
fn test_arc_path() {
    let mut builder = SvgBuilder::new();
    builder.arc(0, 100, 180);

    assert_eq!(
        builder.elements(),
        &["<path d=\"M 0 0 a 100 100 0 1 1 100 100\" class=\"regular\" />"]
    );
    assert_eq!(builder.extent(), (100.0, 200.0));
    assert_eq!(builder.cursor(), (0, 0));
}

#[test]
fn test_arc_starts_at_cursor() {
    let mut builder = SvgBuilder::new();
    builder.pen_up().plot(50, 60).pen_down().through_cut().unwrap();
    builder.arc(100, 0, 180);

    assert_eq!(
        builder.elements(),
        &["<path d=\"M 50 60 a 100 100 0 1 1 200 0\" class=\"through\" />"]
    );
    assert_eq!(builder.extent(), (250.0, 160.0));
}

#[test]
fn test_reflex_clockwise_arc_clears_sweep() {
    let mut builder = SvgBuilder::new();
    builder.arc(100, 0, -270);

    assert_eq!(
        builder.elements(),
        &["<path d=\"M 0 0 a 100 100 0 1 0 100 -100\" class=\"regular\" />"]
    );
}

#[test]
fn test_short_clockwise_arc_keeps_sweep() {
    let mut builder = SvgBuilder::new();
    builder.arc(100, 0, -90);

    // -90 + 180 is still positive
    assert!(builder.elements()[0].contains(" 0 1 1 "));
}

#[test]
fn test_arc_with_extreme_angles() {
    let mut builder = SvgBuilder::new();
    builder.arc(10, 0, i32::MAX).arc(10, 0, i32::MIN);

    let elements = builder.elements();
    assert_eq!(elements.len(), 2);
    assert!(elements[0].starts_with("<path d=\"M 0 0 a 10 10 0 1 1 "));
    assert!(elements[1].starts_with("<path d=\"M 0 0 a 10 10 0 1 0 "));
    assert_eq!(builder.cursor(), (0, 0));
    assert_eq!(builder.extent(), (20.0, 10.0));
}

#[test]
fn test_flipped_arc() {
    let mut builder = SvgBuilder::new();
    builder.flip_axes().arc(100, 0, 180);

    assert_eq!(
        builder.elements(),
        &["<path d=\"M 0 0 a 100 100 0 1 1 100 100\" class=\"regular\" />"]
    );
    assert_eq!(builder.extent(), (100.0, 200.0));
}

#[test]
fn test_arc_with_irrational_radius() {
    let mut builder = SvgBuilder::new();
    builder.arc(100, 100, 180);

    assert_eq!(
        builder.elements()[0],
        "<path d=\"M 0 0 a 141.421356 141.421356 0 1 1 241.421356 100\" class=\"regular\" />"
    );
    assert!(builder
        .compile()
        .contains("width=\"24.142136mm\" height=\"24.142136mm\" viewBox=\"0 0 241.421356 241.421356\""));
}

#[test]
fn test_canvas_size_follows_measuring_unit() {
    let mut builder = SvgBuilder::new();
    builder.plot(1000, 2000);
    assert!(builder
        .compile()
        .contains("width=\"100mm\" height=\"200mm\" viewBox=\"0 0 1000 2000\""));

    builder.set_measuring_unit(1u32).unwrap();
    assert!(builder
        .compile()
        .contains("width=\"1in\" height=\"2in\" viewBox=\"0 0 1000 2000\""));

    builder.set_measuring_unit('5').unwrap();
    assert_eq!(builder.measuring_unit(), MeasuringUnit::FiveThousandths);
    assert!(builder
        .compile()
        .contains("width=\"5in\" height=\"10in\" viewBox=\"0 0 1000 2000\""));
}

#[test]
fn test_unhandled_units_leave_state() {
    let mut builder = SvgBuilder::new();
    builder.set_measuring_unit(1u32).unwrap();

    for unit in [2u32, 3, 4] {
        let err = builder.set_measuring_unit(unit).unwrap_err();
        assert_eq!(err.to_string(), format!("Unhandled unit: {}", unit));
    }
    assert_eq!(
        builder.set_measuring_unit(9u32).unwrap_err(),
        PlotError::InvalidMeasuringUnit("9".to_string())
    );
    assert_eq!(builder.measuring_unit(), MeasuringUnit::Thousandth);
}

#[test]
fn test_unrendered_operations_are_fluent_no_ops() {
    let mut builder = SvgBuilder::new();
    builder
        .circle(600, 700, 800)
        .ellipse(400, 500, 600, 700, 800, 900)
        .pressure(80)
        .velocity(100)
        .cut_off()
        .push_command("V10;")
        .curve(10, 20, 30, 40, &[50, 60, 70])
        .unwrap();

    assert!(builder.elements().is_empty());
    assert_eq!(builder.cursor(), (0, 0));
    assert_eq!(builder.extent(), (0.0, 0.0));
}

#[test]
fn test_body_joins_elements_by_newline() {
    let mut builder = SvgBuilder::new();
    builder.plot(10, 0).plot(0, 10);
    let svg = builder.compile();

    assert!(svg.contains(
        "    <line x1=\"0\" y1=\"0\" x2=\"10\" y2=\"0\" class=\"regular\" />\n<line x1=\"10\" y1=\"0\" x2=\"10\" y2=\"10\" class=\"regular\" />\n</svg>"
    ));
    assert_eq!(svg, builder.compile());
}
