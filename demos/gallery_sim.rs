//! Headless walk through the gallery header: collapse to the paged row, swipe
//! to the next section, then collapse further. Run with `RUST_LOG=debug` to see
//! the release decisions.

use gallery_header::prelude::*;

const FRAME_MS: f64 = 1000.0 / 60.0;

fn main() -> Result<()> {
    env_logger::init();

    let config = GalleryConfig::with_viewport_height(844.0).sections(vec![
        SectionSpec::parse("EYEGLASSES", "#8266D4", "#3B5F8F", "sunnies.png")?,
        SectionSpec::parse("SEATING", "#F95B57", "#8266D4", "lawn_chair.png")?,
        SectionSpec::parse("DECORATION", "#F3A646", "#F95B57", "lipstick.png")?,
        SectionSpec::parse("PROTECTION", "white", "#F95B57", "helmet.png")?,
    ]);
    let mut gallery = Gallery::new(config, 390.0)?;
    let measure = FixedMeasure::new(Size::new(150.0, 24.0), Size::new(32.0, 4.0));
    let mut now = 0.0;

    print_frame("initial", &gallery, &measure);

    // Drag down to fold the stacked column into the paged row
    drag(&mut gallery, &mut now, (195.0, 600.0), (0.0, 12.0), 8);
    settle(&mut gallery, &mut now);
    print_frame("drag down to mid", &gallery, &measure);

    // Swipe left past half the width
    drag(&mut gallery, &mut now, (350.0, 120.0), (-28.0, 0.0), 8);
    settle(&mut gallery, &mut now);
    print_frame("swipe to next section", &gallery, &measure);

    drag(&mut gallery, &mut now, (195.0, 120.0), (0.0, 10.0), 6);
    settle(&mut gallery, &mut now);
    print_frame("collapse to min", &gallery, &measure);

    gallery.select_index(3, now);
    settle(&mut gallery, &mut now);
    print_frame("select last section", &gallery, &measure);

    Ok(())
}

/// Press at `from`, move by `step` for `steps` frames, then release.
fn drag(gallery: &mut Gallery, now: &mut f64, from: (f32, f32), step: (f32, f32), steps: usize) {
    let (mut x, mut y) = from;
    gallery.event(&PointerEvent::Down(PointerSample::new(x, y, *now)));
    for _ in 0..steps {
        *now += FRAME_MS;
        x += step.0;
        y += step.1;
        gallery.event(&PointerEvent::Move(
            PointerSample::new(x, y, *now).with_movement(step.0, step.1),
        ));
    }
    *now += FRAME_MS;
    gallery.event(&PointerEvent::Up(PointerSample::new(x, y, *now)));
}

fn settle(gallery: &mut Gallery, now: &mut f64) {
    let mut frames = 0;
    while gallery.is_animating() && frames < 600 {
        *now += FRAME_MS;
        gallery.advance(*now);
        frames += 1;
    }
    println!("settled after {} frames", frames);
}

fn print_frame(label: &str, gallery: &Gallery, measure: &FixedMeasure) {
    let frame = gallery.layout(measure);
    println!(
        "== {}: height {:.1}, index {:.2}, tColumnToRow {:.2}, tCollapsed {:.2}, translateX {:.1}",
        label,
        frame.header_height,
        gallery.state().selected_index,
        frame.t_column_to_row,
        frame.t_collapsed,
        frame.translate_x
    );
    for section in &frame.sections {
        let card = section.card_rect;
        println!(
            "  {:<10} card [{:7.1} {:7.1} {:7.1} {:7.1}] title ({:6.1}, {:6.1}) a={:.2} indicator a={:.2}  {}",
            section.title,
            card.left,
            card.top,
            card.right,
            card.bottom,
            section.title_placement.origin.dx,
            section.title_placement.origin.dy,
            section.title_placement.opacity,
            section.indicator_placement.opacity,
            section.background_asset
        );
    }
}
