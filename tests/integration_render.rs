//! Integration tests for TUI rendering
//!
//! Drives the public `App` API and renders through `render_to_string`, which
//! uses ratatui's `TestBackend` so no real terminal is needed.

use std::time::Instant;

use folio::app::{App, HEADER_HEIGHT};
use folio::config::{Action, Config};
use folio::page::{NoopReveal, ScrollRegion, SectionId};
use folio::tui::render_to_string;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn create_test_app(width: u16, height: u16) -> App {
    let config = Config {
        smooth_scroll: false,
        ..Config::default()
    };
    let mut app = App::new(config, Box::new(NoopReveal));
    let now = Instant::now();
    app.resize(width, height, now);
    app.mount(now);
    app
}

// =============================================================================
// Whole-page walkthrough
// =============================================================================

#[test]
fn test_scrolling_through_the_page() -> TestResult {
    let mut app = create_test_app(100, 40);
    let now = Instant::now();

    let top = render_to_string(&mut app, 100, 40)?;
    assert!(top.contains("Erika Seto, PharmD, RPh"));
    assert_eq!(app.region(), ScrollRegion::PreSnapshotEnd);
    assert!(!app.ui.past_experience);

    // The header rows above the snapshot have to scroll away first
    app.scroll_by(i32::from(HEADER_HEIGHT), now);
    assert_eq!(app.region(), ScrollRegion::PreAbout);

    app.handle_action(Action::GoAbout, now);
    let about = render_to_string(&mut app, 100, 40)?;
    assert!(about.contains("About Me"));
    let snapshot_end = app.anchors().bottom(SectionId::Snapshot);
    assert_eq!(app.viewport.scroll_y, snapshot_end.min(app.viewport.max_scroll()));

    app.handle_action(Action::GoExperience, now);
    let experience = render_to_string(&mut app, 100, 40)?;
    assert!(experience.contains("Work Experience"));
    assert!(app.region().factor() > 0.0);

    app.handle_action(Action::ScrollBottom, now);
    let bottom = render_to_string(&mut app, 100, 40)?;
    assert!(bottom.contains("All rights reserved."));
    assert_eq!(app.region(), ScrollRegion::PostContact);
    assert!(app.ui.past_experience);
    Ok(())
}

#[test]
fn test_background_blends_monotonically() {
    let mut app = create_test_app(100, 40);
    let now = Instant::now();
    let max_scroll = app.viewport.max_scroll();

    let mut last_factor = 0.0;
    for _ in 0..=max_scroll {
        let factor = app.region().factor();
        assert!(factor + f64::EPSILON >= last_factor, "factor went backwards");
        last_factor = factor;
        app.scroll_down(now);
    }
    assert!((last_factor - 1.0).abs() < f64::EPSILON);
}

// =============================================================================
// Layout switching
// =============================================================================

#[test]
fn test_resize_switches_navigation_chrome() -> TestResult {
    let mut app = create_test_app(100, 40);
    let desktop = render_to_string(&mut app, 100, 40)?;
    assert!(desktop.contains("About   Work Experience   Contact"));

    let mobile = render_to_string(&mut app, 50, 40)?;
    assert!(mobile.contains('\u{2261}'));
    assert!(!mobile.lines().nth(1).unwrap_or_default().contains("Contact"));

    app.toggle_menu();
    let open = render_to_string(&mut app, 50, 40)?;
    assert!(open.contains('\u{2715}'));

    // Growing back to desktop closes the menu
    let desktop = render_to_string(&mut app, 100, 40)?;
    assert!(!app.ui.menu.open);
    assert!(!desktop.contains('\u{2715}'));
    Ok(())
}

#[test]
fn test_mobile_menu_selection_scrolls() -> TestResult {
    let mut app = create_test_app(50, 30);
    let now = Instant::now();

    app.handle_action(Action::ToggleMenu, now);
    app.handle_action(Action::ScrollDown, now);
    app.handle_action(Action::ScrollDown, now);
    app.handle_action(Action::Select, now);

    assert!(!app.ui.menu.open);
    let frame = render_to_string(&mut app, 50, 30)?;
    assert!(frame.contains("Contact"));
    assert_eq!(app.region(), ScrollRegion::PostContact);
    Ok(())
}

// =============================================================================
// Output format
// =============================================================================

#[test]
fn test_render_to_string_has_one_line_per_row() -> TestResult {
    let mut app = create_test_app(80, 24);
    let frame = render_to_string(&mut app, 80, 24)?;
    assert_eq!(frame.lines().count(), 24);
    assert!(frame.lines().all(|line| !line.ends_with(' ')));
    Ok(())
}

#[test]
fn test_render_to_string_mounts_unmounted_app() -> TestResult {
    let mut app = App::new(Config::default(), Box::new(NoopReveal));
    assert!(!app.is_mounted());
    let frame = render_to_string(&mut app, 100, 40)?;
    assert!(app.is_mounted());
    assert!(frame.contains("Erika Seto, PharmD, RPh"));
    Ok(())
}
