use super::*;
use crate::color;
use crate::config::Action;
use crate::page::{NoopReveal, ScrollReveal};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::time::Duration;

fn app_with(width: u16, height: u16, smooth: bool) -> App {
    let config = Config {
        smooth_scroll: smooth,
        ..Config::default()
    };
    let mut app = App::new(config, Box::new(NoopReveal));
    let now = Instant::now();
    app.resize(width, height, now);
    app.mount(now);
    app
}

fn desktop() -> App {
    app_with(100, 40, false)
}

fn mobile() -> App {
    app_with(60, 40, false)
}

fn assert_colors_in_sync(app: &App) {
    assert_eq!(app.ui.background, app.ui.nav);
}

#[test]
fn test_page_area_excludes_chrome() {
    let app = desktop();
    assert_eq!(app.viewport.width, 100);
    assert_eq!(app.viewport.height, 40 - HEADER_HEIGHT - STATUS_BAR_HEIGHT);
    assert_eq!(app.frame_area(), Rect::new(0, 0, 100, 40));
}

#[test]
fn test_mount_evaluates_immediately() {
    let app = desktop();
    assert!(app.is_mounted());
    assert_eq!(app.region(), ScrollRegion::PreSnapshotEnd);
    assert_eq!(app.ui.background, color::START);
    assert!(!app.ui.past_experience);
    assert_colors_in_sync(&app);
}

#[rstest]
#[case(100, 40)]
#[case(80, 24)]
#[case(60, 30)]
#[case(200, 60)]
fn test_snapshot_end_reached_after_header_rows(#[case] width: u16, #[case] height: u16) {
    let mut app = app_with(width, height, false);
    let now = Instant::now();
    assert_eq!(app.region(), ScrollRegion::PreSnapshotEnd);
    assert_eq!(
        app.anchors().bottom(SectionId::Snapshot),
        app.viewport.metrics().bottom() + i32::from(HEADER_HEIGHT)
    );

    app.scroll_by(i32::from(HEADER_HEIGHT) - 1, now);
    assert_eq!(app.region(), ScrollRegion::PreSnapshotEnd);
    assert!(!app.ui.past_experience);

    app.scroll_by(1, now);
    assert_eq!(app.region(), ScrollRegion::PreAbout);
    assert_eq!(app.ui.background, color::START);
    assert_colors_in_sync(&app);
}

#[test]
fn test_view_state_is_a_plain_value() {
    let app = desktop();
    let state = app.view_state();
    let copy = state;
    assert_eq!(state, copy);
    assert_eq!(state.tracker.region, ScrollRegion::PreSnapshotEnd);
}

#[test]
fn test_scroll_events_ignored_until_mounted() {
    let mut app = App::new(
        Config {
            smooth_scroll: false,
            ..Config::default()
        },
        Box::new(NoopReveal),
    );
    let now = Instant::now();
    app.resize(100, 40, now);
    app.scroll_to_bottom(now);
    assert!(app.viewport.scroll_y > 0);
    assert_eq!(app.ui.background, color::START);
    assert!(!app.ui.past_experience);

    app.mount(now);
    assert_eq!(app.region(), ScrollRegion::PostContact);
    assert_eq!(app.ui.background, color::END);
    assert!(app.ui.past_experience);
}

#[test]
fn test_unmount_stops_tracking() {
    let mut app = desktop();
    let now = Instant::now();
    app.unmount();
    assert!(!app.is_mounted());
    app.scroll_to_bottom(now);
    assert_eq!(app.ui.background, color::START);
}

#[test]
fn test_scrolling_through_transition() {
    let mut app = desktop();
    let now = Instant::now();
    let anchors = app.anchors();
    let about_top = anchors.top(SectionId::About);
    let contact_top = anchors.top(SectionId::Contact);
    let height = i32::from(app.viewport.height);

    app.scroll_by((about_top + contact_top) / 2 - height, now);
    let ScrollRegion::Transitioning { factor } = app.region() else {
        panic!("expected transition, got {:?}", app.region());
    };
    assert!(factor > 0.0 && factor < 1.0);
    assert_ne!(app.ui.background, color::START);
    assert_ne!(app.ui.background, color::END);
    assert!(!app.ui.past_experience);
    assert_colors_in_sync(&app);
}

#[test]
fn test_navigate_contact_reaches_post_contact() {
    let mut app = desktop();
    assert!(app.navigate("Contact", Instant::now()));

    let contact_top = app.anchors().top(SectionId::Contact);
    let expected = (contact_top - app.config.nav_offset).min(app.viewport.max_scroll());
    assert_eq!(app.viewport.scroll_y, expected);
    assert_eq!(app.region(), ScrollRegion::PostContact);
    assert_eq!(app.ui.background, color::END);
    assert!(app.ui.past_experience);
}

#[test]
fn test_navigate_about_goes_to_snapshot_end() {
    let mut app = desktop();
    assert!(app.navigate("about", Instant::now()));
    assert_eq!(app.viewport.scroll_y, app.anchors().bottom(SectionId::Snapshot));
}

#[test]
fn test_scroll_to_section_is_case_insensitive() {
    let mut app = desktop();
    assert!(app.scroll_to_section("WORK EXPERIENCE", Instant::now()));
    let experience_top = app.anchors().top(SectionId::Experience);
    assert_eq!(app.viewport.scroll_y, experience_top - 1);
}

#[test]
fn test_scroll_to_section_unknown_is_noop() {
    let mut app = desktop();
    let before = app.viewport;
    assert!(!app.scroll_to_section("unknown", Instant::now()));
    assert_eq!(app.viewport, before);
    assert!(!app.navigate("", Instant::now()));
    assert_eq!(app.viewport, before);
}

#[test]
fn test_scroll_to_snapshot_end() {
    let mut app = desktop();
    assert!(app.scroll_to_snapshot_end(Instant::now()));
    assert_eq!(
        app.viewport.scroll_y,
        i32::from(app.viewport.height + HEADER_HEIGHT)
    );
}

#[test]
fn test_smooth_navigation_settles_on_ticks() {
    let mut app = app_with(100, 40, true);
    let start = Instant::now();
    assert!(app.navigate("Contact", start));
    assert_eq!(app.viewport.scroll_y, 0);

    let mut now = start;
    let mut frames = 0;
    while app.tick(now) {
        now += Duration::from_millis(33);
        frames += 1;
        assert!(frames < 200, "navigation never settled");
    }
    assert_eq!(app.viewport.target(), None);
    assert_eq!(app.region(), ScrollRegion::PostContact);
    assert!(app.ui.past_experience);
}

#[test]
fn test_manual_scroll_cancels_navigation() {
    let mut app = app_with(100, 40, true);
    let now = Instant::now();
    app.navigate("Contact", now);
    app.tick(now);
    app.scroll_down(now);
    assert_eq!(app.viewport.target(), None);
}

#[test]
fn test_resize_re_evaluates() {
    let mut app = desktop();
    let now = Instant::now();
    app.navigate("Work Experience", now);

    app.resize(50, 30, now);
    assert_eq!(app.nav_layout(), NavLayout::Mobile);
    let fresh = app.view_state();
    assert_eq!(fresh.tracker.background, app.ui.background);
    assert_eq!(fresh.tracker.region.name(), app.region().name());
    assert!(app.viewport.scroll_y <= app.viewport.max_scroll());
}

#[test]
fn test_resize_to_desktop_closes_menu() {
    let mut app = mobile();
    let now = Instant::now();
    assert!(app.toggle_menu());
    app.resize(120, 40, now);
    assert!(!app.ui.menu.open);
}

#[test]
fn test_toggle_menu_only_in_mobile_layout() {
    let mut app = desktop();
    assert!(!app.toggle_menu());
    assert!(!app.ui.menu.open);

    let mut app = mobile();
    assert!(app.toggle_menu());
    assert!(app.ui.menu.open);
    assert!(app.toggle_menu());
    assert!(!app.ui.menu.open);
}

#[test]
fn test_select_menu_item_closes_and_navigates() {
    let mut app = mobile();
    let now = Instant::now();
    app.toggle_menu();
    assert!(app.select_menu_item(2, now));
    assert!(!app.ui.menu.open);
    assert_eq!(app.region(), ScrollRegion::PostContact);
}

#[test]
fn test_menu_keys_move_highlight() {
    let mut app = mobile();
    let now = Instant::now();
    app.handle_action(Action::ToggleMenu, now);
    app.handle_action(Action::ScrollDown, now);
    assert_eq!(app.ui.menu.highlighted, 1);
    assert_eq!(app.viewport.scroll_y, 0);

    app.handle_action(Action::Select, now);
    assert!(!app.ui.menu.open);
    let experience_top = app.anchors().top(SectionId::Experience);
    assert_eq!(app.viewport.scroll_y, experience_top - 1);
}

#[test]
fn test_menu_cancel_closes() {
    let mut app = mobile();
    let now = Instant::now();
    app.handle_action(Action::ToggleMenu, now);
    app.handle_action(Action::Cancel, now);
    assert!(!app.ui.menu.open);
}

#[test]
fn test_section_keys() {
    let mut app = desktop();
    let now = Instant::now();
    app.handle_action(Action::GoAbout, now);
    assert_eq!(app.viewport.scroll_y, app.anchors().bottom(SectionId::Snapshot));
    app.handle_action(Action::ScrollTop, now);
    assert_eq!(app.viewport.scroll_y, 0);
    app.handle_action(Action::ScrollBottom, now);
    assert_eq!(app.viewport.scroll_y, app.viewport.max_scroll());
}

#[test]
fn test_page_keys() {
    let mut app = desktop();
    let now = Instant::now();
    app.handle_action(Action::PageDown, now);
    assert_eq!(app.viewport.scroll_y, i32::from(app.viewport.height) - 1);
    app.handle_action(Action::PageUp, now);
    assert_eq!(app.viewport.scroll_y, 0);
    app.handle_action(Action::ScrollUp, now);
    assert_eq!(app.viewport.scroll_y, 0);
}

#[test]
fn test_help_closes_on_any_action() {
    let mut app = desktop();
    let now = Instant::now();
    app.handle_action(Action::Help, now);
    assert!(app.show_help);
    app.handle_action(Action::ScrollDown, now);
    assert!(!app.show_help);
    assert_eq!(app.viewport.scroll_y, 0);
}

#[test]
fn test_quit() {
    let mut app = desktop();
    app.handle_action(Action::Quit, Instant::now());
    assert!(app.should_quit);
}

#[test]
fn test_reveal_is_initialized_on_mount() {
    let config = Config::default();
    let mut app = App::new(config, Box::new(ScrollReveal::new()));
    let now = Instant::now();
    app.resize(100, 40, now);
    // Before mount the effect is not configured and hides nothing
    assert!((app.reveal_opacity(SectionId::Contact, now) - 1.0).abs() < f64::EPSILON);

    app.mount(now);
    assert!(app.reveal_opacity(SectionId::Contact, now) < f64::EPSILON);
    assert!((app.reveal_opacity(SectionId::Snapshot, now) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_view_state_serializes() -> Result<(), Box<dyn std::error::Error>> {
    let app = desktop();
    let value = serde_json::to_value(app.view_state())?;
    assert_eq!(value["region"], "pre_about");
    assert_eq!(value["layout"], "desktop");
    assert_eq!(value["background"], "#6495ed");
    assert_eq!(value["past_experience"], false);
    assert_eq!(value["anchors"]["snapshot"]["top"], 0);
    Ok(())
}
