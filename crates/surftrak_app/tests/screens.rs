//! Whole-screen behavior driven through simulated frames

use std::sync::Arc;

use surftrak_app::components::goal_card::MESSAGES;
use surftrak_app::prelude::*;

const FRAME_MS: f32 = 10.0;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn run_for(app: &mut SurftrakApp, ms: f32) {
    let frames = (ms / FRAME_MS).round() as usize;
    for _ in 0..frames {
        app.frame(FRAME_MS);
    }
}

fn sample_app() -> SurftrakApp {
    init_tracing();
    SurftrakApp::with_sample_data(AppConfig::default()).unwrap()
}

fn app_with_auth(auth: MockAuth) -> (SurftrakApp, Arc<MockAuth>) {
    init_tracing();
    let auth = Arc::new(auth);
    let app = SurftrakApp::new(
        AppConfig::default(),
        Arc::new(StaticDataProvider::sample().unwrap()),
        auth.clone(),
    );
    (app, auth)
}

fn kelly() -> AuthUser {
    AuthUser {
        display_name: Some("Kelly Slater".into()),
        email: Some("kelly@example.com".into()),
        photo_url: Some("https://example.com/kelly.png".into()),
    }
}

#[test]
fn test_home_composition() {
    let app = sample_app();
    let ui = app.render();
    let texts = ui.texts();

    for expected in [
        "Weekly Goal",
        "5 days left",
        "15/50 waves",
        MESSAGES[0],
        "Lifetime Stats",
        "Avg Speed",
        "11 mph",
        "Longest Wave",
        "45 sec",
        "Total Distance",
        "Best Speed",
        "22 mph",
        "Recommended",
        "News",
        "User Guide",
    ] {
        assert!(texts.contains(&expected), "missing {expected:?} in {texts:?}");
    }
    assert!(ui.actions().contains(&Action::SeeAll("Lifetime Stats".into())));
}

#[test]
fn test_home_goal_bar_fills_to_goal_share() {
    let mut app = sample_app();
    run_for(&mut app, 1500.0);

    let layout = app.layout().unwrap();
    let track = layout.find("goal-track").unwrap();
    let fill = layout.find("goal-fill").unwrap();
    // Layout snaps frames to whole pixels
    assert!((fill.width - 0.3 * track.width).abs() <= 0.5);

    let ui = app.render();
    let projected = ui
        .find("goal-fill")
        .and_then(|e| e.animated.as_ref())
        .and_then(|s| s.width_fraction)
        .unwrap();
    assert!((projected - 0.3).abs() < 1e-4);
}

#[test]
fn test_home_message_rotates_every_five_seconds() {
    let mut app = sample_app();
    run_for(&mut app, 4990.0);
    assert!(app.render().contains_text(MESSAGES[0]));
    run_for(&mut app, 10.0);
    assert!(app.render().contains_text(MESSAGES[1]));
    run_for(&mut app, 5000.0 * 4.0);
    assert!(app.render().contains_text(MESSAGES[0]));
}

#[test]
fn test_configured_goal_and_rotation() {
    init_tracing();
    let config = AppConfig::from_toml("[home]\nweekly_goal = 30\nmessage_rotation_ms = 1000\n")
        .unwrap();
    let mut app = SurftrakApp::with_sample_data(config).unwrap();
    assert!(app.render().contains_text("15/30 waves"));
    run_for(&mut app, 1000.0);
    assert!(app.render().contains_text(MESSAGES[1]));
}

#[test]
fn test_sessions_list_newest_first() {
    let mut app = sample_app();
    app.select_tab(Tab::Sessions);
    let texts = app.render().texts().into_iter().map(String::from).collect::<Vec<_>>();

    let order: Vec<_> = ["Huntington Beach", "Newport Beach", "Malibu Point", "Trestles"]
        .iter()
        .map(|name| texts.iter().position(|t| t == name).unwrap())
        .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]));

    assert!(texts.iter().any(|t| t == "April 10, 2023"));
    assert!(texts.iter().any(|t| t == "10:30 AM - 12:45 PM"));
    assert!(texts.iter().any(|t| t == "2h 15m"));
    assert!(texts.iter().any(|t| t == "8:15 AM - 11:00 AM"));
}

#[test]
fn test_sessions_press_card() {
    let mut app = sample_app();
    app.select_tab(Tab::Sessions);

    let layout = app.layout().unwrap();
    let card = layout.find("session:1").unwrap();
    let (x, y) = (card.x + card.width / 2.0, card.y + 10.0);
    let pressed = app.press_at(x, y).unwrap();
    assert_eq!(pressed, Some(Action::OpenSession("1".into())));
    // Logging a press leaves the screen alone
    assert_eq!(app.active_tab(), Tab::Sessions);
}

#[test]
fn test_sessions_add_button_keeps_animating() {
    let mut app = sample_app();
    app.select_tab(Tab::Sessions);

    let mut last = None;
    for _ in 0..100 {
        let report = app.frame(1000.0 / 60.0);
        assert!(report.active >= 4);
        last = Some(report);
    }
    assert_eq!(last.map(|r| r.completed), Some(0));

    let layout = app.layout().unwrap();
    let face = layout.find("add-button").unwrap();
    assert!(matches!(face.background, Some(Brush::Linear(ref stops)) if stops.len() == 2));
    assert!(face.scale.is_some());
}

#[test]
fn test_profile_uses_auth_user() {
    let (mut app, _auth) = app_with_auth(MockAuth::new(Some(kelly())));
    app.select_tab(Tab::Profile);
    let ui = app.render();

    assert!(ui.contains_text("Kelly Slater"));
    assert!(ui.contains_text("kelly@example.com"));
    for expected in ["4", "44", "22mph", "Settings", "Device Manager", "Help & Support", "Log Out"]
    {
        assert!(ui.texts().contains(&expected), "missing {expected:?}");
    }
}

#[test]
fn test_profile_sign_out_falls_back() {
    let (mut app, auth) = app_with_auth(MockAuth::new(Some(kelly())));
    app.select_tab(Tab::Profile);

    app.dispatch(&Action::SignOut);
    assert!(!auth.is_signed_in());

    let ui = app.render();
    assert!(ui.contains_text("John Doe"));
    assert!(ui.contains_text("johndoe@surftrak.com"));
    assert!(!ui.contains_text("Kelly Slater"));
}

#[test]
fn test_sign_out_failure_is_not_fatal() {
    let (mut app, auth) = app_with_auth(MockAuth::failing(Some(kelly())));
    app.select_tab(Tab::Profile);

    app.dispatch(&Action::SignOut);
    assert!(auth.is_signed_in());
    assert_eq!(app.active_tab(), Tab::Profile);
    assert!(app.render().contains_text("Kelly Slater"));

    // Signing out twice reports the second as an error, still non-fatal
    let (mut app, _) = app_with_auth(MockAuth::new(None));
    app.dispatch(&Action::SignOut);
}

#[test]
fn test_forecast_placeholder() {
    let mut app = sample_app();
    app.select_tab(Tab::Forecast);
    let ui = app.render();
    assert!(ui.contains_text("Forecast"));
    assert_eq!(app.scheduler().value_count(), 0);
}
