//! Reducer and component tests using EffectStore and TestHarness

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_dispatch::testing::*;
use tui_dispatch::{EffectStore, EventKind, assert_emitted, assert_not_emitted};
use weather_dashboard::{
    action::Action,
    components::{Component, Dashboard, DashboardProps},
    effect::Effect,
    reducer::reducer,
    state::{AppState, Focus, Theme, WeatherResult},
};

fn oslo() -> WeatherResult {
    WeatherResult {
        name: "Oslo".into(),
        country: "NO".into(),
        temperature: -3.0,
        condition: "Snow".into(),
        icon: "13n".into(),
        humidity: 86,
        wind_speed: 1.5,
    }
}

fn press(state: &AppState, code: KeyCode, modifiers: KeyModifiers) -> Vec<Action> {
    let mut dashboard = Dashboard::new();
    let props = DashboardProps {
        state,
        is_focused: true,
    };
    let event = EventKind::Key(KeyEvent::new(code, modifiers));
    let actions: Vec<_> = dashboard.handle_event(&event, props).into_iter().collect();
    actions
}

#[test]
fn test_reducer_submit() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    store.dispatch(Action::QueryChange("Oslo".into()));
    let result = store.dispatch(Action::QuerySubmit);

    assert!(result.changed);
    assert!(store.state().loading);
    assert_eq!(store.state().pending_city.as_deref(), Some("Oslo"));
    assert_eq!(result.effects.len(), 1);
    assert_eq!(
        result.effects[0],
        Effect::FetchWeather {
            city: "Oslo".into()
        }
    );
}

#[test]
fn test_reducer_cleared_query_submit_is_ignored() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    store.dispatch(Action::QueryChange("Os".into()));
    store.dispatch(Action::QueryChange(String::new()));
    let result = store.dispatch(Action::QuerySubmit);

    assert!(!result.changed);
    assert!(result.effects.is_empty());
    assert!(!store.state().loading);
}

#[test]
fn test_reducer_weather_load() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    store.dispatch(Action::QueryChange("oslo".into()));
    store.dispatch(Action::QuerySubmit);
    store.dispatch(Action::WeatherDidLoad(oslo()));

    assert_eq!(store.state().weather, Some(oslo()));
    assert_eq!(store.state().history.as_slice(), ["Oslo"]);
    assert!(store.state().query.is_empty());
}

#[test]
fn test_reducer_toggle_theme() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    assert_eq!(store.state().theme, Theme::Light);
    store.dispatch(Action::UiToggleTheme);
    assert_eq!(store.state().theme, Theme::Dark);
    store.dispatch(Action::UiToggleTheme);
    assert_eq!(store.state().theme, Theme::Light);
}

#[test]
fn test_reducer_history_selection_ignores_out_of_range() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    for name in ["Oslo", "Lima"] {
        store.dispatch(Action::WeatherLookup(name.into()));
        store.dispatch(Action::WeatherDidLoad(WeatherResult {
            name: name.into(),
            ..oslo()
        }));
    }

    store.dispatch(Action::HistorySelect(1));
    assert_eq!(store.state().selected_history_city(), Some("Oslo"));

    store.dispatch(Action::HistorySelect(9));
    assert_eq!(store.state().history_selected, 1);
}

#[test]
fn test_dashboard_keyboard_events() {
    let state = AppState {
        query: "Oslo".into(),
        ..Default::default()
    };

    let actions = press(&state, KeyCode::Enter, KeyModifiers::NONE);
    actions.assert_count(1);
    actions.assert_first(Action::QuerySubmit);

    press(&state, KeyCode::F(2), KeyModifiers::NONE).assert_first(Action::UiToggleTheme);
    press(&state, KeyCode::Char('c'), KeyModifiers::CONTROL).assert_first(Action::Quit);
}

#[test]
fn test_focus_cycle_through_store() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut store = EffectStore::new(AppState::default(), reducer);
    store.dispatch(Action::WeatherLookup("Oslo".into()));
    store.dispatch(Action::WeatherDidLoad(oslo()));

    for action in press(store.state(), KeyCode::Tab, KeyModifiers::NONE) {
        harness.emit(action);
    }
    for action in harness.drain_emitted() {
        store.dispatch(action);
    }
    assert_eq!(store.state().focus, Focus::History);

    let actions = press(store.state(), KeyCode::Char(' '), KeyModifiers::NONE);
    actions.assert_first(Action::HistoryReplay("Oslo".into()));
}

#[test]
fn test_action_categories() {
    let did_load = Action::WeatherDidLoad(WeatherResult::default());
    let toggle = Action::UiToggleTheme;
    let tick = Action::Tick;

    assert_eq!(did_load.category(), Some("weather_did"));
    assert_eq!(toggle.category(), Some("ui"));
    assert_eq!(tick.category(), None);

    assert!(did_load.is_weather_did());
    assert!(toggle.is_ui());
}

#[test]
fn test_harness_emit_and_drain() {
    let mut harness = TestHarness::<(), Action>::new(());

    harness.emit(Action::QuerySubmit);
    harness.emit(Action::UiToggleTheme);
    harness.emit(Action::WeatherDidError("oops".into()));

    let actions = harness.drain_emitted();
    actions.assert_count(3);
}

#[test]
fn test_assert_emitted_macro() {
    let actions = vec![
        Action::WeatherLookup("Oslo".into()),
        Action::WeatherDidFail(None),
    ];

    assert_emitted!(actions, Action::WeatherLookup(_));
    assert_emitted!(actions, Action::WeatherDidFail(None));
    assert_not_emitted!(actions, Action::Quit);
    assert_not_emitted!(actions, Action::WeatherDidLoad(_));
}
