//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, Focus, NOT_FOUND_FALLBACK, TRANSPORT_ERROR_MESSAGE};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Query actions =====
        Action::QueryChange(text) => {
            state.query = text;
            DispatchResult::changed()
        }

        Action::QuerySubmit => {
            if state.query.is_empty() {
                return DispatchResult::unchanged();
            }
            let city = state.query.clone();
            begin_lookup(state, city)
        }

        // ===== Weather actions =====
        Action::WeatherLookup(city) => {
            if city.is_empty() {
                return DispatchResult::unchanged();
            }
            begin_lookup(state, city)
        }

        Action::WeatherDidLoad(result) => {
            state.history.push(&result.name);
            state.history_selected = 0;
            state.weather = Some(result);
            state.query.clear();
            finish_lookup(state);
            DispatchResult::changed()
        }

        Action::WeatherDidFail(message) => {
            state.weather = None;
            let message = message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| NOT_FOUND_FALLBACK.to_string());
            finish_lookup(state);
            DispatchResult::changed_with(Effect::Notify { message })
        }

        Action::WeatherDidError(cause) => {
            tracing::debug!(%cause, "lookup failed before the provider answered");
            state.weather = None;
            finish_lookup(state);
            DispatchResult::changed_with(Effect::Notify {
                message: TRANSPORT_ERROR_MESSAGE.to_string(),
            })
        }

        // ===== History actions =====
        Action::HistorySelect(index) => {
            if index < state.history.len() && index != state.history_selected {
                state.history_selected = index;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::HistoryReplay(city) => {
            if city.is_empty() {
                return DispatchResult::unchanged();
            }
            begin_lookup(state, city)
        }

        // ===== Notice actions =====
        Action::NoticeShow(message) => {
            state.notice = Some(message);
            DispatchResult::changed()
        }

        Action::NoticeDismiss => {
            if state.notice.take().is_some() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== UI actions =====
        Action::UiToggleTheme => {
            state.theme = state.theme.toggle();
            DispatchResult::changed()
        }

        Action::UiFocusNext => {
            let next = match state.focus {
                Focus::Input if !state.history.is_empty() => Focus::History,
                Focus::Input => return DispatchResult::unchanged(),
                Focus::History => Focus::Input,
            };
            state.focus = next;
            state.history_selected = state
                .history_selected
                .min(state.history.len().saturating_sub(1));
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            if state.loading {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Start one lookup. Refused while another is outstanding.
fn begin_lookup(state: &mut AppState, city: String) -> DispatchResult<Effect> {
    if state.loading {
        tracing::debug!(
            %city,
            pending = state.pending_city.as_deref().unwrap_or_default(),
            "lookup ignored: request already in flight"
        );
        return DispatchResult::unchanged();
    }
    state.loading = true;
    state.pending_city = Some(city.clone());
    state.tick_count = 0;
    DispatchResult::changed_with(Effect::FetchWeather { city })
}

/// Runs last on every outcome.
fn finish_lookup(state: &mut AppState) {
    state.pending_city = None;
    state.loading = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WeatherResult;

    fn result_for(name: &str) -> WeatherResult {
        WeatherResult {
            name: name.into(),
            country: "FR".into(),
            temperature: 18.2,
            condition: "Clouds".into(),
            icon: "04d".into(),
            humidity: 64,
            wind_speed: 4.1,
        }
    }

    #[test]
    fn test_submit_empty_query_is_noop() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::QuerySubmit);

        assert!(!result.changed);
        assert!(result.effects.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn test_submit_sets_loading_and_fetches() {
        let mut state = AppState {
            query: "Paris".into(),
            tick_count: 9,
            ..Default::default()
        };

        let result = reducer(&mut state, Action::QuerySubmit);

        assert!(result.changed);
        assert!(state.loading);
        assert_eq!(state.tick_count, 0);
        assert_eq!(state.pending_city.as_deref(), Some("Paris"));
        assert_eq!(result.effects.len(), 1);
        assert_eq!(
            result.effects[0],
            Effect::FetchWeather {
                city: "Paris".into()
            }
        );
        // query is only cleared on success
        assert_eq!(state.query, "Paris");
    }

    #[test]
    fn test_submit_while_loading_is_ignored() {
        let mut state = AppState {
            query: "Rome".into(),
            loading: true,
            pending_city: Some("Paris".into()),
            ..Default::default()
        };

        let result = reducer(&mut state, Action::QuerySubmit);

        assert!(!result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(state.pending_city.as_deref(), Some("Paris"));
    }

    #[test]
    fn test_did_load_updates_result_history_and_query() {
        let mut state = AppState {
            query: "paris".into(),
            loading: true,
            ..Default::default()
        };

        let result = reducer(&mut state, Action::WeatherDidLoad(result_for("Paris")));

        assert!(result.changed);
        assert!(result.effects.is_empty());
        assert!(!state.loading);
        assert!(state.query.is_empty());
        assert_eq!(state.weather, Some(result_for("Paris")));
        assert_eq!(state.history.front(), Some("Paris"));
    }

    #[test]
    fn test_did_fail_uses_provider_message() {
        let mut state = AppState {
            query: "Nowhereville".into(),
            loading: true,
            weather: Some(result_for("Paris")),
            ..Default::default()
        };

        let result = reducer(
            &mut state,
            Action::WeatherDidFail(Some("city not found".into())),
        );

        assert!(!state.loading);
        assert!(state.weather.is_none());
        assert_eq!(state.query, "Nowhereville");
        assert_eq!(result.effects.len(), 1);
        assert_eq!(
            result.effects[0],
            Effect::Notify {
                message: "city not found".into()
            }
        );
    }

    #[test]
    fn test_did_fail_without_message_uses_fallback() {
        let mut state = AppState {
            loading: true,
            ..Default::default()
        };

        let result = reducer(&mut state, Action::WeatherDidFail(Some(String::new())));

        assert_eq!(result.effects.len(), 1);
        assert_eq!(
            result.effects[0],
            Effect::Notify {
                message: NOT_FOUND_FALLBACK.into()
            }
        );
    }

    #[test]
    fn test_did_error_hides_cause() {
        let mut state = AppState {
            loading: true,
            ..Default::default()
        };

        let result = reducer(
            &mut state,
            Action::WeatherDidError("connection refused".into()),
        );

        assert!(!state.loading);
        assert_eq!(result.effects.len(), 1);
        assert_eq!(
            result.effects[0],
            Effect::Notify {
                message: TRANSPORT_ERROR_MESSAGE.into()
            }
        );
    }

    #[test]
    fn test_replay_keeps_query() {
        let mut state = AppState {
            query: "half typed".into(),
            ..Default::default()
        };

        let result = reducer(&mut state, Action::HistoryReplay("Tokyo".into()));

        assert!(state.loading);
        assert_eq!(state.query, "half typed");
        assert_eq!(result.effects.len(), 1);
        assert_eq!(
            result.effects[0],
            Effect::FetchWeather {
                city: "Tokyo".into()
            }
        );
    }

    #[test]
    fn test_focus_next_requires_history() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::UiFocusNext);
        assert!(!result.changed);
        assert_eq!(state.focus, Focus::Input);

        state.history.push("Lima");
        reducer(&mut state, Action::UiFocusNext);
        assert_eq!(state.focus, Focus::History);
        reducer(&mut state, Action::UiFocusNext);
        assert_eq!(state.focus, Focus::Input);
    }

    #[test]
    fn test_history_select_bounds() {
        let mut state = AppState::default();
        state.history.push("Lima");
        state.history.push("Quito");

        assert!(reducer(&mut state, Action::HistorySelect(1)).changed);
        assert!(!reducer(&mut state, Action::HistorySelect(1)).changed);
        assert!(!reducer(&mut state, Action::HistorySelect(2)).changed);
        assert_eq!(state.selected_history_city(), Some("Lima"));
    }

    #[test]
    fn test_notice_dismiss() {
        let mut state = AppState::default();

        reducer(&mut state, Action::NoticeShow("boom".into()));
        assert_eq!(state.notice.as_deref(), Some("boom"));

        assert!(reducer(&mut state, Action::NoticeDismiss).changed);
        assert!(state.notice.is_none());
        assert!(!reducer(&mut state, Action::NoticeDismiss).changed);
    }

    #[test]
    fn test_tick_only_animates_while_loading() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::Tick);
        assert!(!result.changed);

        state.loading = true;
        let result = reducer(&mut state, Action::Tick);
        assert!(result.changed);
        assert_eq!(state.tick_count, 1);
    }
}
