//! Weather Dashboard - look up current conditions by city name

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_components::centered_rect;
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weather_dashboard::action::Action;
use weather_dashboard::api::{self, WeatherClient};
use weather_dashboard::components::{
    Component, Dashboard, DashboardProps, NoticeModal, NoticeModalProps, Palette,
};
use weather_dashboard::effect::Effect;
use weather_dashboard::logging;
use weather_dashboard::notify::{self, Notifier, NotifyMode};
use weather_dashboard::reducer::reducer;
use weather_dashboard::state::{AppState, SPINNER_TICK_MS, Theme};

/// Weather Dashboard - current conditions from OpenWeather
#[derive(Parser, Debug)]
#[command(name = "weather-dashboard")]
#[command(about = "Look up current weather by city name")]
struct Args {
    /// OpenWeather API key
    #[arg(long, env = "OPENWEATHER_API_KEY", default_value = "", hide_env_values = true)]
    api_key: String,

    /// Provider endpoint root
    #[arg(long, env = "OPENWEATHER_BASE_URL", default_value = api::DEFAULT_BASE_URL)]
    base_url: String,

    /// City to look up on startup
    #[arg(long, short)]
    city: Option<String>,

    /// How failed lookups are reported
    #[arg(long, value_enum, default_value_t = NotifyMode::Modal)]
    notify: NotifyMode,

    /// Initial color scheme
    #[arg(long, value_enum, default_value_t = Theme::Light)]
    theme: Theme,

    /// Write tracing output to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum WeatherComponentId {
    Dashboard,
    Notice,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum WeatherContext {
    Main,
    Notice,
}

impl EventRoutingState<WeatherComponentId, WeatherContext> for AppState {
    fn focused(&self) -> Option<WeatherComponentId> {
        if self.notice.is_some() {
            Some(WeatherComponentId::Notice)
        } else {
            Some(WeatherComponentId::Dashboard)
        }
    }

    fn modal(&self) -> Option<WeatherComponentId> {
        if self.notice.is_some() {
            Some(WeatherComponentId::Notice)
        } else {
            None
        }
    }

    fn binding_context(&self, id: WeatherComponentId) -> WeatherContext {
        match id {
            WeatherComponentId::Dashboard => WeatherContext::Main,
            WeatherComponentId::Notice => WeatherContext::Notice,
        }
    }

    fn default_context(&self) -> WeatherContext {
        WeatherContext::Main
    }
}

/// Collaborators the effect handler needs
struct Services {
    client: WeatherClient,
    notifier: Arc<dyn Notifier>,
}

static SERVICES: OnceLock<Services> = OnceLock::new();

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        api_key,
        base_url,
        city,
        notify,
        theme,
        log_file,
        debug: debug_args,
    } = Args::parse();

    logging::init(log_file.as_deref())?;

    if api_key.is_empty() {
        tracing::warn!("no API key configured; the provider will reject lookups");
    }
    let client = WeatherClient::new(base_url, api_key);
    tracing::info!(base_url = client.base_url(), ?notify, "starting");
    if SERVICES
        .set(Services {
            client,
            notifier: notify.notifier(),
        })
        .is_err()
    {
        return Err(io::Error::other("services already initialised"));
    }

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(theme))
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    let initial_action = city
        .map(|city| city.trim().to_string())
        .filter(|city| !city.is_empty())
        .map(Action::WeatherLookup);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, initial_action, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    tracing::info!("exiting");
    Ok(())
}

struct WeatherUi {
    dashboard: Dashboard,
    notice: NoticeModal,
}

impl WeatherUi {
    fn new() -> Self {
        Self {
            dashboard: Dashboard::new(),
            notice: NoticeModal::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<WeatherComponentId>,
    ) {
        event_ctx.set_component_area(WeatherComponentId::Dashboard, area);

        let props = DashboardProps {
            state,
            is_focused: render_ctx.is_focused() && state.notice.is_none(),
        };
        self.dashboard.render(frame, area, props);

        if let Some(message) = &state.notice {
            event_ctx.set_component_area(WeatherComponentId::Notice, centered_rect(50, 7, area));
            let props = NoticeModalProps {
                message,
                is_focused: render_ctx.is_focused(),
                palette: Palette::for_theme(state.theme),
            };
            self.notice.render(frame, area, props);
        } else {
            event_ctx
                .component_areas
                .remove(&WeatherComponentId::Notice);
        }
    }

    fn handle_dashboard_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = DashboardProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .dashboard
            .handle_event(event, props)
            .into_iter()
            .collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }

    /// The notice is blocking: every event is consumed while it is open.
    fn handle_notice_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let Some(message) = &state.notice else {
            return HandlerResponse::ignored();
        };
        let props = NoticeModalProps {
            message,
            is_focused: true,
            palette: Palette::for_theme(state.theme),
        };
        let actions: Vec<_> = self.notice.handle_event(event, props).into_iter().collect();
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    initial_action: Option<Action>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(WeatherUi::new()));
    let mut bus: EventBus<AppState, Action, WeatherComponentId, WeatherContext> = EventBus::new();
    let keybindings: Keybindings<WeatherContext> = Keybindings::new();

    let ui_dashboard = Rc::clone(&ui);
    bus.register(WeatherComponentId::Dashboard, move |event, state| {
        ui_dashboard
            .borrow_mut()
            .handle_dashboard_event(&event.kind, state)
    });

    let ui_notice = Rc::clone(&ui);
    bus.register(WeatherComponentId::Notice, move |event, state| {
        ui_notice
            .borrow_mut()
            .handle_notice_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            initial_action,
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(SPINNER_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            handle_effect,
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>) {
    let Some(services) = SERVICES.get() else {
        tracing::error!(?effect, "effect dropped: services not initialised");
        return;
    };

    match effect {
        Effect::FetchWeather { city } => {
            let client = services.client.clone();
            tracing::info!(%city, "lookup issued");
            ctx.tasks().spawn("weather", async move {
                let result = client.lookup(&city).await;
                match &result {
                    Ok(weather) => {
                        tracing::info!(%city, resolved = %weather.name, "lookup succeeded")
                    }
                    Err(error) if error.is_transport() => {
                        tracing::error!(%city, %error, "lookup failed")
                    }
                    Err(error) => tracing::info!(%city, %error, "provider rejected lookup"),
                }
                Action::from_lookup(result)
            });
        }
        Effect::Notify { message } => {
            if let Some(action) = notify::deliver(services.notifier.as_ref(), &message) {
                ctx.tasks().spawn("notice", async move { action });
            }
        }
    }
}
