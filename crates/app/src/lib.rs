//! Desktop host for the plot engine.
//!
//! Owns the Iced application loop and wires together:
//! - the plot tick timer (`window.tick_ms`)
//! - the background sampler feeding the newest signal value
//! - the config file watcher (live reload on change)

use futures::channel::mpsc::Sender;
use iced::{
    widget::{canvas::Cache, container, text, Canvas},
    Element, Length, Size, Subscription, Task,
};
use plot_config::{default_path, load as load_config, ConfigWatcher, PlotConfig, PlotterConfig};
use plot_core::{Plot, Result};
use plot_renderer::PlotCanvas;
use plot_theme::Theme;
use std::time::Duration;
use tracing::{error, info, warn};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the plot window.  Returns when the window is closed.
pub fn run() -> iced::Result {
    let config = load_config(default_path()).unwrap_or_default();

    iced::application(Plotter::new, Plotter::update, Plotter::view)
        .title(Plotter::title)
        .subscription(Plotter::subscription)
        .style(Plotter::style)
        .window_size(Size::new(config.window.width, config.window.height))
        .run()
}

// ── Message ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Message {
    /// Advance the plot by one tick.
    Tick,
    /// Newest reading from the sampler.
    Sample(f32),
    /// Config file changed on disk.
    ConfigReloaded,
}

// ── State ─────────────────────────────────────────────────────────────────────

struct Plotter {
    config: PlotterConfig,
    theme:  Theme,
    /// `None` only if neither the configured nor the default settings build.
    plot:   Option<Plot>,
    latest: f32,
    cache:  Cache,
}

impl Plotter {
    fn new() -> (Self, Task<Message>) {
        let config = match load_config(default_path()) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("{e}; using defaults");
                PlotterConfig::default()
            }
        };
        (Self::from_config(config), Task::none())
    }

    fn from_config(mut config: PlotterConfig) -> Self {
        let plot = match build_plot(&config.plot) {
            Ok(plot) => Some(plot),
            Err(e) => {
                warn!("Rejected plot settings: {e}; falling back to defaults");
                config.plot = PlotConfig::default();
                build_plot(&config.plot)
                    .map_err(|e| error!("Default plot settings rejected: {e}"))
                    .ok()
            }
        };

        Self {
            theme: Theme::from_config(&config.theme),
            config,
            plot,
            latest: 0.0,
            cache: Cache::new(),
        }
    }

    fn title(&self) -> String {
        self.config.window.title.clone()
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                if let Some(plot) = self.plot.as_mut() {
                    plot.update(self.latest, self.config.plot.smoothing_window);
                    self.cache.clear();
                }
            }
            Message::Sample(value) => self.latest = value,
            Message::ConfigReloaded => match load_config(default_path()) {
                Ok(cfg) => self.apply_config(cfg),
                Err(e) => warn!("Config reload failed: {e}"),
            },
        }
        Task::none()
    }

    /// Swap in a reloaded config.  The plot is rebuilt only when its own
    /// section changed, since rebuilding resets the history and time axis.
    fn apply_config(&mut self, mut cfg: PlotterConfig) {
        if cfg.plot != self.config.plot {
            match build_plot(&cfg.plot) {
                Ok(plot) => {
                    info!("Plot settings changed; plot rebuilt");
                    self.plot = Some(plot);
                }
                Err(e) => {
                    warn!("Rejected plot settings: {e}; keeping current plot");
                    cfg.plot = self.config.plot.clone();
                }
            }
        }

        if cfg.signal != self.config.signal {
            info!("Signal settings changed; they apply after a restart");
        }

        info!("Config reloaded");
        self.theme  = Theme::from_config(&cfg.theme);
        self.config = cfg;
        self.cache.clear();
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        match &self.plot {
            Some(plot) => Canvas::new(PlotCanvas {
                frame:  plot.frame(),
                bounds: plot.settings().bounds,
                theme:  &self.theme,
                cache:  &self.cache,
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
            None => container(text("No valid plot configuration; see log output."))
                .center(Length::Fill)
                .into(),
        }
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        let period = Duration::from_millis(self.config.window.tick_ms.max(1));
        let tick = iced::time::every(period).map(|_| Message::Tick);

        Subscription::batch([
            tick,
            Subscription::run(signal_stream),
            Subscription::run(config_stream),
        ])
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.theme.background.to_iced(),
            text_color:       self.theme.label.to_iced(),
        }
    }
}

fn build_plot(cfg: &PlotConfig) -> Result<Plot> {
    Plot::new(cfg.to_settings()?)
}

// ── Subscription streams ──────────────────────────────────────────────────────
//
// Each free function is both the stream builder and the identity key for
// `Subscription::run(fn_ptr)`, so they survive redraws without restarting.

/// Forwards every sampler reading; the source is chosen from the config at
/// startup.
fn signal_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(16, |mut sender: Sender<Message>| async move {
        let config = load_config(default_path()).unwrap_or_default();

        match plot_signal::spawn_sampler(&config.signal) {
            Ok(mut rx) => {
                while let Some(value) = rx.recv().await {
                    let _ = sender.try_send(Message::Sample(value));
                }
                warn!("Sampler stopped");
            }
            Err(e) => error!("Sampler unavailable: {e}"),
        }

        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}

/// Watches `~/.config/plotter/plotter.toml` and sends `ConfigReloaded`.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let (_watcher, mut rx) = ConfigWatcher::spawn(default_path());

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::ConfigReloaded);
        }

        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}
