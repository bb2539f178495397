// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kinchart-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinchart and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::rc::Rc;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::{mpsc, watch};

use crate::args::{extract, Arguments, DataSourceKind};
use crate::config::ControllerConfig;
use crate::embed::{classify, EmbeddedMessage, HostFrame, Inbound, Inbox, Subscription};
use crate::location::Location;
use crate::model::{ChartType, Dataset, ImageMap, Selection};
use crate::render::{render, View};
use crate::selection::{compute_selection, is_selectable, selection_location, DEFAULT_GENERATION};
use crate::services::{Analytics, ChartExporter, ExportError, ExportFormat, Navigator};
use crate::source::{DataLoader, DataSource, LoadContext, LoadError};

use super::state::{AppState, Phase};

const NO_INDIVIDUALS: &str = "No individuals found in the data.";

/// External inputs that drive the controller.
#[derive(Debug, Clone)]
pub enum Trigger {
    /// The navigable location changed (route, query string or upload payload).
    Navigated(Location),
    /// A raw value arrived from the host frame.
    Message(Value),
    /// Stops [`Controller::run`].
    Shutdown,
}

/// What a single trigger did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    OffChartRoute,
    EnteredEmbedded,
    EmbeddedIgnoresNavigation,
    RedirectedToRoot,
    Loaded,
    LoadFailed,
    SelectionChanged,
    LoadedMore,
    LoadMoreFailed,
    Unchanged,
    ReadyResent,
    MessageIgnored,
}

/// Collaborators shared with the rest of the page.
#[derive(Clone)]
pub struct Services {
    pub loader: Rc<dyn DataLoader>,
    pub navigator: Rc<dyn Navigator>,
    pub host: Rc<dyn HostFrame>,
    pub analytics: Rc<dyn Analytics>,
    pub exporter: Rc<dyn ChartExporter>,
}

/// The application state machine.
///
/// Triggers are handled one at a time; a trigger that arrives while a load is awaited waits in
/// the queue and neither cancels nor is cancelled by it. Every transition publishes a fresh
/// [`AppState`] snapshot to the watch channel returned by [`Controller::subscribe`].
pub struct Controller {
    config: ControllerConfig,
    services: Services,
    state: watch::Sender<Arc<AppState>>,
    triggers: mpsc::UnboundedSender<Trigger>,
    location: Location,
    subscription: Option<Subscription>,
}

impl Controller {
    pub fn new(
        config: ControllerConfig,
        services: Services,
    ) -> (Self, mpsc::UnboundedReceiver<Trigger>) {
        let (state, _) = watch::channel(Arc::new(AppState::default()));
        let (triggers, trigger_rx) = mpsc::unbounded_channel();
        let controller = Self {
            config,
            services,
            state,
            triggers,
            location: Location::default(),
            subscription: None,
        };
        (controller, trigger_rx)
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn state(&self) -> Arc<AppState> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.state.subscribe()
    }

    /// Sender for feeding navigation events into [`Controller::run`].
    pub fn trigger_sender(&self) -> mpsc::UnboundedSender<Trigger> {
        self.triggers.clone()
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn is_listening(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn view(&self) -> View {
        let on_chart_route = self.config.is_chart_route(&self.location.pathname);
        render(&self.state(), on_chart_route)
    }

    /// Handles triggers until [`Trigger::Shutdown`] arrives, then tears down.
    pub async fn run(mut self, mut triggers: mpsc::UnboundedReceiver<Trigger>) {
        while let Some(trigger) = triggers.recv().await {
            if matches!(trigger, Trigger::Shutdown) {
                break;
            }
            self.handle(trigger).await;
        }
        self.teardown();
    }

    pub async fn handle(&mut self, trigger: Trigger) -> Outcome {
        match trigger {
            Trigger::Navigated(location) => self.update(location).await,
            Trigger::Message(value) => self.on_message(value).await,
            Trigger::Shutdown => Outcome::Unchanged,
        }
    }

    /// Runs one update cycle for `location`.
    pub async fn update(&mut self, location: Location) -> Outcome {
        self.location = location;
        let current = self.state();

        if !self.config.is_chart_route(&self.location.pathname) {
            if current.phase != Phase::Initial {
                self.publish(AppState {
                    phase: Phase::Initial,
                    ..(*current).clone()
                });
            }
            return Outcome::OffChartRoute;
        }

        let args = extract(&self.location);

        if args.embedded && !current.embedded {
            self.enter_embedded(&current);
            return Outcome::EnteredEmbedded;
        }
        if current.embedded {
            return Outcome::EmbeddedIgnoresNavigation;
        }

        let Some(kind) = args.source else {
            tracing::debug!(href = %self.location.href(), "no data source; back to intro");
            self.services
                .navigator
                .replace(Location::new(self.config.root_path.clone(), ""));
            return Outcome::RedirectedToRoot;
        };

        let strategy = kind.strategy();
        if current.phase == Phase::Initial
            || current.source != Some(kind)
            || strategy.is_new_data(&args, &current)
        {
            return self.load(strategy, &args, &current).await;
        }

        if current.is_chart_visible() {
            return self.refresh_selection(kind, &args, &current).await;
        }

        Outcome::Unchanged
    }

    /// Handles a raw value from the host frame. Only acted upon in embedded mode.
    pub async fn on_message(&mut self, value: Value) -> Outcome {
        if !self.state().embedded {
            return Outcome::MessageIgnored;
        }

        match classify(&value) {
            Inbound::ResendReady => {
                self.services.host.post_to_parent(&EmbeddedMessage::Ready);
                Outcome::ReadyResent
            }
            Inbound::LoadGedcom(gedcom) => self.load_embedded(gedcom).await,
            Inbound::Ignore => Outcome::MessageIgnored,
        }
    }

    /// Applies a selection made on the chart.
    ///
    /// Outside embedded mode this only navigates; the resulting location change drives the
    /// state. Returns false when the selection was rejected.
    pub fn select_individual(&mut self, selection: Selection) -> bool {
        if !is_selectable(&selection) {
            return false;
        }
        self.services.analytics.event("selection_changed", None, None);

        let current = self.state();
        if current.embedded {
            if current.data.is_none() {
                return false;
            }
            self.publish(AppState {
                selection: Some(selection),
                ..(*current).clone()
            });
            return true;
        }

        self.services
            .navigator
            .push(selection_location(&self.location, &selection));
        true
    }

    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        let current = self.state();
        if current.embedded {
            self.publish(AppState {
                chart_type,
                ..(*current).clone()
            });
            return;
        }
        self.services
            .navigator
            .push(self.location.with_params(&[("view", chart_type.view_param().to_owned())]));
    }

    pub fn print(&self) {
        self.services.analytics.event("print", None, None);
        self.services.exporter.print();
    }

    /// Exports the chart. A failure is surfaced as an error popup and also returned.
    pub async fn download(&mut self, format: ExportFormat) -> Result<(), ExportError> {
        self.services.analytics.event(format.analytics_event(), None, None);
        let result = self.services.exporter.export(format).await;
        if let Err(err) = &result {
            tracing::warn!(%format, error = %err, "chart export failed");
            self.show_error_popup(format.failure_message().to_owned());
        }
        result
    }

    pub fn dismiss_error_popup(&mut self) {
        let current = self.state();
        if current.error_popup.is_none() {
            return;
        }
        self.publish(AppState {
            error_popup: None,
            ..(*current).clone()
        });
    }

    /// Removes the host-frame listener, if any.
    pub fn teardown(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
        }
    }

    fn publish(&self, next: AppState) {
        self.state.send_if_modified(|current| {
            if **current == next {
                return false;
            }
            tracing::trace!(phase = %next.phase, "state transition");
            *current = Arc::new(next);
            true
        });
    }

    fn show_error_popup(&self, message: String) {
        let current = self.state();
        self.publish(AppState {
            error_popup: Some(message),
            ..(*current).clone()
        });
    }

    fn load_context(&self) -> LoadContext<'_> {
        LoadContext {
            loader: &*self.services.loader,
            analytics: &*self.services.analytics,
            locale: &self.config.locale,
        }
    }

    fn enter_embedded(&mut self, current: &AppState) {
        tracing::info!("entering embedded mode");
        self.publish(AppState {
            phase: Phase::Loading,
            embedded: true,
            standalone: false,
            ..current.clone()
        });
        self.services.host.post_to_parent(&EmbeddedMessage::Ready);
        if self.subscription.is_none() {
            let inbox = Inbox::new(self.triggers.clone());
            self.subscription = Some(self.services.host.listen(inbox));
        }
    }

    async fn load(
        &mut self,
        strategy: &dyn DataSource,
        args: &Arguments,
        before: &AppState,
    ) -> Outcome {
        let kind = strategy.kind();
        tracing::debug!(source = %kind, href = %self.location.href(), "loading data");

        self.publish(AppState {
            phase: Phase::Loading,
            selection: args
                .indi
                .clone()
                .map(|id| Selection::new(id, args.generation.unwrap_or(DEFAULT_GENERATION))),
            hash: args.hash.clone(),
            url: args.url.clone(),
            error: None,
            error_popup: None,
            standalone: args.standalone,
            chart_type: args.chart_type,
            source: Some(kind),
            ..before.clone()
        });

        let result = strategy.load_data(self.load_context(), args).await;
        let loaded = result.and_then(|dataset| with_selection(dataset, args));

        let current = self.state();
        match loaded {
            Ok((dataset, selection)) => {
                tracing::info!(
                    source = %kind,
                    individuals = dataset.chart().indis().len(),
                    selection = %selection.id,
                    "data loaded"
                );
                self.publish(AppState {
                    phase: Phase::ShowingChart,
                    data: Some(Arc::new(dataset)),
                    selection: Some(selection),
                    show_side_panel: args.show_side_panel,
                    freeze_animation: args.freeze_animation,
                    ..(*current).clone()
                });
                Outcome::Loaded
            }
            Err(err) => {
                tracing::warn!(source = %kind, error = %err, "loading data failed");
                self.publish(AppState {
                    phase: Phase::Error,
                    error: Some(err.to_string()),
                    selection: before.selection.clone(),
                    ..(*current).clone()
                });
                Outcome::LoadFailed
            }
        }
    }

    async fn refresh_selection(
        &mut self,
        kind: DataSourceKind,
        args: &Arguments,
        current: &AppState,
    ) -> Outcome {
        let Some(data) = current.data.as_ref() else {
            return Outcome::Unchanged;
        };
        let Some(selection) = compute_selection(data, args.indi.as_ref(), args.generation) else {
            return Outcome::Unchanged;
        };

        let selection_changed = current.selection.as_ref() != Some(&selection);
        let load_more = kind == DataSourceKind::WikiTree && selection_changed;

        if !selection_changed && current.chart_type == args.chart_type {
            return Outcome::Unchanged;
        }

        self.publish(AppState {
            phase: if load_more {
                Phase::LoadingMore
            } else {
                Phase::ShowingChart
            },
            selection: Some(selection.clone()),
            chart_type: args.chart_type,
            ..current.clone()
        });
        if !load_more {
            return Outcome::SelectionChanged;
        }

        tracing::debug!(indi = %selection.id, "loading more from WikiTree");
        let result = self
            .services
            .loader
            .fetch_wikitree(selection.id.clone(), self.config.locale.clone(), args.authcode.clone())
            .await
            .and_then(|dataset| with_selection(dataset, args));

        let current = self.state();
        match result {
            Ok((dataset, selection)) => {
                self.publish(AppState {
                    phase: Phase::ShowingChart,
                    data: Some(Arc::new(dataset)),
                    selection: Some(selection),
                    ..(*current).clone()
                });
                Outcome::LoadedMore
            }
            Err(err) => {
                tracing::warn!(error = %err, "loading more from WikiTree failed");
                self.publish(AppState {
                    phase: Phase::ShowingChart,
                    error_popup: Some(format!("Failed to load data from WikiTree. {err}")),
                    ..(*current).clone()
                });
                Outcome::LoadMoreFailed
            }
        }
    }

    async fn load_embedded(&mut self, gedcom: String) -> Outcome {
        let result = self
            .services
            .loader
            .parse_uploaded(String::new(), gedcom, ImageMap::new())
            .await
            .and_then(|dataset| with_selection(dataset, &Arguments::default()));

        let current = self.state();
        match result {
            Ok((dataset, selection)) => {
                self.services
                    .analytics
                    .event("embedded_file_loaded", dataset.software(), None);
                self.publish(AppState {
                    phase: Phase::ShowingChart,
                    data: Some(Arc::new(dataset)),
                    selection: Some(selection),
                    error: None,
                    ..(*current).clone()
                });
                Outcome::Loaded
            }
            Err(err) => {
                tracing::warn!(error = %err, "embedded payload failed to load");
                self.services.analytics.event("embedded_file_error", None, None);
                self.publish(AppState {
                    phase: Phase::Error,
                    error: Some(err.to_string()),
                    ..(*current).clone()
                });
                Outcome::LoadFailed
            }
        }
    }
}

fn with_selection(dataset: Dataset, args: &Arguments) -> Result<(Dataset, Selection), LoadError> {
    let selection = compute_selection(&dataset, args.indi.as_ref(), args.generation)
        .ok_or_else(|| LoadError::new(NO_INDIVIDUALS))?;
    Ok((dataset, selection))
}
