// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kinchart-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinchart and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Recording collaborators for controller tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use serde_json::Value;
use tokio::sync::oneshot;

use crate::embed::{EmbeddedMessage, HostFrame, Inbox, Subscription};
use crate::location::Location;
use crate::model::{Dataset, ImageMap, IndiId};
use crate::services::{Analytics, ChartExporter, ExportError, ExportFormat, LocalBoxFuture, Navigator};
use crate::source::{DataLoader, LoadError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LoaderCall {
    Uploaded { hash: String, gedcom: String, images: usize },
    Url { url: String, handle_cors: bool },
    WikiTree { id: String, locale: String, authcode: Option<String> },
}

/// Answers every load from a queue of scripted outcomes, in call order.
#[derive(Debug, Default)]
pub(crate) struct ScriptedLoader {
    responses: RefCell<VecDeque<Result<Dataset, String>>>,
    calls: RefCell<Vec<LoaderCall>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl ScriptedLoader {
    pub(crate) fn respond_ok(&self, dataset: Dataset) -> &Self {
        self.responses.borrow_mut().push_back(Ok(dataset));
        self
    }

    pub(crate) fn respond_err(&self, message: &str) -> &Self {
        self.responses.borrow_mut().push_back(Err(message.to_owned()));
        self
    }

    /// Keeps the next load pending until the returned sender fires (or is dropped).
    pub(crate) fn hold_next(&self) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        *self.gate.borrow_mut() = Some(gate);
        release
    }

    pub(crate) fn calls(&self) -> Vec<LoaderCall> {
        self.calls.borrow().clone()
    }

    fn answer(&self, call: LoaderCall) -> LocalBoxFuture<'_, Result<Dataset, LoadError>> {
        self.calls.borrow_mut().push(call);
        let response = self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err("no scripted response".to_owned()));
        let gate = self.gate.borrow_mut().take();
        Box::pin(async move {
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            tokio::task::yield_now().await;
            response.map_err(LoadError::new)
        })
    }
}

impl DataLoader for ScriptedLoader {
    fn parse_uploaded(
        &self,
        hash: String,
        gedcom: String,
        images: ImageMap,
    ) -> LocalBoxFuture<'_, Result<Dataset, LoadError>> {
        self.answer(LoaderCall::Uploaded { hash, gedcom, images: images.len() })
    }

    fn fetch_from_url(
        &self,
        url: String,
        handle_cors: bool,
    ) -> LocalBoxFuture<'_, Result<Dataset, LoadError>> {
        self.answer(LoaderCall::Url { url, handle_cors })
    }

    fn fetch_wikitree(
        &self,
        id: IndiId,
        locale: String,
        authcode: Option<String>,
    ) -> LocalBoxFuture<'_, Result<Dataset, LoadError>> {
        self.answer(LoaderCall::WikiTree { id: id.into_string(), locale, authcode })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AnalyticsEvent {
    pub(crate) name: String,
    pub(crate) label: Option<String>,
    pub(crate) value: Option<u64>,
}

#[derive(Debug, Default)]
pub(crate) struct RecordingAnalytics {
    events: RefCell<Vec<AnalyticsEvent>>,
}

impl RecordingAnalytics {
    pub(crate) fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.borrow().clone()
    }

    pub(crate) fn names(&self) -> Vec<String> {
        self.events.borrow().iter().map(|event| event.name.clone()).collect()
    }
}

impl Analytics for RecordingAnalytics {
    fn event(&self, name: &str, label: Option<&str>, value: Option<u64>) {
        self.events.borrow_mut().push(AnalyticsEvent {
            name: name.to_owned(),
            label: label.map(str::to_owned),
            value,
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NavigationCall {
    Push(String),
    Replace(String),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingNavigator {
    calls: RefCell<Vec<NavigationCall>>,
    last: RefCell<Option<Location>>,
}

impl RecordingNavigator {
    pub(crate) fn calls(&self) -> Vec<NavigationCall> {
        self.calls.borrow().clone()
    }

    pub(crate) fn last_location(&self) -> Option<Location> {
        self.last.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, location: Location) {
        self.calls.borrow_mut().push(NavigationCall::Push(location.href()));
        *self.last.borrow_mut() = Some(location);
    }

    fn replace(&self, location: Location) {
        self.calls.borrow_mut().push(NavigationCall::Replace(location.href()));
        *self.last.borrow_mut() = Some(location);
    }
}

/// Host frame that records outbound messages and hands inbound ones to the registered inbox.
#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    posted: RefCell<Vec<EmbeddedMessage>>,
    inbox: RefCell<Option<Inbox>>,
    listen_calls: RefCell<usize>,
    cancelled: Rc<Cell<bool>>,
}

impl RecordingHost {
    pub(crate) fn posted(&self) -> Vec<EmbeddedMessage> {
        self.posted.borrow().clone()
    }

    pub(crate) fn listen_calls(&self) -> usize {
        *self.listen_calls.borrow()
    }

    pub(crate) fn listener_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Simulates the parent frame posting `value`. Returns false when nobody listens.
    pub(crate) fn deliver(&self, value: Value) -> bool {
        self.inbox.borrow().as_ref().is_some_and(|inbox| inbox.deliver(value))
    }
}

impl HostFrame for RecordingHost {
    fn post_to_parent(&self, message: &EmbeddedMessage) {
        self.posted.borrow_mut().push(message.clone());
    }

    fn listen(&self, inbox: Inbox) -> Subscription {
        *self.listen_calls.borrow_mut() += 1;
        *self.inbox.borrow_mut() = Some(inbox);
        let cancelled = self.cancelled.clone();
        Subscription::new(move || cancelled.set(true))
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingExporter {
    prints: RefCell<usize>,
    exports: RefCell<Vec<ExportFormat>>,
    fail_with: RefCell<Option<String>>,
}

impl RecordingExporter {
    pub(crate) fn fail_with(&self, message: &str) {
        *self.fail_with.borrow_mut() = Some(message.to_owned());
    }

    pub(crate) fn prints(&self) -> usize {
        *self.prints.borrow()
    }

    pub(crate) fn exports(&self) -> Vec<ExportFormat> {
        self.exports.borrow().clone()
    }
}

impl ChartExporter for RecordingExporter {
    fn print(&self) {
        *self.prints.borrow_mut() += 1;
    }

    fn export(&self, format: ExportFormat) -> LocalBoxFuture<'_, Result<(), ExportError>> {
        self.exports.borrow_mut().push(format);
        let outcome = self.fail_with.borrow().clone();
        Box::pin(async move {
            match outcome {
                Some(message) => Err(ExportError::new(message)),
                None => Ok(()),
            }
        })
    }
}
