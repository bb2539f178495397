// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kinchart-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinchart and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Cross-frame protocol for running inside a host page.
//!
//! The channel is untyped and unrestricted by origin: inbound values are JSON objects with a
//! `message` tag; anything that does not match a known shape is ignored.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::mpsc;

use crate::app::Trigger;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "message", rename_all = "snake_case")]
pub enum EmbeddedMessage {
    /// Parent frame finished loading and may have missed our `Ready`.
    ParentReady,
    /// We are listening.
    Ready,
    /// GEDCOM contents pushed by the parent.
    Gedcom {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        gedcom: Option<String>,
    },
}

impl EmbeddedMessage {
    pub fn from_value(value: &Value) -> Option<Self> {
        Self::deserialize(value).ok()
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// What the controller should do with an inbound value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    ResendReady,
    LoadGedcom(String),
    Ignore,
}

pub fn classify(value: &Value) -> Inbound {
    match EmbeddedMessage::from_value(value) {
        Some(EmbeddedMessage::ParentReady) => Inbound::ResendReady,
        Some(EmbeddedMessage::Gedcom {
            gedcom: Some(gedcom),
        }) if !gedcom.is_empty() => Inbound::LoadGedcom(gedcom),
        _ => Inbound::Ignore,
    }
}

/// The embedding page, as seen from inside the frame.
pub trait HostFrame {
    fn post_to_parent(&self, message: &EmbeddedMessage);

    /// Starts forwarding messages from the parent to `inbox`.
    fn listen(&self, inbox: Inbox) -> Subscription;
}

/// Entry point through which the host frame hands messages to a controller.
#[derive(Debug, Clone)]
pub struct Inbox {
    tx: mpsc::UnboundedSender<Trigger>,
}

impl Inbox {
    pub(crate) fn new(tx: mpsc::UnboundedSender<Trigger>) -> Self {
        Self { tx }
    }

    /// Queues `value` for the controller. Returns false once the controller is gone.
    pub fn deliver(&self, value: Value) -> bool {
        self.tx.send(Trigger::Message(value)).is_ok()
    }
}

/// A live listener registration on the host frame.
///
/// Dropping a subscription leaves the listener registered; call [`Subscription::cancel`] to
/// remove it.
pub struct Subscription {
    on_cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(on_cancel: impl FnOnce() + 'static) -> Self {
        Self {
            on_cancel: Some(Box::new(on_cancel)),
        }
    }

    /// A registration that cannot be removed.
    pub fn detached() -> Self {
        Self { on_cancel: None }
    }

    pub fn cancel(mut self) {
        if let Some(on_cancel) = self.on_cancel.take() {
            on_cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("cancellable", &self.on_cancel.is_some())
            .finish()
    }
}

/// Host for pages that are never embedded.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHostFrame;

impl HostFrame for NoHostFrame {
    fn post_to_parent(&self, message: &EmbeddedMessage) {
        tracing::warn!(?message, "no parent frame to post to");
    }

    fn listen(&self, _inbox: Inbox) -> Subscription {
        Subscription::detached()
    }
}
