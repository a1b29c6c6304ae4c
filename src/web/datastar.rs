//! Server-sent events in the shape the Datastar front-end expects.
//!
//! Each response carries a single `datastar-patch-elements` event telling the
//! client which element to patch and how.

use axum::response::sse::{Event, Sse};
use futures::stream::{self, Stream};
use std::convert::Infallible;

pub const PATCH_ELEMENTS_EVENT: &str = "datastar-patch-elements";

/// How the patched HTML is merged into the target element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchMode {
    /// Replace the target element itself
    Outer,
    /// Replace the target element's children
    Inner,
}

impl PatchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            PatchMode::Outer => "outer",
            PatchMode::Inner => "inner",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchElements {
    pub selector: String,
    pub mode: PatchMode,
    pub elements: String,
}

impl PatchElements {
    pub fn new(selector: impl Into<String>, mode: PatchMode, elements: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            mode,
            elements: elements.into(),
        }
    }

    /// The `data:` payload, one directive per line
    pub fn data(&self) -> String {
        let mut lines = vec![
            format!("selector {}", self.selector),
            format!("mode {}", self.mode.as_str()),
        ];
        lines.extend(
            self.elements
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| format!("elements {line}")),
        );
        lines.join("\n")
    }

    pub fn into_event(self) -> Event {
        Event::default().event(PATCH_ELEMENTS_EVENT).data(self.data())
    }

    /// A one-shot event stream carrying this patch
    pub fn into_sse(self) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
        Sse::new(stream::once(async move { Ok(self.into_event()) }))
    }
}
