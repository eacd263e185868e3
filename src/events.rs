//! View events and the listener registry that dispatches them.

use crate::core::geo::LatLngBounds;
use crate::prelude::HashMap;
use crate::view::tabs::ViewTab;
use std::collections::VecDeque;

/// Keyboard key codes the view reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    Enter,
    Other(u32),
}

/// Events emitted by the view modules
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// Map pan/zoom has come to rest
    ViewSettled { bounds: LatLngBounds },
    /// A refresh produced a new marker layer
    GeoRefreshed { token: u64, markers: usize },
    /// The current query has no geo results; geo/grid stay hidden
    GeoExhausted,
    /// A tag was removed from the strip
    TagRemoved { value: String },
    /// The clear-all action ran
    TagsCleared,
    /// The form needs resubmitting
    Resubmit,
    /// The side panel was opened or closed
    PanelToggled { open: bool },
    /// The active result view changed
    TabChanged { tab: ViewTab },
}

impl ViewEvent {
    /// Listener-registry key for this event
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::ViewSettled { .. } => "viewsettled",
            Self::GeoRefreshed { .. } => "georefreshed",
            Self::GeoExhausted => "geoexhausted",
            Self::TagRemoved { .. } => "tagremoved",
            Self::TagsCleared => "tagscleared",
            Self::Resubmit => "resubmit",
            Self::PanelToggled { .. } => "paneltoggled",
            Self::TabChanged { .. } => "tabchanged",
        }
    }
}

/// Event listener callback type
pub type EventCallback = Box<dyn Fn(&ViewEvent) + Send + Sync>;

/// Event management system for the search view
#[derive(Default)]
pub struct EventManager {
    /// Event listeners by event name
    listeners: HashMap<String, Vec<EventCallback>>,
    /// Event queue for processing
    event_queue: VecDeque<ViewEvent>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event listener
    pub fn on<F>(&mut self, event_name: &str, callback: F)
    where
        F: Fn(&ViewEvent) + Send + Sync + 'static,
    {
        self.listeners
            .entry(event_name.to_string())
            .or_default()
            .push(Box::new(callback));
    }

    /// Emit an event to the queue
    pub fn emit(&mut self, event: ViewEvent) {
        self.event_queue.push_back(event);
    }

    /// Process all queued events, invoking listeners, and return them
    pub fn process_events(&mut self) -> Vec<ViewEvent> {
        let events: Vec<_> = self.event_queue.drain(..).collect();

        for event in &events {
            if let Some(callbacks) = self.listeners.get(event.event_name()) {
                for callback in callbacks {
                    callback(event);
                }
            }
        }

        events
    }

    /// Number of queued, unprocessed events
    pub fn pending_events(&self) -> usize {
        self.event_queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_listeners_fire_on_matching_events() {
        let mut manager = EventManager::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        manager.on("geoexhausted", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        manager.emit(ViewEvent::GeoExhausted);
        manager.emit(ViewEvent::Resubmit);
        assert_eq!(manager.pending_events(), 2);

        let processed = manager.process_events();
        assert_eq!(processed.len(), 2);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(manager.pending_events(), 0);
    }

    #[test]
    fn test_event_names() {
        assert_eq!(ViewEvent::GeoExhausted.event_name(), "geoexhausted");
        assert_eq!(
            ViewEvent::TagRemoved {
                value: "x".to_string()
            }
            .event_name(),
            "tagremoved"
        );
    }
}
