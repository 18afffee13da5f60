//! Editor state controller
//!
//! Owns the live property set and item sequence. Surfaces read through the
//! accessors and change state only through the mutation methods, each of
//! which notifies subscribers synchronously before returning.

use tracing::{debug, info};

use crate::codegen::ExportSnapshot;
use crate::layout::{
    FlexboxProperties, ItemLimits, ItemSequence, LayoutItem, LayoutPreset, PropertyValue,
};

/// What changed, delivered to subscribers after each mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    PropertyChanged(PropertyValue),
    ItemAdded { id: String },
    ItemRemoved { id: String },
    PresetSelected { id: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&EditorEvent)>;

pub struct Editor {
    properties: FlexboxProperties,
    items: ItemSequence,
    preset: &'static LayoutPreset,
    limits: ItemLimits,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl Editor {
    /// Editor seeded from `preset`
    pub fn new(preset: &'static LayoutPreset, limits: ItemLimits) -> Self {
        Self {
            properties: preset.properties,
            items: seeded_items(preset),
            preset,
            limits,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn properties(&self) -> &FlexboxProperties {
        &self.properties
    }

    pub fn items(&self) -> &[LayoutItem] {
        self.items.as_slice()
    }

    pub fn selected_preset(&self) -> &'static LayoutPreset {
        self.preset
    }

    /// Name shown in the export dialog and used for the component name
    pub fn layout_name(&self) -> &'static str {
        self.preset.name
    }

    pub fn limits(&self) -> ItemLimits {
        self.limits
    }

    pub fn can_add_item(&self) -> bool {
        self.limits.can_add(self.items.len())
    }

    pub fn can_remove_item(&self) -> bool {
        self.limits.can_remove(self.items.len())
    }

    pub fn snapshot(&self) -> ExportSnapshot<'_> {
        ExportSnapshot {
            properties: &self.properties,
            items: self.items.as_slice(),
            layout_name: self.layout_name(),
        }
    }

    /// Replace one property. Observers hear about it only if the value changed.
    pub fn set_property(&mut self, value: PropertyValue) {
        if !self.properties.set(value) {
            debug!(property = %value.key(), value = %value, "Property unchanged");
            return;
        }
        info!(property = %value.key(), value = %value, "Property changed");
        self.notify(EditorEvent::PropertyChanged(value));
    }

    /// Append an item; no-op at the item maximum
    pub fn add_item(&mut self) -> bool {
        if !self.can_add_item() {
            debug!(count = self.items.len(), max = self.limits.max, "Item maximum reached, not adding");
            return false;
        }
        let id = self.items.push_next().id.clone();
        info!(id = %id, count = self.items.len(), "Item added");
        self.notify(EditorEvent::ItemAdded { id });
        true
    }

    /// Remove the trailing item; no-op at the item minimum
    pub fn remove_item(&mut self) -> bool {
        if !self.can_remove_item() {
            debug!(count = self.items.len(), min = self.limits.min, "Item minimum reached, not removing");
            return false;
        }
        let Some(removed) = self.items.pop() else {
            return false;
        };
        info!(id = %removed.id, count = self.items.len(), "Item removed");
        self.notify(EditorEvent::ItemRemoved { id: removed.id });
        true
    }

    /// Full reset to `preset`: its properties and `item_count` fresh items
    pub fn select_preset(&mut self, preset: &'static LayoutPreset) {
        self.preset = preset;
        self.properties = preset.properties;
        self.items = seeded_items(preset);
        info!(preset = %preset.id, items = preset.item_count, "Preset selected");
        self.notify(EditorEvent::PresetSelected { id: preset.id });
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&EditorEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    fn notify(&mut self, event: EditorEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&event);
        }
    }
}

fn seeded_items(preset: &LayoutPreset) -> ItemSequence {
    let mut items = ItemSequence::with_count(preset.item_count);
    for &(index, property, value) in preset.item_styles {
        items.style_item(index, property, value);
    }
    items
}
