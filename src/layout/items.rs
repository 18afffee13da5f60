use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::items::{ID_PREFIX, MAX_ITEMS, MIN_ITEMS};

/// Placeholder element positioned by the flex container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutItem {
    pub id: String,
    pub label: String,
    /// Per-item CSS overrides (property → value)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_styles: Option<BTreeMap<String, String>>,
}

impl LayoutItem {
    /// Item with id derived from `serial` and label from its 1-based `ordinal`
    pub fn numbered(serial: u64, ordinal: usize) -> Self {
        Self {
            id: format!("{ID_PREFIX}{serial}"),
            label: ordinal.to_string(),
            custom_styles: None,
        }
    }

    pub fn set_style(&mut self, property: &str, value: &str) {
        self.custom_styles
            .get_or_insert_with(BTreeMap::new)
            .insert(property.to_string(), value.to_string());
    }

    /// Overrides as an inline `style` value, None when there are none
    pub fn inline_style(&self) -> Option<String> {
        let styles = self.custom_styles.as_ref().filter(|s| !s.is_empty())?;
        Some(
            styles
                .iter()
                .map(|(property, value)| format!("{property}: {value};"))
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}

/// Bounds the item controls enforce on the sequence length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemLimits {
    pub min: usize,
    pub max: usize,
}

impl ItemLimits {
    pub fn can_add(&self, len: usize) -> bool {
        len < self.max
    }

    pub fn can_remove(&self, len: usize) -> bool {
        len > self.min
    }
}

impl Default for ItemLimits {
    fn default() -> Self {
        Self {
            min: MIN_ITEMS,
            max: MAX_ITEMS,
        }
    }
}

/// Ordered item list
///
/// Labels come from the position an item is appended at. Ids come from a
/// serial that only moves forward, so an id is never handed out twice within
/// one sequence even after trailing removals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSequence {
    items: Vec<LayoutItem>,
    next_serial: u64,
}

impl ItemSequence {
    /// `count` fresh items labeled 1..=count
    pub fn with_count(count: usize) -> Self {
        let mut sequence = Self {
            items: Vec::with_capacity(count),
            next_serial: 1,
        };
        for _ in 0..count {
            sequence.push_next();
        }
        sequence
    }

    /// Append one item labeled with the new length
    pub fn push_next(&mut self) -> &LayoutItem {
        let ordinal = self.items.len() + 1;
        self.items.push(LayoutItem::numbered(self.next_serial, ordinal));
        self.next_serial += 1;
        &self.items[ordinal - 1]
    }

    /// Set a style override on the item at `index`; false if there is none
    pub fn style_item(&mut self, index: usize, property: &str, value: &str) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.set_style(property, value);
                true
            }
            None => false,
        }
    }

    /// Remove the trailing item
    pub fn pop(&mut self) -> Option<LayoutItem> {
        self.items.pop()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn as_slice(&self) -> &[LayoutItem] {
        &self.items
    }
}
