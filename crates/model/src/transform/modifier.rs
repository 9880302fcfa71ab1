//! Value-rewrite rules applied to a freshly loaded image.
//!
//! A modifier is keyed by a trigger substring. Every column value that
//! contains the trigger is replaced by whatever the modifier returns for
//! `(table, column, value)`. Typical use is swapping placeholders such as
//! `{{now}}` for values only known at test time.

use crate::records::image::Image;
use indexmap::IndexMap;
use std::fmt;
use tracing::trace;

/// `(table, column, value) -> new value`
pub type Modifier = Box<dyn Fn(&str, &str, &str) -> String + Send + Sync>;

/// Modifiers run in registration order; each one sees the value as left by
/// the modifiers registered before it.
#[derive(Default)]
pub struct ModifiersList {
    modifiers: IndexMap<String, Modifier>,
}

impl ModifiersList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration.
    pub fn add<F>(mut self, trigger: &str, modifier: F) -> Self
    where
        F: Fn(&str, &str, &str) -> String + Send + Sync + 'static,
    {
        self.insert(trigger, modifier);
        self
    }

    /// Registers a modifier, replacing any previous one with the same trigger.
    pub fn insert<F>(&mut self, trigger: &str, modifier: F)
    where
        F: Fn(&str, &str, &str) -> String + Send + Sync + 'static,
    {
        self.modifiers.insert(trigger.to_string(), Box::new(modifier));
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    pub fn triggers(&self) -> impl Iterator<Item = &str> {
        self.modifiers.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Modifier)> {
        self.modifiers.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn apply(&self, image: &mut Image) {
        if self.is_empty() {
            return;
        }

        for row in image.iter_mut() {
            let table = row.table.as_str();
            for (column, value) in row.data.iter_mut() {
                for (trigger, modifier) in &self.modifiers {
                    if value.contains(trigger.as_str()) {
                        let rewritten = modifier(table, column, value);
                        trace!(table, column, trigger, from = %value, to = %rewritten, "Modifier applied");
                        *value = rewritten;
                    }
                }
            }
        }
    }
}

impl fmt::Debug for ModifiersList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifiersList")
            .field("triggers", &self.modifiers.keys().collect::<Vec<_>>())
            .finish()
    }
}
