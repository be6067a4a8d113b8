//! Value-deduplicating store for format models.
//!
//! Both style writers need the same thing: hand out one stable index per
//! distinct format and keep declaration order for output. The generator
//! specific tables layer their id schemes on top of [`FormatRegistry`].

use crate::numfmt::FormatModel;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Insertion-ordered set of format models.
///
/// Registering a model equal to one already present returns the existing
/// index, so identical formats share a single declaration.
#[derive(Debug, Clone, Default)]
pub struct FormatRegistry {
    /// Unique models (index -> model)
    models: Vec<FormatModel>,
    /// Model lookup (model -> index)
    index: HashMap<FormatModel, usize>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model and return its index.
    ///
    /// If an equal model has already been registered, returns its index.
    pub fn register(&mut self, model: FormatModel) -> usize {
        if let Some(&index) = self.index.get(&model) {
            return index;
        }

        let index = self.models.len();
        log::debug!("Registered number format #{}", index);
        self.models.push(model.clone());
        self.index.insert(model, index);
        index
    }

    /// Index of a model equal to `model`, without registering it.
    pub fn find(&self, model: &FormatModel) -> Option<usize> {
        self.index.get(model).copied()
    }

    pub fn get(&self, index: usize) -> Option<&FormatModel> {
        self.models.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Registered models in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &FormatModel)> {
        self.models.iter().enumerate()
    }
}

/// A [`FormatRegistry`] that can be shared between threads.
///
/// Registration is serialised behind a `parking_lot` mutex, so concurrent
/// writers never hand out two indices for the same format.
#[derive(Debug, Clone, Default)]
pub struct SharedFormatRegistry {
    inner: Arc<Mutex<FormatRegistry>>,
}

impl SharedFormatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model and return its index.
    pub fn register(&self, model: FormatModel) -> usize {
        self.inner.lock().register(model)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Copy of the current registry contents.
    pub fn snapshot(&self) -> FormatRegistry {
        self.inner.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numfmt::parse;

    #[test]
    fn test_register_dedups_by_value() {
        let mut registry = FormatRegistry::new();
        let a = registry.register(parse("0.00").unwrap());
        let b = registry.register(parse("#,##0").unwrap());
        let c = registry.register(parse("0.00").unwrap());

        assert_eq!((a, b, c), (0, 1, 0));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find(&parse("#,#0").unwrap()), Some(1));
        assert_eq!(registry.find(&parse("0").unwrap()), None);
    }

    #[test]
    fn test_iter_keeps_registration_order() {
        let mut registry = FormatRegistry::new();
        for code in ["@", "0%", "0"] {
            registry.register(parse(code).unwrap());
        }
        let first_parts: Vec<_> = registry
            .iter()
            .map(|(index, model)| (index, model.primary().parts().len()))
            .collect();
        assert_eq!(first_parts, vec![(0, 1), (1, 2), (2, 1)]);
    }

    #[test]
    fn test_shared_registry_across_threads() {
        let registry = SharedFormatRegistry::new();
        let codes = ["0", "0.00", "#,##0.00", "0%"];

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    codes
                        .iter()
                        .map(|code| registry.register(parse(code).unwrap()))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let results: Vec<Vec<usize>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(registry.len(), codes.len());
        // Every thread sees the same index for the same format
        for result in &results[1..] {
            assert_eq!(result, &results[0]);
        }
        let snapshot = registry.snapshot();
        for (code, index) in codes.iter().zip(&results[0]) {
            assert_eq!(snapshot.find(&parse(code).unwrap()), Some(*index));
        }
    }
}
