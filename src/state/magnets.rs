//! Magnetic cursor registrations for on-screen elements.
//!
//! Elements register the first time they are mounted, in the order they are
//! offered, which makes the navigation (offered first) win overlaps. Mounted
//! elements that are scrolled away or covered keep their registration with
//! unknown bounds; unmounted elements are deregistered.

use crate::interaction::{Bounds, MagneticCursor, TargetHandle, TargetKind};
use crate::view_state::ElementKey;
use std::collections::HashMap;
use tracing::trace;

/// Magnet kind and strength for elements that attract the cursor.
pub fn magnet_for(key: ElementKey) -> Option<(TargetKind, f64)> {
    match key {
        ElementKey::NavItem(_) | ElementKey::MenuItem(_) => Some((TargetKind::Nav, 0.25)),
        ElementKey::ProjectCard(_) => Some((TargetKind::Card, 0.15)),
        ElementKey::ContactLink(_) => Some((TargetKind::Link, 0.3)),
        ElementKey::ModalClose => Some((TargetKind::Button, 0.5)),
        ElementKey::ComposeButton => Some((TargetKind::Cta, 0.3)),
        ElementKey::FormSend => Some((TargetKind::Button, 0.5)),
        _ => None,
    }
}

/// Maps mounted page elements to their magnetic cursor registrations.
#[derive(Debug, Clone, Default)]
pub struct MagnetRegistry {
    handles: HashMap<ElementKey, TargetHandle>,
}

impl MagnetRegistry {
    /// Bring registrations in line with the currently mounted elements.
    pub fn sync(&mut self, cursor: &mut MagneticCursor, mounted: &[(ElementKey, Option<Bounds>)]) {
        for &(key, bounds) in mounted {
            let Some((kind, strength)) = magnet_for(key) else {
                continue;
            };
            match self.handles.get(&key) {
                Some(&handle) => cursor.set_target_bounds(handle, bounds),
                None => {
                    let handle = cursor.register_target(kind, strength, bounds);
                    trace!(?key, ?kind, "Registered magnetic target");
                    self.handles.insert(key, handle);
                }
            }
        }

        let gone: Vec<ElementKey> = self
            .handles
            .keys()
            .filter(|key| !mounted.iter().any(|(k, _)| k == *key))
            .copied()
            .collect();
        for key in gone {
            if let Some(handle) = self.handles.remove(&key) {
                cursor.deregister(handle);
                trace!(?key, "Deregistered magnetic target");
            }
        }
    }

    /// Element registered under `handle`.
    pub fn key_for(&self, handle: TargetHandle) -> Option<ElementKey> {
        self.handles
            .iter()
            .find(|(_, h)| **h == handle)
            .map(|(key, _)| *key)
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Forget every handle; the cursor has already dropped its targets.
    pub fn clear(&mut self) {
        self.handles.clear();
    }
}
