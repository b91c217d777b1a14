use egui::Vec2;
use log::{trace, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::EngineConfig;
use crate::id::ObjectId;

/// Translation, scale and rotation applied on top of an object's base layout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TransformState {
    /// Offset in px from the base layout anchor
    pub translation: Vec2,
    /// Uniform scale factor (1.0 = original size)
    pub scale: f32,
    /// Rotation in degrees, always in [0, 360)
    pub rotation: f32,
}

impl Default for TransformState {
    fn default() -> Self {
        const IDENTITY: TransformState = TransformState {
            translation: Vec2::ZERO,
            scale: 1.0,
            rotation: 0.0,
        };
        IDENTITY
    }
}

impl TransformState {
    pub fn identity() -> Self {
        Self::default()
    }

    /// Scale as a whole percentage, for display
    pub fn scale_percent(&self) -> i32 {
        (self.scale * 100.0).round() as i32
    }

    /// Rotation rounded to whole degrees, for display
    pub fn rotation_degrees(&self) -> i32 {
        (self.rotation.round() as i32).rem_euclid(360)
    }
}

/// Wraps any finite angle into [0, 360).
pub fn normalize_degrees(raw: f32) -> f32 {
    let wrapped = raw.rem_euclid(360.0);
    // rem_euclid can round tiny negatives up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Owns the transform of every object present on a surface.
///
/// Entries are created lazily; reading an absent id yields the identity.
#[derive(Debug, Clone)]
pub struct TransformModel {
    transforms: HashMap<ObjectId, TransformState>,
    scale_min: f32,
    scale_max: f32,
}

impl Default for TransformModel {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl TransformModel {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            transforms: HashMap::new(),
            scale_min: config.scale_min,
            scale_max: config.scale_max,
        }
    }

    pub fn get(&self, id: ObjectId) -> TransformState {
        self.transforms.get(&id).copied().unwrap_or_default()
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.transforms.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Creates the identity entry for `id` if it does not exist yet.
    pub fn ensure(&mut self, id: ObjectId) {
        self.transforms.entry(id).or_default();
    }

    fn entry(&mut self, id: ObjectId) -> &mut TransformState {
        self.transforms.entry(id).or_default()
    }

    pub fn translate_by(&mut self, id: ObjectId, dx: f32, dy: f32) {
        if !(dx.is_finite() && dy.is_finite()) {
            warn!("Ignoring non-finite translation ({dx}, {dy}) for {id}");
            return;
        }
        let state = self.entry(id);
        state.translation += Vec2::new(dx, dy);
        trace!("{id} translated to {:?}", state.translation);
    }

    pub fn set_scale(&mut self, id: ObjectId, raw: f32) {
        if !raw.is_finite() {
            warn!("Ignoring non-finite scale {raw} for {id}");
            return;
        }
        let clamped = raw.clamp(self.scale_min, self.scale_max);
        self.entry(id).scale = clamped;
        trace!("{id} scale set to {clamped}");
    }

    pub fn adjust_scale(&mut self, id: ObjectId, delta: f32) {
        let current = self.get(id).scale;
        self.set_scale(id, current + delta);
    }

    pub fn set_rotation(&mut self, id: ObjectId, raw_degrees: f32) {
        if !raw_degrees.is_finite() {
            warn!("Ignoring non-finite rotation {raw_degrees} for {id}");
            return;
        }
        let normalized = normalize_degrees(raw_degrees);
        self.entry(id).rotation = normalized;
        trace!("{id} rotation set to {normalized}");
    }

    pub fn adjust_rotation(&mut self, id: ObjectId, delta_degrees: f32) {
        let current = self.get(id).rotation;
        self.set_rotation(id, current + delta_degrees);
    }

    pub fn reset(&mut self, id: ObjectId) {
        *self.entry(id) = TransformState::identity();
    }

    pub fn remove(&mut self, id: ObjectId) {
        self.transforms.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_both_directions() {
        assert_eq!(normalize_degrees(-30.0), 330.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert_eq!(normalize_degrees(-1e-7), 0.0);
    }

    #[test]
    fn readouts_round() {
        let state = TransformState {
            translation: Vec2::ZERO,
            scale: 1.234,
            rotation: 359.6,
        };
        assert_eq!(state.scale_percent(), 123);
        assert_eq!(state.rotation_degrees(), 0);
    }
}
