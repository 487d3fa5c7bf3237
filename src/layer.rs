//! Layer masks
//!
//! Every node lives on one of 32 layers. A [`LayerMask`] selects a set of
//! layers for filtering - render passes, sensor queries, trigger groups.
//! Bit `1 << n` selects layer `n`.

use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

use crate::scene::{NodeId, Scene};

/// Bit set over scene layers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Matches no layer.
    pub const NONE: LayerMask = LayerMask(0);
    /// Matches every layer.
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    /// Mask selecting a single layer (0..32).
    pub fn layer(layer: u8) -> Self {
        assert!(layer < 32, "layer index out of range: {layer}");
        LayerMask(1 << layer)
    }

    /// This mask widened by one more layer.
    pub fn with(self, layer: u8) -> Self {
        self | LayerMask::layer(layer)
    }

    /// Whether the mask selects `layer`.
    pub fn contains(self, layer: u8) -> bool {
        assert!(layer < 32, "layer index out of range: {layer}");
        self.0 & (1 << layer) != 0
    }

    /// Whether the node's layer is selected by this mask.
    pub fn matches(self, scene: &Scene, node: NodeId) -> bool {
        self.contains(scene.layer(node))
    }
}

impl BitOr for LayerMask {
    type Output = LayerMask;
    fn bitor(self, other: LayerMask) -> LayerMask {
        LayerMask(self.0 | other.0)
    }
}

impl BitOrAssign for LayerMask {
    fn bitor_assign(&mut self, other: LayerMask) {
        self.0 |= other.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_layer_mask() {
        let mask = LayerMask::layer(3);
        assert_eq!(mask.0, 1 << 3);
        assert!(mask.contains(3));
        for layer in 0..32u8 {
            if layer != 3 {
                assert!(!mask.contains(layer));
            }
        }
    }

    #[test]
    fn test_mask_composition() {
        let mut mask = LayerMask::layer(0) | LayerMask::layer(4);
        mask |= LayerMask::layer(31);
        assert!(mask.contains(0));
        assert!(mask.contains(4));
        assert!(mask.contains(31));
        assert!(!mask.contains(5));
    }

    #[test]
    fn test_matches_node_layer() {
        let mut scene = Scene::new();
        let node = scene.spawn("Node");
        scene.set_layer(node, 3);

        assert!(LayerMask::layer(3).matches(&scene, node));
        assert!(!LayerMask::layer(2).matches(&scene, node));
        assert!(LayerMask::ALL.matches(&scene, node));
        assert!(!LayerMask::NONE.matches(&scene, node));
    }
}
