//! Scene graph
//!
//! [`Scene`] owns an arena of named nodes (parent/children links, an active
//! flag, a layer index) plus per-type component columns. Nodes are addressed
//! by generational [`NodeId`]s, so an id held across a despawn is detected
//! instead of dangling.
//!
//! The component query helpers (lookup by type over one node, a subtree,
//! or an ancestor chain, with reusable output buffers) are implemented in
//! the `query` submodule as methods on [`Scene`].
//!
//! Operations that receive a dead or null id panic with a message.

mod component;
mod node;
mod query;

pub use component::Component;
pub use node::NodeId;
pub use query::CollectOptions;

use component::ComponentRegistry;
use node::NodeAllocator;

/// Per-node record: identity, flags, and tree links.
struct NodeData {
    name: String,
    active: bool,
    layer: u8,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// The scene hierarchy: nodes, links, and attached components.
pub struct Scene {
    allocator: NodeAllocator,
    /// Sparse records indexed by NodeId.index()
    nodes: Vec<Option<NodeData>>,
    components: ComponentRegistry,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            allocator: NodeAllocator::new(),
            nodes: Vec::new(),
            components: ComponentRegistry::default(),
        }
    }

    // =========================================================================
    // Node lifecycle
    // =========================================================================

    /// Create a root node. New nodes start active, on layer 0.
    pub fn spawn(&mut self, name: &str) -> NodeId {
        let id = self.allocator.allocate();
        let idx = id.index() as usize;
        if idx >= self.nodes.len() {
            self.nodes.resize_with(idx + 1, || None);
        }
        self.nodes[idx] = Some(NodeData {
            name: name.to_string(),
            active: true,
            layer: 0,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Create a node as the last child of `parent`.
    pub fn spawn_child(&mut self, parent: NodeId, name: &str) -> NodeId {
        let id = self.spawn(name);
        self.add_child(parent, id);
        id
    }

    /// Remove a node and its entire subtree, dropping attached components.
    /// Ids into the removed subtree go stale and stop resolving.
    pub fn despawn(&mut self, id: NodeId) {
        if let Some(parent) = self.data(id).parent {
            self.data_mut(parent).children.retain(|&c| c != id);
        }
        self.despawn_subtree(id);
    }

    fn despawn_subtree(&mut self, id: NodeId) {
        let children = std::mem::take(&mut self.data_mut(id).children);
        for child in children {
            self.despawn_subtree(child);
        }
        self.components.clear_slot(id.index());
        self.nodes[id.index() as usize] = None;
        self.allocator.free(id);
    }

    pub fn is_alive(&self, id: NodeId) -> bool {
        self.allocator.is_alive(id)
    }

    pub fn node_count(&self) -> u32 {
        self.allocator.alive_count()
    }

    // =========================================================================
    // Node state
    // =========================================================================

    pub fn name(&self, id: NodeId) -> &str {
        &self.data(id).name
    }

    pub fn set_name(&mut self, id: NodeId, name: &str) {
        self.data_mut(id).name = name.to_string();
    }

    pub fn is_active(&self, id: NodeId) -> bool {
        self.data(id).active
    }

    pub fn set_active(&mut self, id: NodeId, active: bool) {
        self.data_mut(id).active = active;
    }

    pub fn layer(&self, id: NodeId) -> u8 {
        self.data(id).layer
    }

    /// Move the node to `layer` (0..32).
    pub fn set_layer(&mut self, id: NodeId, layer: u8) {
        assert!(layer < 32, "layer index out of range: {layer}");
        self.data_mut(id).layer = layer;
    }

    // =========================================================================
    // Hierarchy
    // =========================================================================

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.data(id).parent
    }

    /// Child nodes in order. Order is attach order and is preserved across
    /// sibling removals.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.data(id).children
    }

    /// Reparent `child` under `parent`, or detach it with `None`.
    ///
    /// The child is removed from its old parent's list and appended to the
    /// new one. Panics if the move would create a cycle.
    pub fn set_parent(&mut self, child: NodeId, parent: Option<NodeId>) {
        // Touch both records up front so dead ids fail fast
        let _ = self.data(child);
        if let Some(new_parent) = parent {
            let mut cursor = Some(new_parent);
            while let Some(ancestor) = cursor {
                assert!(
                    ancestor != child,
                    "reparenting '{}' would create a cycle",
                    self.name(child),
                );
                cursor = self.data(ancestor).parent;
            }
        }

        if let Some(old_parent) = self.data(child).parent {
            self.data_mut(old_parent).children.retain(|&c| c != child);
        }
        self.data_mut(child).parent = parent;
        if let Some(new_parent) = parent {
            self.data_mut(new_parent).children.push(child);
        }
    }

    /// Append `child` to `parent`'s children.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        self.set_parent(child, Some(parent));
    }

    /// Slash-separated names from the root down to `id`: "World/Arm/Hand".
    pub fn path(&self, id: NodeId) -> String {
        let mut path = self.data(id).name.clone();
        let mut cursor = self.data(id).parent;
        while let Some(node) = cursor {
            let data = self.data(node);
            path = format!("{}/{}", data.name, path);
            cursor = data.parent;
        }
        path
    }

    // =========================================================================
    // Components
    // =========================================================================

    /// Attach a component to a node. A node may carry several components of
    /// the same type; they keep attach order.
    pub fn attach<T: Component>(&mut self, id: NodeId, component: T) {
        let _ = self.data(id);
        self.components.column_mut::<T>().push(id.index(), component);
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn data(&self, id: NodeId) -> &NodeData {
        assert!(
            self.allocator.is_alive(id),
            "dead or null NodeId: {id:?}"
        );
        self.nodes[id.index() as usize]
            .as_ref()
            .expect("alive node has a record")
    }

    fn data_mut(&mut self, id: NodeId) -> &mut NodeData {
        assert!(
            self.allocator.is_alive(id),
            "dead or null NodeId: {id:?}"
        );
        self.nodes[id.index() as usize]
            .as_mut()
            .expect("alive node has a record")
    }

    pub(crate) fn registry(&self) -> &ComponentRegistry {
        &self.components
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_defaults() {
        let mut scene = Scene::new();
        let root = scene.spawn("Root");

        assert!(scene.is_alive(root));
        assert!(scene.is_active(root));
        assert_eq!(scene.layer(root), 0);
        assert_eq!(scene.name(root), "Root");
        assert!(scene.parent(root).is_none());
        assert!(scene.children(root).is_empty());
    }

    #[test]
    fn test_spawn_child_links_both_ways() {
        let mut scene = Scene::new();
        let root = scene.spawn("Root");
        let arm = scene.spawn_child(root, "Arm");

        assert_eq!(scene.parent(arm), Some(root));
        assert_eq!(scene.children(root), &[arm]);
    }

    #[test]
    fn test_path() {
        let mut scene = Scene::new();
        let world = scene.spawn("World");
        let arm = scene.spawn_child(world, "Arm");
        let hand = scene.spawn_child(arm, "Hand");

        assert_eq!(scene.path(hand), "World/Arm/Hand");
        assert_eq!(scene.path(world), "World");
    }

    #[test]
    fn test_reparent_moves_and_appends() {
        let mut scene = Scene::new();
        let a = scene.spawn("A");
        let b = scene.spawn("B");
        let first = scene.spawn_child(b, "First");
        let child = scene.spawn_child(a, "Child");

        scene.add_child(b, child);

        assert!(scene.children(a).is_empty());
        assert_eq!(scene.children(b), &[first, child]);
        assert_eq!(scene.parent(child), Some(b));
        assert_eq!(scene.path(child), "B/Child");
    }

    #[test]
    fn test_detach_to_root() {
        let mut scene = Scene::new();
        let root = scene.spawn("Root");
        let child = scene.spawn_child(root, "Child");

        scene.set_parent(child, None);

        assert!(scene.parent(child).is_none());
        assert!(scene.children(root).is_empty());
        assert_eq!(scene.path(child), "Child");
    }

    #[test]
    #[should_panic(expected = "cycle")]
    fn test_reparent_under_own_descendant_panics() {
        let mut scene = Scene::new();
        let root = scene.spawn("Root");
        let child = scene.spawn_child(root, "Child");
        let grandchild = scene.spawn_child(child, "Grandchild");

        scene.add_child(grandchild, root);
    }

    #[test]
    fn test_despawn_removes_subtree() {
        let mut scene = Scene::new();
        let root = scene.spawn("Root");
        let arm = scene.spawn_child(root, "Arm");
        let hand = scene.spawn_child(arm, "Hand");
        let other = scene.spawn_child(root, "Other");

        scene.despawn(arm);

        assert!(!scene.is_alive(arm));
        assert!(!scene.is_alive(hand));
        assert!(scene.is_alive(other));
        assert_eq!(scene.children(root), &[other]);
        assert_eq!(scene.node_count(), 2);
    }

    #[test]
    #[should_panic(expected = "dead or null NodeId")]
    fn test_dead_id_fails_fast() {
        let mut scene = Scene::new();
        let node = scene.spawn("Node");
        scene.despawn(node);
        scene.name(node);
    }

    #[test]
    #[should_panic(expected = "dead or null NodeId")]
    fn test_null_id_fails_fast() {
        let scene = Scene::new();
        scene.name(NodeId::NULL);
    }
}
