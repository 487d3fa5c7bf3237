//! Component queries
//!
//! Lookup by component type over a single node, a subtree (pre-order), or an
//! ancestor chain. Every query has a `_into` variant that writes matches
//! into a caller-owned buffer, so a query that runs every frame settles into
//! zero allocations once its buffers are warm.
//!
//! Subtree traversal keeps its pending-node stack in a thread-local slot,
//! borrowed through a guard that clears it on every exit path. A panicking
//! caller cannot leak traversal state into the next query, and two threads
//! never touch the same stack.

use std::cell::RefCell;

use super::{Component, NodeId, Scene};

/// Options controlling what a component query visits.
///
/// The two flags are independent: one widens which components pass at a
/// visited node, the other widens which nodes get visited at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectOptions {
    /// Also collect behaviour components whose enabled flag is off.
    /// Components that do not carry an enabled flag are always collected,
    /// whatever this is set to.
    pub include_disabled: bool,
    /// Also walk nodes whose active flag is off. For subtree queries an
    /// inactive child prunes its whole subtree; for ancestor queries the
    /// walk stops at the first inactive ancestor. The starting node itself
    /// is never filtered by this flag.
    pub include_inactive: bool,
}

impl CollectOptions {
    /// Enabled components on active nodes only (the default).
    pub const ENABLED_ONLY: CollectOptions = CollectOptions {
        include_disabled: false,
        include_inactive: false,
    };

    /// Everything, regardless of enabled or active flags.
    pub const ALL: CollectOptions = CollectOptions {
        include_disabled: true,
        include_inactive: true,
    };
}

thread_local! {
    /// Reused subtree-traversal stack. Empty between queries.
    static TRAVERSAL_STACK: RefCell<Vec<NodeId>> = const { RefCell::new(Vec::new()) };
}

/// Scoped loan of the thread-local traversal stack.
///
/// Takes the stack out of its slot on acquire and puts it back cleared on
/// drop. Drop also runs during unwinding, so the stack is empty for the
/// next query even if the current one panics partway through.
struct TraversalStack {
    stack: Vec<NodeId>,
}

impl TraversalStack {
    fn acquire() -> Self {
        let stack = TRAVERSAL_STACK.with(|slot| std::mem::take(&mut *slot.borrow_mut()));
        Self { stack }
    }
}

impl Drop for TraversalStack {
    fn drop(&mut self) {
        self.stack.clear();
        let stack = std::mem::take(&mut self.stack);
        // Thread teardown may have dropped the slot already; the stack is
        // then simply discarded
        let _ = TRAVERSAL_STACK.try_with(|slot| *slot.borrow_mut() = stack);
    }
}

impl Scene {
    /// Components of type `T` attached to `node`, in attach order.
    pub fn components_on<T: Component + Clone>(
        &self,
        node: NodeId,
        options: CollectOptions,
    ) -> Vec<T> {
        let mut out = Vec::new();
        self.components_on_into(node, options, &mut out);
        out
    }

    /// Buffer-reusing variant of [`components_on`]: clears `out`, then
    /// fills it.
    ///
    /// [`components_on`]: Scene::components_on
    pub fn components_on_into<T: Component + Clone>(
        &self,
        node: NodeId,
        options: CollectOptions,
        out: &mut Vec<T>,
    ) {
        assert!(self.is_alive(node), "dead or null NodeId: {node:?}");
        out.clear();
        self.gather(node, options, out);
    }

    /// Components of type `T` on `root` and its descendants, pre-order:
    /// each node before its descendants, descendants in child order.
    ///
    /// `root` is always processed, whatever its own active flag; the
    /// `include_inactive` flag only decides whether inactive children are
    /// descended into.
    pub fn components_in_children<T: Component + Clone>(
        &self,
        root: NodeId,
        options: CollectOptions,
    ) -> Vec<T> {
        let mut out = Vec::new();
        self.components_in_children_into(root, options, &mut out);
        out
    }

    /// Buffer-reusing variant of [`components_in_children`].
    ///
    /// [`components_in_children`]: Scene::components_in_children
    pub fn components_in_children_into<T: Component + Clone>(
        &self,
        root: NodeId,
        options: CollectOptions,
        out: &mut Vec<T>,
    ) {
        assert!(self.is_alive(root), "dead or null NodeId: {root:?}");
        out.clear();

        let mut dfs = TraversalStack::acquire();
        dfs.stack.push(root);
        while let Some(node) = dfs.stack.pop() {
            self.gather(node, options, out);
            // Reverse push so the first child comes off the stack first
            for &child in self.children(node).iter().rev() {
                if options.include_inactive || self.is_active(child) {
                    dfs.stack.push(child);
                }
            }
        }
    }

    /// Components of type `T` on `node` and each of its ancestors, nearest
    /// ancestor first.
    ///
    /// `node` itself is always processed. The walk up stops - excluding
    /// that ancestor - at the first inactive ancestor, unless
    /// `include_inactive` is set.
    pub fn components_in_ancestors<T: Component + Clone>(
        &self,
        node: NodeId,
        options: CollectOptions,
    ) -> Vec<T> {
        let mut out = Vec::new();
        self.components_in_ancestors_into(node, options, &mut out);
        out
    }

    /// Buffer-reusing variant of [`components_in_ancestors`].
    ///
    /// [`components_in_ancestors`]: Scene::components_in_ancestors
    pub fn components_in_ancestors_into<T: Component + Clone>(
        &self,
        node: NodeId,
        options: CollectOptions,
        out: &mut Vec<T>,
    ) {
        assert!(self.is_alive(node), "dead or null NodeId: {node:?}");
        out.clear();

        self.gather(node, options, out);
        let mut cursor = self.parent(node);
        while let Some(ancestor) = cursor {
            if !options.include_inactive && !self.is_active(ancestor) {
                return;
            }
            self.gather(ancestor, options, out);
            cursor = self.parent(ancestor);
        }
    }

    /// Collect matching components attached to a single node.
    fn gather<T: Component + Clone>(
        &self,
        node: NodeId,
        options: CollectOptions,
        out: &mut Vec<T>,
    ) {
        let Some(column) = self.registry().column::<T>() else {
            return;
        };
        for component in column.slot(node.index()) {
            if options.include_disabled || component.is_enabled() {
                out.push(component.clone());
            }
        }
    }
}
