//! Scene-graph utilities for macroquad games
//!
//! A small toolkit layered on an arena-backed node hierarchy:
//! - Typed component lookup over a node, its subtree, or its ancestor chain,
//!   reusing caller-owned buffers so steady-state queries never allocate
//! - Scene plumbing: reparenting, slash-separated path strings, layer masks
//! - Editor debug gizmos for vision cones (rays, wire arcs, wire discs)
//!
//! Gizmo drawing goes through macroquad and is compiled in only with the
//! `editor` cargo feature; headless builds keep the same API as silent
//! no-ops. Everything else, including the cone geometry itself, works
//! without the feature.

pub mod gizmos;
pub mod layer;
pub mod math;
pub mod scene;

pub use gizmos::{arc_between, vision_cone, Arc, Disc, GizmoColor, Ray, VisionCone};
pub use layer::LayerMask;
pub use math::{Basis, RectInt, Vec3};
pub use scene::{CollectOptions, Component, NodeId, Scene};
