use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::core::{CoordinateMapper, LocalRect, Pivot, ScopeRect};
use crate::error::GraphResult;
use crate::render::{Color32, MeshBuffer, Renderer, Tessellator};

use super::{GraphHandler, GraphPartsConfig, GraphSubscription, ScopePolicy};

/// Capability implemented by concrete plot types (scatter, polyline, bars...).
///
/// The widget owns the builder and calls it whenever the mesh is rebuilt.
pub trait GraphMeshBuilder {
    /// Appends this plot's geometry to `mesh`, projecting data through `mapper`.
    fn rebuild(
        &mut self,
        mapper: &CoordinateMapper,
        tessellator: Tessellator,
        mesh: &mut MeshBuffer,
    );

    /// Called after every successful recompute triggered by a graph change.
    fn on_update_graph(&mut self, _mapper: &CoordinateMapper) {}
}

struct PartsState<B> {
    config: GraphPartsConfig,
    mapper: CoordinateMapper,
    builder: B,
    vertices_dirty: bool,
    update_count: u64,
}

impl<B: GraphMeshBuilder> PartsState<B> {
    fn recalculate(&mut self, scope: ScopeRect) -> bool {
        let GraphPartsConfig {
            local_rect,
            pivot,
            scope_policy,
            ..
        } = self.config;

        match scope_policy {
            ScopePolicy::Permissive => {
                self.mapper.recalculate(scope, local_rect, pivot);
                true
            }
            ScopePolicy::Validate => match self.mapper.try_recalculate(scope, local_rect, pivot) {
                Ok(()) => true,
                Err(err) => {
                    warn!(error = %err, "keeping previous graph transform");
                    false
                }
            },
        }
    }

    fn update_graph(&mut self, scope: ScopeRect) -> bool {
        if !self.recalculate(scope) {
            return false;
        }
        self.vertices_dirty = true;
        self.update_count = self.update_count.saturating_add(1);
        self.builder.on_update_graph(&self.mapper);
        true
    }
}

/// Base of every renderable graph widget.
///
/// Holds the scope/rect mapping, tracks whether the mesh is stale and, while
/// enabled, listens to a `GraphHandler` for scope changes.
pub struct GraphParts<B> {
    state: Rc<RefCell<PartsState<B>>>,
    // Latest scope delivered while `state` was borrowed; applied on release.
    pending_scope: Rc<Cell<Option<ScopeRect>>>,
    subscription: Option<GraphSubscription>,
}

impl<B: GraphMeshBuilder + 'static> GraphParts<B> {
    pub fn new(config: GraphPartsConfig, builder: B) -> GraphResult<Self> {
        config.validate()?;
        Ok(Self {
            state: Rc::new(RefCell::new(PartsState {
                config,
                mapper: CoordinateMapper::default(),
                builder,
                vertices_dirty: true,
                update_count: 0,
            })),
            pending_scope: Rc::new(Cell::new(None)),
            subscription: None,
        })
    }

    /// Attaches the widget to its parent handler.
    ///
    /// With no handler the widget keeps its current transform and never
    /// receives updates. Enabling twice re-subscribes.
    pub fn enable(&mut self, handler: Option<&GraphHandler>) {
        self.disable();

        let Some(handler) = handler else {
            debug!("no graph handler; skipping subscription");
            return;
        };

        let weak = Rc::downgrade(&self.state);
        let pending_scope = Rc::clone(&self.pending_scope);
        self.subscription = Some(handler.subscribe(move |scope| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            let Ok(mut state) = state.try_borrow_mut() else {
                debug!(?scope, "graph widget busy; deferring update");
                pending_scope.set(Some(scope));
                return;
            };
            pending_scope.set(None);
            state.update_graph(scope);
        }));

        let mut state = self.state.borrow_mut();
        if state.recalculate(handler.scope_rect()) {
            state.vertices_dirty = true;
        }
        debug!(scope = ?handler.scope_rect(), "graph widget enabled");
    }

    pub fn disable(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            debug!(listener = subscription.id().raw(), "graph widget disabled");
            subscription.unsubscribe();
        }
        self.pending_scope.set(None);
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(GraphSubscription::is_active)
    }

    /// Recomputes the mapping for `scope`, marks the mesh stale and runs the
    /// builder's update hook. Returns `false` when the scope was rejected.
    pub fn update_graph(&self, scope: ScopeRect) -> bool {
        let accepted = self.state.borrow_mut().update_graph(scope);
        self.apply_pending_scope();
        accepted
    }

    /// Applies a scope change that arrived while the widget was borrowed.
    ///
    /// Runs at most one deferred update; a change raised by that update's
    /// hook stays pending for the next call.
    fn apply_pending_scope(&self) {
        let Some(scope) = self.pending_scope.take() else {
            return;
        };
        let Ok(mut state) = self.state.try_borrow_mut() else {
            self.pending_scope.set(Some(scope));
            return;
        };
        trace!(?scope, "applying deferred graph update");
        state.update_graph(scope);
    }

    /// Clears `mesh` and lets the builder emit the current geometry.
    pub fn populate_mesh(&self, mesh: &mut MeshBuffer) {
        self.apply_pending_scope();
        self.rebuild_mesh(mesh);
        // A change raised by the builder leaves the fresh mesh stale again.
        self.apply_pending_scope();
    }

    fn rebuild_mesh(&self, mesh: &mut MeshBuffer) {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;
        mesh.clear();
        state
            .builder
            .rebuild(&state.mapper, Tessellator::new(state.config.color), mesh);
        state.vertices_dirty = false;
        trace!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "graph mesh rebuilt"
        );
    }

    /// Rebuilds `mesh` when stale and hands it to `renderer`.
    pub fn render<R: Renderer>(
        &self,
        renderer: &mut R,
        mesh: &mut MeshBuffer,
    ) -> GraphResult<()> {
        self.apply_pending_scope();
        if self.is_vertices_dirty() {
            self.populate_mesh(mesh);
        }
        renderer.render(mesh)
    }

    /// Stores a new rect and pivot; the mapping follows on the next update.
    pub fn set_local_rect(&self, local_rect: LocalRect, pivot: Pivot) -> GraphResult<()> {
        local_rect.validate()?;
        pivot.validate()?;
        let mut state = self.state.borrow_mut();
        state.config.local_rect = local_rect;
        state.config.pivot = pivot;
        state.vertices_dirty = true;
        Ok(())
    }

    pub fn set_color(&self, color: Color32) {
        let mut state = self.state.borrow_mut();
        if state.config.color != color {
            state.config.color = color;
            state.vertices_dirty = true;
        }
    }

    pub fn set_vertices_dirty(&self) {
        self.state.borrow_mut().vertices_dirty = true;
    }

    #[must_use]
    pub fn mapper(&self) -> CoordinateMapper {
        self.state.borrow().mapper
    }

    #[must_use]
    pub fn config(&self) -> GraphPartsConfig {
        self.state.borrow().config
    }

    #[must_use]
    pub fn color(&self) -> Color32 {
        self.state.borrow().config.color
    }

    #[must_use]
    pub fn is_vertices_dirty(&self) -> bool {
        self.state.borrow().vertices_dirty
    }

    /// Number of accepted graph updates since construction.
    #[must_use]
    pub fn update_count(&self) -> u64 {
        self.state.borrow().update_count
    }

    /// Runs `f` against the builder, e.g. to push new plot data.
    ///
    /// Scope changes raised from inside `f` are applied once it returns.
    pub fn with_builder<R>(&self, f: impl FnOnce(&mut B) -> R) -> R {
        let result = f(&mut self.state.borrow_mut().builder);
        self.apply_pending_scope();
        result
    }
}

impl<B> fmt::Debug for GraphParts<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("GraphParts");
        if let Ok(state) = self.state.try_borrow() {
            out.field("config", &state.config)
                .field("mapper", &state.mapper)
                .field("vertices_dirty", &state.vertices_dirty)
                .field("update_count", &state.update_count);
        }
        out.field("enabled", &self.subscription.is_some()).finish()
    }
}
