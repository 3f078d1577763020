//! Brush controller for topological mesh painting
//!
//! The controller turns interaction events into session mutations. A drag
//! with the primary button held is sampled every time the pointer has moved
//! further than the drag threshold from the previous sample; each sample picks
//! the triangle under the pointer, grows a region around it, and recolors the
//! region's vertices. Missing the mesh clears the whole color buffer.

use std::collections::BTreeSet;

use glam::Vec2;
use topobrush_config::BrushConfig;
use tracing::{debug, info};

use crate::session::Session;
use crate::types::{BrushMode, PickHit, TriangleId, VertexColor};
use crate::validation::MeshError;

/// Interaction events delivered by the windowing layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer position in pixels, origin at the top-left of the viewport
    PointerMoved {
        x: f32,
        y: f32,
        primary_pressed: bool,
    },
    /// Switch between paint and erase
    ToggleMode,
    /// Grow the brush radius by one level
    RadiusUp,
    /// Shrink the brush radius by one level
    RadiusDown,
    /// Scroll wheel; positive values zoom in
    Scroll { delta_y: f32 },
    /// Viewport size changed
    Resize { width: u32, height: u32 },
}

/// What handling an event did to the session
#[derive(Debug, Clone, PartialEq)]
pub enum BrushOutcome {
    /// Nothing changed
    Ignored,
    /// A region around `hit` was recolored
    Painted {
        hit: PickHit,
        triangles: BTreeSet<TriangleId>,
    },
    /// The pointer missed the mesh and all vertices were reset
    Cleared,
    ModeChanged(BrushMode),
    RadiusChanged(i32),
    CameraChanged,
}

/// Adjustable brush settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushState {
    /// Expansion rounds; unclamped, values below 1 paint only the hit triangle
    pub radius: i32,
    pub mode: BrushMode,
}

/// Snapshot for an on-screen status display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushStatus {
    pub radius: i32,
    pub mode: BrushMode,
    /// Triangle struck by the last sampled drag, if any
    pub last_hit: Option<TriangleId>,
}

pub struct BrushController {
    state: BrushState,
    /// Minimum pointer travel between two drag samples
    drag_threshold: f32,
    paint_color: VertexColor,
    background_color: VertexColor,
    /// Position of the last sampled drag
    last_sample: Vec2,
    last_hit: Option<TriangleId>,
}

impl Default for BrushController {
    fn default() -> Self {
        Self::new(&BrushConfig::default())
    }
}

impl BrushController {
    pub fn new(config: &BrushConfig) -> Self {
        Self {
            state: BrushState {
                radius: config.radius,
                mode: BrushMode::default(),
            },
            drag_threshold: config.drag_threshold,
            paint_color: VertexColor::from(config.paint_color),
            background_color: VertexColor::from(config.background_color),
            last_sample: Vec2::ZERO,
            last_hit: None,
        }
    }

    pub fn state(&self) -> BrushState {
        self.state
    }

    pub fn status(&self) -> BrushStatus {
        BrushStatus {
            radius: self.state.radius,
            mode: self.state.mode,
            last_hit: self.last_hit,
        }
    }

    /// Color written by the brush in the current mode
    pub fn active_color(&self) -> VertexColor {
        match self.state.mode {
            BrushMode::Paint => self.paint_color,
            BrushMode::Erase => self.background_color,
        }
    }

    /// Process one event against the session.
    ///
    /// Errors only surface when the session's topology rejects a triangle the
    /// picker produced, which indicates a broken mesh invariant.
    pub fn handle_event(
        &mut self,
        session: &mut Session,
        event: InputEvent,
    ) -> Result<BrushOutcome, MeshError> {
        match event {
            InputEvent::PointerMoved {
                x,
                y,
                primary_pressed,
            } => {
                let position = Vec2::new(x, y);
                if !primary_pressed || position.distance(self.last_sample) <= self.drag_threshold {
                    return Ok(BrushOutcome::Ignored);
                }
                self.last_sample = position;
                self.stroke_at(session, position)
            }
            InputEvent::ToggleMode => {
                self.state.mode = self.state.mode.toggled();
                info!("Brush mode: {}", self.state.mode.label());
                Ok(BrushOutcome::ModeChanged(self.state.mode))
            }
            InputEvent::RadiusUp => {
                self.state.radius = self.state.radius.saturating_add(1);
                info!("Brush radius: {}", self.state.radius);
                Ok(BrushOutcome::RadiusChanged(self.state.radius))
            }
            InputEvent::RadiusDown => {
                self.state.radius = self.state.radius.saturating_sub(1);
                info!("Brush radius: {}", self.state.radius);
                Ok(BrushOutcome::RadiusChanged(self.state.radius))
            }
            InputEvent::Scroll { delta_y } => {
                session.camera_mut().zoom_by(delta_y);
                Ok(BrushOutcome::CameraChanged)
            }
            InputEvent::Resize { width, height } => {
                session.camera_mut().resize(width, height);
                Ok(BrushOutcome::CameraChanged)
            }
        }
    }

    /// Pick, expand, and recolor at a sampled pointer position.
    fn stroke_at(&mut self, session: &mut Session, position: Vec2) -> Result<BrushOutcome, MeshError> {
        let Some(hit) = session.pick(position.x, position.y) else {
            self.last_hit = None;
            session.colors_mut().fill(self.background_color);
            debug!(
                "BrushController: miss at ({:.1}, {:.1}), cleared {} vertices",
                position.x,
                position.y,
                session.colors().len()
            );
            return Ok(BrushOutcome::Cleared);
        };

        self.last_hit = Some(hit.triangle);
        let triangles = session.expand(hit.triangle, self.state.radius)?;
        session.paint(&triangles, self.active_color())?;

        debug!(
            "BrushController: {} {} triangles around {} (radius {})",
            self.state.mode.label(),
            triangles.len(),
            hit.triangle.0,
            self.state.radius
        );

        Ok(BrushOutcome::Painted { hit, triangles })
    }
}
