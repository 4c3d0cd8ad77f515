use driftwalk_kernel::{EntityKind, World};
use glam::Vec3;

use crate::post::PostProcessParams;

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderView {
    /// Eye position in world space, bob included.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            target: Vec3::NEG_Z,
            fov_degrees: 50.0,
        }
    }
}

/// Everything a renderer receives for one frame besides the world.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderFrame {
    pub view: RenderView,
    pub post: PostProcessParams,
    /// Scheduler tick count.
    pub tick: u64,
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads world state and a frame description, then produces
/// output. It never mutates the world.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame, composited through the post chain when `frame.post.enabled`.
    fn render(&self, world: &World, frame: &RenderFrame) -> Self::Output;
}

/// Headless renderer producing a human-readable description of the frame.
///
/// Useful for CLI output, logging, and testing the render interface.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    /// Include one line per entity.
    pub verbose: bool,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

fn describe_kind(kind: &EntityKind) -> String {
    match kind {
        EntityKind::Static { collider } => {
            format!("static{}", if collider.is_some() { " solid" } else { "" })
        }
        EntityKind::Decorative(spin) => format!(
            "spin=({:.2}, {:.2}, {:.2})",
            spin.angles.x, spin.angles.y, spin.angles.z
        ),
        EntityKind::Animated(Some(anim)) => {
            format!("clip={} t={:.2}/{:.2}", anim.clip, anim.time, anim.duration)
        }
        EntityKind::Animated(None) => "still".to_string(),
        EntityKind::Hoverable { hover, .. } => format!(
            "emphasis={:.3}{}",
            hover.current,
            if hover.is_hovered { " hovered" } else { "" }
        ),
        EntityKind::Collectible {
            hover, collected, ..
        } => format!(
            "emphasis={:.3}{}{}",
            hover.current,
            if hover.is_hovered { " hovered" } else { "" },
            if *collected { " collected" } else { "" }
        ),
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, world: &World, frame: &RenderFrame) -> String {
        let mut out = String::new();
        let view = &frame.view;
        let post = &frame.post;
        out.push_str(&format!(
            "=== Frame {} ({}) ===\n",
            frame.tick,
            if post.enabled { "post" } else { "direct" }
        ));
        out.push_str(&format!(
            "Entities: {} in {} groups\n",
            world.entity_count(),
            world.groups().count()
        ));
        out.push_str(&format!(
            "Camera: eye=({:.2}, {:.2}, {:.2}) target=({:.2}, {:.2}, {:.2}) fov={:.0}\n",
            view.eye.x, view.eye.y, view.eye.z, view.target.x, view.target.y, view.target.z, view.fov_degrees
        ));
        if post.enabled {
            out.push_str(&format!(
                "Bloom: strength={:.3} radius={:.3} threshold={:.4} grain={:.3}\n",
                post.bloom.strength, post.bloom.radius, post.bloom.threshold, post.film_grain
            ));
        }

        if self.verbose {
            for group in world.groups() {
                out.push_str(&format!(
                    "[{}]{}\n",
                    group.name(),
                    if group.tooltip_visible() { " tooltip" } else { "" }
                ));
                for entity in group.entities() {
                    let p = entity.transform.position;
                    out.push_str(&format!(
                        "  [{}] {} pos=({:.2}, {:.2}, {:.2}) {}\n",
                        entity.id.short(),
                        entity.name,
                        p.x,
                        p.y,
                        p.z,
                        describe_kind(&entity.kind)
                    ));
                }
            }
        }

        out
    }
}
