//! Billboard geometry shared by every instance of an emitter, and the draw
//! descriptor handed to the renderer.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// How a billboard's vertices are assembled into triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Each vertex after the second forms a triangle with the previous two.
    TriangleStrip,
    /// Each vertex after the second forms a triangle with the first and previous.
    TriangleFan,
}

/// Static per-vertex offsets in billboard space, scaled by particle size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillboardMesh {
    /// Vertex offsets.
    pub vertices: &'static [[f32; 3]],
    /// Primitive assembly.
    pub topology: Topology,
}

impl BillboardMesh {
    /// Unit quad centred on the particle.
    pub const QUAD: Self = Self {
        vertices: &[
            [-0.5, -0.5, 0.0],
            [0.5, -0.5, 0.0],
            [-0.5, 0.5, 0.0],
            [0.5, 0.5, 0.0],
        ],
        topology: Topology::TriangleStrip,
    };

    /// Elongated drop outline, listed around its perimeter.
    pub const RAINDROP: Self = Self {
        vertices: &[
            [-0.05, 0.6, 0.2],
            [0.05, 0.6, 0.2],
            [0.1, 0.5, 0.2],
            [0.1, -0.5, 0.5],
            [0.05, -0.6, 0.5],
            [-0.05, -0.6, 0.5],
            [-0.1, -0.5, 0.5],
            [-0.1, 0.5, 0.2],
        ],
        topology: Topology::TriangleFan,
    };

    /// Number of vertices per instance.
    #[inline]
    #[must_use]
    pub const fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }
}

/// Billboard selection for configuration files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeshKind {
    /// [`BillboardMesh::QUAD`].
    #[default]
    Quad,
    /// [`BillboardMesh::RAINDROP`].
    Raindrop,
}

impl MeshKind {
    /// Returns the static mesh.
    #[must_use]
    pub const fn mesh(self) -> &'static BillboardMesh {
        match self {
            Self::Quad => &BillboardMesh::QUAD,
            Self::Raindrop => &BillboardMesh::RAINDROP,
        }
    }
}

/// Non-indexed instanced draw, laid out like an indirect draw command.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct InstancedDraw {
    /// Vertices per instance.
    pub vertex_count: u32,
    /// Number of instances (the frame's live count).
    pub instance_count: u32,
    /// First vertex in the mesh buffer.
    pub first_vertex: u32,
    /// First instance in the attribute buffers.
    pub first_instance: u32,
}

impl InstancedDraw {
    /// Creates a draw of `instance_count` copies of `mesh`.
    #[must_use]
    pub const fn new(mesh: &BillboardMesh, instance_count: u32) -> Self {
        Self {
            vertex_count: mesh.vertex_count(),
            instance_count,
            first_vertex: 0,
            first_instance: 0,
        }
    }

    /// Returns `true` if nothing would be drawn.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.instance_count == 0
    }
}
