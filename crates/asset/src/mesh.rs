//! CPU-side model representation produced by loaders.

/// Primitive layout of a surface's index buffer. SMD only emits triangle lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceKind {
    TriangleList,
}

/// Named group of triangles sharing one material reference, with its own
/// attribute arrays and index buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    pub name: String,
    pub kind: SurfaceKind,
    pub positions: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl Surface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SurfaceKind::TriangleList,
            positions: Vec::new(),
            uvs: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Append one vertex worth of attributes.
    pub fn push_vertex(&mut self, position: [f32; 3], uv: [f32; 2], normal: [f32; 3]) {
        self.positions.push(position);
        self.uvs.push(uv);
        self.normals.push(normal);
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Attribute streams line up and every index refers to a stored vertex.
    pub fn is_valid(&self) -> bool {
        let n = self.positions.len();
        self.uvs.len() == n
            && self.normals.len() == n
            && self.indices.len() % 3 == 0
            && self.indices.iter().all(|&i| (i as usize) < n)
    }
}

/// Root entity a loader returns; owns its surfaces.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    pub name: String,
    pub file_name: String,
    pub frame_num: i32,
    pub surfaces: Vec<Surface>,
}

impl Model {
    pub fn new(name: impl Into<String>, file_name: impl Into<String>, frame_num: i32) -> Self {
        Self {
            name: name.into(),
            file_name: file_name.into(),
            frame_num,
            surfaces: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.surfaces.iter().map(Surface::vertex_count).sum()
    }

    pub fn triangle_count(&self) -> usize {
        self.surfaces.iter().map(Surface::triangle_count).sum()
    }
}
