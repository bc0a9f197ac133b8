//! Source SMD loader: a line-oriented parser turning per-material triangle
//! lists into [`Model`] surfaces.
//!
//! The format is made of `nodes` / `skeleton` / `triangles` sections closed
//! by `end`. Only the triangles section produces geometry; bone hierarchies
//! and animation keyframes are scanned past. Inside a triangles section a
//! line starting with an ASCII digit is a vertex record (bone link, position,
//! normal, UV, optional link/weight pairs); anything else is a material
//! token, which either names the surface or closes off the three most recent
//! vertex records as one triangle.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use corelib::{LoadError, LoadResult};

use crate::mesh::{Model, Surface};
use crate::parser::{Tokenizer, latin1_token};
use crate::scratch::VertexScratch;

/// Section currently being read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Idle,
    Nodes,
    Skeleton,
    Triangles,
}

/// Accumulates surfaces for the model under construction.
///
/// The surface opened by the first material token stays current for the
/// whole file; later material tokens only flush triangles into it.
struct MeshBuilder {
    model: Model,
    current: Option<usize>,
    cur_vertex: usize,
    cur_face: usize,
}

impl MeshBuilder {
    fn new(file_name: &str, frame_num: i32) -> Self {
        Self {
            model: Model::new(file_name, file_name, frame_num),
            current: None,
            cur_vertex: 0,
            cur_face: 0,
        }
    }

    fn has_open_surface(&self) -> bool {
        self.current.is_some()
    }

    /// Name the surface subsequent triangles belong to. Consumes no vertex
    /// data and resets the per-surface cursors.
    fn open_surface(&mut self, name: &str) {
        self.model.surfaces.push(Surface::new(name));
        self.current = Some(self.model.surfaces.len() - 1);
        self.cur_vertex = 0;
        self.cur_face = 0;
    }

    /// Copy the three most recent scratch records into the current surface
    /// and emit one triangle.
    ///
    /// The index buffer reverses the parsed vertex order (local+2, local+1,
    /// local+0): the source format winds its triangles opposite to the
    /// front-face order the renderer expects.
    fn flush_triangle(&mut self, scratch: &VertexScratch, line: usize) -> LoadResult<()> {
        let Some(idx) = self.current else {
            return Err(LoadError::TriangleUnderflow { line });
        };
        let total = scratch.positions();
        if total < self.cur_vertex + 3 {
            return Err(LoadError::TriangleUnderflow { line });
        }

        let surface = &mut self.model.surfaces[idx];
        for i in 0..3 {
            let record = scratch.record(total - (3 - i));
            surface.push_vertex(record.position, record.uv, record.normal);
        }

        let local = self.cur_vertex as u32;
        surface.indices.extend_from_slice(&[local + 2, local + 1, local]);
        self.cur_face += 1;
        self.cur_vertex += 3;
        Ok(())
    }

    fn finish(self) -> Model {
        self.model
    }
}

/// Parse an SMD model out of a raw byte buffer.
///
/// Consumes the whole buffer in one call and returns the complete model or
/// the first fatal error; scratch storage and the partial model are dropped
/// on every exit path. `file_name` becomes the model name and is otherwise
/// only used for diagnostics.
pub fn load_smd(buffer: &[u8], file_name: &str, frame_num: i32) -> LoadResult<Model> {
    log::info!("Loading SMD: {}", file_name);

    let mut parser = Tokenizer::new(buffer);
    let mut scratch = VertexScratch::new();
    let mut builder = MeshBuilder::new(file_name, frame_num);
    let mut section = Section::Idle;

    while let Some(token) = parser.next_line_first_token() {
        if token.is_empty() {
            continue;
        }
        if token == b"//" {
            parser.skip_rest_of_line();
            continue;
        }

        if token.eq_ignore_ascii_case(b"nodes") {
            section = Section::Nodes;
            parser.skip_rest_of_line();
            continue;
        }
        if token.eq_ignore_ascii_case(b"skeleton") {
            section = Section::Skeleton;
            parser.skip_rest_of_line();
            continue;
        }
        if token.eq_ignore_ascii_case(b"triangles") {
            section = Section::Triangles;
            parser.skip_rest_of_line();
            continue;
        }
        if token.eq_ignore_ascii_case(b"end") {
            section = Section::Idle;
            parser.skip_rest_of_line();
            continue;
        }

        if section == Section::Triangles {
            if token[0].is_ascii_digit() {
                // Vertex record. The token just consumed is the bone link,
                // which is not interpreted.
                let position = parser
                    .parse_vec3()
                    .ok_or(LoadError::VertexParse { line: parser.line() })?;
                scratch.push_position(position)?;

                let normal = parser
                    .parse_vec3()
                    .ok_or(LoadError::NormalParse { line: parser.line() })?;
                scratch.push_normal(normal)?;

                let uv = parser
                    .parse_vec2()
                    .ok_or(LoadError::UvParse { line: parser.line() })?;
                scratch.push_uv(uv)?;

                // Trailing link/weight pairs are not interpreted.
                parser.skip_rest_of_line();
            } else if builder.has_open_surface() {
                builder.flush_triangle(&scratch, parser.line())?;
            } else {
                builder.open_surface(&latin1_token(token));
            }
            continue;
        }

        // Stray token outside a recognized construct: skip the line.
        parser.skip_rest_of_line();
    }

    let model = builder.finish();
    log::debug!(
        "SMD '{}': {} surface(s), {} vertices, {} triangles",
        model.name,
        model.surfaces.len(),
        model.vertex_count(),
        model.triangle_count()
    );
    Ok(model)
}

/// Parse an SMD model from text already in memory.
pub fn load_smd_from_str(contents: &str, file_name: &str, frame_num: i32) -> LoadResult<Model> {
    load_smd(contents.as_bytes(), file_name, frame_num)
}

/// Load an SMD model from a file path (frame 0).
pub fn load_smd_from_path(path: impl AsRef<Path>) -> Result<Model> {
    let path = path.as_ref();
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read SMD file: {}", path.display()))?;
    let name = path.display().to_string();
    Ok(load_smd(&bytes, &name, 0)?)
}
