//! Transient vertex storage used while a triangle block is parsed.
//!
//! Capacity grows in fixed `GROWTH_STEP` increments rather than
//! geometrically, so reallocation cadence stays deterministic for large
//! models. The buffer never shrinks; it is dropped with the parse call.

use corelib::{LoadError, LoadResult};

/// Records added per growth step.
pub const GROWTH_STEP: usize = 4096;

/// Raw per-vertex attributes read from one triangle-vertex line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RawVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    pub normal: [f32; 3],
}

/// One record array carrying three attribute streams, each advanced by its
/// own counter. The streams line up again after every complete vertex line.
#[derive(Default)]
pub struct VertexScratch {
    records: Vec<RawVertex>,
    allocated: usize,
    num_positions: usize,
    num_normals: usize,
    num_uvs: usize,
}

impl VertexScratch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make room for `required` records.
    ///
    /// A zero request, or a request that skipped past the current capacity,
    /// is a caller bug and fails without allocating. Records are appended
    /// one at a time, so the parse loop can only ever hit the step-growth
    /// branch (`required == capacity`).
    pub fn ensure_capacity(&mut self, required: usize) -> LoadResult<()> {
        if required < 1 {
            return Err(LoadError::ScratchCapacity { requested: required });
        }
        if self.allocated == 0 {
            let first = required.max(GROWTH_STEP);
            self.records.reserve_exact(first);
            self.allocated = first;
            return Ok(());
        }
        if required < self.allocated {
            return Ok(());
        }
        if required == self.allocated {
            let grown = self.allocated + GROWTH_STEP;
            self.records.reserve_exact(grown - self.records.len());
            self.allocated = grown;
            return Ok(());
        }
        Err(LoadError::ScratchCapacity { requested: required })
    }

    /// Current capacity in records.
    pub fn capacity(&self) -> usize {
        self.allocated
    }

    fn slot(&mut self, index: usize) -> &mut RawVertex {
        if index == self.records.len() {
            self.records.push(RawVertex::default());
        }
        &mut self.records[index]
    }

    pub fn push_position(&mut self, position: [f32; 3]) -> LoadResult<()> {
        self.ensure_capacity(self.num_positions + 1)?;
        self.slot(self.num_positions).position = position;
        self.num_positions += 1;
        Ok(())
    }

    pub fn push_normal(&mut self, normal: [f32; 3]) -> LoadResult<()> {
        self.ensure_capacity(self.num_normals + 1)?;
        self.slot(self.num_normals).normal = normal;
        self.num_normals += 1;
        Ok(())
    }

    pub fn push_uv(&mut self, uv: [f32; 2]) -> LoadResult<()> {
        self.ensure_capacity(self.num_uvs + 1)?;
        self.slot(self.num_uvs).uv = uv;
        self.num_uvs += 1;
        Ok(())
    }

    pub fn positions(&self) -> usize {
        self.num_positions
    }

    pub fn normals(&self) -> usize {
        self.num_normals
    }

    pub fn uvs(&self) -> usize {
        self.num_uvs
    }

    /// Record at `index`; the caller keeps indices within the written range.
    pub fn record(&self, index: usize) -> &RawVertex {
        &self.records[index]
    }
}
