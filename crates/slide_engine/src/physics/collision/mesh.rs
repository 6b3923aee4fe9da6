//! World collision geometry
//!
//! [`VertexData`] is the per-level triangle snapshot the response scans every
//! tick. It is an arena: triangles are addressed by [`TriangleHandle`], kept in
//! build order, and the whole thing is rebuilt when world geometry changes.

use crate::foundation::math::Vec3;
use super::primitives::Triangle;

/// Errors raised while building collision geometry
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// An index buffer entry points past the end of the position buffer
    #[error("index {index} at position {at} is out of range for {len} vertices")]
    IndexOutOfRange {
        /// Offending index value
        index: u32,
        /// Offset of the entry in the index buffer
        at: usize,
        /// Number of available positions
        len: usize,
    },

    /// A flat float buffer does not hold whole xyz triples
    #[error("position buffer of {0} floats is not a multiple of 3")]
    MisalignedPositions(usize),
}

/// Index of a triangle inside a [`VertexData`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriangleHandle(pub usize);

impl TriangleHandle {
    /// Raw index
    pub fn index(self) -> usize {
        self.0
    }
}

/// Ordered, immutable triangle snapshot of the world
#[derive(Debug, Clone, Default)]
pub struct VertexData {
    triangles: Vec<Triangle>,
}

impl VertexData {
    /// Create an empty snapshot; scanning it never collides
    pub fn new() -> Self {
        Self::default()
    }

    /// Build triangles from every three consecutive positions
    ///
    /// Trailing positions that do not make a whole triangle are dropped.
    pub fn from_positions(positions: &[Vec3]) -> Self {
        let remainder = positions.len() % 3;
        if remainder != 0 {
            log::warn!(
                "Dropping {} trailing position(s) that do not form a triangle",
                remainder
            );
        }

        let triangles = positions
            .chunks_exact(3)
            .map(|chunk| Triangle::new(chunk[0], chunk[1], chunk[2]))
            .collect();

        Self { triangles }
    }

    /// Build triangles from an indexed mesh (one collision triangle per three
    /// indices)
    pub fn from_indexed(positions: &[Vec3], indices: &[u32]) -> Result<Self, GeometryError> {
        let expanded = indices
            .iter()
            .enumerate()
            .map(|(at, &index)| {
                positions
                    .get(index as usize)
                    .copied()
                    .ok_or(GeometryError::IndexOutOfRange {
                        index,
                        at,
                        len: positions.len(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_positions(&expanded))
    }

    /// Build triangles from a flat `[x, y, z, x, y, z, ...]` vertex buffer
    pub fn from_raw_positions(raw: &[f32]) -> Result<Self, GeometryError> {
        let triples: &[[f32; 3]] = bytemuck::try_cast_slice(raw)
            .map_err(|_| GeometryError::MisalignedPositions(raw.len()))?;

        let positions: Vec<Vec3> = triples.iter().map(|&p| Vec3::from(p)).collect();
        Ok(Self::from_positions(&positions))
    }

    /// Concatenate several triangle lists, in order, into one snapshot
    pub fn compile<I, T>(groups: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[Triangle]>,
    {
        let mut triangles = Vec::new();
        for group in groups {
            triangles.extend_from_slice(group.as_ref());
        }
        Self { triangles }
    }

    /// All triangles in build order
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Look up a triangle by handle
    pub fn get(&self, handle: TriangleHandle) -> Option<&Triangle> {
        self.triangles.get(handle.0)
    }

    /// First triangle of the snapshot, if any
    pub fn first(&self) -> Option<&Triangle> {
        self.triangles.first()
    }

    /// Iterate handles and triangles in build order
    pub fn iter(&self) -> impl Iterator<Item = (TriangleHandle, &Triangle)> {
        self.triangles
            .iter()
            .enumerate()
            .map(|(i, tri)| (TriangleHandle(i), tri))
    }

    /// Number of triangles
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// True when there are no triangles
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

impl From<Vec<Triangle>> for VertexData {
    fn from(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }
}
