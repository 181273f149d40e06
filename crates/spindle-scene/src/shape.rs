/// Static, immutable shape description.
///
/// Positions are in object space, three floats per vertex. Colors are plain
/// RGBA in `[0, 1]`, written to the surface without color-space conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub name: &'static str,
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u16>,
    pub color: [f32; 4],
}

impl Shape {
    /// Equilateral triangle centred on the origin.
    pub fn triangle() -> Self {
        Self {
            name: "triangle",
            positions: vec![
                [0.0, 0.622_008_46, 0.0],
                [-0.5, -0.311_004_24, 0.0],
                [0.5, -0.311_004_24, 0.0],
            ],
            indices: vec![0, 1, 2],
            color: [0.636_718_75, 0.769_531_25, 0.222_656_25, 1.0],
        }
    }

    /// Unit square centred on the origin, drawn as two triangles.
    pub fn square() -> Self {
        Self {
            name: "square",
            positions: vec![
                [-0.5, 0.5, 0.0],
                [-0.5, -0.5, 0.0],
                [0.5, -0.5, 0.0],
                [0.5, 0.5, 0.0],
            ],
            indices: vec![0, 1, 2, 0, 2, 3],
            color: [0.2, 0.709_803_9, 0.898_039_2, 1.0],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}
