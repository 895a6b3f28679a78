use crate::grid::TileStatus;
use crate::renderer::{DrawCommand, DrawList, Renderer, SpriteKind};

/// Headless renderer: one character per grid cell.
///
/// Hidden tiles render as `.`; visible tiles use their status glyph; marker
/// sprites draw over tiles. Text commands are appended below the map.
#[derive(Debug)]
pub struct AsciiRenderer {
    columns: usize,
    rows: usize,
    frame: String,
}

impl AsciiRenderer {
    pub fn new(columns: i32, rows: i32) -> Self {
        Self {
            columns: columns.max(0) as usize,
            rows: rows.max(0) as usize,
            frame: String::new(),
        }
    }

    /// Text of the last rendered frame.
    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub fn status_glyph(status: TileStatus) -> char {
        match status {
            TileStatus::Unvisited => ' ',
            TileStatus::Open => 'o',
            TileStatus::Closed => 'x',
            TileStatus::Impassable => '#',
            TileStatus::Goal => 'G',
            TileStatus::Start => 'S',
        }
    }

    fn sprite_glyph(kind: SpriteKind) -> char {
        match kind {
            SpriteKind::StarShip => '^',
            SpriteKind::Target => '*',
        }
    }
}

impl Renderer for AsciiRenderer {
    fn render(&mut self, list: &DrawList) {
        let mut cells = vec!['.'; self.columns * self.rows];
        let mut footer = Vec::new();

        for command in list.sorted() {
            let (grid, glyph) = match command {
                DrawCommand::Tile { grid, status, .. } => (grid, Self::status_glyph(*status)),
                DrawCommand::Sprite { kind, grid, .. } => (grid, Self::sprite_glyph(*kind)),
                DrawCommand::Text { text, .. } => {
                    footer.push(text.as_str());
                    continue;
                }
            };
            if let Some(i) = cell_index(grid.column, grid.row, self.columns, self.rows) {
                cells[i] = glyph;
            }
        }

        let mut frame = String::with_capacity((self.columns + 1) * self.rows);
        for row in cells.chunks(self.columns.max(1)) {
            frame.extend(row);
            frame.push('\n');
        }
        for line in footer {
            frame.push_str(line);
            frame.push('\n');
        }
        self.frame = frame;
    }
}

fn cell_index(column: i32, row: i32, columns: usize, rows: usize) -> Option<usize> {
    let (c, r) = (usize::try_from(column).ok()?, usize::try_from(row).ok()?);
    (c < columns && r < rows).then_some(r * columns + c)
}
