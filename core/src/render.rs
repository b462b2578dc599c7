use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Grid-capable UI the game draws on.
///
/// Cell activation flows the other way: the surface reports clicks as
/// [`CellEvent`]s tagged with the board id last passed to
/// [`set_body`](DisplaySurface::set_body).
pub trait DisplaySurface {
    /// Replaces the header row.
    fn set_header(&mut self, titles: &[&str]);

    /// Replaces the body with `rows` × `columns` empty cells belonging to `board`.
    fn set_body(&mut self, board: BoardId, columns: usize, rows: usize);

    fn set_cell(&mut self, addr: CellAddr, content: &str);

    fn set_loading(&mut self, loading: bool);

    fn set_restart(&mut self, enabled: bool, label: &str);

    /// Shows `error`, or clears the error message when `None`.
    fn show_error(&mut self, error: Option<&LoadError>);
}

/// Draws `board` from scratch, discarding whatever grid was shown before.
pub fn render_board<S: DisplaySurface + ?Sized>(board: &Board, surface: &mut S) {
    let titles: Vec<&str> = board.categories().iter().map(Category::title).collect();
    surface.set_header(&titles);
    surface.set_body(board.id(), NUM_CATEGORIES, NUM_CLUES);
    for (addr, clue) in board.iter_clues() {
        surface.set_cell(addr, clue.visible_text());
    }
    log::debug!("Rendered board {:?}", board.id());
}

/// In-memory [`DisplaySurface`], the view model the front end draws from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSurface {
    board: Option<BoardId>,
    header: Vec<String>,
    /// Indexed `[clue][category]`, one entry per displayed row.
    rows: Vec<Vec<String>>,
    loading: bool,
    restart_enabled: bool,
    restart_label: String,
    error: Option<String>,
}

impl GridSurface {
    pub fn new() -> Self {
        Self {
            board: None,
            header: Vec::new(),
            rows: Vec::new(),
            loading: false,
            restart_enabled: true,
            restart_label: GamePhase::Idle.restart_label().to_string(),
            error: None,
        }
    }

    pub fn board(&self) -> Option<BoardId> {
        self.board
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn cell(&self, addr: CellAddr) -> Option<&str> {
        self.rows
            .get(addr.clue)?
            .get(addr.category)
            .map(String::as_str)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn restart_enabled(&self) -> bool {
        self.restart_enabled
    }

    pub fn restart_label(&self) -> &str {
        &self.restart_label
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Default for GridSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for GridSurface {
    fn set_header(&mut self, titles: &[&str]) {
        self.header = titles.iter().map(|title| title.to_string()).collect();
    }

    fn set_body(&mut self, board: BoardId, columns: usize, rows: usize) {
        self.board = Some(board);
        self.rows = vec![vec![String::new(); columns]; rows];
    }

    fn set_cell(&mut self, addr: CellAddr, content: &str) {
        match self
            .rows
            .get_mut(addr.clue)
            .and_then(|row| row.get_mut(addr.category))
        {
            Some(cell) => {
                cell.clear();
                cell.push_str(content);
            }
            None => log::trace!("No cell at {}, skipping update", addr),
        }
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn set_restart(&mut self, enabled: bool, label: &str) {
        self.restart_enabled = enabled;
        self.restart_label = label.to_string();
    }

    fn show_error(&mut self, error: Option<&LoadError>) {
        self.error = error.map(|err| err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    fn board(id: u32, prefix: &str) -> Board {
        Board::new(
            BoardId(id),
            core::array::from_fn(|c| {
                Category::new(
                    format!("{prefix} {c}"),
                    core::array::from_fn(|i| Clue::new(format!("q{c}{i}"), format!("a{c}{i}"))),
                )
            }),
        )
    }

    #[test]
    fn render_fills_header_and_placeholders() {
        let mut surface = GridSurface::new();

        render_board(&board(1, "title"), &mut surface);

        assert_eq!(surface.board(), Some(BoardId(1)));
        assert_eq!(surface.header().len(), NUM_CATEGORIES);
        assert_eq!(surface.header()[4], "title 4");
        assert_eq!(surface.rows().len(), NUM_CLUES);
        assert!(surface
            .rows()
            .iter()
            .all(|row| row.len() == NUM_CATEGORIES
                && row.iter().all(|cell| cell == HIDDEN_PLACEHOLDER)));
    }

    #[test]
    fn render_twice_is_identical() {
        let board = board(1, "same");
        let mut once = GridSurface::new();
        render_board(&board, &mut once);

        let mut twice = once.clone();
        render_board(&board, &mut twice);

        assert_eq!(once, twice);
    }

    #[test]
    fn render_replaces_previous_board() {
        let mut surface = GridSurface::new();
        let mut first = board(1, "old");
        first.clue_mut(CellAddr::new(0, 0)).unwrap().activate();
        render_board(&first, &mut surface);
        assert_eq!(surface.cell(CellAddr::new(0, 0)), Some("q00"));

        render_board(&board(2, "new"), &mut surface);

        assert_eq!(surface.board(), Some(BoardId(2)));
        assert_eq!(surface.header()[0], "new 0");
        assert_eq!(surface.cell(CellAddr::new(0, 0)), Some(HIDDEN_PLACEHOLDER));
    }

    #[test]
    fn set_cell_out_of_range_is_ignored() {
        let mut surface = GridSurface::new();
        render_board(&board(1, "t"), &mut surface);
        let before = surface.clone();

        surface.set_cell(CellAddr::new(NUM_CATEGORIES, 0), "nope");
        surface.set_cell(CellAddr::new(0, NUM_CLUES), "nope");

        assert_eq!(surface, before);
    }

    #[test]
    fn show_error_sets_and_clears_message() {
        let mut surface = GridSurface::new();

        surface.show_error(Some(&LoadError::Network("timed out".into())));
        assert_eq!(surface.error(), Some("Network error: timed out"));

        surface.show_error(None);
        assert_eq!(surface.error(), None);
    }
}
