use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No board has been loaded yet.
    #[default]
    Idle,
    Loading,
    Ready,
}

impl GamePhase {
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn restart_label(self) -> &'static str {
        use GamePhase::*;
        match self {
            Idle => "Start",
            Loading => "Loading…",
            Ready => "Restart",
        }
    }
}

/// Proof that a load was started; hand it back to
/// [`GameLifecycle::complete_load`] with the result.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    board: BoardId,
}

impl LoadTicket {
    /// Id the board will get if this load succeeds.
    pub fn board(&self) -> BoardId {
        self.board
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Another load is still in flight; nothing was started.
    Busy,
    Loaded(BoardId),
    Failed(LoadError),
    /// The ticket does not belong to the pending load; the result was dropped.
    Stale,
}

/// Owns the current board and sequences `Idle → Loading → Ready`.
///
/// Only one load may be in flight. The board is swapped in whole once a load
/// completes; a failed load leaves the previous board in place.
#[derive(Clone, Debug, Default)]
pub struct GameLifecycle {
    phase: GamePhase,
    board: Option<Board>,
    next_board: BoardId,
    pending: Option<LoadTicket>,
    last_error: Option<LoadError>,
}

impl GameLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn last_error(&self) -> Option<&LoadError> {
        self.last_error.as_ref()
    }

    /// Enters `Loading`, or returns `None` if a load is already running.
    pub fn begin_load<S: DisplaySurface + ?Sized>(&mut self, surface: &mut S) -> Option<LoadTicket> {
        if self.phase.is_loading() {
            log::debug!("Load already in flight, ignoring restart");
            return None;
        }

        let ticket = LoadTicket {
            board: self.next_board,
        };
        self.next_board = self.next_board.next();
        self.pending = Some(ticket);
        self.last_error = None;
        self.phase = GamePhase::Loading;

        surface.show_error(None);
        surface.set_loading(true);
        surface.set_restart(false, self.phase.restart_label());

        log::info!("Loading board {:?}", ticket.board);
        Some(ticket)
    }

    /// Finishes the load started with `ticket`.
    pub fn complete_load<S: DisplaySurface + ?Sized>(
        &mut self,
        ticket: LoadTicket,
        result: Result<[Category; NUM_CATEGORIES]>,
        surface: &mut S,
    ) -> LoadOutcome {
        if self.pending != Some(ticket) {
            log::warn!(
                "Dropping result for {:?}, pending load is {:?}",
                ticket.board,
                self.pending.map(|pending| pending.board)
            );
            return LoadOutcome::Stale;
        }
        self.pending = None;

        match result {
            Ok(categories) => {
                let board = Board::new(ticket.board, categories);
                self.board = Some(board);
                self.enter_settled(surface);
                if let Some(board) = &self.board {
                    render_board(board, surface);
                }
                log::info!("Board {:?} ready", ticket.board);
                LoadOutcome::Loaded(ticket.board)
            }
            Err(err) => {
                log::warn!("Loading board {:?} failed: {}", ticket.board, err);
                self.enter_settled(surface);
                surface.show_error(Some(&err));
                self.last_error = Some(err.clone());
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Routes a click to the current board, if any.
    pub fn activate<S: DisplaySurface + ?Sized>(
        &mut self,
        event: CellEvent,
        surface: &mut S,
    ) -> RevealOutcome {
        match self.board.as_mut() {
            Some(board) => activate_cell(board, event, surface),
            None => {
                log::debug!("Ignoring click at {}, no board loaded", event.addr);
                RevealOutcome::Ignored
            }
        }
    }

    /// Runs a whole load with `loader`, start to finish.
    pub async fn restart<C: Catalog, S: DisplaySurface + ?Sized>(
        &mut self,
        loader: &mut CategoryLoader<C>,
        surface: &mut S,
    ) -> LoadOutcome {
        let Some(ticket) = self.begin_load(surface) else {
            return LoadOutcome::Busy;
        };
        let result = loader.load_categories().await;
        self.complete_load(ticket, result, surface)
    }

    fn enter_settled<S: DisplaySurface + ?Sized>(&mut self, surface: &mut S) {
        self.phase = if self.board.is_some() {
            GamePhase::Ready
        } else {
            GamePhase::Idle
        };
        surface.set_loading(false);
        surface.set_restart(true, self.phase.restart_label());
    }
}
