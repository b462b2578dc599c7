use crate::*;

/// Applies a cell activation to `board` and updates that one cell on `surface`.
///
/// Events for another board, or for an address outside the grid, are dropped.
pub fn activate_cell<S: DisplaySurface + ?Sized>(
    board: &mut Board,
    event: CellEvent,
    surface: &mut S,
) -> RevealOutcome {
    if event.board != board.id() {
        log::debug!(
            "Ignoring click on {} for stale board {:?}, current is {:?}",
            event.addr,
            event.board,
            board.id()
        );
        return RevealOutcome::Ignored;
    }

    let Some(clue) = board.clue_mut(event.addr) else {
        log::warn!("Ignoring click outside the board at {}", event.addr);
        return RevealOutcome::Ignored;
    };

    let outcome = clue.activate();
    if outcome.has_update() {
        surface.set_cell(event.addr, clue.visible_text());
    }
    log::trace!("{} -> {:?}", event.addr, outcome);
    outcome
}
