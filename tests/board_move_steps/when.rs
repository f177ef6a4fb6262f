//! When steps for board move BDD scenarios.

use super::world::{BoardMoveWorld, run_async};
use aalto::board::domain::{TaskId, TaskStatus};
use aalto::board::services::DropEvent;
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"the card for task {id:i64} is dropped on column "{column}""#)]
fn card_dropped(world: &mut BoardMoveWorld, id: i64, column: String) -> Result<(), eyre::Report> {
    let destination = TaskStatus::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid destination column in scenario: {err}"))?;
    let source = world
        .engine
        .board()
        .read()
        .wrap_err("read the board for the drop gesture")?
        .status_of(TaskId::new(id))
        .ok_or_else(|| eyre::eyre!("task {id} is not on the board"))?;

    let outcome = run_async(
        world
            .controller
            .handle_drop(DropEvent::new(TaskId::new(id), source, destination)),
    )
    .wrap_err("handle the drop gesture")?;
    world.last_outcome = Some(outcome);
    Ok(())
}
