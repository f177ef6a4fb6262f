//! Then steps for board move BDD scenarios.

use super::world::{BoardMoveWorld, PROJECT, run_async};
use aalto::board::adapters::memory::MoveNotification;
use aalto::board::domain::{TaskId, TaskStatus};
use aalto::board::ports::TaskStore;
use eyre::WrapErr;
use rstest_bdd_macros::then;

#[then(r#"the board shows task {id:i64} in column "{column}""#)]
fn board_shows_task(world: &BoardMoveWorld, id: i64, column: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid expected column in scenario: {err}"))?;
    let actual = world
        .engine
        .board()
        .read()
        .wrap_err("read the board for the assertion")?
        .status_of(TaskId::new(id));

    if actual != Some(expected) {
        return Err(eyre::eyre!(
            "expected task {id} in column {expected}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"the store records task {id:i64} as "{status}""#)]
fn store_records_task(world: &BoardMoveWorld, id: i64, status: String) -> Result<(), eyre::Report> {
    let records = run_async(world.store.fetch_all(PROJECT))
        .wrap_err("fetch the store records for the assertion")?;
    let record = records
        .iter()
        .find(|record| record.id() == TaskId::new(id))
        .ok_or_else(|| eyre::eyre!("task {id} is not in the store"))?;

    if record.status() != status {
        return Err(eyre::eyre!(
            "expected store status {status}, found {}",
            record.status()
        ));
    }
    Ok(())
}

#[then("a success notification was emitted once for task {id:i64}")]
fn success_notification_emitted(world: &BoardMoveWorld, id: i64) -> Result<(), eyre::Report> {
    expect_single(world, MoveNotification::Succeeded(TaskId::new(id)))
}

#[then("a failure notification was emitted once for task {id:i64}")]
fn failure_notification_emitted(world: &BoardMoveWorld, id: i64) -> Result<(), eyre::Report> {
    expect_single(world, MoveNotification::Failed(TaskId::new(id)))
}

#[then("a refresh failure notification was emitted")]
fn refresh_failure_notification_emitted(world: &BoardMoveWorld) -> Result<(), eyre::Report> {
    expect_single(world, MoveNotification::RefreshFailed)
}

#[then("no notification was emitted")]
fn no_notification_emitted(world: &BoardMoveWorld) -> Result<(), eyre::Report> {
    let events = world.notifier.events();
    if !events.is_empty() {
        return Err(eyre::eyre!("expected no notifications, found {events:?}"));
    }
    Ok(())
}

fn expect_single(world: &BoardMoveWorld, expected: MoveNotification) -> Result<(), eyre::Report> {
    let count = world
        .notifier
        .events()
        .iter()
        .filter(|event| **event == expected)
        .count();
    if count != 1 {
        return Err(eyre::eyre!(
            "expected exactly one {expected:?} notification, found {count}"
        ));
    }
    Ok(())
}
