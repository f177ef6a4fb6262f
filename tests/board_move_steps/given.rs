//! Given steps for board move BDD scenarios.

use super::world::{BoardMoveWorld, PROJECT, run_async};
use aalto::board::domain::{TaskId, TaskRecord};
use aalto::board::ports::TaskStoreError;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a board with task {id:i64} in column "{column}""#)]
fn board_with_task(
    world: &mut BoardMoveWorld,
    id: i64,
    column: String,
) -> Result<(), eyre::Report> {
    world.seeded.push(TaskRecord::new(TaskId::new(id), column));
    world
        .store
        .seed_project(PROJECT, world.seeded.clone())
        .wrap_err("seed the in-memory store for the scenario")?;
    Ok(())
}

#[given("the board has been loaded from the store")]
fn board_loaded(world: &mut BoardMoveWorld) -> Result<(), eyre::Report> {
    run_async(world.engine.refresh()).wrap_err("load the board for the scenario")?;
    Ok(())
}

#[given("the store rejects status updates")]
fn store_rejects_updates(world: &mut BoardMoveWorld) -> Result<(), eyre::Report> {
    world
        .store
        .set_update_failure(Some(TaskStoreError::Status { code: 500 }))
        .wrap_err("inject an update failure into the store")?;
    Ok(())
}

#[given("the store data has become corrupt")]
fn store_data_corrupt(world: &mut BoardMoveWorld) -> Result<(), eyre::Report> {
    let corrupt: Vec<TaskRecord> = world
        .seeded
        .iter()
        .map(|record| TaskRecord::new(record.id(), "archived"))
        .collect();
    world
        .store
        .seed_project(PROJECT, corrupt)
        .wrap_err("reseed the store with corrupt records")?;
    Ok(())
}
