//! Concurrent writers against a shared repository.

use super::helpers::{create_user, repo, valid_draft};
use rstest::rstest;
use std::collections::HashSet;
use std::sync::Arc;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskId, TaskPatch},
    ports::TaskRepository,
};
use tokio::task::JoinSet;

const WRITERS: usize = 64;

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_for_one_user_are_all_kept(
    #[from(repo)] in_memory: InMemoryTaskRepository,
) -> Result<(), eyre::Report> {
    let repo = Arc::new(in_memory);
    let user = create_user(repo.as_ref()).await?;

    let mut writers = JoinSet::new();
    for index in 0..WRITERS {
        let shared = Arc::clone(&repo);
        let owner = user.id().clone();
        writers.spawn(async move {
            shared
                .create_task(&owner, valid_draft(&format!("task-{index}")))
                .await
        });
    }

    let mut created = HashSet::new();
    while let Some(joined) = writers.join_next().await {
        let task = joined??;
        created.insert(task.id());
    }

    let stored: HashSet<TaskId> = repo
        .get_tasks_by_user(user.id())
        .await?
        .iter()
        .map(|task| task.id())
        .collect();
    eyre::ensure!(created.len() == WRITERS, "expected {WRITERS} distinct ids");
    eyre::ensure!(stored == created, "every created task should be stored");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_updates_to_different_tasks_do_not_interfere(
    #[from(repo)] in_memory: InMemoryTaskRepository,
) -> Result<(), eyre::Report> {
    let repo = Arc::new(in_memory);
    let user = create_user(repo.as_ref()).await?;
    let mut ids = Vec::with_capacity(WRITERS);
    for index in 0..WRITERS {
        let task = repo
            .create_task(user.id(), valid_draft(&format!("task-{index}")))
            .await?;
        ids.push(task.id());
    }

    let mut writers = JoinSet::new();
    for task_id in ids.iter().copied() {
        let shared = Arc::clone(&repo);
        let owner = user.id().clone();
        writers.spawn(async move {
            let patch = TaskPatch::new().with_status(format!("done-{task_id}"));
            shared.update_task(&owner, task_id, patch).await
        });
    }
    while let Some(joined) = writers.join_next().await {
        joined??;
    }

    for task in repo.get_tasks_by_user(user.id()).await? {
        eyre::ensure!(
            task.status() == format!("done-{}", task.id()),
            "task {} lost its update",
            task.id()
        );
    }
    Ok(())
}
