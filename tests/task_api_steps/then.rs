//! Then steps for task API BDD scenarios.

use super::world::TaskApiWorld;
use axum::http::{Method, StatusCode};
use rstest_bdd_macros::then;
use serde_json::json;

#[then("the response status is {code:u16}")]
fn response_status_is(world: &TaskApiWorld, code: u16) -> Result<(), eyre::Report> {
    let status = world
        .last_status
        .ok_or_else(|| eyre::eyre!("no response recorded in scenario world"))?;
    if status.as_u16() != code {
        return Err(eyre::eyre!(
            "expected status {code}, got {status} with body {:?}",
            world.last_body
        ));
    }
    Ok(())
}

#[then("the task can be retrieved")]
fn task_can_be_retrieved(world: &mut TaskApiWorld) -> Result<(), eyre::Report> {
    let created = world
        .last_body
        .clone()
        .ok_or_else(|| eyre::eyre!("no create response recorded"))?;
    let uri = world.task_uri()?;
    let (status, body) = world.send(Method::GET, &uri, None)?;
    if status != StatusCode::OK {
        return Err(eyre::eyre!("lookup returned {status}"));
    }
    if body["data"] != created["data"] {
        return Err(eyre::eyre!(
            "retrieved task {} does not match created task {}",
            body["data"],
            created["data"]
        ));
    }
    Ok(())
}

#[then(r#"the task has name "{name}" and status "{status}""#)]
fn task_has_fields(world: &TaskApiWorld, name: String, status: String) -> Result<(), eyre::Report> {
    let body = world
        .last_body
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no response recorded in scenario world"))?;
    if body["data"]["name"] != name.as_str() || body["data"]["status"] != status.as_str() {
        return Err(eyre::eyre!("unexpected task {}", body["data"]));
    }
    Ok(())
}

#[then("the response confirms the deletion")]
fn response_confirms_deletion(world: &TaskApiWorld) -> Result<(), eyre::Report> {
    let task_id = world
        .task_id
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    let expected = json!({ "message": format!("Task {task_id} deleted") });
    if world.last_body.as_ref() != Some(&expected) {
        return Err(eyre::eyre!(
            "expected {expected}, got {:?}",
            world.last_body
        ));
    }
    Ok(())
}

#[then("the task can no longer be retrieved")]
fn task_is_gone(world: &mut TaskApiWorld) -> Result<(), eyre::Report> {
    let uri = world.task_uri()?;
    let (status, _) = world.send(Method::GET, &uri, None)?;
    if status != StatusCode::NOT_FOUND {
        return Err(eyre::eyre!("expected 404 after delete, got {status}"));
    }
    Ok(())
}

#[then("the user has no tasks")]
fn user_has_no_tasks(world: &mut TaskApiWorld) -> Result<(), eyre::Report> {
    let uri = format!("/users/{}/tasks", world.user_id()?);
    let (_, body) = world.send(Method::GET, &uri, None)?;
    if body["data"] != json!([]) {
        return Err(eyre::eyre!("expected no tasks, got {}", body["data"]));
    }
    Ok(())
}
