//! Then steps for board interaction BDD scenarios.

use rstest_bdd_macros::then;
use taskboard::board::{
    adapters::memory::IssuedRequest,
    ports::{ApiError, BoardView},
    services::BoardControllerError,
};

use super::world::BoardWorld;

#[then(
    r#"exactly one task creation request carries title "{title}", description "{description}", date "{date}" and group "{group}""#
)]
fn one_task_creation_request(
    world: &BoardWorld,
    title: String,
    description: String,
    date: String,
    group: String,
) -> Result<(), eyre::Report> {
    let creations: Vec<_> = world
        .api
        .requests()
        .into_iter()
        .filter_map(|request| match request {
            IssuedRequest::CreateTask(input) => Some(input),
            _ => None,
        })
        .collect();
    eyre::ensure!(
        creations.len() == 1,
        "expected exactly one task creation, found {}",
        creations.len()
    );
    let input = creations
        .first()
        .ok_or_else(|| eyre::eyre!("expected a recorded task creation"))?;
    eyre::ensure!(input.title == title, "title mismatch: {}", input.title);
    eyre::ensure!(
        input.description == description,
        "description mismatch: {}",
        input.description
    );
    eyre::ensure!(input.due_date == date, "date mismatch: {}", input.due_date);
    eyre::ensure!(input.group == group, "group mismatch: {}", input.group);
    Ok(())
}

#[then(r#"exactly one group creation request carries name "{name}""#)]
fn one_group_creation_request(world: &BoardWorld, name: String) -> Result<(), eyre::Report> {
    let creations: Vec<_> = world
        .api
        .requests()
        .into_iter()
        .filter_map(|request| match request {
            IssuedRequest::CreateGroup(input) => Some(input),
            _ => None,
        })
        .collect();
    eyre::ensure!(
        creations.len() == 1,
        "expected exactly one group creation, found {}",
        creations.len()
    );
    let input = creations
        .first()
        .ok_or_else(|| eyre::eyre!("expected a recorded group creation"))?;
    eyre::ensure!(input.name == name, "name mismatch: {}", input.name);
    Ok(())
}

#[then("the new task form fields read back empty")]
fn task_form_is_empty(world: &BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.view.read_task_form().is_empty(),
        "task form should be cleared after a successful submit"
    );
    Ok(())
}

#[then("the new group form reads back empty")]
fn group_form_is_empty(world: &BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.view.read_group_form().name.is_empty(),
        "group form should be cleared after a successful submit"
    );
    Ok(())
}

#[then(r#"an importance request is posted for task id "{id}""#)]
fn importance_posted(world: &BoardWorld, id: String) -> Result<(), eyre::Report> {
    let matched = world.api.requests().iter().any(|request| {
        matches!(request, IssuedRequest::MarkImportant(task) if task.as_str() == id)
    });
    eyre::ensure!(matched, "no importance request recorded for id {id}");
    Ok(())
}

#[then(r#"a completion request is posted for task id "{id}""#)]
fn completion_posted(world: &BoardWorld, id: String) -> Result<(), eyre::Report> {
    let matched = world.api.requests().iter().any(|request| {
        matches!(request, IssuedRequest::CompleteTask(task) if task.as_str() == id)
    });
    eyre::ensure!(matched, "no completion request recorded for id {id}");
    Ok(())
}

#[then(r#"a sort request fetches "{url}""#)]
fn sort_fetched(world: &BoardWorld, url: String) -> Result<(), eyre::Report> {
    let matched = world.api.requests().iter().any(|request| {
        matches!(request, IssuedRequest::ApplySort(sort) if sort.as_str() == url)
    });
    eyre::ensure!(matched, "no sort request recorded for url {url}");
    Ok(())
}

#[then("the board is re-rendered exactly once")]
fn rerendered_once(world: &BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.view.render_count() == 1,
        "expected exactly one render, found {}",
        world.view.render_count()
    );
    Ok(())
}

#[then("the board is not re-rendered")]
fn not_rerendered(world: &BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.view.render_count() == 0,
        "expected no renders, found {}",
        world.view.render_count()
    );
    Ok(())
}

#[then("the action reports a server error with status {status:u16}")]
fn action_reports_server_error(world: &BoardWorld, status: u16) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(BoardControllerError::Api(ApiError::Server { status: reported })))
            if *reported == status =>
        {
            Ok(())
        }
        other => Err(eyre::eyre!(
            "expected a server error with status {status}, got {other:?}"
        )),
    }
}

#[then(r#"the new task form still holds title "{title}""#)]
fn task_form_still_holds(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let form = world.view.read_task_form();
    eyre::ensure!(
        form.title == title,
        "expected the typed title to survive, found '{}'",
        form.title
    );
    Ok(())
}

#[then("the panel is hidden")]
fn panel_hidden(world: &BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(!world.view.panel_visible(), "panel should be hidden");
    Ok(())
}

#[then("the panel is still visible")]
fn panel_still_visible(world: &BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.view.panel_visible(), "panel should stay visible");
    Ok(())
}
