//! When steps for issue creation BDD scenarios.

use super::world::{IssueWorld, run_async};
use issuesmith::issue::services::IssueCreationService;
use rstest_bdd_macros::when;
use std::sync::Arc;

#[when("the issue is created")]
fn create_issue(world: &mut IssueWorld) -> Result<(), eyre::Report> {
    let request = world
        .pending_request
        .clone()
        .ok_or_else(|| eyre::eyre!("missing pending request in scenario world"))?;
    let directory = Arc::new(std::mem::take(&mut world.directory));
    let service = IssueCreationService::new(
        Arc::clone(&directory),
        directory,
        Arc::new(world.transport.clone()),
    );

    world.last_result = Some(run_async(service.create_issue(&request)));
    Ok(())
}
