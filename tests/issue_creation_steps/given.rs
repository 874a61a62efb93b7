//! Given steps for issue creation BDD scenarios.

use super::world::IssueWorld;
use issuesmith::issue::domain::IssueRequest;
use rstest_bdd_macros::given;
use serde_json::json;

#[given(r#"a tracker with team "{name}" keyed "{key}""#)]
fn tracker_with_team(world: &mut IssueWorld, name: String, key: String) {
    let team_id = format!("team-{}", key.to_lowercase());
    world.configure_directory(|directory| directory.with_team(team_id, name, key));
}

#[given(r#"a project "{name}" whose template lookup fails"#)]
fn project_with_failing_templates(world: &mut IssueWorld, name: String) {
    let project_id = format!("project-{}", name.to_lowercase());
    world.configure_directory(|directory| {
        directory
            .with_project(project_id, name)
            .with_failing_templates("template service offline")
    });
}

#[given("the tracker reports an unsuccessful creation")]
fn tracker_reports_failure(world: &mut IssueWorld) -> Result<(), eyre::Report> {
    world
        .transport
        .push_response(Some(json!({
            "issueCreate": {"success": false, "issue": null}
        })))
        .map_err(|err| eyre::eyre!("script transport response: {err}"))
}

#[given(r#"an issue request titled "{title}" for team "{team}""#)]
fn issue_request(world: &mut IssueWorld, title: String, team: String) {
    world.pending_request = Some(IssueRequest::new(title, team));
}

#[given(r#"the request is assigned to "{assignee}""#)]
fn request_assigned_to(world: &mut IssueWorld, assignee: String) -> Result<(), eyre::Report> {
    world.update_request(|request| request.with_assignee(assignee))
}

#[given(r#"the request targets project "{project}" with its default template"#)]
fn request_targets_project(world: &mut IssueWorld, project: String) -> Result<(), eyre::Report> {
    world.update_request(|request| {
        request
            .with_project(project)
            .with_auto_apply_project_template(true)
    })
}
