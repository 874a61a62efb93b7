//! Then steps for issue creation BDD scenarios.

use super::world::IssueWorld;
use issuesmith::issue::adapters::memory::SubmittedMutation;
use rstest_bdd_macros::then;

fn submissions(world: &IssueWorld) -> Result<Vec<SubmittedMutation>, eyre::Report> {
    world
        .transport
        .submissions()
        .map_err(|err| eyre::eyre!("read transport submissions: {err}"))
}

#[then(r#"the created issue identifier is "{identifier}""#)]
fn created_identifier(world: &IssueWorld, identifier: String) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;
    let issue = result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected issue creation failure: {err}"))?;

    if issue.identifier != identifier {
        return Err(eyre::eyre!(
            "expected identifier {identifier}, found {}",
            issue.identifier
        ));
    }
    Ok(())
}

#[then(r#"creation fails with a message containing "{fragment}""#)]
fn creation_fails_with(world: &IssueWorld, fragment: String) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;

    match result {
        Err(err) if err.to_string().contains(&fragment) => Ok(()),
        Err(err) => Err(eyre::eyre!(
            "expected error containing {fragment:?}, got {err}"
        )),
        Ok(issue) => Err(eyre::eyre!(
            "expected creation to fail, but {} was created",
            issue.identifier
        )),
    }
}

#[then("exactly one mutation was sent")]
fn one_mutation_sent(world: &IssueWorld) -> Result<(), eyre::Report> {
    let sent = submissions(world)?;
    if sent.len() != 1 {
        return Err(eyre::eyre!("expected one mutation, found {}", sent.len()));
    }
    Ok(())
}

#[then("no mutation was sent")]
fn no_mutation_sent(world: &IssueWorld) -> Result<(), eyre::Report> {
    let sent = submissions(world)?;
    if !sent.is_empty() {
        return Err(eyre::eyre!("expected no mutation, found {}", sent.len()));
    }
    Ok(())
}

#[then("the sent mutation carries no template")]
fn mutation_without_template(world: &IssueWorld) -> Result<(), eyre::Report> {
    let sent = submissions(world)?;
    let input = sent
        .last()
        .and_then(SubmittedMutation::input)
        .ok_or_else(|| eyre::eyre!("no mutation input was recorded"))?;

    if input.get("templateId").is_some() {
        return Err(eyre::eyre!("expected no templateId in {input}"));
    }
    Ok(())
}
