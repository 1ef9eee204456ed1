//! `gpm pulls` command.

use std::io::Write;

use colored::Colorize;

use super::block_on;
use crate::context::ServiceContext;
use crate::error::GpmError;
use crate::registry::Registry;

/// Execute the `pulls` command.
///
/// Looks up `name` in the registry and lists its open pull requests, using
/// the entry's author as the repository owner.
///
/// # Errors
///
/// Returns an error if the repository is not tracked, no hosting client is
/// configured, or the API request fails.
pub fn run(
    ctx: &ServiceContext,
    registry: &Registry<'_>,
    name: &str,
    out: &mut dyn Write,
) -> Result<(), GpmError> {
    let entry = registry.get(name)?;
    let hosting = ctx.hosting()?;
    let pulls = block_on(hosting.pull_requests(&entry.author, &entry.name))?;

    if pulls.is_empty() {
        writeln!(out, "No open pull requests for {}/{}.", entry.author, entry.name)?;
        return Ok(());
    }

    for pr in &pulls {
        let draft = if pr.draft { " [draft]".yellow().to_string() } else { String::new() };
        writeln!(
            out,
            "#{} {} ({}) {} -> {}{draft}",
            pr.number,
            pr.title,
            pr.user.login,
            pr.head.ref_name,
            pr.base.ref_name
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::ports::hosting::{BranchRef, PullRequest, User};
    use crate::registry::RegistryEntry;
    use crate::testing::{MemFs, ScriptedGit, StaticHosting};

    fn branch(name: &str) -> BranchRef {
        BranchRef { label: format!("octo:{name}"), ref_name: name.to_string(), sha: "abc".into() }
    }

    fn pull(number: u64, title: &str, draft: bool) -> PullRequest {
        PullRequest {
            number,
            title: title.to_string(),
            state: "open".into(),
            html_url: String::new(),
            user: User { login: "octo".into(), id: 1, html_url: String::new() },
            body: None,
            draft,
            labels: Vec::new(),
            milestone: None,
            head: branch("feature"),
            base: branch("main"),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn context(pulls: Vec<PullRequest>) -> ServiceContext {
        ServiceContext {
            fs: Box::new(MemFs::new()),
            git: Box::new(ScriptedGit::new()),
            hosting: Some(Box::new(StaticHosting { pulls, issues: Vec::new() })),
        }
    }

    fn track_demo(registry: &Registry<'_>) {
        registry
            .add(RegistryEntry {
                name: "demo".into(),
                author: "octo".into(),
                url: "git@github.com:octo/demo.git".into(),
                path: "/src/demo".into(),
            })
            .unwrap();
    }

    #[test]
    fn lists_pull_requests() {
        let ctx = context(vec![pull(7, "Add parser", false), pull(8, "WIP", true)]);
        let registry = Registry::new(&ctx, Path::new("/cache/repos.json"));
        track_demo(&registry);
        let mut out = Vec::new();

        run(&ctx, &registry, "demo", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("#7 Add parser (octo) feature -> main\n"));
        assert!(text.contains("#8 WIP (octo)"));
        assert!(text.contains("[draft]"));
    }

    #[test]
    fn empty_list_has_message() {
        let ctx = context(Vec::new());
        let registry = Registry::new(&ctx, Path::new("/cache/repos.json"));
        track_demo(&registry);
        let mut out = Vec::new();

        run(&ctx, &registry, "demo", &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "No open pull requests for octo/demo.\n");
    }

    #[test]
    fn unknown_repository_is_an_error() {
        let ctx = context(Vec::new());
        let registry = Registry::new(&ctx, Path::new("/cache/repos.json"));
        track_demo(&registry);
        let mut out = Vec::new();

        let err = run(&ctx, &registry, "nope", &mut out).unwrap_err();

        assert!(matches!(err, GpmError::UnknownRepository(name) if name == "nope"));
    }
}
