//! Auto-detection of dependency changes between two revisions
//!
//! Workflow: resolve revisions → list changed files → classify ecosystems →
//! extract per ecosystem (Go first, then Rust) → aggregate report.

use crate::config::DetectionContext;
use crate::domain::{DetectionMode, Ecosystem, EcosystemReport};
use crate::error::{AppError, RevisionSide, VcsError};
use crate::extractor::ChangeExtractor;
use crate::vcs::RevisionStore;
use tracing::{debug, info};

/// Branch assumed when `origin/HEAD` is not set
const FALLBACK_BRANCH: &str = "main";

/// A concrete revision range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionRange {
    pub base: String,
    pub head: String,
}

/// Fill in missing revisions.
///
/// head defaults to `HEAD`. base defaults to the merge base of the default
/// remote branch and head, then to the parent of head.
pub fn resolve_revisions(
    ctx: &DetectionContext,
    store: &dyn RevisionStore,
) -> Result<RevisionRange, VcsError> {
    let head = match &ctx.head {
        Some(head) => head.clone(),
        None => {
            let head = store
                .rev_parse("HEAD")
                .ok_or_else(|| VcsError::unresolved(RevisionSide::Head))?;
            debug!(head = head.as_str(), "head revision defaulted to HEAD");
            head
        }
    };

    let base = match &ctx.base {
        Some(base) => base.clone(),
        None => fallback_base(store, &head)
            .ok_or_else(|| VcsError::unresolved(RevisionSide::Base))?,
    };

    Ok(RevisionRange { base, head })
}

fn fallback_base(store: &dyn RevisionStore, head: &str) -> Option<String> {
    let branch = store
        .default_remote_branch()
        .unwrap_or_else(|| FALLBACK_BRANCH.to_string());
    let remote = format!("origin/{}", branch);

    if let Some(base) = store.merge_base(&remote, head) {
        info!(branch = remote.as_str(), base = base.as_str(), "using merge base as base revision");
        return Some(base);
    }

    let parent = store.rev_parse(&format!("{}~1", head))?;
    info!(base = parent.as_str(), "using parent of head as base revision");
    Some(parent)
}

/// Run auto-detection for the context
pub fn detect(ctx: &DetectionContext, store: &dyn RevisionStore) -> Result<EcosystemReport, AppError> {
    let range = resolve_revisions(ctx, store)?;
    info!(base = range.base.as_str(), head = range.head.as_str(), "detecting dependency changes");

    let changed: Vec<String> = store
        .changed_files(&range.base, &range.head)
        .into_iter()
        .filter(|path| ctx.in_scope(path))
        .collect();
    debug!(?changed, "changed files");

    if changed.is_empty() {
        info!("no files changed");
        return Ok(EcosystemReport::none(DetectionMode::Auto));
    }

    let present: Vec<Ecosystem> = ctx
        .ecosystems
        .iter()
        .copied()
        .filter(|eco| changed.iter().any(|path| eco.owns_file(path)))
        .collect();

    if present.is_empty() {
        info!("no dependency files changed");
        return Ok(EcosystemReport::none(DetectionMode::Auto));
    }
    info!(ecosystems = ?present, "dependency files changed");

    let extractor = ChangeExtractor::new(store, &range.base, &range.head);
    let mut changes = Vec::new();
    let mut removed = Vec::new();

    for &ecosystem in &present {
        let extracted = extractor.extract(ecosystem, &changed);
        changes.extend(extracted.changes.into_vec().into_iter().map(|c| (ecosystem, c)));
        removed.extend(extracted.removed.into_vec().into_iter().map(|c| (ecosystem, c)));
    }

    let report = EcosystemReport::detected(&present, changes, removed);
    info!(
        ecosystem = %report.ecosystem,
        has_changes = report.has_changes,
        dependencies = report.dependencies_csv().as_str(),
        "detection finished"
    );
    Ok(report)
}
