use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::HookError;

/// A git hook event that git invokes exactly one script for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Timing {
    ApplypatchMsg,
    PreApplypatch,
    PostApplypatch,
    PreCommit,
    PrepareCommitMsg,
    CommitMsg,
    PostCommit,
    PreRebase,
    PostCheckout,
    PostMerge,
    PreReceive,
    Update,
    PostUpdate,
    PreAutoGc,
    PostRewrite,
}

impl Timing {
    pub const ALL: [Timing; 15] = [
        Timing::ApplypatchMsg,
        Timing::PreApplypatch,
        Timing::PostApplypatch,
        Timing::PreCommit,
        Timing::PrepareCommitMsg,
        Timing::CommitMsg,
        Timing::PostCommit,
        Timing::PreRebase,
        Timing::PostCheckout,
        Timing::PostMerge,
        Timing::PreReceive,
        Timing::Update,
        Timing::PostUpdate,
        Timing::PreAutoGc,
        Timing::PostRewrite,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Timing::ApplypatchMsg => "applypatch-msg",
            Timing::PreApplypatch => "pre-applypatch",
            Timing::PostApplypatch => "post-applypatch",
            Timing::PreCommit => "pre-commit",
            Timing::PrepareCommitMsg => "prepare-commit-msg",
            Timing::CommitMsg => "commit-msg",
            Timing::PostCommit => "post-commit",
            Timing::PreRebase => "pre-rebase",
            Timing::PostCheckout => "post-checkout",
            Timing::PostMerge => "post-merge",
            Timing::PreReceive => "pre-receive",
            Timing::Update => "update",
            Timing::PostUpdate => "post-update",
            Timing::PreAutoGc => "pre-auto-gc",
            Timing::PostRewrite => "post-rewrite",
        }
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timing {
    type Err = HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timing::ALL
            .iter()
            .copied()
            .find(|timing| timing.as_str() == s)
            .ok_or_else(|| HookError::UnknownTiming(s.to_string()))
    }
}
