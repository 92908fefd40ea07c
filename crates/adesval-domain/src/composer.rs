//! Folds building-block reports into one process report.
//!
//! Blocks run in the order the caller declares them. A block may require an earlier block to
//! have `PASSED` (or at least not `FAILED`); when the requirement does not hold the block is
//! recorded as not evaluated and never executes. The folded indication is `PASSED` only if
//! every folded block passed, otherwise it is the verdict of the first folded block that did
//! not, in declared order. A block gated on a prerequisite that was never run folds as
//! `INDETERMINATE/GENERIC`.

use adesval_types::{
    BlockId, BlockOutcome, BlockReport, Conclusion, Indication, Message, MessageTag, SubIndication,
};
use rayon::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    Passed(BlockId),
    NotFailed(BlockId),
}

impl Requirement {
    fn block(self) -> BlockId {
        match self {
            Requirement::Passed(b) | Requirement::NotFailed(b) => b,
        }
    }

    fn holds_for(self, report: &BlockReport) -> bool {
        match (self, report.indication()) {
            (_, None) => false,
            (Requirement::Passed(_), Some(ind)) => ind == Indication::Passed,
            (Requirement::NotFailed(_), Some(ind)) => ind != Indication::Failed,
        }
    }
}

struct Entry {
    report: BlockReport,
    folded: bool,
}

pub struct Composer {
    block: BlockId,
    token_id: String,
    reference_time: OffsetDateTime,
    entries: Vec<Entry>,
}

impl Composer {
    pub fn new(block: BlockId, token_id: impl Into<String>, reference_time: OffsetDateTime) -> Self {
        Self {
            block,
            token_id: token_id.into(),
            reference_time,
            entries: Vec::new(),
        }
    }

    /// Runs `build` unless a requirement is unmet, in which case `block` is recorded as not
    /// evaluated. Returns the new report when the block ran.
    pub fn run<F>(&mut self, block: BlockId, requires: &[Requirement], build: F) -> Option<&BlockReport>
    where
        F: FnOnce(&Composer) -> BlockReport,
    {
        if let Some(blocker) = self.unmet(requires) {
            tracing::debug!(
                process = %self.block,
                block = %block,
                token = %self.token_id,
                blocked_by = %blocker,
                "block not evaluated"
            );
            self.entries.push(Entry {
                report: BlockReport::not_evaluated(
                    block,
                    self.token_id.clone(),
                    self.reference_time,
                    blocker,
                ),
                folded: true,
            });
            return None;
        }
        let report = build(self);
        tracing::debug!(
            process = %self.block,
            block = %report.block,
            token = %report.token_id,
            indication = ?report.indication(),
            "block evaluated"
        );
        self.entries.push(Entry {
            report,
            folded: true,
        });
        self.entries.last().map(|e| &e.report)
    }

    /// Adds an already-built report that takes part in the fold.
    pub fn record(&mut self, report: BlockReport) {
        self.entries.push(Entry {
            report,
            folded: true,
        });
    }

    /// Adds a report kept for the audit trail only; it never influences the fold.
    pub fn attach(&mut self, report: BlockReport) {
        self.entries.push(Entry {
            report,
            folded: false,
        });
    }

    /// Latest report recorded for `block`.
    pub fn report(&self, block: BlockId) -> Option<&BlockReport> {
        self.entries
            .iter()
            .rev()
            .map(|e| &e.report)
            .find(|r| r.block == block)
    }

    pub fn reference_time(&self) -> OffsetDateTime {
        self.reference_time
    }

    fn unmet(&self, requires: &[Requirement]) -> Option<BlockId> {
        requires.iter().find_map(|req| {
            let holds = self
                .report(req.block())
                .is_some_and(|report| req.holds_for(report));
            (!holds).then_some(req.block())
        })
    }

    /// Conclusion standing in for a block gated on a prerequisite that never ran.
    fn missing_prerequisite(&self, report: &BlockReport) -> Option<Conclusion> {
        let BlockOutcome::NotEvaluated { blocked_by } = &report.outcome else {
            return None;
        };
        let blocked_by = *blocked_by;
        if self.report(blocked_by).is_some() {
            return None;
        }
        let mut c = Conclusion::disqualified(Indication::Indeterminate, SubIndication::Generic);
        c.errors.push(
            Message::new(MessageTag::PrerequisiteNotEvaluated)
                .arg(report.block.to_string())
                .arg(blocked_by.to_string()),
        );
        Some(c)
    }

    pub fn fold(&self) -> Conclusion {
        let mut out = Conclusion::passed();
        let mut decided = false;
        for entry in self.entries.iter().filter(|e| e.folded) {
            let missing = self.missing_prerequisite(&entry.report);
            let Some(c) = entry.report.conclusion().or(missing.as_ref()) else {
                continue;
            };
            out.warnings.extend(c.warnings.iter().cloned());
            out.infos.extend(c.infos.iter().cloned());
            if !decided && !c.is_passed() {
                out.indication = c.indication;
                out.sub_indication = c.sub_indication;
                out.errors = c.errors.clone();
                decided = true;
            }
        }
        out
    }

    pub fn finish(self) -> BlockReport {
        let conclusion = self.fold();
        self.finish_with(conclusion)
    }

    /// Closes the process with a conclusion selected by the caller.
    pub fn finish_with(self, conclusion: Conclusion) -> BlockReport {
        BlockReport {
            block: self.block,
            token_id: self.token_id,
            reference_time: self.reference_time,
            outcome: BlockOutcome::Evaluated {
                constraints: Vec::new(),
                conclusion,
            },
            children: self.entries.into_iter().map(|e| e.report).collect(),
        }
    }
}

/// One re-evaluation of the same chains at a different reference instant.
#[derive(Clone, Debug)]
pub struct TimeIndexedRun {
    pub time: OffsetDateTime,
    pub report: BlockReport,
}

/// Runs `evaluate` once per distinct instant, in parallel; results come back sorted by time.
pub fn run_at_times<F>(times: &[OffsetDateTime], evaluate: F) -> Vec<TimeIndexedRun>
where
    F: Fn(OffsetDateTime) -> BlockReport + Sync + Send,
{
    let mut times = times.to_vec();
    times.sort();
    times.dedup();
    times
        .into_par_iter()
        .map(|time| TimeIndexedRun {
            time,
            report: evaluate(time),
        })
        .collect()
}

/// Earliest run whose report passed.
pub fn earliest_passing(runs: &[TimeIndexedRun]) -> Option<&TimeIndexedRun> {
    runs.iter().find(|r| r.report.is_passed())
}
