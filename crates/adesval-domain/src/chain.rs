//! Ordered executor of checks producing one conclusion.
//!
//! A chain scans its checks once, in insertion order:
//! - `IGNORE` checks are skipped and leave no record
//! - a passing check contributes its success infos
//! - a failing `WARN`/`INFORM` check contributes a warning/info and the scan continues
//! - a failing `ENFORCED` check sets the terminal indication and stops the scan
//!
//! An evidence fault is a failure like any other: the level decides, and an `ENFORCED` one
//! ends the scan with `INDETERMINATE/EVIDENCE_STRUCTURE_FAILURE`.

use crate::check::Check;
use crate::policy::PolicySnapshot;
use adesval_types::{
    BlockId, BlockOutcome, BlockReport, Conclusion, ConstraintLevel, ConstraintRecord,
    ConstraintStatus, Indication, SubIndication,
};

struct Item<'a> {
    level: ConstraintLevel,
    check: Box<dyn Check + 'a>,
}

pub struct Chain<'a> {
    block: BlockId,
    token_id: String,
    snapshot: PolicySnapshot<'a>,
    items: Vec<Item<'a>>,
}

impl<'a> Chain<'a> {
    pub fn new(block: BlockId, token_id: impl Into<String>, snapshot: PolicySnapshot<'a>) -> Self {
        Self {
            block,
            token_id: token_id.into(),
            snapshot,
            items: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> PolicySnapshot<'a> {
        self.snapshot
    }

    /// Appends a check at the level the policy configures for its id.
    pub fn push(&mut self, check: impl Check + 'a) -> &mut Self {
        let level = self.snapshot.level(check.descriptor().id);
        self.push_at(level, check)
    }

    /// Appends a check at a level fixed by the process.
    pub fn push_at(&mut self, level: ConstraintLevel, check: impl Check + 'a) -> &mut Self {
        self.items.push(Item {
            level,
            check: Box::new(check),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn execute(self) -> BlockReport {
        let mut conclusion = Conclusion::passed();
        let mut constraints = Vec::new();
        let mut children = Vec::new();

        for Item { level, check } in &self.items {
            let level = *level;
            if level == ConstraintLevel::Ignore {
                continue;
            }
            let descriptor = check.descriptor();
            let mut record = ConstraintRecord {
                check_id: descriptor.id.to_string(),
                check: check.check_message(),
                level,
                status: ConstraintStatus::Ok,
                error: None,
                infos: Vec::new(),
            };

            let outcome = check.evaluate();
            if let Some(child) = check.child_report() {
                children.push(child.clone());
            }

            let (message, indication, sub_indication) = match outcome {
                Ok(true) => {
                    record.infos = check.success_infos();
                    conclusion.infos.extend(record.infos.iter().cloned());
                    constraints.push(record);
                    continue;
                }
                Ok(false) => (
                    check.failure_message(),
                    check.failure_indication(),
                    check.failure_sub_indication(),
                ),
                Err(fault) => {
                    tracing::warn!(
                        block = %self.block,
                        token = %self.token_id,
                        check = descriptor.id,
                        %level,
                        %fault,
                        "evidence contract violation"
                    );
                    (
                        fault.message(),
                        Indication::Indeterminate,
                        SubIndication::EvidenceStructureFailure,
                    )
                }
            };

            record.error = Some(message.clone());
            match level {
                ConstraintLevel::Enforced => {
                    record.status = ConstraintStatus::NotOk;
                    conclusion.errors.push(message);
                    conclusion.disqualify(indication, sub_indication);
                    constraints.push(record);
                    tracing::debug!(
                        block = %self.block,
                        token = %self.token_id,
                        check = descriptor.id,
                        indication = %conclusion.indication,
                        "enforced check failed"
                    );
                    break;
                }
                ConstraintLevel::Warn => {
                    record.status = ConstraintStatus::Warning;
                    conclusion.warnings.push(message);
                    constraints.push(record);
                }
                ConstraintLevel::Inform => {
                    record.status = ConstraintStatus::Information;
                    conclusion.infos.push(message);
                    constraints.push(record);
                }
                ConstraintLevel::Ignore => {}
            }
        }

        BlockReport {
            block: self.block,
            token_id: self.token_id,
            reference_time: self.snapshot.reference_time,
            outcome: BlockOutcome::Evaluated {
                constraints,
                conclusion,
            },
            children,
        }
    }
}
