use chrono::Utc;
use uuid::Uuid;

use crate::error::ScoreError;
use crate::metadata::MetadataSource;
use crate::model::dimensions::TestKind;
use crate::model::record::{ClientMetadata, ResultRecord, Submitter};
use crate::pipeline::stage1_parse::RawSubmission;
use crate::pipeline::stage5_record::{Stage5Inputs, run_stage5};
use crate::pipeline::stage6_deliver::{CollaboratorWarning, run_stage6};
use crate::pipeline::{ScoringProfile, compute};
use crate::report::DocumentRenderer;
use crate::sink::LogSink;

pub struct Collaborators<'a> {
    pub renderer: &'a dyn DocumentRenderer,
    pub sink: &'a mut dyn LogSink,
    pub metadata: &'a dyn MetadataSource,
}

#[derive(Debug, Clone)]
pub struct Submission {
    pub record: ResultRecord,
    pub document: Option<Vec<u8>>,
    pub logged: bool,
    pub warnings: Vec<CollaboratorWarning>,
}

/// One caller's view: its id and the most recent successful submission.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    profile: ScoringProfile,
    last: Option<Submission>,
}

impl Session {
    pub fn new(profile: ScoringProfile) -> Self {
        Self::with_id(Uuid::new_v4(), profile)
    }

    pub fn with_id(id: Uuid, profile: ScoringProfile) -> Self {
        Self {
            id,
            profile,
            last: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn last(&self) -> Option<&Submission> {
        self.last.as_ref()
    }

    /// Validation errors abort before any collaborator is called and leave
    /// the previous result in place.
    pub fn submit(
        &mut self,
        raw: &RawSubmission,
        collaborators: Collaborators<'_>,
    ) -> Result<&Submission, ScoreError> {
        let computation = compute(raw, &self.profile)?;
        let timestamp = Utc::now();
        tracing::debug!(
            "computed {} composite {} for {:?}",
            raw.kind.code(),
            computation.composite.rounded,
            raw.name
        );

        let mut warnings = Vec::new();
        let metadata = match raw.kind {
            TestKind::Tpa => ClientMetadata::unknown(),
            TestKind::Tbi => match collaborators.metadata.fetch() {
                Ok(metadata) => metadata,
                Err(err) => {
                    tracing::warn!("{}", err);
                    warnings.push(CollaboratorWarning::Metadata(err.to_string()));
                    ClientMetadata::unknown()
                }
            },
        };

        let submitter = Submitter {
            name: raw.name.clone(),
            session_id: self.id,
        };
        let record = run_stage5(Stage5Inputs {
            computation: &computation,
            submitter: &submitter,
            metadata,
            timestamp,
            submission_id: Uuid::new_v4(),
        });

        let delivery = run_stage6(&record, collaborators.renderer, collaborators.sink);
        warnings.extend(delivery.warnings);

        let submission = self.last.insert(Submission {
            record,
            document: delivery.document,
            logged: delivery.logged,
            warnings,
        });
        Ok(&*submission)
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/session.rs"]
mod tests;
