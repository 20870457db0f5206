//! JSONL command script replay.
//!
//! Each line is a `ScriptLine`: a version number and one `Command`. Lines
//! are applied in file order against a live `MessService`.

use std::path::Path;
use std::time::Instant;

use mess_core::responses::{ReplayFailure, ReplayResponse};
use serde::{Deserialize, Serialize};

use crate::commands::Command;
use crate::error::StoreError;
use crate::service::MessService;

/// Script format version understood by this build.
pub const SCRIPT_VERSION: u32 = 1;

const fn default_version() -> u32 {
    SCRIPT_VERSION
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptLine {
    #[serde(default = "default_version")]
    pub v: u32,
    pub command: Command,
}

impl ScriptLine {
    #[must_use]
    pub const fn new(command: Command) -> Self {
        Self {
            v: SCRIPT_VERSION,
            command,
        }
    }
}

pub struct CommandReplayer;

impl CommandReplayer {
    /// Replay a JSONL script file.
    ///
    /// # Errors
    ///
    /// `StoreError::Script` if the file cannot be read or a line is not a
    /// valid `ScriptLine`; otherwise see [`Self::replay_lines`].
    pub fn replay(
        service: &mut MessService,
        path: &Path,
        strict: bool,
    ) -> Result<ReplayResponse, StoreError> {
        let script_err = |source: std::io::Error| StoreError::Script {
            path: path.display().to_string(),
            source,
        };
        let lines: Vec<ScriptLine> = serde_jsonlines::json_lines(path)
            .map_err(script_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(script_err)?;

        tracing::debug!(path = %path.display(), lines = lines.len(), "replaying command script");
        Self::replay_lines(service, lines, strict)
    }

    /// Apply already-decoded lines in order.
    ///
    /// A failed command never mutates the service. In `strict` mode the
    /// first failure aborts the run; lines applied before it stay applied.
    ///
    /// # Errors
    ///
    /// `StoreError::UnsupportedVersion` for a line whose `v` is not
    /// understood (checked before anything is applied), or
    /// `StoreError::Step` for the first failing command in `strict` mode.
    pub fn replay_lines(
        service: &mut MessService,
        lines: Vec<ScriptLine>,
        strict: bool,
    ) -> Result<ReplayResponse, StoreError> {
        let start = Instant::now();

        for (line, script_line) in (1_u32..).zip(&lines) {
            if script_line.v != SCRIPT_VERSION {
                return Err(StoreError::UnsupportedVersion {
                    line,
                    version: script_line.v,
                });
            }
        }

        let mut script_lines = 0_u32;
        let mut applied = 0_u32;
        let mut failures = Vec::new();

        for (line, script_line) in (1_u32..).zip(lines) {
            script_lines += 1;
            let op = script_line.command.name();
            match service.apply(script_line.command) {
                Ok(_) => applied += 1,
                Err(source) if strict => {
                    return Err(StoreError::Step { line, op, source });
                }
                Err(e) => {
                    tracing::warn!(line, op, error = %e, "script command failed");
                    failures.push(ReplayFailure {
                        line,
                        op: op.to_string(),
                        error: e.to_string(),
                    });
                }
            }
        }

        let failed = u32::try_from(failures.len()).unwrap_or(u32::MAX);
        tracing::info!(applied, failed, "command script replayed");

        Ok(ReplayResponse {
            script_lines,
            applied,
            failed,
            failures,
            duration_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        })
    }
}

#[cfg(test)]
mod tests {
    use mess_core::entities::NewPoll;
    use mess_core::enums::{Meal, VoteChoice};
    use mess_core::errors::CoreError;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::test_service;

    fn vote(poll_id: u64, voter: &str) -> ScriptLine {
        ScriptLine::new(Command::Vote {
            poll_id,
            choice: VoteChoice::Yes,
            voter_id: voter.into(),
        })
    }

    #[test]
    fn missing_version_defaults_to_current() {
        let line: ScriptLine =
            serde_json::from_str(r#"{"command":{"op":"close_poll","id":1}}"#).unwrap();
        assert_eq!(line.v, SCRIPT_VERSION);
    }

    #[test]
    fn lenient_replay_collects_failures_and_continues() {
        let mut svc = test_service();
        let lines = vec![
            ScriptLine::new(Command::CreatePoll(NewPoll::for_meal(Meal::Dinner))),
            vote(1, "stu-1"),
            vote(1, "stu-1"),
            vote(1, "stu-2"),
        ];

        let response = CommandReplayer::replay_lines(&mut svc, lines, false).unwrap();
        assert_eq!(response.script_lines, 4);
        assert_eq!(response.applied, 3);
        assert_eq!(response.failed, 1);
        assert_eq!(response.failures[0].line, 3);
        assert_eq!(response.failures[0].op, "vote");
        assert_eq!(svc.get_poll(1).unwrap().yes_count, 2);
    }

    #[test]
    fn strict_replay_stops_at_first_failure() {
        let mut svc = test_service();
        let lines = vec![
            ScriptLine::new(Command::CreatePoll(NewPoll::for_meal(Meal::Dinner))),
            ScriptLine::new(Command::ClosePoll { id: 1 }),
            vote(1, "stu-1"),
            ScriptLine::new(Command::DeletePoll { id: 1 }),
        ];

        let err = CommandReplayer::replay_lines(&mut svc, lines, true).unwrap_err();
        match err {
            StoreError::Step { line, op, source } => {
                assert_eq!(line, 3);
                assert_eq!(op, "vote");
                assert_eq!(source, CoreError::PollClosed { id: 1 });
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(svc.get_poll(1).is_ok());
    }

    #[test]
    fn unknown_version_rejects_whole_script() {
        let mut svc = test_service();
        let mut future = ScriptLine::new(Command::ClosePoll { id: 1 });
        future.v = 2;
        let lines = vec![
            ScriptLine::new(Command::CreatePoll(NewPoll::for_meal(Meal::Lunch))),
            future,
        ];

        let err = CommandReplayer::replay_lines(&mut svc, lines, false).unwrap_err();
        assert!(matches!(
            err,
            StoreError::UnsupportedVersion { line: 2, version: 2 }
        ));
        assert!(svc.get_poll(1).is_err());
    }
}
