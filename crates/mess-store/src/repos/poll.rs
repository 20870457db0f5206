//! Poll repository: the vote engine plus poll lifecycle and statistics.

use chrono::Utc;
use mess_core::RecordId;
use mess_core::audit_detail::{StatusChangedDetail, VotedDetail};
use mess_core::entities::{NewPoll, Poll};
use mess_core::enums::{AuditAction, EntityType, Meal, PollStatus, VoteChoice};
use mess_core::errors::CoreError;
use mess_core::responses::{PollOverview, PollStats, PollView, percent};

use crate::service::MessService;
use crate::store::{Filter, View};
use crate::updates::poll::PollUpdate;
use crate::updates::{Patch, require_text};

#[derive(Debug, Clone, Copy, Default)]
pub struct PollFilter {
    pub status: Option<PollStatus>,
    pub meal: Option<Meal>,
}

impl Filter<Poll> for PollFilter {
    fn matches(&self, poll: &Poll) -> bool {
        self.status.is_none_or(|s| poll.status == s) && self.meal.is_none_or(|m| poll.meal == m)
    }
}

impl MessService {
    /// Open a new poll with zero tallies. Missing labels fall back to
    /// meal-based defaults and the configured headcount.
    pub fn create_poll(&mut self, fields: NewPoll) -> Result<Poll, CoreError> {
        require_text("date_label", &fields.date_label)?;
        let total_eligible = fields
            .total_eligible
            .unwrap_or(self.poll_config.total_eligible);
        if total_eligible == 0 {
            return Err(CoreError::validation("total_eligible must be at least 1"));
        }
        let question = match fields.question {
            Some(q) => {
                require_text("question", &q)?;
                q
            }
            None => format!(
                "Will you come for {} {}?",
                fields.meal,
                fields.date_label.to_lowercase()
            ),
        };
        let deadline = match fields.deadline {
            Some(d) => {
                require_text("deadline", &d)?;
                d
            }
            None => fields.meal.default_deadline().to_string(),
        };

        let created = self
            .polls
            .create(|id| {
                Ok(Poll {
                    id,
                    meal: fields.meal,
                    date_label: fields.date_label,
                    question,
                    deadline,
                    status: PollStatus::Active,
                    yes_count: 0,
                    no_count: 0,
                    total_eligible,
                    created_at: Utc::now(),
                })
            })?
            .clone();

        self.audit
            .record::<()>(EntityType::Poll, created.id, AuditAction::Created, None);
        tracing::debug!(id = created.id, meal = %created.meal, "poll opened");
        Ok(created)
    }

    pub fn get_poll(&self, id: RecordId) -> Result<&Poll, CoreError> {
        self.polls.get(id)
    }

    /// Cast one ballot. Each voter gets exactly one ballot per poll.
    ///
    /// # Errors
    ///
    /// `Validation` for a blank voter id or a poll already at capacity,
    /// `NotFound`, `PollClosed`, or `DuplicateVote`. Tallies are untouched
    /// on every error.
    pub fn vote(
        &mut self,
        poll_id: RecordId,
        choice: VoteChoice,
        voter_id: &str,
    ) -> Result<Poll, CoreError> {
        let voter_id = voter_id.trim();
        if voter_id.is_empty() {
            return Err(CoreError::validation("voter_id must not be empty"));
        }

        let ballots = &self.ballots;
        let updated = self
            .polls
            .update(poll_id, |poll| {
                if !poll.is_active() {
                    return Err(CoreError::PollClosed { id: poll.id });
                }
                if ballots.choice_of(poll.id, voter_id).is_some() {
                    return Err(CoreError::DuplicateVote {
                        poll_id: poll.id,
                        voter_id: voter_id.to_string(),
                    });
                }
                if poll.responses() >= poll.total_eligible {
                    return Err(CoreError::validation(format!(
                        "poll {} already has {} of {} eligible responses",
                        poll.id,
                        poll.responses(),
                        poll.total_eligible
                    )));
                }
                match choice {
                    VoteChoice::Yes => poll.yes_count += 1,
                    VoteChoice::No => poll.no_count += 1,
                }
                Ok(())
            })?
            .clone();

        self.ballots.record(poll_id, voter_id, choice);
        self.audit.record(
            EntityType::Poll,
            poll_id,
            AuditAction::Voted,
            Some(VotedDetail {
                voter_id: voter_id.to_string(),
                choice,
            }),
        );
        tracing::debug!(poll_id, %choice, yes = updated.yes_count, no = updated.no_count, "vote recorded");
        Ok(updated)
    }

    /// Close voting. Tallies are frozen from here on.
    ///
    /// # Errors
    ///
    /// `NotFound`, or `AlreadyClosed` if the poll is already closed.
    pub fn close_poll(&mut self, id: RecordId) -> Result<Poll, CoreError> {
        let updated = self
            .polls
            .update(id, |poll| {
                if !poll.status.can_transition_to(PollStatus::Closed) {
                    return Err(CoreError::AlreadyClosed { id: poll.id });
                }
                poll.status = PollStatus::Closed;
                Ok(())
            })?
            .clone();

        self.audit.record(
            EntityType::Poll,
            id,
            AuditAction::StatusChanged,
            Some(StatusChangedDetail {
                from: PollStatus::Active.to_string(),
                to: PollStatus::Closed.to_string(),
            }),
        );
        tracing::info!(id, yes = updated.yes_count, no = updated.no_count, "poll closed");
        Ok(updated)
    }

    pub fn update_poll(&mut self, id: RecordId, update: PollUpdate) -> Result<Poll, CoreError> {
        if update.is_empty() {
            return self.polls.get(id).cloned();
        }
        let updated = self
            .polls
            .update(id, |record| update.apply_to(record))?
            .clone();
        self.audit
            .record(EntityType::Poll, id, AuditAction::Updated, Some(&update));
        Ok(updated)
    }

    /// Remove a poll together with its ballots.
    pub fn delete_poll(&mut self, id: RecordId) -> Result<(), CoreError> {
        self.polls.delete(id)?;
        self.ballots.discard_poll(id);
        self.audit
            .record::<()>(EntityType::Poll, id, AuditAction::Deleted, None);
        tracing::debug!(id, "poll deleted");
        Ok(())
    }

    #[must_use]
    pub fn list_polls(&self, filter: PollFilter) -> View<'_, Poll, PollFilter> {
        self.polls.list(filter)
    }

    pub fn poll_stats(&self, id: RecordId) -> Result<PollStats, CoreError> {
        self.polls.get(id).map(PollStats::from_poll)
    }

    #[must_use]
    pub fn poll_overview(&self) -> PollOverview {
        let mut overview = PollOverview::default();
        let mut responses = 0_u64;
        let mut eligible = 0_u64;
        for poll in self.polls.iter() {
            match poll.status {
                PollStatus::Active => {
                    overview.active_polls += 1;
                    overview.total_yes_active += poll.yes_count;
                    responses += u64::from(poll.responses());
                    eligible += u64::from(poll.total_eligible);
                }
                PollStatus::Closed => overview.closed_polls += 1,
            }
        }
        overview.response_rate = percent(responses, eligible);
        overview
    }

    /// Student-facing poll list carrying the voter's own ballot on each poll.
    #[must_use]
    pub fn polls_for_voter(&self, voter_id: &str) -> Vec<PollView> {
        self.polls
            .iter()
            .map(|poll| PollView {
                poll: poll.clone(),
                user_vote: self.ballots.choice_of(poll.id, voter_id),
            })
            .collect()
    }
}
