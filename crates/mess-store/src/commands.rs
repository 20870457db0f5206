//! Command objects for every mutating operation.
//!
//! A `Command` is the serializable form of one method call on
//! `MessService`. Scripts replayed by `CommandReplayer` are sequences of
//! these, one per JSON line:
//!
//! ```json
//! {"op":"vote","poll_id":1,"choice":"yes","voter_id":"stu-1"}
//! ```

use chrono::NaiveDate;
use mess_core::RecordId;
use mess_core::entities::{NewAnnouncement, NewFeedback, NewPayment, NewPoll};
use mess_core::enums::{EntityType, Meal, VoteChoice};
use mess_core::errors::CoreError;
use mess_core::responses::Outcome;
use serde::{Deserialize, Serialize};

use crate::service::MessService;
use crate::updates::announcement::AnnouncementUpdate;
use crate::updates::payment::PaymentUpdate;
use crate::updates::poll::PollUpdate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    // Announcements
    CreateAnnouncement(NewAnnouncement),
    UpdateAnnouncement {
        id: RecordId,
        #[serde(flatten)]
        update: AnnouncementUpdate,
    },
    DeleteAnnouncement {
        id: RecordId,
    },

    // Polls
    CreatePoll(NewPoll),
    UpdatePoll {
        id: RecordId,
        #[serde(flatten)]
        update: PollUpdate,
    },
    Vote {
        poll_id: RecordId,
        choice: VoteChoice,
        voter_id: String,
    },
    ClosePoll {
        id: RecordId,
    },
    DeletePoll {
        id: RecordId,
    },

    // Feedback
    SubmitFeedback(NewFeedback),
    Respond {
        id: RecordId,
        response: String,
    },
    Resolve {
        id: RecordId,
    },

    // Payments
    CreatePayment(NewPayment),
    UpdatePayment {
        id: RecordId,
        #[serde(flatten)]
        update: PaymentUpdate,
    },
    RecordPayment {
        id: RecordId,
        paid_on: NaiveDate,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        transaction_id: Option<String>,
    },
    MarkOverdue {
        id: RecordId,
    },
    SweepOverdue {
        today: NaiveDate,
    },

    // Menu
    SetWindow {
        meal: Meal,
        start_time: String,
        end_time: String,
    },
    AddItem {
        meal: Meal,
        name: String,
    },
    RemoveItem {
        meal: Meal,
        name: String,
    },
}

impl Command {
    /// The `op` tag, used in logs and replay failures.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateAnnouncement(_) => "create_announcement",
            Self::UpdateAnnouncement { .. } => "update_announcement",
            Self::DeleteAnnouncement { .. } => "delete_announcement",
            Self::CreatePoll(_) => "create_poll",
            Self::UpdatePoll { .. } => "update_poll",
            Self::Vote { .. } => "vote",
            Self::ClosePoll { .. } => "close_poll",
            Self::DeletePoll { .. } => "delete_poll",
            Self::SubmitFeedback(_) => "submit_feedback",
            Self::Respond { .. } => "respond",
            Self::Resolve { .. } => "resolve",
            Self::CreatePayment(_) => "create_payment",
            Self::UpdatePayment { .. } => "update_payment",
            Self::RecordPayment { .. } => "record_payment",
            Self::MarkOverdue { .. } => "mark_overdue",
            Self::SweepOverdue { .. } => "sweep_overdue",
            Self::SetWindow { .. } => "set_window",
            Self::AddItem { .. } => "add_item",
            Self::RemoveItem { .. } => "remove_item",
        }
    }
}

impl MessService {
    /// Dispatch one command to its typed method.
    ///
    /// # Errors
    ///
    /// Whatever the underlying operation returns. The service is unchanged
    /// on error.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, CoreError> {
        let outcome = match command {
            Command::CreateAnnouncement(fields) => {
                Outcome::Announcement(self.create_announcement(fields)?)
            }
            Command::UpdateAnnouncement { id, update } => {
                Outcome::Announcement(self.update_announcement(id, update)?)
            }
            Command::DeleteAnnouncement { id } => {
                self.delete_announcement(id)?;
                deleted(EntityType::Announcement, id)
            }
            Command::CreatePoll(fields) => Outcome::Poll(self.create_poll(fields)?),
            Command::UpdatePoll { id, update } => Outcome::Poll(self.update_poll(id, update)?),
            Command::Vote {
                poll_id,
                choice,
                voter_id,
            } => Outcome::Poll(self.vote(poll_id, choice, &voter_id)?),
            Command::ClosePoll { id } => Outcome::Poll(self.close_poll(id)?),
            Command::DeletePoll { id } => {
                self.delete_poll(id)?;
                deleted(EntityType::Poll, id)
            }
            Command::SubmitFeedback(form) => Outcome::Feedback(self.submit_feedback(form)?),
            Command::Respond { id, response } => Outcome::Feedback(self.respond(id, &response)?),
            Command::Resolve { id } => Outcome::Feedback(self.resolve(id)?),
            Command::CreatePayment(fields) => Outcome::Payment(self.create_payment(fields)?),
            Command::UpdatePayment { id, update } => {
                Outcome::Payment(self.update_payment(id, update)?)
            }
            Command::RecordPayment {
                id,
                paid_on,
                transaction_id,
            } => Outcome::Payment(self.record_payment(id, paid_on, transaction_id)?),
            Command::MarkOverdue { id } => Outcome::Payment(self.mark_overdue(id)?),
            Command::SweepOverdue { today } => Outcome::Payments(self.sweep_overdue(today)?),
            Command::SetWindow {
                meal,
                start_time,
                end_time,
            } => Outcome::MealTiming(self.set_window(meal, &start_time, &end_time)?),
            Command::AddItem { meal, name } => Outcome::MealTiming(self.add_item(meal, &name)?),
            Command::RemoveItem { meal, name } => {
                Outcome::MealTiming(self.remove_item(meal, &name)?)
            }
        };
        Ok(outcome)
    }
}

const fn deleted(entity_type: EntityType, id: RecordId) -> Outcome {
    Outcome::Deleted { entity_type, id }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::test_support::helpers::test_service;

    #[test]
    fn vote_line_deserializes() {
        let cmd: Command = serde_json::from_value(json!({
            "op": "vote",
            "poll_id": 3,
            "choice": "no",
            "voter_id": "stu-9",
        }))
        .unwrap();
        assert_eq!(
            cmd,
            Command::Vote {
                poll_id: 3,
                choice: VoteChoice::No,
                voter_id: "stu-9".into(),
            }
        );
        assert_eq!(cmd.name(), "vote");
    }

    #[test]
    fn create_fields_sit_beside_the_tag() {
        let cmd: Command = serde_json::from_value(json!({
            "op": "create_poll",
            "meal": "Dinner",
            "total_eligible": 248,
        }))
        .unwrap();
        let Command::CreatePoll(fields) = cmd else {
            panic!("expected create_poll");
        };
        assert_eq!(fields.meal, Meal::Dinner);
        assert_eq!(fields.date_label, "Today");
        assert_eq!(fields.total_eligible, Some(248));
    }

    #[test]
    fn partial_update_deserializes_flattened() {
        let cmd: Command = serde_json::from_value(json!({
            "op": "update_announcement",
            "id": 2,
            "title": "Revised",
        }))
        .unwrap();
        let Command::UpdateAnnouncement { id, update } = cmd else {
            panic!("expected update_announcement");
        };
        assert_eq!(id, 2);
        assert_eq!(update.title.as_deref(), Some("Revised"));
        assert_eq!(update.message, None);
    }

    #[test]
    fn apply_routes_to_typed_methods() {
        let mut svc = test_service();
        let outcome = svc
            .apply(Command::CreatePoll(NewPoll::for_meal(Meal::Lunch)))
            .unwrap();
        let Outcome::Poll(poll) = outcome else {
            panic!("expected poll outcome");
        };

        svc.apply(Command::Vote {
            poll_id: poll.id,
            choice: VoteChoice::Yes,
            voter_id: "stu-1".into(),
        })
        .unwrap();
        let deleted = svc.apply(Command::DeletePoll { id: poll.id }).unwrap();
        assert_eq!(
            deleted,
            Outcome::Deleted {
                entity_type: EntityType::Poll,
                id: poll.id
            }
        );
    }

    #[test]
    fn apply_surfaces_core_errors() {
        let mut svc = test_service();
        let err = svc.apply(Command::Resolve { id: 42 }).unwrap_err();
        assert_eq!(err, CoreError::not_found(EntityType::Feedback, 42));
    }
}
