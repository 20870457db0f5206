//! Ballot ledger backing the vote engine.
//!
//! Tallies live on the `Poll` record; this ledger only remembers who voted
//! what, so a voter can cast at most one ballot per poll.

use std::collections::BTreeMap;

use mess_core::RecordId;
use mess_core::enums::VoteChoice;

#[derive(Debug, Clone, Default)]
pub struct BallotBox {
    ballots: BTreeMap<RecordId, BTreeMap<String, VoteChoice>>,
}

impl BallotBox {
    #[must_use]
    pub fn choice_of(&self, poll_id: RecordId, voter_id: &str) -> Option<VoteChoice> {
        self.ballots
            .get(&poll_id)
            .and_then(|voters| voters.get(voter_id))
            .copied()
    }

    pub fn record(&mut self, poll_id: RecordId, voter_id: &str, choice: VoteChoice) {
        self.ballots
            .entry(poll_id)
            .or_default()
            .insert(voter_id.to_string(), choice);
    }

    /// Forget every ballot for a deleted poll.
    pub fn discard_poll(&mut self, poll_id: RecordId) {
        self.ballots.remove(&poll_id);
    }

    #[must_use]
    pub fn ballots_for(&self, poll_id: RecordId) -> usize {
        self.ballots.get(&poll_id).map_or(0, BTreeMap::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remembers_choice_per_poll_and_voter() {
        let mut ballots = BallotBox::default();
        ballots.record(1, "stu-1", VoteChoice::Yes);
        ballots.record(2, "stu-1", VoteChoice::No);

        assert_eq!(ballots.choice_of(1, "stu-1"), Some(VoteChoice::Yes));
        assert_eq!(ballots.choice_of(2, "stu-1"), Some(VoteChoice::No));
        assert_eq!(ballots.choice_of(1, "stu-2"), None);
    }

    #[test]
    fn discard_poll_drops_its_ballots_only() {
        let mut ballots = BallotBox::default();
        ballots.record(1, "stu-1", VoteChoice::Yes);
        ballots.record(2, "stu-1", VoteChoice::Yes);
        ballots.discard_poll(1);

        assert_eq!(ballots.ballots_for(1), 0);
        assert_eq!(ballots.ballots_for(2), 1);
    }
}
