use mess_core::responses::DashboardSnapshot;

use crate::service::MessService;

/// Announcements shown on the dashboard.
const LATEST_ANNOUNCEMENTS: usize = 3;

impl MessService {
    /// Headline numbers from every collection.
    #[must_use]
    pub fn dashboard(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            announcement_count: u32::try_from(self.announcements.len()).unwrap_or(u32::MAX),
            latest_announcements: self
                .announcements
                .iter()
                .take(LATEST_ANNOUNCEMENTS)
                .cloned()
                .collect(),
            polls: self.poll_overview(),
            feedback: self.feedback_summary(),
            payments: self.payment_summary(),
            menu: self.menu(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{seeded_service, test_service};

    #[test]
    fn empty_service_has_zeroed_dashboard() {
        let snapshot = test_service().dashboard();
        assert_eq!(snapshot.announcement_count, 0);
        assert_eq!(snapshot.feedback.total, 0);
        assert_eq!(snapshot.payments.total_collected, 0);
        assert!(snapshot.menu.is_empty());
    }

    #[test]
    fn seeded_dashboard_shows_latest_three() {
        let snapshot = seeded_service().dashboard();
        assert_eq!(snapshot.announcement_count, 5);
        assert_eq!(snapshot.latest_announcements.len(), 3);
        assert_eq!(snapshot.menu.len(), 3);
    }
}
