//! Demo data the mess manager ships with.
//!
//! Seeded records are loaded straight into the stores. They are the
//! starting state, not mutations, so the audit log starts empty.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use mess_config::MessConfig;
use mess_core::entities::{Announcement, Author, Feedback, MealTiming, PaymentRecord, Poll};
use mess_core::enums::{
    AnnouncementCategory, FeedbackStatus, FeedbackType, Meal, PaymentStatus, PollStatus,
};
use mess_core::errors::CoreError;

use crate::menu::MenuBoard;
use crate::service::MessService;
use crate::store::EntityStore;

impl MessService {
    /// A service preloaded with the sample hostel: five announcements,
    /// three polls, five feedback records, eight fee records, and the
    /// three meal timings.
    ///
    /// Seeded polls carry tallies but no ballots, so any voter id may still
    /// vote on an active seeded poll.
    ///
    /// # Errors
    ///
    /// Returns `CoreError` if the sample data violates a store invariant.
    pub fn with_sample_data(config: &MessConfig) -> Result<Self, CoreError> {
        let mut service = Self::new(config);
        service.announcements = EntityStore::from_records(sample_announcements())?;
        service.polls = EntityStore::from_records(sample_polls(config.polls.total_eligible))?;
        service.feedback = EntityStore::from_records(sample_feedback())?;
        service.payments = EntityStore::from_records(sample_payments(config.payments.monthly_fee))?;
        service.menu = MenuBoard::from_timings(sample_menu())?;
        tracing::debug!(
            announcements = service.announcements.len(),
            polls = service.polls.len(),
            feedback = service.feedback.len(),
            payments = service.payments.len(),
            "sample data loaded"
        );
        Ok(service)
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, hour: u32, min: u32) -> DateTime<Utc> {
    date(y, m, d)
        .and_hms_opt(hour, min, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

fn clock(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap_or_default()
}

fn sample_announcements() -> Vec<Announcement> {
    let rows: [(&str, &str, AnnouncementCategory, DateTime<Utc>); 5] = [
        (
            "Republic Day Holiday Notice",
            "The mess will remain closed on 26th January 2024. Please make alternative arrangements for your meals.",
            AnnouncementCategory::Holiday,
            at(2024, 1, 24, 10, 30),
        ),
        (
            "Special Sunday Breakfast",
            "This Sunday we're serving a special South Indian breakfast! Items include Masala Dosa, Idli Sambar, Vada, and filter coffee.",
            AnnouncementCategory::Menu,
            at(2024, 1, 23, 16, 0),
        ),
        (
            "Timing Change for Dinner",
            "Due to a cultural event in the hostel, dinner timings have been changed to 8:00 PM - 10:00 PM for today only.",
            AnnouncementCategory::Timing,
            at(2024, 1, 22, 14, 15),
        ),
        (
            "Maintenance Notice",
            "The water purifier in the dining hall will be under maintenance from 10 AM to 12 PM tomorrow. Bottled water will be provided.",
            AnnouncementCategory::Maintenance,
            at(2024, 1, 21, 18, 0),
        ),
        (
            "New Menu Items Added",
            "Based on popular demand, we've added Chole Bhature and Rajma Chawal to our weekly menu. Check the updated menu for details.",
            AnnouncementCategory::Menu,
            at(2024, 1, 20, 11, 0),
        ),
    ];

    (1..)
        .zip(rows)
        .map(|(id, (title, message, category, created_at))| Announcement {
            id,
            title: title.to_string(),
            message: message.to_string(),
            category,
            created_at,
        })
        .collect()
}

fn sample_polls(total_eligible: u32) -> Vec<Poll> {
    let rows: [(Meal, &str, &str, PollStatus, u32, u32); 3] = [
        (Meal::Dinner, "Today", "6:00 PM", PollStatus::Active, 145, 23),
        (Meal::Breakfast, "Tomorrow", "10:00 PM Today", PollStatus::Active, 98, 45),
        (Meal::Lunch, "Today", "10:00 AM", PollStatus::Closed, 210, 38),
    ];

    (1..)
        .zip(rows)
        .map(|(id, (meal, date_label, deadline, status, yes, no))| Poll {
            id,
            meal,
            date_label: date_label.to_string(),
            question: format!("Will you come for {meal} {}?", date_label.to_lowercase()),
            deadline: deadline.to_string(),
            status,
            yes_count: yes,
            no_count: no,
            // Seeded tallies must fit a smaller configured headcount too.
            total_eligible: total_eligible.max(yes + no),
            created_at: at(2024, 1, 24, 8, 0),
        })
        .collect()
}

fn student(student_ref: &str, name: &str, email: &str) -> Author {
    Author::Student {
        student_ref: student_ref.to_string(),
        name: name.to_string(),
        email: email.to_string(),
    }
}

fn sample_feedback() -> Vec<Feedback> {
    let rows: [(Author, FeedbackType, &str, &str, FeedbackStatus, Option<&str>, DateTime<Utc>); 5] = [
        (
            student("stu-1", "Rahul S.", "rahul@college.edu"),
            FeedbackType::Complaint,
            "Food Quality",
            "The dal served during lunch was too salty and almost inedible. This has happened multiple times this week.",
            FeedbackStatus::Open,
            None,
            at(2024, 1, 24, 14, 30),
        ),
        (
            Author::Anonymous,
            FeedbackType::Complaint,
            "Hygiene",
            "The dining tables are not being cleaned properly after each meal. Found leftover food on tables during dinner.",
            FeedbackStatus::Open,
            None,
            at(2024, 1, 24, 13, 15),
        ),
        (
            student("stu-2", "Priya M.", "priya@college.edu"),
            FeedbackType::Suggestion,
            "Menu",
            "It would be great if you could add more variety in breakfast options, especially South Indian dishes like Dosa and Idli.",
            FeedbackStatus::Review,
            Some("Thank you for the suggestion! We are looking into adding more options."),
            at(2024, 1, 22, 16, 0),
        ),
        (
            student("stu-3", "Amit K.", "amit@college.edu"),
            FeedbackType::Complaint,
            "Service",
            "The serving staff was rude during lunch today. This is unacceptable behavior.",
            FeedbackStatus::Resolved,
            Some("We have spoken with the staff member. Thank you for bringing this to our attention."),
            at(2024, 1, 20, 13, 0),
        ),
        (
            student("stu-4", "Sneha G.", "sneha@college.edu"),
            FeedbackType::Suggestion,
            "Timing",
            "Could the dinner timing be extended by 30 minutes on weekends? Many students have activities that run late.",
            FeedbackStatus::Resolved,
            Some("Starting this weekend, dinner will be served until 9:30 PM on Saturdays and Sundays."),
            at(2024, 1, 18, 18, 45),
        ),
    ];

    (1..)
        .zip(rows)
        .map(
            |(id, (author, feedback_type, category, message, status, response, created_at))| {
                Feedback {
                    id,
                    author,
                    feedback_type,
                    category: category.to_string(),
                    message: message.to_string(),
                    status,
                    response: response.map(str::to_string),
                    created_at,
                }
            },
        )
        .collect()
}

fn sample_payments(fee: u32) -> Vec<PaymentRecord> {
    let january_due = date(2024, 1, 5);
    let february_due = date(2024, 2, 5);
    let rows: [(&str, &str, &str, PaymentStatus, Option<NaiveDate>); 8] = [
        ("Rahul Sharma", "rahul", "A-204", PaymentStatus::Paid, Some(date(2024, 1, 5))),
        ("Priya Patel", "priya", "B-112", PaymentStatus::Paid, Some(date(2024, 1, 3))),
        ("Amit Kumar", "amit", "A-108", PaymentStatus::Pending, None),
        ("Sneha Gupta", "sneha", "B-205", PaymentStatus::Pending, None),
        ("Vikram Singh", "vikram", "A-301", PaymentStatus::Overdue, None),
        ("Neha Reddy", "neha", "B-118", PaymentStatus::Paid, Some(date(2024, 1, 4))),
        ("Arjun Mehta", "arjun", "A-215", PaymentStatus::Pending, None),
        ("Kavya Joshi", "kavya", "B-302", PaymentStatus::Overdue, None),
    ];

    (1..)
        .zip(rows)
        .map(|(id, (name, handle, room, status, paid_on))| {
            let (period, due_date) = if status == PaymentStatus::Pending {
                ("February 2024", february_due)
            } else {
                ("January 2024", january_due)
            };
            PaymentRecord {
                id,
                student_ref: format!("stu-{handle}"),
                student_name: name.to_string(),
                student_email: format!("{handle}@college.edu"),
                room: room.to_string(),
                period: period.to_string(),
                amount_due: fee,
                status,
                due_date,
                paid_on,
                transaction_id: paid_on.map(|d| format!("TXN{}{id:03}", d.format("%Y%m%d"))),
            }
        })
        .collect()
}

fn sample_menu() -> Vec<MealTiming> {
    let rows: [(Meal, NaiveTime, NaiveTime, &[&str]); 3] = [
        (
            Meal::Breakfast,
            clock(7, 0),
            clock(9, 0),
            &["Poha", "Bread & Butter", "Milk", "Tea/Coffee", "Boiled Eggs"],
        ),
        (
            Meal::Lunch,
            clock(12, 30),
            clock(14, 0),
            &["Rice", "Dal", "Paneer Curry", "Roti", "Salad", "Curd"],
        ),
        (
            Meal::Dinner,
            clock(19, 30),
            clock(21, 0),
            &["Rice", "Mixed Veg", "Chapati", "Dal Fry", "Pickle", "Sweet"],
        ),
    ];

    rows.into_iter()
        .map(|(meal, start_time, end_time, items)| MealTiming {
            meal,
            start_time,
            end_time,
            items: items.iter().map(|i| (*i).to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::audit::AuditFilter;
    use crate::test_support::helpers::seeded_service;

    #[test]
    fn seeded_service_matches_sample_hostel() {
        let svc = seeded_service();
        assert_eq!(svc.announcements.len(), 5);
        assert_eq!(svc.polls.len(), 3);
        assert_eq!(svc.feedback.len(), 5);
        assert_eq!(svc.payments.len(), 8);
        assert_eq!(svc.menu().len(), 3);
        assert!(svc.audit(&AuditFilter::default()).is_empty());
    }

    #[test]
    fn seeded_numbers_match_manager_pages() {
        let svc = seeded_service();
        let dinner = svc.poll_stats(1).unwrap();
        assert_eq!((dinner.yes, dinner.no, dinner.pending), (145, 23, 80));

        let payments = svc.payment_summary();
        assert_eq!((payments.paid, payments.pending, payments.overdue), (3, 3, 2));
        assert_eq!(payments.total_collected, 7500);

        let feedback = svc.feedback_summary();
        assert_eq!((feedback.open, feedback.review, feedback.resolved), (2, 1, 2));
    }

    #[test]
    fn seeded_anonymous_complaint_has_no_identity() {
        let svc = seeded_service();
        let fb = svc.get_feedback(2).unwrap();
        assert!(fb.anonymous());
        assert_eq!(fb.category, "Hygiene");
    }

    #[test]
    fn new_records_continue_after_seeded_ids() {
        let mut svc = seeded_service();
        let poll = svc
            .create_poll(mess_core::entities::NewPoll::for_meal(Meal::Lunch))
            .unwrap();
        assert_eq!(poll.id, 4);
    }

    #[test]
    fn small_headcount_still_fits_seeded_tallies() {
        let mut config = MessConfig::default();
        config.polls.total_eligible = 100;
        let svc = MessService::with_sample_data(&config).unwrap();
        assert!(svc.polls.iter().all(|p| p.responses() <= p.total_eligible));
    }
}
