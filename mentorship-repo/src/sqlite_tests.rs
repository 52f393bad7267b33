//! SQLite repository integration tests.

#[cfg(test)]
mod tests {
    use mentorship_types::{
        MatchId, MeetingRepository, MentorId, NewMeeting, PaymentAccountId,
    };

    use crate::SqliteRepo;

    async fn setup_repo() -> SqliteRepo {
        SqliteRepo::new("sqlite::memory:").await.unwrap()
    }

    fn meeting(match_id: MatchId) -> NewMeeting {
        NewMeeting {
            match_id,
            estimated_time: 30.0,
            meeting_notes: "Great session".to_string(),
        }
    }

    #[tokio::test]
    async fn test_record_meeting_persists_and_increments() {
        let repo = setup_repo().await;
        let mentor = repo.create_mentor("Ada", None).await.unwrap();
        let match_id = repo.create_match(mentor, "Grace").await.unwrap();

        let recorded = repo.record_meeting(meeting(match_id)).await.unwrap();

        assert_eq!(recorded.match_id, match_id);
        assert_eq!(recorded.estimated_time, 30.0);
        assert_eq!(recorded.meeting_notes, "Great session");

        let count = repo.meetings_completed(match_id).await.unwrap();
        assert_eq!(count, Some(1));
    }

    #[tokio::test]
    async fn test_counter_increments_per_meeting() {
        let repo = setup_repo().await;
        let mentor = repo.create_mentor("Ada", None).await.unwrap();
        let match_id = repo.create_match(mentor, "Grace").await.unwrap();

        for _ in 0..3 {
            repo.record_meeting(meeting(match_id)).await.unwrap();
        }

        assert_eq!(repo.meetings_completed(match_id).await.unwrap(), Some(3));
        assert_eq!(repo.meetings_for_match(match_id).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_mentor_for_match() {
        let repo = setup_repo().await;
        let mentor = repo.create_mentor("Ada", None).await.unwrap();
        let match_id = repo.create_match(mentor, "Grace").await.unwrap();

        let resolved = repo.mentor_for_match(match_id).await.unwrap();

        assert_eq!(resolved, Some(mentor));
    }

    #[tokio::test]
    async fn test_mentor_for_unknown_match_is_soft_miss() {
        let repo = setup_repo().await;

        let resolved = repo.mentor_for_match(MatchId::new(9999)).await.unwrap();

        assert!(resolved.is_none());
    }

    #[tokio::test]
    async fn test_payment_account_for_mentor() {
        let repo = setup_repo().await;
        let account = PaymentAccountId::new("acct_abc123");
        let mentor = repo.create_mentor("Ada", Some(&account)).await.unwrap();

        let resolved = repo.payment_account_for_mentor(mentor).await.unwrap();

        assert_eq!(resolved, Some(account));
    }

    #[tokio::test]
    async fn test_mentor_without_account_is_soft_miss() {
        let repo = setup_repo().await;
        let mentor = repo.create_mentor("Ada", None).await.unwrap();

        let resolved = repo.payment_account_for_mentor(mentor).await.unwrap();

        assert!(resolved.is_none());
    }

    #[tokio::test]
    async fn test_unknown_mentor_is_soft_miss() {
        let repo = setup_repo().await;

        let resolved = repo
            .payment_account_for_mentor(MentorId::new(404))
            .await
            .unwrap();

        assert!(resolved.is_none());
    }

    #[tokio::test]
    async fn test_meetings_completed_for_unknown_match() {
        let repo = setup_repo().await;

        assert_eq!(
            repo.meetings_completed(MatchId::new(1)).await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_concurrent_meetings_for_different_matches() {
        let repo = std::sync::Arc::new(setup_repo().await);
        let mentor = repo.create_mentor("Ada", None).await.unwrap();
        let match_a = repo.create_match(mentor, "Grace").await.unwrap();
        let match_b = repo.create_match(mentor, "Edsger").await.unwrap();

        let (ra, rb) = tokio::join!(
            repo.record_meeting(meeting(match_a)),
            repo.record_meeting(meeting(match_b)),
        );
        ra.unwrap();
        rb.unwrap();

        assert_eq!(repo.meetings_completed(match_a).await.unwrap(), Some(1));
        assert_eq!(repo.meetings_completed(match_b).await.unwrap(), Some(1));
    }
}
