//! Property tests for activity roster rules.

use proptest::prelude::*;

use mergington_activities::domain::activity::{Activity, ActivityError};
use mergington_activities::domain::foundation::Email;

fn email_strategy() -> impl Strategy<Value = Email> {
    ("[a-z]{1,8}", "[a-z]{1,8}\\.edu").prop_map(|(local, domain)| {
        Email::new(format!("{}@{}", local, domain)).unwrap()
    })
}

fn activity_with(participants: &[Email]) -> Activity {
    let mut activity = Activity::new("Chess Club", "", "", 12).unwrap();
    for email in participants {
        // Duplicates in generated input are simply skipped.
        let _ = activity.sign_up(email.clone(), false);
    }
    activity
}

proptest! {
    #[test]
    fn signup_of_new_email_grows_roster_by_one(
        seeded in prop::collection::vec(email_strategy(), 0..20),
        newcomer in email_strategy(),
    ) {
        let mut activity = activity_with(&seeded);
        prop_assume!(!activity.is_participant(&newcomer));

        let before = activity.participants().to_vec();
        activity.sign_up(newcomer.clone(), false).unwrap();

        prop_assert_eq!(activity.participants().len(), before.len() + 1);
        prop_assert_eq!(&activity.participants()[..before.len()], &before[..]);
        prop_assert_eq!(activity.participants().last(), Some(&newcomer));
    }

    #[test]
    fn repeated_signup_is_rejected(
        seeded in prop::collection::vec(email_strategy(), 0..20),
        newcomer in email_strategy(),
    ) {
        let mut activity = activity_with(&seeded);
        let _ = activity.sign_up(newcomer.clone(), false);
        let snapshot = activity.clone();

        let second = activity.sign_up(newcomer, false);
        let is_already_signed_up = matches!(second, Err(ActivityError::AlreadySignedUp { .. }));
        prop_assert!(is_already_signed_up);
        prop_assert_eq!(activity, snapshot);
    }

    #[test]
    fn unregister_removes_only_that_email(
        seeded in prop::collection::vec(email_strategy(), 1..20),
        index in any::<prop::sample::Index>(),
    ) {
        let mut activity = activity_with(&seeded);
        let target = index.get(activity.participants()).clone();
        let expected: Vec<Email> = activity
            .participants()
            .iter()
            .filter(|p| **p != target)
            .cloned()
            .collect();

        activity.unregister(&target).unwrap();
        prop_assert_eq!(activity.participants(), &expected[..]);
    }

    #[test]
    fn unregister_of_absent_email_leaves_roster_untouched(
        seeded in prop::collection::vec(email_strategy(), 0..20),
        stranger in email_strategy(),
    ) {
        let mut activity = activity_with(&seeded);
        prop_assume!(!activity.is_participant(&stranger));
        let snapshot = activity.clone();

        let result = activity.unregister(&stranger);
        let is_not_signed_up = matches!(result, Err(ActivityError::NotSignedUp { .. }));
        prop_assert!(is_not_signed_up);
        prop_assert_eq!(activity, snapshot);
    }

    #[test]
    fn roster_never_holds_duplicates(
        emails in prop::collection::vec(email_strategy(), 0..40),
    ) {
        let activity = activity_with(&emails);
        let mut seen = std::collections::HashSet::new();
        for p in activity.participants() {
            prop_assert!(seen.insert(p.clone()));
        }
    }
}
