use sentra_domain::EditorChangeStatus;

/// Name of the preset privileged role whose grant and revoke are tracked as a
/// distinguished telemetry signal.
pub const EDITOR_ROLE_NAME: &str = "editor";

/// Privileged-role transition derived from a role assignment change.
///
/// Only the diff analyzer constructs values of this type; the user name is
/// still the plaintext login and must be anonymized before submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorChangeEvent {
    user_name: String,
    status: EditorChangeStatus,
}

impl EditorChangeEvent {
    /// Returns the plaintext login of the affected user.
    #[must_use]
    pub fn user_name(&self) -> &str {
        self.user_name.as_str()
    }

    /// Returns the direction of the transition.
    #[must_use]
    pub fn status(&self) -> EditorChangeStatus {
        self.status
    }
}

/// Classifies an editor-role transition between two role assignments.
///
/// Returns `Granted` when the editor role appears, `Removed` when it
/// disappears, and `None` when membership is unchanged in either direction,
/// regardless of any other role churn.
#[must_use]
pub fn editor_change_status(
    prev_roles: &[String],
    new_roles: &[String],
) -> Option<EditorChangeStatus> {
    let had_editor = prev_roles.iter().any(|role| role == EDITOR_ROLE_NAME);
    let has_editor = new_roles.iter().any(|role| role == EDITOR_ROLE_NAME);

    match (had_editor, has_editor) {
        (false, true) => Some(EditorChangeStatus::Granted),
        (true, false) => Some(EditorChangeStatus::Removed),
        _ => None,
    }
}

/// Runs the diff and hands at most one change event to the submit callback.
///
/// When editor membership is unchanged the callback is never invoked.
pub fn emit_editor_change_event(
    username: &str,
    prev_roles: &[String],
    new_roles: &[String],
    mut submit: impl FnMut(EditorChangeEvent),
) {
    if let Some(status) = editor_change_status(prev_roles, new_roles) {
        submit(EditorChangeEvent {
            user_name: username.to_owned(),
            status,
        });
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use sentra_domain::EditorChangeStatus;

    use super::{EDITOR_ROLE_NAME, editor_change_status, emit_editor_change_event};

    fn roles(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_owned()).collect()
    }

    fn collect_events(
        username: &str,
        prev_roles: &[String],
        new_roles: &[String],
    ) -> Vec<super::EditorChangeEvent> {
        let mut submitted = Vec::new();
        emit_editor_change_event(username, prev_roles, new_roles, |event| {
            submitted.push(event);
        });
        submitted
    }

    #[test]
    fn granting_the_editor_role_submits_one_granted_event() {
        let submitted = collect_events(
            "user1",
            &roles(&["role1", "role2"]),
            &roles(&["role1", "role2", EDITOR_ROLE_NAME]),
        );

        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].user_name(), "user1");
        assert_eq!(submitted[0].status(), EditorChangeStatus::Granted);
    }

    #[test]
    fn removing_the_editor_role_submits_one_removed_event() {
        let submitted = collect_events(
            "user2",
            &roles(&["role1", "role2", EDITOR_ROLE_NAME]),
            &roles(&["role1", "role2"]),
        );

        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].user_name(), "user2");
        assert_eq!(submitted[0].status(), EditorChangeStatus::Removed);
    }

    #[test]
    fn keeping_the_editor_role_submits_nothing() {
        let submitted = collect_events(
            "user3",
            &roles(&["role1", "role2", EDITOR_ROLE_NAME]),
            &roles(&["role1", "role2", EDITOR_ROLE_NAME]),
        );

        assert!(submitted.is_empty());
    }

    #[test]
    fn never_holding_the_editor_role_submits_nothing() {
        let submitted = collect_events(
            "user4",
            &roles(&["role1", "role2"]),
            &roles(&["role1", "role2"]),
        );

        assert!(submitted.is_empty());
    }

    #[test]
    fn grant_from_no_roles_at_all_is_detected() {
        let submitted = collect_events("user7", &[], &roles(&[EDITOR_ROLE_NAME]));

        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].status(), EditorChangeStatus::Granted);
    }

    #[test]
    fn removal_of_the_only_role_is_detected() {
        let submitted = collect_events("user8", &roles(&[EDITOR_ROLE_NAME]), &[]);

        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].status(), EditorChangeStatus::Removed);
    }

    #[test]
    fn empty_role_sets_submit_nothing() {
        let submitted = collect_events("user9", &[], &[]);

        assert!(submitted.is_empty());
    }

    #[test]
    fn grant_among_other_new_roles_is_still_detected() {
        let submitted = collect_events(
            "user10",
            &roles(&["role1", "role2"]),
            &roles(&["role1", "role2", "role3", EDITOR_ROLE_NAME]),
        );

        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].status(), EditorChangeStatus::Granted);
    }

    #[test]
    fn removal_among_other_removed_roles_is_still_detected() {
        let submitted = collect_events(
            "user11",
            &roles(&["role1", "role2", "role3", EDITOR_ROLE_NAME]),
            &roles(&["role1", "role2"]),
        );

        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].status(), EditorChangeStatus::Removed);
    }

    proptest! {
        #[test]
        fn unchanged_membership_never_produces_a_status(
            mut prev in proptest::collection::vec("[a-z]{1,8}", 0..6),
            mut new in proptest::collection::vec("[a-z]{1,8}", 0..6),
            editor_in_both in any::<bool>(),
        ) {
            prev.retain(|role| role != EDITOR_ROLE_NAME);
            new.retain(|role| role != EDITOR_ROLE_NAME);
            if editor_in_both {
                prev.push(EDITOR_ROLE_NAME.to_owned());
                new.push(EDITOR_ROLE_NAME.to_owned());
            }

            prop_assert_eq!(editor_change_status(&prev, &new), None);
        }
    }
}
