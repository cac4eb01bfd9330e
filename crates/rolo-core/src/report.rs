use crate::domain::{Contact, Interaction, InteractionKind, Task, TaskStatus};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskStatusCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InteractionKindCounts {
    pub meeting: usize,
    pub call: usize,
    pub email: usize,
}

/// Aggregate counts behind the dashboard and report views. Counting only;
/// rendering belongs to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub contact_count: usize,
    pub contacts_by_country: BTreeMap<String, usize>,
    pub tasks: TaskStatusCounts,
    pub interactions: InteractionKindCounts,
}

pub fn summarize(contacts: &[Contact], tasks: &[Task], interactions: &[Interaction]) -> Summary {
    let mut summary = Summary {
        contact_count: contacts.len(),
        ..Summary::default()
    };

    for contact in contacts {
        let key = contact
            .country_name
            .clone()
            .unwrap_or_else(|| "Unknown".to_string());
        *summary.contacts_by_country.entry(key).or_insert(0) += 1;
    }

    for task in tasks {
        match task.status {
            TaskStatus::Pending => summary.tasks.pending += 1,
            TaskStatus::InProgress => summary.tasks.in_progress += 1,
            TaskStatus::Completed => summary.tasks.completed += 1,
        }
    }

    for interaction in interactions {
        match interaction.kind {
            InteractionKind::Meeting => summary.interactions.meeting += 1,
            InteractionKind::Call => summary.interactions.call += 1,
            InteractionKind::Email => summary.interactions.email += 1,
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::summarize;
    use crate::domain::{
        Contact, ContactId, Interaction, InteractionId, InteractionKind, InteractionStatus,
        OwnerId, Task, TaskId, TaskPriority, TaskStatus,
    };

    #[test]
    fn summary_counts_by_country_and_status() {
        let owner = OwnerId::new();
        let contact = |country: Option<(&str, &str)>| Contact {
            id: ContactId::new(),
            owner_id: owner,
            name: "X".to_string(),
            email: "x@x.com".to_string(),
            phone: "+15551234".to_string(),
            company: None,
            title: None,
            address: None,
            notes: None,
            country_code: country.map(|(code, _)| code.to_string()),
            country_name: country.map(|(_, name)| name.to_string()),
            created_at: 0,
            updated_at: 0,
        };
        let contacts = vec![
            contact(Some(("US", "United States"))),
            contact(Some(("US", "United States"))),
            contact(None),
        ];

        let task = |status: TaskStatus| Task {
            id: TaskId::new(),
            owner_id: owner,
            title: "t".to_string(),
            description: None,
            due_date: None,
            priority: TaskPriority::Medium,
            status,
            contact_id: None,
            contact_name: None,
            notes: None,
            created_at: 0,
            updated_at: 0,
        };
        let tasks = vec![
            task(TaskStatus::Pending),
            task(TaskStatus::Completed),
            task(TaskStatus::Completed),
        ];

        let interactions = vec![Interaction {
            id: InteractionId::new(),
            owner_id: owner,
            contact_id: contacts[0].id,
            kind: InteractionKind::Call,
            occurred_at: 0,
            duration_minutes: Some(15),
            summary: "s".to_string(),
            notes: None,
            follow_up_at: None,
            follow_up_notes: None,
            status: InteractionStatus::Completed,
            created_at: 0,
            updated_at: 0,
        }];

        let summary = summarize(&contacts, &tasks, &interactions);
        assert_eq!(summary.contact_count, 3);
        assert_eq!(summary.contacts_by_country.get("United States"), Some(&2));
        assert_eq!(summary.contacts_by_country.get("Unknown"), Some(&1));
        assert_eq!(summary.tasks.pending, 1);
        assert_eq!(summary.tasks.completed, 2);
        assert_eq!(summary.interactions.call, 1);
        assert_eq!(summary.interactions.meeting, 0);
    }
}
