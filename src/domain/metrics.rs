use serde::Serialize;

use super::Task;

/// Aggregate completion metrics, derived from the collection and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub completion_percentage: String,
}

impl Metrics {
    /// Pure function of the task slice.
    ///
    /// The percentage is the truncated integer part of `completed / total`,
    /// so 2 of 3 reports `"66%"`, never `"67%"`.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.complete).count();
        let completion_percentage = if total == 0 {
            "0%".to_string()
        } else {
            format!("{}%", completed * 100 / total)
        };
        Self {
            total,
            completed,
            pending: total - completed,
            completion_percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskId;

    fn tasks(completed: usize, pending: usize) -> Vec<Task> {
        (0..completed + pending)
            .map(|n| {
                let mut task = Task::new(TaskId(n as u64), "task", "desc").unwrap();
                task.complete = n < completed;
                task
            })
            .collect()
    }

    #[test]
    fn empty_collection_reports_zero_percent() {
        let metrics = Metrics::from_tasks(&[]);
        assert_eq!(metrics.total, 0);
        assert_eq!(metrics.completed, 0);
        assert_eq!(metrics.pending, 0);
        assert_eq!(metrics.completion_percentage, "0%");
    }

    #[test]
    fn percentage_is_truncated_not_rounded() {
        let metrics = Metrics::from_tasks(&tasks(2, 1));
        assert_eq!(metrics.total, 3);
        assert_eq!(metrics.completed, 2);
        assert_eq!(metrics.pending, 1);
        assert_eq!(metrics.completion_percentage, "66%");
    }

    #[test]
    fn all_complete_reports_hundred_percent() {
        let metrics = Metrics::from_tasks(&tasks(4, 0));
        assert_eq!(metrics.completion_percentage, "100%");
    }

    #[test]
    fn completed_and_pending_always_sum_to_total() {
        for (completed, pending) in [(0, 0), (0, 5), (3, 2), (7, 0)] {
            let metrics = Metrics::from_tasks(&tasks(completed, pending));
            assert_eq!(metrics.completed + metrics.pending, metrics.total);
        }
    }
}
