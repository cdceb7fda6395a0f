//! Deferred one-shot tasks for the single-threaded event loop.
//!
//! Nothing runs on its own: the loop calls [`Scheduler::take_due`] each
//! iteration and applies whatever comes back. A task that fires late, or is
//! cancelled first, has no effect on window state.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

#[derive(Debug, Clone)]
struct Scheduled<T> {
    id: TaskId,
    due: Instant,
    task: T,
}

#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    tasks: Vec<Scheduled<T>>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.tasks.push(Scheduled {
            id,
            due: now + delay,
            task,
        });
        id
    }

    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Drops every pending task matching `pred`, returning how many went.
    pub fn cancel_where<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.tasks.len();
        self.tasks.retain(|t| !pred(&t.task));
        before - self.tasks.len()
    }

    /// Removes and returns every task due at `now`, earliest first. Tasks
    /// sharing a deadline come back in scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<T> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.tasks.drain(..).partition(|t| t.due <= now);
        self.tasks = pending;
        due.sort_by_key(|t| (t.due, t.id));
        due.into_iter().map(|t| t.task).collect()
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.iter().map(|t| t.due).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tasks_fire_only_once_due() {
        let mut s = Scheduler::new();
        let now = Instant::now();
        s.schedule(now, Duration::from_millis(50), "focus");
        assert!(s.take_due(now).is_empty());
        assert_eq!(s.pending(), 1);
        assert_eq!(s.take_due(now + Duration::from_millis(50)), vec!["focus"]);
        assert_eq!(s.pending(), 0);
    }

    #[test]
    fn due_tasks_come_back_in_deadline_then_fifo_order() {
        let mut s = Scheduler::new();
        let now = Instant::now();
        s.schedule(now, Duration::from_millis(30), "c");
        s.schedule(now, Duration::from_millis(10), "a");
        s.schedule(now, Duration::from_millis(10), "b");
        assert_eq!(s.next_deadline(), Some(now + Duration::from_millis(10)));
        assert_eq!(
            s.take_due(now + Duration::from_secs(1)),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn cancelled_tasks_never_fire() {
        let mut s = Scheduler::new();
        let now = Instant::now();
        let id = s.schedule(now, Duration::ZERO, 1);
        s.schedule(now, Duration::ZERO, 2);
        s.schedule(now, Duration::ZERO, 3);
        assert!(s.cancel(id));
        assert!(!s.cancel(id));
        assert_eq!(s.cancel_where(|t| *t == 3), 1);
        assert_eq!(s.take_due(now), vec![2]);
    }
}
