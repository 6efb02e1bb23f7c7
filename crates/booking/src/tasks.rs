//! Deferred maintenance work queued by the booking store.

use std::collections::VecDeque;

/// Work that runs on a later turn of the event loop rather than inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceTask {
    /// Drop appointments that no longer fit the current schedule.
    SweepOutsideSchedule,
}

/// FIFO of pending maintenance tasks. A task already waiting is not queued
/// twice.
#[derive(Debug, Default)]
pub struct TaskQueue {
    pending: VecDeque<MaintenanceTask>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, task: MaintenanceTask) {
        if !self.pending.contains(&task) {
            self.pending.push_back(task);
        }
    }

    pub fn pop(&mut self) -> Option<MaintenanceTask> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
