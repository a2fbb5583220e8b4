//! Toast queue aged by UI ticks.

use std::collections::VecDeque;

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    /// Informational
    Info,
    /// Confirmation
    Success,
    /// Warning
    Warning,
    /// Error
    Error,
}

impl ToastLevel {
    /// Short glyph shown before the message
    pub fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Info => "i",
            ToastLevel::Success => "*",
            ToastLevel::Warning => "!",
            ToastLevel::Error => "x",
        }
    }
}

/// A toast waiting in or showing from the queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedToast {
    /// Identifier
    pub id: u64,
    /// Text
    pub message: String,
    /// Severity
    pub level: ToastLevel,
    /// UI ticks left before it disappears
    pub ticks_remaining: u32,
}

/// Bounded FIFO of toasts. Only the front one is aged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: VecDeque<QueuedToast>,
}

impl ToastQueue {
    /// Most toasts kept at once; older ones are dropped
    pub const CAPACITY: usize = 5;

    /// Add a toast at the back
    pub fn enqueue(&mut self, toast: QueuedToast) {
        self.toasts.push_back(toast);
        while self.toasts.len() > Self::CAPACITY {
            self.toasts.pop_front();
        }
    }

    /// Toast currently on screen
    pub fn current(&self) -> Option<&QueuedToast> {
        self.toasts.front()
    }

    /// Drop the toast on screen
    pub fn dismiss(&mut self) {
        self.toasts.pop_front();
    }

    /// Age the toast on screen by one tick
    pub fn tick(&mut self) {
        if let Some(front) = self.toasts.front_mut() {
            front.ticks_remaining = front.ticks_remaining.saturating_sub(1);
            if front.ticks_remaining == 0 {
                self.toasts.pop_front();
            }
        }
    }

    /// Number of queued toasts
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Whether nothing is queued
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64, ticks: u32) -> QueuedToast {
        QueuedToast {
            id,
            message: format!("toast {id}"),
            level: ToastLevel::Info,
            ticks_remaining: ticks,
        }
    }

    #[test]
    fn test_front_toast_expires() {
        let mut queue = ToastQueue::default();
        queue.enqueue(toast(1, 2));
        queue.enqueue(toast(2, 2));

        queue.tick();
        assert_eq!(queue.current().map(|t| t.id), Some(1));
        queue.tick();
        assert_eq!(queue.current().map(|t| t.id), Some(2));
    }

    #[test]
    fn test_capacity() {
        let mut queue = ToastQueue::default();
        for id in 0..10 {
            queue.enqueue(toast(id, 1));
        }
        assert_eq!(queue.len(), ToastQueue::CAPACITY);
        assert_eq!(queue.current().map(|t| t.id), Some(5));
    }
}
