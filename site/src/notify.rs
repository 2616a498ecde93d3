// notifications
//
// transient messages shown by the toaster in the root layout.  the queue is bounded;
// pushing past the limit drops the oldest toast
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notification {
            title: title.into(),
            description: description.into(),
            variant: Variant::Success,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notification {
            title: title.into(),
            description: description.into(),
            variant: Variant::Error,
        }
    }
}

pub type ToastId = u64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub notification: Notification,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationQueue {
    toasts: Vec<Toast>,
    next_id: ToastId,
    limit: usize,
}

impl NotificationQueue {
    pub fn new(limit: usize) -> Self {
        NotificationQueue {
            toasts: Vec::new(),
            next_id: 1,
            limit: limit.max(1),
        }
    }

    pub fn push(&mut self, notification: Notification) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;

        self.toasts.push(Toast { id, notification });

        if self.toasts.len() > self.limit {
            let excess = self.toasts.len() - self.limit;
            self.toasts.drain(..excess);
        }

        id
    }

    pub fn dismiss(&mut self, id: ToastId) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        NotificationQueue::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = NotificationQueue::new(3);
        let a = queue.push(Notification::success("a", ""));
        let b = queue.push(Notification::error("b", ""));
        assert_ne!(a, b);
        assert_eq!(queue.toasts().len(), 2);

        queue.dismiss(a);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, b);

        // dismissing twice is harmless
        queue.dismiss(a);
        assert_eq!(queue.toasts().len(), 1);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut queue = NotificationQueue::default();
        queue.push(Notification::success("first", ""));
        let second = queue.push(Notification::success("second", ""));

        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, second);
        assert_eq!(queue.toasts()[0].notification.title, "second");
    }

    #[test]
    fn test_zero_limit_still_shows_one() {
        let mut queue = NotificationQueue::new(0);
        queue.push(Notification::success("only", ""));
        assert!(!queue.is_empty());
    }
}
