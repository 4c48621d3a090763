//! Deferred main-thread task queue.
//!
//! Work produced anywhere (event handlers, other threads via a cloned
//! [`TaskHandle`]) is enqueued here and executed by the event loop only
//! when the native message source is momentarily empty. Each entry is a
//! self-contained closure that owns its captured state; that state is
//! dropped exactly once when the closure finishes.

use crossbeam_channel::{unbounded, Receiver, Sender};

/// A deferred unit of work. `C` is the execution context the loop thread
/// supplies at drain time (the engine on the real platform), which keeps
/// non-`Send` native handles out of the closures themselves.
pub type Task<C> = Box<dyn FnOnce(&mut C) + Send + 'static>;

/// Ordered, thread-safe queue of deferred tasks.
pub struct TaskQueue<C> {
    tx: Sender<Task<C>>,
    rx: Receiver<Task<C>>,
}

impl<C> TaskQueue<C> {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    /// A cloneable, `Send` producer for this queue.
    pub fn handle(&self) -> TaskHandle<C> {
        TaskHandle {
            tx: self.tx.clone(),
        }
    }

    pub fn push(&self, task: impl FnOnce(&mut C) + Send + 'static) {
        // Both halves live in self, so the channel cannot be disconnected.
        let _ = self.tx.send(Box::new(task));
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    /// Execute every queued task in enqueue order. Tasks enqueued while
    /// draining run in the same pass. Returns the number executed.
    pub fn drain(&self, ctx: &mut C) -> usize {
        let mut executed = 0;
        while let Ok(task) = self.rx.try_recv() {
            task(ctx);
            executed += 1;
        }
        executed
    }
}

impl<C> Default for TaskQueue<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer half of a [`TaskQueue`], safe to hand to other threads.
pub struct TaskHandle<C> {
    tx: Sender<Task<C>>,
}

impl<C> TaskHandle<C> {
    /// Enqueue a task for the loop thread. Silently a no-op once the
    /// owning queue (and with it the window) is gone.
    pub fn dispatch(&self, task: impl FnOnce(&mut C) + Send + 'static) {
        if self.tx.send(Box::new(task)).is_err() {
            tracing::warn!("task dropped: event loop is gone");
        }
    }
}

impl<C> Clone for TaskHandle<C> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tasks_run_in_fifo_order() {
        let queue: TaskQueue<Vec<u32>> = TaskQueue::new();
        for i in 0..5 {
            queue.push(move |log| log.push(i));
        }
        let mut log = Vec::new();
        assert_eq!(queue.drain(&mut log), 5);
        assert_eq!(log, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_drain_on_empty_queue() {
        let queue: TaskQueue<()> = TaskQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.drain(&mut ()), 0);
    }

    #[test]
    fn test_handle_dispatch_from_another_thread() {
        let queue: TaskQueue<Vec<&'static str>> = TaskQueue::new();
        let handle = queue.handle();
        std::thread::spawn(move || {
            handle.dispatch(|log| log.push("from-thread"));
        })
        .join()
        .unwrap();
        let mut log = Vec::new();
        queue.drain(&mut log);
        assert_eq!(log, vec!["from-thread"]);
    }

    #[test]
    fn test_tasks_enqueued_while_draining_run_in_same_pass() {
        let queue: TaskQueue<Vec<u32>> = TaskQueue::new();
        let handle = queue.handle();
        queue.push(move |log| {
            log.push(1);
            handle.dispatch(|log| log.push(2));
        });
        let mut log = Vec::new();
        assert_eq!(queue.drain(&mut log), 2);
        assert_eq!(log, vec![1, 2]);
    }

    #[test]
    fn test_captured_state_released_after_execution() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        struct Probe(Arc<AtomicUsize>);
        impl Drop for Probe {
            fn drop(&mut self) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let drops = Arc::new(AtomicUsize::new(0));
        let queue: TaskQueue<()> = TaskQueue::new();
        let probe = Probe(Arc::clone(&drops));
        queue.push(move |_| {
            let _ = &probe;
        });
        assert_eq!(drops.load(Ordering::SeqCst), 0);
        queue.drain(&mut ());
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }
}
