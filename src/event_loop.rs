//! The single control loop.
//!
//! One iteration does exactly one of two things: dispatch one pending
//! native message, or (only when no message is pending) drain the whole
//! task queue and invoke the idle hook once. Native input therefore always
//! has priority over deferred work, and deferred work can never starve the
//! message source.

use crate::task_queue::{TaskHandle, TaskQueue};

/// What the native message source reported for one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Poll {
    /// One pending message was removed and dispatched.
    Dispatched,
    /// A close-request message was observed; it is not dispatched further.
    CloseRequested,
    /// No message is pending.
    Empty,
}

/// Loop lifecycle. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Quitting,
    Stopped,
}

/// Drives a message source until a close request arrives.
///
/// Owns the deferred [`TaskQueue`] and the optional idle hook. `C` is the
/// drain context handed to tasks and the idle hook (the engine on the real
/// platform).
pub struct EventLoop<C> {
    queue: TaskQueue<C>,
    idle: Option<Box<dyn FnMut(&mut C)>>,
    state: LoopState,
}

impl<C> EventLoop<C> {
    pub fn new() -> Self {
        Self {
            queue: TaskQueue::new(),
            idle: None,
            state: LoopState::Stopped,
        }
    }

    pub fn handle(&self) -> TaskHandle<C> {
        self.queue.handle()
    }

    pub fn queue(&self) -> &TaskQueue<C> {
        &self.queue
    }

    /// Register the hook invoked once per iteration when both the message
    /// source and the task queue are empty. Replaces any previous hook.
    pub fn set_idle(&mut self, hook: Box<dyn FnMut(&mut C)>) {
        self.idle = Some(hook);
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Run until the source reports a close request. Every other poll
    /// outcome keeps the loop in `Running`; nothing in here blocks except
    /// the source itself.
    pub fn run(&mut self, ctx: &mut C, mut source: impl FnMut() -> Poll) {
        self.state = LoopState::Running;
        while self.state == LoopState::Running {
            match source() {
                Poll::Dispatched => {}
                Poll::CloseRequested => {
                    self.state = LoopState::Quitting;
                }
                Poll::Empty => {
                    self.queue.drain(ctx);
                    if let Some(idle) = self.idle.as_mut() {
                        idle(ctx);
                    }
                }
            }
        }
        self.state = LoopState::Stopped;
    }
}

impl<C> Default for EventLoop<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed poll script, then reports a close request forever.
    fn scripted(polls: Vec<Poll>) -> impl FnMut() -> Poll {
        let mut polls = polls.into_iter();
        move || polls.next().unwrap_or(Poll::CloseRequested)
    }

    #[test]
    fn test_close_request_stops_the_loop() {
        let mut lp: EventLoop<()> = EventLoop::new();
        lp.run(&mut (), scripted(vec![Poll::Dispatched, Poll::Dispatched]));
        assert_eq!(lp.state(), LoopState::Stopped);
    }

    #[test]
    fn test_tasks_never_run_while_messages_pending() {
        // Three dispatched messages, then one empty slice, then close.
        // Events are interleaved into one log to observe ordering.
        use std::cell::RefCell;
        use std::rc::Rc;

        let log: Rc<RefCell<Vec<&'static str>>> = Rc::default();
        let mut lp: EventLoop<Rc<RefCell<Vec<&'static str>>>> = EventLoop::new();
        lp.queue().push(|log| log.borrow_mut().push("task"));

        let mut polls = scripted(vec![
            Poll::Dispatched,
            Poll::Dispatched,
            Poll::Dispatched,
            Poll::Empty,
        ]);
        let source_log = Rc::clone(&log);
        let mut ctx = Rc::clone(&log);
        lp.run(&mut ctx, move || {
            let poll = polls();
            if poll == Poll::Dispatched {
                source_log.borrow_mut().push("msg");
            }
            poll
        });

        assert_eq!(&*log.borrow(), &["msg", "msg", "msg", "task"]);
    }

    #[test]
    fn test_queue_drained_in_fifo_order_on_idle_slice() {
        let mut lp: EventLoop<Vec<u32>> = EventLoop::new();
        for i in 0..4 {
            lp.queue().push(move |log| log.push(i));
        }
        let mut log = Vec::new();
        lp.run(&mut log, scripted(vec![Poll::Empty]));
        assert_eq!(log, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_idle_hook_runs_once_per_empty_slice_after_drain() {
        let mut lp: EventLoop<Vec<&'static str>> = EventLoop::new();
        lp.queue().push(|log| log.push("task"));
        lp.set_idle(Box::new(|log| log.push("idle")));
        let mut log = Vec::new();
        lp.run(
            &mut log,
            scripted(vec![Poll::Empty, Poll::Dispatched, Poll::Empty]),
        );
        // First empty slice: drain then idle. Second: nothing queued, idle only.
        assert_eq!(log, vec!["task", "idle", "idle"]);
    }

    #[test]
    fn test_tasks_enqueued_after_close_do_not_run() {
        let mut lp: EventLoop<Vec<u32>> = EventLoop::new();
        let handle = lp.handle();
        let mut log = Vec::new();
        lp.run(&mut log, move || {
            handle.dispatch(|log| log.push(1));
            Poll::CloseRequested
        });
        assert_eq!(lp.state(), LoopState::Stopped);
        assert!(log.is_empty());
    }
}
