//! Bridge protocol codec, callback registry and pending-call table.
//!
//! Both directions of the bridge exchange one JSON envelope per message:
//! `{"index": <u64>, "func": <string>, "args": <array>}`. Inbound traffic
//! is tolerant: anything that is not a well-formed envelope, or
//! names a function nobody bound, is dropped without surfacing an error.
//! Correlated replies travel through the same channel under the reserved
//! names [`RESOLVE_FUNC`] and [`REJECT_FUNC`].
//!
//! All state in here is confined to the thread that runs the event loop;
//! other threads reach it only through the task queue.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::allocator::IndexAllocator;
use crate::error::Error;

/// Reserved function name carrying a successful reply to a native call.
pub const RESOLVE_FUNC: &str = "__result";
/// Reserved function name carrying a rejected reply to a native call.
pub const REJECT_FUNC: &str = "__error";

/// The wire envelope. Deserialization failing for any reason (missing or
/// non-numeric `index`, missing `func`, not JSON at all) is how malformed
/// traffic gets rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub index: u64,
    pub func: String,
    #[serde(default = "empty_args")]
    pub args: Value,
}

fn empty_args() -> Value {
    Value::Array(Vec::new())
}

impl Envelope {
    pub fn new(index: u64, func: &str, args: Vec<Value>) -> Self {
        Self {
            index,
            func: func.to_string(),
            args: Value::Array(args),
        }
    }

    pub fn parse(text: &str) -> Option<Envelope> {
        serde_json::from_str(text).ok()
    }

    pub fn to_json(&self) -> String {
        // Value maps are string-keyed, so this cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// A native handler bound under a function name. Receives the correlation
/// index and the still-serialized argument array; replying (keyed by that
/// index) is the handler's responsibility, not the codec's.
pub type BoundHandler = Box<dyn FnMut(u64, &str)>;

/// Outcome of a native-originated call: the serialized reply value, or the
/// serialized rejection reason.
pub type CallReply = Result<String, String>;

/// Continuation for one in-flight native-originated call.
pub struct PendingCall {
    on_reply: Box<dyn FnOnce(CallReply)>,
}

impl PendingCall {
    pub fn new(on_reply: impl FnOnce(CallReply) + 'static) -> Self {
        Self {
            on_reply: Box::new(on_reply),
        }
    }

    pub fn settle(self, reply: CallReply) {
        (self.on_reply)(reply);
    }
}

/// Registry, pending-call table and index pool for the native side.
pub struct Bridge {
    registry: HashMap<String, Rc<RefCell<BoundHandler>>>,
    pending: HashMap<u64, PendingCall>,
    indices: IndexAllocator,
}

impl Bridge {
    pub fn new() -> Self {
        Self {
            registry: HashMap::new(),
            pending: HashMap::new(),
            indices: IndexAllocator::default(),
        }
    }

    /// Bind `handler` under `name`, replacing any previous binding.
    pub fn bind(&mut self, name: &str, handler: impl FnMut(u64, &str) + 'static) {
        self.registry
            .insert(name.to_string(), Rc::new(RefCell::new(Box::new(handler))));
    }

    pub fn unbind(&mut self, name: &str) {
        self.registry.remove(name);
    }

    fn handler(&self, name: &str) -> Option<Rc<RefCell<BoundHandler>>> {
        self.registry.get(name).cloned()
    }

    /// Start a native-originated call: allocate a correlation index and
    /// record the continuation under it. The entry stays until a reply
    /// envelope settles it or the caller reclaims it after a send failure.
    ///
    /// On pool exhaustion the continuation is handed back so the caller
    /// can reject it distinctly instead of dropping it on the floor.
    pub fn begin_call(
        &mut self,
        call: PendingCall,
    ) -> std::result::Result<u64, (Error, PendingCall)> {
        let index = match self.indices.allocate() {
            Ok(index) => index,
            Err(err) => return Err((err, call)),
        };
        self.pending.insert(index, call);
        Ok(index)
    }

    /// Remove the continuation for `index` and return the index to the
    /// pool. `None` if nothing is in flight under that index.
    pub fn take_pending(&mut self, index: u64) -> Option<PendingCall> {
        let call = self.pending.remove(&index);
        if call.is_some() {
            self.indices.deallocate(index);
        }
        call
    }

    #[cfg(test)]
    pub fn with_pool(capacity: usize) -> Self {
        Self {
            registry: HashMap::new(),
            pending: HashMap::new(),
            indices: IndexAllocator::new(capacity),
        }
    }

    #[cfg(test)]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub fn indices_available(&self) -> usize {
        self.indices.available()
    }
}

impl Default for Bridge {
    fn default() -> Self {
        Self::new()
    }
}

/// What [`dispatch`] did with one inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A bound handler was invoked.
    Invoked,
    /// A pending native call was settled by a reply envelope.
    Settled,
    /// Malformed, unmatched or stale: dropped without effect.
    Ignored,
}

/// Decode one inbound message and route it.
///
/// Reply envelopes settle the pending-call table; everything else goes
/// through the registry. The handler is invoked outside the bridge borrow
/// so it may freely enqueue follow-up work.
pub fn dispatch(bridge: &Rc<RefCell<Bridge>>, text: &str) -> Dispatch {
    let Some(envelope) = Envelope::parse(text) else {
        tracing::trace!("dropping malformed bridge message");
        return Dispatch::Ignored;
    };

    match envelope.func.as_str() {
        RESOLVE_FUNC | REJECT_FUNC => {
            let call = bridge.borrow_mut().take_pending(envelope.index);
            let Some(call) = call else {
                tracing::trace!(index = envelope.index, "reply for unknown call; dropping");
                return Dispatch::Ignored;
            };
            let payload = reply_payload(&envelope.args);
            if envelope.func == RESOLVE_FUNC {
                call.settle(Ok(payload));
            } else {
                call.settle(Err(payload));
            }
            Dispatch::Settled
        }
        _ => {
            let handler = bridge.borrow().handler(&envelope.func);
            let Some(handler) = handler else {
                tracing::trace!(func = %envelope.func, "no handler bound; dropping");
                return Dispatch::Ignored;
            };
            let args = envelope.args.to_string();
            let mut handler = handler.borrow_mut();
            (*handler)(envelope.index, &args);
            Dispatch::Invoked
        }
    }
}

/// A reply carries its value as the first element of `args`.
fn reply_payload(args: &Value) -> String {
    match args {
        Value::Array(items) => items.first().cloned().unwrap_or(Value::Null).to_string(),
        other => other.to_string(),
    }
}
