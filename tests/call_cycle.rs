//! End-to-end bridge cycles over the platform-free core: inbound envelope
//! decoding, deferred replies on idle slices, and outbound correlation.

use std::cell::RefCell;
use std::rc::Rc;

use edgeview::bridge::{self, Bridge, Dispatch, Envelope, PendingCall, RESOLVE_FUNC};
use edgeview::event_loop::{EventLoop, Poll};
use edgeview::script;

/// Stand-in for the engine's script-execution channel.
#[derive(Default)]
struct PageScripts {
    executed: Vec<String>,
}

#[test]
fn script_call_is_answered_on_an_idle_slice() {
    let bridge = Rc::new(RefCell::new(Bridge::new()));
    let mut event_loop: EventLoop<PageScripts> = EventLoop::new();
    let tasks = event_loop.handle();

    // Native handler: sum the arguments, defer the reply the way a real
    // handler does through a window handle.
    bridge.borrow_mut().bind("sum", move |index, args| {
        let values: Vec<i64> = serde_json::from_str(args).expect("serialized args");
        let total = values.iter().sum::<i64>().to_string();
        tasks.dispatch(move |page: &mut PageScripts| {
            page.executed.push(script::resolve_call(index, true, &total));
        });
    });

    // The page invokes sum(1, 2, 3): one pending message, then an idle
    // slice, then a close request.
    let inbound = r#"{"index":12,"func":"sum","args":[1,2,3]}"#;
    let bridge_rx = Rc::clone(&bridge);
    let mut step = 0;
    let mut page = PageScripts::default();
    event_loop.run(&mut page, move || {
        step += 1;
        match step {
            1 => {
                assert_eq!(bridge::dispatch(&bridge_rx, inbound), Dispatch::Invoked);
                Poll::Dispatched
            }
            2 => Poll::Empty,
            _ => Poll::CloseRequested,
        }
    });

    // The reply targets the caller's index and was not sent by the codec
    // itself: it went through the deferred queue.
    assert_eq!(
        page.executed,
        vec!["webview.__resolveResult(12, true, 6);".to_string()]
    );
}

#[test]
fn native_call_round_trip_recycles_the_index() {
    let bridge = Rc::new(RefCell::new(Bridge::new()));
    let reply: Rc<RefCell<Option<bridge::CallReply>>> = Rc::default();
    let slot = Rc::clone(&reply);

    // Outbound leg: allocate, record, serialize.
    let index = bridge
        .borrow_mut()
        .begin_call(PendingCall::new(move |r| *slot.borrow_mut() = Some(r)))
        .ok()
        .expect("pool not exhausted");
    let outbound = Envelope::new(index, "refresh", vec![serde_json::json!("inventory")]);

    // Page leg: decode the posted envelope, run the handler, reply under
    // the same index through the reserved function name.
    let seen = Envelope::parse(&outbound.to_json()).expect("well-formed envelope");
    assert_eq!(seen.func, "refresh");
    assert_eq!(seen.args, serde_json::json!(["inventory"]));
    let reply_envelope = Envelope::new(seen.index, RESOLVE_FUNC, vec![serde_json::json!({"count": 3})]);

    // Reply leg: the continuation settles and the index returns to the pool.
    assert_eq!(
        bridge::dispatch(&bridge, &reply_envelope.to_json()),
        Dispatch::Settled
    );
    assert_eq!(
        reply.borrow().clone(),
        Some(Ok("{\"count\":3}".to_string()))
    );

    // A second cycle reuses the machinery cleanly.
    let again = bridge
        .borrow_mut()
        .begin_call(PendingCall::new(|_| {}))
        .ok()
        .expect("pool not exhausted");
    assert_ne!(again, index, "FIFO reuse should not hand back the newest index first");
}

#[test]
fn garbage_between_calls_does_not_disturb_the_stream() {
    let bridge = Rc::new(RefCell::new(Bridge::new()));
    let count = Rc::new(RefCell::new(0u32));
    let counter = Rc::clone(&count);
    bridge.borrow_mut().bind("ping", move |_, _| {
        *counter.borrow_mut() += 1;
    });

    let stream = [
        r#"{"index":1,"func":"ping","args":[]}"#,
        "garbage",
        r#"{"func":"ping","args":[]}"#,
        r#"{"index":"2","func":"ping","args":[]}"#,
        r#"{"index":3,"func":"unknown","args":[]}"#,
        r#"{"index":4,"func":"ping","args":[]}"#,
    ];
    for message in stream {
        bridge::dispatch(&bridge, message);
    }

    assert_eq!(*count.borrow(), 2);
}
