//! The page-side half of the bridge.
//!
//! [`BOOTSTRAP`] is injected into every document before any page script
//! runs. It installs a global `webview` object holding the script-side
//! correlation machinery: a FIFO index allocator mirroring the native one,
//! the promise table for script-originated calls, and the event registry
//! plus reply path for native-originated calls.
//!
//! The composer functions build the small script snippets the native side
//! executes to resolve promises and fire events.

use serde_json::Value;

pub const BOOTSTRAP: &str = r#"
class Queue {
    constructor() {
        this.elements = {};
        this.head = 0;
        this.tail = 0;
    }

    enqueue(element) {
        this.elements[this.tail] = element;
        this.tail++;
    }

    dequeue() {
        const item = this.elements[this.head];
        delete this.elements[this.head];
        this.head++;
        return item;
    }

    length() {
        return this.tail - this.head;
    }
}

class IndexAllocator {
    constructor(count) {
        this.queue = new Queue();
        for (let i = 0; i < count; i++) {
            this.queue.enqueue(i);
        }
    }

    allocate() {
        return this.queue.dequeue();
    }

    deallocate(element) {
        this.queue.enqueue(element);
    }
}

class WebView {
    static MAX_RESULTS = 100000;

    constructor() {
        this.results = {};
        this.events = {};
        this.allocator = new IndexAllocator(WebView.MAX_RESULTS);
        window.chrome.webview.addEventListener('message', event => this.__dispatch(event.data));
    }

    event(name, func) {
        this.events[name] = func;
    }

    invoke(name, ...args) {
        const index = this.allocator.allocate();
        const promise = new Promise((resolve, reject) => {
            this.results[index] = {
                resolve: resolve,
                reject: reject
            };
        });
        window.chrome.webview.postMessage(
            JSON.stringify({
                index: index,
                func: name,
                args: Array.from(args)
            })
        );
        return promise;
    }

    __dispatch(data) {
        const message = typeof data === 'string' ? this.__parse(data) : data;
        if (!message || typeof message.index !== 'number' || typeof message.func !== 'string') {
            return;
        }
        const handler = this.events[message.func];
        if (!handler) {
            return;
        }
        const args = Array.isArray(message.args) ? message.args : [];
        Promise.resolve()
            .then(() => handler(...args))
            .then(
                value => this.__reply(message.index, '__result', value),
                reason => this.__reply(message.index, '__error', String(reason))
            );
    }

    __parse(text) {
        try {
            return JSON.parse(text);
        } catch {
            return null;
        }
    }

    __reply(index, func, value) {
        window.chrome.webview.postMessage(
            JSON.stringify({
                index: index,
                func: func,
                args: [value === undefined ? null : value]
            })
        );
    }

    __resolveResult(index, ok, value) {
        const slot = this.results[index];
        if (!slot) {
            return;
        }
        delete this.results[index];
        (ok ? slot.resolve : slot.reject)(value);
        this.allocator.deallocate(index);
    }

    __emit(name, payload) {
        const handler = this.events[name];
        if (handler) {
            handler(payload);
        }
    }
}

let webview = new WebView();
"#;

/// Interpret caller-supplied text as a JSON value, falling back to a JSON
/// string when it is not valid JSON. The result is always a valid script
/// expression.
fn as_json_expr(data: &str) -> String {
    serde_json::from_str::<Value>(data)
        .unwrap_or_else(|_| Value::String(data.to_string()))
        .to_string()
}

/// Script settling the page-side promise stored under `index`.
pub fn resolve_call(index: u64, ok: bool, data: &str) -> String {
    format!(
        "webview.__resolveResult({}, {}, {});",
        index,
        ok,
        as_json_expr(data)
    )
}

/// Script firing the page-side event handler registered under `name`.
pub fn emit_event(name: &str, data: &str) -> String {
    format!(
        "webview.__emit({}, {});",
        Value::String(name.to_string()),
        as_json_expr(data)
    )
}
