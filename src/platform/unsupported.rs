//! Stub backend for platforms without an embedded-engine implementation.
//!
//! Construction always fails, so no value of [`Window`] ever exists; the
//! uninhabited field lets every method body compile as `match self.void {}`.

use serde_json::Value;

use crate::bridge::CallReply;
use crate::error::{Error, Result};
use crate::options::AppOptions;

#[derive(Clone, Copy)]
enum Void {}

pub(crate) struct Window {
    void: Void,
}

impl Window {
    pub fn create(_options: AppOptions) -> Result<Self> {
        Err(Error::Unsupported)
    }

    pub fn handle(&self) -> WindowHandle {
        match self.void {}
    }

    pub fn bind(&mut self, _name: &str, _handler: impl FnMut(u64, &str) + 'static) {
        match self.void {}
    }

    pub fn unbind(&mut self, _name: &str) {
        match self.void {}
    }

    pub fn result(&self, _index: u64, _ok: bool, _data: &str) {
        match self.void {}
    }

    pub fn emit(&self, _event: &str, _data: &str) {
        match self.void {}
    }

    pub fn invoke(
        &self,
        _func: &str,
        _args: Vec<Value>,
        _on_reply: impl FnOnce(CallReply) + Send + 'static,
    ) {
        match self.void {}
    }

    pub fn execute_script(&self, _js: &str) -> Result<()> {
        match self.void {}
    }

    pub fn on_idle(&mut self, _hook: impl FnMut() + 'static) {
        match self.void {}
    }

    pub fn set_size(&self, _width: u32, _height: u32) -> Result<()> {
        match self.void {}
    }

    pub fn set_min_size(&self, _width: u32, _height: u32) {
        match self.void {}
    }

    pub fn set_max_size(&self, _width: u32, _height: u32) {
        match self.void {}
    }

    pub fn run(&mut self, _location: &str) -> Result<()> {
        match self.void {}
    }

    pub fn quit(&self) {
        match self.void {}
    }
}

pub(crate) struct WindowHandle {
    void: Void,
}

impl Clone for WindowHandle {
    fn clone(&self) -> Self {
        match self.void {}
    }
}

impl WindowHandle {
    pub fn result(&self, _index: u64, _ok: bool, _data: &str) {
        match self.void {}
    }

    pub fn emit(&self, _event: &str, _data: &str) {
        match self.void {}
    }

    pub fn invoke(
        &self,
        _func: &str,
        _args: Vec<Value>,
        _on_reply: impl FnOnce(CallReply) + Send + 'static,
    ) {
        match self.void {}
    }

    pub fn execute_script(&self, _js: &str) {
        match self.void {}
    }

    pub fn bind(&self, _name: &str, _handler: impl FnMut(u64, &str) + Send + 'static) {
        match self.void {}
    }

    pub fn unbind(&self, _name: &str) {
        match self.void {}
    }

    pub fn set_size(&self, _width: u32, _height: u32) {
        match self.void {}
    }

    pub fn set_min_size(&self, _width: u32, _height: u32) {
        match self.void {}
    }

    pub fn set_max_size(&self, _width: u32, _height: u32) {
        match self.void {}
    }

    pub fn quit(&self) {
        match self.void {}
    }
}
