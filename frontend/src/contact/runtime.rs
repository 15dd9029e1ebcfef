use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

/// Task spawning and timers for the contact pipeline.
pub trait Runtime {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
    fn sleep(&self, millis: u32) -> LocalBoxFuture<'static, ()>;
}

/// Browser event loop: `spawn_local` plus `setTimeout` backed futures.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRuntime;

impl Runtime for BrowserRuntime {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        spawn_local(task);
    }

    fn sleep(&self, millis: u32) -> LocalBoxFuture<'static, ()> {
        TimeoutFuture::new(millis).boxed_local()
    }
}
