//! Spawning of local (non-`Send`) tasks on the browser event loop.

use std::future::Future;
use std::pin::Pin;

pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

pub trait TaskSpawner {
    fn spawn(&self, task: LocalTask);
}

/// Runs tasks as promise jobs via `wasm_bindgen_futures::spawn_local`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSpawner;

impl TaskSpawner for BrowserSpawner {
    fn spawn(&self, task: LocalTask) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
