use std::future::Future;

use futures::future::{abortable, AbortHandle, Aborted};

use crate::error::{aborted_error, Error};

/// In-flight request registry for one view. Dropping the scope aborts
/// whatever is still running, so a late response can never reach a view
/// that has been torn down.
pub struct Scope {
    handles: Vec<AbortHandle>,
}

impl Scope {
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    pub async fn run<T, F>(&mut self, fut: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, Error>>,
    {
        let (fut, handle) = abortable(fut);

        self.handles.push(handle);
        let result = fut.await;
        self.handles.pop();

        match result {
            Ok(inner) => inner,
            Err(Aborted) => Err(aborted_error()),
        }
    }

    pub fn abort_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        self.abort_all();
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}
