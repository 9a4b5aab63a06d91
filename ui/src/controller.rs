// Submit handling shared by the page controllers
use crate::api::ApiError;
use leptos::*;
use std::future::Future;

/// Holds a loading flag up for as long as it lives.
///
/// The flag drops back to false when the guard is dropped, which covers a
/// finished call, a failed call and an aborted task alike.
pub struct LoadingGuard<F: Fn(bool)> {
    set_loading: F,
}

impl<F: Fn(bool)> LoadingGuard<F> {
    pub fn start(set_loading: F) -> Self {
        set_loading(true);
        Self { set_loading }
    }
}

impl<F: Fn(bool)> Drop for LoadingGuard<F> {
    fn drop(&mut self) {
        (self.set_loading)(false);
    }
}

pub async fn run_submission<T, Fut, F>(label: &str, set_loading: F, fut: Fut) -> Result<T, ApiError>
where
    Fut: Future<Output = Result<T, ApiError>>,
    F: Fn(bool),
{
    let _guard = LoadingGuard::start(set_loading);
    log::info!("{}: submitting", label);

    let result = fut.await;
    match &result {
        Ok(_) => log::info!("{}: done", label),
        Err(err) => log::warn!("{}: {}", label, err),
    }
    result
}

/// Loading flag plus the single alert a page shows when a call fails.
#[derive(Clone, Copy)]
pub struct SubmitState {
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl SubmitState {
    pub fn new() -> Self {
        Self {
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }

    /// Runs one submission. Returns `None` after putting the failure into
    /// `error`.
    pub async fn run<T, Fut>(self, label: &str, fut: Fut) -> Option<T>
    where
        Fut: Future<Output = Result<T, ApiError>>,
    {
        self.error.try_set(None);

        // The owning view may be gone by the time the guard drops
        let loading = self.loading;
        match run_submission(label, move |value| {
            loading.try_set(value);
        }, fut)
        .await
        {
            Ok(value) => Some(value),
            Err(err) => {
                self.error.try_set(Some(err.user_message()));
                None
            }
        }
    }
}

impl Default for SubmitState {
    fn default() -> Self {
        Self::new()
    }
}
