use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;
use crate::hooks::{FetchState, LoadGeneration};

/// Loads `load` once on mount and returns its state with a `reload` callback.
///
/// Reporting failures is left to the caller, which reads them from
/// [`FetchState::Error`]. A reload supersedes any load still in flight:
/// the older result is dropped when it arrives.
#[hook]
pub fn use_reloadable<T, F, Fut>(load: F) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let state = use_state(|| FetchState::NotStarted);
    let generation = use_memo((), |_| LoadGeneration::default());
    let load = use_memo((), move |_| load);

    let reload = {
        let state = state.clone();
        use_callback((), move |_, _| {
            let ticket = generation.begin();
            state.set(FetchState::Loading);

            let state = state.clone();
            let generation = Rc::clone(&generation);
            let pending = (*load)();
            wasm_bindgen_futures::spawn_local(async move {
                let result = pending.await;
                if !generation.is_current(ticket) {
                    log::debug!("Dropping result of superseded load #{}", ticket);
                    return;
                }
                match result {
                    Ok(data) => state.set(FetchState::Success(data)),
                    Err(err) => {
                        log::warn!("Load #{} failed: {}", ticket, err);
                        state.set(FetchState::Error(err));
                    }
                }
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    (state, reload)
}
