//! Custom hooks

use tokio_util::sync::CancellationToken;
use yew::prelude::*;

/// Token cancelled when the calling component unmounts.
///
/// Async work spawned by the component checks it before touching component state.
#[hook]
pub fn use_cancellation() -> CancellationToken {
    let token = use_memo((), |()| CancellationToken::new());

    {
        let token = (*token).clone();
        use_effect_with((), move |()| move || token.cancel());
    }

    (*token).clone()
}
