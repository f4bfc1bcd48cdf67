/// Popup UI: the on/off toggle for the extension

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use patternfly_yew::prelude::*;
use crate::i18n;
use crate::storage::EnabledFlag;
use crate::ui::components::Toggle;

#[function_component(App)]
pub fn app() -> Html {
    let enabled = use_state(|| None::<bool>);
    let error = use_state(|| None::<String>);

    // Read the persisted flag on mount
    {
        let enabled = enabled.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match EnabledFlag::read().await {
                    Ok(value) => enabled.set(Some(value)),
                    Err(e) => error.set(Some(e)),
                }
            });
            || ()
        });
    }

    let on_toggle = {
        let enabled = enabled.clone();
        let error = error.clone();

        Callback::from(move |next: bool| {
            enabled.set(Some(next));

            let error = error.clone();
            spawn_local(async move {
                if let Err(e) = EnabledFlag::write(next).await {
                    error.set(Some(e));
                }
            });
        })
    };

    html! {
        <main class="popup-main">
            <h1 class="popup-title">{"Link Copier"}</h1>

            if let Some(err) = (*error).clone() {
                <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                    {err}
                </Alert>
            }

            {match *enabled {
                None => html! {
                    <div class="loading-text-center">
                        <Spinner />
                    </div>
                },
                Some(value) => html! {
                    <Toggle label={i18n::enabled()} value={value} on_toggle={on_toggle.clone()} />
                },
            }}
        </main>
    }
}
