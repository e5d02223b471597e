use yew::prelude::*;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod components {
    pub mod parallax;
    pub mod scroll;
}
mod pages {
    pub mod landing;
}

use components::scroll;
use pages::landing::Landing;

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll::past_top(scroll_y));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let scroll_to_waitlist = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Ok(Some(form)) = document.query_selector("#waitlist-form") {
                form.scroll_into_view();
            }
        }
    });

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-logo" role="img" aria-label="headed home logo">
                <svg
                    width="48"
                    height="48"
                    viewBox="0 0 48 48"
                    fill="none"
                    xmlns="http://www.w3.org/2000/svg"
                >
                    <path
                        class="logo-path"
                        d="M4 24 L24 4 L44 24 L24 44 Z"
                        stroke="#D4AF37"
                        stroke-width="3"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    />
                </svg>
                <span class="nav-wordmark text-gold">{config::BRAND_NAME}</span>
            </div>
            <button class="nav-cta" onclick={scroll_to_waitlist}>{"Join Waitlist"}</button>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
