use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use gloo_timers::callback::Timeout;
use chrono::{Datelike, Local};

use crate::components::parallax::ParallaxAngles;
use crate::config;

fn copyright_line(year: i32) -> String {
    format!(
        "© {} {} — Crafted with care & faith.",
        year,
        config::BRAND_NAME
    )
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Hero copy slides in from the left once, after first mount.
    let entered = use_state(|| false);

    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                // Empty deps: the entry transition cannot re-fire on later
                // renders. Without a window there is nothing to animate, so
                // the trigger is skipped.
                if web_sys::window().is_some() {
                    let timeout = Timeout::new(60, move || {
                        entered.set(true);
                    });
                    timeout.forget();
                }
                || ()
            },
            (),
        );
    }

    // 3D parallax tilt for the hero image, following the pointer.
    let tilt = use_state(ParallaxAngles::default);

    let on_hero_mouse_move = {
        let tilt = tilt.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(window) = web_sys::window() {
                let width = window.inner_width().ok().and_then(|v| v.as_f64());
                let height = window.inner_height().ok().and_then(|v| v.as_f64());
                if let (Some(w), Some(h)) = (width, height) {
                    if w > 0.0 && h > 0.0 {
                        tilt.set(ParallaxAngles::from_pointer(
                            e.client_x() as f64,
                            e.client_y() as f64,
                            w,
                            h,
                        ));
                    }
                }
            }
        })
    };

    let on_hero_mouse_leave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| {
            tilt.set(ParallaxAngles::NEUTRAL);
        })
    };

    // Reveal the story section the first time it scrolls into view.
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();
            let window_clone = window.clone();

            let scroll_callback = Closure::wrap(Box::new(move || {
                if let Some(story) = document.query_selector(".story-section").ok().flatten() {
                    let viewport_h = window_clone
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(0.0);
                    let rect = story.get_bounding_client_rect();
                    if rect.top() < viewport_h * 0.85
                        && !story.class_name().contains("visible")
                    {
                        story.set_class_name("story-section visible");
                    }
                }
            }) as Box<dyn FnMut()>);

            window
                .add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                )
                .unwrap();

            // Initial check for sections already in view before any scroll
            scroll_callback
                .as_ref()
                .unchecked_ref::<web_sys::js_sys::Function>()
                .call0(&JsValue::NULL)
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

    // The waitlist form goes nowhere on purpose: no network call, no
    // navigation, only the input's native required/email validation.
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
    });

    let hero_copy_class = classes!("hero-copy", (*entered).then(|| "entered"));
    let hero_image_style = format!(
        "transform-style: preserve-3d; transform: {}; transition: transform 0.1s ease-out;",
        tilt.css_transform()
    );
    let year = Local::now().year();

    html! {
        <div class="landing-page">
            <main class="hero">
                <section class={hero_copy_class}>
                    <h1>
                        {"This life is "}
                        <span class="text-gold neon-glow">{"temporary"}</span>
                        {", "}<br />
                        {"but how we live in it "}<br />
                        <span class="text-gold neon-glow">{"will take us home."}</span>
                    </h1>
                    <p class="hero-lede">
                        {"headed home is redefining Muslim-inspired fashion — made with \
                          faith, integrity, and unmatched quality for those who seek purpose."}
                    </p>
                    <form
                        id="waitlist-form"
                        class="waitlist-form"
                        onsubmit={onsubmit}
                        aria-label="Email subscription form"
                    >
                        <input
                            type="email"
                            aria-label="Email address"
                            placeholder="Enter your email"
                            required={true}
                        />
                        <button type="submit" class="waitlist-submit">
                            {"Get Early Access"}
                        </button>
                    </form>
                </section>

                <section
                    class="hero-image-section"
                    onmousemove={on_hero_mouse_move}
                    onmouseleave={on_hero_mouse_leave}
                    style={hero_image_style}
                    aria-label="Person wearing modern clothing"
                >
                    <img
                        src={config::HERO_IMAGE_URL}
                        alt="Person wearing modern clothing"
                        loading="lazy"
                        class="hero-img"
                    />
                    <div class="image-overlay"></div>
                </section>
            </main>

            <section class="story-section">
                <h2 class="text-gold neon-glow">{"Our Story"}</h2>
                <p>
                    {"Born from the desire to unite faith and fashion, headed home \
                      represents a movement of identity, purpose, and timeless style. \
                      Our designs honor tradition while embracing the future — built for \
                      those who walk their own path with dignity and conviction."}
                </p>
            </section>

            <footer class="site-footer">
                { copyright_line(year) }
            </footer>

            <style>
                {r#"
                    body {
                        margin: 0;
                        background: linear-gradient(180deg, #05071A 0%, #0A0E2D 50%, #131A40 100%);
                        background-attachment: fixed;
                        color: #fff;
                        font-family: 'Montserrat', sans-serif;
                        overflow-x: hidden;
                    }

                    .landing-page {
                        min-height: 100vh;
                    }

                    .text-gold {
                        background: linear-gradient(90deg, #FFD700, #D4AF37, #B8860B);
                        -webkit-background-clip: text;
                        background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }

                    .neon-glow {
                        text-shadow:
                            0 0 6px #d4af37,
                            0 0 12px #d4af37,
                            0 0 18px #b8860b,
                            0 0 24px #d4af37,
                            0 0 30px #ffd700;
                    }

                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.5rem 3rem;
                        background: transparent;
                        transition: box-shadow 0.5s ease, background 0.5s ease;
                    }

                    .top-nav.scrolled {
                        background: rgba(5, 7, 26, 0.95);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.6);
                    }

                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        cursor: pointer;
                        user-select: none;
                    }

                    /* diamond perimeter is ~113px, round up so the draw completes */
                    .logo-path {
                        stroke-dasharray: 114;
                        stroke-dashoffset: 114;
                        animation: draw-logo 2s ease-in-out forwards;
                    }

                    @keyframes draw-logo {
                        to { stroke-dashoffset: 0; }
                    }

                    .nav-wordmark {
                        font-size: 1.875rem;
                        font-weight: 700;
                        letter-spacing: 0.05em;
                        filter: drop-shadow(0 4px 3px rgba(0, 0, 0, 0.4));
                    }

                    .nav-cta {
                        border: 2px solid #d4af37;
                        color: #d4af37;
                        background: transparent;
                        padding: 0.75rem 1.75rem;
                        border-radius: 0.375rem;
                        font-weight: 600;
                        font-family: inherit;
                        font-size: 1rem;
                        cursor: pointer;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.4);
                        transition: transform 0.2s ease, background-color 0.3s ease, color 0.3s ease;
                    }

                    .nav-cta:hover {
                        transform: scale(1.1);
                        background-color: #b29727;
                        color: #05071A;
                    }

                    .nav-cta:active {
                        transform: scale(0.95);
                    }

                    .hero {
                        padding: 7rem 2rem 0;
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 5rem;
                    }

                    @media (min-width: 769px) {
                        .hero {
                            flex-direction: row;
                            padding: 7rem 6rem 0;
                        }
                    }

                    .hero-copy {
                        width: 100%;
                        max-width: 36rem;
                        display: flex;
                        flex-direction: column;
                        gap: 2.5rem;
                        background: rgba(0, 0, 0, 0.3);
                        backdrop-filter: blur(16px);
                        border-radius: 1.5rem;
                        padding: 3rem;
                        border: 1px solid rgba(212, 175, 55, 0.4);
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.6);
                        opacity: 0;
                        transform: translateX(-50px);
                        transition: opacity 1s ease, transform 1s ease;
                    }

                    .hero-copy.entered {
                        opacity: 1;
                        transform: translateX(0);
                    }

                    .hero-copy h1 {
                        margin: 0;
                        font-family: Georgia, 'Times New Roman', serif;
                        font-size: 3.75rem;
                        font-weight: 800;
                        line-height: 1.1;
                        letter-spacing: -0.02em;
                    }

                    .hero-lede {
                        margin: 0;
                        color: #d1d5db;
                        font-size: 1.125rem;
                        letter-spacing: 0.02em;
                        line-height: 1.7;
                    }

                    .waitlist-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }

                    @media (min-width: 640px) {
                        .waitlist-form {
                            flex-direction: row;
                        }
                    }

                    .waitlist-form input {
                        flex-grow: 1;
                        border: none;
                        border-radius: 0.5rem;
                        padding: 1rem 1.5rem;
                        background: rgba(0, 0, 0, 0.4);
                        color: #fff;
                        font-family: inherit;
                        font-size: 1rem;
                        transition: box-shadow 0.3s ease;
                    }

                    .waitlist-form input::placeholder {
                        color: #9ca3af;
                    }

                    .waitlist-form input:focus {
                        outline: none;
                        box-shadow: 0 0 0 4px rgba(212, 175, 55, 0.7);
                    }

                    .waitlist-submit {
                        border: none;
                        background: #d4af37;
                        color: #000;
                        border-radius: 0.5rem;
                        padding: 1rem 2.5rem;
                        font-weight: 600;
                        font-family: inherit;
                        font-size: 1rem;
                        cursor: pointer;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.4);
                        transition: transform 0.2s ease, background-color 0.3s ease, color 0.3s ease;
                    }

                    .waitlist-submit:hover {
                        transform: scale(1.05);
                        background-color: #b29727;
                        color: #05071A;
                    }

                    .waitlist-submit:active {
                        transform: scale(0.95);
                    }

                    .hero-image-section {
                        width: 100%;
                        max-width: 36rem;
                        position: relative;
                        perspective: 800px;
                    }

                    .hero-img {
                        display: block;
                        width: 100%;
                        height: 480px;
                        object-fit: cover;
                        border-radius: 1.5rem;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.6);
                        cursor: pointer;
                        animation: hero-img-in 1s ease 0.3s both;
                        transition: transform 0.3s ease;
                    }

                    @media (min-width: 769px) {
                        .hero-img {
                            height: 580px;
                        }
                    }

                    .hero-img:hover {
                        transform: scale(1.1);
                    }

                    @keyframes hero-img-in {
                        from {
                            transform: scale(0.95);
                            opacity: 0;
                        }
                        to {
                            transform: scale(1);
                            opacity: 1;
                        }
                    }

                    .image-overlay {
                        position: absolute;
                        inset: 0;
                        border-radius: 1.5rem;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent);
                        pointer-events: none;
                    }

                    .story-section {
                        max-width: 64rem;
                        margin: 10rem auto 0;
                        padding: 0 2rem;
                        text-align: center;
                        opacity: 0;
                        transform: translateY(40px);
                        transition: opacity 1s ease, transform 1s ease;
                    }

                    .story-section.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }

                    .story-section h2 {
                        margin: 0 0 3rem;
                        font-family: Georgia, 'Times New Roman', serif;
                        font-size: 3rem;
                        font-weight: 800;
                    }

                    .story-section p {
                        margin: 0 auto;
                        max-width: 48rem;
                        color: #d1d5db;
                        letter-spacing: 0.02em;
                        line-height: 1.7;
                    }

                    .site-footer {
                        margin-top: 12rem;
                        padding: 3rem 0;
                        border-top: 1px solid #374151;
                        color: #6b7280;
                        text-align: center;
                        font-size: 0.875rem;
                        user-select: none;
                    }

                    @media (max-width: 768px) {
                        .top-nav {
                            padding: 1rem 1.5rem;
                        }

                        .nav-wordmark {
                            font-size: 1.5rem;
                        }

                        .hero-copy h1 {
                            font-size: 2.5rem;
                        }

                        .hero-copy {
                            padding: 2rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_year_and_brand() {
        let line = copyright_line(2026);
        assert!(line.contains("2026"));
        assert!(line.contains("headed home"));
    }
}
