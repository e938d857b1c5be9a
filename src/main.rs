use std::rc::Rc;

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::timers::callback::Timeout;
use js_sys::Date;
use web_sys::{Element, Event, HtmlImageElement, MouseEvent};
use yew::prelude::*;

use iyada_core::{
    burst, clamp_to_viewport, evade_seed, initial_no_position, place_away, seed_base_from_millis,
    yes_position_in_card, EvadeConfig, HeartSpec, Pos, Rect, EVADE_MARGIN, HEART_COUNT,
};

mod dom_layout;
mod overlay;

use crate::dom_layout::{element_rect, viewport_size};
use crate::overlay::{fallback_data_url, CelebrationOverlay};

const CAT_IMAGE_SRC: &str = "assets/happy-cat.jpg";
const OVERLAY_AUTO_CLOSE_MS: u32 = 8_000;
const RESIZE_DEBOUNCE_MS: u32 = 120;

fn style_for(pos: Option<Pos>) -> String {
    match pos {
        Some(pos) => format!("left:{:.0}px;top:{:.0}px;", pos.left, pos.top),
        None => String::new(),
    }
}

/// Measures the button row and both controls and recomputes the session's
/// starting geometry. Returns the affirmative position (row-relative) and the
/// evading control's starting spot (viewport coordinates).
fn measure_initial_layout(
    row_ref: &NodeRef,
    yes_ref: &NodeRef,
    no_ref: &NodeRef,
) -> Option<(Pos, Pos)> {
    let row = row_ref.cast::<Element>()?;
    let yes = yes_ref.cast::<Element>()?;
    let no = no_ref.cast::<Element>()?;
    let viewport = viewport_size();
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return None;
    }
    let row_rect = element_rect(&row);
    let yes_rect = element_rect(&yes);
    let no_rect = element_rect(&no);
    let yes_pos = yes_position_in_card(row_rect.size(), yes_rect.size());
    let yes_view = Rect::new(
        row_rect.left + yes_pos.left,
        row_rect.top + yes_pos.top,
        yes_rect.width,
        yes_rect.height,
    );
    let no_pos = initial_no_position(&yes_view, no_rect.size(), viewport, EVADE_MARGIN);
    Some((yes_pos, no_pos))
}

#[function_component(App)]
fn app() -> Html {
    let row_ref = use_node_ref();
    let yes_ref = use_node_ref();
    let no_ref = use_node_ref();
    let img_ref = use_node_ref();

    let yes_pos = use_state(|| None::<Pos>);
    let no_pos = use_state(|| None::<Pos>);
    // Authoritative copy of the last applied position; read and written inside
    // native event listeners, so it lives outside render state.
    let last_pos_live = use_mut_ref(|| None::<Pos>);
    let placement_nonce = use_mut_ref(|| 0u32);
    let overlay_open = use_state(|| false);
    let hearts = use_state(Vec::<HeartSpec>::new);
    let image_src = use_state(|| CAT_IMAGE_SRC.to_string());
    let auto_close_timer = use_mut_ref(|| None::<Timeout>);
    let resize_timer = use_mut_ref(|| None::<Timeout>);

    let move_no: Rc<dyn Fn()> = {
        let yes_ref = yes_ref.clone();
        let no_ref = no_ref.clone();
        let no_pos = no_pos.clone();
        let last_pos_live = last_pos_live.clone();
        let placement_nonce = placement_nonce.clone();
        Rc::new(move || {
            let (Some(yes_el), Some(no_el)) = (yes_ref.cast::<Element>(), no_ref.cast::<Element>())
            else {
                console::warn!("controls not mounted, skipping placement");
                return;
            };
            let viewport = viewport_size();
            if viewport.width <= 0.0 || viewport.height <= 0.0 {
                return;
            }
            let yes_rect = element_rect(&yes_el);
            let no_rect = element_rect(&no_el);
            let nonce = {
                let mut slot = placement_nonce.borrow_mut();
                *slot = slot.wrapping_add(1);
                *slot
            };
            let seed = evade_seed(seed_base_from_millis(Date::now()), nonce);
            let last = *last_pos_live.borrow();
            let target = place_away(
                seed,
                yes_rect,
                no_rect,
                last,
                viewport,
                &EvadeConfig::default(),
            );
            *last_pos_live.borrow_mut() = Some(target);
            no_pos.set(Some(target));
        })
    };

    {
        let row_ref = row_ref.clone();
        let yes_ref = yes_ref.clone();
        let no_ref = no_ref.clone();
        let yes_pos = yes_pos.clone();
        let no_pos = no_pos.clone();
        let last_pos_live = last_pos_live.clone();
        use_effect_with((), move |_| {
            match measure_initial_layout(&row_ref, &yes_ref, &no_ref) {
                Some((yes, no)) => {
                    yes_pos.set(Some(yes));
                    *last_pos_live.borrow_mut() = Some(no);
                    no_pos.set(Some(no));
                }
                None => {
                    console::warn!("initial layout skipped, controls not mounted");
                }
            }
            || ()
        });
    }

    // The evading control needs native listeners: touchstart must be
    // registered with passive: false or prevent_default is ignored.
    {
        let no_ref = no_ref.clone();
        let move_no = move_no.clone();
        use_effect_with((), move |_| {
            let mut listeners = Vec::new();
            if let Some(no_el) = no_ref.cast::<Element>() {
                let run = move_no.clone();
                listeners.push(EventListener::new(
                    &no_el,
                    "mouseenter",
                    move |_event: &Event| {
                        run();
                    },
                ));
                let run = move_no.clone();
                listeners.push(EventListener::new_with_options(
                    &no_el,
                    "touchstart",
                    EventListenerOptions {
                        phase: EventListenerPhase::Bubble,
                        passive: false,
                    },
                    move |event: &Event| {
                        event.prevent_default();
                        run();
                    },
                ));
                let run = move_no.clone();
                listeners.push(EventListener::new(&no_el, "click", move |event: &Event| {
                    event.prevent_default();
                    run();
                }));
            } else {
                console::warn!("evading control missing, listeners not attached");
            }
            move || drop(listeners)
        });
    }

    {
        let row_ref = row_ref.clone();
        let yes_ref = yes_ref.clone();
        let no_ref = no_ref.clone();
        let yes_pos = yes_pos.clone();
        let no_pos = no_pos.clone();
        let last_pos_live = last_pos_live.clone();
        let resize_timer = resize_timer.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window available");
            let listener = EventListener::new(&window, "resize", move |_event: &Event| {
                let row_ref = row_ref.clone();
                let yes_ref = yes_ref.clone();
                let no_ref = no_ref.clone();
                let yes_pos = yes_pos.clone();
                let no_pos = no_pos.clone();
                let last_pos_live = last_pos_live.clone();
                // Replacing the pending timeout drops and thereby cancels it,
                // coalescing resize bursts into one re-layout.
                *resize_timer.borrow_mut() = Some(Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                    let viewport = viewport_size();
                    if viewport.width <= 0.0 || viewport.height <= 0.0 {
                        return;
                    }
                    if let (Some(row), Some(yes_el)) =
                        (row_ref.cast::<Element>(), yes_ref.cast::<Element>())
                    {
                        let row_rect = element_rect(&row);
                        let yes_rect = element_rect(&yes_el);
                        yes_pos.set(Some(yes_position_in_card(
                            row_rect.size(),
                            yes_rect.size(),
                        )));
                    }
                    if let Some(no_el) = no_ref.cast::<Element>() {
                        let no_rect = element_rect(&no_el);
                        let current = last_pos_live.borrow().unwrap_or(Pos {
                            left: no_rect.left,
                            top: no_rect.top,
                        });
                        let clamped =
                            clamp_to_viewport(current, no_rect.size(), viewport, EVADE_MARGIN);
                        *last_pos_live.borrow_mut() = Some(clamped);
                        no_pos.set(Some(clamped));
                    }
                }));
            });
            move || drop(listener)
        });
    }

    // Lock body scrolling while the overlay is up.
    {
        let open = *overlay_open;
        use_effect_with(open, move |open| {
            if let Some(body) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.body())
            {
                let value = if *open { "hidden" } else { "" };
                let _ = body.style().set_property("overflow", value);
            }
            || ()
        });
    }

    let on_yes_click = {
        let overlay_open = overlay_open.clone();
        let hearts = hearts.clone();
        let image_src = image_src.clone();
        let img_ref = img_ref.clone();
        let auto_close_timer = auto_close_timer.clone();
        Callback::from(move |_event: MouseEvent| {
            if let Some(img) = img_ref.cast::<HtmlImageElement>() {
                if img.natural_width() == 0 {
                    image_src.set(fallback_data_url());
                }
            }
            let seed = evade_seed(seed_base_from_millis(Date::now()), 0x4EA7);
            hearts.set(burst(seed, HEART_COUNT));
            overlay_open.set(true);
            let overlay_open = overlay_open.clone();
            let hearts = hearts.clone();
            *auto_close_timer.borrow_mut() = Some(Timeout::new(OVERLAY_AUTO_CLOSE_MS, move || {
                overlay_open.set(false);
                hearts.set(Vec::new());
            }));
        })
    };

    let close_overlay = {
        let overlay_open = overlay_open.clone();
        let hearts = hearts.clone();
        let auto_close_timer = auto_close_timer.clone();
        Callback::from(move |_event: MouseEvent| {
            overlay_open.set(false);
            hearts.set(Vec::new());
            auto_close_timer.borrow_mut().take();
        })
    };

    let on_image_error = {
        let image_src = image_src.clone();
        Callback::from(move |_event: Event| {
            console::warn!("primary image failed, using embedded fallback");
            image_src.set(fallback_data_url());
        })
    };

    html! {
        <>
            <main class="card">
                <h1>{ "Will you go out with me?" }</h1>
                <p class="ask">{ "There is only one right answer." }</p>
                <div class="button-row" ref={row_ref.clone()}>
                    <button
                        ref={yes_ref.clone()}
                        class="yes"
                        style={style_for(*yes_pos)}
                        onclick={on_yes_click}
                    >
                        { "Yes" }
                    </button>
                </div>
            </main>
            <button ref={no_ref.clone()} class="no" style={style_for(*no_pos)}>
                { "No" }
            </button>
            <CelebrationOverlay
                open={*overlay_open}
                hearts={(*hearts).clone()}
                image_src={(*image_src).clone()}
                img_ref={img_ref.clone()}
                on_close={close_overlay}
                on_image_error={on_image_error}
            />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
