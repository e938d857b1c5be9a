use web_sys::{Event, MouseEvent};
use yew::prelude::*;

use iyada_core::HeartSpec;

// Inline SVG shipped with the bundle so the celebration never shows a broken
// image, whatever happens to the primary asset.
const FALLBACK_CAT_SVG: &str = r#"<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 600 420'>
  <defs>
    <linearGradient id='g' x1='0' x2='1'><stop offset='0' stop-color='#ffd7ea'/><stop offset='1' stop-color='#ffb3d6'/></linearGradient>
  </defs>
  <rect width='100%' height='100%' fill='url(#g)'/>
  <g transform='translate(80,40)' stroke='#ab2a6a' stroke-width='4' fill='#fff'>
    <ellipse cx='220' cy='210' rx='110' ry='110' fill='#fff'/>
    <path d='M150 80 C170 10, 90 10, 120 80 Z' fill='#fff'/>
    <path d='M290 80 C310 10, 370 10, 340 80 Z' fill='#fff'/>
    <circle cx='190' cy='200' r='10' fill='#333'/>
    <circle cx='250' cy='200' r='10' fill='#333'/>
    <path d='M210 235 Q230 255 250 235' stroke='#e85c9b' stroke-width='6' fill='none' stroke-linecap='round'/>
    <path d='M170 260 Q220 310 270 260' fill='#ffd6e8' stroke='none' opacity='0.9'/>
  </g>
  <text x='50%' y='95%' font-family='Helvetica, Arial, sans-serif' font-size='24' text-anchor='middle' fill='#6b2a57'>You just made my day!</text>
</svg>"#;

pub(crate) fn fallback_data_url() -> String {
    let encoded = js_sys::encode_uri_component(FALLBACK_CAT_SVG);
    format!("data:image/svg+xml;utf8,{}", String::from(encoded))
}

#[derive(Properties, PartialEq)]
pub(crate) struct OverlayProps {
    pub open: bool,
    pub hearts: Vec<HeartSpec>,
    pub image_src: String,
    pub img_ref: NodeRef,
    pub on_close: Callback<MouseEvent>,
    pub on_image_error: Callback<Event>,
}

#[function_component(CelebrationOverlay)]
pub(crate) fn celebration_overlay(props: &OverlayProps) -> Html {
    let class = if props.open {
        "overlay"
    } else {
        "overlay hidden"
    };
    html! {
        <div class={class} onclick={props.on_close.clone()}>
            <div class="overlay-card">
                <img
                    ref={props.img_ref.clone()}
                    class="cat"
                    src={props.image_src.clone()}
                    alt="a very happy cat"
                    onerror={props.on_image_error.clone()}
                />
                <p class="note">{ "Yes! Best. Answer. Ever. 💖" }</p>
            </div>
            <div class="hearts">
                { for props.hearts.iter().map(heart_view) }
            </div>
        </div>
    }
}

fn heart_view(spec: &HeartSpec) -> Html {
    let style = format!(
        "width:{:.0}px;height:{:.0}px;left:{:.1}%;top:{:.1}%;opacity:{:.2};--rot-start:{:.0}deg;--rot-end:{:.0}deg;animation-duration:{:.0}ms;",
        spec.size,
        spec.size,
        spec.left_pct,
        spec.top_pct,
        spec.opacity,
        spec.start_rot_deg,
        spec.end_rot_deg,
        spec.duration_ms,
    );
    html! {
        <div class="heart-particle" style={style}></div>
    }
}
