use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Transition {
    #[default]
    Fade,
    SlideUp,
    ZoomIn,
}

impl Transition {
    fn class(self) -> &'static str {
        match self {
            Transition::Fade => "reveal-fade",
            Transition::SlideUp => "reveal-slide-up",
            Transition::ZoomIn => "reveal-zoom-in",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub transition: Transition,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// True once an element whose top edge sits at `top` (relative to the
/// viewport) has scrolled far enough up to be shown.
pub fn crosses_threshold(top: f64, viewport_height: f64) -> bool {
    top < viewport_height * REVEAL_THRESHOLD
}

fn in_view(window: &Window, element: &Element) -> bool {
    let viewport_height = match window.inner_height().ok().and_then(|h| h.as_f64()) {
        Some(height) => height,
        None => return false,
    };
    crosses_threshold(element.get_bounding_client_rect().top(), viewport_height)
}

/// Hides its children until they scroll into view, then plays the
/// transition once.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        let deps = *visible;
        use_effect_with_deps(
            move |already_visible: &bool| {
                let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) if !*already_visible => {
                        let check = {
                            let node = node.clone();
                            let visible = visible.clone();
                            move || {
                                if let (Some(window), Some(element)) =
                                    (web_sys::window(), node.cast::<Element>())
                                {
                                    if in_view(&window, &element) {
                                        visible.set(true);
                                    }
                                }
                            }
                        };
                        // Sections that start inside the viewport reveal right away
                        check();

                        let callback = Closure::<dyn Fn()>::new(check);
                        let _ = window.add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                        Box::new(move || {
                            let _ = window.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        })
                    }
                    _ => Box::new(|| ()),
                };
                move || destructor()
            },
            deps,
        );
    }

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.transition.class(), (*visible).then(|| "visible"), props.class.clone())}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}
