use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::reveal::{Reveal, Transition};
use crate::config;

pub const STATS: [(&str, &str); 3] = [
    ("1200", "Happy Members"),
    ("50", "Machines & Stations"),
    ("365", "Open Days a Year"),
];

pub const TESTIMONIALS: [&str; 3] = [
    "Crunch changed my life. I hit PRs I never thought were possible.",
    "The vibe here is insane. You feel the energy the moment you walk in.",
    "Clean, focused, intense. It’s my favorite place to be after work.",
];

const STARS_PER_REVIEW: usize = 5;

const HERO_IMAGE: &str = "hero.svg";
const INTERIOR_IMAGE: &str = "interior.svg";

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub review: AttrValue,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    html! {
        <div class="card testimonial-card">
            <div class="stars">
                { for (0..STARS_PER_REVIEW).map(|_| html! { <span class="star">{"★"}</span> }) }
            </div>
            <p class="review">{format!("\"{}\"", props.review)}</p>
        </div>
    }
}

#[function_component(PricingCard)]
pub fn pricing_card() -> Html {
    html! {
        <div class="card pricing-card">
            <h3>{"Monthly Access"}</h3>
            <p>{"Just $69.99/month"}</p>
            <button class="button button-solid button-wide">{"Join Now"}</button>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let page_style = format!("background-image: url('{}');", config::asset_url(INTERIOR_IMAGE));

    html! {
        <div class="landing-page" style={page_style}>
            <style>{LANDING_CSS}</style>

            <header class="site-header">
                <div class="logo slide-in-left">
                    <span class="flame">{"🔥"}</span>
                    <h1>{"CRUNCH ⚡"}</h1>
                </div>
                <button class="button button-outline">{"Sign In"}</button>
            </header>

            <div class="hero zoom-in-on-load">
                <div class="hero-overlay">
                    <h2>{"Unleash Your Inner Beast"}</h2>
                    <p>
                        {"From powerlifting to pulse-pounding cardio, Crunch Gym is where goals become reality."}
                    </p>
                    <button class="button button-solid">{"Become a Member"}</button>
                </div>
                <img src={config::asset_url(HERO_IMAGE)} alt="Crunch Gym" class="hero-image" />
            </div>

            <Reveal transition={Transition::SlideUp} delay_ms={300} class="what-we-do">
                <h2>{"What We Do"}</h2>
                <p>
                    {"We're not just a gym — we're a movement. Whether you're lifting heavy, chasing endurance, or sculpting your dream physique, Crunch Gym is your iron playground. With elite machines, expert trainers, and a community that pushes hard — every rep counts."}
                </p>
            </Reveal>

            <Reveal transition={Transition::Fade} class="stats">
                { for STATS.iter().map(|(target, label)| html! {
                    <AnimatedCounter key={*label} target={*target} label={*label} />
                }) }
            </Reveal>

            <Reveal transition={Transition::SlideUp} delay_ms={400} class="membership">
                <h2>{"Membership"}</h2>
                <PricingCard />
            </Reveal>

            <Reveal transition={Transition::SlideUp} delay_ms={500} class="testimonials">
                <h2>{"Our Members Love Us"}</h2>
                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(index, review)| html! {
                        <TestimonialCard key={index} review={*review} />
                    }) }
                </div>
            </Reveal>

            <Reveal transition={Transition::ZoomIn} delay_ms={300} class="interior">
                <img src={config::asset_url(INTERIOR_IMAGE)} alt="Gym Interior" />
            </Reveal>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    body {
        margin: 0;
        background: #000;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .landing-page {
        min-height: 100vh;
        padding: 1.5rem;
        color: #fff;
        background-size: cover;
        background-position: center;
        animation: fadeIn 1s ease-out;
    }
    .landing-page > * + * {
        margin-top: 4rem;
    }
    h2 {
        font-size: 2.25rem;
        font-weight: 700;
        color: #facc15;
    }
    .site-header {
        display: flex;
        align-items: center;
        justify-content: space-between;
        max-width: 72rem;
        margin: 0 auto;
        padding-bottom: 1.5rem;
        border-bottom: 1px solid #facc15;
    }
    .logo {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }
    .logo .flame {
        font-size: 2.5rem;
        animation: pulse 2s ease-in-out infinite;
    }
    .logo h1 {
        font-size: 2.25rem;
        font-weight: 800;
        letter-spacing: 0.1em;
        color: #fde047;
        animation: bounce 1s infinite;
    }
    .button {
        padding: 0.6rem 1.4rem;
        border-radius: 0.5rem;
        font-weight: 700;
        cursor: pointer;
    }
    .button-outline {
        background: transparent;
        color: #fde047;
        border: 1px solid #facc15;
    }
    .button-solid {
        background: #facc15;
        color: #000;
        border: none;
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.3);
    }
    .button-solid:hover {
        background: #eab308;
    }
    .button-wide {
        width: 100%;
    }
    .hero {
        position: relative;
        max-width: 72rem;
        margin-left: auto;
        margin-right: auto;
        border-radius: 1rem;
        overflow: hidden;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
    }
    .hero-overlay {
        position: absolute;
        inset: 0;
        display: flex;
        flex-direction: column;
        align-items: flex-start;
        justify-content: center;
        padding: 2.5rem;
        background: rgba(0, 0, 0, 0.7);
    }
    .hero-overlay h2 {
        font-size: 3.75rem;
        font-weight: 800;
        line-height: 1.1;
        margin: 0 0 1rem;
        color: #fde047;
    }
    .hero-overlay p {
        font-size: 1.25rem;
        max-width: 36rem;
    }
    .hero-image {
        display: block;
        width: 100%;
        height: 24rem;
        object-fit: cover;
        opacity: 0.4;
    }
    .what-we-do, .membership, .testimonials {
        text-align: center;
        max-width: 56rem;
        margin-left: auto;
        margin-right: auto;
    }
    .what-we-do p {
        font-size: 1.125rem;
    }
    .stats {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
        max-width: 56rem;
        margin-left: auto;
        margin-right: auto;
        padding: 2.5rem 0;
        text-align: center;
        border-top: 1px solid #facc15;
        border-bottom: 1px solid #facc15;
    }
    .stat-value {
        font-size: 2.25rem;
        font-weight: 800;
        color: #facc15;
        text-shadow: 0 4px 8px rgba(0, 0, 0, 0.6);
    }
    .stat-label {
        font-size: 0.875rem;
        margin-top: 0.25rem;
    }
    .card {
        border: 1px solid #facc15;
        border-radius: 0.75rem;
    }
    .pricing-card {
        max-width: 28rem;
        margin: 0 auto;
        padding: 1.5rem;
        background: rgba(0, 0, 0, 0.7);
    }
    .pricing-card h3 {
        font-size: 1.5rem;
        color: #fde047;
    }
    .testimonial-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
        max-width: 64rem;
        margin: 0 auto;
    }
    .testimonial-card {
        padding: 1rem;
        background: rgba(0, 0, 0, 0.6);
    }
    .stars {
        display: flex;
        justify-content: center;
        color: #fde047;
    }
    .review {
        font-size: 0.875rem;
        font-style: italic;
    }
    .interior {
        max-width: 72rem;
        margin-left: auto;
        margin-right: auto;
        border-radius: 1rem;
        overflow: hidden;
    }
    .interior img {
        display: block;
        width: 100%;
        height: 24rem;
        object-fit: cover;
    }
    .reveal {
        opacity: 0;
        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
    }
    .reveal-slide-up {
        transform: translateY(30px);
    }
    .reveal-zoom-in {
        transform: scale(0.9);
    }
    .reveal.visible {
        opacity: 1;
        transform: none;
    }
    .slide-in-left {
        animation: slideInLeft 0.6s ease-out 0.2s both;
    }
    .zoom-in-on-load {
        animation: zoomIn 0.6s ease-out 0.4s both;
    }
    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes slideInLeft {
        from { transform: translateX(-50px); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
    @keyframes zoomIn {
        from { transform: scale(0.95); opacity: 0; }
        to { transform: scale(1); opacity: 1; }
    }
    @keyframes pulse {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.5; }
    }
    @keyframes bounce {
        0%, 100% { transform: translateY(-10%); }
        50% { transform: translateY(0); }
    }
    @media (max-width: 640px) {
        .stats, .testimonial-grid {
            grid-template-columns: 1fr;
        }
    }
"#;
