use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::about_host::AboutHost;
use crate::components::confirmation::Confirmation;
use crate::components::gradient_button::GradientButton;
use crate::components::modal::Modal;
use crate::components::register_form::RegisterForm;
use crate::components::testimonials::Testimonials;

const KEY_POINTS: &[(&str, &str)] = &[
    ("🚀", "Idea → Production with AI"),
    ("⚡", "Real automation workflows"),
    ("▶", "Vibe coding + Agentic AI"),
    ("🏆", "Ship systems, not demos"),
];

const DISCOVER_ITEMS: &[(&str, &str)] = &[
    (
        "End-to-End System Thinking",
        "Design complete systems from idea to production, not isolated features that never ship",
    ),
    (
        "Vibe Coding Mastery",
        "Collaborate with AI effectively without falling into the copy-paste dependency trap",
    ),
    (
        "Agentic AI Workflows",
        "When and how to use autonomous AI agents in your automation pipelines",
    ),
    (
        "Production-Grade Automation",
        "Real workflows that ship products, not toy demos or tutorial projects",
    ),
    (
        "Platform Essentials",
        "Auth, logging, error handling, evaluation - the unglamorous stuff that matters",
    ),
    (
        "Career Positioning",
        "How to position yourself as a builder who ships, not just someone who knows tools",
    ),
];

const FOR_YOU_ITEMS: &[&str] = &[
    "You want to build with AI, not just play with demos",
    "You're curious about automation and vibe coding",
    "You want to understand agentic AI practically",
    "You're tired of tutorials that don't ship real products",
    "You want to position yourself as a builder who delivers",
    "You're open to learning from real-world examples",
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let mobile_menu_open = use_state(|| false);
    let modal_open = use_state(|| false);
    let registered_email = use_state(|| None::<String>);
    let is_scrolled = use_state(|| false);

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

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().expect("no window");
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 60.0);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .expect("failed to attach scroll listener");

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let open_modal = {
        let modal_open = modal_open.clone();
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            modal_open.set(true);
            mobile_menu_open.set(false);
        })
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(false))
    };

    let toggle_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            mobile_menu_open.set(!*mobile_menu_open);
        })
    };

    let close_menu = {
        let mobile_menu_open = mobile_menu_open.clone();
        Callback::from(move |_: MouseEvent| mobile_menu_open.set(false))
    };

    let on_registered = {
        let registered_email = registered_email.clone();
        let modal_open = modal_open.clone();
        Callback::from(move |email: String| {
            registered_email.set(Some(email));
            modal_open.set(false);
        })
    };

    // Terminal state for the session: swap the whole page for the
    // confirmation view, form included.
    if let Some(email) = (*registered_email).as_ref() {
        return html! { <Confirmation email={email.clone()} /> };
    }

    let nav_class = if *is_scrolled {
        "landing-nav scrolled"
    } else {
        "landing-nav"
    };

    html! {
        <div class="landing-page">
            <style>
                {r#".landing-page {
                    position: relative;
                    min-height: 100vh;
                    background: linear-gradient(135deg, #0a0f1a, #101b33 50%, #0a0f1a);
                    color: #ffffff;
                    font-family: system-ui, -apple-system, sans-serif;
                    overflow-x: hidden;
                }

                /* Navigation */
                .landing-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: rgba(15, 23, 42, 0.5);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    transition: background 0.3s ease;
                }
                .landing-nav.scrolled {
                    background: rgba(15, 23, 42, 0.92);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 80px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-brand .brand-name {
                    display: block;
                    color: #fff;
                    font-weight: 700;
                    font-size: 1.25rem;
                }
                .nav-brand .brand-tagline {
                    color: #7EB2FF;
                    font-size: 0.75rem;
                    font-weight: 500;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-links a {
                    color: #cbd5e1;
                    text-decoration: none;
                    font-weight: 500;
                    transition: color 0.2s ease;
                }
                .nav-links a:hover {
                    color: #fff;
                }
                .nav-register {
                    background: linear-gradient(90deg, #1E90FF, #4DA6FF);
                    color: #fff;
                    font-weight: 600;
                    border: none;
                    border-radius: 12px;
                    padding: 0.75rem 1.5rem;
                    cursor: pointer;
                    box-shadow: 0 4px 16px rgba(30, 144, 255, 0.4);
                    transition: box-shadow 0.2s ease;
                }
                .nav-register:hover {
                    box-shadow: 0 6px 24px rgba(30, 144, 255, 0.55);
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.75rem;
                    cursor: pointer;
                }
                .mobile-menu {
                    display: none;
                }

                /* Hero */
                .hero {
                    position: relative;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem 4rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }
                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.6rem;
                    background: rgba(30, 144, 255, 0.1);
                    border: 1px solid rgba(30, 144, 255, 0.3);
                    border-radius: 999px;
                    padding: 0.6rem 1.25rem;
                    font-size: 0.9rem;
                    color: #7EB2FF;
                    font-weight: 500;
                    backdrop-filter: blur(4px);
                }
                .hero-badge .badge-pill {
                    background: rgba(30, 144, 255, 0.2);
                    border-radius: 999px;
                    padding: 0.15rem 0.6rem;
                    font-size: 0.75rem;
                }
                .hero h1 {
                    max-width: 900px;
                    font-size: 4rem;
                    line-height: 1.1;
                    letter-spacing: -0.02em;
                    margin: 2rem 0 0;
                }
                .hero h1 .headline-top {
                    background: linear-gradient(90deg, #fff, #dbeafe, #fff);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero h1 .headline-accent {
                    display: block;
                    margin-top: 0.75rem;
                    background: linear-gradient(90deg, #1E90FF, #22d3ee, #4DA6FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    max-width: 640px;
                    margin: 2rem 0 2.5rem;
                    font-size: 1.35rem;
                    color: #cbd5e1;
                    line-height: 1.6;
                }
                .key-points {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                    width: 100%;
                    margin-top: 3rem;
                }
                .key-point {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 16px;
                    padding: 1rem;
                    backdrop-filter: blur(4px);
                    transition: border-color 0.2s ease;
                }
                .key-point:hover {
                    border-color: rgba(255, 255, 255, 0.2);
                }
                .key-point .point-icon {
                    color: #7EB2FF;
                }
                .key-point .point-text {
                    color: #e2e8f0;
                    font-size: 0.9rem;
                    font-weight: 500;
                }
                .hero-stats {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 3rem;
                    width: 100%;
                    max-width: 720px;
                    margin-top: 3.5rem;
                    padding-top: 3rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .hero-stat-value {
                    font-size: 2.5rem;
                    font-weight: 700;
                    background: linear-gradient(90deg, #1E90FF, #22d3ee);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-stat-label {
                    margin-top: 0.25rem;
                    color: #94a3b8;
                    font-size: 0.9rem;
                    font-weight: 500;
                }

                /* Discover section */
                .discover {
                    position: relative;
                    background: rgba(15, 23, 42, 0.5);
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 6rem 1.5rem;
                }
                .discover-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-heading .section-eyebrow {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: rgba(30, 144, 255, 0.1);
                    border: 1px solid rgba(30, 144, 255, 0.3);
                    border-radius: 999px;
                    padding: 0.5rem 1.25rem;
                    color: #7EB2FF;
                    font-size: 0.85rem;
                    font-weight: 500;
                    margin-bottom: 1.5rem;
                }
                .section-heading h2 {
                    font-size: 2.75rem;
                    color: #fff;
                    margin: 0 0 1rem;
                }
                .section-heading p {
                    color: #94a3b8;
                    font-size: 1.2rem;
                    max-width: 640px;
                    margin: 0 auto;
                }
                .discover-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .discover-card {
                    background: rgba(30, 41, 59, 0.5);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 20px;
                    padding: 2rem;
                    backdrop-filter: blur(4px);
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }
                .discover-card:hover {
                    transform: translateY(-5px);
                    border-color: rgba(255, 255, 255, 0.3);
                }
                .discover-card h3 {
                    color: #fff;
                    font-size: 1.25rem;
                    margin: 0 0 0.75rem;
                }
                .discover-card p {
                    color: #94a3b8;
                    line-height: 1.6;
                    margin: 0;
                }

                /* Who this is for */
                .for-you {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                }
                .for-you-item {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    background: rgba(30, 41, 59, 0.3);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 16px;
                    padding: 1.25rem 1.5rem;
                    margin-bottom: 1rem;
                    backdrop-filter: blur(4px);
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }
                .for-you-item:hover {
                    transform: translateX(8px);
                    border-color: rgba(30, 144, 255, 0.5);
                }
                .for-you-item .item-check {
                    color: #4ade80;
                    font-size: 1.25rem;
                    flex-shrink: 0;
                }
                .for-you-item .item-text {
                    color: #e2e8f0;
                    font-size: 1.1rem;
                    font-weight: 500;
                }
                .for-you-cta {
                    text-align: center;
                    margin-top: 4rem;
                }
                .cta-note {
                    color: #94a3b8;
                    font-size: 0.9rem;
                    margin-top: 1rem;
                }

                /* Footer */
                .landing-footer {
                    background: rgba(15, 23, 42, 0.5);
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 3rem 1.5rem;
                    text-align: center;
                }
                .landing-footer .footer-brand {
                    color: #fff;
                    font-weight: 700;
                    font-size: 1.25rem;
                    margin-bottom: 1rem;
                }
                .landing-footer p {
                    color: #94a3b8;
                    margin: 0.5rem auto;
                    max-width: 640px;
                }
                .landing-footer .footer-copyright {
                    color: #475569;
                    font-size: 0.85rem;
                    padding-top: 1.5rem;
                }

                @media (max-width: 900px) {
                    .nav-links {
                        display: none;
                    }
                    .burger-menu {
                        display: block;
                    }
                    .mobile-menu {
                        display: block;
                        background: rgba(15, 23, 42, 0.95);
                        backdrop-filter: blur(12px);
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        padding: 1.5rem;
                    }
                    .mobile-menu a {
                        display: block;
                        color: #cbd5e1;
                        text-decoration: none;
                        font-weight: 500;
                        padding: 0.75rem 0;
                    }
                    .mobile-menu .nav-register {
                        width: 100%;
                        margin-top: 1rem;
                    }
                    .hero h1 {
                        font-size: 2.5rem;
                    }
                    .hero-subtitle {
                        font-size: 1.1rem;
                    }
                    .key-points {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .hero-stats {
                        gap: 1.5rem;
                    }
                    .hero-stat-value {
                        font-size: 1.75rem;
                    }
                    .discover-grid {
                        grid-template-columns: 1fr;
                    }
                    .section-heading h2 {
                        font-size: 2rem;
                    }
                }"#}
            </style>

            <nav class={nav_class}>
                <div class="nav-content">
                    <div class="nav-brand">
                        <span class="brand-name">{"Mudassar Hakim"}</span>
                        <span class="brand-tagline">{"Leadership & AI Coaching"}</span>
                    </div>
                    <div class="nav-links">
                        <a href="#about">{"About"}</a>
                        <a href="#details">{"Details"}</a>
                        <a href="#testimonials">{"Reviews"}</a>
                        <button class="nav-register" onclick={open_modal.clone()}>
                            {"Register Free"}
                        </button>
                    </div>
                    <button class="burger-menu" onclick={toggle_menu}>
                        { if *mobile_menu_open { "\u{2715}" } else { "\u{2630}" } }
                    </button>
                </div>
                {
                    if *mobile_menu_open {
                        html! {
                            <div class="mobile-menu">
                                <a href="#about" onclick={close_menu.clone()}>{"About"}</a>
                                <a href="#details" onclick={close_menu.clone()}>{"Details"}</a>
                                <a href="#testimonials" onclick={close_menu}>{"Reviews"}</a>
                                <button class="nav-register" onclick={open_modal.clone()}>
                                    {"Register Free"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </nav>

            <header class="hero">
                <div class="hero-badge">
                    {"⚡ Free Live Workshop"}
                    <span class="badge-pill">{"Limited Seats"}</span>
                </div>
                <h1>
                    <span class="headline-top">{"AI Won't Replace You."}</span>
                    <span class="headline-accent">{"But Builders Who Ship Will."}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Discover how experienced engineers use AI + Automation to build \
                      end-to-end systems that actually ship to production."}
                </p>
                <GradientButton onclick={open_modal.clone()}>
                    {"Reserve My Free Seat →"}
                </GradientButton>
                <div class="key-points">
                    {
                        KEY_POINTS.iter().map(|(icon, text)| html! {
                            <div class="key-point" key={*text}>
                                <span class="point-icon">{*icon}</span>
                                <span class="point-text">{*text}</span>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="hero-stats">
                    <div>
                        <div class="hero-stat-value">{"60min"}</div>
                        <div class="hero-stat-label">{"Live Session"}</div>
                    </div>
                    <div>
                        <div class="hero-stat-value">{"Free"}</div>
                        <div class="hero-stat-label">{"No Cost"}</div>
                    </div>
                    <div>
                        <div class="hero-stat-value">{"Live"}</div>
                        <div class="hero-stat-label">{"Interactive"}</div>
                    </div>
                </div>
            </header>

            <section class="discover" id="details">
                <div class="discover-inner">
                    <div class="section-heading">
                        <span class="section-eyebrow">{"✨ 60-Minute Intensive"}</span>
                        <h2>{"What You'll Discover"}</h2>
                        <p>{"Practical insights from building and shipping real AI systems"}</p>
                    </div>
                    <div class="discover-grid">
                        {
                            DISCOVER_ITEMS.iter().map(|(title, description)| html! {
                                <div class="discover-card" key={*title}>
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <Testimonials />

            <section class="for-you">
                <div class="section-heading">
                    <h2>{"This Workshop Is For You If..."}</h2>
                    <p>{"We're looking for builders who want to level up"}</p>
                </div>
                {
                    FOR_YOU_ITEMS.iter().map(|item| html! {
                        <div class="for-you-item" key={*item}>
                            <span class="item-check">{"✓"}</span>
                            <span class="item-text">{*item}</span>
                        </div>
                    }).collect::<Html>()
                }
                <div class="for-you-cta">
                    <GradientButton onclick={open_modal.clone()}>
                        {"Claim Your Free Seat →"}
                    </GradientButton>
                    <p class="cta-note">{"Limited seats • No credit card required"}</p>
                </div>
            </section>

            <AboutHost />

            <footer class="landing-footer">
                <div class="footer-brand">{"✨ Mudassar Hakim"}</div>
                <p>{"Leadership, Coaching and Mentoring"}</p>
                <p>
                    {"Empowering experienced engineers and managers to build, ship, and \
                      lead with AI"}
                </p>
                <p class="footer-copyright">{"© 2026 All rights reserved"}</p>
            </footer>

            {
                if *modal_open {
                    html! {
                        <Modal on_close={close_modal}>
                            <RegisterForm on_registered={on_registered} />
                        </Modal>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
