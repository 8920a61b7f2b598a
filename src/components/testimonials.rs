use gloo_timers::callback::Timeout;
use yew::prelude::*;

struct Entry {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
    company: &'static str,
}

const TESTIMONIALS: &[Entry] = &[
    Entry {
        quote: "Transformed how I approach AI automation. The vibe coding section alone was worth it.",
        author: "Priya Sharma",
        role: "Senior Engineer",
        company: "Tech Unicorn",
    },
    Entry {
        quote: "Finally understood how to ship AI systems to production, not just build demos.",
        author: "Rahul Verma",
        role: "Engineering Manager",
        company: "Series B Startup",
    },
    Entry {
        quote: "This is exactly what experienced engineers need. Practical, no-fluff, real systems.",
        author: "Anjali Reddy",
        role: "Staff Engineer",
        company: "FAANG",
    },
];

/// Quote carousel. Advances on its own every six seconds; the timer is
/// rescheduled whenever the index changes, so picking a quote by hand also
/// restarts the countdown.
#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let active = use_state(|| 0_usize);

    {
        let current_active = *active;
        let active = active.clone();
        use_effect_with_deps(
            move |current: &usize| {
                let next = (*current + 1) % TESTIMONIALS.len();
                let timer = Timeout::new(6_000, move || active.set(next));
                move || drop(timer)
            },
            current_active,
        );
    }

    let go_prev = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| {
            active.set((*active + TESTIMONIALS.len() - 1) % TESTIMONIALS.len());
        })
    };

    let go_next = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| {
            active.set((*active + 1) % TESTIMONIALS.len());
        })
    };

    let current = &TESTIMONIALS[*active];

    html! {
        <section class="testimonials" id="testimonials">
            <style>
                {r#".testimonials {
                    position: relative;
                    padding: 6rem 2rem;
                    background: rgba(15, 23, 42, 0.5);
                    overflow: hidden;
                }
                .testimonials-inner {
                    position: relative;
                    max-width: 1000px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    gap: 3rem;
                }
                .testimonial-index {
                    position: absolute;
                    left: -4rem;
                    top: 50%;
                    transform: translateY(-50%);
                    font-size: 20rem;
                    font-weight: 700;
                    line-height: 1;
                    color: rgba(30, 144, 255, 0.05);
                    user-select: none;
                    pointer-events: none;
                }
                .testimonial-rail {
                    writing-mode: vertical-rl;
                    font-size: 0.75rem;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: #64748b;
                    border-right: 1px solid rgba(255, 255, 255, 0.1);
                    padding-right: 2rem;
                }
                .testimonial-quote {
                    flex: 1;
                }
                .testimonial-quote blockquote {
                    font-size: 1.75rem;
                    font-weight: 300;
                    color: #fff;
                    line-height: 1.5;
                    margin: 0 0 2.5rem;
                    transition: opacity 0.5s ease;
                }
                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .author-avatar {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #1E90FF, #7c3aed);
                    color: #fff;
                    font-weight: 700;
                    font-size: 1.1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .author-name {
                    color: #fff;
                    font-weight: 600;
                }
                .author-role {
                    color: #94a3b8;
                    font-size: 0.85rem;
                }
                .testimonial-nav {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                }
                .nav-arrow {
                    width: 44px;
                    height: 44px;
                    border-radius: 50%;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: none;
                    color: #fff;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: border-color 0.2s ease, background 0.2s ease;
                }
                .nav-arrow:hover {
                    border-color: rgba(255, 255, 255, 0.4);
                    background: rgba(255, 255, 255, 0.05);
                }
                .nav-dots {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .nav-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 999px;
                    border: none;
                    padding: 0;
                    background: rgba(255, 255, 255, 0.2);
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .nav-dot:hover {
                    background: rgba(255, 255, 255, 0.4);
                }
                .nav-dot-active {
                    background: #1E90FF;
                    height: 28px;
                }
                @media (max-width: 768px) {
                    .testimonials {
                        padding: 4rem 1rem;
                    }
                    .testimonials-inner {
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .testimonial-index, .testimonial-rail {
                        display: none;
                    }
                    .testimonial-quote blockquote {
                        font-size: 1.25rem;
                    }
                    .testimonial-nav {
                        flex-direction: row;
                    }
                    .nav-dots {
                        flex-direction: row;
                    }
                    .nav-dot-active {
                        height: 8px;
                        width: 28px;
                    }
                }"#}
            </style>
            <div class="testimonials-inner">
                <div class="testimonial-index">
                    { format!("{:02}", *active + 1) }
                </div>
                <div class="testimonial-rail">{"What Builders Say"}</div>
                <div class="testimonial-quote">
                    <blockquote>{ format!("\u{201c}{}\u{201d}", current.quote) }</blockquote>
                    <div class="testimonial-author">
                        <div class="author-avatar">
                            { current.author.chars().next().map(String::from).unwrap_or_default() }
                        </div>
                        <div>
                            <div class="author-name">{ current.author }</div>
                            <div class="author-role">
                                { format!("{} · {}", current.role, current.company) }
                            </div>
                        </div>
                    </div>
                </div>
                <div class="testimonial-nav">
                    <button class="nav-arrow" aria-label="Previous testimonial" onclick={go_prev}>
                        {"\u{2190}"}
                    </button>
                    <div class="nav-dots">
                        {
                            (0..TESTIMONIALS.len()).map(|idx| {
                                let active_handle = active.clone();
                                let class = if idx == *active {
                                    "nav-dot nav-dot-active"
                                } else {
                                    "nav-dot"
                                };
                                html! {
                                    <button
                                        key={idx}
                                        class={class}
                                        aria-label={format!("Go to testimonial {}", idx + 1)}
                                        onclick={Callback::from(move |_: MouseEvent| active_handle.set(idx))}
                                    />
                                }
                            }).collect::<Html>()
                        }
                    </div>
                    <button class="nav-arrow" aria-label="Next testimonial" onclick={go_next}>
                        {"\u{2192}"}
                    </button>
                </div>
            </div>
        </section>
    }
}
