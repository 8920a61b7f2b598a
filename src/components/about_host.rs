use yew::prelude::*;

const STATS: &[(&str, &str)] = &[
    ("Experience", "18+ Years"),
    ("Current Role", "SDM III @ Amazon"),
    ("Mentorship", "Top Rated Mentor"),
    ("Expertise", "System Design"),
];

#[function_component(AboutHost)]
pub fn about_host() -> Html {
    html! {
        <section class="about-host" id="about">
            <style>
                {r#".about-host {
                    position: relative;
                    padding: 6rem 2rem;
                    overflow: hidden;
                }
                .about-host-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .host-portrait {
                    position: relative;
                    aspect-ratio: 4 / 5;
                    border-radius: 24px;
                    background: linear-gradient(135deg, #11254a, #0a0f1a);
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    overflow: hidden;
                }
                .host-portrait::after {
                    content: '';
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(10, 15, 26, 0.8), transparent 50%);
                }
                .portrait-badge {
                    position: absolute;
                    bottom: 1.5rem;
                    left: 1.5rem;
                    z-index: 1;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(8px);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 12px;
                    padding: 0.5rem 1rem;
                    color: #fff;
                    font-size: 0.85rem;
                    font-weight: 500;
                }
                .host-eyebrow {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: rgba(30, 144, 255, 0.1);
                    border: 1px solid rgba(30, 144, 255, 0.25);
                    color: #7EB2FF;
                    font-size: 0.85rem;
                    font-weight: 500;
                    border-radius: 999px;
                    padding: 0.35rem 0.9rem;
                    margin-bottom: 1.5rem;
                }
                .host-eyebrow::before {
                    content: '';
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #1E90FF;
                }
                .about-host h2 {
                    font-size: 2.75rem;
                    color: #fff;
                    margin: 0 0 0.5rem;
                }
                .host-title {
                    color: #7EB2FF;
                    font-size: 1.2rem;
                    font-weight: 500;
                    margin-bottom: 1.5rem;
                }
                .host-bio p {
                    color: #94a3b8;
                    font-size: 1.05rem;
                    line-height: 1.7;
                    margin: 0 0 1rem;
                }
                .host-stats {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                    margin-top: 2rem;
                }
                .host-stat {
                    background: rgba(30, 41, 59, 0.5);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    border-radius: 16px;
                    padding: 1.25rem;
                    transition: background 0.3s ease;
                }
                .host-stat:hover {
                    background: rgba(30, 41, 59, 0.8);
                }
                .host-stat-value {
                    color: #fff;
                    font-size: 1.4rem;
                    font-weight: 700;
                    margin-bottom: 0.25rem;
                }
                .host-stat-label {
                    color: #94a3b8;
                    font-size: 0.85rem;
                }
                @media (max-width: 900px) {
                    .about-host {
                        padding: 4rem 1rem;
                    }
                    .about-host-inner {
                        grid-template-columns: 1fr;
                        gap: 2.5rem;
                    }
                    .about-host h2 {
                        font-size: 2rem;
                    }
                }"#}
            </style>
            <div class="about-host-inner">
                <div class="host-portrait">
                    <div class="portrait-badge">{"Ex-Delhivery & Western Union"}</div>
                </div>
                <div>
                    <span class="host-eyebrow">{"About the Trainer"}</span>
                    <h2>{"Mudassar Hakim"}</h2>
                    <p class="host-title">{"Software Development Manager III at Amazon"}</p>
                    <div class="host-bio">
                        <p>
                            {"With over 18 years of experience in the tech industry, I've led \
                              engineering teams at global giants like Amazon, Delhivery, and \
                              Western Union."}
                        </p>
                        <p>
                            {"My passion lies in empowering developers and engineering leaders \
                              to unlock their full potential. I specialize in System Design and \
                              Leadership, helping professionals navigate the complexities of \
                              modern software engineering."}
                        </p>
                    </div>
                    <div class="host-stats">
                        {
                            STATS.iter().map(|(label, value)| html! {
                                <div class="host-stat" key={*label}>
                                    <div class="host-stat-value">{*value}</div>
                                    <div class="host-stat-label">{*label}</div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}
