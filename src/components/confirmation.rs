use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct ConfirmationProps {
    /// The email the store accepted, shown back to the user.
    pub email: String,
}

/// Terminal view after a successful registration. There is no way back to
/// the form from here; a new registration means a fresh page load.
#[function_component(Confirmation)]
pub fn confirmation(props: &ConfirmationProps) -> Html {
    html! {
        <div class="confirmation-screen">
            <style>
                {r#".confirmation-screen {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: linear-gradient(135deg, #0a0f1a, #101b33 50%, #0a0f1a);
                }
                .confirmation-card {
                    width: 100%;
                    max-width: 640px;
                    background: rgba(250, 252, 255, 0.97);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 24px;
                    box-shadow: 0 24px 60px rgba(0, 0, 0, 0.5);
                    padding: 3rem 2.5rem;
                    text-align: center;
                }
                .confirmation-check {
                    width: 88px;
                    height: 88px;
                    margin: 0 auto 1.5rem;
                    border-radius: 50%;
                    background: rgba(34, 197, 94, 0.12);
                    color: #22c55e;
                    font-size: 2.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .confirmation-card h2 {
                    font-size: 2.25rem;
                    color: #111827;
                    margin: 0 0 1rem;
                }
                .confirmation-card > p {
                    color: #4b5563;
                    font-size: 1.1rem;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }
                .community-box {
                    background: linear-gradient(135deg, rgba(34, 197, 94, 0.08), rgba(16, 185, 129, 0.08));
                    border: 2px solid rgba(34, 197, 94, 0.25);
                    border-radius: 16px;
                    padding: 2rem;
                    margin-bottom: 2rem;
                }
                .community-box p {
                    color: #1f2937;
                    font-weight: 600;
                    font-size: 1.05rem;
                    margin: 0 0 1.25rem;
                }
                .community-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.6rem;
                    background: linear-gradient(90deg, #16a34a, #10b981);
                    color: #fff;
                    font-weight: 700;
                    text-decoration: none;
                    padding: 0.9rem 1.75rem;
                    border-radius: 12px;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }
                .community-link:hover {
                    transform: scale(1.04);
                    box-shadow: 0 8px 24px rgba(22, 163, 74, 0.35);
                }
                .registered-as {
                    color: #6b7280;
                    font-size: 0.9rem;
                }
                .registered-as span {
                    color: #374151;
                    font-weight: 600;
                }
                .inbox-note {
                    color: #9ca3af;
                    font-size: 0.8rem;
                    margin-top: 1rem;
                }"#}
            </style>
            <div class="confirmation-card">
                <div class="confirmation-check">{"\u{2713}"}</div>
                <h2>{"You're In! 🎉"}</h2>
                <p>
                    {"Welcome to an elite community of builders. We'll send the webinar \
                      link 24 hours before the session."}
                </p>
                <div class="community-box">
                    <p>{"Join our WhatsApp community for exclusive insights:"}</p>
                    <a
                        class="community-link"
                        href={config::get_whatsapp_group_url()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"Join WhatsApp Community →"}
                    </a>
                </div>
                <p class="registered-as">
                    {"Registered as: "}<span>{ &props.email }</span>
                </p>
                <p class="inbox-note">{"Check your inbox for confirmation email"}</p>
            </div>
        </div>
    }
}
