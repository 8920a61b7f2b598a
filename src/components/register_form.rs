use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::registration::store;
use crate::registration::submit::submit;
use crate::registration::types::{Field, FieldErrors, RegistrationInput};
use crate::registration::validate::validate;

#[derive(Properties, PartialEq)]
pub struct RegisterFormProps {
    /// Fired once with the accepted email; the page switches to the
    /// confirmation view and never shows the form again.
    pub on_registered: Callback<String>,
}

#[function_component(RegisterForm)]
pub fn register_form(props: &RegisterFormProps) -> Html {
    let input = use_state(RegistrationInput::default);
    let field_errors = use_state(FieldErrors::default);
    let submit_error = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);

    let make_oninput = {
        let input = input.clone();
        let field_errors = field_errors.clone();
        move |field: Field| {
            let input = input.clone();
            let field_errors = field_errors.clone();
            Callback::from(move |e: InputEvent| {
                let value = e.target_unchecked_into::<HtmlInputElement>().value();
                let mut next = (*input).clone();
                match field {
                    Field::Name => next.name = value,
                    Field::Email => next.email = value,
                    Field::Phone => next.phone = value,
                }
                input.set(next);
                // Editing a field dismisses that field's message; the others
                // stay until the next submit re-validates everything.
                if field_errors.get(field).is_some() {
                    let mut next = (*field_errors).clone();
                    next.clear(field);
                    field_errors.set(next);
                }
            })
        }
    };

    let onsubmit = {
        let input = input.clone();
        let field_errors = field_errors.clone();
        let submit_error = submit_error.clone();
        let is_submitting = is_submitting.clone();
        let on_registered = props.on_registered.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let snapshot = (*input).clone();

            let pre_check = validate(&snapshot);
            if !pre_check.is_empty() {
                field_errors.set(pre_check);
                submit_error.set(None);
                return;
            }

            is_submitting.set(true);
            submit_error.set(None);

            let field_errors = field_errors.clone();
            let submit_error = submit_error.clone();
            let is_submitting = is_submitting.clone();
            let on_registered = on_registered.clone();
            spawn_local(async move {
                let outcome = submit(&snapshot, |record| async move {
                    store::insert_registration(&record).await
                })
                .await;

                if outcome.succeeded {
                    on_registered.emit(snapshot.normalized().email);
                } else {
                    field_errors.set(outcome.field_errors);
                    submit_error.set(outcome.submit_error);
                }
                is_submitting.set(false);
            });
        })
    };

    let field_row = |field: Field,
                     id: &'static str,
                     label: &'static str,
                     input_type: &'static str,
                     placeholder: &'static str,
                     value: String| {
        let error = field_errors.get(field).map(str::to_string);
        let input_class = if error.is_some() {
            "form-input form-input-invalid"
        } else {
            "form-input"
        };
        html! {
            <div class="form-row">
                <label for={id}>{label}</label>
                <input
                    type={input_type}
                    id={id}
                    class={input_class}
                    value={value}
                    placeholder={placeholder}
                    oninput={make_oninput(field)}
                />
                {
                    if let Some(message) = error {
                        html! { <p class="field-error">{message}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    };

    html! {
        <div class="register-form">
            <style>
                {r#".register-form .seats-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: rgba(34, 197, 94, 0.12);
                    color: #15803d;
                    font-size: 0.85rem;
                    font-weight: 600;
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    margin-bottom: 1rem;
                }
                .register-form h2 {
                    font-size: 2rem;
                    color: #111827;
                    margin: 0 0 0.5rem;
                }
                .register-form .form-intro {
                    color: #4b5563;
                    margin: 0 0 1.75rem;
                }
                .form-row {
                    margin-bottom: 1.25rem;
                }
                .form-row label {
                    display: block;
                    font-size: 0.9rem;
                    font-weight: 700;
                    color: #1f2937;
                    margin-bottom: 0.5rem;
                }
                .form-input {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.9rem 1rem;
                    font-size: 1rem;
                    color: #111827;
                    background: #fff;
                    border: 2px solid #e5e7eb;
                    border-radius: 12px;
                    outline: none;
                    transition: border-color 0.2s ease, box-shadow 0.2s ease;
                }
                .form-input:hover {
                    border-color: #d1d5db;
                }
                .form-input:focus {
                    border-color: #1E90FF;
                    box-shadow: 0 0 0 3px rgba(30, 144, 255, 0.15);
                }
                .form-input-invalid {
                    border-color: #ef4444;
                }
                .field-error {
                    color: #ef4444;
                    font-size: 0.85rem;
                    font-weight: 500;
                    margin: 0.5rem 0 0;
                }
                .submit-error {
                    background: #fef2f2;
                    border: 2px solid #fecaca;
                    border-radius: 12px;
                    padding: 0.9rem 1rem;
                    margin-bottom: 1.25rem;
                }
                .submit-error p {
                    color: #dc2626;
                    font-size: 0.9rem;
                    font-weight: 500;
                    margin: 0;
                }
                .form-submit {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    background: linear-gradient(90deg, #1E90FF, #4DA6FF);
                    color: #fff;
                    font-size: 1.1rem;
                    font-weight: 700;
                    border: none;
                    border-radius: 12px;
                    padding: 1.1rem;
                    cursor: pointer;
                    box-shadow: 0 4px 24px rgba(30, 144, 255, 0.4);
                    transition: transform 0.2s ease;
                }
                .form-submit:hover:enabled {
                    transform: scale(1.02);
                }
                .form-submit:disabled {
                    background: #93c5fd;
                    cursor: default;
                    box-shadow: none;
                }
                .form-spinner {
                    display: inline-block;
                    width: 18px;
                    height: 18px;
                    border: 2px solid rgba(255, 255, 255, 0.4);
                    border-top-color: #fff;
                    border-radius: 50%;
                    animation: form-spin 0.8s linear infinite;
                }
                @keyframes form-spin {
                    to { transform: rotate(360deg); }
                }
                .form-footnote {
                    display: block;
                    text-align: center;
                    color: #6b7280;
                    font-size: 0.8rem;
                    margin-top: 1rem;
                }"#}
            </style>

            <div class="seats-badge">{"47 seats left"}</div>
            <h2>{"Reserve Your Seat"}</h2>
            <p class="form-intro">{"Join builders shipping real AI systems"}</p>

            <form onsubmit={onsubmit}>
                { field_row(
                    Field::Name,
                    "name",
                    "Full Name *",
                    "text",
                    "Enter your full name",
                    input.name.clone(),
                ) }
                { field_row(
                    Field::Email,
                    "email",
                    "Email Address *",
                    "email",
                    "your.email@example.com",
                    input.email.clone(),
                ) }
                { field_row(
                    Field::Phone,
                    "phone",
                    "Phone Number *",
                    "tel",
                    "10-digit mobile number",
                    input.phone.clone(),
                ) }

                {
                    if let Some(message) = (*submit_error).as_ref() {
                        html! {
                            <div class="submit-error">
                                <p>{message}</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <button type="submit" class="form-submit" disabled={*is_submitting}>
                    {
                        if *is_submitting {
                            html! {
                                <>
                                    <span class="form-spinner"></span>
                                    {"Registering..."}
                                </>
                            }
                        } else {
                            html! { <>{"Register for Free →"}</> }
                        }
                    }
                </button>

                <span class="form-footnote">
                    {"✓ Instant WhatsApp community access"}
                </span>
            </form>
        </div>
    }
}
