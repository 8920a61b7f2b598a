use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GradientButtonProps {
    pub onclick: Callback<MouseEvent>,
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// The big blue call-to-action used by the hero and the closing sections.
#[function_component(GradientButton)]
pub fn gradient_button(props: &GradientButtonProps) -> Html {
    html! {
        <>
            <style>
                {r#".gradient-button {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    background: linear-gradient(90deg, #1E90FF, #4DA6FF);
                    color: #fff;
                    font-size: 1.1rem;
                    font-weight: 700;
                    border: none;
                    border-radius: 12px;
                    padding: 1.1rem 2.5rem;
                    cursor: pointer;
                    box-shadow: 0 4px 24px rgba(30, 144, 255, 0.4);
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }
                .gradient-button:hover {
                    transform: scale(1.04);
                    box-shadow: 0 6px 32px rgba(30, 144, 255, 0.55);
                }
                .gradient-button:active {
                    transform: scale(0.99);
                }"#}
            </style>
            <button
                type="button"
                class={classes!("gradient-button", props.class.clone())}
                onclick={props.onclick.clone()}
            >
                { for props.children.iter() }
            </button>
        </>
    }
}
