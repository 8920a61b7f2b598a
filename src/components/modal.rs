use yew::prelude::*;

/// Holds background scrolling disabled for as long as the value lives.
/// Acquired when the dialog mounts, dropped by the effect destructor when it
/// unmounts, so the close button, an outside click and a successful
/// registration all release it through the same path.
pub struct ScrollLock {
    previous_overflow: String,
}

impl ScrollLock {
    pub fn acquire() -> Option<Self> {
        let body = web_sys::window()?.document()?.body()?;
        let style = body.style();
        let previous_overflow = style.get_property_value("overflow").unwrap_or_default();
        style.set_property("overflow", "hidden").ok()?;
        Some(Self { previous_overflow })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let style = body.style();
            let _ = if self.previous_overflow.is_empty() {
                style.remove_property("overflow").map(|_| ())
            } else {
                style.set_property("overflow", &self.previous_overflow)
            };
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Dialog overlay. Clicking the backdrop closes; the panel itself sits on
/// top of it and swallows its own clicks.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    use_effect_with_deps(
        move |_| {
            let lock = ScrollLock::acquire();
            move || drop(lock)
        },
        (),
    );

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    html! {
        <div class="modal-root">
            <style>
                {r#".modal-root {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }
                .modal-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(10, 15, 26, 0.8);
                    backdrop-filter: blur(6px);
                }
                .modal-panel {
                    position: relative;
                    width: 100%;
                    max-width: 520px;
                    background: rgba(250, 252, 255, 0.97);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 24px;
                    box-shadow: 0 24px 60px rgba(0, 0, 0, 0.5);
                    padding: 2.5rem;
                    animation: modal-in 0.3s ease;
                }
                @keyframes modal-in {
                    from { opacity: 0; transform: scale(0.95); }
                    to { opacity: 1; transform: scale(1); }
                }
                .modal-close {
                    position: absolute;
                    top: 1.25rem;
                    right: 1.25rem;
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    line-height: 1;
                    color: #9aa3b2;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }
                .modal-close:hover {
                    color: #4a5568;
                }
                @media (max-width: 768px) {
                    .modal-panel {
                        padding: 1.75rem;
                    }
                }"#}
            </style>
            <div class="modal-backdrop" onclick={on_backdrop_click}></div>
            <div class="modal-panel">
                <button class="modal-close" aria-label="Close" onclick={on_close_click}>
                    {"\u{2715}"}
                </button>
                { for props.children.iter() }
            </div>
        </div>
    }
}
