mod confirm_dialog;

pub use confirm_dialog::ConfirmDialog;

use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ModalSize {
    fn class(self) -> &'static str {
        match self {
            ModalSize::Small => "modal--small",
            ModalSize::Medium => "modal--medium",
            ModalSize::Large => "modal--large",
        }
    }
}

/// Dialog over a dimmed overlay. Escape, the overlay and the close button
/// all call `on_close`; the parent decides whether the modal is mounted.
#[component]
pub fn Modal(
    #[prop(into)]
    title: Signal<String>,
    on_close: Callback<()>,
    #[prop(optional)]
    size: ModalSize,
    /// Footer buttons
    #[prop(optional, into)]
    footer: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class=format!("modal {}", size.class()) role="dialog" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|footer| view! { <div class="modal-footer">{footer.run()}</div> })}
            </div>
        </div>
    }
}
