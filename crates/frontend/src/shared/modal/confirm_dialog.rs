use super::{Modal, ModalSize};
use crate::shared::components::ui::Button;
use contracts::shared::actions::ButtonVariant;
use leptos::prelude::*;

/// Small modal asking to confirm a destructive action
#[component]
pub fn ConfirmDialog(
    #[prop(into)]
    title: Signal<String>,
    #[prop(into)]
    message: Signal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)]
    confirm_label: MaybeProp<String>,
) -> impl IntoView {
    let confirm_label = move || confirm_label.get().unwrap_or_else(|| "삭제".to_string());

    view! {
        <Modal
            title=title
            on_close=on_cancel
            size=ModalSize::Small
            footer=move || view! {
                <Button variant=ButtonVariant::Secondary on_click=Callback::new(move |_| on_cancel.run(()))>
                    "취소"
                </Button>
                <Button variant=ButtonVariant::Danger on_click=Callback::new(move |_| on_confirm.run(()))>
                    {confirm_label}
                </Button>
            }
        >
            <p class="confirm-dialog__message">{move || message.get()}</p>
        </Modal>
    }
}
