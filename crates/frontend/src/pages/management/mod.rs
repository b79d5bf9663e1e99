pub mod controller;
pub mod services;
pub mod state;

use contracts::domain::a001_user::aggregate::User;
use contracts::domain::a002_post::aggregate::{Post, PostAction};
use contracts::domain::common::{EntityType, Record, RecordId, Records};
use contracts::shared::actions::{ButtonVariant, EntityAction};
use leptos::prelude::*;
use leptos::task::spawn_local;

use self::controller::{ManagementController, DELETE_CONFIRM};
use self::state::{ManagementAction, ManagementState};
use crate::domain::a001_user::api::HttpUserService;
use crate::domain::a001_user::ui::form::UserFormFields;
use crate::domain::a001_user::ui::table::{user_columns, UserCellRenderer};
use crate::domain::a002_post::api::HttpPostService;
use crate::domain::a002_post::ui::form::PostFormFields;
use crate::domain::a002_post::ui::table::{post_columns, PostCellRenderer};
use crate::shared::components::ui::Button;
use crate::shared::components::{Alert, AlertVariant, Card, DataTable, PageHeader, StatsGrid};
use crate::shared::modal::{ConfirmDialog, Modal};
use crate::shared::table_engine::{EngineOptions, EngineState};

pub const PAGE_SIZE: usize = 10;

type PageController =
    ManagementController<HttpUserService, HttpPostService, RwSignal<ManagementState>>;

/// "ID: 3 | 생성일: 2024-01-15", plus views for posts
pub fn edit_summary(record: &Record) -> String {
    match record {
        Record::User(user) => format!("ID: {} | 생성일: {}", user.id, user.created_at),
        Record::Post(post) => format!(
            "ID: {} | 생성일: {} | 조회수: {}",
            post.id, post.created_at, post.views
        ),
    }
}

fn users_of(records: &Records) -> Vec<User> {
    match records {
        Records::Users(users) => users.clone(),
        Records::Posts(_) => Vec::new(),
    }
}

fn posts_of(records: &Records) -> Vec<Post> {
    match records {
        Records::Posts(posts) => posts.clone(),
        Records::Users(_) => Vec::new(),
    }
}

#[component]
pub fn ManagementPage() -> impl IntoView {
    let state = RwSignal::new(ManagementState::default());
    let controller: PageController =
        ManagementController::new(HttpUserService, HttpPostService, state);
    let controller = StoredValue::new(controller);

    {
        let c = controller.get_value();
        spawn_local(async move {
            let _ = c.load().await;
        });
    }

    let entity_type = Memo::new(move |_| state.with(|s| s.entity_type));

    let switch_to = move |target: EntityType| {
        let c = controller.get_value();
        spawn_local(async move { c.switch_entity(target).await });
    };

    let on_edit = Callback::new(move |id: RecordId| controller.with_value(|c| c.open_edit(id)));
    let on_delete =
        Callback::new(move |id: RecordId| controller.with_value(|c| c.request_delete(id)));
    let on_transition = Callback::new(move |(id, action): (RecordId, PostAction)| {
        let c = controller.get_value();
        spawn_local(async move { c.transition(id, action).await });
    });

    // form keystrokes and alerts update the state too; the table only follows these
    let records = Memo::new(move |_| state.with(|s| s.records.clone()));
    let users = Memo::new(move |_| records.with(users_of));
    let posts = Memo::new(move |_| records.with(posts_of));
    let engine = Memo::new(move |_| state.with(|s| s.engine.clone()));
    let on_engine_change = Callback::new(move |next: EngineState| {
        state.update(|s| s.apply(ManagementAction::EngineChanged(next)))
    });
    let options = EngineOptions {
        searchable: true,
        sortable: true,
        page_size: PAGE_SIZE,
    };

    let table = move || match entity_type.get() {
        EntityType::User => view! {
            <DataTable
                records=users
                columns=user_columns()
                renderer=UserCellRenderer { on_edit, on_delete }
                options=options
                engine=engine
                on_engine_change=on_engine_change
                striped=true
                hover=true
            />
        }
        .into_any(),
        EntityType::Post => view! {
            <DataTable
                records=posts
                columns=post_columns()
                renderer=PostCellRenderer { on_edit, on_delete, on_transition }
                options=options
                engine=engine
                on_engine_change=on_engine_change
                striped=true
                hover=true
            />
        }
        .into_any(),
    };

    let form_fields = move || match entity_type.get() {
        EntityType::User => view! {
            <UserFormFields
                form=Signal::derive(move || state.with(|s| s.user_form.clone()))
                on_change=Callback::new(move |form| {
                    state.update(|s| s.apply(ManagementAction::UserFormChanged(form)))
                })
            />
        }
        .into_any(),
        EntityType::Post => view! {
            <PostFormFields
                form=Signal::derive(move || state.with(|s| s.post_form.clone()))
                on_change=Callback::new(move |form| {
                    state.update(|s| s.apply(ManagementAction::PostFormChanged(form)))
                })
            />
        }
        .into_any(),
    };

    let close_create = Callback::new(move |_: ()| controller.with_value(|c| c.close_create()));
    let close_edit = Callback::new(move |_: ()| controller.with_value(|c| c.close_edit()));
    let submit_create = Callback::new(move |_: leptos::ev::MouseEvent| {
        let c = controller.get_value();
        spawn_local(async move { c.create().await });
    });
    let submit_update = Callback::new(move |_: leptos::ev::MouseEvent| {
        let c = controller.get_value();
        spawn_local(async move { c.update().await });
    });
    let confirm_delete = Callback::new(move |_: ()| {
        let c = controller.get_value();
        spawn_local(async move { c.confirm_delete().await });
    });
    let cancel_delete = Callback::new(move |_: ()| controller.with_value(|c| c.cancel_delete()));

    let tab = move |target: EntityType| {
        view! {
            <Button
                variant=Signal::derive(move || {
                    if entity_type.get() == target {
                        ButtonVariant::Primary
                    } else {
                        ButtonVariant::Secondary
                    }
                })
                on_click=Callback::new(move |_| switch_to(target))
            >
                {target.tab_label()}
            </Button>
        }
    };

    view! {
        <div class="management-page">
            <PageHeader title="관리 시스템" subtitle="사용자와 게시글을 관리하세요">
                {()}
            </PageHeader>

            <Card>
                <div class="management-page__tabs">
                    {EntityType::ALL.into_iter().map(tab).collect_view()}
                </div>

                <div class="management-page__toolbar">
                    <Button on_click=Callback::new(move |_| controller.with_value(|c| c.open_create()))>
                        "새로 만들기"
                    </Button>
                </div>

                {move || state.with(|s| s.success_message.clone()).map(|message| view! {
                    <Alert
                        variant=AlertVariant::Success
                        title="성공"
                        on_close=Callback::new(move |_| state.update(|s| s.apply(ManagementAction::DismissSuccess)))
                    >
                        {message}
                    </Alert>
                })}
                {move || state.with(|s| s.error_message.clone()).map(|message| view! {
                    <Alert
                        variant=AlertVariant::Error
                        title="오류"
                        on_close=Callback::new(move |_| state.update(|s| s.apply(ManagementAction::DismissError)))
                    >
                        {message}
                    </Alert>
                })}

                <StatsGrid stats=Signal::derive(move || state.with(|s| s.stats())) />

                {table}
            </Card>

            <Show when=move || state.with(|s| s.is_create_modal_open)>
                <Modal
                    title=format!("새 {} 만들기", entity_type.get_untracked().noun())
                    on_close=close_create
                    footer=move || view! {
                        <Button variant=ButtonVariant::Secondary on_click=Callback::new(move |_| close_create.run(()))>
                            "취소"
                        </Button>
                        <Button action=EntityAction::Create on_click=submit_create>
                            "생성"
                        </Button>
                    }
                >
                    {form_fields}
                </Modal>
            </Show>

            <Show when=move || state.with(|s| s.is_edit_modal_open)>
                <Modal
                    title=format!("{} 수정", entity_type.get_untracked().noun())
                    on_close=close_edit
                    footer=move || view! {
                        <Button variant=ButtonVariant::Secondary on_click=Callback::new(move |_| close_edit.run(()))>
                            "취소"
                        </Button>
                        <Button action=EntityAction::Edit on_click=submit_update>
                            "수정 완료"
                        </Button>
                    }
                >
                    {move || state.with(|s| s.selected.as_ref().map(edit_summary)).map(|summary| view! {
                        <Alert variant=AlertVariant::Info>{summary}</Alert>
                    })}
                    {form_fields}
                </Modal>
            </Show>

            <Show when=move || state.with(|s| s.pending_delete.is_some())>
                <ConfirmDialog
                    title="삭제 확인".to_string()
                    message=DELETE_CONFIRM.to_string()
                    on_confirm=confirm_delete
                    on_cancel=cancel_delete
                />
            </Show>
        </div>
    }
}
