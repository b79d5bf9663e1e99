//! Showcase of the shared component library with static sample data

use chrono::NaiveDate;
use contracts::domain::a001_user::aggregate::{User, UserRole, UserStatus};
use contracts::domain::a002_post::aggregate::{Post, PostStatus};
use contracts::domain::common::{EntityType, Record};
use contracts::shared::actions::{ButtonVariant, EntityAction};
use contracts::shared::badge::BadgeVariant;
use contracts::shared::stats::{ColorToken, StatItem, Stats};
use leptos::prelude::*;

use crate::domain::a001_user::ui::table::user_columns;
use crate::shared::components::ui::{Badge, BadgeSize, Button, ButtonSize};
use crate::shared::components::{
    Alert, AlertVariant, Card, CardVariant, DataTable, FormCheckbox, FormInput, FormSelect,
    FormTextarea, PageHeader, PlainCellRenderer, StatsGrid,
};
use crate::shared::modal::{Modal, ModalSize};
use crate::shared::table_engine::{EngineOptions, EngineState};

fn sample_users() -> Vec<User> {
    let names = [
        ("kim", UserRole::Admin, UserStatus::Active),
        ("lee", UserRole::Moderator, UserStatus::Active),
        ("park", UserRole::User, UserStatus::Inactive),
        ("choi", UserRole::User, UserStatus::Suspended),
        ("jung", UserRole::User, UserStatus::Active),
        ("kang", UserRole::Moderator, UserStatus::Active),
        ("cho", UserRole::User, UserStatus::Active),
    ];
    names
        .into_iter()
        .enumerate()
        .map(|(i, (name, role, status))| User {
            id: i as i64 + 1,
            username: name.to_string(),
            email: format!("{name}@example.com"),
            role,
            status,
            created_at: NaiveDate::from_ymd_opt(2024, 1, i as u32 + 1).unwrap_or_default(),
            last_login: None,
        })
        .collect()
}

fn sample_stats() -> Stats {
    Stats {
        total: 128,
        stat1: StatItem::new("게시됨", 84, ColorToken::Success),
        stat2: StatItem::new("임시저장", 30, ColorToken::Warning),
        stat3: StatItem::new("보관됨", 14, ColorToken::TextDisabled),
        stat4: StatItem::new("총 조회수", 12_840, ColorToken::Primary),
    }
}

#[component]
fn ButtonSection() -> impl IntoView {
    let admin = Record::User(User {
        id: 1,
        username: "admin".into(),
        role: UserRole::Admin,
        ..User::default()
    });
    let archived = Record::Post(Post {
        id: 2,
        title: "보관된 게시글".into(),
        status: PostStatus::Archived,
        ..Post::default()
    });

    view! {
        <Card title="Button" subtitle="variant, size, action">
            <div class="gallery__row">
                <Button>"Primary"</Button>
                <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
                <Button variant=ButtonVariant::Danger>"Danger"</Button>
                <Button variant=ButtonVariant::Success>"Success"</Button>
                <Button variant=ButtonVariant::Ghost>"Ghost"</Button>
            </div>
            <div class="gallery__row">
                <Button size=ButtonSize::Sm>"Small"</Button>
                <Button size=ButtonSize::Md>"Medium"</Button>
                <Button size=ButtonSize::Lg>"Large"</Button>
                <Button disabled=true>"Disabled"</Button>
            </div>
            <div class="gallery__row">
                <Button action=EntityAction::Create entity_type=EntityType::Post />
                <Button action=EntityAction::Edit record=admin.clone() />
                <Button action=EntityAction::Delete record=admin />
                <Button action=EntityAction::Publish record=archived.clone() />
                <Button action=EntityAction::Restore record=archived />
            </div>
            <Button full_width=true variant=ButtonVariant::Secondary>"Full width"</Button>
        </Card>
    }
}

#[component]
fn BadgeSection() -> impl IntoView {
    view! {
        <Card title="Badge" subtitle="domain codes resolve to style and label">
            <div class="gallery__row">
                <Badge status="published" />
                <Badge status="draft" />
                <Badge status="archived" />
                <Badge status="pending" />
                <Badge status="rejected" />
            </div>
            <div class="gallery__row">
                <Badge user_role="admin" />
                <Badge user_role="moderator" />
                <Badge user_role="user" />
                <Badge user_role="guest" />
            </div>
            <div class="gallery__row">
                <Badge priority="high" />
                <Badge priority="medium" />
                <Badge priority="low" />
                <Badge payment_status="paid" />
                <Badge payment_status="pending" />
                <Badge payment_status="failed" />
                <Badge payment_status="refunded" />
            </div>
            <div class="gallery__row">
                <Badge variant=BadgeVariant::Info pill=true size=BadgeSize::Small>"development"</Badge>
                <Badge variant=BadgeVariant::Warning pill=true>"design"</Badge>
                <Badge variant=BadgeVariant::Primary pill=true size=BadgeSize::Large>"accessibility"</Badge>
            </div>
        </Card>
    }
}

#[component]
fn FormSection() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let agreed = RwSignal::new(false);

    let name_error = Signal::derive(move || {
        let value = name.get();
        (!value.is_empty() && value.chars().count() < 3)
            .then(|| "사용자명은 3자 이상이어야 합니다".to_string())
    });

    let categories = vec![
        ("development".to_string(), "Development".to_string()),
        ("design".to_string(), "Design".to_string()),
        ("accessibility".to_string(), "Accessibility".to_string()),
    ];

    view! {
        <Card title="Form" subtitle="label, message and control in one field">
            <FormInput
                label="사용자명"
                name="gallery-username"
                value=name
                on_input=Callback::new(move |v| name.set(v))
                placeholder="3자 이상"
                required=true
                error=name_error
                help_text="영문, 숫자, 밑줄"
                width="medium"
            />
            <FormSelect
                label="카테고리"
                name="gallery-category"
                value=category
                on_change=Callback::new(move |v| category.set(v))
                options=categories
                placeholder="카테고리 선택"
            />
            <FormTextarea
                label="내용"
                name="gallery-content"
                value=content
                on_input=Callback::new(move |v| content.set(v))
                rows=4
            />
            <FormCheckbox
                label="약관에 동의합니다"
                name="gallery-agree"
                checked=agreed
                on_change=Callback::new(move |v| agreed.set(v))
            />
        </Card>
    }
}

#[component]
fn FeedbackSection() -> impl IntoView {
    let modal_open = RwSignal::new(false);
    let close = Callback::new(move |_: ()| modal_open.set(false));

    view! {
        <Card title="Alert / Modal" variant=CardVariant::Bordered>
            <Alert variant=AlertVariant::Info title="안내">"정보 메시지입니다"</Alert>
            <Alert variant=AlertVariant::Success>"저장되었습니다"</Alert>
            <Alert variant=AlertVariant::Warning no_icon=true>"아이콘 없는 경고"</Alert>
            <Alert variant=AlertVariant::Error title="오류" on_close=Callback::new(|_| ())>
                "닫기 버튼이 있는 오류"
            </Alert>
            <Alert>"기본 알림"</Alert>

            <Button on_click=Callback::new(move |_| modal_open.set(true))>"모달 열기"</Button>
            <Show when=move || modal_open.get()>
                <Modal
                    title="예시 모달".to_string()
                    on_close=close
                    size=ModalSize::Small
                    footer=move || view! {
                        <Button variant=ButtonVariant::Secondary on_click=Callback::new(move |_| close.run(()))>
                            "닫기"
                        </Button>
                    }
                >
                    <p>"Escape 키나 바깥 영역 클릭으로도 닫힙니다."</p>
                </Modal>
            </Show>
        </Card>
    }
}

#[component]
fn TableSection() -> impl IntoView {
    let records = Signal::stored(sample_users());
    let engine = RwSignal::new(EngineState::default());
    let options = EngineOptions {
        searchable: true,
        sortable: true,
        page_size: 5,
    };

    view! {
        <Card title="DataTable" variant=CardVariant::Elevated>
            <DataTable
                records=records
                columns=user_columns()
                renderer=PlainCellRenderer
                options=options
                engine=engine
                on_engine_change=Callback::new(move |next| engine.set(next))
                bordered=true
            />
        </Card>
    }
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    view! {
        <div class="gallery-page">
            <PageHeader title="컴포넌트" subtitle="디자인 시스템 구성 요소">
                {()}
            </PageHeader>
            <StatsGrid stats=Signal::stored(sample_stats()) />
            <ButtonSection />
            <BadgeSection />
            <FormSection />
            <FeedbackSection />
            <TableSection />
        </div>
    }
}
