//! User table: field access, columns, cell rendering

use contracts::domain::a001_user::aggregate::User;
use contracts::domain::common::{EntityType, Record, RecordId};
use contracts::shared::actions::EntityAction;
use leptos::prelude::*;

use crate::shared::components::table::CellRenderer;
use crate::shared::components::ui::{Badge, Button, ButtonSize};
use crate::shared::table_engine::{Column, FieldValue, TableRecord};

pub fn user_columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID").width("60px"),
        Column::new("username", "사용자명").width("150px"),
        Column::new("email", "이메일"),
        Column::new("role", "역할").width("120px"),
        Column::new("status", "상태").width("120px"),
        Column::new("createdAt", "생성일").width("120px"),
        Column::new("lastLogin", "마지막 로그인").width("140px"),
        Column::new("actions", "관리").width("200px").unsortable(),
    ]
}

impl TableRecord for User {
    fn field(&self, key: &str) -> FieldValue {
        match key {
            "id" => self.id.into(),
            "username" => self.username.as_str().into(),
            "email" => self.email.as_str().into(),
            "role" => self.role.code().into(),
            "status" => self.status.code().into(),
            "createdAt" => self.created_at.format("%Y-%m-%d").to_string().into(),
            "lastLogin" => self
                .last_login
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .into(),
            _ => FieldValue::Empty,
        }
    }

    fn search_values(&self) -> Vec<FieldValue> {
        ["id", "username", "email", "role", "status", "createdAt", "lastLogin"]
            .iter()
            .map(|key| self.field(key))
            .collect()
    }
}

pub struct UserCellRenderer {
    pub on_edit: Callback<RecordId>,
    pub on_delete: Callback<RecordId>,
}

impl CellRenderer<User> for UserCellRenderer {
    fn render_cell(&self, user: &User, column: &Column) -> AnyView {
        match column.key {
            "role" => view! { <Badge meta=user.role.badge() /> }.into_any(),
            "status" => view! { <Badge meta=user.status.badge() /> }.into_any(),
            "lastLogin" => user.last_login_display().into_any(),
            "actions" => {
                let id = user.id;
                let record = Record::User(user.clone());
                let (on_edit, on_delete) = (self.on_edit, self.on_delete);
                view! {
                    <div class="table__actions">
                        <Button
                            size=ButtonSize::Sm
                            action=EntityAction::Edit
                            entity_type=EntityType::User
                            record=record.clone()
                            on_click=Callback::new(move |_| on_edit.run(id))
                        />
                        <Button
                            size=ButtonSize::Sm
                            action=EntityAction::Delete
                            entity_type=EntityType::User
                            record=record
                            on_click=Callback::new(move |_| on_delete.run(id))
                        />
                    </div>
                }
                .into_any()
            }
            key => user.field(key).display().into_any(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a001_user::aggregate::{UserRole, UserStatus};

    fn user() -> User {
        User {
            id: 4,
            username: "kim_dev".into(),
            email: "kim@example.com".into(),
            role: UserRole::Moderator,
            status: UserStatus::Suspended,
            created_at: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap_or_default(),
            last_login: None,
        }
    }

    #[test]
    fn fields_expose_raw_codes() {
        let u = user();
        assert_eq!(u.field("id"), FieldValue::Number(4.0));
        assert_eq!(u.field("role"), FieldValue::Text("moderator".into()));
        assert_eq!(u.field("createdAt"), FieldValue::Text("2024-03-09".into()));
        assert_eq!(u.field("lastLogin"), FieldValue::Empty);
        assert_eq!(u.field("actions"), FieldValue::Empty);
    }

    #[test]
    fn status_code_is_searchable() {
        let users = vec![user()];
        let hits = crate::shared::table_engine::filter_records(&users, "SUSPENDED");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn only_actions_column_is_unsortable() {
        let cols = user_columns();
        assert_eq!(cols.len(), 8);
        assert!(cols.iter().filter(|c| !c.sortable).all(|c| c.key == "actions"));
    }
}
