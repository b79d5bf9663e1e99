//! Post table: field access, columns, cell rendering

use contracts::domain::a002_post::aggregate::{Post, PostAction, PostStatus};
use contracts::domain::common::{EntityType, Record, RecordId};
use contracts::shared::actions::EntityAction;
use leptos::prelude::*;

use crate::shared::components::table::CellRenderer;
use crate::shared::components::ui::{Badge, Button, ButtonSize};
use crate::shared::list_utils::format_thousands;
use crate::shared::table_engine::{Column, FieldValue, TableRecord};

pub fn post_columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID").width("60px"),
        Column::new("title", "제목"),
        Column::new("author", "작성자").width("120px"),
        Column::new("category", "카테고리").width("140px"),
        Column::new("status", "상태").width("120px"),
        Column::new("views", "조회수").width("100px"),
        Column::new("createdAt", "작성일").width("120px"),
        Column::new("actions", "관리").width("250px").unsortable(),
    ]
}

impl TableRecord for Post {
    fn field(&self, key: &str) -> FieldValue {
        match key {
            "id" => self.id.into(),
            "title" => self.title.as_str().into(),
            "content" => self.content.as_str().into(),
            "author" => self.author.as_str().into(),
            "category" => self.category.as_str().into(),
            "status" => self.status.code().into(),
            "views" => self.views.into(),
            "createdAt" => self.created_at.format("%Y-%m-%d").to_string().into(),
            _ => FieldValue::Empty,
        }
    }

    fn search_values(&self) -> Vec<FieldValue> {
        [
            "id", "title", "content", "author", "category", "status", "views", "createdAt",
        ]
        .iter()
        .map(|key| self.field(key))
        .collect()
    }
}

/// The single lifecycle step offered for a status
pub fn next_action(status: PostStatus) -> PostAction {
    match status {
        PostStatus::Draft => PostAction::Publish,
        PostStatus::Published => PostAction::Archive,
        PostStatus::Archived => PostAction::Restore,
    }
}

fn entity_action(action: PostAction) -> EntityAction {
    match action {
        PostAction::Publish => EntityAction::Publish,
        PostAction::Archive => EntityAction::Archive,
        PostAction::Restore => EntityAction::Restore,
    }
}

pub struct PostCellRenderer {
    pub on_edit: Callback<RecordId>,
    pub on_delete: Callback<RecordId>,
    pub on_transition: Callback<(RecordId, PostAction)>,
}

impl CellRenderer<Post> for PostCellRenderer {
    fn render_cell(&self, post: &Post, column: &Column) -> AnyView {
        match column.key {
            "category" => {
                let category = post.category.clone();
                view! {
                <Badge variant=post.category_variant() pill=true>{category}</Badge>
                }
                .into_any()
            }
            "status" => view! { <Badge meta=post.status.badge() /> }.into_any(),
            "views" => format_thousands(post.views).into_any(),
            "actions" => {
                let id = post.id;
                let step = next_action(post.status);
                let record = Record::Post(post.clone());
                let (on_edit, on_delete, on_transition) =
                    (self.on_edit, self.on_delete, self.on_transition);
                view! {
                    <div class="table__actions">
                        <Button
                            size=ButtonSize::Sm
                            action=EntityAction::Edit
                            entity_type=EntityType::Post
                            record=record.clone()
                            on_click=Callback::new(move |_| on_edit.run(id))
                        />
                        <Button
                            size=ButtonSize::Sm
                            action=entity_action(step)
                            entity_type=EntityType::Post
                            record=record.clone()
                            on_click=Callback::new(move |_| on_transition.run((id, step)))
                        />
                        <Button
                            size=ButtonSize::Sm
                            action=EntityAction::Delete
                            entity_type=EntityType::Post
                            record=record
                            on_click=Callback::new(move |_| on_delete.run(id))
                        />
                    </div>
                }
                .into_any()
            }
            key => post.field(key).display().into_any(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_post::rules::is_action_allowed;

    #[test]
    fn offered_step_is_always_allowed() {
        for status in PostStatus::ALL {
            let post = Post {
                status,
                ..Post::default()
            };
            assert!(is_action_allowed(&post, next_action(status)));
        }
    }

    #[test]
    fn views_sort_numerically() {
        let a = Post {
            views: 900,
            ..Post::default()
        };
        let b = Post {
            views: 1200,
            ..Post::default()
        };
        assert!(a.field("views").compare(&b.field("views")).is_lt());
    }

    #[test]
    fn content_is_searchable_but_not_a_column() {
        let posts = vec![Post {
            content: "Leptos 시그널 정리".into(),
            ..Post::default()
        }];
        assert!(!post_columns().iter().any(|c| c.key == "content"));
        assert_eq!(crate::shared::table_engine::filter_records(&posts, "시그널").len(), 1);
    }
}
