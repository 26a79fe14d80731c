use crate::category::Category;

use super::field::{FieldSpec, NAME_FIELD};
use super::record_schema::RecordSchema;

/// Primary score field.
pub const SCORE_FIELD: &str = "score";

/// Secondary score field (TOEFL Jr. S+W, TO grammar).
pub const SCORE2_FIELD: &str = "score2";

/// Class the student is assigned to next term.
pub const ASSIGNED_CLASS_FIELD: &str = "assignedClass";

/// Built-in schema of every category.
pub fn builtin_schemas() -> Vec<RecordSchema> {
    Category::ALL.into_iter().map(builtin_schema).collect()
}

/// Built-in schema of one category.
pub fn builtin_schema(category: Category) -> RecordSchema {
    let name = FieldSpec::new(NAME_FIELD, "Name");
    let class = FieldSpec::new(ASSIGNED_CLASS_FIELD, "Class");

    let fields = match category {
        Category::Ept | Category::Toefl => {
            vec![name, FieldSpec::new(SCORE_FIELD, "Score"), class]
        }
        Category::ToeflJr => vec![
            name,
            FieldSpec::new(SCORE_FIELD, "Score (R+L)"),
            FieldSpec::new(SCORE2_FIELD, "Score (S+W)"),
            class,
        ],
        Category::To => vec![
            name,
            FieldSpec::new(SCORE_FIELD, "Reading"),
            FieldSpec::new(SCORE2_FIELD, "Grammar"),
        ],
    };

    RecordSchema::new(category, fields)
}
