//! Per-category record schemas and their registry.

mod builtin_schemas;
mod field;
mod record_schema;
mod schema_registry;

pub use builtin_schemas::{
    builtin_schema, builtin_schemas, ASSIGNED_CLASS_FIELD, SCORE2_FIELD, SCORE_FIELD,
};
pub(crate) use field::is_valid_field_name;
pub use field::{FieldSpec, NAME_FIELD};
pub use record_schema::RecordSchema;
pub use schema_registry::SchemaRegistry;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::error::NoticeError;

    #[test]
    fn test_builtin_fields() {
        let registry = SchemaRegistry::builtin();
        assert_eq!(
            registry.fields_for(Category::Ept).unwrap(),
            vec!["name", "score", "assignedClass"]
        );
        assert_eq!(
            registry.fields_for(Category::ToeflJr).unwrap(),
            vec!["name", "score", "score2", "assignedClass"]
        );
        assert_eq!(
            registry.fields_for(Category::Toefl).unwrap(),
            vec!["name", "score", "assignedClass"]
        );
        assert_eq!(
            registry.fields_for(Category::To).unwrap(),
            vec!["name", "score", "score2"]
        );
        assert_eq!(registry.categories(), Category::ALL.to_vec());
    }

    #[test]
    fn test_unregistered_category() {
        let registry = SchemaRegistry::new();
        let err = registry.fields_for(Category::Toefl).unwrap_err();
        assert!(matches!(err, NoticeError::UnknownCategory { ref tag } if tag == "TOEFL"));
        assert!(!registry.contains(Category::Toefl));
    }

    #[test]
    fn test_register_duplicate() {
        let mut registry = SchemaRegistry::builtin();
        let err = registry
            .register(builtin_schema(Category::Ept))
            .unwrap_err();
        assert!(matches!(err, NoticeError::SchemaAlreadyRegistered { .. }));
    }

    #[test]
    fn test_schema_must_start_with_name() {
        let schema = RecordSchema::new(
            Category::Ept,
            vec![FieldSpec::new("score", "Score"), FieldSpec::new("name", "Name")],
        );
        assert!(matches!(
            schema.validate(),
            Err(NoticeError::InvalidSchema { .. })
        ));
    }

    #[test]
    fn test_schema_rejects_bad_fields() {
        let empty = RecordSchema::new(Category::Ept, vec![]);
        assert!(empty.validate().is_err());

        let duplicate = RecordSchema::new(
            Category::Ept,
            vec![FieldSpec::new("name", "Name"), FieldSpec::new("name", "Again")],
        );
        assert!(duplicate.validate().is_err());

        for bad in ["", "sc ore", "sc\"ore", "{score}"] {
            let schema = RecordSchema::new(
                Category::Ept,
                vec![FieldSpec::new("name", "Name"), FieldSpec::new(bad, "Bad")],
            );
            assert!(schema.validate().is_err(), "accepted field name {:?}", bad);
        }
    }

    #[test]
    fn test_column_guide() {
        let registry = SchemaRegistry::builtin();
        assert_eq!(
            registry.column_guide(Category::ToeflJr).unwrap(),
            "1.Name → 2.Score (R+L) → 3.Score (S+W) → 4.Class"
        );
        assert_eq!(
            registry.column_guide(Category::Ept).unwrap(),
            "1.Name → 2.Score → 3.Class"
        );
    }

    #[test]
    fn test_placeholder_token() {
        assert_eq!(FieldSpec::new("score2", "x").placeholder(), "\"{score2}\"");
    }
}
