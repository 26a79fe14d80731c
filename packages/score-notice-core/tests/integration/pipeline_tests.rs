//! Pipeline tests: pasted text → records → rendered messages.

use score_notice_core::category::Category;
use score_notice_core::record::{Record, RecordParser};
use score_notice_core::schema::SchemaRegistry;
use score_notice_core::template::{Renderer, TemplateStore};

#[test]
fn test_paste_and_render_every_row() -> anyhow::Result<()> {
    let registry = SchemaRegistry::builtin();
    let mut templates = TemplateStore::with_defaults();
    templates.set(
        Category::Ept,
        "\"{name}\": \"{score}\" → \"{assignedClass}\"",
    );

    let records = RecordParser::new(&registry)
        .parse("Kim\t77\tClassA\nLee\t88\tClassB", Category::Ept)?;
    let messages: Vec<String> = records
        .iter()
        .map(|r| Renderer::render(templates.get(r.category()).unwrap(), r))
        .collect();

    assert_eq!(
        messages,
        vec![
            "\"Kim\": \"77\" → \"ClassA\"".to_string(),
            "\"Lee\": \"88\" → \"ClassB\"".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn test_round_trip_example() -> anyhow::Result<()> {
    let registry = SchemaRegistry::builtin();
    let schema = registry.schema(Category::Toefl)?;
    let kim = Record::from_values(schema, [("name", "Kim"), ("score", "90")]).unwrap();

    assert_eq!(
        Renderer::render("\"{name}\" got \"{score}\"", &kim),
        "\"Kim\" got \"90\""
    );
    Ok(())
}

#[test]
fn test_editing_one_category_leaves_others() -> anyhow::Result<()> {
    let registry = SchemaRegistry::builtin();
    let parser = RecordParser::new(&registry);
    let mut templates = TemplateStore::with_defaults();

    let jr = parser.parse("Park\t80\t85\tMEGA", Category::ToeflJr)?;
    let before = Renderer::render(templates.get(Category::ToeflJr)?, &jr[0]);

    templates.set(Category::Ept, "changed \"{name}\"");
    templates.set(Category::Toefl, "");
    let after = Renderer::render(templates.get(Category::ToeflJr)?, &jr[0]);

    assert_eq!(before, after);
    Ok(())
}

#[test]
fn test_extra_columns_dropped_in_output() -> anyhow::Result<()> {
    let registry = SchemaRegistry::builtin();
    let records =
        RecordParser::new(&registry).parse("Kim\t77\tClassA\tnote\tmore", Category::Ept)?;
    let message = Renderer::render("\"{name}\" \"{assignedClass}\" \"{note}\"", &records[0]);
    assert_eq!(message, "\"Kim\" \"ClassA\" \"{note}\"");
    Ok(())
}

#[test]
fn test_to_category_defaults() -> anyhow::Result<()> {
    let registry = SchemaRegistry::builtin();
    let templates = TemplateStore::with_defaults();
    let records = RecordParser::new(&registry).parse("Choi\t45\t38", Category::To)?;

    let message = Renderer::render(templates.get(Category::To)?, &records[0]);
    assert_eq!(
        message,
        "\"Choi\" 학생 TO 시험 결과,\n\n독해: \"45\" 점\n문법: \"38\" 점"
    );
    Ok(())
}
