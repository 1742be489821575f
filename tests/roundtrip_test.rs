//! Integration tests for the parse ⇄ reconstruct round trip.

use serde_json::Value;

use unresume::model::{ContentItem, ResumeDocument, SectionKind};
use unresume::parser::{DocumentBuilder, SequentialIdGenerator};
use unresume::{reconstruct, template};

fn parse(text: &str) -> ResumeDocument {
    DocumentBuilder::with_ids(SequentialIdGenerator::new()).parse(text)
}

/// Structural view of a document: the serialized model with ids removed,
/// since ids carry no structural meaning and differ between parses.
fn structure(doc: &ResumeDocument) -> Value {
    fn strip_ids(value: &mut Value) {
        match value {
            Value::Object(map) => {
                map.remove("id");
                map.values_mut().for_each(strip_ids);
            }
            Value::Array(items) => items.iter_mut().for_each(strip_ids),
            _ => {}
        }
    }

    let mut value = serde_json::to_value(doc).unwrap();
    strip_ids(&mut value);
    value
}

/// `parse(reconstruct(parse(t)))` must structurally equal `parse(t)`.
fn assert_reparse_stable(text: &str) {
    let first = parse(text);
    let reparsed = parse(&reconstruct(&first));
    assert_eq!(
        structure(&first),
        structure(&reparsed),
        "round trip changed structure for input: {:?}",
        text
    );
}

#[test]
fn end_to_end_scenario() {
    let text = "John Smith\tjohn@example.com | 555-1234\n\nEDUCATION\nBSc Computer Science | MIT\tSep 2018 – Jun 2022\no top 5% of cohort\n\nSKILLS\nLanguages: English, Spanish\n";
    let doc = parse(text);

    let header = doc.header.as_ref().unwrap();
    assert_eq!(header.name, "John Smith");
    assert_eq!(header.contact, "john@example.com | 555-1234");

    assert_eq!(doc.section_count(), 2);

    let education = doc.sections[0].as_standard().unwrap();
    assert_eq!(education.title, "EDUCATION");
    assert_eq!(education.entries.len(), 1);
    let entry = &education.entries[0];
    assert_eq!(entry.title, "BSc Computer Science");
    assert_eq!(entry.subtitle, "MIT");
    assert_eq!(entry.date, "Sep 2018 – Jun 2022");
    assert_eq!(entry.content.len(), 1);
    assert!(matches!(
        &entry.content[0],
        ContentItem::Bullet(b) if b.style == unresume::BulletStyle::Circle
    ));

    let skills = doc.sections[1].as_skills().unwrap();
    assert_eq!(skills.skills.len(), 1);
    assert_eq!(skills.skills[0].category, "Languages");
    assert_eq!(skills.skills[0].details, "English, Spanish");

    assert_reparse_stable(text);
}

#[test]
fn reparse_stability_over_inputs() {
    let inputs = [
        "",
        "just prose\nwith no structure\n",
        "EDUCATION\n",
        "SKILLS\nRust\nLanguages: English\n",
        "Jane\tjane@example.com\n\nEXPERIENCE\nRole | Org\tJan 2020 – Present\n• Category: first\no second\n• plain bullet\no orphan\nFreestanding Label\n• after label\n",
        template::STOCK_RESUME,
    ];
    for text in inputs {
        assert_reparse_stable(text);
    }
}

#[test]
fn header_detection_boundary() {
    let with_tab = parse("John Smith\tjohn@example.com | 555-1234\n\nEDUCATION\n");
    let header = with_tab.header.unwrap();
    assert_eq!(header.name, "John Smith");
    assert_eq!(header.contact, "john@example.com | 555-1234");

    let without_tab = parse("John Smith john@example.com\n\nEDUCATION\n");
    assert!(without_tab.header.is_none());
    // The unmatched first line is pre-section text and is dropped
    assert!(!reconstruct(&without_tab).contains("John Smith"));
}

#[test]
fn skills_titles_partition() {
    for title in unresume::model::SKILLS_TITLES {
        let doc = parse(&format!("{}\nsome skill\n", title));
        assert_eq!(doc.sections[0].kind(), SectionKind::Skills, "{}", title);
    }
    for title in ["EDUCATION", "PROJECTS", "LEADERSHIP", "SUMMARY"] {
        let doc = parse(&format!("{}\nRole | Org\tJan 2020 – Present\n", title));
        assert_eq!(doc.sections[0].kind(), SectionKind::Standard, "{}", title);
    }
}

#[test]
fn empty_section_compaction() {
    let doc = parse("EDUCATION\nPROJECTS\nSKILLS\nRust\n");
    let text = reconstruct(&doc);
    assert!(!text.contains("EDUCATION"));
    assert!(!text.contains("PROJECTS"));
    assert_eq!(text, "SKILLS\nRust\n");
}

#[test]
fn subheading_bullet_ownership() {
    let doc = parse("EXPERIENCE\nRole | Org\tJan 2020 – Present\n• Category: first item\no second item\n");
    let entry = &doc.sections[0].as_standard().unwrap().entries[0];
    assert_eq!(entry.content.len(), 1);
    match &entry.content[0] {
        ContentItem::Subheading { title, bullets, .. } => {
            assert_eq!(title, "Category");
            let texts: Vec<&str> = bullets.iter().map(|b| b.content.as_str()).collect();
            assert_eq!(texts, ["first item", "second item"]);
        }
        other => panic!("expected subheading, got {:?}", other),
    }
}

#[test]
fn subheading_ownership_ends_at_next_top_level_item() {
    let doc = parse(
        "EXPERIENCE\nRole | Org\tJan 2020 – Present\n• Category: one\no two\n• plain bullet\no after plain\n",
    );
    let entry = &doc.sections[0].as_standard().unwrap().entries[0];
    assert_eq!(entry.content.len(), 3);
    match &entry.content[0] {
        ContentItem::Subheading { bullets, .. } => assert_eq!(bullets.len(), 2),
        other => panic!("expected subheading, got {:?}", other),
    }
    // The `o` bullet after the plain bullet is not pulled back into the
    // earlier subheading
    assert!(matches!(&entry.content[2], ContentItem::Bullet(_)));
}

#[test]
fn bullet_style_round_trip() {
    let text = "EXPERIENCE\nRole | Org\tJan 2020 – Present\no detail text\n";
    let doc = parse(text);
    let entry = &doc.sections[0].as_standard().unwrap().entries[0];
    match &entry.content[0] {
        ContentItem::Bullet(b) => assert_eq!(b.style, unresume::BulletStyle::Circle),
        other => panic!("expected bullet, got {:?}", other),
    }

    let reconstructed = reconstruct(&doc);
    assert!(reconstructed.contains("  o detail text\n"));
    assert_reparse_stable(text);
}

#[test]
fn skill_default_category_round_trip() {
    let doc = parse("SKILLS\nFluent in Spanish\n");
    let skill = &doc.sections[0].as_skills().unwrap().skills[0];
    assert_eq!(skill.category, "General");
    assert_eq!(skill.details, "Fluent in Spanish");

    let text = reconstruct(&doc);
    assert_eq!(text, "SKILLS\nFluent in Spanish\n");
}

#[test]
fn inline_markup_survives_round_trip() {
    let text = "Jane Doe\t<b><a href=\"mailto:jane@example.com\">jane@example.com</a></b>\n\nEDUCATION\n<b>MSc | KCL | top 5%</b>\t<b>Sep 19 – Sep 20</b>\n";
    let doc = parse(text);

    let header = doc.header.as_ref().unwrap();
    assert!(header.contact.contains("<a href="));

    let entry = &doc.sections[0].as_standard().unwrap().entries[0];
    assert!(entry.title.contains("<b>"));
    assert_eq!(entry.date, "<b>Sep 19 – Sep 20</b>");

    assert_reparse_stable(text);
}

#[test]
fn stock_template_round_trip() {
    let doc = parse(template::STOCK_RESUME);
    assert_eq!(doc.section_count(), 3);
    assert_eq!(doc.entry_count(), 3);
    assert_eq!(doc.skill_count(), 2);
    assert_reparse_stable(template::STOCK_RESUME);
}

#[test]
fn glyph_normalization_is_lossy_but_stable() {
    // `*` bullets normalize to `•`; the second round trip is a fixpoint.
    let text = "EXPERIENCE\nRole | Org\tJan 2020 – Present\n* starred bullet\n";
    let once = reconstruct(&parse(text));
    assert!(once.contains("• starred bullet"));
    let twice = reconstruct(&parse(&once));
    assert_eq!(once, twice);
}
