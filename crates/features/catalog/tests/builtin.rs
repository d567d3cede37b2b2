use academy_catalog::{Catalog, CatalogStats, Issue, NOTEBOOK_BASE};
use academy_domain::{CallToAction, Lesson, LessonStatus, Module};
use std::collections::HashSet;

#[test]
fn builtin_catalog_is_free_of_errors() {
    let report = Catalog::builtin().validate();
    assert!(!report.has_errors(), "unexpected errors: {:?}", report.errors().collect::<Vec<_>>());
    assert!(report.into_result(false).is_ok());
}

#[test]
fn builtin_ids_and_keys_are_unique() {
    let catalog = Catalog::builtin();

    let keys: HashSet<_> = catalog.modules().iter().map(|m| m.key).collect();
    assert_eq!(keys.len(), catalog.modules().len());

    let ids: HashSet<_> = catalog.lessons().map(|l| l.id).collect();
    assert_eq!(ids.len(), catalog.lessons().count());
}

#[test]
fn builtin_order_is_declared_order() {
    let catalog = Catalog::builtin();

    let keys: Vec<_> = catalog.modules().iter().map(|m| m.key).collect();
    assert_eq!(keys, ["module1", "module2", "module3", "module4", "module5"]);

    let first_module: Vec<_> = catalog.modules()[0].lessons.iter().map(|l| l.id).collect();
    assert_eq!(first_module, ["m1l1", "m1l2", "m1l3"]);
}

#[test]
fn builtin_stats() {
    assert_eq!(
        Catalog::builtin().stats(),
        CatalogStats { modules: 5, lessons: 13, available: 6, coming_soon: 7, featured: 1 }
    );
}

#[test]
fn builtin_featured_lesson_links_to_its_notebook() {
    let featured = Catalog::builtin().featured_lessons();
    assert_eq!(featured.len(), 1);

    let CallToAction::Open { url } = featured[0].call_to_action() else {
        panic!("featured lesson must be actionable");
    };
    assert!(url.starts_with(NOTEBOOK_BASE));
    assert!(url.ends_with("01_first_finetuning.ipynb"));
}

#[test]
fn coming_soon_lessons_carry_no_link() {
    let catalog = Catalog::builtin();
    for lesson in catalog.lessons().filter(|l| l.status == LessonStatus::ComingSoon) {
        assert_eq!(lesson.call_to_action(), CallToAction::ComingSoon, "{}", lesson.id);
        assert!(lesson.url.is_none(), "{}", lesson.id);
    }
}

static SPREAD: [Lesson; 2] = [
    Lesson { id: "a", featured: true, ..Lesson::DRAFT },
    Lesson { id: "b", ..Lesson::DRAFT },
];

static TAIL: [Lesson; 1] = [Lesson { id: "c", featured: true, ..Lesson::DRAFT }];

static SPREAD_MODULES: [Module; 2] = [
    Module { key: "x", title: "X", emoji: "", subtitle: "", duration: "", lessons: &SPREAD },
    Module { key: "y", title: "Y", emoji: "", subtitle: "", duration: "", lessons: &TAIL },
];

#[test]
fn featured_spans_modules_in_catalog_order() {
    let ids: Vec<_> =
        Catalog::new(&SPREAD_MODULES).featured_lessons().iter().map(|l| l.id).collect();
    assert_eq!(ids, ["a", "c"]);
}

#[test]
fn featured_without_url_is_reported() {
    let report = Catalog::new(&SPREAD_MODULES).validate();
    assert!(!report.has_errors());
    assert!(report.issues().contains(&Issue::FeaturedNotActionable { id: "a" }));
    assert!(report.issues().contains(&Issue::FeaturedNotActionable { id: "c" }));
    assert!(report.into_result(true).is_err());
}

#[test]
fn catalog_serializes_as_module_list() {
    let json = serde_json::to_value(Catalog::new(&SPREAD_MODULES)).unwrap();
    assert_eq!(json[0]["key"], "x");
    assert_eq!(json[0]["lessons"][0]["status"], "coming_soon");
    assert_eq!(json[1]["lessons"][0]["id"], "c");
}
