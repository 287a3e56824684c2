use std::path::PathBuf;

use pbxproj_objects::table::ObjectTable;
use pbxproj_resolver::IndexBuilder;

use crate::utils::{file, group, project, record, resolve, strings, table, variant_group};

fn nested_table() -> ObjectTable {
    table(&[
        ("P", project("M")),
        ("M", group(None, &["OUTER"])),
        ("OUTER", group(Some("App"), &["INNER", "EMPTY"])),
        ("INNER", group(Some("Views"), &["LEAF"])),
        ("LEAF", file("RootView.swift")),
        ("EMPTY", group(Some(""), &["UNDER_EMPTY"])),
        ("UNDER_EMPTY", file("Model.swift")),
    ])
}

fn path_of(index: &pbxproj_resolver::index::ProjectIndex, key: &str) -> String {
    index.relative_path(index.find(key).unwrap().id)
}

#[test]
fn test_file_two_groups_deep() {
    let index = resolve(&nested_table(), "P");
    assert_eq!(path_of(&index, "LEAF"), "App/Views/RootView.swift");
}

#[test]
fn test_empty_levels_are_omitted() {
    let index = resolve(&nested_table(), "P");
    assert_eq!(path_of(&index, "UNDER_EMPTY"), "App/Model.swift");
    assert_eq!(path_of(&index, "M"), "");
}

#[test]
fn test_named_group_without_path_contributes_nothing() {
    let objects = table(&[
        ("P", project("M")),
        ("M", group(None, &["FW"])),
        (
            "FW",
            record(
                "PBXGroup",
                &[
                    ("name", "Frameworks".into()),
                    ("children", strings(&["UIKIT"])),
                ],
            ),
        ),
        ("UIKIT", file("System/Library/Frameworks/UIKit.framework")),
    ]);
    let index = resolve(&objects, "P");
    assert_eq!(
        path_of(&index, "UIKIT"),
        "System/Library/Frameworks/UIKit.framework"
    );
}

#[test]
fn test_variant_group_level_uses_its_name() {
    let objects = table(&[
        ("P", project("M")),
        ("M", group(Some("Demo"), &["V"])),
        ("V", variant_group("Main.storyboard", &["BASE"])),
        ("BASE", file("Base.lproj/Main.storyboard")),
    ]);
    let index = resolve(&objects, "P");
    assert_eq!(
        path_of(&index, "BASE"),
        "Demo/Main.storyboard/Base.lproj/Main.storyboard"
    );
}

#[test]
fn test_absolute_path_joins_project_dir() -> anyhow::Result<()> {
    let index = IndexBuilder::new()
        .with_project_dir("/work/Demo")
        .build_index(&nested_table(), "P")?
        .index();
    let leaf = index.find("LEAF").unwrap();
    assert_eq!(
        index.absolute_path(leaf.id),
        Some(PathBuf::from("/work/Demo/App/Views/RootView.swift"))
    );
    assert_eq!(
        index.project().path.as_deref(),
        Some(std::path::Path::new("/work/Demo"))
    );
    Ok(())
}

#[test]
fn test_absolute_path_needs_project_dir() {
    let index = resolve(&nested_table(), "P");
    let leaf = index.find("LEAF").unwrap();
    assert_eq!(index.absolute_path(leaf.id), None);
}
