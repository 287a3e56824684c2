//! The iOS application bundle under `test_data/ios_app`.

use pbxproj::XcodeProject;
use pbxproj_objects::nodes::{FileCategory, Isa};
use pbxproj_resolver::errors::Diagnostic;

use crate::utils::{
    FIXTURE_APP_DELEGATE, FIXTURE_DEMO_GROUP, FIXTURE_MAIN_STORYBOARD,
    FIXTURE_MAIN_STORYBOARD_BASE, FIXTURE_MISSING, FIXTURE_ROOT, FIXTURE_UIKIT,
    FIXTURE_VERSION_GROUP, fixture_bundle, get_test_data_path, init_logger,
};

fn parsed_fixture() -> anyhow::Result<XcodeProject> {
    init_logger();
    let mut project = XcodeProject::open(fixture_bundle())?;
    project.parse()?;
    Ok(project)
}

#[test]
fn test_fixture_object_counts() -> anyhow::Result<()> {
    let project = parsed_fixture()?;
    assert_eq!(project.objects().len(), 16);
    assert_eq!(project.variant_groups().len(), 2);
    let index = project.index().unwrap();
    assert_eq!(index.groups().len(), 5);
    assert_eq!(index.file_references().len(), 9);
    Ok(())
}

#[test]
fn test_fixture_top_level_entries() -> anyhow::Result<()> {
    let project = parsed_fixture()?;
    assert_eq!(project.root_object(), FIXTURE_ROOT);
    assert_eq!(project.archive_version(), Some("1"));
    assert_eq!(project.object_version(), Some("56"));
    assert_eq!(
        project.project_info().unwrap().development_region.as_deref(),
        Some("en")
    );
    let root = project.project().unwrap();
    assert_eq!(root.known_regions, vec!["en", "Base"]);
    Ok(())
}

#[test]
fn test_fixture_skips_unmodeled_and_missing_children() -> anyhow::Result<()> {
    let project = parsed_fixture()?;
    let diagnostics = project.index().unwrap().diagnostics();
    assert_eq!(
        diagnostics,
        &[
            Diagnostic::UnknownDiscriminator {
                key: FIXTURE_VERSION_GROUP.to_string(),
                isa: Some("XCVersionGroup".to_string()),
            },
            Diagnostic::DanglingReference {
                parent: FIXTURE_DEMO_GROUP.to_string(),
                key: FIXTURE_MISSING.to_string(),
            },
        ]
    );
    Ok(())
}

#[test]
fn test_fixture_relative_paths() -> anyhow::Result<()> {
    let project = parsed_fixture()?;
    let index = project.index().unwrap();
    let path_of = |key: &str| index.relative_path(index.find(key).unwrap().id);
    assert_eq!(path_of(FIXTURE_APP_DELEGATE), "Demo/AppDelegate.swift");
    assert_eq!(path_of(FIXTURE_MAIN_STORYBOARD), "Demo/Main.storyboard");
    assert_eq!(
        path_of(FIXTURE_MAIN_STORYBOARD_BASE),
        "Demo/Main.storyboard/Base.lproj/Main.storyboard"
    );
    assert_eq!(
        path_of(FIXTURE_UIKIT),
        "System/Library/Frameworks/UIKit.framework"
    );
    Ok(())
}

#[test]
fn test_fixture_absolute_path_is_beside_the_bundle() -> anyhow::Result<()> {
    let project = parsed_fixture()?;
    let app_delegate = project.index().unwrap().find(FIXTURE_APP_DELEGATE).unwrap();
    assert_eq!(
        project.absolute_path(app_delegate.id),
        Some(
            get_test_data_path()
                .join("ios_app")
                .join("Demo")
                .join("AppDelegate.swift")
        )
    );
    Ok(())
}

#[test]
fn test_fixture_file_kinds() -> anyhow::Result<()> {
    let project = parsed_fixture()?;
    let index = project.index().unwrap();
    let sources = index
        .file_references()
        .iter()
        .filter(|node| node.kind.category() == FileCategory::Source)
        .count();
    assert_eq!(sources, 3);
    let product = index
        .file_references()
        .into_iter()
        .find(|node| node.source_tree == "BUILT_PRODUCTS_DIR")
        .unwrap();
    assert_eq!(product.path.as_deref(), Some("Demo.app"));
    assert_eq!(product.kind.category(), FileCategory::Bundle);
    Ok(())
}

#[test]
fn test_fixture_targets_are_outside_the_file_hierarchy() -> anyhow::Result<()> {
    let project = parsed_fixture()?;
    let index = project.index().unwrap();
    assert!(index.native_targets().is_empty());
    assert!(index.objects_with_isa(Isa::BuildFile).is_empty());
    assert!(project.objects_table().len() > project.objects().len());
    Ok(())
}
