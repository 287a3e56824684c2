//! The command line tool bundle under `test_data/openstep_app`, saved in the
//! OpenStep text format Xcode writes.

use pbxproj::XcodeProject;
use pbxproj_objects::nodes::{FileKind, FileReference, Isa};

use crate::utils::{get_test_data_path, init_logger};

const MAIN_SWIFT: &str = "4C2A1E000000000000000A11";
const FOUNDATION: &str = "4C2A1E000000000000000A22";
const MESSAGES_EN: &str = "4C2A1E000000000000000A44";

fn parsed_tool() -> anyhow::Result<XcodeProject> {
    init_logger();
    let bundle = get_test_data_path()
        .join("openstep_app")
        .join("Tool.xcodeproj");
    let mut project = XcodeProject::open(bundle)?;
    project.parse()?;
    Ok(project)
}

#[test]
fn test_openstep_object_counts() -> anyhow::Result<()> {
    let project = parsed_tool()?;
    assert_eq!(project.objects().len(), 10);
    assert_eq!(project.variant_groups().len(), 1);
    let index = project.index().unwrap();
    assert_eq!(index.groups().len(), 4);
    assert_eq!(index.file_references().len(), 5);
    assert!(index.diagnostics().is_empty());
    Ok(())
}

#[test]
fn test_openstep_scalars_are_read_as_strings() -> anyhow::Result<()> {
    let project = parsed_tool()?;
    assert_eq!(project.root_object(), "4C2A1E000000000000000100");
    assert_eq!(project.archive_version(), Some("1"));
    assert_eq!(project.object_version(), Some("77"));
    let root = project.project().unwrap();
    assert_eq!(root.known_regions, vec!["en", "fr", "Base"]);
    assert_eq!(root.development_region.as_deref(), Some("en"));
    Ok(())
}

#[test]
fn test_openstep_relative_paths() -> anyhow::Result<()> {
    let project = parsed_tool()?;
    let index = project.index().unwrap();
    let path_of = |key: &str| index.relative_path(index.find(key).unwrap().id);
    assert_eq!(path_of(MAIN_SWIFT), "Tool/main.swift");
    assert_eq!(
        path_of(MESSAGES_EN),
        "Tool/Messages.strings/en.lproj/Messages.strings"
    );
    assert_eq!(
        path_of(FOUNDATION),
        "System/Library/Frameworks/Foundation.framework"
    );
    Ok(())
}

#[test]
fn test_openstep_file_kinds() -> anyhow::Result<()> {
    let project = parsed_tool()?;
    let index = project.index().unwrap();
    assert_eq!(
        index.find_as::<FileReference>(FOUNDATION).unwrap().kind,
        FileKind::Framework
    );
    assert!(index.objects_with_isa(Isa::FrameworksBuildPhase).is_empty());
    Ok(())
}
