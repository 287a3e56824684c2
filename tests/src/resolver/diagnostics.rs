//! Records the resolver skips, and the single fatal condition.

use pbxproj_objects::{errors::RecordError, nodes::Isa, value::Value};
use pbxproj_resolver::errors::{Diagnostic, ResolveError, RootDefect};

use crate::utils::{
    file, group, keys, project, record, resolve, strings, table, try_resolve, variant_group,
};

mod skipped_children {
    use super::*;

    #[test]
    fn test_dangling_child_is_skipped() {
        let objects = table(&[
            ("P", project("M")),
            ("M", group(None, &["A", "GONE", "B"])),
            ("A", file("a.swift")),
            ("B", file("b.swift")),
        ]);
        let index = resolve(&objects, "P");
        assert_eq!(keys(&index), vec!["M", "A", "B"]);
        assert_eq!(
            index.diagnostics(),
            &[Diagnostic::DanglingReference {
                parent: "M".to_string(),
                key: "GONE".to_string(),
            }]
        );
    }

    #[test]
    fn test_unknown_future_type_is_skipped() {
        let objects = table(&[
            ("P", project("M")),
            ("M", group(None, &["U", "A"])),
            ("U", record("PBXUnknownFutureType", &[("children", strings(&["A"]))])),
            ("A", file("a.swift")),
        ]);
        let index = resolve(&objects, "P");
        assert_eq!(keys(&index), vec!["M", "A"]);
        assert_eq!(
            index.diagnostics(),
            &[Diagnostic::UnknownDiscriminator {
                key: "U".to_string(),
                isa: Some("PBXUnknownFutureType".to_string()),
            }]
        );
    }

    #[test]
    fn test_record_without_isa_is_skipped() {
        let objects = table(&[
            ("P", project("M")),
            ("M", group(None, &["N"])),
            ("N", [("path", "x")].into_iter().collect::<Value>()),
        ]);
        let index = resolve(&objects, "P");
        assert_eq!(index.len(), 1);
        assert_eq!(
            index.diagnostics()[0].to_string(),
            "skipped `N` with unknown isa (none)"
        );
    }

    #[test]
    fn test_malformed_record_is_skipped_with_siblings_kept() {
        let objects = table(&[
            ("P", project("M")),
            ("M", group(None, &["V", "A"])),
            ("V", record("PBXVariantGroup", &[("children", strings(&[]))])),
            ("A", file("a.swift")),
        ]);
        let index = resolve(&objects, "P");
        assert_eq!(keys(&index), vec!["M", "A"]);
        assert_eq!(
            index.diagnostics(),
            &[Diagnostic::MalformedRecord(RecordError::MissingField {
                key: "V".to_string(),
                isa: Isa::VariantGroup,
                field: "name",
            })]
        );
    }

    #[test]
    fn test_non_record_entry_is_skipped() {
        let objects = table(&[
            ("P", project("M")),
            ("M", group(None, &["S"])),
            ("S", "not a record".into()),
        ]);
        let index = resolve(&objects, "P");
        assert_eq!(index.len(), 1);
        assert_eq!(index.diagnostics()[0].key(), "S");
    }

    #[test]
    fn test_nested_project_is_skipped() {
        let objects = table(&[
            ("P", project("M")),
            ("M", group(None, &["Q"])),
            ("Q", project("M2")),
            ("M2", group(None, &[])),
        ]);
        let index = resolve(&objects, "P");
        assert_eq!(keys(&index), vec!["M"]);
        assert!(matches!(
            &index.diagnostics()[0],
            Diagnostic::NestedProject { key, .. } if key == "Q"
        ));
    }

    #[test]
    fn test_diagnostics_follow_traversal_order() {
        let objects = table(&[
            ("P", project("M")),
            ("M", group(None, &["A", "Z"])),
            ("A", group(Some("a"), &["MISSING"])),
            ("Z", record("PBXFutureGroup", &[])),
        ]);
        let index = resolve(&objects, "P");
        let skipped: Vec<&str> = index.diagnostics().iter().map(Diagnostic::key).collect();
        assert_eq!(skipped, vec!["MISSING", "Z"]);
    }
}

mod cycles {
    use super::*;

    #[test]
    fn test_main_group_containing_itself_terminates() {
        let objects = table(&[
            ("P", project("M")),
            ("M", group(None, &["A", "M"])),
            ("A", file("a.swift")),
        ]);
        let index = resolve(&objects, "P");
        assert_eq!(keys(&index), vec!["M", "A"]);
        assert_eq!(
            index.diagnostics(),
            &[Diagnostic::CyclicReference {
                parent: "M".to_string(),
                key: "M".to_string(),
            }]
        );
    }

    #[test]
    fn test_transitive_cycle_terminates() {
        let objects = table(&[
            ("P", project("M")),
            ("M", group(None, &["A"])),
            ("A", group(Some("a"), &["V"])),
            ("V", variant_group("Main.storyboard", &["M", "F"])),
            ("F", file("Base.lproj/Main.storyboard")),
        ]);
        let index = resolve(&objects, "P");
        assert_eq!(keys(&index), vec!["M", "A", "V", "F"]);
        assert_eq!(
            index.diagnostics(),
            &[Diagnostic::CyclicReference {
                parent: "V".to_string(),
                key: "M".to_string(),
            }]
        );
    }

    #[test]
    fn test_group_listing_the_root_is_cyclic() {
        let objects = table(&[("P", project("M")), ("M", group(None, &["P"]))]);
        let index = resolve(&objects, "P");
        assert_eq!(index.len(), 1);
        assert!(matches!(
            &index.diagnostics()[0],
            Diagnostic::CyclicReference { key, .. } if key == "P"
        ));
    }
}

mod duplicates {
    use super::*;

    #[test]
    fn test_later_references_are_reported_as_duplicates() {
        let objects = table(&[
            ("P", project("G")),
            ("G", group(None, &["F", "F", "H"])),
            ("H", group(Some("h"), &["F"])),
            ("F", file("f.swift")),
        ]);
        let index = resolve(&objects, "P");
        assert_eq!(
            index.diagnostics(),
            &[
                Diagnostic::DuplicateReference {
                    parent: "G".to_string(),
                    key: "F".to_string(),
                },
                Diagnostic::DuplicateReference {
                    parent: "H".to_string(),
                    key: "F".to_string(),
                },
            ]
        );
        assert_eq!(
            index.diagnostics()[1].to_string(),
            "`H` references `F`, already attached under another parent"
        );
    }

    #[test]
    fn test_shared_subtree_is_expanded_once() {
        let objects = table(&[
            ("P", project("M")),
            ("M", group(None, &["A", "B"])),
            ("A", group(Some("a"), &["S"])),
            ("B", group(Some("b"), &["S"])),
            ("S", group(Some("s"), &["GONE"])),
        ]);
        let index = resolve(&objects, "P");
        assert_eq!(keys(&index), vec!["M", "A", "S", "B"]);
        let skipped: Vec<&str> = index.diagnostics().iter().map(Diagnostic::key).collect();
        assert_eq!(skipped, vec!["GONE", "S"]);
    }
}

mod malformed_root {
    use super::*;

    fn defect(objects: &pbxproj_objects::table::ObjectTable, root: &str) -> RootDefect {
        let ResolveError::MalformedRoot { defect, .. } = try_resolve(objects, root).unwrap_err();
        defect
    }

    #[test]
    fn test_missing_root() {
        let objects = table(&[("M", group(None, &[]))]);
        assert_eq!(defect(&objects, "P"), RootDefect::Missing);
    }

    #[test]
    fn test_root_is_not_a_record() {
        let objects = table(&[("P", strings(&["M"]))]);
        assert_eq!(
            defect(&objects, "P"),
            RootDefect::NotARecord { found: "list" }
        );
    }

    #[test]
    fn test_root_is_not_a_project() {
        let objects = table(&[("P", group(None, &[]))]);
        let err = try_resolve(&objects, "P").unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed root object `P`: its isa is `PBXGroup`, expected `PBXProject`"
        );
    }

    #[test]
    fn test_root_without_isa() {
        let objects = table(&[("P", [("mainGroup", "M")].into_iter().collect::<Value>())]);
        assert_eq!(
            defect(&objects, "P"),
            RootDefect::NotAProject { isa: None }
        );
    }

    #[test]
    fn test_dangling_main_group_is_not_fatal() {
        let objects = table(&[("P", project("M"))]);
        let index = resolve(&objects, "P");
        assert!(index.is_empty());
        assert_eq!(index.diagnostics().len(), 1);
    }
}
