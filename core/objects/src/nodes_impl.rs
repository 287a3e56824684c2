//! Constructors that turn raw records into typed objects.
//!
//! Required fields that are missing or mistyped produce a [`RecordError`].
//! Optional fields fall back to their default when missing *or* mistyped, so
//! that a single odd value written by a newer tool does not drop the object.
//! Back-references are not part of the typed objects; the arena records them
//! when the resolver attaches a node.

use crate::{
    errors::RecordError,
    nodes::{
        AnyObject, BuildConfiguration, BuildFile, ConfigurationList, FileKind, FileReference,
        FrameworksBuildPhase, Group, Isa, NativeTarget, ProductType, Project, ResourcesBuildPhase,
        ShellScriptBuildPhase, SourcesBuildPhase, VariantGroup,
    },
    value::{Record, Value},
};

const DEFAULT_SOURCE_TREE: &str = "<group>";

/// Typed field access over one record, carrying enough context for errors.
struct Fields<'a> {
    key: &'a str,
    isa: Isa,
    record: &'a Record,
}

impl<'a> Fields<'a> {
    fn new(key: &'a str, isa: Isa, record: &'a Record) -> Self {
        Self { key, isa, record }
    }

    fn required<T>(
        &self,
        field: &'static str,
        expected: &'static str,
        convert: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<T, RecordError> {
        let value = self
            .record
            .get(field)
            .ok_or_else(|| RecordError::MissingField {
                key: self.key.to_owned(),
                isa: self.isa,
                field,
            })?;
        convert(value).ok_or_else(|| RecordError::WrongType {
            key: self.key.to_owned(),
            isa: self.isa,
            field,
            expected,
            found: value.type_name(),
        })
    }

    fn required_str(&self, field: &'static str) -> Result<String, RecordError> {
        self.required(field, "a string", |value| value.as_str().map(str::to_owned))
    }

    fn required_strings(&self, field: &'static str) -> Result<Vec<String>, RecordError> {
        self.required(field, "a list of strings", Value::as_string_list)
    }

    fn optional_str(&self, field: &str) -> Option<String> {
        self.record
            .get(field)
            .and_then(Value::as_str)
            .map(str::to_owned)
    }

    fn optional_strings(&self, field: &str) -> Vec<String> {
        self.record
            .get(field)
            .and_then(Value::as_string_list)
            .unwrap_or_default()
    }

    fn optional_int(&self, field: &str) -> Option<i64> {
        self.record.get(field).and_then(Value::as_int)
    }

    fn optional_bool(&self, field: &str) -> Option<bool> {
        self.record.get(field).and_then(Value::as_bool)
    }

    fn source_tree(&self) -> String {
        self.optional_str("sourceTree")
            .unwrap_or_else(|| DEFAULT_SOURCE_TREE.to_owned())
    }
}

impl Project {
    /// Builds the project root. Every field is optional; `path` is left empty
    /// and filled in by whoever knows where the bundle lives.
    #[must_use]
    pub fn from_record(key: &str, record: &Record) -> Self {
        let fields = Fields::new(key, Isa::Project, record);
        Project {
            key: key.to_owned(),
            development_region: fields.optional_str("developmentRegion"),
            known_regions: fields.optional_strings("knownRegions"),
            project_dir_path: fields.optional_str("projectDirPath").unwrap_or_default(),
            main_group: fields.optional_str("mainGroup"),
            path: None,
        }
    }
}

impl Group {
    /// # Errors
    ///
    /// Fails when `children` is missing or is not a list of strings.
    pub fn from_record(key: &str, record: &Record) -> Result<Self, RecordError> {
        let fields = Fields::new(key, Isa::Group, record);
        Ok(Group {
            key: key.to_owned(),
            path: fields.optional_str("path"),
            name: fields.optional_str("name"),
            source_tree: fields.source_tree(),
            children: fields.required_strings("children")?,
        })
    }
}

impl VariantGroup {
    /// # Errors
    ///
    /// Fails when `name` or `children` is missing or mistyped.
    pub fn from_record(key: &str, record: &Record) -> Result<Self, RecordError> {
        let fields = Fields::new(key, Isa::VariantGroup, record);
        Ok(VariantGroup {
            key: key.to_owned(),
            name: fields.required_str("name")?,
            source_tree: fields.source_tree(),
            children: fields.required_strings("children")?,
        })
    }
}

impl FileReference {
    #[must_use]
    pub fn from_record(key: &str, record: &Record) -> Self {
        let fields = Fields::new(key, Isa::FileReference, record);
        let last_known_file_type = fields.optional_str("lastKnownFileType");
        let explicit_file_type = fields.optional_str("explicitFileType");
        // Build products only carry `explicitFileType`.
        let kind = last_known_file_type
            .as_deref()
            .or(explicit_file_type.as_deref())
            .map_or(FileKind::Unknown, FileKind::from_raw);
        FileReference {
            key: key.to_owned(),
            path: fields.optional_str("path"),
            name: fields.optional_str("name"),
            explicit_file_type,
            last_known_file_type,
            file_encoding: fields.optional_int("fileEncoding").unwrap_or(0),
            source_tree: fields.source_tree(),
            kind,
        }
    }
}

impl BuildFile {
    /// # Errors
    ///
    /// Fails when `fileRef` is missing or is not a string.
    pub fn from_record(key: &str, record: &Record) -> Result<Self, RecordError> {
        let fields = Fields::new(key, Isa::BuildFile, record);
        Ok(BuildFile {
            key: key.to_owned(),
            file_ref: fields.required_str("fileRef")?,
        })
    }
}

impl NativeTarget {
    /// # Errors
    ///
    /// Fails when `name` is missing or is not a string.
    pub fn from_record(key: &str, record: &Record) -> Result<Self, RecordError> {
        let fields = Fields::new(key, Isa::NativeTarget, record);
        Ok(NativeTarget {
            key: key.to_owned(),
            name: fields.required_str("name")?,
            product_name: fields.optional_str("productName"),
            product_type: fields
                .optional_str("productType")
                .map_or(ProductType::Unknown, |raw| ProductType::from_raw(&raw)),
            build_phases: fields.optional_strings("buildPhases"),
            build_configuration_list: fields.optional_str("buildConfigurationList"),
        })
    }
}

impl FrameworksBuildPhase {
    #[must_use]
    pub fn from_record(key: &str, record: &Record) -> Self {
        let fields = Fields::new(key, Isa::FrameworksBuildPhase, record);
        FrameworksBuildPhase {
            key: key.to_owned(),
            build_action_mask: fields.optional_int("buildActionMask").unwrap_or(0),
            files: fields.optional_strings("files"),
            run_only_for_deployment_postprocessing: fields
                .optional_bool("runOnlyForDeploymentPostprocessing")
                .unwrap_or(false),
        }
    }
}

impl AnyObject {
    /// Runs the constructor selected by `isa` over `record`.
    ///
    /// Kinds whose contents are not modeled become shallow objects carrying
    /// only their identifier.
    ///
    /// # Errors
    ///
    /// Returns the constructor's [`RecordError`] when a required field is
    /// missing or mistyped.
    pub fn from_record(isa: Isa, key: &str, record: &Record) -> Result<Self, RecordError> {
        let key_owned = || key.to_owned();
        let object = match isa {
            Isa::Project => Project::from_record(key, record).into(),
            Isa::Group => Group::from_record(key, record)?.into(),
            Isa::VariantGroup => VariantGroup::from_record(key, record)?.into(),
            Isa::FileReference => FileReference::from_record(key, record).into(),
            Isa::BuildFile => BuildFile::from_record(key, record)?.into(),
            Isa::NativeTarget => NativeTarget::from_record(key, record)?.into(),
            Isa::FrameworksBuildPhase => FrameworksBuildPhase::from_record(key, record).into(),
            Isa::ResourcesBuildPhase => ResourcesBuildPhase { key: key_owned() }.into(),
            Isa::ShellScriptBuildPhase => ShellScriptBuildPhase { key: key_owned() }.into(),
            Isa::SourcesBuildPhase => SourcesBuildPhase { key: key_owned() }.into(),
            Isa::BuildConfiguration => BuildConfiguration { key: key_owned() }.into(),
            Isa::ConfigurationList => ConfigurationList { key: key_owned() }.into(),
        };
        Ok(object)
    }

    /// Identifiers the resolver descends into from this object, in declared
    /// order: a container's `children` or a frameworks phase's `files`.
    #[must_use]
    pub fn child_keys(&self) -> &[String] {
        match self {
            AnyObject::Group(group) => &group.children,
            AnyObject::VariantGroup(variant_group) => &variant_group.children,
            AnyObject::FrameworksBuildPhase(phase) => &phase.files,
            _ => &[],
        }
    }

    /// The component this object contributes to a relative path.
    ///
    /// Groups and file references contribute their `path`, variant groups
    /// their `name`. Empty components count as absent.
    #[must_use]
    pub fn path_component(&self) -> Option<&str> {
        let component = match self {
            AnyObject::Group(group) => group.path.as_deref(),
            AnyObject::VariantGroup(variant_group) => Some(variant_group.name.as_str()),
            AnyObject::FileReference(file_reference) => file_reference.path.as_deref(),
            _ => None,
        };
        component.filter(|component| !component.is_empty())
    }

    #[must_use]
    pub fn is_container(&self) -> bool {
        self.isa().is_container()
    }
}
